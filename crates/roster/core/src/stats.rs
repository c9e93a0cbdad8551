//! Career statistics derived from a player's match history.
//!
//! Everything here is a pure function of the record list: no caching, no
//! persisted totals. An empty history yields all-zero results.

use crate::player::Player;
use crate::record::MatchRecord;

/// Dashboard-level totals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub matches: usize,
    pub total_runs: u64,
    pub total_wickets: u64,
}

/// Profile-level totals, adding the best batting score.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DetailedStats {
    pub matches: usize,
    pub total_runs: u64,
    pub total_wickets: u64,
    pub highest_score: u32,
}

impl DetailedStats {
    pub fn summary(&self) -> Summary {
        Summary {
            matches: self.matches,
            total_runs: self.total_runs,
            total_wickets: self.total_wickets,
        }
    }
}

/// Match count plus run and wicket totals.
pub fn summarize(player: &Player) -> Summary {
    summarize_records(&player.records)
}

/// [`summarize`] plus the highest single-match score (0 with no records).
pub fn detailed_stats(player: &Player) -> DetailedStats {
    detailed_records(&player.records)
}

pub fn summarize_records(records: &[MatchRecord]) -> Summary {
    detailed_records(records).summary()
}

pub fn detailed_records(records: &[MatchRecord]) -> DetailedStats {
    records.iter().fold(
        DetailedStats {
            matches: records.len(),
            ..DetailedStats::default()
        },
        |mut acc, record| {
            acc.total_runs += u64::from(record.runs);
            acc.total_wickets += u64::from(record.wickets);
            acc.highest_score = acc.highest_score.max(record.runs);
            acc
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::{PlayerId, RecordId};
    use crate::input::NewPlayer;

    fn player_with(scores: &[(u32, u32)]) -> Player {
        let mut player = Player::new(
            PlayerId::from("p1"),
            NewPlayer::new("Test", "Batsman", "India").unwrap(),
        );
        for (idx, (runs, wickets)) in scores.iter().enumerate() {
            player.prepend_record(MatchRecord {
                id: RecordId::from(format!("r{idx}")),
                opponent: "X".into(),
                runs: *runs,
                balls: 0,
                wickets: *wickets,
                overs: 0.0,
                date: "2024-01-01".into(),
            });
        }
        player
    }

    #[test]
    fn empty_history_is_all_zero() {
        let player = player_with(&[]);
        assert_eq!(summarize(&player), Summary::default());
        assert_eq!(detailed_stats(&player), DetailedStats::default());
    }

    #[test]
    fn totals_and_highest_score() {
        let player = player_with(&[(45, 0), (12, 3), (78, 1)]);

        assert_eq!(
            summarize(&player),
            Summary {
                matches: 3,
                total_runs: 135,
                total_wickets: 4,
            }
        );
        assert_eq!(detailed_stats(&player).highest_score, 78);
    }

    #[test]
    fn single_record_scenario() {
        let player = player_with(&[(45, 0)]);
        assert_eq!(
            detailed_stats(&player),
            DetailedStats {
                matches: 1,
                total_runs: 45,
                total_wickets: 0,
                highest_score: 45,
            }
        );
    }

    #[test]
    fn aggregation_is_idempotent() {
        let player = player_with(&[(3, 1), (50, 2)]);
        assert_eq!(summarize(&player), summarize(&player));
        assert_eq!(detailed_stats(&player), detailed_stats(&player));
    }

    #[test]
    fn totals_do_not_overflow() {
        let player = player_with(&[(u32::MAX, u32::MAX), (u32::MAX, 1)]);
        let stats = detailed_stats(&player);
        assert_eq!(stats.total_runs, 2 * u64::from(u32::MAX));
        assert_eq!(stats.highest_score, u32::MAX);
    }
}
