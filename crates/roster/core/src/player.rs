//! Tracked players and their match history.

use serde::{Deserialize, Serialize};

use crate::ids::PlayerId;
use crate::input::NewPlayer;
use crate::record::MatchRecord;

/// A tracked player.
///
/// `records` is ordered most-recent-first: new entries are inserted at the
/// front by [`Player::prepend_record`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub role: String,
    pub country: String,
    pub records: Vec<MatchRecord>,
}

impl Player {
    /// Create a player with no records.
    pub fn new(id: PlayerId, fields: NewPlayer) -> Self {
        let NewPlayer {
            name,
            role,
            country,
        } = fields;

        Self {
            id,
            name,
            role,
            country,
            records: Vec::new(),
        }
    }

    /// Insert a record at the front of the history.
    pub fn prepend_record(&mut self, record: MatchRecord) {
        self.records.insert(0, record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::RecordId;

    fn record(id: &str, runs: u32) -> MatchRecord {
        MatchRecord {
            id: RecordId::from(id),
            opponent: "X".into(),
            runs,
            balls: 0,
            wickets: 0,
            overs: 0.0,
            date: "2024-01-01".into(),
        }
    }

    #[test]
    fn prepend_puts_newest_first() {
        let fields = NewPlayer::new("Test", "Batsman", "India").unwrap();
        let mut player = Player::new(PlayerId::from("p1"), fields);

        player.prepend_record(record("r2", 10));
        player.prepend_record(record("r1", 20));
        player.prepend_record(record("r3", 30));

        let order: Vec<_> = player.records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(order, ["r3", "r1", "r2"]);
    }
}
