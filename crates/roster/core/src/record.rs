//! A single match performance entry.

use serde::{Deserialize, Serialize};

use crate::ids::RecordId;
use crate::input::{RecordInput, parse_count, parse_overs};

/// One match's batting and bowling figures for a player.
///
/// A record belongs to exactly one player for its whole lifetime; it is never
/// moved between players or shared.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: RecordId,
    pub opponent: String,
    pub runs: u32,
    pub balls: u32,
    pub wickets: u32,
    pub overs: f64,
    pub date: String,
}

impl MatchRecord {
    /// Build a record from raw form text, coercing numeric fields.
    ///
    /// Text fields are stored trimmed but otherwise as given; callers that want
    /// presence checks run [`RecordInput::validate`] first.
    pub fn from_input(id: RecordId, input: &RecordInput) -> Self {
        Self {
            id,
            opponent: input.opponent.trim().to_owned(),
            runs: parse_count(&input.runs),
            balls: parse_count(&input.balls),
            wickets: parse_count(&input.wickets),
            overs: parse_overs(&input.overs),
            date: input.date.trim().to_owned(),
        }
    }

    /// Batting figure as displayed in the match history, e.g. `45 (30)`.
    pub fn batting_line(&self) -> String {
        format!("{} ({})", self.runs, self.balls)
    }

    /// Bowling figure as displayed in the match history, e.g. `2 / 4`.
    pub fn bowling_line(&self) -> String {
        format!("{} / {}", self.wickets, self.overs)
    }
}
