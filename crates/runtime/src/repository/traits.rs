//! Repository contract for saving and loading the roster.

use roster_core::Player;

use super::Result;

/// Storage for the full player collection.
///
/// Implementations persist the collection as a single document:
/// ```text
/// [ { id, name, role, country, records: [ { id, opponent, runs, balls,
///     wickets, overs, date } ] } ]
/// ```
/// There is no version field; a document that no longer matches this shape
/// fails to load as a whole.
pub trait RosterRepository: Send + Sync {
    /// Load the stored collection.
    ///
    /// Returns `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> Result<Option<Vec<Player>>>;

    /// Replace the stored collection with `players`.
    fn save(&self, players: &[Player]) -> Result<()>;
}
