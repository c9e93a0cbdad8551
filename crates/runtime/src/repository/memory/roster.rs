//! In-memory RosterRepository implementation for tests and throwaway sessions.

use std::sync::RwLock;

use roster_core::Player;

use crate::repository::{RepositoryError, Result, RosterRepository};

/// In-memory implementation of RosterRepository.
///
/// The collection is kept as serialized JSON rather than as values, so a
/// save/load cycle goes through the same encoding as the file repository.
pub struct InMemoryRosterRepository {
    document: RwLock<Option<String>>,
}

impl InMemoryRosterRepository {
    /// Create an empty repository (nothing saved yet).
    pub fn new() -> Self {
        Self {
            document: RwLock::new(None),
        }
    }

    /// Create a repository pre-seeded with a raw stored document.
    pub fn with_document(document: impl Into<String>) -> Self {
        Self {
            document: RwLock::new(Some(document.into())),
        }
    }
}

impl Default for InMemoryRosterRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl RosterRepository for InMemoryRosterRepository {
    fn load(&self) -> Result<Option<Vec<Player>>> {
        let document = self
            .document
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        match document.as_deref() {
            Some(json) => Ok(Some(serde_json::from_str(json)?)),
            None => Ok(None),
        }
    }

    fn save(&self, players: &[Player]) -> Result<()> {
        let json = serde_json::to_string(players)?;
        let mut document = self
            .document
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *document = Some(json);
        Ok(())
    }
}
