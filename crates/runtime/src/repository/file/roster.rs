//! File-based RosterRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use roster_core::Player;

use crate::repository::{RepositoryError, Result, RosterRepository};

/// Storage key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "cricTrack_players";

/// File-based implementation of RosterRepository.
///
/// The roster lives in `{base_dir}/{key}.json`. Saves go through a sibling
/// `.json.tmp` file followed by a rename, so a crash mid-write leaves the
/// previous document intact.
pub struct FileRosterRepository {
    path: PathBuf,
}

impl FileRosterRepository {
    /// Create a repository rooted at `base_dir`, creating the directory if needed.
    pub fn new(base_dir: impl AsRef<Path>, key: &str) -> Result<Self> {
        let base_dir = base_dir.as_ref();
        fs::create_dir_all(base_dir).map_err(RepositoryError::Io)?;
        Ok(Self {
            path: base_dir.join(format!("{key}.json")),
        })
    }

    /// Path of the roster document.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RosterRepository for FileRosterRepository {
    fn load(&self) -> Result<Option<Vec<Player>>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&self.path).map_err(RepositoryError::Io)?;
        let players: Vec<Player> = serde_json::from_slice(&bytes)?;

        tracing::debug!(
            "Loaded {} players from {}",
            players.len(),
            self.path.display()
        );

        Ok(Some(players))
    }

    fn save(&self, players: &[Player]) -> Result<()> {
        let temp_path = self.path.with_extension("json.tmp");
        let bytes = serde_json::to_vec(players)?;

        fs::write(&temp_path, bytes).map_err(RepositoryError::Io)?;
        fs::rename(&temp_path, &self.path).map_err(RepositoryError::Io)?;

        tracing::debug!(
            "Saved {} players to {}",
            players.len(),
            self.path.display()
        );

        Ok(())
    }
}
