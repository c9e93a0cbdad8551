//! Runtime configuration structures and loaders.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use runtime::{DEFAULT_LOOKUP_LATENCY, DEFAULT_STORAGE_KEY};

/// Fallback data directory when the platform has no home directory.
const FALLBACK_DATA_DIR: &str = "crictrack_data";

/// Configuration required to bootstrap a client runtime.
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    pub data_dir: PathBuf,
    pub storage_key: String,
    pub enable_persistence: bool,
    pub lookup_latency: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            enable_persistence: true,
            lookup_latency: DEFAULT_LOOKUP_LATENCY,
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CRICTRACK_DATA_DIR` - Directory holding the roster file (default: platform data dir)
    /// - `CRICTRACK_STORAGE_KEY` - Roster file stem (default: `cricTrack_players`)
    /// - `ENABLE_PERSISTENCE` - Persist to disk; `false` keeps the roster in memory (default: true)
    /// - `LOOKUP_LATENCY_MS` - Simulated player lookup delay (default: 1500)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("CRICTRACK_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }

        if let Ok(key) = env::var("CRICTRACK_STORAGE_KEY") {
            let key = key.trim();
            if !key.is_empty() {
                config.storage_key = key.to_string();
            }
        }

        if let Some(enable) = read_env::<bool>("ENABLE_PERSISTENCE") {
            config.enable_persistence = enable;
        }

        if let Some(ms) = read_env::<u64>("LOOKUP_LATENCY_MS") {
            config.lookup_latency = Duration::from_millis(ms);
        }

        config
    }

    /// Path of the roster document this configuration points at.
    pub fn storage_path(&self) -> PathBuf {
        self.data_dir.join(format!("{}.json", self.storage_key))
    }
}

fn default_data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "crictrack")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(FALLBACK_DATA_DIR))
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_legacy_storage_key() {
        let config = RuntimeConfig::default();
        assert_eq!(config.storage_key, "cricTrack_players");
        assert!(config.enable_persistence);
        assert_eq!(config.lookup_latency, Duration::from_millis(1500));
    }

    #[test]
    fn storage_path_joins_key() {
        let config = RuntimeConfig {
            data_dir: PathBuf::from("/tmp/roster"),
            ..RuntimeConfig::default()
        };
        assert_eq!(
            config.storage_path(),
            PathBuf::from("/tmp/roster/cricTrack_players.json")
        );
    }
}
