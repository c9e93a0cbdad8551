//! Builds the runtime and config bundle used by front-ends.
use anyhow::{Context, Result};
use runtime::{FileRosterRepository, InMemoryRosterRepository, Runtime, StaticDirectory};

use crate::config::RuntimeConfig;

/// Builder that assembles the roster runtime from a [`RuntimeConfig`].
pub struct RuntimeBuilder {
    config: RuntimeConfig,
}

impl RuntimeBuilder {
    pub fn new(config: RuntimeConfig) -> Self {
        Self { config }
    }

    pub fn build(self) -> Result<RuntimeSetup> {
        let directory = StaticDirectory::new(self.config.lookup_latency);
        let builder = Runtime::builder().directory(directory);

        let builder = if self.config.enable_persistence {
            let repository =
                FileRosterRepository::new(&self.config.data_dir, &self.config.storage_key)
                    .with_context(|| {
                        format!(
                            "failed to prepare data directory {}",
                            self.config.data_dir.display()
                        )
                    })?;
            tracing::info!("Persisting roster to {}", repository.path().display());
            builder.repository(repository)
        } else {
            tracing::info!("Persistence disabled, roster is kept in memory");
            builder.repository(InMemoryRosterRepository::new())
        };

        let runtime = builder.build().context("failed to build runtime")?;

        Ok(RuntimeSetup {
            config: self.config,
            runtime,
        })
    }
}

pub struct RuntimeSetup {
    pub config: RuntimeConfig,
    pub runtime: Runtime,
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use roster_core::NewPlayer;

    use super::*;

    fn config(dir: &std::path::Path, persist: bool) -> RuntimeConfig {
        RuntimeConfig {
            data_dir: dir.to_path_buf(),
            enable_persistence: persist,
            lookup_latency: Duration::ZERO,
            ..RuntimeConfig::default()
        }
    }

    #[test]
    fn persistent_runtime_writes_to_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config(dir.path(), true);
        let path = cfg.storage_path();

        let mut setup = RuntimeBuilder::new(cfg).build().unwrap();
        setup
            .runtime
            .store
            .add_player(NewPlayer::new("Test", "Batsman", "India").unwrap())
            .unwrap();

        assert!(path.exists());
    }

    #[test]
    fn in_memory_runtime_leaves_disk_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config(dir.path(), false);
        let path = cfg.storage_path();

        let mut setup = RuntimeBuilder::new(cfg).build().unwrap();
        setup
            .runtime
            .store
            .add_player(NewPlayer::new("Test", "Batsman", "India").unwrap())
            .unwrap();

        assert!(!path.exists());
        assert_eq!(setup.runtime.store.len(), 1);
    }
}
