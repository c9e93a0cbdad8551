//! Runtime assembly.
//!
//! The runtime bundles the roster [`Store`] with the [`PlayerDirectory`] used
//! for auto-fill, and exposes a builder so clients can pick their own
//! repository and directory implementations.

use std::sync::Arc;

use crate::error::{Result, RuntimeError};
use crate::providers::PlayerDirectory;
use crate::repository::RosterRepository;
use crate::store::Store;

pub struct Runtime {
    pub store: Store,
    pub directory: Arc<dyn PlayerDirectory>,
}

impl Runtime {
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }
}

/// Builder for [`Runtime`]. Both the repository and directory are required.
#[derive(Default)]
pub struct RuntimeBuilder {
    repository: Option<Box<dyn RosterRepository>>,
    directory: Option<Arc<dyn PlayerDirectory>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self::default()
    }

    /// Set the repository the store loads from and saves to
    pub fn repository(mut self, repository: impl RosterRepository + 'static) -> Self {
        self.repository = Some(Box::new(repository));
        self
    }

    /// Set the player directory used for lookups
    pub fn directory(mut self, directory: impl PlayerDirectory + 'static) -> Self {
        self.directory = Some(Arc::new(directory));
        self
    }

    /// Load the store and assemble the runtime.
    pub fn build(self) -> Result<Runtime> {
        let repository = self.repository.ok_or(RuntimeError::MissingRepository)?;
        let directory = self.directory.ok_or(RuntimeError::MissingDirectory)?;

        let store = Store::load(repository);

        Ok(Runtime { store, directory })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::providers::StaticDirectory;
    use crate::repository::InMemoryRosterRepository;

    #[test]
    fn build_requires_repository() {
        let result = Runtime::builder()
            .directory(StaticDirectory::new(Duration::ZERO))
            .build();
        assert!(matches!(result, Err(RuntimeError::MissingRepository)));
    }

    #[test]
    fn build_requires_directory() {
        let result = Runtime::builder()
            .repository(InMemoryRosterRepository::new())
            .build();
        assert!(matches!(result, Err(RuntimeError::MissingDirectory)));
    }

    #[test]
    fn build_loads_store() {
        let runtime = Runtime::builder()
            .repository(InMemoryRosterRepository::new())
            .directory(StaticDirectory::new(Duration::ZERO))
            .build()
            .unwrap();
        assert!(runtime.store.is_empty());
    }
}
