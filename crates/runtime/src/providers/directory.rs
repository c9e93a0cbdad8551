use async_trait::async_trait;
use thiserror::Error;

use roster_core::PlayerProfile;

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("player directory unavailable: {0}")]
    Unavailable(String),
}

/// Source of known-player profiles keyed by name.
///
/// Implementations may be slow (network, simulated latency) so the front-end
/// calls them off the render loop.
#[async_trait]
pub trait PlayerDirectory: Send + Sync {
    /// Resolve `name` to a profile, or `Ok(None)` when the directory has no
    /// entry for it.
    async fn find(&self, name: &str) -> Result<Option<PlayerProfile>, DirectoryError>;
}
