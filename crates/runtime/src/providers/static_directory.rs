use std::time::Duration;

use async_trait::async_trait;

use roster_core::{PlayerProfile, find_known_player};

use super::directory::{DirectoryError, PlayerDirectory};

pub const DEFAULT_LOOKUP_LATENCY: Duration = Duration::from_millis(1500);

/// Built-in directory backed by the static known-player table.
///
/// Sleeps for `latency` before answering to mimic a remote service.
#[derive(Debug, Clone, Copy)]
pub struct StaticDirectory {
    latency: Duration,
}

impl StaticDirectory {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for StaticDirectory {
    fn default() -> Self {
        Self::new(DEFAULT_LOOKUP_LATENCY)
    }
}

#[async_trait]
impl PlayerDirectory for StaticDirectory {
    async fn find(&self, name: &str) -> Result<Option<PlayerProfile>, DirectoryError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        let profile = find_known_player(name);
        tracing::debug!("Directory lookup for {:?}: found={}", name, profile.is_some());
        Ok(profile)
    }
}
