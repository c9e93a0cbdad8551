//! Trait describing a runnable client front-end.
use anyhow::Result;
use async_trait::async_trait;
use runtime::Runtime;

/// Frontend abstraction for UI layers.
///
/// A frontend takes ownership of the assembled [`Runtime`] (store plus player
/// directory) and drives it until the user quits. The store has exactly one
/// owner for the lifetime of the process, and it is the frontend's session.
///
/// # Implementations
///
/// - `CliFrontend`: Terminal-based UI (ratatui + crossterm)
#[async_trait]
pub trait Frontend: Send {
    /// Run the frontend event loop.
    ///
    /// Blocks until the user quits the application.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend encounters a fatal error, such as a
    /// terminal I/O failure.
    async fn run(&mut self, runtime: Runtime) -> Result<()>;
}
