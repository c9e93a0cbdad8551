//! Unified error type surfaced by the runtime.
//!
//! Wraps repository failures and builder misconfiguration so front-ends can
//! bubble them up with consistent context.
use thiserror::Error;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("runtime requires a roster repository before building")]
    MissingRepository,

    #[error("runtime requires a player directory before building")]
    MissingDirectory,
}
