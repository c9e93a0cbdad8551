//! Runtime state for the roster tracker.
//!
//! This crate owns everything that changes while the tracker runs: the
//! [`Store`] holding every player, the repositories that persist it, and the
//! player directory used to pre-fill new profiles. Consumers assemble a
//! [`Runtime`] through [`RuntimeBuilder`] and hand it to a front-end.
//!
//! Modules are organized by responsibility:
//! - [`store`] hosts the in-memory roster and its mutation contract
//! - [`repository`] provides persistence adapters (file and in-memory)
//! - [`providers`] exposes the injectable player directory
//! - [`runtime`] bundles the pieces for a front-end
pub mod error;
pub mod providers;
pub mod repository;
pub mod runtime;
pub mod store;

pub use error::{Result, RuntimeError};
pub use providers::{DEFAULT_LOOKUP_LATENCY, DirectoryError, PlayerDirectory, StaticDirectory};
pub use repository::{
    DEFAULT_STORAGE_KEY, FileRosterRepository, InMemoryRosterRepository, RepositoryError,
    RosterRepository,
};
pub use runtime::{Runtime, RuntimeBuilder};
pub use store::Store;
