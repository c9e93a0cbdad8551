//! Repository layer for the persisted roster.
//!
//! A repository stores the whole player collection as one JSON document under
//! a fixed key. There is no partial update: every save rewrites the document.

mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::{DEFAULT_STORAGE_KEY, FileRosterRepository};
pub use memory::InMemoryRosterRepository;
pub use traits::RosterRepository;
