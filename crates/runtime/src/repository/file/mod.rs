//! File-based repository implementation.

mod roster;

pub use roster::{DEFAULT_STORAGE_KEY, FileRosterRepository};
