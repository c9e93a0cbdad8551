//! Player directory providers used to auto-fill new players.

pub mod directory;
pub mod static_directory;

pub use directory::{DirectoryError, PlayerDirectory};
pub use static_directory::{DEFAULT_LOOKUP_LATENCY, StaticDirectory};
