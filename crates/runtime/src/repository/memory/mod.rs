//! In-memory repository implementation.

mod roster;

pub use roster::InMemoryRosterRepository;
