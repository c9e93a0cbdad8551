//! Services that sit between the session and injected runtime capabilities.

pub mod lookup;

pub use lookup::{LookupFeedback, LookupOutcome, LookupRequest, LookupResult, lookup_player};
