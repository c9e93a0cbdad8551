//! Roster data model and statistics shared across the runtime and clients.
//!
//! `roster-core` defines the canonical player/record types, the coercion rules
//! applied to raw form input, and the pure aggregation functions used to derive
//! career statistics. Nothing in this crate performs I/O.
pub mod directory;
pub mod error;
pub mod ids;
pub mod input;
pub mod player;
pub mod record;
pub mod stats;

pub use directory::{KNOWN_PLAYERS, PlayerProfile, find_known_player, search_fallback_url};
pub use error::{InputError, InputField};
pub use ids::{PlayerId, RecordId};
pub use input::{NewPlayer, RecordInput, parse_count, parse_overs};
pub use player::Player;
pub use record::MatchRecord;
pub use stats::{DetailedStats, Summary, detailed_stats, summarize};
