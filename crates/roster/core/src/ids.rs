//! Opaque identifiers for players and match records.
//!
//! Both ids serialize as plain JSON strings. Fresh ids are UUID v4, which keeps
//! them distinct even when several entities are created within the same clock
//! tick; ids written by older data files (millisecond timestamps) are accepted
//! unchanged since the value is never interpreted.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! opaque_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Allocate a fresh, collision-resistant identifier.
            pub fn generate() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

opaque_id!(
    /// Identifier of a [`Player`](crate::Player), unique within the roster.
    PlayerId
);

opaque_id!(
    /// Identifier of a [`MatchRecord`](crate::MatchRecord).
    RecordId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_distinct() {
        let a = RecordId::generate();
        let b = RecordId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn legacy_timestamp_ids_deserialize() {
        let id: PlayerId = serde_json::from_str("\"1704067200000\"").unwrap();
        assert_eq!(id.as_str(), "1704067200000");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"1704067200000\"");
    }
}
