//! Built-in table of well-known players used to pre-fill the add-player form.
//!
//! The table is closed: lookups are case-insensitive exact matches on the
//! trimmed name, and anything else is "not found". Callers offering a web
//! search fallback build the link with [`search_fallback_url`].

use std::fmt::Write;

/// Role and country reported for a known player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerProfile {
    pub role: String,
    pub country: String,
}

/// `(lowercase name, role, country)` for every player the table knows.
pub const KNOWN_PLAYERS: [(&str, &str, &str); 10] = [
    ("virat kohli", "Batsman", "India"),
    ("rohit sharma", "Batsman", "India"),
    ("ms dhoni", "Wicketkeeper", "India"),
    ("steve smith", "Batsman", "Australia"),
    ("pat cummins", "Bowler", "Australia"),
    ("ben stokes", "All-Rounder", "England"),
    ("jasprit bumrah", "Bowler", "India"),
    ("kane williamson", "Batsman", "New Zealand"),
    ("babar azam", "Batsman", "Pakistan"),
    ("rashid khan", "Bowler", "Afghanistan"),
];

const SEARCH_ENDPOINT: &str = "https://www.google.com/search?q=";

/// Look a name up in [`KNOWN_PLAYERS`].
pub fn find_known_player(name: &str) -> Option<PlayerProfile> {
    let key = name.trim().to_lowercase();
    KNOWN_PLAYERS
        .iter()
        .find(|(known, _, _)| *known == key)
        .map(|(_, role, country)| PlayerProfile {
            role: (*role).to_owned(),
            country: (*country).to_owned(),
        })
}

/// Web search link offered when a name is not in the table.
///
/// The query is `"<name> cricketer stats"`, percent-encoded the same way a
/// browser's `encodeURIComponent` would.
pub fn search_fallback_url(name: &str) -> String {
    let query = format!("{} cricketer stats", name.trim());
    format!("{SEARCH_ENDPOINT}{}", encode_uri_component(&query))
}

fn encode_uri_component(text: &str) -> String {
    let mut encoded = String::with_capacity(text.len());
    for byte in text.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => encoded.push(char::from(byte)),
            _ => {
                let _ = write!(encoded, "%{byte:02X}");
            }
        }
    }
    encoded
}
