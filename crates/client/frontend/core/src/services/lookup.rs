//! Player lookup used to auto-fill the add-player form.
//!
//! Lookups are slow, so the session only prepares a [`LookupRequest`]. The
//! frontend runs it on a background task and hands the [`LookupResult`] back
//! to the session when it arrives.

use std::sync::Arc;

use roster_core::{PlayerProfile, search_fallback_url};
use runtime::PlayerDirectory;

/// What a directory lookup produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LookupOutcome {
    Found(PlayerProfile),
    NotFound { search_url: String },
    Failed(String),
}

/// Query `directory` for `name`, mapping "no entry" to a web search fallback.
pub async fn lookup_player(directory: &dyn PlayerDirectory, name: &str) -> LookupOutcome {
    match directory.find(name).await {
        Ok(Some(profile)) => LookupOutcome::Found(profile),
        Ok(None) => LookupOutcome::NotFound {
            search_url: search_fallback_url(name),
        },
        Err(e) => {
            tracing::warn!("Player lookup for {:?} failed: {}", name, e);
            LookupOutcome::Failed(e.to_string())
        }
    }
}

/// A lookup ready to be run off the UI loop.
///
/// `generation` ties the request to the form instance it was started from.
pub struct LookupRequest {
    name: String,
    generation: u64,
    directory: Arc<dyn PlayerDirectory>,
}

impl LookupRequest {
    pub(crate) fn new(name: String, generation: u64, directory: Arc<dyn PlayerDirectory>) -> Self {
        Self {
            name,
            generation,
            directory,
        }
    }

    pub async fn run(self) -> LookupResult {
        let outcome = lookup_player(self.directory.as_ref(), &self.name).await;
        LookupResult {
            name: self.name,
            generation: self.generation,
            outcome,
        }
    }
}

/// Completed lookup delivered back to the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LookupResult {
    pub name: String,
    pub generation: u64,
    pub outcome: LookupOutcome,
}

/// Status line shown under the add-player form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LookupFeedback {
    MissingName,
    Searching,
    Found,
    NotFound { search_url: String },
    Failed,
}

impl LookupFeedback {
    pub fn message(&self) -> &'static str {
        match self {
            Self::MissingName => "Please enter a name first.",
            Self::Searching => "Searching database...",
            Self::Found => "✓ Found! Details auto-filled.",
            Self::NotFound { .. } => "Player not found in local DB.",
            Self::Failed => "Error fetching data.",
        }
    }

    pub fn search_url(&self) -> Option<&str> {
        match self {
            Self::NotFound { search_url } => Some(search_url),
            _ => None,
        }
    }
}

impl From<&LookupOutcome> for LookupFeedback {
    fn from(outcome: &LookupOutcome) -> Self {
        match outcome {
            LookupOutcome::Found(_) => Self::Found,
            LookupOutcome::NotFound { search_url } => Self::NotFound {
                search_url: search_url.clone(),
            },
            LookupOutcome::Failed(_) => Self::Failed,
        }
    }
}
