//! View-state machine deciding which screen is active.
//!
//! Exactly one [`View`] is active at a time. The player context only exists in
//! the two views that need it, so it is cleared by construction whenever the
//! machine leaves them.

use roster_core::PlayerId;
use thiserror::Error;

/// Active view, carrying the player context where one applies.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Dashboard,
    AddPlayer,
    Details(PlayerId),
    AddRecord(PlayerId),
}

/// Payload-free view tag used in diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ViewKind {
    Dashboard,
    AddPlayer,
    Details,
    AddRecord,
}

impl View {
    pub fn kind(&self) -> ViewKind {
        match self {
            View::Dashboard => ViewKind::Dashboard,
            View::AddPlayer => ViewKind::AddPlayer,
            View::Details(_) => ViewKind::Details,
            View::AddRecord(_) => ViewKind::AddRecord,
        }
    }
}

/// Requests the navigator understands.
#[derive(Clone, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum NavRequest {
    OpenAddPlayer,
    PlayerCreated,
    ViewProfile(PlayerId),
    OpenAddRecord,
    RecordSaved,
    Back,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("cannot handle {request} while on {from}")]
    InvalidTransition { from: ViewKind, request: NavRequest },
}

#[derive(Clone, Debug, Default)]
pub struct Navigator {
    view: View,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &View {
        &self.view
    }

    /// Player in context, only while on `Details` or `AddRecord`.
    pub fn current_player_id(&self) -> Option<&PlayerId> {
        match &self.view {
            View::Details(id) | View::AddRecord(id) => Some(id),
            View::Dashboard | View::AddPlayer => None,
        }
    }

    /// Apply a request. Unlisted transitions are rejected and leave the view
    /// unchanged.
    pub fn apply(&mut self, request: NavRequest) -> Result<&View, NavigationError> {
        let next = match (&self.view, &request) {
            (View::Dashboard, NavRequest::OpenAddPlayer) => View::AddPlayer,
            (View::Dashboard, NavRequest::ViewProfile(id)) => View::Details(id.clone()),
            (View::AddPlayer, NavRequest::PlayerCreated | NavRequest::Back) => View::Dashboard,
            (View::Details(id), NavRequest::OpenAddRecord) => View::AddRecord(id.clone()),
            (View::Details(_), NavRequest::Back) => View::Dashboard,
            (View::AddRecord(id), NavRequest::RecordSaved | NavRequest::Back) => {
                View::Details(id.clone())
            }
            (from, request) => {
                return Err(NavigationError::InvalidTransition {
                    from: from.kind(),
                    request: request.clone(),
                });
            }
        };

        tracing::debug!("Navigate {} -> {} on {}", self.view.kind(), next.kind(), request);
        self.view = next;
        Ok(&self.view)
    }
}
