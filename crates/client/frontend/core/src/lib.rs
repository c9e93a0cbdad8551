//! Cross-frontend primitives for presenting the roster.
//!
//! Houses navigation, the session coordinator, form state, message logging,
//! and view-model types that the CLI and any future graphical client can
//! reuse without touching a terminal.
pub mod config;
pub mod forms;
pub mod frontend;
pub mod message;
pub mod navigator;
pub mod services;
pub mod session;
pub mod view_model;

pub use config::{ChannelConfig, FrontendConfig, MessageConfig};
pub use forms::{Form, FormField, PlayerField, PlayerForm, RecordField, RecordForm};
pub use frontend::Frontend;
pub use message::{MessageEntry, MessageLevel, MessageLog};
pub use navigator::{NavRequest, NavigationError, Navigator, View, ViewKind};
pub use services::lookup::{LookupFeedback, LookupOutcome, LookupRequest, LookupResult};
pub use session::{Session, SessionError};
pub use view_model::{DashboardView, DetailsView, PlayerCard, RecordRow, Screen, render};
