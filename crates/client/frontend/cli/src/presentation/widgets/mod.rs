//! Widget modules for UI rendering.
//!
//! Each widget is a pure function that reads a view-model snapshot and renders
//! it to a terminal frame. Widgets never mutate session state.

pub mod dashboard;
pub mod footer;
pub mod form;
pub mod header;
pub mod messages;
pub mod player_details;
pub mod player_form;
pub mod record_form;
