//! Terminal UI frontend for the roster tracker.
//!
//! This crate provides a terminal-based user interface and implements the
//! `client_frontend_core::Frontend` trait.
//!
//! # Architecture
//!
//! CliFrontend is a thin presentation layer that:
//! - Wraps the runtime in a `Session` owned by the event loop
//! - Maps key presses to session operations
//! - Draws the session's current `Screen` with ratatui widgets

mod app;
mod config;
mod input;
pub mod logging;
pub mod presentation;
mod state;

pub use app::CliFrontend;
pub use config::{CliConfig, UiConfig};

// Re-export for convenience (used in main.rs)
pub use client_frontend_core::FrontendConfig;
