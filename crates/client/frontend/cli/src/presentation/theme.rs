//! Ratatui styles shared by all widgets.

use client_frontend_core::{LookupFeedback, MessageLevel};
use ratatui::style::{Color, Modifier, Style};

/// Consistent color scheme for the CLI.
#[derive(Clone, Copy, Debug, Default)]
pub struct RatatuiTheme;

impl RatatuiTheme {
    pub fn new() -> Self {
        Self
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(Color::LightGreen)
            .add_modifier(Modifier::BOLD)
    }

    pub fn label(&self) -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn value(&self) -> Style {
        Style::default().fg(Color::White)
    }

    pub fn stat(&self) -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    pub fn hint(&self) -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn key(&self) -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn selected(&self) -> Style {
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    }

    pub fn focused_field(&self) -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn link(&self) -> Style {
        Style::default()
            .fg(Color::LightBlue)
            .add_modifier(Modifier::UNDERLINED)
    }

    pub fn style_message(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Info => Style::default().fg(Color::White),
            MessageLevel::Warning => Style::default().fg(Color::Yellow),
            MessageLevel::Error => Style::default().fg(Color::LightRed),
        }
    }

    pub fn style_lookup(&self, feedback: &LookupFeedback) -> Style {
        match feedback {
            LookupFeedback::Searching => Style::default().fg(Color::Cyan),
            LookupFeedback::Found => Style::default().fg(Color::LightGreen),
            LookupFeedback::NotFound { .. } | LookupFeedback::MissingName => {
                Style::default().fg(Color::Yellow)
            }
            LookupFeedback::Failed => Style::default().fg(Color::LightRed),
        }
    }
}
