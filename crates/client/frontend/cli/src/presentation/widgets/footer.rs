//! Footer widget displaying context-sensitive key bindings.

use client_frontend_core::Screen;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;

/// Render the footer panel with key bindings help.
pub fn render(frame: &mut Frame, area: Rect, screen: &Screen, theme: &RatatuiTheme) {
    let bindings: &[(&str, &str)] = match screen {
        Screen::Dashboard(_) => &[
            ("↑/↓", "Select"),
            ("Enter", "View profile"),
            ("a", "Add player"),
            ("q", "Quit"),
        ],
        Screen::AddPlayer => &[
            ("Tab/↑/↓", "Field"),
            ("Ctrl+F", "Fetch details"),
            ("Enter", "Save"),
            ("Esc", "Back"),
        ],
        Screen::Details(_) => &[
            ("r", "Add record"),
            ("↑/↓", "Scroll"),
            ("Esc", "Back"),
            ("q", "Quit"),
        ],
        Screen::AddRecord { .. } => &[("Tab/↑/↓", "Field"), ("Enter", "Save"), ("Esc", "Back")],
    };

    let mut spans = Vec::with_capacity(bindings.len() * 3);
    for (i, (key, action)) in bindings.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" | "));
        }
        spans.push(Span::styled(format!("[{key}]"), theme.key()));
        spans.push(Span::raw(format!(" {action}")));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));

    frame.render_widget(paragraph, area);
}
