//! Header widget displaying the app title and screen name.

use client_frontend_core::Screen;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;

/// Render the header panel.
///
/// The "add player" affordance is only offered on the dashboard.
pub fn render(frame: &mut Frame, area: Rect, screen: &Screen, theme: &RatatuiTheme) {
    let mut spans = vec![
        Span::styled("CricTrack", theme.title()),
        Span::raw(" | "),
        Span::styled(screen.title(), theme.value()),
    ];

    if screen.shows_add_player() {
        spans.push(Span::raw("   "));
        spans.push(Span::styled("[a]", theme.key()));
        spans.push(Span::raw(" Add Player"));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));

    frame.render_widget(paragraph, area);
}
