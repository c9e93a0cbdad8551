//! Add-record form for the player in context.

use client_frontend_core::RecordForm;
use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, Borders, Paragraph},
};

use super::form::field_lines;
use crate::presentation::theme::RatatuiTheme;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    player_name: &str,
    form: &RecordForm,
    theme: &RatatuiTheme,
) {
    let paragraph = Paragraph::new(field_lines(&form.form, theme)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Add Match Record: {player_name} ")),
    );

    frame.render_widget(paragraph, area);
}
