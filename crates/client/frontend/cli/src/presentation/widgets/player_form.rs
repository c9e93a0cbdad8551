//! Add-player form with lookup feedback.

use client_frontend_core::PlayerForm;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::form::field_lines;
use crate::presentation::theme::RatatuiTheme;

pub fn render(frame: &mut Frame, area: Rect, form: &PlayerForm, theme: &RatatuiTheme) {
    let mut lines = field_lines(&form.form, theme);
    lines.push(Line::from(""));

    match &form.lookup {
        Some(feedback) => {
            lines.push(Line::from(Span::styled(
                feedback.message(),
                theme.style_lookup(feedback),
            )));
            if let Some(url) = feedback.search_url() {
                lines.push(Line::from(vec![
                    Span::styled("Search the web: ", theme.label()),
                    Span::styled(url.to_owned(), theme.link()),
                ]));
            }
        }
        None => lines.push(Line::from(vec![
            Span::styled("[Ctrl+F]", theme.key()),
            Span::styled(" Fetch details for the typed name", theme.hint()),
        ])),
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" New Player "));

    frame.render_widget(paragraph, area);
}
