//! Shared rendering for labelled text-input forms.

use client_frontend_core::{Form, FormField};
use ratatui::text::{Line, Span};

use crate::presentation::theme::RatatuiTheme;

/// One line per field, with a cursor marker on the focused one.
pub fn field_lines<F: FormField>(form: &Form<F>, theme: &RatatuiTheme) -> Vec<Line<'static>> {
    form.fields()
        .map(|(field, value, focused)| {
            let marker = if focused { "> " } else { "  " };
            let label_style = if focused {
                theme.focused_field()
            } else {
                theme.label()
            };
            let mut spans = vec![
                Span::styled(marker, theme.key()),
                Span::styled(format!("{:<10}", field.label()), label_style),
                Span::styled(value.to_owned(), theme.value()),
            ];
            if focused {
                spans.push(Span::styled("_", theme.focused_field()));
            }
            Line::from(spans)
        })
        .collect()
}
