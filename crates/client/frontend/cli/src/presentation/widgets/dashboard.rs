//! Dashboard widget listing every player with career totals.

use client_frontend_core::DashboardView;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    view: &DashboardView,
    selected: usize,
    theme: &RatatuiTheme,
) {
    let block = Block::default().borders(Borders::ALL).title(" Players ");

    if view.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("No players added yet.", theme.hint())),
            Line::from(vec![
                Span::styled("Press ", theme.hint()),
                Span::styled("[a]", theme.key()),
                Span::styled(" to add your first player.", theme.hint()),
            ]),
        ])
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = view
        .cards
        .iter()
        .map(|card| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(card.name.clone(), theme.title()),
                    Span::styled(format!("  {} • {}", card.country, card.role), theme.label()),
                ]),
                Line::from(vec![
                    Span::styled("  Matches ", theme.label()),
                    Span::styled(card.summary.matches.to_string(), theme.stat()),
                    Span::styled("   Runs ", theme.label()),
                    Span::styled(card.summary.total_runs.to_string(), theme.stat()),
                    Span::styled("   Wickets ", theme.label()),
                    Span::styled(card.summary.total_wickets.to_string(), theme.stat()),
                ]),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(theme.selected())
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(list, area, &mut state);
}
