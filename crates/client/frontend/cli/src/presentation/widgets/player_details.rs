//! Player profile: identity, career stats, and match history.

use client_frontend_core::DetailsView;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table},
};

use crate::presentation::theme::RatatuiTheme;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    view: &DetailsView,
    scroll: usize,
    theme: &RatatuiTheme,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .split(area);

    render_profile(frame, chunks[0], view, theme);
    render_history(frame, chunks[1], view, scroll, theme);
}

fn render_profile(frame: &mut Frame, area: Rect, view: &DetailsView, theme: &RatatuiTheme) {
    let stat = |label: &'static str, value: String| {
        [
            Span::styled(label, theme.label()),
            Span::styled(value, theme.stat()),
            Span::raw("   "),
        ]
    };

    let mut stats = Vec::new();
    stats.extend(stat("Matches ", view.stats.matches.to_string()));
    stats.extend(stat("Runs ", view.stats.total_runs.to_string()));
    stats.extend(stat("Wickets ", view.stats.total_wickets.to_string()));
    stats.extend(stat("Highest ", view.stats.highest_score.to_string()));

    let lines = vec![
        Line::from(vec![
            Span::styled(view.name.clone(), theme.title()),
            Span::styled(format!("  {} • {}", view.role, view.country), theme.label()),
        ]),
        Line::from(""),
        Line::from(stats),
    ];

    let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn render_history(
    frame: &mut Frame,
    area: Rect,
    view: &DetailsView,
    scroll: usize,
    theme: &RatatuiTheme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Match History ");

    if view.history.is_empty() {
        let empty = Paragraph::new(Span::styled("No matches recorded yet.", theme.hint()))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(["Opponent", "Date", "Batting", "Bowling"]).style(theme.label());
    let rows = view.history.iter().skip(scroll).map(|row| {
        Row::new([
            row.opponent.clone(),
            row.date.clone(),
            row.batting.clone(),
            row.bowling.clone(),
        ])
        .style(theme.value())
    });

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(40),
            Constraint::Length(12),
            Constraint::Length(12),
            Constraint::Length(12),
        ],
    )
    .header(header)
    .block(block);

    frame.render_widget(table, area);
}
