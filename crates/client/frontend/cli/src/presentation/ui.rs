//! Main render entry point composing all widgets into one frame.
use anyhow::Result;
use client_frontend_core::{Screen, Session};
use ratatui::layout::{Constraint, Direction, Layout};

use crate::config::UiConfig;
use crate::presentation::{terminal::Tui, theme::RatatuiTheme, widgets};
use crate::state::AppState;

/// Everything needed to draw one frame.
pub struct RenderContext<'a> {
    pub screen: &'a Screen,
    pub session: &'a Session,
    pub app_state: &'a AppState,
    pub ui: &'a UiConfig,
}

/// Draw header, active screen body, message panel, and footer.
pub fn render(terminal: &mut Tui, ctx: &RenderContext) -> Result<()> {
    let theme = RatatuiTheme::new();

    terminal.draw(|frame| {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),                           // Header
                Constraint::Min(0),                              // Body
                Constraint::Length(ctx.ui.message_panel_height), // Messages
                Constraint::Length(3),                           // Footer
            ])
            .split(frame.area());

        widgets::header::render(frame, chunks[0], ctx.screen, &theme);

        match ctx.screen {
            Screen::Dashboard(view) => {
                widgets::dashboard::render(frame, chunks[1], view, ctx.app_state.selected, &theme);
            }
            Screen::AddPlayer => {
                widgets::player_form::render(frame, chunks[1], ctx.session.player_form(), &theme);
            }
            Screen::Details(view) => {
                widgets::player_details::render(
                    frame,
                    chunks[1],
                    view,
                    ctx.app_state.history_scroll,
                    &theme,
                );
            }
            Screen::AddRecord { player_name, .. } => {
                widgets::record_form::render(
                    frame,
                    chunks[1],
                    player_name,
                    ctx.session.record_form(),
                    &theme,
                );
            }
        }

        let recent: Vec<_> = ctx
            .session
            .messages()
            .recent(ctx.ui.message_rows())
            .cloned()
            .collect();
        widgets::messages::render(frame, chunks[2], &recent, &theme);

        widgets::footer::render(frame, chunks[3], ctx.screen, &theme);
    })?;

    Ok(())
}
