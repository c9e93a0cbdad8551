//! Pumps lookup results, user input, and rendering for the CLI client.
use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use tokio::{
    sync::mpsc,
    time::{self, Duration},
};

use client_frontend_core::{Form, FormField, LookupResult, Screen, Session, ViewKind};

use crate::config::CliConfig;
use crate::input::{InputHandler, KeyAction};
use crate::presentation::{terminal::Tui, ui};
use crate::state::AppState;

const FRAME_INTERVAL_MS: u64 = 16;

pub struct EventLoop {
    session: Session,
    input: InputHandler,
    app_state: AppState,
    lookup_tx: mpsc::Sender<LookupResult>,
    lookup_rx: mpsc::Receiver<LookupResult>,
    /// Last screen drawn, reused when the current view cannot be rendered.
    last_screen: Option<Screen>,
    cli_config: CliConfig,
}

impl EventLoop {
    pub fn new(session: Session, lookup_buffer: usize, cli_config: CliConfig) -> Self {
        let (lookup_tx, lookup_rx) = mpsc::channel(lookup_buffer.max(1));
        Self {
            session,
            input: InputHandler::new(),
            app_state: AppState::default(),
            lookup_tx,
            lookup_rx,
            last_screen: None,
            cli_config,
        }
    }

    /// Run until the user quits, returning the session.
    pub async fn run(mut self, terminal: &mut Tui) -> Result<Session> {
        self.render(terminal)?;

        loop {
            tokio::select! {
                Some(result) = self.lookup_rx.recv() => {
                    self.session.apply_lookup(result);
                    self.render(terminal)?;
                }
                _ = time::sleep(Duration::from_millis(FRAME_INTERVAL_MS)) => {
                    if self.handle_input_tick(terminal)? {
                        break;
                    }
                }
            }
        }

        Ok(self.session)
    }

    fn handle_input_tick(&mut self, terminal: &mut Tui) -> Result<bool> {
        if !event::poll(Duration::from_millis(0))? {
            return Ok(false);
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let quit = self.handle_key_press(key);
                self.render(terminal)?;
                Ok(quit)
            }
            Event::Resize(_, _) => {
                self.render(terminal)?;
                Ok(false)
            }
            _ => Ok(false),
        }
    }

    /// Apply a key press to the session. Returns `true` to quit.
    fn handle_key_press(&mut self, key: KeyEvent) -> bool {
        let view = self.session.navigator().current().kind();
        let action = self.input.handle_key(key, view);

        let result = match action {
            KeyAction::Quit => {
                tracing::info!("Quit requested");
                return true;
            }
            KeyAction::Up => {
                match view {
                    ViewKind::Details => self.app_state.scroll_up(),
                    _ => self.app_state.select_prev(),
                }
                Ok(())
            }
            KeyAction::Down => {
                match view {
                    ViewKind::Details => {
                        let rows = self.history_len();
                        self.app_state.scroll_down(rows);
                    }
                    _ => self.app_state.select_next(self.session.store().len()),
                }
                Ok(())
            }
            KeyAction::OpenSelected => {
                let selected = self
                    .session
                    .store()
                    .players()
                    .get(self.app_state.selected)
                    .map(|player| player.id.clone());
                match selected {
                    Some(id) => {
                        self.app_state.reset_scroll();
                        self.session.view_profile(id)
                    }
                    None => Ok(()),
                }
            }
            KeyAction::OpenAddPlayer => self.session.open_add_player(),
            KeyAction::OpenAddRecord => self.session.open_add_record(),
            KeyAction::Back => self.session.back(),
            KeyAction::NextField => {
                self.with_active_form(|form| form.next_field());
                Ok(())
            }
            KeyAction::PrevField => {
                self.with_active_form(|form| form.prev_field());
                Ok(())
            }
            KeyAction::Insert(ch) => {
                self.with_active_form(|form| form.type_char(ch));
                Ok(())
            }
            KeyAction::Backspace => {
                self.with_active_form(|form| form.erase());
                Ok(())
            }
            KeyAction::Lookup => {
                self.spawn_lookup();
                Ok(())
            }
            KeyAction::Submit => match view {
                ViewKind::AddPlayer => self.session.submit_player().map(|_| ()),
                _ => self.session.submit_record().map(|_| ()),
            },
            KeyAction::None => Ok(()),
        };

        // The session has already posted a user-facing message for failures.
        if let Err(e) = result {
            tracing::debug!("Key {:?} on {} rejected: {}", action, view, e);
        }

        self.app_state.clamp_selection(self.session.store().len());
        false
    }

    fn spawn_lookup(&mut self) {
        let Some(request) = self.session.begin_lookup() else {
            return;
        };

        let tx = self.lookup_tx.clone();
        tokio::spawn(async move {
            let result = request.run().await;
            if tx.send(result).await.is_err() {
                tracing::debug!("Lookup finished after the event loop stopped");
            }
        });
    }

    fn with_active_form(&mut self, edit: impl FnOnce(&mut dyn FormEdit)) {
        match self.session.navigator().current().kind() {
            ViewKind::AddPlayer => edit(&mut self.session.player_form_mut().form),
            ViewKind::AddRecord => edit(&mut self.session.record_form_mut().form),
            _ => {}
        }
    }

    fn history_len(&self) -> usize {
        self.session
            .navigator()
            .current_player_id()
            .and_then(|id| self.session.store().player(id))
            .map_or(0, |player| player.records.len())
    }

    fn render(&mut self, terminal: &mut Tui) -> Result<()> {
        if let Some(screen) = self.session.screen() {
            self.last_screen = Some(screen);
        }

        let Some(screen) = self.last_screen.as_ref() else {
            return Ok(());
        };

        let ctx = ui::RenderContext {
            screen,
            session: &self.session,
            app_state: &self.app_state,
            ui: &self.cli_config.ui,
        };
        ui::render(terminal, &ctx)
    }
}

/// Field-agnostic editing over either form.
trait FormEdit {
    fn next_field(&mut self);
    fn prev_field(&mut self);
    fn type_char(&mut self, ch: char);
    fn erase(&mut self);
}

impl<F: FormField> FormEdit for Form<F> {
    fn next_field(&mut self) {
        self.focus_next();
    }

    fn prev_field(&mut self) {
        self.focus_prev();
    }

    fn type_char(&mut self, ch: char) {
        self.insert_char(ch);
    }

    fn erase(&mut self) {
        self.backspace();
    }
}
