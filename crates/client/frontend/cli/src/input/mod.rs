//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use client_frontend_core::ViewKind;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Move the dashboard selection or scroll the history.
    Up,
    Down,
    /// Open the highlighted player's profile.
    OpenSelected,
    OpenAddPlayer,
    OpenAddRecord,
    /// Leave the current view, discarding form input.
    Back,
    NextField,
    PrevField,
    Insert(char),
    Backspace,
    /// Look up the typed player name.
    Lookup,
    /// Save the active form.
    Submit,
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into commands based on the active view.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, key: KeyEvent, view: ViewKind) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return self.handle_control(key.code, view);
        }

        match view {
            ViewKind::Dashboard => self.handle_dashboard(key.code),
            ViewKind::Details => self.handle_details(key.code),
            ViewKind::AddPlayer | ViewKind::AddRecord => self.handle_form(key.code),
        }
    }

    fn handle_control(&self, code: KeyCode, view: ViewKind) -> KeyAction {
        match code {
            KeyCode::Char('c') => KeyAction::Quit,
            KeyCode::Char('f') if view == ViewKind::AddPlayer => KeyAction::Lookup,
            _ => KeyAction::None,
        }
    }

    fn handle_dashboard(&self, code: KeyCode) -> KeyAction {
        match code {
            KeyCode::Up | KeyCode::Char('k') => KeyAction::Up,
            KeyCode::Down | KeyCode::Char('j') => KeyAction::Down,
            KeyCode::Enter => KeyAction::OpenSelected,
            KeyCode::Char('a') | KeyCode::Char('A') => KeyAction::OpenAddPlayer,
            KeyCode::Char('q') | KeyCode::Char('Q') => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }

    fn handle_details(&self, code: KeyCode) -> KeyAction {
        match code {
            KeyCode::Up | KeyCode::Char('k') => KeyAction::Up,
            KeyCode::Down | KeyCode::Char('j') => KeyAction::Down,
            KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::OpenAddRecord,
            KeyCode::Esc | KeyCode::Backspace => KeyAction::Back,
            KeyCode::Char('q') | KeyCode::Char('Q') => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }

    fn handle_form(&self, code: KeyCode) -> KeyAction {
        match code {
            KeyCode::Tab | KeyCode::Down => KeyAction::NextField,
            KeyCode::BackTab | KeyCode::Up => KeyAction::PrevField,
            KeyCode::Enter => KeyAction::Submit,
            KeyCode::Esc => KeyAction::Back,
            KeyCode::Backspace => KeyAction::Backspace,
            KeyCode::Char(ch) => KeyAction::Insert(ch),
            _ => KeyAction::None,
        }
    }
}
