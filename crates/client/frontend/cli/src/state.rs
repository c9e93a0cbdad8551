//! Presentation-only state that does not belong in the session.

/// Cursor positions for list-style screens.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    /// Highlighted card on the dashboard.
    pub selected: usize,
    /// First visible row of the match history on the details screen.
    pub history_scroll: usize,
}

impl AppState {
    pub fn select_next(&mut self, len: usize) {
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Keep the selection inside a list of `len` players.
    pub fn clamp_selection(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    pub fn scroll_down(&mut self, rows: usize) {
        if rows > 0 {
            self.history_scroll = (self.history_scroll + 1).min(rows - 1);
        }
    }

    pub fn scroll_up(&mut self) {
        self.history_scroll = self.history_scroll.saturating_sub(1);
    }

    pub fn reset_scroll(&mut self) {
        self.history_scroll = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_stays_in_bounds() {
        let mut state = AppState::default();
        state.select_prev();
        assert_eq!(state.selected, 0);

        state.select_next(2);
        state.select_next(2);
        assert_eq!(state.selected, 1);

        state.select_next(0);
        assert_eq!(state.selected, 1);

        state.clamp_selection(1);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn scroll_stops_at_last_row() {
        let mut state = AppState::default();
        state.scroll_down(2);
        state.scroll_down(2);
        assert_eq!(state.history_scroll, 1);

        state.scroll_up();
        state.scroll_up();
        assert_eq!(state.history_scroll, 0);
    }
}
