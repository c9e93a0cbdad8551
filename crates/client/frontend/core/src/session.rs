//! Session coordinator.
//!
//! The session is the single owner of the roster store for the lifetime of a
//! frontend. Every user action goes through one of its methods, which update
//! the store, the navigator, the forms, and the status log together.

use std::sync::Arc;

use roster_core::{InputError, PlayerId, RecordId};
use runtime::{PlayerDirectory, Runtime, RuntimeError, Store};
use thiserror::Error;

use crate::config::FrontendConfig;
use crate::forms::{PlayerField, PlayerForm, RecordForm};
use crate::message::MessageLog;
use crate::navigator::{NavRequest, NavigationError, Navigator, View, ViewKind};
use crate::services::lookup::{LookupFeedback, LookupOutcome, LookupRequest, LookupResult};
use crate::view_model::{Screen, render};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Navigation(#[from] NavigationError),

    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

pub type Result<T> = std::result::Result<T, SessionError>;

pub struct Session {
    store: Store,
    directory: Arc<dyn PlayerDirectory>,
    navigator: Navigator,
    player_form: PlayerForm,
    record_form: RecordForm,
    messages: MessageLog,
}

impl Session {
    pub fn new(runtime: Runtime, config: &FrontendConfig) -> Self {
        Self {
            store: runtime.store,
            directory: runtime.directory,
            navigator: Navigator::new(),
            player_form: PlayerForm::default(),
            record_form: RecordForm::default(),
            messages: MessageLog::new(config.messages.capacity),
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn messages(&self) -> &MessageLog {
        &self.messages
    }

    pub fn messages_mut(&mut self) -> &mut MessageLog {
        &mut self.messages
    }

    pub fn player_form(&self) -> &PlayerForm {
        &self.player_form
    }

    pub fn player_form_mut(&mut self) -> &mut PlayerForm {
        &mut self.player_form
    }

    pub fn record_form(&self) -> &RecordForm {
        &self.record_form
    }

    pub fn record_form_mut(&mut self) -> &mut RecordForm {
        &mut self.record_form
    }

    /// Current screen, or `None` if the view points at a missing player.
    pub fn screen(&self) -> Option<Screen> {
        render(self.store.players(), &self.navigator)
    }

    pub fn open_add_player(&mut self) -> Result<()> {
        self.navigator.apply(NavRequest::OpenAddPlayer)?;
        self.player_form.reset();
        Ok(())
    }

    /// Create a player from the add-player form and return to the dashboard.
    pub fn submit_player(&mut self) -> Result<PlayerId> {
        self.ensure_view(NavRequest::PlayerCreated, |view| matches!(view, View::AddPlayer))?;

        let fields = self
            .player_form
            .to_new_player()
            .inspect_err(|e| self.messages.warn(capitalize(&e.to_string())))?;
        let name = fields.name.clone();

        let id = self.store.add_player(fields).inspect_err(|e| {
            tracing::error!("Failed to save player: {}", e);
            self.messages.error("Could not save player.");
        })?;

        self.navigator.apply(NavRequest::PlayerCreated)?;
        self.player_form.reset();
        self.messages.info(format!("Added {name}."));
        Ok(id)
    }

    pub fn view_profile(&mut self, id: PlayerId) -> Result<()> {
        self.navigator.apply(NavRequest::ViewProfile(id))?;
        Ok(())
    }

    pub fn open_add_record(&mut self) -> Result<()> {
        self.navigator.apply(NavRequest::OpenAddRecord)?;
        self.record_form.reset();
        Ok(())
    }

    /// Save the add-record form against the player in context.
    ///
    /// Returns `Ok(None)` and stays on the form if the player has disappeared
    /// from the store.
    pub fn submit_record(&mut self) -> Result<Option<RecordId>> {
        let player_id = match self.navigator.current() {
            View::AddRecord(id) => id.clone(),
            other => {
                return Err(NavigationError::InvalidTransition {
                    from: other.kind(),
                    request: NavRequest::RecordSaved,
                }
                .into());
            }
        };

        let input = self
            .record_form
            .to_input()
            .inspect_err(|e| self.messages.warn(capitalize(&e.to_string())))?;

        let saved = self.store.add_record(&player_id, &input).inspect_err(|e| {
            tracing::error!("Failed to save record: {}", e);
            self.messages.error("Could not save record.");
        })?;

        let Some(record_id) = saved else {
            self.messages.warn("Player no longer exists; record discarded.");
            return Ok(None);
        };

        self.navigator.apply(NavRequest::RecordSaved)?;
        self.record_form.reset();
        self.messages.info(format!("Record vs {} saved.", input.opponent.trim()));
        Ok(Some(record_id))
    }

    /// Leave the current view, discarding any unsaved form input.
    pub fn back(&mut self) -> Result<()> {
        let leaving = self.navigator.current().kind();
        self.navigator.apply(NavRequest::Back)?;
        match leaving {
            ViewKind::AddPlayer => self.player_form.reset(),
            ViewKind::AddRecord => self.record_form.reset(),
            _ => {}
        }
        Ok(())
    }

    /// Prepare a lookup for the name on the add-player form.
    ///
    /// Returns `None` (and sets the form feedback) when the name is blank or
    /// the add-player form is not active.
    pub fn begin_lookup(&mut self) -> Option<LookupRequest> {
        if !matches!(self.navigator.current(), View::AddPlayer) {
            return None;
        }

        let name = self.player_form.name().trim().to_owned();
        if name.is_empty() {
            self.player_form.lookup = Some(LookupFeedback::MissingName);
            return None;
        }

        tracing::debug!("Starting lookup for {:?}", name);
        self.player_form.lookup = Some(LookupFeedback::Searching);
        Some(LookupRequest::new(
            name,
            self.player_form.generation(),
            Arc::clone(&self.directory),
        ))
    }

    /// Apply a finished lookup to the add-player form.
    ///
    /// Results arriving after the user left the form are dropped, even if the
    /// form has since been reopened. When several lookups overlap on the same
    /// form, the last one applied wins.
    pub fn apply_lookup(&mut self, result: LookupResult) {
        if !matches!(self.navigator.current(), View::AddPlayer) {
            tracing::debug!("Dropping lookup result for {:?}: form closed", result.name);
            return;
        }
        if result.generation != self.player_form.generation() {
            tracing::debug!("Dropping lookup result for {:?}: form reopened", result.name);
            return;
        }

        self.player_form.lookup = Some(LookupFeedback::from(&result.outcome));
        if let LookupOutcome::Found(profile) = result.outcome {
            self.player_form.form.set(PlayerField::Role, profile.role);
            self.player_form.form.set(PlayerField::Country, profile.country);
        }
    }

    fn ensure_view(&self, request: NavRequest, allowed: impl Fn(&View) -> bool) -> Result<()> {
        let current = self.navigator.current();
        if allowed(current) {
            Ok(())
        } else {
            Err(NavigationError::InvalidTransition {
                from: current.kind(),
                request,
            }
            .into())
        }
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use roster_core::{RecordId, detailed_stats};
    use runtime::{InMemoryRosterRepository, StaticDirectory};

    use super::*;
    use crate::forms::RecordField;
    use crate::message::MessageLevel;

    fn session() -> Session {
        let runtime = Runtime::builder()
            .repository(InMemoryRosterRepository::new())
            .directory(StaticDirectory::new(Duration::ZERO))
            .build()
            .unwrap();
        Session::new(runtime, &FrontendConfig::default())
    }

    fn add_player(session: &mut Session, name: &str) -> PlayerId {
        session.open_add_player().unwrap();
        let form = &mut session.player_form_mut().form;
        form.set(PlayerField::Name, name);
        form.set(PlayerField::Role, "Batsman");
        form.set(PlayerField::Country, "India");
        session.submit_player().unwrap()
    }

    fn fill_record(session: &mut Session, opponent: &str, runs: &str) {
        let form = &mut session.record_form_mut().form;
        form.set(RecordField::Opponent, opponent);
        form.set(RecordField::Runs, runs);
        form.set(RecordField::Balls, "30");
        form.set(RecordField::Wickets, "0");
        form.set(RecordField::Overs, "0");
        form.set(RecordField::Date, "2024-01-01");
    }

    #[test]
    fn creating_player_returns_to_dashboard() {
        let mut session = session();
        add_player(&mut session, "Test");

        assert_eq!(session.navigator().current(), &View::Dashboard);
        assert_eq!(session.store().len(), 1);
        assert!(session.store().players()[0].records.is_empty());
        assert_eq!(session.player_form().name(), "");
    }

    #[test]
    fn record_scenario_updates_detailed_stats() {
        let mut session = session();
        let id = add_player(&mut session, "Test");

        session.view_profile(id.clone()).unwrap();
        session.open_add_record().unwrap();
        fill_record(&mut session, "X", "45");
        let record: Option<RecordId> = session.submit_record().unwrap();

        assert!(record.is_some());
        assert_eq!(session.navigator().current(), &View::Details(id.clone()));

        let stats = detailed_stats(session.store().player(&id).unwrap());
        assert_eq!(stats.matches, 1);
        assert_eq!(stats.total_runs, 45);
        assert_eq!(stats.total_wickets, 0);
        assert_eq!(stats.highest_score, 45);
    }

    #[test]
    fn invalid_player_form_stays_put_with_message() {
        let mut session = session();
        session.open_add_player().unwrap();
        session.player_form_mut().form.set(PlayerField::Name, "   ");

        let err = session.submit_player().unwrap_err();
        assert!(matches!(err, SessionError::Input(_)));
        assert_eq!(session.navigator().current(), &View::AddPlayer);

        let last = session.messages().recent(1).next().unwrap();
        assert_eq!(last.level, MessageLevel::Warning);
        assert_eq!(last.text, "Name is required");
    }

    #[test]
    fn back_from_record_form_discards_input() {
        let mut session = session();
        let id = add_player(&mut session, "Test");
        session.view_profile(id.clone()).unwrap();
        session.open_add_record().unwrap();
        fill_record(&mut session, "X", "10");

        session.back().unwrap();
        assert_eq!(session.navigator().current(), &View::Details(id.clone()));
        assert_eq!(session.record_form().form.value(RecordField::Opponent), "");
        assert!(session.store().player(&id).unwrap().records.is_empty());
    }

    #[test]
    fn submit_record_outside_form_is_rejected() {
        let mut session = session();
        assert!(matches!(
            session.submit_record(),
            Err(SessionError::Navigation(_))
        ));
    }

    #[test]
    fn record_for_vanished_player_is_dropped() {
        let mut session = session();
        session.view_profile(PlayerId::from("ghost")).unwrap();
        assert!(session.screen().is_none());

        session.open_add_record().unwrap();
        fill_record(&mut session, "X", "1");
        assert_eq!(session.submit_record().unwrap(), None);
        assert_eq!(
            session.messages().recent(1).next().unwrap().level,
            MessageLevel::Warning
        );
    }

    #[test]
    fn lookup_requires_name() {
        let mut session = session();
        session.open_add_player().unwrap();

        assert!(session.begin_lookup().is_none());
        assert_eq!(
            session.player_form().lookup,
            Some(LookupFeedback::MissingName)
        );
    }

    #[tokio::test]
    async fn lookup_fills_role_and_country() {
        let mut session = session();
        session.open_add_player().unwrap();
        session.player_form_mut().form.set(PlayerField::Name, "MS Dhoni");

        let request = session.begin_lookup().unwrap();
        assert_eq!(session.player_form().lookup, Some(LookupFeedback::Searching));

        let result = request.run().await;
        session.apply_lookup(result);

        let form = &session.player_form().form;
        assert_eq!(form.value(PlayerField::Role), "Wicketkeeper");
        assert_eq!(form.value(PlayerField::Country), "India");
        assert_eq!(session.player_form().lookup, Some(LookupFeedback::Found));
    }

    #[tokio::test]
    async fn lookup_result_after_leaving_form_is_dropped() {
        let mut session = session();
        session.open_add_player().unwrap();
        session.player_form_mut().form.set(PlayerField::Name, "Unknown Person");
        let request = session.begin_lookup().unwrap();

        session.back().unwrap();
        session.apply_lookup(request.run().await);

        assert_eq!(session.navigator().current(), &View::Dashboard);
        assert!(session.player_form().lookup.is_none());
        assert_eq!(session.player_form().form.value(PlayerField::Role), "");
    }

    #[tokio::test]
    async fn lookup_from_previous_form_is_dropped_after_reopen() {
        let mut session = session();
        session.open_add_player().unwrap();
        session.player_form_mut().form.set(PlayerField::Name, "Virat Kohli");
        let stale = session.begin_lookup().unwrap();

        session.back().unwrap();
        session.open_add_player().unwrap();
        session.player_form_mut().form.set(PlayerField::Name, "Someone Else");

        session.apply_lookup(stale.run().await);

        let form = session.player_form();
        assert!(form.lookup.is_none());
        assert_eq!(form.form.value(PlayerField::Role), "");
        assert_eq!(form.form.value(PlayerField::Country), "");
        assert_eq!(form.name(), "Someone Else");
    }

    #[tokio::test]
    async fn last_lookup_to_arrive_wins() {
        let mut session = session();
        session.open_add_player().unwrap();

        session.player_form_mut().form.set(PlayerField::Name, "Pat Cummins");
        let first = session.begin_lookup().unwrap();
        session.player_form_mut().form.set(PlayerField::Name, "Ben Stokes");
        let second = session.begin_lookup().unwrap();

        let second = second.run().await;
        let first = first.run().await;
        session.apply_lookup(second);
        session.apply_lookup(first);

        assert_eq!(
            session.player_form().form.value(PlayerField::Role),
            "Bowler"
        );
    }
}
