//! View-model snapshots derived from the roster and the active view.
//!
//! [`render`] is a pure mapping from store contents and navigation state to a
//! [`Screen`]. Presentation layers only ever draw a `Screen`.
use roster_core::{
    DetailedStats, MatchRecord, Player, PlayerId, Summary, detailed_stats, summarize,
};

use crate::navigator::{Navigator, View};

/// Everything a presentation layer needs for one frame body.
#[derive(Clone, Debug, PartialEq)]
pub enum Screen {
    Dashboard(DashboardView),
    AddPlayer,
    Details(DetailsView),
    AddRecord { player_id: PlayerId, player_name: String },
}

impl Screen {
    /// The header's "add player" affordance only exists on the dashboard.
    pub fn shows_add_player(&self) -> bool {
        matches!(self, Screen::Dashboard(_))
    }

    pub fn title(&self) -> String {
        match self {
            Screen::Dashboard(_) => "Players".to_string(),
            Screen::AddPlayer => "Add Player".to_string(),
            Screen::Details(view) => view.name.clone(),
            Screen::AddRecord { player_name, .. } => format!("Add Record for {player_name}"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardView {
    pub cards: Vec<PlayerCard>,
}

impl DashboardView {
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlayerCard {
    pub id: PlayerId,
    pub name: String,
    pub country: String,
    pub role: String,
    pub summary: Summary,
}

impl PlayerCard {
    fn from_player(player: &Player) -> Self {
        Self {
            id: player.id.clone(),
            name: player.name.clone(),
            country: player.country.clone(),
            role: player.role.clone(),
            summary: summarize(player),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DetailsView {
    pub id: PlayerId,
    pub name: String,
    pub role: String,
    pub country: String,
    pub stats: DetailedStats,
    /// Most recent first.
    pub history: Vec<RecordRow>,
}

impl DetailsView {
    fn from_player(player: &Player) -> Self {
        Self {
            id: player.id.clone(),
            name: player.name.clone(),
            role: player.role.clone(),
            country: player.country.clone(),
            stats: detailed_stats(player),
            history: player.records.iter().map(RecordRow::from_record).collect(),
        }
    }
}

/// One line of match history, pre-formatted for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordRow {
    pub opponent: String,
    pub date: String,
    pub batting: String,
    pub bowling: String,
}

impl RecordRow {
    fn from_record(record: &MatchRecord) -> Self {
        Self {
            opponent: format!("vs {}", record.opponent),
            date: record.date.clone(),
            batting: record.batting_line(),
            bowling: record.bowling_line(),
        }
    }
}

/// Map the roster and active view to a screen.
///
/// Returns `None` when the view refers to a player that is not in `players`;
/// callers keep whatever they drew last.
pub fn render(players: &[Player], navigator: &Navigator) -> Option<Screen> {
    let find = |id: &PlayerId| players.iter().find(|player| &player.id == id);

    match navigator.current() {
        View::Dashboard => Some(Screen::Dashboard(DashboardView {
            cards: players.iter().map(PlayerCard::from_player).collect(),
        })),
        View::AddPlayer => Some(Screen::AddPlayer),
        View::Details(id) => find(id)
            .map(DetailsView::from_player)
            .map(Screen::Details),
        View::AddRecord(id) => find(id).map(|player| Screen::AddRecord {
            player_id: player.id.clone(),
            player_name: player.name.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use roster_core::{NewPlayer, RecordId, RecordInput};

    use super::*;
    use crate::navigator::NavRequest;

    fn player(id: &str, name: &str) -> Player {
        Player::new(
            PlayerId::from(id),
            NewPlayer::new(name, "Batsman", "India").unwrap(),
        )
    }

    fn record(opponent: &str, runs: &str, wickets: &str, overs: &str) -> MatchRecord {
        MatchRecord::from_input(
            RecordId::generate(),
            &RecordInput {
                opponent: opponent.into(),
                runs: runs.into(),
                balls: "30".into(),
                wickets: wickets.into(),
                overs: overs.into(),
                date: "2024-01-01".into(),
            },
        )
    }

    #[test]
    fn dashboard_lists_players_in_store_order() {
        let mut kohli = player("a", "Kohli");
        kohli.prepend_record(record("AUS", "45", "0", "0"));
        let players = vec![kohli, player("b", "Smith")];

        let Some(Screen::Dashboard(view)) = render(&players, &Navigator::new()) else {
            panic!("expected dashboard");
        };
        assert_eq!(view.cards.len(), 2);
        assert_eq!(view.cards[0].name, "Kohli");
        assert_eq!(view.cards[0].summary.total_runs, 45);
        assert_eq!(view.cards[1].summary.matches, 0);
    }

    #[test]
    fn empty_roster_renders_empty_dashboard() {
        let screen = render(&[], &Navigator::new()).unwrap();
        assert!(screen.shows_add_player());
        let Screen::Dashboard(view) = screen else {
            panic!("expected dashboard");
        };
        assert!(view.is_empty());
    }

    #[test]
    fn details_formats_history_rows() {
        let mut p = player("a", "Kohli");
        p.prepend_record(record("England", "12", "2", "4"));
        p.prepend_record(record("Australia", "45", "0", "3.2"));
        let players = vec![p];

        let mut nav = Navigator::new();
        nav.apply(NavRequest::ViewProfile(PlayerId::from("a"))).unwrap();

        let Some(Screen::Details(view)) = render(&players, &nav) else {
            panic!("expected details");
        };
        assert_eq!(view.stats.highest_score, 45);
        assert_eq!(view.history[0].opponent, "vs Australia");
        assert_eq!(view.history[0].batting, "45 (30)");
        assert_eq!(view.history[0].bowling, "0 / 3.2");
        assert_eq!(view.history[1].bowling, "2 / 4");
    }

    #[test]
    fn missing_player_renders_nothing() {
        let mut nav = Navigator::new();
        nav.apply(NavRequest::ViewProfile(PlayerId::from("ghost"))).unwrap();
        assert!(render(&[player("a", "Kohli")], &nav).is_none());

        nav.apply(NavRequest::OpenAddRecord).unwrap();
        assert!(render(&[player("a", "Kohli")], &nav).is_none());
    }

    #[test]
    fn add_record_screen_names_player() {
        let players = vec![player("a", "Kohli")];
        let mut nav = Navigator::new();
        nav.apply(NavRequest::ViewProfile(PlayerId::from("a"))).unwrap();
        nav.apply(NavRequest::OpenAddRecord).unwrap();

        let screen = render(&players, &nav).unwrap();
        assert_eq!(screen.title(), "Add Record for Kohli");
        assert!(!screen.shows_add_player());
    }
}
