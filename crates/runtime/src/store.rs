//! The roster store: sole owner of every player and match record.
//!
//! The store is loaded once, mutated only through [`Store::add_player`] and
//! [`Store::add_record`], and persisted in full after each mutation. If the
//! save fails the mutation is undone, so memory never runs ahead of disk.

use std::collections::HashSet;

use roster_core::{MatchRecord, NewPlayer, Player, PlayerId, RecordId, RecordInput};

use crate::error::Result;
use crate::repository::RosterRepository;

pub struct Store {
    players: Vec<Player>,
    repository: Box<dyn RosterRepository>,
}

impl Store {
    /// Load the persisted roster.
    ///
    /// Never fails: a missing document, an unreadable file, or a document that
    /// does not deserialize all produce an empty roster.
    pub fn load(repository: Box<dyn RosterRepository>) -> Self {
        let players = match repository.load() {
            Ok(Some(players)) => players,
            Ok(None) => {
                tracing::info!("No saved roster found, starting empty");
                Vec::new()
            }
            Err(e) => {
                tracing::warn!("Discarding unreadable roster: {}", e);
                Vec::new()
            }
        };

        warn_duplicate_ids(&players);
        tracing::info!("Roster loaded with {} players", players.len());

        Self {
            players,
            repository,
        }
    }

    /// All players in creation order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|player| &player.id == id)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Append a new player with an empty history and persist.
    ///
    /// Names are not de-duplicated: two players called the same are two
    /// distinct entries.
    pub fn add_player(&mut self, fields: NewPlayer) -> Result<PlayerId> {
        let id = PlayerId::generate();
        self.players.push(Player::new(id.clone(), fields));

        if let Err(e) = self.persist() {
            self.players.pop();
            return Err(e);
        }

        tracing::info!("Added player {}", id);
        Ok(id)
    }

    /// Prepend a record to a player's history and persist.
    ///
    /// Returns `Ok(None)` without touching anything when `player_id` is not in
    /// the roster.
    pub fn add_record(
        &mut self,
        player_id: &PlayerId,
        input: &RecordInput,
    ) -> Result<Option<RecordId>> {
        let Some(index) = self.players.iter().position(|p| &p.id == player_id) else {
            tracing::warn!("Ignoring record for unknown player {}", player_id);
            return Ok(None);
        };

        let id = RecordId::generate();
        self.players[index].prepend_record(MatchRecord::from_input(id.clone(), input));

        if let Err(e) = self.persist() {
            self.players[index].records.remove(0);
            return Err(e);
        }

        tracing::info!("Added record {} for player {}", id, player_id);
        Ok(Some(id))
    }

    /// Write the full roster to the repository.
    pub fn persist(&self) -> Result<()> {
        self.repository.save(&self.players)?;
        Ok(())
    }
}

fn warn_duplicate_ids(players: &[Player]) {
    let mut seen = HashSet::with_capacity(players.len());
    for player in players {
        if !seen.insert(&player.id) {
            tracing::warn!("Duplicate player id {} in saved roster", player.id);
        }
    }
}
