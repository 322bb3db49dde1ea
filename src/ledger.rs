//! Match ledger
//!
//! Holds the registered players and the recorded matches in chronological
//! order. Matches are kept sorted by their record index as they arrive; a match
//! whose index ties an existing one is placed after it, so ties replay in
//! insertion order.

use crate::error::{RankingError, Result};
use crate::rating::{IdOf, MatchRecord, Participant};
use std::collections::HashMap;
use tracing::debug;

/// Registered players and their chronologically ordered matches
#[derive(Debug)]
pub struct MatchLedger<M: MatchRecord> {
    players: Vec<M::Player>,
    index: HashMap<IdOf<M>, usize>,
    /// Matches played per registered player
    played: HashMap<IdOf<M>, usize>,
    matches: Vec<M>,
}

impl<M: MatchRecord> MatchLedger<M> {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self {
            players: Vec::new(),
            index: HashMap::new(),
            played: HashMap::new(),
            matches: Vec::new(),
        }
    }

    /// Register a player
    ///
    /// Fails with `DuplicatePlayer` if a player with the same id is known.
    pub fn register(&mut self, player: M::Player) -> Result<()> {
        let player_id = player.id();
        if self.index.contains_key(&player_id) {
            return Err(RankingError::DuplicatePlayer {
                player_id: player_id.to_string(),
            }
            .into());
        }

        debug!("Registered player {}", player_id);
        self.played.insert(player_id.clone(), 0);
        self.index.insert(player_id, self.players.len());
        self.players.push(player);
        Ok(())
    }

    /// Record a match and return its zero-based chronological position
    ///
    /// Both players must be registered and distinct. Nothing is stored on failure.
    pub fn record(&mut self, record: M) -> Result<usize> {
        let player_a = record.player_a().id();
        let player_b = record.player_b().id();

        if !self.is_registered(&player_a) {
            return Err(RankingError::unknown_player(player_a).into());
        }
        if !self.is_registered(&player_b) {
            return Err(RankingError::unknown_player(player_b).into());
        }
        if player_a == player_b {
            return Err(RankingError::self_play(player_a).into());
        }

        let key = record.record_index();
        let position = self
            .matches
            .partition_point(|existing| existing.record_index() <= key);

        debug!(
            "Recorded match {} vs {} ({}) at position {}",
            player_a,
            player_b,
            record.result(),
            position
        );
        for player_id in [player_a, player_b] {
            *self.played.entry(player_id).or_insert(0) += 1;
        }
        self.matches.insert(position, record);
        Ok(position)
    }

    pub fn is_registered(&self, player_id: &IdOf<M>) -> bool {
        self.index.contains_key(player_id)
    }

    /// Look up a registered player by id
    pub fn player(&self, player_id: &IdOf<M>) -> Option<&M::Player> {
        self.index.get(player_id).map(|&slot| &self.players[slot])
    }

    /// Registered players in registration order
    pub fn players(&self) -> &[M::Player] {
        &self.players
    }

    /// Recorded matches in chronological order
    pub fn matches(&self) -> &[M] {
        &self.matches
    }

    /// The match at a zero-based chronological position
    pub fn get(&self, position: usize) -> Option<&M> {
        self.matches.get(position)
    }

    /// Whether the player appears on either side of any recorded match
    pub fn has_played(&self, player_id: &IdOf<M>) -> bool {
        self.matches_played(player_id) > 0
    }

    /// Number of recorded matches the player took part in
    pub fn matches_played(&self, player_id: &IdOf<M>) -> usize {
        self.played.get(player_id).copied().unwrap_or(0)
    }

    /// Number of recorded matches
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }
}

impl<M: MatchRecord> Default for MatchLedger<M> {
    fn default() -> Self {
        Self::new()
    }
}
