//! Elo ranking system
//!
//! [`EloRankingSystem`] owns the match ledger and the rating memo. A rating
//! query that misses the memo replays every match not yet replayed, in
//! chronological order, writing each registered player's rating for every step
//! before moving on to the next one. Later queries at the same ledger size are
//! answered straight from the memo.
//!
//! Appending matches keeps everything already replayed; only the new suffix is
//! replayed on the next query. A match recorded with an index earlier than
//! already replayed matches truncates the memo at its insertion point.

use crate::config::RankingConfig;
use crate::error::{RankingError, Result};
use crate::ledger::MatchLedger;
use crate::rating::{EloCalculator, IdOf, MatchRecord, Participant, RatingMemo};
use crate::types::{Match, MatchResult};
use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// A system where players are ranked by the Elo rating derived from the
/// matches recorded in it
pub trait RatingSystem<M: MatchRecord> {
    /// The starting rating of a new player
    fn starting_rating(&self) -> f64;

    /// How strongly a single match affects a player's rating
    fn k_factor(&self) -> f64;

    /// Register a new player
    fn register_player(&mut self, player: M::Player) -> Result<()>;

    /// Record a match between two registered players
    fn record_match(
        &mut self,
        player_a: M::Player,
        player_b: M::Player,
        result: MatchResult,
    ) -> Result<()>;

    /// A player's rating after every match recorded so far
    fn calculate_rating(&mut self, player: &M::Player) -> Result<f64>;
}

/// One row of a leaderboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry<Id> {
    /// 1-based position on the board
    pub rank: usize,
    pub player_id: Id,
    pub rating: f64,
    pub matches_played: usize,
}

/// Elo ranking system over any match record type
#[derive(Debug)]
pub struct EloRankingSystem<M: MatchRecord = Match> {
    config: RankingConfig,
    calculator: EloCalculator,
    ledger: MatchLedger<M>,
    memo: RatingMemo<IdOf<M>>,
    /// Number of chronologically ordered matches already replayed into the memo
    replayed_steps: usize,
}

impl<M: MatchRecord> EloRankingSystem<M> {
    /// Create a ranking system with validated configuration
    pub fn new(config: RankingConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            config,
            calculator: EloCalculator::new(config.k_factor),
            ledger: MatchLedger::new(),
            memo: RatingMemo::new(),
            replayed_steps: 0,
        })
    }

    /// Create a ranking system from a starting rating and K-factor
    pub fn with_settings(starting_rating: f64, k_factor: f64) -> Result<Self> {
        Self::new(RankingConfig::new(starting_rating, k_factor))
    }

    pub fn config(&self) -> &RankingConfig {
        &self.config
    }

    /// Registered players in registration order
    pub fn players(&self) -> &[M::Player] {
        self.ledger.players()
    }

    /// Recorded matches in chronological order
    pub fn matches(&self) -> &[M] {
        self.ledger.matches()
    }

    pub fn match_count(&self) -> usize {
        self.ledger.len()
    }

    pub fn is_registered(&self, player_id: &IdOf<M>) -> bool {
        self.ledger.is_registered(player_id)
    }

    /// Record a prebuilt match, e.g. one carrying a historical index
    pub fn record(&mut self, record: M) -> Result<()> {
        let position = self.ledger.record(record)?;

        if position < self.replayed_steps {
            warn!(
                "Match recorded before {} replayed matches, discarding memoized steps after {}",
                self.replayed_steps - position,
                position
            );
            self.memo.truncate(position);
            self.replayed_steps = position;
        }
        Ok(())
    }

    /// A player's current rating, looked up by id
    pub fn rating_of(&mut self, player_id: &IdOf<M>) -> Result<f64> {
        self.ensure_registered(player_id)?;

        if !self.ledger.has_played(player_id) {
            return Ok(self.config.starting_rating);
        }

        let total = self.ledger.len();
        if let Some(rating) = self.memo.get(player_id, total) {
            debug!("Rating cache hit for {} at step {}", player_id, total);
            return Ok(rating);
        }

        self.replay()?;
        self.memoized(player_id, total)
    }

    /// A player's rating after the first `step` matches
    pub fn rating_at(&mut self, player_id: &IdOf<M>, step: usize) -> Result<f64> {
        self.ensure_registered(player_id)?;

        let total = self.ledger.len();
        if step > total {
            return Err(RankingError::StepOutOfRange { step, total }.into());
        }

        if step > self.replayed_steps {
            self.replay()?;
        }
        self.memoized(player_id, step)
    }

    /// A player's rating at every step, from the starting rating to the latest match
    pub fn rating_history(&mut self, player_id: &IdOf<M>) -> Result<Vec<f64>> {
        self.ensure_registered(player_id)?;
        self.replay()?;

        self.memo
            .history(player_id)
            .map(<[f64]>::to_vec)
            .ok_or_else(|| anyhow!("Rating history missing for player {}", player_id))
    }

    /// Every registered player ordered by current rating, highest first
    ///
    /// Equal ratings keep registration order.
    pub fn leaderboard(&mut self) -> Result<Vec<LeaderboardEntry<IdOf<M>>>> {
        self.replay()?;

        let total = self.ledger.len();
        let mut rows = Vec::with_capacity(self.ledger.player_count());
        for player in self.ledger.players() {
            let player_id = player.id();
            let rating = self.memoized(&player_id, total)?;
            let matches_played = self.ledger.matches_played(&player_id);
            rows.push((player_id, rating, matches_played));
        }

        rows.sort_by(|a, b| b.1.total_cmp(&a.1));

        Ok(rows
            .into_iter()
            .enumerate()
            .map(|(i, (player_id, rating, matches_played))| LeaderboardEntry {
                rank: i + 1,
                player_id,
                rating,
                matches_played,
            })
            .collect())
    }

    /// Drop every memoized step except the starting ratings
    pub fn reset_cache(&mut self) {
        debug!("Clearing {} memoized rating entries", self.memo.len());
        self.memo.truncate(0);
        self.replayed_steps = 0;
    }

    /// Number of `(player, step)` entries currently memoized
    pub fn cached_entries(&self) -> usize {
        self.memo.len()
    }

    fn ensure_registered(&self, player_id: &IdOf<M>) -> Result<()> {
        if self.ledger.is_registered(player_id) {
            Ok(())
        } else {
            Err(RankingError::unknown_player(player_id).into())
        }
    }

    fn memoized(&self, player_id: &IdOf<M>, step: usize) -> Result<f64> {
        self.memo
            .get(player_id, step)
            .ok_or_else(|| anyhow!("No memoized rating for player {} at step {}", player_id, step))
    }

    /// Replay every match after `replayed_steps` into the memo
    fn replay(&mut self) -> Result<()> {
        let total = self.ledger.len();
        if self.replayed_steps >= total {
            return Ok(());
        }

        debug!(
            "Replaying matches {}..={} for {} players",
            self.replayed_steps + 1,
            total,
            self.ledger.player_count()
        );

        for step in (self.replayed_steps + 1)..=total {
            let previous = step - 1;
            let record = self
                .ledger
                .get(previous)
                .ok_or_else(|| anyhow!("Match {} missing from ledger", step))?;

            let player_a = record.player_a().id();
            let player_b = record.player_b().id();
            let rating_a = self.memoized(&player_a, previous)?;
            let rating_b = self.memoized(&player_b, previous)?;
            let change = self
                .calculator
                .rating_changes(rating_a, rating_b, record.result());

            for player in self.ledger.players() {
                let player_id = player.id();
                let mut rating = self
                    .memo
                    .get(&player_id, previous)
                    .ok_or_else(|| anyhow!("No memoized rating for player {}", player_id))?;

                if player_id == player_a {
                    rating += change.delta_a;
                } else if player_id == player_b {
                    rating += change.delta_b;
                }

                if !self.memo.insert(&player_id, step, rating) {
                    return Err(anyhow!(
                        "Rating for player {} at step {} was already memoized",
                        player_id,
                        step
                    ));
                }
            }

            self.replayed_steps = step;
        }

        Ok(())
    }
}

impl<M: MatchRecord> RatingSystem<M> for EloRankingSystem<M> {
    fn starting_rating(&self) -> f64 {
        self.config.starting_rating
    }

    fn k_factor(&self) -> f64 {
        self.config.k_factor
    }

    fn register_player(&mut self, player: M::Player) -> Result<()> {
        let player_id = player.id();
        self.ledger.register(player)?;
        self.memo
            .seed(player_id, self.config.starting_rating, self.replayed_steps);
        Ok(())
    }

    fn record_match(
        &mut self,
        player_a: M::Player,
        player_b: M::Player,
        result: MatchResult,
    ) -> Result<()> {
        let player_a_id = player_a.id();
        let player_b_id = player_b.id();
        self.ensure_registered(&player_a_id)?;
        self.ensure_registered(&player_b_id)?;

        let record = M::create(player_a, player_b, result)?;
        self.record(record)
    }

    fn calculate_rating(&mut self, player: &M::Player) -> Result<f64> {
        self.rating_of(&player.id())
    }
}

impl<M: MatchRecord> Default for EloRankingSystem<M> {
    fn default() -> Self {
        let config = RankingConfig::default();
        Self {
            config,
            calculator: EloCalculator::new(config.k_factor),
            ledger: MatchLedger::new(),
            memo: RatingMemo::new(),
            replayed_steps: 0,
        }
    }
}
