//! Memoized rating history
//!
//! Stores every player's rating after every replayed step. Step 0 holds the
//! starting rating; step `n` holds the rating after the `n`th match in
//! chronological order. Each player's history is a dense vector indexed by step,
//! which makes the `(player, step)` lookup a single hash plus an index.

use std::collections::HashMap;
use std::hash::Hash;

/// Cache of `(player, step) -> rating`
#[derive(Debug, Clone)]
pub struct RatingMemo<Id> {
    histories: HashMap<Id, Vec<f64>>,
}

impl<Id: Eq + Hash + Clone> RatingMemo<Id> {
    /// Create an empty memo
    pub fn new() -> Self {
        Self {
            histories: HashMap::new(),
        }
    }

    /// Seed a player's step 0 rating and carry it forward through `steps` steps
    ///
    /// Does nothing if the player is already seeded.
    pub fn seed(&mut self, player_id: Id, rating: f64, steps: usize) {
        self.histories
            .entry(player_id)
            .or_insert_with(|| vec![rating; steps + 1]);
    }

    /// Rating of a player after `step` matches, if memoized
    pub fn get(&self, player_id: &Id, step: usize) -> Option<f64> {
        self.histories
            .get(player_id)
            .and_then(|history| history.get(step))
            .copied()
    }

    pub fn contains(&self, player_id: &Id, step: usize) -> bool {
        self.get(player_id, step).is_some()
    }

    /// Store a player's rating for the next unfilled step
    ///
    /// Entries are never overwritten. Returns `false` if the step was already
    /// filled or would leave a gap in the player's history.
    pub fn insert(&mut self, player_id: &Id, step: usize, rating: f64) -> bool {
        match self.histories.get_mut(player_id) {
            Some(history) if history.len() == step => {
                history.push(rating);
                true
            }
            _ => false,
        }
    }

    /// Full memoized history of a player, indexed by step
    pub fn history(&self, player_id: &Id) -> Option<&[f64]> {
        self.histories.get(player_id).map(Vec::as_slice)
    }

    /// Drop every entry after `step`, keeping steps `0..=step`
    pub fn truncate(&mut self, step: usize) {
        for history in self.histories.values_mut() {
            history.truncate(step + 1);
        }
    }

    /// Number of memoized `(player, step)` entries
    pub fn len(&self) -> usize {
        self.histories.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.histories.is_empty()
    }
}

impl<Id: Eq + Hash + Clone> Default for RatingMemo<Id> {
    fn default() -> Self {
        Self::new()
    }
}
