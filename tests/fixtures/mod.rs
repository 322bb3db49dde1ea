//! Test fixtures and custom implementations for integration testing

#![allow(dead_code)]

use elo_ledger::error::{RankingError, Result};
use elo_ledger::rating::{MatchRecord, Participant};
use elo_ledger::types::{DecisiveMatch, MatchResult, Player};
use elo_ledger::utils::ratings_within_tolerance;
use elo_ledger::{EloRankingSystem, RatingSystem};

/// Tolerance used when comparing against published rating values
pub const RATING_TOLERANCE: f64 = 0.1;

/// Assert a rating matches an expected value within `RATING_TOLERANCE`
pub fn assert_rating(actual: f64, expected: f64) {
    assert!(
        ratings_within_tolerance(actual, expected, RATING_TOLERANCE),
        "expected rating {:.1}, got {}",
        expected,
        actual
    );
}

/// Create a default ranking system with `count` freshly registered players
pub fn create_test_system(count: usize) -> (EloRankingSystem, Vec<Player>) {
    create_test_system_with(EloRankingSystem::default(), count)
}

/// Register `count` fresh players into an existing ranking system
pub fn create_test_system_with(
    mut system: EloRankingSystem,
    count: usize,
) -> (EloRankingSystem, Vec<Player>) {
    let players: Vec<Player> = (0..count).map(|_| Player::new()).collect();
    for player in &players {
        system
            .register_player(*player)
            .expect("fresh players register");
    }
    (system, players)
}

/// Player with a sequential integer id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberedPlayer {
    pub id: i32,
}

impl NumberedPlayer {
    pub fn new(id: i32) -> Self {
        Self { id }
    }
}

impl Participant for NumberedPlayer {
    type Id = i32;

    fn id(&self) -> i32 {
        self.id
    }
}

/// Ranking system that scores a flat K points per win or loss
///
/// Shows that callers can implement `RatingSystem` with their own rules over
/// the crate's player and match contracts. Not an Elo implementation.
#[derive(Debug, Default)]
pub struct WinCountRankingSystem {
    players: Vec<NumberedPlayer>,
    matches: Vec<DecisiveMatch<NumberedPlayer>>,
}

impl WinCountRankingSystem {
    pub fn match_count(&self) -> usize {
        self.matches.len()
    }
}

impl RatingSystem<DecisiveMatch<NumberedPlayer>> for WinCountRankingSystem {
    fn starting_rating(&self) -> f64 {
        1000.0
    }

    fn k_factor(&self) -> f64 {
        50.0
    }

    fn register_player(&mut self, player: NumberedPlayer) -> Result<()> {
        self.players.push(player);
        Ok(())
    }

    fn record_match(
        &mut self,
        player_a: NumberedPlayer,
        player_b: NumberedPlayer,
        result: MatchResult,
    ) -> Result<()> {
        let record = DecisiveMatch::create(player_a, player_b, result)?;
        self.matches.push(record);
        Ok(())
    }

    fn calculate_rating(&mut self, player: &NumberedPlayer) -> Result<f64> {
        if !self.players.contains(player) {
            return Err(RankingError::unknown_player(player.id).into());
        }

        let wins = self
            .matches
            .iter()
            .filter(|m| m.winner() == Some(player))
            .count() as f64;
        let losses = self
            .matches
            .iter()
            .filter(|m| m.loser() == Some(player))
            .count() as f64;

        Ok(self.starting_rating() + (wins - losses) * self.k_factor())
    }
}
