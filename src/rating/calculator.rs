//! Elo rating calculator
//!
//! Implements the logistic Elo update for a single match between two sides.
//! The base-10 curve and the 400 point scale are fixed; only the K-factor is
//! configurable.

use crate::types::MatchResult;
use serde::{Deserialize, Serialize};

/// Rating difference at which the favourite is expected to score ten times as often
pub const RATING_SCALE: f64 = 400.0;

pub const WIN_SCORE: f64 = 1.0;
pub const DRAW_SCORE: f64 = 0.5;
pub const LOSS_SCORE: f64 = 0.0;

/// Result of applying one match to the two participants' ratings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingChange {
    /// Expected score of player A before the match (0.0 to 1.0)
    pub expected_a: f64,
    /// Expected score of player B before the match (0.0 to 1.0)
    pub expected_b: f64,
    /// Rating change applied to player A
    pub delta_a: f64,
    /// Rating change applied to player B
    pub delta_b: f64,
}

/// Elo rating calculator with a fixed K-factor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EloCalculator {
    k_factor: f64,
}

impl EloCalculator {
    /// Create a new Elo calculator
    pub fn new(k_factor: f64) -> Self {
        Self { k_factor }
    }

    pub fn k_factor(&self) -> f64 {
        self.k_factor
    }

    /// Expected score of a player rated `rating` against an opponent rated `opponent`
    pub fn expected_score(rating: f64, opponent: f64) -> f64 {
        1.0 / (10f64.powf((opponent - rating) / RATING_SCALE) + 1.0)
    }

    /// Actual scores of (player A, player B) for a given result
    pub fn actual_scores(result: MatchResult) -> (f64, f64) {
        match result {
            MatchResult::PlayerA => (WIN_SCORE, LOSS_SCORE),
            MatchResult::PlayerB => (LOSS_SCORE, WIN_SCORE),
            MatchResult::Draw => (DRAW_SCORE, DRAW_SCORE),
        }
    }

    /// Calculate rating changes for both sides of a match
    pub fn rating_changes(&self, rating_a: f64, rating_b: f64, result: MatchResult) -> RatingChange {
        let expected_a = Self::expected_score(rating_a, rating_b);
        let expected_b = Self::expected_score(rating_b, rating_a);
        let (score_a, score_b) = Self::actual_scores(result);

        RatingChange {
            expected_a,
            expected_b,
            delta_a: self.k_factor * (score_a - expected_a),
            delta_b: self.k_factor * (score_b - expected_b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillratings::elo::{elo, EloConfig, EloRating};
    use skillratings::Outcomes;

    #[test]
    fn test_expected_score_equal_ratings() {
        assert_eq!(EloCalculator::expected_score(1500.0, 1500.0), 0.5);
    }

    #[test]
    fn test_expected_scores_sum_to_one() {
        let a = EloCalculator::expected_score(1236.4, 1000.0);
        let b = EloCalculator::expected_score(1000.0, 1236.4);
        assert!((a + b - 1.0).abs() < 1e-12);
        assert!(a > b);
    }

    #[test]
    fn test_win_between_equals() {
        let calculator = EloCalculator::new(400.0);
        let change = calculator.rating_changes(1000.0, 1000.0, MatchResult::PlayerA);
        assert_eq!(change.delta_a, 200.0);
        assert_eq!(change.delta_b, -200.0);
    }

    #[test]
    fn test_draw_between_equals_changes_nothing() {
        let calculator = EloCalculator::new(32.0);
        let change = calculator.rating_changes(1400.0, 1400.0, MatchResult::Draw);
        assert_eq!(change.delta_a, 0.0);
        assert_eq!(change.delta_b, 0.0);
    }

    #[test]
    fn test_underdog_gains_more() {
        let calculator = EloCalculator::new(32.0);
        let upset = calculator.rating_changes(1000.0, 1400.0, MatchResult::PlayerA);
        let expected = calculator.rating_changes(1400.0, 1000.0, MatchResult::PlayerA);
        assert!(upset.delta_a > 16.0);
        assert!(expected.delta_a < 16.0);
    }

    #[test]
    fn test_matches_reference_implementation() {
        let k = 24.0;
        let calculator = EloCalculator::new(k);
        let config = EloConfig { k };
        let cases = [
            (1000.0, 1000.0, MatchResult::PlayerA, Outcomes::WIN),
            (1320.5, 987.25, MatchResult::PlayerB, Outcomes::LOSS),
            (850.0, 1610.0, MatchResult::Draw, Outcomes::DRAW),
        ];

        for (rating_a, rating_b, result, outcome) in cases {
            let change = calculator.rating_changes(rating_a, rating_b, result);
            let (new_a, new_b) = elo(
                &EloRating { rating: rating_a },
                &EloRating { rating: rating_b },
                &outcome,
                &config,
            );
            assert!((rating_a + change.delta_a - new_a.rating).abs() < 1e-9);
            assert!((rating_b + change.delta_b - new_b.rating).abs() < 1e-9);
        }
    }
}
