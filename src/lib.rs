//! Elo Ledger - Elo ratings replayed from a ledger of match outcomes
//!
//! This crate registers players, records pairwise match outcomes in any
//! insertion order, and computes each player's Elo rating by replaying the
//! ledger chronologically, memoizing every player's rating after every match.

pub mod config;
pub mod error;
pub mod import;
pub mod ledger;
pub mod ranking;
pub mod rating;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{RankingError, Result};
pub use types::*;

// Re-export key components
pub use config::RankingConfig;
pub use ledger::MatchLedger;
pub use ranking::{EloRankingSystem, LeaderboardEntry, RatingSystem};
pub use rating::{EloCalculator, MatchRecord, Participant};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
