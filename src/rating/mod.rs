//! Elo rating engine building blocks
//!
//! This module provides the capability traits for players and match records,
//! the Elo update itself, and the memo that caches every replayed step.

pub mod calculator;
pub mod memo;
pub mod record;

// Re-export commonly used types
pub use calculator::{EloCalculator, RatingChange};
pub use memo::RatingMemo;
pub use record::{IdOf, MatchRecord, Participant};
