//! Error types for the rating engine
//!
//! This module defines all error types using anyhow for consistent error handling
//! throughout the crate. Callers that need to branch on the failure kind can
//! `downcast_ref::<RankingError>()` the returned error.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific ranking scenarios
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RankingError {
    #[error("Player {player_id} is not registered in this ranking system")]
    UnknownPlayer { player_id: String },

    #[error("Player {player_id} is already registered in this ranking system")]
    DuplicatePlayer { player_id: String },

    #[error("Invalid match: {reason}")]
    InvalidMatch { reason: String },

    #[error("Unsupported match result: {result}")]
    UnsupportedResult { result: String },

    #[error("Step {step} is out of range, only {total} matches have been recorded")]
    StepOutOfRange { step: usize, total: usize },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },
}

impl RankingError {
    /// Build an `UnknownPlayer` error from any displayable identifier
    pub fn unknown_player(player_id: impl std::fmt::Display) -> Self {
        Self::UnknownPlayer {
            player_id: player_id.to_string(),
        }
    }

    /// Build an `InvalidMatch` error for a player paired against themselves
    pub fn self_play(player_id: impl std::fmt::Display) -> Self {
        Self::InvalidMatch {
            reason: format!("player {} cannot play against themselves", player_id),
        }
    }
}
