//! Rating system configuration

use crate::error::{RankingError, Result};
use serde::{Deserialize, Serialize};
use std::env;

/// Default rating assigned to a player with no recorded matches
pub const DEFAULT_STARTING_RATING: f64 = 1000.0;

/// Default K-factor
pub const DEFAULT_K_FACTOR: f64 = 400.0;

/// Constants a ranking system is built with. Fixed for the lifetime of the system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// Rating of a player before any matches
    pub starting_rating: f64,
    /// Scales how strongly a single match moves a rating
    pub k_factor: f64,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            starting_rating: DEFAULT_STARTING_RATING,
            k_factor: DEFAULT_K_FACTOR,
        }
    }
}

impl RankingConfig {
    pub fn new(starting_rating: f64, k_factor: f64) -> Self {
        Self {
            starting_rating,
            k_factor,
        }
    }

    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Override fields from `ELO_STARTING_RATING` and `ELO_K_FACTOR` when set
    pub fn apply_env(&mut self) -> Result<()> {
        if let Ok(starting) = env::var("ELO_STARTING_RATING") {
            self.starting_rating = starting.parse().map_err(|_| {
                RankingError::ConfigurationError {
                    message: format!("Invalid ELO_STARTING_RATING value: {}", starting),
                }
            })?;
        }
        if let Ok(k_factor) = env::var("ELO_K_FACTOR") {
            self.k_factor = k_factor.parse().map_err(|_| RankingError::ConfigurationError {
                message: format!("Invalid ELO_K_FACTOR value: {}", k_factor),
            })?;
        }
        Ok(())
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if !self.starting_rating.is_finite() {
            return Err(RankingError::ConfigurationError {
                message: "Starting rating must be a finite number".to_string(),
            }
            .into());
        }

        if !self.k_factor.is_finite() || self.k_factor <= 0.0 {
            return Err(RankingError::ConfigurationError {
                message: "K-factor must be a positive finite number".to_string(),
            }
            .into());
        }

        Ok(())
    }
}
