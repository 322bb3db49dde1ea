//! Application configuration for the replay tool
//!
//! Combines the ranking constants with logging settings, loaded from a TOML
//! file and/or environment variables and validated before use.

use crate::config::rating::RankingConfig;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingSettings,
    pub ranking: RankingConfig,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
        }
    }
}

/// Settings given on the command line, applied over file and environment values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub log_level: Option<String>,
    pub starting_rating: Option<f64>,
    pub k_factor: Option<f64>,
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        Self::load(None, &ConfigOverrides::default())
    }

    /// Load configuration from a TOML file, then apply environment overrides
    pub fn from_file(path: &Path) -> Result<Self> {
        Self::load(Some(path), &ConfigOverrides::default())
    }

    /// Merge an optional TOML file, the environment and command line overrides
    ///
    /// Validation runs once on the merged result, so an override can replace
    /// an invalid file or environment value.
    pub fn load(path: Option<&Path>, overrides: &ConfigOverrides) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::read_file(path)?,
            None => Self::default(),
        };

        config.apply_env()?;
        config.with_overrides(overrides)
    }

    /// Apply command line overrides and validate
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Result<Self> {
        if let Some(log_level) = &overrides.log_level {
            self.logging.log_level = log_level.clone();
        }
        if let Some(starting_rating) = overrides.starting_rating {
            self.ranking.starting_rating = starting_rating;
        }
        if let Some(k_factor) = overrides.k_factor {
            self.ranking.k_factor = k_factor;
        }

        validate_config(&self)?;
        Ok(self)
    }

    fn read_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    fn apply_env(&mut self) -> Result<()> {
        if let Ok(log_level) = env::var("ELO_LOG_LEVEL") {
            self.logging.log_level = log_level;
        }
        self.ranking.apply_env()
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    match config.logging.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.logging.log_level)),
    }

    config.ranking.validate()
}
