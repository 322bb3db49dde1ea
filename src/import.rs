//! Ledger description files
//!
//! A ledger file names the players and lists their matches in the order they
//! were played. Both TOML and JSON are accepted:
//!
//! ```toml
//! players = ["alice", "bob"]
//!
//! [[matches]]
//! a = "alice"
//! b = "bob"
//! result = "player_a"
//! ```
//!
//! Matches without an explicit `recorded_at` timestamp inherit the previous
//! match's timestamp, so they replay in file order.

use crate::config::RankingConfig;
use crate::error::Result;
use crate::ranking::{EloRankingSystem, RatingSystem};
use crate::types::{Match, MatchResult};
use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Players and matches read from a ledger file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LedgerFile {
    pub players: Vec<String>,
    #[serde(default)]
    pub matches: Vec<MatchEntry>,
}

/// One match line of a ledger file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchEntry {
    pub a: String,
    pub b: String,
    #[serde(default)]
    pub result: MatchResult,
    #[serde(default)]
    pub recorded_at: Option<DateTime<Utc>>,
}

impl LedgerFile {
    /// Read a ledger file, choosing the format from the file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read ledger file {}", path.display()))?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let parsed = if is_json {
            Self::from_json_str(&contents)
        } else {
            Self::from_toml_str(&contents)
        };
        parsed.with_context(|| format!("Failed to parse ledger file {}", path.display()))
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn from_json_str(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Register every player and record every match into a new ranking system
    pub fn into_system(self, config: RankingConfig) -> Result<EloRankingSystem<Match<String>>> {
        let mut system = EloRankingSystem::new(config)?;

        for player in self.players {
            system.register_player(player)?;
        }

        let mut recorded_at = DateTime::<Utc>::MIN_UTC;
        for (line, entry) in self.matches.into_iter().enumerate() {
            if let Some(timestamp) = entry.recorded_at {
                recorded_at = timestamp;
            }
            let record = Match::recorded_at(entry.a, entry.b, entry.result, recorded_at)
                .with_context(|| format!("Invalid match #{}", line + 1))?;
            system
                .record(record)
                .with_context(|| format!("Failed to record match #{}", line + 1))?;
        }

        info!(
            "Loaded {} players and {} matches",
            system.players().len(),
            system.match_count()
        );
        Ok(system)
    }
}
