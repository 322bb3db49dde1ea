//! Common types used throughout the rating engine

use crate::error::{RankingError, Result};
use crate::rating::{MatchRecord, Participant};
use crate::utils::{current_timestamp, generate_player_id, next_sequence};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for default players
pub type PlayerId = Uuid;

/// Outcome of a match from the point of view of its two sides
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchResult {
    PlayerA,
    PlayerB,
    #[default]
    Draw,
}

impl MatchResult {
    pub fn is_draw(self) -> bool {
        self == MatchResult::Draw
    }
}

impl std::fmt::Display for MatchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchResult::PlayerA => write!(f, "PlayerA"),
            MatchResult::PlayerB => write!(f, "PlayerB"),
            MatchResult::Draw => write!(f, "Draw"),
        }
    }
}

/// Default player, identified by a random UUID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
}

impl Player {
    /// Create a player with a freshly generated identifier
    pub fn new() -> Self {
        Self {
            id: generate_player_id(),
        }
    }

    /// Create a player with a known identifier
    pub fn with_id(id: PlayerId) -> Self {
        Self { id }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Participant for Player {
    type Id = PlayerId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Default match record, historically ordered by the time it was recorded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match<P = Player> {
    player_a: P,
    player_b: P,
    result: MatchResult,
    recorded_at: DateTime<Utc>,
}

impl<P: Participant> Match<P> {
    /// Create a match stamped with the current time
    pub fn new(player_a: P, player_b: P, result: MatchResult) -> Result<Self> {
        Self::recorded_at(player_a, player_b, result, current_timestamp())
    }

    /// Create a match with an explicit timestamp, e.g. when importing history
    pub fn recorded_at(
        player_a: P,
        player_b: P,
        result: MatchResult,
        recorded_at: DateTime<Utc>,
    ) -> Result<Self> {
        if player_a.id() == player_b.id() {
            return Err(RankingError::self_play(player_a.id()).into());
        }

        Ok(Self {
            player_a,
            player_b,
            result,
            recorded_at,
        })
    }
}

impl<P: Participant> MatchRecord for Match<P> {
    type Player = P;
    type Index = DateTime<Utc>;

    fn create(player_a: P, player_b: P, result: MatchResult) -> Result<Self> {
        Self::new(player_a, player_b, result)
    }

    fn player_a(&self) -> &P {
        &self.player_a
    }

    fn player_b(&self) -> &P {
        &self.player_b
    }

    fn result(&self) -> MatchResult {
        self.result
    }

    fn record_index(&self) -> Self::Index {
        self.recorded_at
    }
}

/// Match record for ledgers that only accept decisive results
///
/// Ordered by an explicit sequence number. Draws are rejected on construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisiveMatch<P = Player> {
    player_a: P,
    player_b: P,
    result: MatchResult,
    sequence: u64,
}

impl<P: Participant> DecisiveMatch<P> {
    /// Create a decisive match with an explicit sequence number
    pub fn with_sequence(
        player_a: P,
        player_b: P,
        result: MatchResult,
        sequence: u64,
    ) -> Result<Self> {
        if result.is_draw() {
            return Err(RankingError::UnsupportedResult {
                result: format!("{} (decisive matches cannot end in a draw)", result),
            }
            .into());
        }
        if player_a.id() == player_b.id() {
            return Err(RankingError::self_play(player_a.id()).into());
        }

        Ok(Self {
            player_a,
            player_b,
            result,
            sequence,
        })
    }

    /// Create a match where `winner` beat `loser`
    pub fn won_by(winner: P, loser: P) -> Result<Self> {
        Self::create(winner, loser, MatchResult::PlayerA)
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }
}

impl<P: Participant> MatchRecord for DecisiveMatch<P> {
    type Player = P;
    type Index = u64;

    fn create(player_a: P, player_b: P, result: MatchResult) -> Result<Self> {
        Self::with_sequence(player_a, player_b, result, next_sequence())
    }

    fn player_a(&self) -> &P {
        &self.player_a
    }

    fn player_b(&self) -> &P {
        &self.player_b
    }

    fn result(&self) -> MatchResult {
        self.result
    }

    fn record_index(&self) -> Self::Index {
        self.sequence
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_default_result_is_draw() {
        assert_eq!(MatchResult::default(), MatchResult::Draw);
        assert!(MatchResult::default().is_draw());
    }

    #[test]
    fn test_players_get_unique_ids() {
        assert_ne!(Player::new().id, Player::new().id);
    }

    #[test]
    fn test_match_rejects_self_play() {
        let player = Player::new();
        let err = Match::new(player, player, MatchResult::PlayerA).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<RankingError>(),
            Some(RankingError::InvalidMatch { .. })
        ));
    }

    #[test]
    fn test_match_orders_by_timestamp() {
        let now = current_timestamp();
        let early = Match::recorded_at(1u32, 2u32, MatchResult::Draw, now).unwrap();
        let late =
            Match::recorded_at(1u32, 2u32, MatchResult::Draw, now + Duration::seconds(1)).unwrap();
        assert!(early.record_index() < late.record_index());
    }

    #[test]
    fn test_decisive_match_rejects_draws() {
        let err = DecisiveMatch::create(1u32, 2u32, MatchResult::Draw).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<RankingError>(),
            Some(RankingError::UnsupportedResult { .. })
        ));
    }

    #[test]
    fn test_decisive_match_sequences_increase() {
        let first = DecisiveMatch::won_by(1u32, 2u32).unwrap();
        let second = DecisiveMatch::won_by(2u32, 1u32).unwrap();
        assert!(first.sequence() < second.sequence());
        assert_eq!(second.winner(), Some(&2));
    }

    #[test]
    fn test_result_serializes_as_snake_case() {
        let json = serde_json::to_string(&MatchResult::PlayerB).unwrap();
        assert_eq!(json, "\"player_b\"");
    }
}
