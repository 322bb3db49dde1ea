//! Capability traits for the players and match records a ranking system replays
//!
//! The engine never looks at concrete player or match types. Anything that can
//! name itself with a hashable identifier is a [`Participant`], and anything that
//! can report two participants, a result and an orderable index is a
//! [`MatchRecord`].

use crate::error::Result;
use crate::types::MatchResult;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use uuid::Uuid;

/// A participant in an Elo ranking system, identified by a unique key
pub trait Participant: Clone + Debug {
    /// Identifier that references this participant within a ranking system
    type Id: Clone + Eq + Hash + Debug + Display;

    /// The unique identifier for this participant
    fn id(&self) -> Self::Id;
}

/// Identifier type of the players taking part in a match record type
pub type IdOf<M> = <<M as MatchRecord>::Player as Participant>::Id;

/// A record of a single match between two participants
///
/// `Index` orders records historically. Records with equal indices are replayed
/// in the order they were recorded.
pub trait MatchRecord: Sized + Debug {
    /// The participant type on both sides of the match
    type Player: Participant;

    /// The historical index of a record
    type Index: Ord + Clone + Debug;

    /// Build a fully populated record with a fresh index
    fn create(player_a: Self::Player, player_b: Self::Player, result: MatchResult)
        -> Result<Self>;

    /// The first player
    fn player_a(&self) -> &Self::Player;

    /// The second player
    fn player_b(&self) -> &Self::Player;

    /// The result of this match
    fn result(&self) -> MatchResult;

    /// The historical index of this record
    fn record_index(&self) -> Self::Index;

    /// Who won this match, `None` for a draw
    fn winner(&self) -> Option<&Self::Player> {
        match self.result() {
            MatchResult::PlayerA => Some(self.player_a()),
            MatchResult::PlayerB => Some(self.player_b()),
            MatchResult::Draw => None,
        }
    }

    /// Who lost this match, `None` for a draw
    fn loser(&self) -> Option<&Self::Player> {
        match self.result() {
            MatchResult::PlayerA => Some(self.player_b()),
            MatchResult::PlayerB => Some(self.player_a()),
            MatchResult::Draw => None,
        }
    }

    /// Whether the given player took part in this match on either side
    fn includes_player(&self, player_id: &IdOf<Self>) -> bool {
        self.player_a().id() == *player_id || self.player_b().id() == *player_id
    }
}

macro_rules! impl_participant_for_key {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Participant for $ty {
                type Id = $ty;

                fn id(&self) -> Self::Id {
                    self.clone()
                }
            }
        )*
    };
}

// Bare keys can stand in for players when callers have no richer type.
impl_participant_for_key!(String, Uuid, u32, u64, i32, i64);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Match;

    #[test]
    fn test_bare_keys_are_participants() {
        assert_eq!(7u32.id(), 7);
        assert_eq!("alice".to_string().id(), "alice");
    }

    #[test]
    fn test_winner_and_loser_are_derived_from_result() {
        let win = Match::create(1u32, 2u32, MatchResult::PlayerB).unwrap();
        assert_eq!(win.winner(), Some(&2));
        assert_eq!(win.loser(), Some(&1));

        let draw = Match::create(1u32, 2u32, MatchResult::Draw).unwrap();
        assert_eq!(draw.winner(), None);
        assert_eq!(draw.loser(), None);
    }

    #[test]
    fn test_includes_player() {
        let m = Match::create("a".to_string(), "b".to_string(), MatchResult::PlayerA).unwrap();
        assert!(m.includes_player(&"a".to_string()));
        assert!(m.includes_player(&"b".to_string()));
        assert!(!m.includes_player(&"c".to_string()));
    }
}
