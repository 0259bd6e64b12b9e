//! Moves: the four things a player can do on their turn.
//!
//! The variants form a closed sum type, so `apply_move`'s dispatch is an
//! exhaustive match the compiler checks. Clue targets are absolute
//! `PlayerId`s inside the engine; the codecs translate to and from the
//! external relative-offset form at the boundary.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::cards::{Color, Rank};

/// A complete game move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Tell `target` which of their cards have `color`.
    ClueColor { target: PlayerId, color: Color },

    /// Tell `target` which of their cards have `rank`.
    ClueRank { target: PlayerId, rank: Rank },

    /// Discard the card at `index` in the actor's own hand.
    Discard { index: usize },

    /// Play the card at `index` in the actor's own hand.
    Play { index: usize },
}

impl Move {
    /// True for either clue variant.
    #[must_use]
    pub fn is_clue(&self) -> bool {
        matches!(self, Move::ClueColor { .. } | Move::ClueRank { .. })
    }

    /// The clue's target, if this is a clue.
    #[must_use]
    pub fn clue_target(&self) -> Option<PlayerId> {
        match *self {
            Move::ClueColor { target, .. } | Move::ClueRank { target, .. } => Some(target),
            _ => None,
        }
    }

    /// The referenced hand index, if this is a discard or play.
    #[must_use]
    pub fn hand_index(&self) -> Option<usize> {
        match *self {
            Move::Discard { index } | Move::Play { index } => Some(index),
            _ => None,
        }
    }
}

/// A move recorded in the game history.
///
/// Used for replay, debugging, and per-player last-move queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Who moved.
    pub player: PlayerId,

    /// What they did.
    pub mv: Move,

    /// Turn number when the move was made (starts at 1).
    pub turn: u32,
}
