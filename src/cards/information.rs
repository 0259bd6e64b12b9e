//! Partial knowledge about a single card.
//!
//! Clues are positive-only: a clue sets the matching attribute on matching
//! cards and says nothing about the rest. `Information` therefore carries
//! two independently-optional fields and never any negative facts.

use serde::{Deserialize, Serialize};

use super::card::{Color, Rank};

/// What a card's holder knows about it.
///
/// Four knowledge states are possible: both attributes known, only the
/// color, only the rank, or nothing.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Information {
    pub color: Option<Color>,
    pub rank: Option<Rank>,
}

impl Information {
    /// Create information with the given fields.
    #[must_use]
    pub const fn new(color: Option<Color>, rank: Option<Rank>) -> Self {
        Self { color, rank }
    }

    /// Information for a freshly dealt card: nothing known.
    #[must_use]
    pub const fn unknown() -> Self {
        Self {
            color: None,
            rank: None,
        }
    }

    /// True if neither attribute is known.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.color.is_none() && self.rank.is_none()
    }

    /// True if both attributes are known.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.color.is_some() && self.rank.is_some()
    }
}
