//! Card value types.
//!
//! Colors and ranks are small index types; the `Config` owns the color
//! names and rank multiplicities they point into. Two physical cards with
//! equal `(color, rank)` are indistinguishable.

use serde::{Deserialize, Serialize};

/// Card color, as an index into `Config::colors`.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Color(pub u8);

impl Color {
    /// Create a new color from its index in the config's color list.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Get the raw color index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all colors of a game with `num_colors` colors.
    pub fn all(num_colors: usize) -> impl Iterator<Item = Color> {
        (0..num_colors as u8).map(Color)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Color({})", self.0)
    }
}

/// Card rank, 1-based: the lowest rank is `Rank(1)`.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Rank(pub u8);

impl Rank {
    /// Create a new rank from its 1-based value.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Get the 1-based rank value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Get the 0-based rank index (for table lookups).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize - 1
    }

    /// Iterate over all ranks of a game with `num_ranks` ranks, lowest first.
    pub fn all(num_ranks: usize) -> impl Iterator<Item = Rank> {
        (1..=num_ranks as u8).map(Rank)
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rank({})", self.0)
    }
}

/// A single card.
///
/// Equality is structural. `Ord` sorts color-major then by rank, the same
/// ordering the codec's multiset encodings index by, so sorting a decoded
/// card list yields the canonical reconstruction.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Card {
    pub color: Color,
    pub rank: Rank,
}

impl Card {
    /// Create a new card.
    #[must_use]
    pub const fn new(color: Color, rank: Rank) -> Self {
        Self { color, rank }
    }
}
