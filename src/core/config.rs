//! Game configuration.
//!
//! A `Config` pins down the whole board shape: the ordered color list, the
//! per-rank card multiplicities, hand size, token pools, player count, and
//! the end-game countdown length. Both the engine and the codecs derive
//! every domain size from it, so a `Config` value fully determines the
//! encoded observation and action shapes.
//!
//! Named presets are plain constructors; callers pick one (or build their
//! own) and pass it down - there is no global registry.

use serde::{Deserialize, Serialize};

/// Immutable game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Config {
    /// Ordered list of distinct color names. `Color(i)` points at entry `i`.
    pub colors: Vec<String>,

    /// `card_counts[i]` = copies of rank `i + 1` per color.
    pub card_counts: Vec<u8>,

    /// Slots per hand.
    pub hand_size: usize,

    /// Clue token pool bound.
    pub max_tokens: u8,

    /// Fuse token pool bound; the game ends when fuses reach zero.
    pub max_fuses: u8,

    /// Number of players (at least 2).
    pub num_players: usize,

    /// Turns granted after the last card is dealt.
    pub turns_after_last_deal: u32,
}

impl Config {
    /// Number of colors.
    #[must_use]
    pub fn num_colors(&self) -> usize {
        self.colors.len()
    }

    /// Number of ranks.
    #[must_use]
    pub fn num_ranks(&self) -> usize {
        self.card_counts.len()
    }

    /// Total cards in a full deck.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.num_colors() * self.card_counts.iter().map(|&c| c as usize).sum::<usize>()
    }

    /// The score when every stack is complete.
    #[must_use]
    pub fn max_score(&self) -> u32 {
        (self.num_colors() * self.num_ranks()) as u32
    }

    /// Panic if the configuration cannot host a game.
    ///
    /// These are construction-time caller bugs, not recoverable conditions.
    pub fn assert_valid(&self) {
        assert!(self.num_players >= 2, "Must have at least 2 players");
        assert!(self.num_players <= 255, "At most 255 players supported");
        assert!(!self.colors.is_empty(), "Must have at least 1 color");
        assert!(!self.card_counts.is_empty(), "Must have at least 1 rank");
        assert!(self.hand_size >= 1, "Hand size must be at least 1");
        assert!(self.max_tokens >= 1, "Must have at least 1 clue token");
        assert!(self.max_fuses >= 1, "Must have at least 1 fuse token");
        assert!(
            self.deck_size() >= self.num_players * self.hand_size,
            "Deck too small to deal {} players {} cards",
            self.num_players,
            self.hand_size
        );
    }

    /// The full 5-color game.
    #[must_use]
    pub fn hanabi() -> Self {
        Self {
            colors: color_names(&["red", "green", "blue", "yellow", "white"]),
            card_counts: vec![3, 2, 2, 2, 1],
            hand_size: 5,
            max_tokens: 8,
            max_fuses: 4,
            num_players: 2,
            turns_after_last_deal: 2,
        }
    }

    /// A 4-color game with shorter hands.
    #[must_use]
    pub fn medium() -> Self {
        Self {
            colors: color_names(&["red", "green", "blue", "yellow"]),
            card_counts: vec![3, 2, 2, 1],
            hand_size: 4,
            max_tokens: 8,
            max_fuses: 4,
            num_players: 2,
            turns_after_last_deal: 2,
        }
    }

    /// A 3-color game small enough for exhaustive tests.
    #[must_use]
    pub fn mini() -> Self {
        Self {
            colors: color_names(&["red", "green", "blue"]),
            card_counts: vec![2, 2, 1],
            hand_size: 3,
            max_tokens: 6,
            max_fuses: 3,
            num_players: 2,
            turns_after_last_deal: 2,
        }
    }

    /// The mini game with four players.
    #[must_use]
    pub fn mini_4p() -> Self {
        Self {
            num_players: 4,
            turns_after_last_deal: 4,
            ..Self::mini()
        }
    }

    /// The mini game with an effectively unbounded clue pool.
    #[must_use]
    pub fn mini_lots_of_info() -> Self {
        Self {
            max_tokens: 30,
            ..Self::mini()
        }
    }

    /// The mini game with a long end-game countdown.
    #[must_use]
    pub fn mini_lots_of_turns() -> Self {
        Self {
            turns_after_last_deal: 15,
            ..Self::mini()
        }
    }
}

fn color_names(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}
