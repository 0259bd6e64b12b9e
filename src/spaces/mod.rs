//! Spaces: configuration-derived codecs between game values and flat
//! numeric vectors.
//!
//! ## Two Strategies
//!
//! - `NestedSpaces`: structured per-field encoding. Every card and every
//!   information value occupies its own pair of positions; fully invertible.
//! - `FlattenedSpaces`: histogram encoding. Hands and piles become counts
//!   over the information domain - uniform shape, but per-slot ordering is
//!   erased, and discard/play actions address information classes rather
//!   than hand indices (resolved against the actual hand at decode time).
//!
//! ## Shape Contract
//!
//! All domain sizes derive from the `Config` once, at construction. Encoded
//! vectors have a fixed length regardless of game progress; hands shorter
//! than `hand_size` pad with sentinels. Feeding a decode function a vector
//! of the wrong shape is a caller bug and fails an assertion.
//!
//! ## Move Samples
//!
//! Both codecs lay moves out in four blocks with fixed offsets: clue-color,
//! clue-rank, discard, play. Clue targets travel as a relative offset
//! (0 = the player after the actor); the codec translates to and from the
//! engine's absolute `PlayerId` at the boundary.

pub mod flattened;
pub mod nested;

pub use flattened::FlattenedSpaces;
pub use nested::NestedSpaces;

use crate::cards::{Card, Color, Hand, Rank};
use crate::core::{Config, Move, Observation, PlayerId};

/// A bidirectional mapping between game values and fixed-shape vectors.
pub trait Spaces {
    /// The configuration the domains derive from.
    fn config(&self) -> &Config;

    /// Per-position domain cardinality of encoded observations.
    ///
    /// The length of this vector is the encoded observation length.
    fn observation_bounds(&self) -> Vec<i64>;

    /// Flat length of encoded observations.
    fn observation_len(&self) -> usize {
        self.observation_bounds().len()
    }

    /// Total number of encodable moves (the action-space size).
    fn num_moves(&self) -> usize;

    /// Encode an observation into its fixed-shape vector.
    fn encode_observation(&self, obs: &Observation) -> Vec<i64>;

    /// Decode an observation vector back into a typed `Observation`.
    ///
    /// Panics on a wrong-shape vector. `FlattenedSpaces` panics
    /// unconditionally: its observation encoding is not invertible.
    fn decode_observation(&self, sample: &[i64]) -> Observation;

    /// Encode `actor`'s move as a flat action index.
    ///
    /// `hand` is the actor's hand; `NestedSpaces` ignores it, while
    /// `FlattenedSpaces` uses it to express discards and plays as
    /// information classes.
    fn encode_move(&self, mv: &Move, actor: PlayerId, hand: &Hand) -> usize;

    /// Decode a flat action index into a move for `actor`.
    ///
    /// `FlattenedSpaces` resolves discard/play actions against `hand`; an
    /// unmatchable action decodes to an out-of-range index that
    /// `apply_move` rejects as an `IllegalMove`.
    fn decode_move(&self, sample: usize, actor: PlayerId, hand: &Hand) -> Move;
}

/// Every unique card of a config, ordered by color then rank.
///
/// This ordering is load-bearing: the multiset encodings index into it
/// positionally, so encode and decode must share it exactly.
#[must_use]
pub fn unique_cards(config: &Config) -> Vec<Card> {
    Color::all(config.num_colors())
        .flat_map(|color| Rank::all(config.num_ranks()).map(move |rank| Card::new(color, rank)))
        .collect()
}

/// Clue blocks are identical in both codecs: colors first, then ranks,
/// player-offset-major within each.
pub(crate) fn clue_blocks_len(config: &Config) -> usize {
    (config.num_players - 1) * (config.num_colors() + config.num_ranks())
}

/// Encode a clue as its index within the clue blocks, or `None` for
/// discard/play moves.
pub(crate) fn encode_clue(config: &Config, mv: &Move, actor: PlayerId) -> Option<usize> {
    let num_colors = config.num_colors();
    let num_ranks = config.num_ranks();
    match *mv {
        Move::ClueColor { target, color } => {
            let offset = relative_offset(config, actor, target);
            Some(offset * num_colors + color.index())
        }
        Move::ClueRank { target, rank } => {
            let base = (config.num_players - 1) * num_colors;
            let offset = relative_offset(config, actor, target);
            Some(base + offset * num_ranks + rank.index())
        }
        Move::Discard { .. } | Move::Play { .. } => None,
    }
}

/// Decode a sample within the clue blocks, or `None` if it lies beyond them.
pub(crate) fn decode_clue(config: &Config, sample: usize, actor: PlayerId) -> Option<Move> {
    let num_colors = config.num_colors();
    let num_ranks = config.num_ranks();
    let color_block = (config.num_players - 1) * num_colors;
    let rank_block = (config.num_players - 1) * num_ranks;

    if sample < color_block {
        return Some(Move::ClueColor {
            target: target_of(config, actor, sample / num_colors),
            color: Color((sample % num_colors) as u8),
        });
    }
    let sample = sample - color_block;
    if sample < rank_block {
        return Some(Move::ClueRank {
            target: target_of(config, actor, sample / num_ranks),
            rank: Rank((sample % num_ranks + 1) as u8),
        });
    }
    None
}

/// Translate an absolute clue target into the wire offset (0 = next player).
///
/// Panics on a self-targeted or out-of-range clue: such a move has no
/// encoding, so trying is a caller bug.
pub(crate) fn relative_offset(config: &Config, actor: PlayerId, target: PlayerId) -> usize {
    let np = config.num_players;
    assert!(target.index() < np, "clue target outside the game");
    assert!(target != actor, "a self-targeted clue has no encoding");
    (target.index() + np - actor.index() - 1) % np
}

/// Translate a wire offset back into an absolute player.
pub(crate) fn target_of(config: &Config, actor: PlayerId, offset: usize) -> PlayerId {
    let np = config.num_players;
    PlayerId(((actor.index() + 1 + offset) % np) as u8)
}
