//! Recoverable rule violations.
//!
//! `IllegalMove` covers everything a well-formed driver can trigger at
//! runtime: the canonical response is to end the episode with the reward
//! policy's illegal-move reward. Caller bugs - stepping a finished game,
//! constructing an impossible config, feeding a codec a wrong-shape vector -
//! are assertions, not variants here.

use thiserror::Error;

/// A move the rules reject. The game state is unchanged when one of these
/// is returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum IllegalMove {
    /// A clue was attempted with an empty clue-token pool.
    #[error("no clue tokens left")]
    NoClueTokens,

    /// A clue targeted the acting player.
    #[error("cannot clue yourself")]
    SelfClue,

    /// A clue targeted a player index outside the game.
    #[error("no such player: {0}")]
    NoSuchPlayer(usize),

    /// A discard or play referenced an out-of-range or inert hand slot.
    #[error("no card at hand index {0}")]
    NoSuchCard(usize),
}
