//! # rust-hanabi
//!
//! A rules engine for the cooperative card game Hanabi, paired with
//! lossless codecs that project game state and moves onto fixed-shape
//! numeric vectors for RL training.
//!
//! ## Design Principles
//!
//! 1. **Configuration Over Convention**: board shape (colors, rank
//!    multiplicities, hand size, tokens, players) comes from a `Config`
//!    value; nothing about the standard 5-color game is hardcoded.
//!
//! 2. **One Writer, Atomic Moves**: `GameState::apply_move` is the only
//!    mutator. A rejected move leaves the state bit-for-bit unchanged.
//!
//! 3. **Deterministic Episodes**: the deck shuffle is the only source of
//!    randomness, injected via a seedable `GameRng`.
//!
//! 4. **Exact Codecs**: encoding and decoding are mutual inverses on valid
//!    inputs, and the encoded shape depends only on the `Config`.
//!
//! ## Modules
//!
//! - `core`: player ids, RNG, configuration, moves, errors, the game state
//! - `cards`: card, information, hand, and deck value types
//! - `reward`: pluggable scoring policies over the played stacks
//! - `spaces`: nested and flattened observation/action codecs
//! - `policy`: decision-maker boundary (random baseline, 2-player heuristic)

pub mod cards;
pub mod core;
pub mod policy;
pub mod reward;
pub mod spaces;

// Re-export commonly used types
pub use crate::core::{
    Config, GameRng, GameRngState, GameState, IllegalMove, Move, MoveRecord, Observation,
    OtherHand, PlayedStacks, PlayerId, PlayerMap,
};

pub use crate::cards::{Card, Color, Deck, Hand, HandSlot, Information, Rank};

pub use crate::reward::{ConstantReward, LinearReward, Reward, SkewedReward, SquaredReward};

pub use crate::spaces::{FlattenedSpaces, NestedSpaces, Spaces};

pub use crate::policy::{HeuristicPolicy, Policy, RandomPolicy};
