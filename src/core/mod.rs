//! Core engine types: players, RNG, configuration, moves, errors, state.
//!
//! Everything here is configured via `Config` rather than hardcoded to the
//! standard 5-color game.

pub mod config;
pub mod error;
pub mod moves;
pub mod player;
pub mod rng;
pub mod state;

pub use config::Config;
pub use error::IllegalMove;
pub use moves::{Move, MoveRecord};
pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use state::{GameState, Observation, OtherHand, PlayedStacks};
