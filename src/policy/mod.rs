//! Decision-maker boundary.
//!
//! The engine makes no assumption about how moves are chosen - a learned
//! policy, a heuristic, a human. The only contract is `Policy`: an encoded
//! observation goes in, an action index comes out, decodable against the
//! declared action space.

pub mod heuristic;

pub use heuristic::HeuristicPolicy;

use crate::core::GameRng;

/// The external decision-maker contract: observation sample in, action
/// sample out.
pub trait Policy {
    /// Choose an action index for the given encoded observation.
    fn act(&mut self, observation: &[i64]) -> usize;
}

/// Uniform random baseline: samples the action space blindly.
///
/// Most of its actions are illegal in most states; useful as a floor and
/// for exercising the illegal-move path.
#[derive(Clone, Debug)]
pub struct RandomPolicy {
    rng: GameRng,
    num_moves: usize,
}

impl RandomPolicy {
    /// Create a random policy over an action space of `num_moves` actions.
    #[must_use]
    pub fn new(num_moves: usize, seed: u64) -> Self {
        assert!(num_moves > 0, "action space must be non-empty");
        Self {
            rng: GameRng::new(seed),
            num_moves,
        }
    }
}

impl Policy for RandomPolicy {
    fn act(&mut self, _observation: &[i64]) -> usize {
        self.rng.gen_range_usize(0..self.num_moves)
    }
}
