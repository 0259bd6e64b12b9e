//! Reward policies: pure functions of the played stacks.
//!
//! Each policy scores the current board; none looks at tokens, the discard
//! pile, or whose turn it is. The illegal-move reward defaults to the
//! negation of the current reward, so an episode that ends on a rule
//! violation nets out to roughly zero.

use crate::core::GameState;

/// A pluggable scoring function over the played stacks.
pub trait Reward {
    /// Score the current state.
    fn current_reward(&self, state: &GameState) -> i64;

    /// Reward applied when a driver attempts a move the engine rejects.
    fn illegal_move_reward(&self, state: &GameState) -> i64 {
        -self.current_reward(state)
    }
}

/// One point per played card.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConstantReward;

impl Reward for ConstantReward {
    fn current_reward(&self, state: &GameState) -> i64 {
        i64::from(state.current_score())
    }
}

/// Triangular per-stack reward: a stack of height `h` is worth
/// `1 + 2 + ... + h`, so depth pays disproportionately.
#[derive(Clone, Copy, Debug, Default)]
pub struct LinearReward;

impl Reward for LinearReward {
    fn current_reward(&self, state: &GameState) -> i64 {
        stack_sum(state, |x| x)
    }
}

/// Sum-of-squares per-stack reward.
#[derive(Clone, Copy, Debug, Default)]
pub struct SquaredReward;

impl Reward for SquaredReward {
    fn current_reward(&self, state: &GameState) -> i64 {
        stack_sum(state, |x| x * x)
    }
}

/// Exponential per-stack reward: the `k`-th card of a stack is worth
/// `10^(k-1)`, heavily rewarding completed stacks.
#[derive(Clone, Copy, Debug, Default)]
pub struct SkewedReward;

impl Reward for SkewedReward {
    fn current_reward(&self, state: &GameState) -> i64 {
        stack_sum(state, |x| 10i64.pow(x as u32 - 1))
    }
}

fn stack_sum(state: &GameState, f: impl Fn(i64) -> i64) -> i64 {
    state
        .played()
        .iter()
        .map(|(_, h)| (1..=i64::from(h)).map(&f).sum::<i64>())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Color, Rank};
    use crate::core::{Config, Move};

    fn card(color: u8, rank: u8) -> Card {
        Card::new(Color(color), Rank(rank))
    }

    /// State with red played to height 2 and green to height 1.
    fn scored_state() -> GameState {
        let mut deck = vec![card(2, 1); 9];
        deck.extend([card(1, 3), card(1, 2), card(1, 1)]); // p1: [g1, g2, g3]
        deck.extend([card(0, 3), card(0, 2), card(0, 1)]); // p0: [r1, r2, r3]
        let mut state = GameState::from_deck(Config::mini(), deck);

        state.apply_move(&Move::Play { index: 0 }).unwrap(); // r1
        state.apply_move(&Move::Play { index: 0 }).unwrap(); // g1
        state.apply_move(&Move::Play { index: 0 }).unwrap(); // r2
        assert_eq!(state.current_score(), 3);
        state
    }

    #[test]
    fn test_constant() {
        let state = scored_state();
        assert_eq!(ConstantReward.current_reward(&state), 3);
        assert_eq!(ConstantReward.illegal_move_reward(&state), -3);
    }

    #[test]
    fn test_linear() {
        // red: 1 + 2 = 3, green: 1
        let state = scored_state();
        assert_eq!(LinearReward.current_reward(&state), 4);
    }

    #[test]
    fn test_squared() {
        // red: 1 + 4 = 5, green: 1
        let state = scored_state();
        assert_eq!(SquaredReward.current_reward(&state), 6);
    }

    #[test]
    fn test_skewed() {
        // red: 1 + 10 = 11, green: 1
        let state = scored_state();
        assert_eq!(SkewedReward.current_reward(&state), 12);
        assert_eq!(SkewedReward.illegal_move_reward(&state), -12);
    }

    #[test]
    fn test_empty_board_scores_zero() {
        let state = GameState::from_seed(Config::mini(), 1);
        assert_eq!(ConstantReward.current_reward(&state), 0);
        assert_eq!(LinearReward.current_reward(&state), 0);
        assert_eq!(SquaredReward.current_reward(&state), 0);
        assert_eq!(SkewedReward.current_reward(&state), 0);
    }
}
