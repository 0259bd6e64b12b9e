//! Deck construction, shuffle, and draw.

use serde::{Deserialize, Serialize};

use super::card::{Card, Color, Rank};
use crate::core::config::Config;
use crate::core::rng::GameRng;

/// The draw pile.
///
/// Cards are drawn from the back of the vector. `build` produces a
/// deterministic color-major order; the shuffle is the episode's only
/// nondeterminism.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build the full unshuffled deck for a config: for each color, each
    /// rank appears `card_counts[rank - 1]` times.
    #[must_use]
    pub fn build(config: &Config) -> Self {
        let mut cards = Vec::with_capacity(config.deck_size());
        for color in Color::all(config.num_colors()) {
            for rank in Rank::all(config.num_ranks()) {
                for _ in 0..config.card_counts[rank.index()] {
                    cards.push(Card::new(color, rank));
                }
            }
        }
        Self { cards }
    }

    /// Create a deck from an explicit card order.
    ///
    /// Draws come from the back of `cards`. Used for reproducible fixtures
    /// and replays; `GameState::from_deck` is the usual entry point.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Shuffle the deck in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Draw the top card, or `None` once the deck is exhausted.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True once every card has been drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_size_matches_config() {
        let config = Config::mini();
        let deck = Deck::build(&config);

        // 3 colors * (2 + 2 + 1) copies
        assert_eq!(deck.len(), 15);
        assert_eq!(deck.len(), config.deck_size());
    }

    #[test]
    fn test_build_is_deterministic_and_color_major() {
        let config = Config::mini();
        let deck = Deck::build(&config);
        let again = Deck::build(&config);
        assert_eq!(deck, again);

        // First color's run: two 1s, two 2s, one 3.
        let mut cards = deck.cards.clone();
        let first_color: Vec<_> = cards.drain(..5).collect();
        assert_eq!(
            first_color,
            vec![
                Card::new(Color(0), Rank(1)),
                Card::new(Color(0), Rank(1)),
                Card::new(Color(0), Rank(2)),
                Card::new(Color(0), Rank(2)),
                Card::new(Color(0), Rank(3)),
            ]
        );
    }

    #[test]
    fn test_multiplicities() {
        let config = Config::hanabi();
        let deck = Deck::build(&config);

        for color in Color::all(config.num_colors()) {
            for rank in Rank::all(config.num_ranks()) {
                let count = deck
                    .cards
                    .iter()
                    .filter(|c| **c == Card::new(color, rank))
                    .count();
                assert_eq!(count, config.card_counts[rank.index()] as usize);
            }
        }
    }

    #[test]
    fn test_shuffle_preserves_content() {
        let config = Config::hanabi();
        let mut deck = Deck::build(&config);
        let mut rng = GameRng::new(7);

        let mut before = deck.cards.clone();
        deck.shuffle(&mut rng);
        let mut after = deck.cards.clone();

        assert_ne!(before, after); // 50-card deck: astronomically unlikely to fix
        before.sort();
        after.sort();
        assert_eq!(before, after);
    }

    #[test]
    fn test_shuffle_is_seed_deterministic() {
        let config = Config::mini();

        let mut deck1 = Deck::build(&config);
        let mut deck2 = Deck::build(&config);
        deck1.shuffle(&mut GameRng::new(42));
        deck2.shuffle(&mut GameRng::new(42));

        assert_eq!(deck1, deck2);
    }

    #[test]
    fn test_draw_from_back_until_empty() {
        let cards = vec![Card::new(Color(0), Rank(1)), Card::new(Color(1), Rank(2))];
        let mut deck = Deck::from_cards(cards);

        assert_eq!(deck.draw(), Some(Card::new(Color(1), Rank(2))));
        assert_eq!(deck.draw(), Some(Card::new(Color(0), Rank(1))));
        assert_eq!(deck.draw(), None);
        assert!(deck.is_empty());
    }
}
