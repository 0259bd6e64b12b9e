//! Hands: index-addressed slots pairing a card with its information.
//!
//! ## Slot Invariant
//!
//! A slot's card and information are present or absent together. Slots are
//! only ever built through `HandSlot::filled` / `HandSlot::empty`, so the
//! pair cannot drift out of lock-step. Empty slots appear once the deck is
//! exhausted: the hand keeps its visual size, but the slot is inert - it
//! cannot be discarded, played, or touched by clues.
//!
//! ## Index Semantics
//!
//! Moves reference cards by slot index. Removal splices the slot out, so
//! indices shift; replacement slots are appended at the back. Present cards
//! therefore always form a prefix of the hand.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::{Card, Color, Rank};
use super::information::Information;
use crate::core::error::IllegalMove;

/// One hand position: a card and what its holder knows about it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HandSlot {
    pub card: Option<Card>,
    pub info: Option<Information>,
}

impl HandSlot {
    /// A slot holding a freshly dealt card with no information.
    #[must_use]
    pub const fn filled(card: Card) -> Self {
        Self {
            card: Some(card),
            info: Some(Information::unknown()),
        }
    }

    /// An inert slot dealt after deck exhaustion.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            card: None,
            info: None,
        }
    }

    /// True if this slot holds no card.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.card.is_none()
    }
}

/// One player's hand.
///
/// SmallVec keeps the slots inline: every shipped config has `hand_size <= 5`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hand {
    slots: SmallVec<[HandSlot; 5]>,
}

impl Hand {
    /// Create an empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total slot count, inert slots included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True if the hand has no slots at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of slots actually holding a card.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.slots.iter().filter(|s| !s.is_empty()).count()
    }

    /// All slots in index order.
    #[must_use]
    pub fn slots(&self) -> &[HandSlot] {
        &self.slots
    }

    /// The card at `index`, if the index is in range and the slot is filled.
    #[must_use]
    pub fn card(&self, index: usize) -> Option<Card> {
        self.slots.get(index).and_then(|s| s.card)
    }

    /// The information at `index`, if the index is in range and the slot is
    /// filled.
    #[must_use]
    pub fn info(&self, index: usize) -> Option<Information> {
        self.slots.get(index).and_then(|s| s.info)
    }

    /// Iterate over the cards, one entry per slot.
    pub fn cards(&self) -> impl Iterator<Item = Option<Card>> + '_ {
        self.slots.iter().map(|s| s.card)
    }

    /// Iterate over the information, one entry per slot.
    pub fn infos(&self) -> impl Iterator<Item = Option<Information>> + '_ {
        self.slots.iter().map(|s| s.info)
    }

    /// Append a freshly dealt card.
    pub fn push_card(&mut self, card: Card) {
        self.slots.push(HandSlot::filled(card));
    }

    /// Append an inert slot (deck exhausted).
    pub fn push_empty(&mut self) {
        self.slots.push(HandSlot::empty());
    }

    /// Remove and return the card and information at `index`.
    ///
    /// Fails with `IllegalMove::NoSuchCard` if the index is out of range or
    /// the slot is inert. On failure the hand is unchanged.
    pub fn remove(&mut self, index: usize) -> Result<(Card, Information), IllegalMove> {
        match self.slots.get(index) {
            Some(slot) if !slot.is_empty() => {
                let slot = self.slots.remove(index);
                // Both fields are present per the slot invariant.
                match (slot.card, slot.info) {
                    (Some(card), Some(info)) => Ok((card, info)),
                    _ => unreachable!("filled slot must carry both card and info"),
                }
            }
            _ => Err(IllegalMove::NoSuchCard(index)),
        }
    }

    /// Record a color clue: every card of `color` learns its color.
    ///
    /// Positive-only: non-matching cards are untouched.
    pub fn apply_color_clue(&mut self, color: Color) {
        for slot in &mut self.slots {
            if let (Some(card), Some(info)) = (slot.card, slot.info.as_mut()) {
                if card.color == color {
                    info.color = Some(color);
                }
            }
        }
    }

    /// Record a rank clue: every card of `rank` learns its rank.
    pub fn apply_rank_clue(&mut self, rank: Rank) {
        for slot in &mut self.slots {
            if let (Some(card), Some(info)) = (slot.card, slot.info.as_mut()) {
                if card.rank == rank {
                    info.rank = Some(rank);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(color: u8, rank: u8) -> Card {
        Card::new(Color(color), Rank(rank))
    }

    fn hand_of(cards: &[Card]) -> Hand {
        let mut hand = Hand::new();
        for &c in cards {
            hand.push_card(c);
        }
        hand
    }

    #[test]
    fn test_slot_lockstep_invariant() {
        let filled = HandSlot::filled(card(0, 1));
        assert_eq!(filled.card.is_none(), filled.info.is_none());

        let empty = HandSlot::empty();
        assert_eq!(empty.card.is_none(), empty.info.is_none());
        assert!(empty.is_empty());
    }

    #[test]
    fn test_push_and_lookup() {
        let hand = hand_of(&[card(0, 1), card(1, 2)]);

        assert_eq!(hand.len(), 2);
        assert_eq!(hand.card_count(), 2);
        assert_eq!(hand.card(0), Some(card(0, 1)));
        assert_eq!(hand.card(1), Some(card(1, 2)));
        assert_eq!(hand.card(2), None);
        assert_eq!(hand.info(0), Some(Information::unknown()));
    }

    #[test]
    fn test_remove_shifts_indices() {
        let mut hand = hand_of(&[card(0, 1), card(1, 2), card(2, 3)]);

        let (removed, info) = hand.remove(1).unwrap();
        assert_eq!(removed, card(1, 2));
        assert_eq!(info, Information::unknown());

        assert_eq!(hand.len(), 2);
        assert_eq!(hand.card(0), Some(card(0, 1)));
        assert_eq!(hand.card(1), Some(card(2, 3)));
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut hand = hand_of(&[card(0, 1)]);
        let before = hand.clone();

        assert_eq!(hand.remove(1), Err(IllegalMove::NoSuchCard(1)));
        assert_eq!(hand, before);
    }

    #[test]
    fn test_remove_inert_slot() {
        let mut hand = hand_of(&[card(0, 1)]);
        hand.push_empty();

        assert_eq!(hand.remove(1), Err(IllegalMove::NoSuchCard(1)));
        assert_eq!(hand.len(), 2);
        assert_eq!(hand.card_count(), 1);
    }

    #[test]
    fn test_present_cards_stay_a_prefix() {
        let mut hand = hand_of(&[card(0, 1), card(1, 1)]);
        hand.push_empty();

        // Remove the first card; the empty slot stays at the back.
        hand.remove(0).unwrap();
        hand.push_empty();

        let cards: Vec<_> = hand.cards().collect();
        assert_eq!(cards, vec![Some(card(1, 1)), None, None]);

        // Lock-step holds on every slot.
        for slot in hand.slots() {
            assert_eq!(slot.card.is_none(), slot.info.is_none());
        }
    }

    #[test]
    fn test_color_clue_marks_only_matches() {
        let mut hand = hand_of(&[card(0, 1), card(1, 2), card(0, 3)]);

        hand.apply_color_clue(Color(0));

        assert_eq!(hand.info(0), Some(Information::new(Some(Color(0)), None)));
        assert_eq!(hand.info(1), Some(Information::unknown()));
        assert_eq!(hand.info(2), Some(Information::new(Some(Color(0)), None)));
    }

    #[test]
    fn test_rank_clue_marks_only_matches() {
        let mut hand = hand_of(&[card(0, 2), card(1, 2), card(2, 1)]);

        hand.apply_rank_clue(Rank(2));

        assert_eq!(hand.info(0), Some(Information::new(None, Some(Rank(2)))));
        assert_eq!(hand.info(1), Some(Information::new(None, Some(Rank(2)))));
        assert_eq!(hand.info(2), Some(Information::unknown()));
    }

    #[test]
    fn test_clues_accumulate() {
        let mut hand = hand_of(&[card(1, 3)]);

        hand.apply_color_clue(Color(1));
        hand.apply_rank_clue(Rank(3));

        assert_eq!(
            hand.info(0),
            Some(Information::new(Some(Color(1)), Some(Rank(3))))
        );
    }

    #[test]
    fn test_clues_skip_inert_slots() {
        let mut hand = hand_of(&[card(0, 1)]);
        hand.push_empty();

        hand.apply_color_clue(Color(0));
        hand.apply_rank_clue(Rank(1));

        assert!(hand.slots()[1].is_empty());
    }

    #[test]
    fn test_serialization() {
        let mut hand = hand_of(&[card(0, 1), card(1, 2)]);
        hand.apply_color_clue(Color(1));
        hand.push_empty();

        let json = serde_json::to_string(&hand).unwrap();
        let deserialized: Hand = serde_json::from_str(&json).unwrap();
        assert_eq!(hand, deserialized);
    }
}
