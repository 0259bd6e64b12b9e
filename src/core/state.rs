//! Game state: the one-writer state machine.
//!
//! ## GameState
//!
//! Owns the deck, hands, discard pile, played stacks, token pools, turn
//! pointer, and end-game countdown. `apply_move` is the only mutator: it
//! validates before touching anything, so a rejected move leaves the state
//! bit-for-bit unchanged, and a finished game rejects further moves with an
//! assertion (a stepped-after-over call is a driver bug, not a rule
//! violation).
//!
//! ## Observation
//!
//! What the current player may see: both token pools, the discard pile, the
//! played stacks, their own hand's information (never card identity), and
//! every other hand in full.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::config::Config;
use super::error::IllegalMove;
use super::moves::{Move, MoveRecord};
use super::player::{PlayerId, PlayerMap};
use super::rng::GameRng;
use crate::cards::{Card, Color, Deck, Hand, Information, Rank};

/// Per-color record of the highest consecutively-played rank.
///
/// A dense array over the declared color set, zero-initialized, so "color
/// missing" cannot be confused with "nothing played".
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayedStacks {
    heights: Vec<u8>,
}

impl PlayedStacks {
    /// Empty stacks for `num_colors` colors.
    #[must_use]
    pub fn new(num_colors: usize) -> Self {
        Self {
            heights: vec![0; num_colors],
        }
    }

    /// Rebuild stacks from a played-card list (the codec's decode path).
    #[must_use]
    pub fn from_cards(num_colors: usize, cards: &[Card]) -> Self {
        let mut stacks = Self::new(num_colors);
        for card in cards {
            let h = &mut stacks.heights[card.color.index()];
            *h = (*h).max(card.rank.value());
        }
        stacks
    }

    /// Number of colors.
    #[must_use]
    pub fn num_colors(&self) -> usize {
        self.heights.len()
    }

    /// Current height of one color's stack.
    #[must_use]
    pub fn height(&self, color: Color) -> u8 {
        self.heights[color.index()]
    }

    /// A successful play: bump one color's stack.
    pub fn advance(&mut self, color: Color) {
        self.heights[color.index()] += 1;
    }

    /// Total cards played.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.heights.iter().map(|&h| u32::from(h)).sum()
    }

    /// Iterate over `(color, height)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Color, u8)> + '_ {
        self.heights
            .iter()
            .enumerate()
            .map(|(i, &h)| (Color(i as u8), h))
    }

    /// Expand to the card list the stacks represent: for each color with
    /// height `h`, the cards of rank `1..=h`.
    #[must_use]
    pub fn cards(&self) -> Vec<Card> {
        self.iter()
            .flat_map(|(color, h)| (1..=h).map(move |r| Card::new(color, Rank(r))))
            .collect()
    }
}

/// Another player's hand as seen by the observer: full card identity plus
/// the information its holder has. Inert slots are filtered out.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtherHand {
    pub cards: Vec<Card>,
    pub info: Vec<Information>,
}

/// Everything the current player may see.
///
/// `others` is in turn order starting from the player after the observer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    pub num_tokens: u8,
    pub num_fuses: u8,
    pub discarded_cards: Vec<Card>,
    pub played_cards: PlayedStacks,
    pub your_info: Vec<Information>,
    pub others: Vec<OtherHand>,
}

/// The full game state. Constructed once per episode, mutated in place by
/// `apply_move`, discarded at episode end.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    config: Config,
    deck: Deck,
    discarded: Vec<Card>,
    played: PlayedStacks,
    num_tokens: u8,
    num_fuses: u8,
    hands: PlayerMap<Hand>,
    current_player: PlayerId,
    /// `-1` until the deck empties, then a countdown to zero; zero = over.
    turns_left: i32,
    turn_number: u32,
    last_moves: PlayerMap<Option<Move>>,
    history: Vector<MoveRecord>,
}

impl GameState {
    /// Start a new episode: build the deck, shuffle with `rng`, deal.
    ///
    /// Panics if the config is invalid (caller bug).
    #[must_use]
    pub fn new(config: Config, rng: &mut GameRng) -> Self {
        config.assert_valid();
        let mut deck = Deck::build(&config);
        deck.shuffle(rng);
        Self::deal(config, deck)
    }

    /// Start a new episode from a bare seed.
    #[must_use]
    pub fn from_seed(config: Config, seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        Self::new(config, &mut rng)
    }

    /// Start an episode from an explicit deck order (no shuffle).
    ///
    /// The *last* element of `cards` is the first card dealt. The deck may
    /// be shorter than a full build, but must cover the opening deal.
    #[must_use]
    pub fn from_deck(config: Config, cards: Vec<Card>) -> Self {
        config.assert_valid();
        assert!(
            cards.len() >= config.num_players * config.hand_size,
            "Deck too small to deal {} players {} cards",
            config.num_players,
            config.hand_size
        );
        Self::deal(config, Deck::from_cards(cards))
    }

    fn deal(config: Config, mut deck: Deck) -> Self {
        let num_players = config.num_players;

        let mut hands: PlayerMap<Hand> = PlayerMap::with_default(num_players);
        for player in PlayerId::all(num_players) {
            for _ in 0..config.hand_size {
                let card = deck.draw().expect("deck size checked at construction");
                hands[player].push_card(card);
            }
        }

        debug!(players = num_players, deck = deck.len(), "dealt new game");

        Self {
            num_tokens: config.max_tokens,
            num_fuses: config.max_fuses,
            discarded: Vec::new(),
            played: PlayedStacks::new(config.num_colors()),
            hands,
            current_player: PlayerId::new(0),
            turns_left: -1,
            turn_number: 1,
            last_moves: PlayerMap::with_default(num_players),
            history: Vector::new(),
            deck,
            config,
        }
    }

    // === Queries ===

    /// The game configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// Clue tokens available.
    #[must_use]
    pub fn num_tokens(&self) -> u8 {
        self.num_tokens
    }

    /// Fuse tokens remaining.
    #[must_use]
    pub fn num_fuses(&self) -> u8 {
        self.num_fuses
    }

    /// Cards left in the deck.
    #[must_use]
    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    /// The discard pile, oldest first.
    #[must_use]
    pub fn discarded(&self) -> &[Card] {
        &self.discarded
    }

    /// The played stacks.
    #[must_use]
    pub fn played(&self) -> &PlayedStacks {
        &self.played
    }

    /// A player's hand.
    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &Hand {
        &self.hands[player]
    }

    /// The current player's hand (the one `decode_move` matches against).
    #[must_use]
    pub fn current_hand(&self) -> &Hand {
        &self.hands[self.current_player]
    }

    /// End-game countdown: `-1` while the deck holds cards, then the number
    /// of turns left, `0` once the game is over.
    #[must_use]
    pub fn turns_remaining(&self) -> i32 {
        self.turns_left
    }

    /// Turn number, starting at 1.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// A player's most recent move, if any.
    #[must_use]
    pub fn last_move(&self, player: PlayerId) -> Option<Move> {
        self.last_moves[player]
    }

    /// Full move history, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Total cards played so far.
    #[must_use]
    pub fn current_score(&self) -> u32 {
        self.played.score()
    }

    /// The score when every stack is complete.
    #[must_use]
    pub fn max_score(&self) -> u32 {
        self.config.max_score()
    }

    /// True once no further moves are accepted.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.turns_left == 0
    }

    /// The current player's view of the game.
    #[must_use]
    pub fn observation(&self) -> Observation {
        self.observation_for(self.current_player)
    }

    /// One player's view of the game.
    ///
    /// Their own hand contributes information only - never card identity.
    /// Inert trailing slots are filtered out, so hand views shrink near
    /// deck exhaustion. Other hands follow in turn order after the viewer.
    #[must_use]
    pub fn observation_for(&self, me: PlayerId) -> Observation {
        assert!(me.index() < self.config.num_players, "no such player");
        let your_info = self.hands[me].infos().flatten().collect();

        let mut others = Vec::with_capacity(self.config.num_players - 1);
        let mut player = me.next(self.config.num_players);
        while player != me {
            let hand = &self.hands[player];
            others.push(OtherHand {
                cards: hand.cards().flatten().collect(),
                info: hand.infos().flatten().collect(),
            });
            player = player.next(self.config.num_players);
        }

        Observation {
            num_tokens: self.num_tokens,
            num_fuses: self.num_fuses,
            discarded_cards: self.discarded.clone(),
            played_cards: self.played.clone(),
            your_info,
            others,
        }
    }

    // === The one mutator ===

    /// Apply a move for the current player.
    ///
    /// On `Err`, the state is unchanged. Panics if the game is already
    /// over - check `is_over` first; stepping a finished game is a driver
    /// bug, not a rule violation.
    pub fn apply_move(&mut self, mv: &Move) -> Result<(), IllegalMove> {
        assert!(self.turns_left != 0, "apply_move called on a finished game");

        let actor = self.current_player;
        debug!(player = actor.index(), ?mv, "applying move");

        match *mv {
            Move::ClueColor { target, color } => {
                self.check_clue(actor, target)?;
                self.hands[target].apply_color_clue(color);
                self.num_tokens -= 1;
            }
            Move::ClueRank { target, rank } => {
                self.check_clue(actor, target)?;
                self.hands[target].apply_rank_clue(rank);
                self.num_tokens -= 1;
            }
            Move::Discard { index } => {
                // `remove` is the first mutation and the range/inert check.
                let (card, _) = self.hands[actor].remove(index)?;
                self.discarded.push(card);
                if self.num_tokens < self.config.max_tokens {
                    self.num_tokens += 1;
                }
                self.deal_replacement(actor);
            }
            Move::Play { index } => {
                let (card, _) = self.hands[actor].remove(index)?;
                if card.rank.value() == self.played.height(card.color) + 1 {
                    self.played.advance(card.color);
                } else {
                    // A failed play burns a fuse and the card.
                    self.num_fuses -= 1;
                    self.discarded.push(card);
                }
                self.deal_replacement(actor);
            }
        }

        // End-of-game bookkeeping, in precedence order.
        if self.num_fuses == 0 {
            self.turns_left = 0;
        } else if self.current_score() == self.max_score() {
            self.turns_left = 0;
        } else if self.deck.is_empty() {
            if self.turns_left == -1 {
                self.turns_left = self.config.turns_after_last_deal as i32;
            } else {
                self.turns_left -= 1;
            }
        }

        self.last_moves[actor] = Some(*mv);
        self.history.push_back(MoveRecord {
            player: actor,
            mv: *mv,
            turn: self.turn_number,
        });

        self.current_player = actor.next(self.config.num_players);
        self.turn_number += 1;

        Ok(())
    }

    fn check_clue(&self, actor: PlayerId, target: PlayerId) -> Result<(), IllegalMove> {
        if target.index() >= self.config.num_players {
            return Err(IllegalMove::NoSuchPlayer(target.index()));
        }
        if target == actor {
            return Err(IllegalMove::SelfClue);
        }
        if self.num_tokens == 0 {
            return Err(IllegalMove::NoClueTokens);
        }
        Ok(())
    }

    fn deal_replacement(&mut self, player: PlayerId) {
        match self.deck.draw() {
            Some(card) => self.hands[player].push_card(card),
            None => self.hands[player].push_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(color: u8, rank: u8) -> Card {
        Card::new(Color(color), Rank(rank))
    }

    /// Mini-config state with a fixed deck. The last card listed is dealt
    /// first, so hands read left-to-right from the *end* of the list.
    fn stacked(cards: Vec<Card>) -> GameState {
        GameState::from_deck(Config::mini(), cards)
    }

    /// A full mini deck in build order (handy when only the shape matters).
    fn mini_state() -> GameState {
        let config = Config::mini();
        let mut deck = Deck::build(&config);
        let mut cards = Vec::new();
        while let Some(c) = deck.draw() {
            cards.push(c);
        }
        cards.reverse();
        GameState::from_deck(config, cards)
    }

    #[test]
    fn test_initial_state() {
        let state = GameState::from_seed(Config::mini(), 42);
        let config = Config::mini();

        assert_eq!(state.num_tokens(), config.max_tokens);
        assert_eq!(state.num_fuses(), config.max_fuses);
        assert_eq!(state.current_player(), PlayerId::new(0));
        assert_eq!(state.turns_remaining(), -1);
        assert_eq!(state.turn_number(), 1);
        assert_eq!(state.current_score(), 0);
        assert!(!state.is_over());
        assert!(state.discarded().is_empty());

        // 15-card deck, 2 players * 3 cards dealt.
        assert_eq!(state.deck_len(), 9);
        for player in PlayerId::all(2) {
            assert_eq!(state.hand(player).len(), 3);
            assert_eq!(state.hand(player).card_count(), 3);
        }
    }

    #[test]
    fn test_same_seed_same_deal() {
        let a = GameState::from_seed(Config::hanabi(), 7);
        let b = GameState::from_seed(Config::hanabi(), 7);
        assert_eq!(a, b);

        let c = GameState::from_seed(Config::hanabi(), 8);
        assert_ne!(a, c);
    }

    #[test]
    fn test_played_stacks_roundtrip() {
        let mut stacks = PlayedStacks::new(3);
        stacks.advance(Color(0));
        stacks.advance(Color(0));
        stacks.advance(Color(2));

        assert_eq!(stacks.score(), 3);
        assert_eq!(stacks.height(Color(0)), 2);
        assert_eq!(stacks.height(Color(1)), 0);

        let cards = stacks.cards();
        assert_eq!(
            cards,
            vec![card(0, 1), card(0, 2), card(2, 1)]
        );
        assert_eq!(PlayedStacks::from_cards(3, &cards), stacks);
    }

    #[test]
    fn test_successful_play() {
        // Player 0's first card is red 1 (dealt from the back).
        let mut deck = vec![card(2, 1); 9];
        deck.extend([card(1, 1), card(1, 2), card(1, 3)]); // player 1
        deck.extend([card(0, 3), card(0, 2), card(0, 1)]); // player 0, index 0 = red 1
        let mut state = stacked(deck);

        assert_eq!(state.hand(PlayerId::new(0)).card(0), Some(card(0, 1)));

        state.apply_move(&Move::Play { index: 0 }).unwrap();

        assert_eq!(state.played().height(Color(0)), 1);
        assert_eq!(state.current_score(), 1);
        assert_eq!(state.num_fuses(), Config::mini().max_fuses);
        assert!(state.discarded().is_empty());
        // Replacement dealt, turn advanced.
        assert_eq!(state.hand(PlayerId::new(0)).card_count(), 3);
        assert_eq!(state.current_player(), PlayerId::new(1));
        assert_eq!(state.turn_number(), 2);
    }

    #[test]
    fn test_failed_play_burns_fuse_and_discards() {
        let mut deck = vec![card(2, 1); 9];
        deck.extend([card(1, 1), card(1, 2), card(1, 3)]);
        deck.extend([card(0, 3), card(0, 2), card(0, 2)]); // index 0 = red 2, not playable
        let mut state = stacked(deck);

        state.apply_move(&Move::Play { index: 0 }).unwrap();

        assert_eq!(state.current_score(), 0);
        assert_eq!(state.num_fuses(), Config::mini().max_fuses - 1);
        assert_eq!(state.discarded(), &[card(0, 2)]);
        assert_eq!(state.hand(PlayerId::new(0)).card_count(), 3);
    }

    #[test]
    fn test_discard_refunds_token_capped() {
        let mut state = mini_state();

        // At max tokens, a discard must not overflow.
        assert_eq!(state.num_tokens(), 6);
        state.apply_move(&Move::Discard { index: 0 }).unwrap();
        assert_eq!(state.num_tokens(), 6);
        assert_eq!(state.discarded().len(), 1);

        // Spend one token, then a discard refunds it.
        state
            .apply_move(&Move::ClueColor {
                target: PlayerId::new(0),
                color: Color(0),
            })
            .unwrap();
        assert_eq!(state.num_tokens(), 5);
        state.apply_move(&Move::Discard { index: 0 }).unwrap();
        assert_eq!(state.num_tokens(), 6);
    }

    #[test]
    fn test_clue_updates_target_info_only() {
        let mut deck = vec![card(2, 1); 9];
        deck.extend([card(0, 1), card(1, 2), card(0, 3)]); // player 1: [r3, g2, r1]
        deck.extend([card(0, 1), card(0, 2), card(0, 3)]);
        let mut state = stacked(deck);

        state
            .apply_move(&Move::ClueColor {
                target: PlayerId::new(1),
                color: Color(0),
            })
            .unwrap();

        let hand = state.hand(PlayerId::new(1));
        assert_eq!(hand.info(0), Some(Information::new(Some(Color(0)), None)));
        assert_eq!(hand.info(1), Some(Information::unknown()));
        assert_eq!(hand.info(2), Some(Information::new(Some(Color(0)), None)));

        // The clue consumed a token and left the cluer's hand untouched.
        assert_eq!(state.num_tokens(), 5);
        for info in state.hand(PlayerId::new(0)).infos().flatten() {
            assert!(info.is_unknown());
        }
    }

    #[test]
    fn test_self_clue_rejected_even_without_tokens() {
        let mut state = mini_state();

        // Drain the clue pool.
        for _ in 0..6 {
            let actor = state.current_player();
            state
                .apply_move(&Move::ClueRank {
                    target: actor.next(2),
                    rank: Rank(1),
                })
                .unwrap();
        }
        assert_eq!(state.num_tokens(), 0);

        let actor = state.current_player();
        assert_eq!(
            state.apply_move(&Move::ClueColor {
                target: actor,
                color: Color(0),
            }),
            Err(IllegalMove::SelfClue)
        );
    }

    #[test]
    fn test_rejected_move_leaves_state_unchanged() {
        let mut state = mini_state();

        for _ in 0..6 {
            let actor = state.current_player();
            state
                .apply_move(&Move::ClueRank {
                    target: actor.next(2),
                    rank: Rank(1),
                })
                .unwrap();
        }

        let before = state.clone();
        let result = state.apply_move(&Move::ClueColor {
            target: state.current_player().next(2),
            color: Color(0),
        });

        assert_eq!(result, Err(IllegalMove::NoClueTokens));
        assert_eq!(state, before);
    }

    #[test]
    fn test_out_of_range_index_rejected() {
        let mut state = mini_state();
        let before = state.clone();

        assert_eq!(
            state.apply_move(&Move::Play { index: 3 }),
            Err(IllegalMove::NoSuchCard(3))
        );
        assert_eq!(
            state.apply_move(&Move::Discard { index: 99 }),
            Err(IllegalMove::NoSuchCard(99))
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_clue_target_out_of_range() {
        let mut state = mini_state();
        assert_eq!(
            state.apply_move(&Move::ClueColor {
                target: PlayerId::new(5),
                color: Color(0),
            }),
            Err(IllegalMove::NoSuchPlayer(5))
        );
    }

    #[test]
    fn test_fuse_exhaustion_ends_game_immediately() {
        // Mini config has 3 fuses; stack unplayable 3s on top of nothing.
        let mut deck = vec![card(2, 1); 9];
        deck.extend([card(1, 3), card(1, 3), card(1, 2)]);
        deck.extend([card(0, 3), card(0, 3), card(0, 2)]);
        let mut state = stacked(deck);

        // Rank 2 and 3 never play on empty stacks.
        state.apply_move(&Move::Play { index: 0 }).unwrap(); // p0 fuse 1
        state.apply_move(&Move::Play { index: 0 }).unwrap(); // p1 fuse 2
        assert_eq!(state.num_fuses(), 1);
        assert!(!state.is_over());

        state.apply_move(&Move::Play { index: 0 }).unwrap(); // p0 fuse 3

        assert_eq!(state.num_fuses(), 0);
        assert!(state.is_over());
        assert_eq!(state.turns_remaining(), 0);
    }

    #[test]
    #[should_panic(expected = "finished game")]
    fn test_apply_move_after_over_panics() {
        let mut deck = vec![card(2, 1); 9];
        deck.extend([card(1, 3), card(1, 3), card(1, 3)]);
        deck.extend([card(0, 3), card(0, 3), card(0, 3)]);
        let mut state = stacked(deck);

        for _ in 0..3 {
            state.apply_move(&Move::Play { index: 0 }).unwrap();
        }
        assert!(state.is_over());

        let _ = state.apply_move(&Move::Discard { index: 0 });
    }

    #[test]
    fn test_deck_exhaustion_countdown() {
        // Minimal deck: exactly the opening deal, so the deck is empty from
        // the first move. Mini config grants 2 extra turns.
        let deck = vec![
            card(1, 3),
            card(1, 2),
            card(1, 1),
            card(0, 1),
            card(0, 2),
            card(0, 3),
        ];
        let mut state = stacked(deck);
        assert_eq!(state.deck_len(), 0);
        assert_eq!(state.turns_remaining(), -1);

        // First move observes the empty deck: countdown starts.
        state.apply_move(&Move::Discard { index: 0 }).unwrap();
        assert_eq!(state.turns_remaining(), 2);
        // Replacement slot is inert.
        assert_eq!(state.hand(PlayerId::new(0)).len(), 3);
        assert_eq!(state.hand(PlayerId::new(0)).card_count(), 2);

        state.apply_move(&Move::Discard { index: 0 }).unwrap();
        assert_eq!(state.turns_remaining(), 1);
        assert!(!state.is_over());

        state.apply_move(&Move::Discard { index: 0 }).unwrap();
        assert_eq!(state.turns_remaining(), 0);
        assert!(state.is_over());
    }

    #[test]
    fn test_score_is_monotonic() {
        let mut state = GameState::from_seed(Config::mini(), 123);
        let mut last = state.current_score();
        let mut moves = 0;

        while !state.is_over() && moves < 60 {
            // Alternate plays and discards blindly; both are always legal
            // while slot 0 holds a card.
            let mv = if moves % 2 == 0 {
                Move::Play { index: 0 }
            } else {
                Move::Discard { index: 0 }
            };
            if state.apply_move(&mv).is_err() {
                break;
            }
            assert!(state.current_score() >= last);
            last = state.current_score();
            moves += 1;
        }
    }

    #[test]
    fn test_history_and_last_moves() {
        let mut state = mini_state();

        let clue = Move::ClueRank {
            target: PlayerId::new(1),
            rank: Rank(1),
        };
        state.apply_move(&clue).unwrap();
        state.apply_move(&Move::Discard { index: 0 }).unwrap();

        assert_eq!(state.last_move(PlayerId::new(0)), Some(clue));
        assert_eq!(
            state.last_move(PlayerId::new(1)),
            Some(Move::Discard { index: 0 })
        );

        let history: Vec<_> = state.history().iter().copied().collect();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].player, PlayerId::new(0));
        assert_eq!(history[0].mv, clue);
        assert_eq!(history[0].turn, 1);
        assert_eq!(history[1].turn, 2);
    }

    #[test]
    fn test_observation_hides_own_cards() {
        let state = GameState::from_seed(Config::mini(), 42);
        let obs = state.observation();

        assert_eq!(obs.num_tokens, 6);
        assert_eq!(obs.num_fuses, 3);
        assert_eq!(obs.your_info.len(), 3);
        assert!(obs.your_info.iter().all(Information::is_unknown));

        assert_eq!(obs.others.len(), 1);
        assert_eq!(obs.others[0].cards.len(), 3);
        assert_eq!(obs.others[0].info.len(), 3);
        assert_eq!(
            obs.others[0].cards,
            state
                .hand(PlayerId::new(1))
                .cards()
                .flatten()
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_observation_rotation_4p() {
        let mut state = GameState::from_seed(Config::mini_4p(), 42);
        state.apply_move(&Move::Discard { index: 0 }).unwrap();

        // Player 1 observes players 2, 3, 0 in that order.
        assert_eq!(state.current_player(), PlayerId::new(1));
        let obs = state.observation();
        assert_eq!(obs.others.len(), 3);
        assert_eq!(
            obs.others[0].cards,
            state
                .hand(PlayerId::new(2))
                .cards()
                .flatten()
                .collect::<Vec<_>>()
        );
        assert_eq!(
            obs.others[2].cards,
            state
                .hand(PlayerId::new(0))
                .cards()
                .flatten()
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_observation_filters_inert_slots() {
        let deck = vec![
            card(1, 3),
            card(1, 2),
            card(1, 1),
            card(0, 1),
            card(0, 2),
            card(0, 3),
        ];
        let mut state = stacked(deck);
        state.apply_move(&Move::Discard { index: 0 }).unwrap();
        state.apply_move(&Move::Discard { index: 0 }).unwrap();

        let obs = state.observation();
        assert_eq!(obs.your_info.len(), 2);
        assert_eq!(obs.others[0].cards.len(), 2);
        assert_eq!(obs.others[0].info.len(), 2);
    }

    #[test]
    fn test_serialization() {
        let mut state = GameState::from_seed(Config::mini(), 42);
        state.apply_move(&Move::Discard { index: 1 }).unwrap();

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
