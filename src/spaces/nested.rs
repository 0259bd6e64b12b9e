//! Nested codec: structured per-field encoding.
//!
//! Every card occupies a `(color, rank)` pair of positions with one
//! sentinel value per axis for "no card"; every information value gets one
//! extra sentinel per axis for "unknown" plus a combined pair for "absent".
//! Discard and played piles are count-per-unique-card multisets. All of it
//! concatenates into one flat vector whose layout depends only on the
//! config:
//!
//! ```text
//! [tokens - 1, fuses - 1,
//!  discard counts ..., played counts ...,
//!  your info pairs ...,
//!  (their cards pairs ..., their info pairs ...) per other player]
//! ```

use rustc_hash::FxHashMap;

use super::{clue_blocks_len, decode_clue, encode_clue, unique_cards, Spaces};
use crate::cards::{Card, Color, Hand, Information, Rank};
use crate::core::{Config, Move, Observation, OtherHand, PlayedStacks, PlayerId};

/// The structured-tuple codec. Fully invertible for cards, information,
/// multiset content, observations, and moves.
#[derive(Clone, Debug)]
pub struct NestedSpaces {
    config: Config,
    unique_cards: Vec<Card>,
    card_index: FxHashMap<Card, usize>,
}

impl NestedSpaces {
    /// Derive the domains for a config.
    #[must_use]
    pub fn new(config: Config) -> Self {
        config.assert_valid();
        let unique_cards = unique_cards(&config);
        let card_index = unique_cards
            .iter()
            .enumerate()
            .map(|(i, &c)| (c, i))
            .collect();
        Self {
            config,
            unique_cards,
            card_index,
        }
    }

    /// Every unique card, in the positional order the multisets use.
    #[must_use]
    pub fn unique_cards(&self) -> &[Card] {
        &self.unique_cards
    }

    fn num_colors(&self) -> usize {
        self.config.num_colors()
    }

    fn num_ranks(&self) -> usize {
        self.config.num_ranks()
    }

    // === Card codec ===

    /// Encode a card, or the `(num_colors, num_ranks)` sentinel for `None`.
    #[must_use]
    pub fn encode_card(&self, card: Option<Card>) -> (i64, i64) {
        match card {
            None => (self.num_colors() as i64, self.num_ranks() as i64),
            Some(card) => {
                assert!(
                    card.color.index() < self.num_colors()
                        && card.rank.index() < self.num_ranks(),
                    "card outside config domain"
                );
                (card.color.index() as i64, card.rank.index() as i64)
            }
        }
    }

    /// Decode a card sample. Panics on values outside the card domain.
    #[must_use]
    pub fn decode_card(&self, sample: (i64, i64)) -> Option<Card> {
        let (c, r) = sample;
        let (num_colors, num_ranks) = (self.num_colors() as i64, self.num_ranks() as i64);
        if (c, r) == (num_colors, num_ranks) {
            return None;
        }
        assert!(
            (0..num_colors).contains(&c) && (0..num_ranks).contains(&r),
            "card sample outside config domain"
        );
        Some(Card::new(Color(c as u8), Rank(r as u8 + 1)))
    }

    // === Information codec ===

    /// Encode information. Each axis has an "unknown" value one past the
    /// real domain; `None` (no card in the slot) uses the pair one past
    /// that, keeping partial knowledge distinguishable from absence.
    #[must_use]
    pub fn encode_information(&self, info: Option<Information>) -> (i64, i64) {
        let (num_colors, num_ranks) = (self.num_colors() as i64, self.num_ranks() as i64);
        match info {
            None => (num_colors + 1, num_ranks + 1),
            Some(info) => {
                let c = info.color.map_or(num_colors, |c| c.index() as i64);
                let r = info.rank.map_or(num_ranks, |r| r.index() as i64);
                (c, r)
            }
        }
    }

    /// Decode an information sample across all four knowledge states plus
    /// absence. Panics on values outside the information domain.
    #[must_use]
    pub fn decode_information(&self, sample: (i64, i64)) -> Option<Information> {
        let (c, r) = sample;
        let (num_colors, num_ranks) = (self.num_colors() as i64, self.num_ranks() as i64);
        if (c, r) == (num_colors + 1, num_ranks + 1) {
            return None;
        }
        assert!(
            (0..=num_colors).contains(&c) && (0..=num_ranks).contains(&r),
            "information sample outside config domain"
        );
        let color = (c < num_colors).then(|| Color(c as u8));
        let rank = (r < num_ranks).then(|| Rank(r as u8 + 1));
        Some(Information::new(color, rank))
    }

    // === Multiset codec ===

    /// Encode a card list as occurrence counts over `unique_cards`.
    ///
    /// Order is deliberately not preserved; only per-card counts are.
    #[must_use]
    pub fn encode_cards(&self, cards: &[Card]) -> Vec<i64> {
        let mut counts = vec![0i64; self.unique_cards.len()];
        for card in cards {
            let index = *self
                .card_index
                .get(card)
                .expect("card outside config domain");
            counts[index] += 1;
        }
        counts
    }

    /// Decode occurrence counts into the canonical (sorted) card list.
    #[must_use]
    pub fn decode_cards(&self, sample: &[i64]) -> Vec<Card> {
        assert_eq!(
            sample.len(),
            self.unique_cards.len(),
            "multiset sample has wrong shape for this config"
        );
        self.unique_cards
            .iter()
            .zip(sample)
            .flat_map(|(&card, &count)| {
                assert!(count >= 0, "negative multiset count");
                std::iter::repeat(card).take(count as usize)
            })
            .collect()
    }

    // === Block helpers ===

    fn push_card_block(&self, out: &mut Vec<i64>, cards: &[Card]) {
        assert!(cards.len() <= self.config.hand_size, "hand too large");
        for i in 0..self.config.hand_size {
            let (c, r) = self.encode_card(cards.get(i).copied());
            out.push(c);
            out.push(r);
        }
    }

    fn push_info_block(&self, out: &mut Vec<i64>, infos: &[Information]) {
        assert!(infos.len() <= self.config.hand_size, "hand too large");
        for i in 0..self.config.hand_size {
            let (c, r) = self.encode_information(infos.get(i).copied());
            out.push(c);
            out.push(r);
        }
    }

    /// Decode one hand-size run of pairs, dropping absence sentinels.
    fn take_card_block(&self, sample: &[i64], pos: &mut usize) -> Vec<Card> {
        let mut cards = Vec::new();
        for _ in 0..self.config.hand_size {
            if let Some(card) = self.decode_card((sample[*pos], sample[*pos + 1])) {
                cards.push(card);
            }
            *pos += 2;
        }
        cards
    }

    fn take_info_block(&self, sample: &[i64], pos: &mut usize) -> Vec<Information> {
        let mut infos = Vec::new();
        for _ in 0..self.config.hand_size {
            if let Some(info) = self.decode_information((sample[*pos], sample[*pos + 1])) {
                infos.push(info);
            }
            *pos += 2;
        }
        infos
    }
}

impl Spaces for NestedSpaces {
    fn config(&self) -> &Config {
        &self.config
    }

    fn observation_bounds(&self) -> Vec<i64> {
        let config = &self.config;
        let (num_colors, num_ranks) = (self.num_colors() as i64, self.num_ranks() as i64);

        let mut bounds = vec![i64::from(config.max_tokens), i64::from(config.max_fuses)];

        // Discard counts, bounded by each rank's multiplicity.
        for card in &self.unique_cards {
            bounds.push(i64::from(config.card_counts[card.rank.index()]) + 1);
        }
        // Played counts: at most one of each unique card.
        bounds.extend(std::iter::repeat(2).take(self.unique_cards.len()));

        let info_pair = [num_colors + 2, num_ranks + 2];
        let card_pair = [num_colors + 1, num_ranks + 1];

        // Your info.
        for _ in 0..config.hand_size {
            bounds.extend(info_pair);
        }
        // Other players: cards then info.
        for _ in 0..config.num_players - 1 {
            for _ in 0..config.hand_size {
                bounds.extend(card_pair);
            }
            for _ in 0..config.hand_size {
                bounds.extend(info_pair);
            }
        }
        bounds
    }

    fn num_moves(&self) -> usize {
        clue_blocks_len(&self.config) + 2 * self.config.hand_size
    }

    fn encode_observation(&self, obs: &Observation) -> Vec<i64> {
        assert_eq!(
            obs.others.len(),
            self.config.num_players - 1,
            "observation has wrong player count for this config"
        );

        let mut out = Vec::with_capacity(self.observation_len());
        out.push(i64::from(obs.num_tokens) - 1);
        out.push(i64::from(obs.num_fuses) - 1);
        out.extend(self.encode_cards(&obs.discarded_cards));
        out.extend(self.encode_cards(&obs.played_cards.cards()));
        self.push_info_block(&mut out, &obs.your_info);
        for other in &obs.others {
            self.push_card_block(&mut out, &other.cards);
            self.push_info_block(&mut out, &other.info);
        }
        out
    }

    fn decode_observation(&self, sample: &[i64]) -> Observation {
        assert_eq!(
            sample.len(),
            self.observation_len(),
            "observation sample has wrong shape for this config"
        );

        let num_unique = self.unique_cards.len();
        let num_tokens = (sample[0] + 1) as u8;
        let num_fuses = (sample[1] + 1) as u8;

        let mut pos = 2;
        let discarded_cards = self.decode_cards(&sample[pos..pos + num_unique]);
        pos += num_unique;
        let played = self.decode_cards(&sample[pos..pos + num_unique]);
        pos += num_unique;
        let played_cards = PlayedStacks::from_cards(self.num_colors(), &played);

        let your_info = self.take_info_block(sample, &mut pos);

        let mut others = Vec::with_capacity(self.config.num_players - 1);
        for _ in 0..self.config.num_players - 1 {
            let cards = self.take_card_block(sample, &mut pos);
            let info = self.take_info_block(sample, &mut pos);
            others.push(OtherHand { cards, info });
        }

        Observation {
            num_tokens,
            num_fuses,
            discarded_cards,
            played_cards,
            your_info,
            others,
        }
    }

    fn encode_move(&self, mv: &Move, actor: PlayerId, _hand: &Hand) -> usize {
        if let Some(sample) = encode_clue(&self.config, mv, actor) {
            return sample;
        }
        let discard_base = clue_blocks_len(&self.config);
        match *mv {
            Move::Discard { index } => {
                assert!(index < self.config.hand_size, "hand index out of domain");
                discard_base + index
            }
            Move::Play { index } => {
                assert!(index < self.config.hand_size, "hand index out of domain");
                discard_base + self.config.hand_size + index
            }
            _ => unreachable!("clues are handled above"),
        }
    }

    fn decode_move(&self, sample: usize, actor: PlayerId, _hand: &Hand) -> Move {
        assert!(sample < self.num_moves(), "action sample out of range");
        if let Some(mv) = decode_clue(&self.config, sample, actor) {
            return mv;
        }
        let index = sample - clue_blocks_len(&self.config);
        if index < self.config.hand_size {
            Move::Discard { index }
        } else {
            Move::Play {
                index: index - self.config.hand_size,
            }
        }
    }
}
