//! Flattened codec: histogram encoding over the information domain.
//!
//! Instead of per-slot structure, every hand and pile becomes a vector of
//! counts over the information vector - all `(color, rank)` combinations
//! with each axis extended by an "unknown" value. A fully-known card lands
//! in its exact bucket; partially-known information lands in a wildcard
//! bucket. The shape is uniform, at the cost of erasing slot order.
//!
//! Discard and play actions address information classes, not hand indices:
//! decoding resolves the targeted pattern against the acting player's
//! committed information and picks the first consistent slot. A pattern no
//! slot matches decodes to an out-of-range index, which the engine rejects
//! as an `IllegalMove` - an impossible action surfaces as a legality
//! failure, never a crash.

use super::{clue_blocks_len, decode_clue, encode_clue, Spaces};
use crate::cards::{Card, Color, Hand, Information, Rank};
use crate::core::{Config, Move, Observation, PlayerId};

/// The histogram codec.
#[derive(Clone, Debug)]
pub struct FlattenedSpaces {
    config: Config,
    info_vector: Vec<Information>,
}

impl FlattenedSpaces {
    /// Derive the domains for a config.
    ///
    /// Panics if `hand_size` does not bound every rank's multiplicity: the
    /// histogram cells are sized `hand_size + 1`, and discard counts must
    /// fit in them.
    #[must_use]
    pub fn new(config: Config) -> Self {
        config.assert_valid();
        let max_count = config.card_counts.iter().copied().max().unwrap_or(0);
        assert!(
            config.hand_size >= max_count as usize,
            "hand size must bound per-rank multiplicities for the histogram domains"
        );

        let num_colors = config.num_colors();
        let num_ranks = config.num_ranks();
        let mut info_vector = Vec::with_capacity((num_colors + 1) * (num_ranks + 1));
        for color in Color::all(num_colors).map(Some).chain([None]) {
            for rank in Rank::all(num_ranks).map(Some).chain([None]) {
                info_vector.push(Information::new(color, rank));
            }
        }

        Self {
            config,
            info_vector,
        }
    }

    /// The information vector the histograms count over: all combinations
    /// of known/unknown color and rank, color-major, known values first.
    #[must_use]
    pub fn information_vector(&self) -> &[Information] {
        &self.info_vector
    }

    fn info_index(&self, info: Information) -> usize {
        let num_colors = self.config.num_colors();
        let num_ranks = self.config.num_ranks();
        let c = info.color.map_or(num_colors, |c| {
            assert!(c.index() < num_colors, "color outside config domain");
            c.index()
        });
        let r = info.rank.map_or(num_ranks, |r| {
            assert!(r.index() < num_ranks, "rank outside config domain");
            r.index()
        });
        c * (num_ranks + 1) + r
    }

    /// Encode an information list as a histogram over the information
    /// vector.
    #[must_use]
    pub fn encode_infos(&self, infos: &[Information]) -> Vec<i64> {
        let mut sample = vec![0i64; self.info_vector.len()];
        for &info in infos {
            sample[self.info_index(info)] += 1;
        }
        sample
    }

    /// Encode a card list as a histogram: each card counts as fully-known
    /// information.
    #[must_use]
    pub fn encode_cards(&self, cards: &[Card]) -> Vec<i64> {
        let mut sample = vec![0i64; self.info_vector.len()];
        for &card in cards {
            sample[self.info_index(Information::new(Some(card.color), Some(card.rank)))] += 1;
        }
        sample
    }

    /// Decode a histogram into an information list in vector order.
    ///
    /// Content round-trips; the original insertion order does not.
    #[must_use]
    pub fn decode_infos(&self, sample: &[i64]) -> Vec<Information> {
        assert_eq!(
            sample.len(),
            self.info_vector.len(),
            "histogram sample has wrong shape for this config"
        );
        self.info_vector
            .iter()
            .zip(sample)
            .flat_map(|(&info, &count)| {
                assert!(count >= 0, "negative histogram count");
                std::iter::repeat(info).take(count as usize)
            })
            .collect()
    }

    /// The first hand slot whose committed information is consistent with
    /// `pattern` (a wildcard axis matches anything), or `hand.len()` if no
    /// slot matches - deliberately out of range.
    ///
    /// Matching never consults hidden card identity.
    #[must_use]
    pub fn find_matching_slot(&self, pattern: Information, hand: &Hand) -> usize {
        for (i, slot) in hand.slots().iter().enumerate() {
            let Some(info) = slot.info else { continue };
            let color_matches = pattern.color.map_or(true, |c| info.color == Some(c));
            let rank_matches = pattern.rank.map_or(true, |r| info.rank == Some(r));
            if color_matches && rank_matches {
                return i;
            }
        }
        hand.len()
    }

    fn histogram_bound(&self) -> i64 {
        self.config.hand_size as i64 + 1
    }
}

impl Spaces for FlattenedSpaces {
    fn config(&self) -> &Config {
        &self.config
    }

    fn observation_bounds(&self) -> Vec<i64> {
        let config = &self.config;
        let vector_len = self.info_vector.len();

        let mut bounds = vec![i64::from(config.max_tokens), i64::from(config.max_fuses)];
        // Discarded, played, your info, then cards + info per other player:
        // every histogram cell shares the same bound.
        let blocks = 3 + 2 * (config.num_players - 1);
        bounds.extend(std::iter::repeat(self.histogram_bound()).take(blocks * vector_len));
        bounds
    }

    fn num_moves(&self) -> usize {
        clue_blocks_len(&self.config) + 2 * self.info_vector.len()
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
        out.extend(self.encode_infos(&obs.your_info));
        for other in &obs.others {
            out.extend(self.encode_cards(&other.cards));
            out.extend(self.encode_infos(&other.info));
        }
        out
    }

    fn decode_observation(&self, _sample: &[i64]) -> Observation {
        unimplemented!("the flattened observation encoding is not invertible")
    }

    fn encode_move(&self, mv: &Move, actor: PlayerId, hand: &Hand) -> usize {
        if let Some(sample) = encode_clue(&self.config, mv, actor) {
            return sample;
        }
        let discard_base = clue_blocks_len(&self.config);
        let index = match *mv {
            Move::Discard { index } | Move::Play { index } => index,
            _ => unreachable!("clues are handled above"),
        };
        let info = hand
            .info(index)
            .expect("cannot encode a move on an empty hand slot");
        let class = self.info_index(info);
        match mv {
            Move::Discard { .. } => discard_base + class,
            _ => discard_base + self.info_vector.len() + class,
        }
    }

    fn decode_move(&self, sample: usize, actor: PlayerId, hand: &Hand) -> Move {
        assert!(sample < self.num_moves(), "action sample out of range");
        if let Some(mv) = decode_clue(&self.config, sample, actor) {
            return mv;
        }
        let class = sample - clue_blocks_len(&self.config);
        let vector_len = self.info_vector.len();
        if class < vector_len {
            Move::Discard {
                index: self.find_matching_slot(self.info_vector[class], hand),
            }
        } else {
            Move::Play {
                index: self.find_matching_slot(self.info_vector[class - vector_len], hand),
            }
        }
    }
}
