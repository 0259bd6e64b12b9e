//! A rule-based 2-player policy.
//!
//! Useful as an oracle opponent and as a non-trivial driver for tests: it
//! plays cards it can identify as playable from its own information, keeps
//! the partner from misplaying or discarding the last copy of a useful
//! card, and otherwise discards its least-known card.
//!
//! All reasoning runs on an `Observation` - the policy never sees its own
//! card identities, only committed information.

use crate::cards::Information;
use crate::core::{Config, Move, Observation, PlayedStacks, PlayerId};

/// The heuristic decision function. 2-player games only.
#[derive(Clone, Debug)]
pub struct HeuristicPolicy {
    config: Config,
}

impl HeuristicPolicy {
    /// Create a heuristic policy for a config.
    #[must_use]
    pub fn new(config: Config) -> Self {
        assert!(
            config.num_players == 2,
            "HeuristicPolicy only supports 2 players"
        );
        Self { config }
    }

    /// Choose a move for `actor` given their observation.
    ///
    /// Pure: the same observation always yields the same move. Priority is
    /// clue > play > discard.
    #[must_use]
    pub fn choose(&self, obs: &Observation, actor: PlayerId) -> Move {
        let target = actor.next(self.config.num_players);
        let (play_cards, discard_card) =
            self.plan_play_or_discard(&obs.your_info, &obs.played_cards);

        // Bank our own planned plays hypothetically, so we don't clue the
        // partner toward a card we already intend to play.
        let mut played = obs.played_cards.clone();
        for &index in &play_cards {
            let info = obs.your_info[index];
            if let Some(color) = info.color {
                played.advance(color);
            } else if let Some(rank) = info.rank {
                let candidates: Vec<_> = played
                    .iter()
                    .filter(|&(_, h)| h + 1 == rank.value())
                    .map(|(color, _)| color)
                    .collect();
                // Only bank the play if it lands unambiguously.
                if let [color] = candidates[..] {
                    played.advance(color);
                }
            }
        }

        let clues = if obs.num_tokens > 0 {
            self.plan_clues(obs, &played, target)
        } else {
            Vec::new()
        };

        if let Some(&clue) = clues.first() {
            clue
        } else if let Some(&index) = play_cards.first() {
            Move::Play { index }
        } else {
            Move::Discard {
                index: discard_card,
            }
        }
    }

    /// Cards we believe are playable, plus a discard candidate.
    ///
    /// A card is playable if its known rank matches a stack that could take
    /// it next; known-color playables go to the front of the list. The
    /// discard candidate is a card that is provably dead, falling back to
    /// the card we know least about.
    fn plan_play_or_discard(
        &self,
        infos: &[Information],
        played: &PlayedStacks,
    ) -> (Vec<usize>, usize) {
        let num_ranks = self.config.num_ranks() as u8;
        let mut plays: Vec<usize> = Vec::new();
        let mut discard: Option<usize> = None;

        for (index, info) in infos.iter().enumerate() {
            let Some(rank) = info.rank else {
                // Without rank information we never try to play. If the
                // card's color pile is already complete, it is dead.
                if let Some(color) = info.color {
                    if played.height(color) == num_ranks {
                        discard = Some(index);
                    }
                }
                continue;
            };

            match info.color {
                None => {
                    if played.iter().all(|(_, h)| h >= rank.value()) {
                        // Every pile is past this rank: dead card.
                        discard = Some(index);
                    }
                    if played.iter().any(|(_, h)| h + 1 == rank.value()) {
                        plays.push(index);
                    }
                }
                Some(color) if rank.value() == played.height(color) + 1 => {
                    // Fully identified playable: try it first.
                    plays.insert(0, index);
                }
                Some(color) if rank.value() <= played.height(color) => {
                    discard = Some(index);
                }
                Some(_) => {}
            }
        }

        let discard = discard.unwrap_or_else(|| {
            // Discard the card with the least information.
            let mut best = 0;
            for (index, info) in infos.iter().enumerate() {
                let current = infos[best];
                if less_info(info.color, current.color) && less_info(info.rank, current.rank) {
                    best = index;
                }
            }
            best
        });

        (plays, discard)
    }

    /// Clues worth giving, most urgent first:
    ///
    /// 1. color clues stopping the partner from burning a fuse;
    /// 2. a rank clue saving the last copy of a still-useful card the
    ///    partner is about to discard;
    /// 3. rank clues completing color-only knowledge of playable cards;
    /// 4. a first clue about a playable card the partner knows nothing
    ///    about - color if they hold a same-rank card of another color that
    ///    could be confused with it, rank otherwise.
    fn plan_clues(
        &self,
        obs: &Observation,
        played: &PlayedStacks,
        target: PlayerId,
    ) -> Vec<Move> {
        let them = &obs.others[0];
        let (their_plays, their_discard) = self.plan_play_or_discard(&them.info, played);
        let mut clues = Vec::new();

        // (1) Rank information alone made these look playable; a color clue
        // is enough to stop a misplay.
        for &index in &their_plays {
            let card = them.cards[index];
            if card.rank.value() != played.height(card.color) + 1 {
                clues.push(Move::ClueColor {
                    target,
                    color: card.color,
                });
            }
        }
        if !clues.is_empty() {
            return clues;
        }

        // (2) Save the last copy of a card they are about to discard.
        if their_discard < them.cards.len() {
            let card = them.cards[their_discard];
            if card.rank.value() > played.height(card.color) {
                let discarded = obs
                    .discarded_cards
                    .iter()
                    .filter(|&&c| c == card)
                    .count();
                if discarded + 1 == self.config.card_counts[card.rank.index()] as usize {
                    clues.push(Move::ClueRank {
                        target,
                        rank: card.rank,
                    });
                }
            }
        }
        if !clues.is_empty() {
            return clues;
        }

        // (3) They know the color; the rank makes it playable.
        for (index, info) in them.info.iter().enumerate() {
            if info.color.is_some() && info.rank.is_none() {
                let card = them.cards[index];
                if card.rank.value() == played.height(card.color) + 1 {
                    clues.push(Move::ClueRank {
                        target,
                        rank: card.rank,
                    });
                }
            }
        }
        if !clues.is_empty() {
            return clues;
        }

        // (4) First information about a playable card they know nothing
        // about.
        for (index, info) in them.info.iter().enumerate() {
            if !info.is_unknown() {
                continue;
            }
            let card = them.cards[index];
            if card.rank.value() == played.height(card.color) + 1 {
                let confusable = them
                    .cards
                    .iter()
                    .zip(&them.info)
                    .any(|(dup, dup_info)| {
                        dup.rank == card.rank
                            && dup.color != card.color
                            && dup_info.color.is_none()
                    });
                if confusable {
                    clues.push(Move::ClueColor {
                        target,
                        color: card.color,
                    });
                } else {
                    clues.push(Move::ClueRank {
                        target,
                        rank: card.rank,
                    });
                }
            }
        }
        clues
    }
}

/// "`lhs` carries no more information than `rhs`."
fn less_info<T>(lhs: Option<T>, rhs: Option<T>) -> bool {
    !(lhs.is_some() && rhs.is_none())
}
