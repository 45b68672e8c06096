//! Strongest-subset policy for the showdown game.
//!
//! Hands hold at most a handful of cards and a call is at most three, so
//! trying every subset is cheap.

use std::cmp::Ordering;

use tracing::debug;
use tricktable_engine::cards::Card;
use tricktable_engine::hand::{compare_texas, evaluate_texas, for_each_combination, TexasHandResult};

use crate::{AutoPlayer, PlayView};

/// Plays the `count` cards that make the best poker hand together with the
/// community cards. Ties keep the earliest subset in hand order, so the
/// choice is deterministic.
///
/// # Example
///
/// ```rust
/// use tricktable_ai::baseline::BaselinePlayer;
/// use tricktable_ai::{AutoPlayer, PlayView};
/// use tricktable_engine::cards::parse_cards;
///
/// let hand = parse_cards("2c 9h Ks Kd 4c").unwrap();
/// let community = parse_cards("Kh 7s 8d Jc").unwrap();
/// let view = PlayView { hand: &hand, community: &community, count: 2 };
///
/// let play = BaselinePlayer::new().choose_play(&view);
/// assert_eq!(play, parse_cards("Ks Kd").unwrap());
/// ```
#[derive(Debug, Clone, Default)]
pub struct BaselinePlayer;

impl BaselinePlayer {
    pub fn new() -> Self {
        Self
    }

    fn score(subset: &[Card], community: &[Card]) -> Option<TexasHandResult> {
        let mut cards = subset.to_vec();
        cards.extend_from_slice(community);
        match evaluate_texas(&cards) {
            Ok(r) => Some(r),
            Err(e) => {
                debug!(error = %e, "subset not evaluated");
                None
            }
        }
    }
}

impl AutoPlayer for BaselinePlayer {
    fn choose_play(&self, view: &PlayView) -> Vec<Card> {
        let fallback: Vec<Card> = view.hand.iter().take(view.count).copied().collect();
        if view.count == 0 || view.count > view.hand.len() {
            return fallback;
        }

        let mut best: Option<(Vec<Card>, TexasHandResult)> = None;
        for_each_combination(view.hand.len(), view.count, |idx| {
            let subset: Vec<Card> = idx.iter().map(|&i| view.hand[i]).collect();
            let Some(result) = Self::score(&subset, view.community) else {
                return;
            };
            let better = match &best {
                None => true,
                Some((_, current)) => compare_texas(&result, current) == Ordering::Greater,
            };
            if better {
                best = Some((subset, result));
            }
        });
        best.map(|(cards, _)| cards).unwrap_or(fallback)
    }

    fn name(&self) -> &str {
        "Baseline"
    }
}
