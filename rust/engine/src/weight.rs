//! Wild-card detection and the comparable weight of a single card in the
//! trick game.

use serde::{Deserialize, Serialize};

use crate::cards::{rank_of, Card, Suit, BIG_JOKER_RANK};

/// Weight of a non-heart level card when level cards are special.
pub const LEVEL_CARD_WEIGHT: u32 = 100;
/// Weight of a wild card (heart of the level rank).
pub const WILD_CARD_WEIGHT: u32 = 190;
pub const SMALL_JOKER_WEIGHT: u32 = 200;
pub const BIG_JOKER_WEIGHT: u32 = 210;

/// Rule-variant switches that change single-card weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightRules {
    /// When false, non-heart level cards keep their ordinary rank weight.
    pub level_cards_special: bool,
}

impl Default for WeightRules {
    fn default() -> Self {
        Self {
            level_cards_special: true,
        }
    }
}

/// True iff the card is a heart of the current level rank.
pub fn is_wild_card(card: Card, level_rank: u8) -> bool {
    !card.is_joker() && rank_of(card) == level_rank && card.suit() == Some(Suit::Hearts)
}

pub fn logic_weight(card: Card, level_rank: u8) -> u32 {
    logic_weight_with(card, level_rank, WeightRules::default())
}

/// Total over every card integer: jokers on top (big above small), then the
/// wild card, then the level band, then ordinary ranks with Two highest.
pub fn logic_weight_with(card: Card, level_rank: u8, rules: WeightRules) -> u32 {
    let rank = rank_of(card);
    if card.is_joker() {
        return if rank == BIG_JOKER_RANK {
            BIG_JOKER_WEIGHT
        } else {
            SMALL_JOKER_WEIGHT
        };
    }
    if rank == level_rank {
        if card.suit() == Some(Suit::Hearts) {
            return WILD_CARD_WEIGHT;
        }
        if rules.level_cards_special {
            return LEVEL_CARD_WEIGHT;
        }
    }
    rank as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{RANK_ACE, RANK_TWO};

    #[test]
    fn jokers_outrank_everything() {
        let level = 5;
        let wild = Card::new(Suit::Hearts, level);
        assert!(logic_weight(Card::BIG_JOKER, level) > logic_weight(Card::SMALL_JOKER, level));
        assert!(logic_weight(Card::SMALL_JOKER, level) > logic_weight(wild, level));
    }

    #[test]
    fn wild_card_is_only_the_heart_level_card() {
        assert!(is_wild_card(Card::new(Suit::Hearts, 7), 7));
        assert!(!is_wild_card(Card::new(Suit::Spades, 7), 7));
        assert!(!is_wild_card(Card::new(Suit::Hearts, 8), 7));
        assert!(!is_wild_card(Card::SMALL_JOKER, 2));
    }

    #[test]
    fn level_band_sits_between_ordinary_and_wild() {
        let level = 9;
        let spade_level = Card::new(Suit::Spades, level);
        let two = Card::new(Suit::Clubs, RANK_TWO);
        let wild = Card::new(Suit::Hearts, level);
        assert!(logic_weight(spade_level, level) > logic_weight(two, level));
        assert!(logic_weight(wild, level) > logic_weight(spade_level, level));
    }

    #[test]
    fn plain_level_cards_keep_rank_weight_when_switched_off() {
        let rules = WeightRules {
            level_cards_special: false,
        };
        let spade_level = Card::new(Suit::Spades, 9);
        assert_eq!(logic_weight_with(spade_level, 9, rules), 9);
        // wild cards stay wild regardless of the switch
        assert_eq!(
            logic_weight_with(Card::new(Suit::Hearts, 9), 9, rules),
            WILD_CARD_WEIGHT
        );
    }

    #[test]
    fn ordinary_cards_are_monotonic_with_two_highest() {
        let level = 3;
        let mut last = 0;
        for rank in 4..=RANK_TWO {
            let w = logic_weight(Card::new(Suit::Diamonds, rank), level);
            assert!(w > last);
            last = w;
        }
        assert!(
            logic_weight(Card::new(Suit::Clubs, RANK_TWO), level)
                > logic_weight(Card::new(Suit::Clubs, RANK_ACE), level)
        );
    }
}
