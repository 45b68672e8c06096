//! Play-shape classification for the trick game.
//!
//! [`evaluate`] never fails: anything that is not a legal shape comes back as
//! [`HandType::Invalid`] with weight 0. Wild cards (hearts of the level rank)
//! only substitute inside bombs; every other shape reads them at face rank.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cards::{rank_of, Card, SMALL_JOKER_RANK};
use crate::weight::{is_wild_card, logic_weight_with, WeightRules};

const BOMB_BASE: u32 = 5000;
const BOMB_PER_CARD: u32 = 1000;
const JOKER_BOMB_BASE: u32 = 5650;
const JOKER_BOMB_PER_CARD: u32 = 2000;

/// Slots 0..=15; ordinary ranks use 3..=15 and jokers are kept apart.
const RANK_SLOTS: usize = 16;

/// Play shapes, ordered so that everything from `Bomb` up beats the rest.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum HandType {
    Invalid,
    Single,
    Pair,
    Triple,
    TripleWithSingle,
    TripleWithPair,
    Straight,
    ConsecutivePairs,
    Airplane,
    AirplaneWithSingles,
    AirplaneWithPairs,
    Bomb,
    JokerBomb,
}

impl HandType {
    pub fn is_bomb(self) -> bool {
        self >= HandType::Bomb
    }

    pub fn id(self) -> &'static str {
        match self {
            HandType::Invalid => "invalid",
            HandType::Single => "single",
            HandType::Pair => "pair",
            HandType::Triple => "triple",
            HandType::TripleWithSingle => "triple_with_single",
            HandType::TripleWithPair => "triple_with_pair",
            HandType::Straight => "straight",
            HandType::ConsecutivePairs => "consecutive_pairs",
            HandType::Airplane => "airplane",
            HandType::AirplaneWithSingles => "airplane_with_singles",
            HandType::AirplaneWithPairs => "airplane_with_pairs",
            HandType::Bomb => "bomb",
            HandType::JokerBomb => "joker_bomb",
        }
    }
}

/// Classified play. `weight` is only meaningful against a result of the same
/// type, or between two bomb-class results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandResult {
    pub hand_type: HandType,
    pub main_cards: Vec<Card>,
    pub kicker_cards: Vec<Card>,
    pub weight: u32,
}

impl HandResult {
    pub fn invalid() -> Self {
        Self {
            hand_type: HandType::Invalid,
            main_cards: Vec::new(),
            kicker_cards: Vec::new(),
            weight: 0,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.hand_type != HandType::Invalid
    }
}

pub fn evaluate(cards: &[Card], level_rank: u8) -> HandResult {
    evaluate_with_rules(cards, level_rank, WeightRules::default())
}

pub fn evaluate_with_rules(cards: &[Card], level_rank: u8, rules: WeightRules) -> HandResult {
    if cards.is_empty() {
        return HandResult::invalid();
    }
    let play = Play::new(cards, level_rank, rules);

    if cards.len() == 1 {
        return play.single();
    }
    if play.jokers.len() == cards.len() {
        return play.joker_bomb().unwrap_or_else(HandResult::invalid);
    }

    play.bomb()
        .or_else(|| play.pair())
        .or_else(|| play.triple())
        .or_else(|| play.triple_with_single())
        .or_else(|| play.triple_with_pair())
        .or_else(|| play.straight())
        .or_else(|| play.consecutive_pairs())
        .or_else(|| play.airplane())
        .unwrap_or_else(HandResult::invalid)
}

/// Bomb-class results beat everything else; two other results only compare
/// when their types match. `Equal` also covers "not comparable".
pub fn compare(a: &HandResult, b: &HandResult) -> Ordering {
    match (a.hand_type.is_bomb(), b.hand_type.is_bomb()) {
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (true, true) => a.weight.cmp(&b.weight),
        (false, false) if a.hand_type == b.hand_type => a.weight.cmp(&b.weight),
        (false, false) => Ordering::Equal,
    }
}

pub fn can_beat(a: &HandResult, b: &HandResult) -> bool {
    compare(a, b) == Ordering::Greater
}

/// Per-call working set: cards bucketed by face rank, jokers set aside.
struct Play<'a> {
    cards: &'a [Card],
    level_rank: u8,
    rules: WeightRules,
    by_rank: [Vec<Card>; RANK_SLOTS],
    jokers: Vec<Card>,
}

impl<'a> Play<'a> {
    fn new(cards: &'a [Card], level_rank: u8, rules: WeightRules) -> Self {
        let mut by_rank: [Vec<Card>; RANK_SLOTS] = std::array::from_fn(|_| Vec::new());
        let mut jokers = Vec::new();
        for &card in cards {
            if card.is_joker() {
                jokers.push(card);
            } else {
                by_rank[rank_of(card) as usize].push(card);
            }
        }
        Self {
            cards,
            level_rank,
            rules,
            by_rank,
            jokers,
        }
    }

    fn weight(&self, card: Card) -> u32 {
        logic_weight_with(card, self.level_rank, self.rules)
    }

    fn sorted(&self, mut cards: Vec<Card>) -> Vec<Card> {
        cards.sort_by_key(|&c| (self.weight(c), c.raw()));
        cards
    }

    fn result(&self, hand_type: HandType, main: Vec<Card>, kickers: Vec<Card>, weight: u32) -> HandResult {
        HandResult {
            hand_type,
            main_cards: self.sorted(main),
            kicker_cards: self.sorted(kickers),
            weight,
        }
    }

    /// Weight of the lowest-sorted card of a group.
    fn group_weight(&self, group: &[Card]) -> u32 {
        group.iter().map(|&c| self.weight(c)).min().unwrap_or(0)
    }

    /// Ranks holding exactly `size` cards, ascending.
    fn ranks_with(&self, size: usize) -> Vec<usize> {
        (0..RANK_SLOTS)
            .filter(|&r| self.by_rank[r].len() == size)
            .collect()
    }

    fn occupied_ranks(&self) -> usize {
        self.by_rank.iter().filter(|g| !g.is_empty()).count()
    }

    fn single(&self) -> HandResult {
        let card = self.cards[0];
        self.result(HandType::Single, vec![card], Vec::new(), self.weight(card))
    }

    fn joker_bomb(&self) -> Option<HandResult> {
        if self.jokers.len() < 2 || !self.jokers.iter().any(|&j| rank_of(j) == SMALL_JOKER_RANK) {
            return None;
        }
        let weight = JOKER_BOMB_BASE + JOKER_BOMB_PER_CARD * self.jokers.len() as u32;
        Some(self.result(HandType::JokerBomb, self.jokers.clone(), Vec::new(), weight))
    }

    fn bomb(&self) -> Option<HandResult> {
        let n = self.cards.len();
        if n < 4 || !self.jokers.is_empty() {
            return None;
        }
        let wild = self
            .cards
            .iter()
            .filter(|&&c| is_wild_card(c, self.level_rank))
            .count();
        let natural: Vec<Vec<Card>> = self
            .by_rank
            .iter()
            .map(|g| {
                g.iter()
                    .copied()
                    .filter(|&c| !is_wild_card(c, self.level_rank))
                    .collect::<Vec<Card>>()
            })
            .filter(|g| !g.is_empty())
            .collect();
        if natural.len() != 1 || natural[0].len() + wild != n {
            return None;
        }
        let representative = natural[0][0];
        let weight = BOMB_BASE + BOMB_PER_CARD * n as u32 + self.weight(representative);
        Some(self.result(HandType::Bomb, self.cards.to_vec(), Vec::new(), weight))
    }

    fn same_rank(&self, size: usize, hand_type: HandType) -> Option<HandResult> {
        if self.cards.len() != size || !self.jokers.is_empty() || self.occupied_ranks() != 1 {
            return None;
        }
        let main = self.cards.to_vec();
        let weight = self.group_weight(&main);
        Some(self.result(hand_type, main, Vec::new(), weight))
    }

    fn pair(&self) -> Option<HandResult> {
        self.same_rank(2, HandType::Pair)
    }

    fn triple(&self) -> Option<HandResult> {
        self.same_rank(3, HandType::Triple)
    }

    /// Exactly one natural triple; every other card is returned as kickers.
    fn split_triple(&self) -> Option<(Vec<Card>, Vec<Card>)> {
        let triples = self.ranks_with(3);
        if triples.len() != 1 {
            return None;
        }
        let rank = triples[0];
        let main = self.by_rank[rank].clone();
        let mut kickers: Vec<Card> = self.jokers.clone();
        for (r, group) in self.by_rank.iter().enumerate() {
            if r != rank {
                kickers.extend(group.iter().copied());
            }
        }
        Some((main, kickers))
    }

    fn triple_with_single(&self) -> Option<HandResult> {
        if self.cards.len() != 4 {
            return None;
        }
        let (main, kickers) = self.split_triple()?;
        let weight = self.group_weight(&main);
        Some(self.result(HandType::TripleWithSingle, main, kickers, weight))
    }

    fn triple_with_pair(&self) -> Option<HandResult> {
        if self.cards.len() != 5 || !self.jokers.is_empty() {
            return None;
        }
        let (main, kickers) = self.split_triple()?;
        if rank_of(kickers[0]) != rank_of(kickers[1]) {
            return None;
        }
        let weight = self.group_weight(&main);
        Some(self.result(HandType::TripleWithPair, main, kickers, weight))
    }

    fn straight(&self) -> Option<HandResult> {
        let n = self.cards.len();
        if n < 5 || !self.jokers.is_empty() {
            return None;
        }
        let mut ordered = self.cards.to_vec();
        ordered.sort_by_key(|&c| (rank_of(c), c.raw()));
        let consecutive = ordered
            .windows(2)
            .all(|w| rank_of(w[1]) == rank_of(w[0]) + 1);
        if !consecutive {
            return None;
        }
        let top = ordered[n - 1];
        Some(self.result(HandType::Straight, ordered, Vec::new(), self.weight(top)))
    }

    fn consecutive_pairs(&self) -> Option<HandResult> {
        let n = self.cards.len();
        if n < 6 || n % 2 != 0 || !self.jokers.is_empty() {
            return None;
        }
        let mut ordered = self.cards.to_vec();
        ordered.sort_by_key(|&c| (rank_of(c), c.raw()));
        let pair_ranks: Vec<u8> = ordered
            .chunks(2)
            .map(|p| (rank_of(p[0]) == rank_of(p[1])).then(|| rank_of(p[0])))
            .collect::<Option<Vec<u8>>>()?;
        if !pair_ranks.windows(2).all(|w| w[1] == w[0] + 1) {
            return None;
        }
        let top = *pair_ranks.last()? as usize;
        let weight = self.group_weight(&self.by_rank[top]);
        Some(self.result(HandType::ConsecutivePairs, ordered, Vec::new(), weight))
    }

    fn airplane(&self) -> Option<HandResult> {
        if self.cards.len() < 6 {
            return None;
        }
        let segments = self.ranks_with(3);
        if segments.len() < 2 || !segments.windows(2).all(|w| w[1] == w[0] + 1) {
            return None;
        }

        let mut main = Vec::with_capacity(segments.len() * 3);
        let mut leftovers: Vec<Card> = self.jokers.clone();
        for (rank, group) in self.by_rank.iter().enumerate() {
            if segments.contains(&rank) {
                main.extend(group.iter().copied());
            } else {
                leftovers.extend(group.iter().copied());
            }
        }

        let top = *segments.last()?;
        let weight = self.group_weight(&self.by_rank[top]);
        let hand_type = if leftovers.is_empty() {
            HandType::Airplane
        } else if leftovers.len() == segments.len() {
            HandType::AirplaneWithSingles
        } else if leftovers.len() == segments.len() * 2 && self.forms_pairs(&leftovers) {
            HandType::AirplaneWithPairs
        } else {
            return None;
        };
        Some(self.result(hand_type, main, leftovers, weight))
    }

    /// Non-joker cards whose per-rank counts are all even.
    fn forms_pairs(&self, cards: &[Card]) -> bool {
        let mut counts = [0u8; RANK_SLOTS];
        for &c in cards {
            if c.is_joker() {
                return false;
            }
            counts[rank_of(c) as usize] += 1;
        }
        counts.iter().all(|&n| n % 2 == 0)
    }
}
