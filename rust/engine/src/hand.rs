//! Best-five poker evaluation for the showdown game.
//!
//! Uses its own rank scale (Two = 2 ... Ace = 14) rather than the trick-game
//! weights. Results are strictly ordered: equal categories and rank vectors
//! fall back to suit priority (spade > heart > club > diamond).

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cards::{rank_of, suit_of, Card, RANK_ACE, RANK_TWO};
use crate::errors::EvalError;

/// Cards in a poker hand.
pub const HAND_SIZE: usize = 5;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum TexasHandType {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl TexasHandType {
    pub fn label(self) -> &'static str {
        match self {
            TexasHandType::HighCard => "High Card",
            TexasHandType::OnePair => "One Pair",
            TexasHandType::TwoPair => "Two Pair",
            TexasHandType::ThreeOfAKind => "Three of a Kind",
            TexasHandType::Straight => "Straight",
            TexasHandType::Flush => "Flush",
            TexasHandType::FullHouse => "Full House",
            TexasHandType::FourOfAKind => "Four of a Kind",
            TexasHandType::StraightFlush => "Straight Flush",
            TexasHandType::RoyalFlush => "Royal Flush",
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct TexasHandResult {
    pub hand_type: TexasHandType,
    /// The winning five, sorted by (rank desc, suit desc).
    pub cards: Vec<Card>,
    // tie-break ranks, ordered by priority for the category
    pub rank_values: [u8; 5],
    pub description: String,
}

/// Rank on the poker scale: the trick game's rank-15 Two becomes 2.
pub fn texas_rank(card: Card) -> u8 {
    match rank_of(card) {
        RANK_TWO => 2,
        r => r,
    }
}

/// 0 diamond, 1 club, 2 heart, 3 spade.
pub fn suit_priority(card: Card) -> u8 {
    suit_of(card) >> 4
}

/// Best five-card hand out of `cards` (5 to 7 in play; longer inputs are
/// searched the same way).
pub fn evaluate_texas(cards: &[Card]) -> Result<TexasHandResult, EvalError> {
    if cards.len() < HAND_SIZE {
        return Err(EvalError::InsufficientCards { got: cards.len() });
    }
    if let Some(bad) = cards.iter().find(|c| c.is_joker() || !c.is_valid()) {
        return Err(EvalError::InvalidCard(bad.raw()));
    }

    let mut best: Option<TexasHandResult> = None;
    for_each_combination(cards.len(), HAND_SIZE, |idx| {
        let five: [Card; HAND_SIZE] = std::array::from_fn(|i| cards[idx[i]]);
        let candidate = classify_five(five);
        let better = match &best {
            None => true,
            Some(current) => compare_texas(&candidate, current).is_gt(),
        };
        if better {
            best = Some(candidate);
        }
    });
    // at least one combination is visited when n >= 5
    Ok(best.unwrap_or_else(|| classify_five([cards[0], cards[1], cards[2], cards[3], cards[4]])))
}

pub fn compare_texas(a: &TexasHandResult, b: &TexasHandResult) -> Ordering {
    a.hand_type
        .cmp(&b.hand_type)
        .then_with(|| a.rank_values.cmp(&b.rank_values))
        .then_with(|| compare_suits(&a.cards, &b.cards))
}

/// Orders two single revealed cards by poker rank, then suit priority.
pub fn compare_reveal(a: Card, b: Card) -> Ordering {
    texas_rank(a)
        .cmp(&texas_rank(b))
        .then_with(|| suit_priority(a).cmp(&suit_priority(b)))
}

fn sort_desc(cards: &mut [Card]) {
    cards.sort_by(|x, y| compare_reveal(*y, *x));
}

fn compare_suits(a: &[Card], b: &[Card]) -> Ordering {
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    sort_desc(&mut a);
    sort_desc(&mut b);
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| suit_priority(*x).cmp(&suit_priority(*y)))
        .find(|o| o.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Calls `visit` with every ascending `k`-index combination of `0..n`, in
/// lexicographic order. Nothing is visited when `k > n`.
///
/// ```
/// use tricktable_engine::hand::for_each_combination;
///
/// let mut seen = Vec::new();
/// for_each_combination(4, 2, |idx| seen.push(idx.to_vec()));
/// assert_eq!(seen.len(), 6);
/// assert_eq!(seen[0], vec![0, 1]);
/// assert_eq!(seen[5], vec![2, 3]);
/// ```
pub fn for_each_combination(n: usize, k: usize, mut visit: impl FnMut(&[usize])) {
    if k > n {
        return;
    }
    let mut idx: Vec<usize> = (0..k).collect();
    loop {
        visit(&idx);
        // advance the rightmost index that still has room
        let mut i = k;
        loop {
            if i == 0 {
                return;
            }
            i -= 1;
            if idx[i] < n - k + i {
                break;
            }
        }
        idx[i] += 1;
        for j in i + 1..k {
            idx[j] = idx[j - 1] + 1;
        }
    }
}

fn classify_five(mut cards: [Card; HAND_SIZE]) -> TexasHandResult {
    sort_desc(&mut cards);

    let mut rank_counts = [0u8; 15];
    for &c in cards.iter() {
        rank_counts[texas_rank(c) as usize] += 1;
    }
    let flush = cards.iter().all(|&c| suit_of(c) == suit_of(cards[0]));
    let straight_high = detect_straight_high(&rank_counts);

    // (count, rank) groups, biggest group first then highest rank
    let mut groups: Vec<(u8, u8)> = (2..=RANK_ACE)
        .rev()
        .filter(|&r| rank_counts[r as usize] > 0)
        .map(|r| (rank_counts[r as usize], r))
        .collect();
    groups.sort_by(|a, b| b.cmp(a));
    let mut grouped = [0u8; 5];
    let mut k = 0;
    for &(count, rank) in &groups {
        for _ in 0..count {
            grouped[k] = rank;
            k += 1;
        }
    }
    let shape: Vec<u8> = groups.iter().map(|g| g.0).collect();

    let (hand_type, rank_values) = match (flush, straight_high) {
        (true, Some(RANK_ACE)) => (TexasHandType::RoyalFlush, straight_values(RANK_ACE)),
        (true, Some(high)) => (TexasHandType::StraightFlush, straight_values(high)),
        _ if shape == [4, 1] => (TexasHandType::FourOfAKind, grouped),
        _ if shape == [3, 2] => (TexasHandType::FullHouse, grouped),
        (true, None) => (TexasHandType::Flush, grouped),
        (false, Some(high)) => (TexasHandType::Straight, straight_values(high)),
        _ if shape == [3, 1, 1] => (TexasHandType::ThreeOfAKind, grouped),
        _ if shape == [2, 2, 1] => (TexasHandType::TwoPair, grouped),
        _ if shape == [2, 1, 1, 1] => (TexasHandType::OnePair, grouped),
        _ => (TexasHandType::HighCard, grouped),
    };

    TexasHandResult {
        hand_type,
        cards: cards.to_vec(),
        rank_values,
        description: describe(hand_type, &rank_values),
    }
}

/// High card of a five-distinct-rank run; the wheel reports 5.
fn detect_straight_high(rank_counts: &[u8; 15]) -> Option<u8> {
    let present: Vec<u8> = (2..=RANK_ACE)
        .filter(|&r| rank_counts[r as usize] == 1)
        .collect();
    if present.len() != HAND_SIZE {
        return None;
    }
    if present[4] - present[0] == 4 {
        return Some(present[4]);
    }
    if present == [2, 3, 4, 5, RANK_ACE] {
        return Some(5);
    }
    None
}

fn straight_values(high: u8) -> [u8; 5] {
    [high, high - 1, high - 2, high - 3, high - 4]
}

fn rank_name(rank: u8) -> &'static str {
    match rank {
        2 => "Two",
        3 => "Three",
        4 => "Four",
        5 => "Five",
        6 => "Six",
        7 => "Seven",
        8 => "Eight",
        9 => "Nine",
        10 => "Ten",
        11 => "Jack",
        12 => "Queen",
        13 => "King",
        _ => "Ace",
    }
}

fn plural(rank: u8) -> String {
    match rank {
        6 => "Sixes".to_string(),
        r => format!("{}s", rank_name(r)),
    }
}

fn describe(hand_type: TexasHandType, v: &[u8; 5]) -> String {
    match hand_type {
        TexasHandType::RoyalFlush => "Royal Flush".to_string(),
        TexasHandType::StraightFlush => format!("Straight Flush, {} high", rank_name(v[0])),
        TexasHandType::FourOfAKind => format!("Four of a Kind, {}", plural(v[0])),
        TexasHandType::FullHouse => format!("Full House, {} over {}", plural(v[0]), plural(v[3])),
        TexasHandType::Flush => format!("Flush, {} high", rank_name(v[0])),
        TexasHandType::Straight => format!("Straight, {} high", rank_name(v[0])),
        TexasHandType::ThreeOfAKind => format!("Three of a Kind, {}", plural(v[0])),
        TexasHandType::TwoPair => format!("Two Pair, {} and {}", plural(v[0]), plural(v[2])),
        TexasHandType::OnePair => format!("One Pair, {}", plural(v[0])),
        TexasHandType::HighCard => format!("High Card, {}", rank_name(v[0])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combination_counts() {
        let count = |n, k| {
            let mut seen = 0;
            for_each_combination(n, k, |idx| {
                assert_eq!(idx.len(), k);
                assert!(idx.windows(2).all(|w| w[0] < w[1]));
                seen += 1;
            });
            seen
        };
        assert_eq!(count(5, 5), 1);
        assert_eq!(count(6, 5), 6);
        assert_eq!(count(7, 5), 21);
        assert_eq!(count(5, 1), 5);
        assert_eq!(count(2, 3), 0);
    }

    #[test]
    fn descriptions_name_the_ranks() {
        assert_eq!(
            describe(TexasHandType::FullHouse, &[13, 13, 13, 5, 5]),
            "Full House, Kings over Fives"
        );
        assert_eq!(describe(TexasHandType::OnePair, &[6, 6, 9, 4, 3]), "One Pair, Sixes");
    }
}
