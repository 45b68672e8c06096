use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CardParseError;

/// High nibble of a card integer.
pub const SUIT_MASK: u8 = 0xF0;
/// Low nibble of a card integer.
pub const RANK_MASK: u8 = 0x0F;

/// Lowest ordinary rank (Three).
pub const RANK_THREE: u8 = 3;
/// Rank code for Ace.
pub const RANK_ACE: u8 = 14;
/// Rank code for Two, which sorts above Ace in the trick game.
pub const RANK_TWO: u8 = 15;
/// Joker rank byte of the big (black) joker.
pub const BIG_JOKER_RANK: u8 = 0x01;
/// Joker rank byte of the small (red) joker.
pub const SMALL_JOKER_RANK: u8 = 0x02;

/// Represents one of the suit nibbles of the card encoding.
/// Discriminants are the exact wire values of the high nibble.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[repr(u8)]
pub enum Suit {
    /// Diamonds suit (♦), lowest tie-break priority
    Diamonds = 0x00,
    /// Clubs suit (♣)
    Clubs = 0x10,
    /// Hearts suit (♥), the suit of wild cards
    Hearts = 0x20,
    /// Spades suit (♠), highest tie-break priority
    Spades = 0x30,
    /// Pseudo-suit shared by both jokers
    Joker = 0x40,
}

impl Suit {
    pub fn from_code(code: u8) -> Option<Suit> {
        match code & SUIT_MASK {
            0x00 => Some(Suit::Diamonds),
            0x10 => Some(Suit::Clubs),
            0x20 => Some(Suit::Hearts),
            0x30 => Some(Suit::Spades),
            0x40 => Some(Suit::Joker),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    fn letter(self) -> char {
        match self {
            Suit::Diamonds => 'd',
            Suit::Clubs => 'c',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
            Suit::Joker => 'J',
        }
    }
}

/// A single card packed into one byte: `suit | rank`.
///
/// The integer layout is the wire format shared with presentation and
/// network collaborators, so it serializes as the bare number. Cards carry no
/// identity; two equal integers from a multi-deck shoe are interchangeable.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Card(u8);

impl Card {
    pub const BIG_JOKER: Card = Card(0x40 | BIG_JOKER_RANK);
    pub const SMALL_JOKER: Card = Card(0x40 | SMALL_JOKER_RANK);

    pub const fn new(suit: Suit, rank: u8) -> Card {
        Card(suit as u8 | (rank & RANK_MASK))
    }

    pub const fn from_raw(raw: u8) -> Card {
        Card(raw)
    }

    pub const fn raw(self) -> u8 {
        self.0
    }

    pub fn suit(self) -> Option<Suit> {
        Suit::from_code(self.0)
    }

    pub fn rank(self) -> u8 {
        rank_of(self)
    }

    pub fn is_joker(self) -> bool {
        suit_of(self) == Suit::Joker.code()
    }

    /// True for the 52 ordinary encodings and the two jokers.
    pub fn is_valid(self) -> bool {
        let suit = suit_of(self);
        let rank = rank_of(self);
        if suit == Suit::Joker.code() {
            return rank == BIG_JOKER_RANK || rank == SMALL_JOKER_RANK;
        }
        suit <= Suit::Spades.code() && (RANK_THREE..=RANK_TWO).contains(&rank)
    }
}

pub fn suit_of(card: Card) -> u8 {
    card.0 & SUIT_MASK
}

pub fn rank_of(card: Card) -> u8 {
    card.0 & RANK_MASK
}

fn rank_label(rank: u8) -> Option<&'static str> {
    let label = match rank {
        3 => "3",
        4 => "4",
        5 => "5",
        6 => "6",
        7 => "7",
        8 => "8",
        9 => "9",
        10 => "T",
        11 => "J",
        12 => "Q",
        13 => "K",
        RANK_ACE => "A",
        RANK_TWO => "2",
        _ => return None,
    };
    Some(label)
}

fn parse_rank(token: &str) -> Option<u8> {
    match token {
        "2" => Some(RANK_TWO),
        "T" | "10" => Some(10),
        "J" => Some(11),
        "Q" => Some(12),
        "K" => Some(13),
        "A" => Some(RANK_ACE),
        t => t.parse::<u8>().ok().filter(|r| (3..=9).contains(r)),
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Card::BIG_JOKER {
            return f.write_str("BJ");
        }
        if *self == Card::SMALL_JOKER {
            return f.write_str("RJ");
        }
        match (rank_label(rank_of(*self)), self.suit()) {
            (Some(r), Some(s)) if s != Suit::Joker => write!(f, "{}{}", r, s.letter()),
            _ => write!(f, "0x{:02x}", self.0),
        }
    }
}

/// Accepts `Ah`, `10s`, `Td`, `2c`, `BJ`, `RJ` (case-insensitive) and raw
/// integers such as `0x3e` or `62`.
impl FromStr for Card {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim().to_ascii_uppercase();
        if text.is_empty() {
            return Err(CardParseError::Empty);
        }
        match text.as_str() {
            "BJ" => return Ok(Card::BIG_JOKER),
            "RJ" => return Ok(Card::SMALL_JOKER),
            _ => {}
        }

        let raw = if let Some(hex) = text.strip_prefix("0X") {
            u8::from_str_radix(hex, 16).ok()
        } else if text.bytes().all(|b| b.is_ascii_digit()) {
            text.parse::<u8>().ok()
        } else {
            let last = text.char_indices().last().map(|(i, _)| i).unwrap_or(0);
            let (rank_part, suit_part) = text.split_at(last);
            let suit = match suit_part {
                "D" => Some(Suit::Diamonds),
                "C" => Some(Suit::Clubs),
                "H" => Some(Suit::Hearts),
                "S" => Some(Suit::Spades),
                _ => None,
            };
            match (parse_rank(rank_part), suit) {
                (Some(rank), Some(suit)) => Some(Card::new(suit, rank).raw()),
                _ => None,
            }
        };

        let card = raw
            .map(Card::from_raw)
            .ok_or_else(|| CardParseError::Unrecognized(s.trim().to_string()))?;
        if card.is_valid() {
            Ok(card)
        } else {
            Err(CardParseError::InvalidEncoding(card.raw()))
        }
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Diamonds, Suit::Clubs, Suit::Hearts, Suit::Spades]
}

pub fn all_ranks() -> [u8; 13] {
    [3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, RANK_ACE, RANK_TWO]
}

/// The 52 ordinary cards of one deck, no jokers.
pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for &s in &all_suits() {
        for &r in &all_ranks() {
            v.push(Card::new(s, r));
        }
    }
    v
}

/// `decks` full decks, each with both jokers, as used by the trick game.
pub fn game_one_shoe(decks: usize) -> Vec<Card> {
    let mut v = Vec::with_capacity(decks * 54);
    for _ in 0..decks {
        v.extend(full_deck());
        v.push(Card::BIG_JOKER);
        v.push(Card::SMALL_JOKER);
    }
    v
}

/// Parses a whitespace- or comma-separated list of cards.
pub fn parse_cards(text: &str) -> Result<Vec<Card>, CardParseError> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(str::parse)
        .collect()
}
