//! Card and result formatters for terminal display.
//!
//! Suits render as Unicode symbols where the terminal is known to support
//! them and fall back to the `d c h s` letters of the card text form
//! otherwise. Jokers always render as `BJ` / `RJ`.
//!
//! ## Example
//!
//! ```rust
//! use tricktable_engine::cards::{Card, Suit};
//! use tricktable_cli::formatters::{format_card, format_cards};
//!
//! let ace_spades = Card::new(Suit::Spades, 14);
//! assert!(format_card(ace_spades) == "A♠" || format_card(ace_spades) == "As");
//! assert!(format_cards(&[ace_spades, Card::BIG_JOKER]).ends_with(" BJ]"));
//! ```

use tricktable_engine::cards::{Card, Suit};
use tricktable_engine::hand::TexasHandResult;
use tricktable_engine::pattern::{HandResult, HandType};

/// Check if the terminal supports Unicode card symbols.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals
/// (TERM_PROGRAM) or VS Code (VSCODE_INJECTION). Elsewhere assumes Unicode.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: Suit) -> &'static str {
    let unicode = supports_unicode();
    match (suit, unicode) {
        (Suit::Hearts, true) => "♥",
        (Suit::Diamonds, true) => "♦",
        (Suit::Clubs, true) => "♣",
        (Suit::Spades, true) => "♠",
        (Suit::Hearts, false) => "h",
        (Suit::Diamonds, false) => "d",
        (Suit::Clubs, false) => "c",
        (Suit::Spades, false) => "s",
        (Suit::Joker, _) => "",
    }
}

/// Format a card as rank plus suit symbol, e.g. "A♠" (Unicode) or "As".
pub fn format_card(card: Card) -> String {
    match card.suit() {
        Some(suit) if card.is_valid() && !card.is_joker() => {
            // the engine's text form is rank label followed by one suit letter
            let text = card.to_string();
            let rank = &text[..text.len() - 1];
            format!("{}{}", rank, format_suit(suit))
        }
        _ => card.to_string(),
    }
}

/// Format a list of cards in bracket notation, "[]" if empty.
pub fn format_cards(cards: &[Card]) -> String {
    let formatted: Vec<String> = cards.iter().copied().map(format_card).collect();
    format!("[{}]", formatted.join(" "))
}

pub fn format_hand_type(hand_type: HandType) -> String {
    hand_type
        .id()
        .split('_')
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// One-line summary of a trick-game classification.
pub fn format_play(result: &HandResult) -> String {
    if !result.is_valid() {
        return "Invalid".to_string();
    }
    let mut line = format!(
        "{} (weight {}) {}",
        format_hand_type(result.hand_type),
        result.weight,
        format_cards(&result.main_cards)
    );
    if !result.kicker_cards.is_empty() {
        line.push_str(&format!(" + {}", format_cards(&result.kicker_cards)));
    }
    line
}

/// One-line summary of a best-five poker result.
pub fn format_texas(result: &TexasHandResult) -> String {
    format!("{} {}", result.description, format_cards(&result.cards))
}
