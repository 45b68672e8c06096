//! Parsing and validation of command-line values.
//!
//! Card lists are accepted either as one argument per card or as quoted,
//! space/comma separated lists; both forms can be mixed.

use tricktable_engine::cards::{parse_cards, Card, RANK_ACE, RANK_TWO};
use tricktable_engine::errors::CardParseError;

/// Parses a level rank given as a rank label (`2`..`9`, `T`/`10`, `J`, `Q`,
/// `K`, `A`) into its internal rank value.
///
/// # Example
///
/// ```rust
/// # use tricktable_cli::validation::parse_level;
/// assert_eq!(parse_level("2"), Ok(15));
/// assert_eq!(parse_level("a"), Ok(14));
/// assert_eq!(parse_level("10"), Ok(10));
/// assert!(parse_level("1").is_err());
/// ```
pub fn parse_level(s: &str) -> Result<u8, String> {
    let rank = match s.trim().to_ascii_uppercase().as_str() {
        "2" => RANK_TWO,
        "T" | "10" => 10,
        "J" => 11,
        "Q" => 12,
        "K" => 13,
        "A" => RANK_ACE,
        t => match t.parse::<u8>() {
            Ok(r) if (3..=9).contains(&r) => r,
            _ => return Err(format!("invalid level rank '{}': expected 2-10, J, Q, K or A", s)),
        },
    };
    Ok(rank)
}

/// Label for an internal level rank, the inverse of [`parse_level`].
pub fn level_label(rank: u8) -> String {
    match rank {
        10 => "10".to_string(),
        11 => "J".to_string(),
        12 => "Q".to_string(),
        13 => "K".to_string(),
        RANK_ACE => "A".to_string(),
        RANK_TWO => "2".to_string(),
        r => r.to_string(),
    }
}

pub fn parse_card_args<S: AsRef<str>>(args: &[S]) -> Result<Vec<Card>, CardParseError> {
    let mut cards = Vec::new();
    for a in args {
        cards.extend(parse_cards(a.as_ref())?);
    }
    if cards.is_empty() {
        return Err(CardParseError::Empty);
    }
    Ok(cards)
}

pub fn validate_player_count(players: usize, max: usize) -> Result<(), String> {
    if players < 2 || players > max {
        return Err(format!("players must be between 2 and {}", max));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_round_trip() {
        for label in ["2", "3", "9", "10", "J", "Q", "K", "A"] {
            let rank = parse_level(label).unwrap();
            assert_eq!(level_label(rank), label);
        }
        assert!(parse_level("T").is_ok());
        assert!(parse_level("11").is_err());
        assert!(parse_level("").is_err());
    }

    #[test]
    fn card_args_mix_forms() {
        let cards = parse_card_args(&["Ah", "Kd,Qs", "BJ 0x3e"]).unwrap();
        assert_eq!(cards.len(), 5);
        assert_eq!(cards[4].raw(), 0x3e);
        assert_eq!(parse_card_args::<&str>(&[]), Err(CardParseError::Empty));
        assert_eq!(parse_card_args(&[" , "]), Err(CardParseError::Empty));
        assert!(parse_card_args(&["Ah", "Xx"]).is_err());
    }

    #[test]
    fn player_bounds() {
        assert!(validate_player_count(2, 9).is_ok());
        assert!(validate_player_count(9, 9).is_ok());
        assert!(validate_player_count(1, 9).is_err());
        assert!(validate_player_count(10, 9).is_err());
    }
}
