//! `classify`: trick-game classification of one play.

use std::io::Write;

use tricktable_engine::pattern::evaluate_with_rules;

use super::resolve_rules;
use crate::error::CliError;
use crate::formatters::{format_cards, format_hand_type};
use crate::validation::{level_label, parse_card_args};

/// Classifies `cards` at the resolved level and prints type, weight, main and
/// kicker cards. An invalid shape is a normal answer, not an error.
pub fn handle_classify_command(
    level: Option<u8>,
    plain_level_cards: bool,
    cards: &[String],
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let (level, rules) = resolve_rules(level, plain_level_cards)?;
    let cards = parse_card_args(cards)?;
    let result = evaluate_with_rules(&cards, level, rules);

    writeln!(out, "Level: {}", level_label(level))?;
    writeln!(out, "Type: {}", format_hand_type(result.hand_type))?;
    writeln!(out, "Weight: {}", result.weight)?;
    if result.is_valid() {
        writeln!(out, "Main: {}", format_cards(&result.main_cards))?;
        writeln!(out, "Kickers: {}", format_cards(&result.kicker_cards))?;
    }
    Ok(())
}
