//! `texas`: best-five poker evaluation.

use std::io::Write;

use tricktable_engine::hand::evaluate_texas;

use crate::error::CliError;
use crate::formatters::format_cards;
use crate::validation::parse_card_args;

pub fn handle_texas_command(cards: &[String], out: &mut dyn Write) -> Result<(), CliError> {
    let cards = parse_card_args(cards)?;
    let best = evaluate_texas(&cards)?;

    let ranks: Vec<String> = best.rank_values.iter().map(|r| r.to_string()).collect();
    writeln!(out, "Category: {}", best.hand_type.label())?;
    writeln!(out, "Description: {}", best.description)?;
    writeln!(out, "Best five: {}", format_cards(&best.cards))?;
    writeln!(out, "Rank values: {}", ranks.join(" "))?;
    Ok(())
}
