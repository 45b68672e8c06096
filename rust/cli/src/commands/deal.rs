//! Deal command: sets up a showdown table and shows every hand.
//!
//! Output is deterministic for a given seed and player count.

use std::io::Write;

use tricktable_engine::config::GameConfig;
use tricktable_engine::engine::RoundDriver;

use super::{player_ids, resolve_seed};
use crate::error::CliError;
use crate::formatters::{format_card, format_cards};
use crate::validation::validate_player_count;

/// Deals community and private cards, then runs first-dealer selection.
///
/// # Examples
///
/// ```ignore
/// // Internal command handler - not part of public API
/// let mut out = Vec::new();
/// handle_deal_command(3, Some(42), &mut out).unwrap();
/// ```
pub fn handle_deal_command(
    players: usize,
    seed: Option<u64>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    validate_player_count(players, GameConfig::default().max_players)
        .map_err(CliError::InvalidInput)?;
    let seed = resolve_seed(seed)?;

    let mut driver = RoundDriver::new(GameConfig::with_seed(seed));
    let ids = player_ids(players);
    driver.init_game(&ids)?;
    driver.deal_cards()?;
    let dealer = driver.select_first_dealer()?;

    writeln!(out, "Seed: {}", seed)?;
    writeln!(out, "Community: {}", format_cards(driver.community_cards()))?;
    for p in driver.players() {
        writeln!(out, "{}: {}", p.id(), format_cards(p.hand()))?;
    }
    let reveals: Vec<String> = driver
        .first_dealer_reveals()
        .iter()
        .map(|(id, c)| format!("{}={}", id, format_card(*c)))
        .collect();
    writeln!(out, "Reveals: {}", reveals.join(" "))?;
    writeln!(out, "Dealer: {}", dealer)?;
    writeln!(out, "Deck remaining: {}", driver.deck_remaining())?;
    Ok(())
}
