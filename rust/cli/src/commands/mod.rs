//! Command handlers, one module per subcommand.
//!
//! Every handler has the shape
//! `handle_COMMAND_command(..., out: &mut dyn Write, ...) -> Result<(), CliError>`
//! and writes only to the streams it is given.

mod cfg;
mod classify;
mod compare;
mod deal;
mod sim;
mod texas;

pub use cfg::handle_cfg_command;
pub use classify::handle_classify_command;
pub use compare::handle_compare_command;
pub use deal::handle_deal_command;
pub use sim::handle_sim_command;
pub use texas::handle_texas_command;

use tricktable_engine::weight::WeightRules;

use crate::config;
use crate::error::CliError;

/// Level and weight rules for a trick-game command. The configuration is
/// only consulted for what the flags leave open.
pub(crate) fn resolve_rules(
    level: Option<u8>,
    plain_level_cards: bool,
) -> Result<(u8, WeightRules), CliError> {
    if let (Some(level), true) = (level, plain_level_cards) {
        return Ok((
            level,
            WeightRules {
                level_cards_special: false,
            },
        ));
    }
    let cfg = config::load()?;
    let mut rules = cfg.weight_rules();
    if plain_level_cards {
        rules.level_cards_special = false;
    }
    Ok((level.unwrap_or(cfg.level), rules))
}

/// Explicit seed, else the configured one, else a fresh random seed.
pub(crate) fn resolve_seed(seed: Option<u64>) -> Result<u64, CliError> {
    if let Some(s) = seed {
        return Ok(s);
    }
    Ok(config::load()?.seed.unwrap_or_else(rand::random))
}

pub(crate) fn player_ids(players: usize) -> Vec<String> {
    (1..=players).map(|i| format!("P{}", i)).collect()
}
