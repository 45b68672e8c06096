//! Simulation command: one showdown game played start to finish by
//! auto-players.
//!
//! Each round the dealer calls the largest legal play size (capped at the
//! rules' maximum), every seat submits the choice of its policy, and the
//! driver scores and refills until the game is over.
//!
//! # Examples
//!
//! ```no_run
//! use std::io;
//! let args = ["tricktable", "sim", "--players", "4", "--seed", "42", "--output", "data/rounds.jsonl"];
//! let code = tricktable_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```

use std::io::Write;

use tracing::{debug, info};
use tricktable_ai::{create_player, AutoPlayer, PlayView, PlayerKind};
use tricktable_engine::config::GameConfig;
use tricktable_engine::engine::RoundDriver;
use tricktable_engine::game::GameState;
use tricktable_engine::logger::{RoundLogger, RoundRecord};
use tricktable_engine::rules::MAX_CALL;

use super::{player_ids, resolve_seed};
use crate::cli::AiKind;
use crate::error::CliError;
use crate::ui;
use crate::validation::validate_player_count;

/// Guard against a driver that never reaches game over.
const MAX_ROUNDS: usize = 1_000;

/// Handle the sim command.
///
/// # Arguments
///
/// * `players` - Seats at the table (2..=9)
/// * `seed` - Deck seed; falls back to configuration, then to a random seed
/// * `ai` - Policy used by every seat; seat `i` of a random table is seeded
///   with `seed + i`
/// * `output` - Optional JSONL file receiving one record per scored round
pub fn handle_sim_command(
    players: usize,
    seed: Option<u64>,
    ai: AiKind,
    output: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let config = GameConfig::default();
    validate_player_count(players, config.max_players).map_err(CliError::InvalidInput)?;
    let seed = resolve_seed(seed)?;

    let kind = PlayerKind::from(ai);
    let ids = player_ids(players);
    let bots: Vec<Box<dyn AutoPlayer>> = (0..players)
        .map(|i| create_player(kind, seed.wrapping_add(i as u64)))
        .collect();
    let mut logger = match output.as_deref() {
        Some(path) => {
            if std::path::Path::new(path).exists() {
                ui::display_warning(err, &format!("overwriting {}", path))?;
            }
            Some(RoundLogger::create(path)?)
        }
        None => None,
    };

    let mut driver = RoundDriver::new(GameConfig::with_seed(seed));
    driver.init_game(&ids)?;
    driver.deal_cards()?;
    let first = driver.select_first_dealer()?;
    info!(players, seed, ai = %kind, "simulation started");
    writeln!(out, "Seed: {}", seed)?;
    writeln!(out, "First dealer: {}", first)?;

    let mut written = 0usize;
    while !driver.is_game_over() {
        if driver.history().len() >= MAX_ROUNDS {
            return Err(CliError::Engine(format!(
                "game did not finish within {} rounds",
                MAX_ROUNDS
            )));
        }
        let smallest = driver
            .players()
            .iter()
            .map(|p| p.hand().len())
            .min()
            .unwrap_or(0);
        let call = smallest.min(MAX_CALL as usize) as u8;
        if !driver.dealer_call(call) {
            return Err(CliError::Engine(format!("dealer call of {} rejected", call)));
        }

        for (id, bot) in ids.iter().zip(&bots) {
            let choice = match PlayView::for_player(&driver, id) {
                Some(view) => bot.choose_play(&view),
                None => Vec::new(),
            };
            if !driver.play_cards(&choice, id) {
                return Err(CliError::Engine(format!(
                    "{} chose an illegal play for {}",
                    bot.name(),
                    id
                )));
            }
        }
        if driver.state() != GameState::Showdown {
            return Err(CliError::Engine(format!(
                "expected showdown, found {}",
                driver.state()
            )));
        }

        let Some(round) = driver.current_round() else {
            return Err(CliError::Engine("showdown without a round".into()));
        };
        let winner = round.winner.clone().unwrap_or_default();
        let loser = round.loser.clone().unwrap_or_default();
        let category = round
            .results
            .get(&winner)
            .map(|r| r.hand_type.label())
            .unwrap_or("-");
        writeln!(
            out,
            "Round {}: dealer {} calls {}; winner {} ({}), loser {}",
            round.round_number, round.dealer, call, winner, category, loser
        )?;
        if let Some(log) = logger.as_mut() {
            let record = RoundRecord::from_round(
                log.next_id(),
                Some(seed),
                driver.community_cards(),
                round,
            );
            log.write(&record)?;
            written += 1;
        }
        debug!(round = round.round_number, "round archived");

        if !driver.refill_hands() {
            return Err(CliError::Engine("refill rejected".into()));
        }
    }

    writeln!(out, "Game over after {} rounds", driver.history().len())?;
    let scores: Vec<String> = driver
        .players()
        .iter()
        .map(|p| format!("{}={}", p.id(), p.score()))
        .collect();
    writeln!(out, "Scores: {}", scores.join(" "))?;
    if let Some(path) = output {
        writeln!(out, "Wrote {} rounds to {}", written, path)?;
    }
    Ok(())
}
