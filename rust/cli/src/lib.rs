//! # Tricktable CLI Library
//!
//! Command-line front end over the tricktable engine: classify trick-game
//! plays, evaluate poker hands, deal showdown tables and simulate whole
//! showdown games with auto-players.
//!
//! ## Main Entry Point
//!
//! [`run`] parses the arguments, dispatches to a subcommand and returns the
//! process exit code. Output goes to the writers it is given, which keeps the
//! whole CLI testable in-process.
//!
//! ## Example Usage
//!
//! ```
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! let args = ["tricktable", "texas", "Ah", "Kh", "Qh", "Jh", "Th"];
//! let code = tricktable_cli::run(args, &mut out, &mut err);
//! assert_eq!(code, 0);
//! assert!(String::from_utf8(out).unwrap().contains("Royal Flush"));
//! ```
//!
//! ## Available Subcommands
//!
//! - `classify`: Classify a trick-game play at a level rank
//! - `texas`: Best five-card poker hand of 5 or more cards
//! - `compare`: Whether one trick-game play beats another
//! - `deal`: Deal a showdown table for inspection
//! - `sim`: Play a showdown game to the end with auto-players
//! - `cfg`: Display resolved configuration

use clap::Parser;
use std::io::Write;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod ui;
pub mod validation;

use cli::{Commands, TricktableCli};
use commands::{
    handle_cfg_command, handle_classify_command, handle_compare_command, handle_deal_command,
    handle_sim_command, handle_texas_command,
};

pub use error::CliError;

const COMMANDS: &[&str] = &["classify", "texas", "compare", "deal", "sim", "cfg"];

/// Main entry point for the CLI application.
///
/// # Returns
///
/// Exit code: [`exit_code::SUCCESS`] or [`exit_code::ERROR`]
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["tricktable", "deal", "--players", "3", "--seed", "42"];
/// let code = tricktable_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match TricktableCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return usage_error(e, out, err),
    };

    let result = match cli.cmd {
        Commands::Classify {
            level,
            plain_level_cards,
            cards,
        } => handle_classify_command(level, plain_level_cards, &cards, out),
        Commands::Texas { cards } => handle_texas_command(&cards, out),
        Commands::Compare {
            level,
            plain_level_cards,
            a,
            b,
        } => handle_compare_command(level, plain_level_cards, &a, &b, out),
        Commands::Deal { players, seed } => handle_deal_command(players, seed, out),
        Commands::Sim {
            players,
            seed,
            ai,
            output,
        } => handle_sim_command(players, seed, ai, output, out, err),
        Commands::Cfg => handle_cfg_command(out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

fn usage_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version should print to stdout and exit 0
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        return match write!(out, "{}", e) {
            Ok(()) => exit_code::SUCCESS,
            Err(_) => exit_code::ERROR,
        };
    }

    let mut report = || -> std::io::Result<()> {
        writeln!(err, "{}", e)?;
        writeln!(err)?;
        writeln!(err, "Usage: tricktable <command> [options]\n")?;
        writeln!(err, "Commands:")?;
        for c in COMMANDS {
            writeln!(err, "  {}", c)?;
        }
        writeln!(err, "\nFor full help, run: tricktable --help")
    };
    let _ = report();
    exit_code::ERROR
}
