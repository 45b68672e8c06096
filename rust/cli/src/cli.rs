//! Command-line surface, parsed with clap's derive API.

use clap::{Parser, Subcommand, ValueEnum};
use tricktable_ai::PlayerKind;

use crate::validation::parse_level;

#[derive(Parser, Debug)]
#[command(
    name = "tricktable",
    version,
    about = "Play classifier and showdown table tools for the tricktable card games"
)]
pub struct TricktableCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify a trick-game play
    Classify {
        /// Level rank (2-10, J, Q, K, A); defaults to the configured level
        #[arg(long, value_parser = parse_level)]
        level: Option<u8>,
        /// Weigh non-heart level cards at their ordinary rank
        #[arg(long)]
        plain_level_cards: bool,
        /// Cards such as `Ah 10s BJ`, one per argument or quoted together
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
    },
    /// Evaluate the best five-card poker hand
    Texas {
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
    },
    /// Check whether trick-game play A beats play B
    Compare {
        #[arg(long, value_parser = parse_level)]
        level: Option<u8>,
        #[arg(long)]
        plain_level_cards: bool,
        #[arg(long)]
        a: String,
        #[arg(long)]
        b: String,
    },
    /// Deal a showdown table and show every hand
    Deal {
        #[arg(long, default_value_t = 4)]
        players: usize,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Play a whole showdown game with auto-players
    Sim {
        #[arg(long, default_value_t = 4)]
        players: usize,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, value_enum, default_value_t = AiKind::Baseline)]
        ai: AiKind,
        /// Archive scored rounds as JSON lines
        #[arg(long)]
        output: Option<String>,
    },
    /// Show resolved configuration and where each value came from
    Cfg,
}

/// Auto-play policy used by `sim`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum AiKind {
    Baseline,
    Random,
}

impl From<AiKind> for PlayerKind {
    fn from(kind: AiKind) -> Self {
        match kind {
            AiKind::Baseline => PlayerKind::Baseline,
            AiKind::Random => PlayerKind::Random,
        }
    }
}
