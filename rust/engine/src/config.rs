//! Table parameters for the showdown game and rule switches for the trick
//! game. Both deserialize from partial documents, missing keys taking the
//! defaults below.

use serde::{Deserialize, Serialize};

pub use crate::weight::WeightRules;

pub const DEFAULT_SEED: u64 = 0xA1A2_A3A4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Shuffle seed; `None` falls back to [`DEFAULT_SEED`]
    pub seed: Option<u64>,
    pub community_cards: usize,
    pub hand_size: usize,
    pub winner_bonus: u32,
    pub min_players: usize,
    pub max_players: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            community_cards: 4,
            hand_size: 5,
            winner_bonus: 1,
            min_players: 2,
            max_players: 9,
        }
    }
}

impl GameConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    pub fn seed_or_default(&self) -> u64 {
        self.seed.unwrap_or(DEFAULT_SEED)
    }
}
