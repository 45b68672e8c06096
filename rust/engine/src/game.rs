use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::hand::TexasHandResult;
use crate::player::PlayerId;

/// Lifecycle of a showdown game. After `Refill` the driver loops back to
/// `DealerCall` until no round can be played.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum GameState {
    Setup,
    FirstDealerSelection,
    DealerCall,
    PlayerSelection,
    Showdown,
    Scoring,
    Refill,
    GameOver,
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameState::Setup => "SETUP",
            GameState::FirstDealerSelection => "FIRST_DEALER_SELECTION",
            GameState::DealerCall => "DEALER_CALL",
            GameState::PlayerSelection => "PLAYER_SELECTION",
            GameState::Showdown => "SHOWDOWN",
            GameState::Scoring => "SCORING",
            GameState::Refill => "REFILL",
            GameState::GameOver => "GAME_OVER",
        };
        f.write_str(s)
    }
}

/// One round, from the dealer's call to scoring. Archived into the driver's
/// history once scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    pub round_number: u32,
    pub dealer: PlayerId,
    /// Mandatory play size; 0 until the dealer calls
    pub cards_to_play: u8,
    pub plays: BTreeMap<PlayerId, Vec<Card>>,
    pub results: BTreeMap<PlayerId, TexasHandResult>,
    /// Points awarded this round, bonus included
    pub points: BTreeMap<PlayerId, u32>,
    pub winner: Option<PlayerId>,
    pub loser: Option<PlayerId>,
}

impl RoundState {
    pub fn new(round_number: u32, dealer: PlayerId) -> Self {
        Self {
            round_number,
            dealer,
            cards_to_play: 0,
            plays: BTreeMap::new(),
            results: BTreeMap::new(),
            points: BTreeMap::new(),
            winner: None,
            loser: None,
        }
    }

    pub fn has_played(&self, player: &str) -> bool {
        self.plays.contains_key(player)
    }
}
