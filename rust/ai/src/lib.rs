//! # tricktable-ai: Auto-play for the Showdown Game
//!
//! Policies that pick a submission on behalf of a player, used for
//! simulations and for seats whose owner is away.
//!
//! ## Core Components
//!
//! - [`AutoPlayer`] - Trait every policy implements
//! - [`PlayView`] - What a policy is allowed to see
//! - [`baseline`] - Strongest-subset policy
//! - [`random`] - Seeded random policy
//! - [`create_player`] - Factory keyed by [`PlayerKind`]
//!
//! ## Quick Start
//!
//! ```rust
//! use tricktable_ai::{create_player, PlayView, PlayerKind};
//! use tricktable_engine::config::GameConfig;
//! use tricktable_engine::engine::RoundDriver;
//!
//! let mut driver = RoundDriver::new(GameConfig::with_seed(42));
//! driver.init_game(&["east", "west"]).unwrap();
//! driver.deal_cards().unwrap();
//! driver.select_first_dealer().unwrap();
//! assert!(driver.dealer_call(2));
//!
//! let bot = create_player(PlayerKind::Baseline, 0);
//! let view = PlayView::for_player(&driver, "east").unwrap();
//! let cards = bot.choose_play(&view);
//! assert!(driver.play_cards(&cards, "east"));
//! ```

use std::fmt;
use std::str::FromStr;

use tricktable_engine::cards::Card;
use tricktable_engine::engine::RoundDriver;

pub mod baseline;
pub mod random;

/// The part of the table a player can see when choosing a play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayView<'a> {
    pub hand: &'a [Card],
    pub community: &'a [Card],
    /// Number of cards the dealer called for
    pub count: usize,
}

impl<'a> PlayView<'a> {
    /// Builds the view of `player_id`, or `None` if the player is unknown or
    /// the dealer has not called yet.
    pub fn for_player(driver: &'a RoundDriver, player_id: &str) -> Option<PlayView<'a>> {
        let count = driver.cards_to_play() as usize;
        if count == 0 {
            return None;
        }
        let player = driver.player(player_id)?;
        Some(PlayView {
            hand: player.hand(),
            community: driver.community_cards(),
            count,
        })
    }
}

/// A policy choosing exactly `view.count` cards out of `view.hand`.
///
/// Implementations never return cards outside the hand; when the hand is
/// smaller than the call they return what they can and the driver rejects it.
///
/// # Example Implementation
///
/// ```rust
/// use tricktable_ai::{AutoPlayer, PlayView};
/// use tricktable_engine::cards::Card;
///
/// struct FirstCards;
///
/// impl AutoPlayer for FirstCards {
///     fn choose_play(&self, view: &PlayView) -> Vec<Card> {
///         view.hand.iter().take(view.count).copied().collect()
///     }
///
///     fn name(&self) -> &str {
///         "FirstCards"
///     }
/// }
/// ```
pub trait AutoPlayer: Send + Sync {
    fn choose_play(&self, view: &PlayView) -> Vec<Card>;

    fn name(&self) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    Baseline,
    Random,
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerKind::Baseline => f.write_str("baseline"),
            PlayerKind::Random => f.write_str("random"),
        }
    }
}

impl FromStr for PlayerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "baseline" => Ok(PlayerKind::Baseline),
            "random" => Ok(PlayerKind::Random),
            other => Err(format!("unknown player kind: {}", other)),
        }
    }
}

/// Creates a policy. `seed` only matters for [`PlayerKind::Random`].
///
/// # Example
///
/// ```rust
/// use tricktable_ai::{create_player, PlayerKind};
///
/// let bot = create_player(PlayerKind::Baseline, 0);
/// assert_eq!(bot.name(), "Baseline");
/// ```
pub fn create_player(kind: PlayerKind, seed: u64) -> Box<dyn AutoPlayer> {
    match kind {
        PlayerKind::Baseline => Box::new(baseline::BaselinePlayer::new()),
        PlayerKind::Random => Box::new(random::RandomPlayer::new(seed)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_parses_case_insensitively() {
        assert_eq!("Baseline".parse::<PlayerKind>(), Ok(PlayerKind::Baseline));
        assert_eq!("random".parse::<PlayerKind>(), Ok(PlayerKind::Random));
        assert!("greedy".parse::<PlayerKind>().is_err());
        assert_eq!(PlayerKind::Random.to_string(), "random");
    }

    #[test]
    fn factory_names() {
        assert_eq!(create_player(PlayerKind::Baseline, 1).name(), "Baseline");
        assert_eq!(create_player(PlayerKind::Random, 1).name(), "Random");
    }

    #[test]
    fn no_view_before_the_call() {
        let mut d = RoundDriver::new(tricktable_engine::config::GameConfig::with_seed(3));
        d.init_game(&["a", "b"]).unwrap();
        d.deal_cards().unwrap();
        d.select_first_dealer().unwrap();
        assert!(PlayView::for_player(&d, "a").is_none());
        assert!(d.dealer_call(1));
        assert!(PlayView::for_player(&d, "zz").is_none());
        let view = PlayView::for_player(&d, "a").unwrap();
        assert_eq!(view.count, 1);
        assert_eq!(view.hand.len(), 5);
        assert_eq!(view.community.len(), 4);
    }
}
