use crate::cards::Card;
use crate::errors::PlayError;
use crate::game::{GameState, RoundState};
use crate::hand::TexasHandType;
use crate::player::PlayerState;

/// Smallest and largest play size the dealer may call.
pub const MIN_CALL: u8 = 1;
pub const MAX_CALL: u8 = 3;

/// Base points per showdown category, indexed by `TexasHandType as usize`.
pub const BASE_SCORES: [u32; 10] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];

pub fn base_score(hand_type: TexasHandType) -> u32 {
    BASE_SCORES[hand_type as usize]
}

/// Checks a dealer call against the bounds and the smallest hand at the table.
///
/// # Examples
///
/// ```
/// use tricktable_engine::rules::validate_call;
///
/// assert!(validate_call(2, 5));
/// assert!(!validate_call(0, 5));
/// assert!(!validate_call(3, 2));
/// ```
pub fn validate_call(count: u8, smallest_hand: usize) -> bool {
    (MIN_CALL..=MAX_CALL).contains(&count) && count as usize <= smallest_hand
}

/// Validates one player's submission for the current round.
///
/// # Errors
///
/// - [`PlayError::NotCollecting`] - the game is not in `PlayerSelection`
/// - [`PlayError::UnknownPlayer`] - no seat with that id
/// - [`PlayError::AlreadyPlayed`] - the player already submitted this round
/// - [`PlayError::WrongCount`] - the submission size differs from the call
/// - [`PlayError::CardNotOwned`] - a card (or a duplicate of it) is not in hand
///
/// # Examples
///
/// ```
/// use tricktable_engine::cards::{Card, Suit};
/// use tricktable_engine::errors::PlayError;
/// use tricktable_engine::game::{GameState, RoundState};
/// use tricktable_engine::player::PlayerState;
/// use tricktable_engine::rules::validate_play;
///
/// let mut p = PlayerState::new("p1");
/// p.give_card(Card::new(Suit::Spades, 14));
/// let mut round = RoundState::new(1, "p1".to_string());
/// round.cards_to_play = 1;
///
/// let ok = validate_play(GameState::PlayerSelection, &round, Some(&p), "p1", &[Card::new(Suit::Spades, 14)]);
/// assert!(ok.is_ok());
///
/// let wrong = validate_play(GameState::PlayerSelection, &round, Some(&p), "p1", &[Card::new(Suit::Hearts, 14)]);
/// assert!(matches!(wrong, Err(PlayError::CardNotOwned(_))));
/// ```
pub fn validate_play(
    state: GameState,
    round: &RoundState,
    player: Option<&PlayerState>,
    player_id: &str,
    cards: &[Card],
) -> Result<(), PlayError> {
    if state != GameState::PlayerSelection {
        return Err(PlayError::NotCollecting);
    }
    let player = player.ok_or_else(|| PlayError::UnknownPlayer(player_id.to_string()))?;
    if round.has_played(player_id) || player.has_played() {
        return Err(PlayError::AlreadyPlayed(player_id.to_string()));
    }
    let expected = round.cards_to_play as usize;
    if cards.len() != expected {
        return Err(PlayError::WrongCount {
            got: cards.len(),
            expected,
        });
    }
    if !player.owns_all(cards) {
        let missing = cards
            .iter()
            .find(|c| !player.hand().contains(c))
            .copied()
            .unwrap_or(cards[0]);
        return Err(PlayError::CardNotOwned(missing.to_string()));
    }
    Ok(())
}
