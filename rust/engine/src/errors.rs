use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Deck exhausted while dealing")]
    DeckExhausted,
    #[error("Invalid player count: {count} (allowed {min}..={max})")]
    InvalidPlayerCount { count: usize, min: usize, max: usize },
    #[error("Duplicate player id: {0}")]
    DuplicatePlayer(String),
    #[error("Operation not allowed in state {actual} (expected {expected})")]
    InvalidState { expected: String, actual: String },
    #[error("Invalid game configuration: {0}")]
    InvalidConfig(String),
    #[error("No player holds a card to reveal")]
    NoReveal,
}

/// Precondition failures of the poker evaluator.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    #[error("Insufficient cards for a poker hand: got {got}, need at least 5")]
    InsufficientCards { got: usize },
    #[error("Card 0x{0:02x} cannot take part in a poker hand")]
    InvalidCard(u8),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CardParseError {
    #[error("Empty card text")]
    Empty,
    #[error("Unrecognized card: {0}")]
    Unrecognized(String),
    #[error("Not a valid card encoding: 0x{0:02x}")]
    InvalidEncoding(u8),
}

/// Reasons a Game 2 submission is refused; surfaced to callers only as `false`
/// by the driver but kept structured for logging and tests.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlayError {
    #[error("Plays are not being collected")]
    NotCollecting,
    #[error("Unknown player {0}")]
    UnknownPlayer(String),
    #[error("Player {0} already played this round")]
    AlreadyPlayed(String),
    #[error("Wrong card count: {got}, expected {expected}")]
    WrongCount { got: usize, expected: usize },
    #[error("Card {0} is not in the player's hand")]
    CardNotOwned(String),
}
