//! # tricktable-engine: Card Game Rules Core
//!
//! Pure rules for two card games sharing one card encoding: a climbing trick
//! game (bombs, runs, airplanes, wild level cards, joker bombs) and a
//! community-card showdown game scored with standard poker hands.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card codec (`suit | rank` in one byte), parsing and decks
//! - [`weight`] - Level-rank wild cards and single-card weights
//! - [`pattern`] - Trick-game play classification and comparison
//! - [`hand`] - Best-five poker evaluation with strict tie-breaks
//! - [`deck`] - Deterministic deck shuffling with ChaCha20 RNG
//! - [`engine`] - Showdown game round/scoring state machine
//! - [`game`] - Game lifecycle states and per-round records
//! - [`player`] - Player hands, plays and scores
//! - [`rules`] - Dealer-call and play validation, score table
//! - [`config`] - Table parameters and rule switches
//! - [`logger`] - JSONL round history
//! - [`errors`] - Error types
//!
//! ## Quick Start
//!
//! ```rust
//! use tricktable_engine::cards::parse_cards;
//! use tricktable_engine::pattern::{can_beat, evaluate, HandType};
//!
//! let level = 10;
//! let bomb = evaluate(&parse_cards("Ks Kh Kd Kc Ks").unwrap(), level);
//! let jokers = evaluate(&parse_cards("BJ RJ").unwrap(), level);
//! assert_eq!(bomb.hand_type, HandType::Bomb);
//! assert_eq!(jokers.hand_type, HandType::JokerBomb);
//! assert!(can_beat(&bomb, &jokers));
//! ```
//!
//! ```rust
//! use tricktable_engine::cards::parse_cards;
//! use tricktable_engine::hand::{evaluate_texas, TexasHandType};
//!
//! let best = evaluate_texas(&parse_cards("Ah 2h 3h 4h 5h Kd").unwrap()).unwrap();
//! assert_eq!(best.hand_type, TexasHandType::StraightFlush);
//! assert_eq!(best.rank_values[0], 5);
//! ```

pub mod cards;
pub mod config;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod hand;
pub mod logger;
pub mod pattern;
pub mod player;
pub mod rules;
pub mod weight;
