use serde::{Deserialize, Serialize};

use crate::cards::Card;

pub type PlayerId = String;

/// One seat at the showdown table. Lives for the whole game and is only
/// mutated by the round driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    id: PlayerId,
    /// Private cards, in deal order
    hand: Vec<Card>,
    score: u32,
    /// Cards submitted in the current round (empty until the player plays)
    played: Vec<Card>,
}

impl PlayerState {
    pub fn new(id: impl Into<PlayerId>) -> Self {
        Self {
            id: id.into(),
            hand: Vec::new(),
            score: 0,
            played: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }
    pub fn score(&self) -> u32 {
        self.score
    }
    pub fn played(&self) -> &[Card] {
        &self.played
    }
    pub fn has_played(&self) -> bool {
        !self.played.is_empty()
    }

    pub fn give_card(&mut self, c: Card) {
        self.hand.push(c);
    }

    /// True when every card of `cards` can be matched against a distinct card
    /// of the hand.
    pub fn owns_all(&self, cards: &[Card]) -> bool {
        let mut pool = self.hand.clone();
        cards.iter().all(|c| match pool.iter().position(|h| h == c) {
            Some(i) => {
                pool.swap_remove(i);
                true
            }
            None => false,
        })
    }

    /// Moves `cards` from the hand to the played pile. Callers check
    /// ownership first; unmatched cards are ignored.
    pub fn play(&mut self, cards: &[Card]) {
        for c in cards {
            if let Some(i) = self.hand.iter().position(|h| h == c) {
                self.hand.remove(i);
                self.played.push(*c);
            }
        }
    }

    pub fn clear_played(&mut self) {
        self.played.clear();
    }

    pub fn add_score(&mut self, amount: u32) {
        self.score = self.score.saturating_add(amount);
    }
}
