//! Seeded card source for the showdown table.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};

/// A fixed card composition dealt from the top. Shuffles and resets always
/// restore the full composition, duplicates included.
#[derive(Debug)]
pub struct Deck {
    composition: Vec<Card>,
    order: Vec<Card>,
    next: usize,
    rng: ChaCha20Rng,
}

impl Deck {
    /// The 52-card showdown deck in codec order until shuffled.
    pub fn new_with_seed(seed: u64) -> Self {
        Self::from_cards(full_deck(), seed)
    }

    fn from_cards(composition: Vec<Card>, seed: u64) -> Self {
        Self {
            order: composition.clone(),
            composition,
            next: 0,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    pub fn shuffle(&mut self) {
        self.reset();
        self.order.shuffle(&mut self.rng);
    }

    pub fn reset(&mut self) {
        self.order.clone_from(&self.composition);
        self.next = 0;
    }

    pub fn deal_card(&mut self) -> Option<Card> {
        let card = *self.order.get(self.next)?;
        self.next += 1;
        Some(card)
    }

    /// Takes `n` cards, or nothing at all if fewer remain.
    pub fn draw(&mut self, n: usize) -> Option<Vec<Card>> {
        if n > self.remaining() {
            return None;
        }
        let cards = self.order[self.next..self.next + n].to_vec();
        self.next += n;
        Some(cards)
    }

    pub fn remaining(&self) -> usize {
        self.order.len() - self.next
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_is_all_or_nothing() {
        let mut deck = Deck::new_with_seed(1);
        assert_eq!(deck.draw(50).map(|c| c.len()), Some(50));
        assert!(deck.draw(3).is_none());
        assert_eq!(deck.remaining(), 2);
        assert_eq!(deck.draw(2).map(|c| c.len()), Some(2));
        assert!(deck.is_empty());
    }
}
