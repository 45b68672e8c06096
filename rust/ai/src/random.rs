use std::sync::Mutex;

use rand::SeedableRng;
use rand::seq::index::sample;
use rand_chacha::ChaCha20Rng;
use tricktable_engine::cards::Card;

use crate::{AutoPlayer, PlayView};

/// Picks a uniformly random `count`-subset of the hand. Two players built
/// from the same seed make the same choices for the same views.
#[derive(Debug)]
pub struct RandomPlayer {
    rng: Mutex<ChaCha20Rng>,
}

impl RandomPlayer {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(ChaCha20Rng::seed_from_u64(seed)),
        }
    }
}

impl AutoPlayer for RandomPlayer {
    fn choose_play(&self, view: &PlayView) -> Vec<Card> {
        let amount = view.count.min(view.hand.len());
        // a poisoned lock only means another thread panicked mid-draw
        let mut rng = match self.rng.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let mut picked = sample(&mut *rng, view.hand.len(), amount).into_vec();
        picked.sort_unstable();
        picked.into_iter().map(|i| view.hand[i]).collect()
    }

    fn name(&self) -> &str {
        "Random"
    }
}
