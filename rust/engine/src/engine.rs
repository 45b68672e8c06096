use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::cards::Card;
use crate::config::GameConfig;
use crate::deck::Deck;
use crate::errors::{GameError, PlayError};
use crate::game::{GameState, RoundState};
use crate::hand::{compare_reveal, compare_texas, evaluate_texas, TexasHandResult, HAND_SIZE};
use crate::player::{PlayerId, PlayerState};
use crate::rules::{base_score, validate_call, validate_play, MIN_CALL};

/// Drives one showdown game from setup to game over.
///
/// Not meant for concurrent mutation: callers serialize `dealer_call`,
/// `play_cards` and `refill_hands` per instance.
///
/// # Examples
///
/// ```
/// use tricktable_engine::config::GameConfig;
/// use tricktable_engine::engine::RoundDriver;
/// use tricktable_engine::game::GameState;
///
/// let mut driver = RoundDriver::new(GameConfig::with_seed(42));
/// driver.init_game(&["north", "south"]).expect("two players");
/// driver.deal_cards().expect("fresh deck");
/// assert_eq!(driver.community_cards().len(), 4);
///
/// let dealer = driver.select_first_dealer().expect("dealer");
/// assert_eq!(driver.state(), GameState::DealerCall);
/// assert!(driver.dealer() == Some(dealer.as_str()));
///
/// assert!(driver.dealer_call(2));
/// for id in ["north", "south"] {
///     let cards = driver.player(id).unwrap().hand()[..2].to_vec();
///     assert!(driver.play_cards(&cards, id));
/// }
/// assert_eq!(driver.state(), GameState::Showdown);
/// assert!(driver.current_round().unwrap().winner.is_some());
/// ```
#[derive(Debug)]
pub struct RoundDriver {
    config: GameConfig,
    deck: Deck,
    state: GameState,
    players: Vec<PlayerState>,
    community: Vec<Card>,
    /// Seat index of the current dealer
    dealer: Option<usize>,
    round: Option<RoundState>,
    history: Vec<RoundState>,
    reveals: Vec<(PlayerId, Card)>,
    games_started: u64,
}

/// Serializable view of the table for presentation and network layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub state: GameState,
    pub dealer: Option<PlayerId>,
    pub community: Vec<Card>,
    pub round: Option<RoundState>,
    pub scores: BTreeMap<PlayerId, u32>,
    pub hand_sizes: BTreeMap<PlayerId, usize>,
    pub deck_remaining: usize,
}

impl RoundDriver {
    pub fn new(config: GameConfig) -> Self {
        let deck = Deck::new_with_seed(config.seed_or_default());
        Self {
            config,
            deck,
            state: GameState::Setup,
            players: Vec::new(),
            community: Vec::new(),
            dealer: None,
            round: None,
            history: Vec::new(),
            reveals: Vec::new(),
            games_started: 0,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Resets the table for a new game with a freshly shuffled deck.
    pub fn init_game<S: AsRef<str>>(&mut self, player_ids: &[S]) -> Result<(), GameError> {
        let (min, max) = (self.config.min_players, self.config.max_players);
        if !(min..=max).contains(&player_ids.len()) {
            return Err(GameError::InvalidPlayerCount {
                count: player_ids.len(),
                min,
                max,
            });
        }
        self.check_config()?;
        let mut seen = HashSet::new();
        for id in player_ids {
            if !seen.insert(id.as_ref()) {
                return Err(GameError::DuplicatePlayer(id.as_ref().to_string()));
            }
        }

        // each game in the same driver gets its own, still reproducible, order
        let seed = self.config.seed_or_default().wrapping_add(self.games_started);
        self.games_started += 1;
        self.deck = Deck::new_with_seed(seed);
        self.deck.shuffle();

        self.players = player_ids.iter().map(|id| PlayerState::new(id.as_ref())).collect();
        self.community.clear();
        self.dealer = None;
        self.round = None;
        self.history.clear();
        self.reveals.clear();
        self.set_state(GameState::Setup);
        info!(players = self.players.len(), seed, "game initialized");
        Ok(())
    }

    /// Deals the community cards, then private hands round-robin.
    pub fn deal_cards(&mut self) -> Result<(), GameError> {
        self.expect_state(GameState::Setup)?;
        if self.players.is_empty() {
            return Err(GameError::InvalidPlayerCount {
                count: 0,
                min: self.config.min_players,
                max: self.config.max_players,
            });
        }
        self.community = self
            .deck
            .draw(self.config.community_cards)
            .ok_or(GameError::DeckExhausted)?;
        for _ in 0..self.config.hand_size {
            for p in &mut self.players {
                let c = self.deck.deal_card().ok_or(GameError::DeckExhausted)?;
                p.give_card(c);
            }
        }
        self.set_state(GameState::FirstDealerSelection);
        Ok(())
    }

    /// Every player reveals the first card of their hand; the highest card
    /// (rank, then suit) deals round one.
    pub fn select_first_dealer(&mut self) -> Result<PlayerId, GameError> {
        self.expect_state(GameState::FirstDealerSelection)?;
        self.reveals = self
            .players
            .iter()
            .filter_map(|p| p.hand().first().map(|&c| (p.id().to_string(), c)))
            .collect();
        let seat = self
            .reveals
            .iter()
            .max_by(|a, b| compare_reveal(a.1, b.1))
            .and_then(|(id, _)| self.seat_of(id))
            .ok_or(GameError::NoReveal)?;
        let dealer_id = self.players[seat].id().to_string();
        info!(dealer = %dealer_id, "first dealer selected");
        self.start_round(seat);
        Ok(dealer_id)
    }

    /// The dealer fixes this round's play size. Returns false, changing
    /// nothing, outside `DealerCall` or for an unplayable count.
    pub fn dealer_call(&mut self, count: u8) -> bool {
        if self.state != GameState::DealerCall {
            debug!(state = %self.state, count, "dealer call rejected: wrong state");
            return false;
        }
        let smallest = self.players.iter().map(|p| p.hand().len()).min().unwrap_or(0);
        if !validate_call(count, smallest) {
            debug!(count, smallest, "dealer call rejected");
            return false;
        }
        let Some(round) = self.round.as_mut() else {
            return false;
        };
        round.cards_to_play = count;
        debug!(round = round.round_number, count, "dealer called");
        self.set_state(GameState::PlayerSelection);
        true
    }

    pub fn is_valid_play(&self, cards: &[Card], player_id: &str) -> bool {
        self.check_play(cards, player_id).is_ok()
    }

    /// Like [`is_valid_play`](Self::is_valid_play) but reports why.
    pub fn check_play(&self, cards: &[Card], player_id: &str) -> Result<(), PlayError> {
        let round = self.round.as_ref().ok_or(PlayError::NotCollecting)?;
        validate_play(self.state, round, self.player(player_id), player_id, cards)
    }

    /// Commits a submission. The last submission of the round moves the game
    /// to `Showdown` and resolves it.
    pub fn play_cards(&mut self, cards: &[Card], player_id: &str) -> bool {
        if let Err(e) = self.check_play(cards, player_id) {
            debug!(player = player_id, error = %e, "play rejected");
            return false;
        }
        let Some(seat) = self.seat_of(player_id) else {
            return false;
        };
        let Some(round) = self.round.as_mut() else {
            return false;
        };
        self.players[seat].play(cards);
        round.plays.insert(player_id.to_string(), cards.to_vec());
        debug!(player = player_id, cards = cards.len(), "play accepted");

        if round.plays.len() == self.players.len() {
            self.set_state(GameState::Showdown);
            self.resolve_showdown();
        }
        true
    }

    fn resolve_showdown(&mut self) {
        let Some(round) = self.round.as_mut() else {
            return;
        };
        let mut results: Vec<(usize, TexasHandResult)> = Vec::with_capacity(self.players.len());
        for (seat, p) in self.players.iter().enumerate() {
            let mut combined = p.played().to_vec();
            combined.extend_from_slice(&self.community);
            match evaluate_texas(&combined) {
                Ok(r) => results.push((seat, r)),
                Err(e) => warn!(player = p.id(), error = %e, "showdown hand not evaluated"),
            }
        }

        let winner = results
            .iter()
            .max_by(|a, b| compare_texas(&a.1, &b.1))
            .map(|(seat, _)| *seat);
        let loser = results
            .iter()
            .min_by(|a, b| compare_texas(&a.1, &b.1))
            .map(|(seat, _)| *seat);

        for (seat, result) in results {
            let mut points = base_score(result.hand_type);
            if Some(seat) == winner {
                points += self.config.winner_bonus;
            }
            let p = &mut self.players[seat];
            p.add_score(points);
            round.points.insert(p.id().to_string(), points);
            round.results.insert(p.id().to_string(), result);
        }
        round.winner = winner.map(|s| self.players[s].id().to_string());
        round.loser = loser.map(|s| self.players[s].id().to_string());
        info!(
            round = round.round_number,
            winner = round.winner.as_deref().unwrap_or("-"),
            loser = round.loser.as_deref().unwrap_or("-"),
            "showdown resolved"
        );
    }

    /// Scores and archives the finished round, refills hands from the dealer's
    /// seat clockwise, then opens the next round (loser deals) or ends the game.
    pub fn refill_hands(&mut self) -> bool {
        if self.state != GameState::Showdown {
            debug!(state = %self.state, "refill rejected: wrong state");
            return false;
        }

        self.set_state(GameState::Scoring);
        let Some(finished) = self.round.take() else {
            return false;
        };
        for p in &mut self.players {
            p.clear_played();
        }
        let next_dealer = finished.loser.as_deref().and_then(|id| self.seat_of(id));
        self.history.push(finished);

        self.set_state(GameState::Refill);
        let n = self.players.len();
        let start = self.dealer.unwrap_or(0);
        'seats: for k in 0..n {
            let p = &mut self.players[(start + k) % n];
            while p.hand().len() < self.config.hand_size {
                match self.deck.deal_card() {
                    Some(c) => p.give_card(c),
                    None => break 'seats,
                }
            }
        }

        // a round needs every player to put down at least one card
        if self.players.iter().any(|p| p.hand().len() < MIN_CALL as usize) {
            info!(rounds = self.history.len(), "game over");
            self.set_state(GameState::GameOver);
        } else {
            self.start_round(next_dealer.unwrap_or(start));
        }
        true
    }

    /// Every showdown needs a full poker hand from the smallest legal play
    /// plus the community cards, and every hand must cover the smallest call.
    fn check_config(&self) -> Result<(), GameError> {
        let min_play = MIN_CALL as usize;
        if self.config.community_cards + min_play < HAND_SIZE {
            return Err(GameError::InvalidConfig(format!(
                "community_cards {} leaves a {}-card play short of a poker hand",
                self.config.community_cards, min_play
            )));
        }
        if self.config.hand_size < min_play {
            return Err(GameError::InvalidConfig(format!(
                "hand_size {} is below the minimum call of {}",
                self.config.hand_size, min_play
            )));
        }
        Ok(())
    }

    fn start_round(&mut self, dealer_seat: usize) {
        self.dealer = Some(dealer_seat);
        let number = self.history.len() as u32 + 1;
        let dealer_id = self.players[dealer_seat].id().to_string();
        debug!(round = number, dealer = %dealer_id, "round started");
        self.round = Some(RoundState::new(number, dealer_id));
        self.set_state(GameState::DealerCall);
    }

    fn set_state(&mut self, next: GameState) {
        if self.state != next {
            debug!(from = %self.state, to = %next, "state transition");
        }
        self.state = next;
    }

    fn expect_state(&self, expected: GameState) -> Result<(), GameError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(GameError::InvalidState {
                expected: expected.to_string(),
                actual: self.state.to_string(),
            })
        }
    }

    fn seat_of(&self, player_id: &str) -> Option<usize> {
        self.players.iter().position(|p| p.id() == player_id)
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn community_cards(&self) -> &[Card] {
        &self.community
    }

    pub fn players(&self) -> &[PlayerState] {
        &self.players
    }

    pub fn player(&self, player_id: &str) -> Option<&PlayerState> {
        self.players.iter().find(|p| p.id() == player_id)
    }

    pub fn dealer(&self) -> Option<&str> {
        self.dealer.map(|s| self.players[s].id())
    }

    pub fn current_round(&self) -> Option<&RoundState> {
        self.round.as_ref()
    }

    /// Play size of the current round, 0 before the dealer calls.
    pub fn cards_to_play(&self) -> u8 {
        self.round.as_ref().map_or(0, |r| r.cards_to_play)
    }

    /// Players who still owe a submission this round, in seat order.
    pub fn pending_players(&self) -> Vec<PlayerId> {
        match (&self.round, self.state) {
            (Some(round), GameState::PlayerSelection) => self
                .players
                .iter()
                .filter(|p| !round.has_played(p.id()))
                .map(|p| p.id().to_string())
                .collect(),
            _ => Vec::new(),
        }
    }

    pub fn history(&self) -> &[RoundState] {
        &self.history
    }

    pub fn first_dealer_reveals(&self) -> &[(PlayerId, Card)] {
        &self.reveals
    }

    pub fn scores(&self) -> BTreeMap<PlayerId, u32> {
        self.players
            .iter()
            .map(|p| (p.id().to_string(), p.score()))
            .collect()
    }

    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    pub fn is_game_over(&self) -> bool {
        self.state == GameState::GameOver
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            state: self.state,
            dealer: self.dealer().map(str::to_string),
            community: self.community.clone(),
            round: self.round.clone(),
            scores: self.scores(),
            hand_sizes: self
                .players
                .iter()
                .map(|p| (p.id().to_string(), p.hand().len()))
                .collect(),
            deck_remaining: self.deck.remaining(),
        }
    }
}
