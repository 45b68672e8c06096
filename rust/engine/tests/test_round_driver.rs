use tricktable_engine::cards::Card;
use tricktable_engine::config::GameConfig;
use tricktable_engine::engine::RoundDriver;
use tricktable_engine::errors::{GameError, PlayError};
use tricktable_engine::game::GameState;
use tricktable_engine::hand::compare_reveal;
use tricktable_engine::rules::base_score;

const PLAYERS: [&str; 3] = ["ann", "bo", "cy"];

fn dealt(seed: u64) -> RoundDriver {
    let mut d = RoundDriver::new(GameConfig::with_seed(seed));
    d.init_game(&PLAYERS).expect("init");
    d.deal_cards().expect("deal");
    d
}

fn ready(seed: u64) -> RoundDriver {
    let mut d = dealt(seed);
    d.select_first_dealer().expect("dealer");
    d
}

fn first_cards(d: &RoundDriver, id: &str, n: usize) -> Vec<Card> {
    d.player(id).unwrap().hand()[..n].to_vec()
}

fn play_everyone(d: &mut RoundDriver) {
    let n = d.cards_to_play() as usize;
    for id in d.pending_players() {
        let cards = first_cards(d, &id, n);
        assert!(d.play_cards(&cards, &id), "{} should be able to play", id);
    }
}

#[test]
fn init_validates_players() {
    let mut d = RoundDriver::new(GameConfig::default());
    assert_eq!(
        d.init_game(&["solo"]),
        Err(GameError::InvalidPlayerCount {
            count: 1,
            min: 2,
            max: 9
        })
    );
    assert_eq!(
        d.init_game(&["a", "b", "a"]),
        Err(GameError::DuplicatePlayer("a".into()))
    );
    let ten: Vec<String> = (0..10).map(|i| format!("p{}", i)).collect();
    assert!(matches!(
        d.init_game(&ten),
        Err(GameError::InvalidPlayerCount { count: 10, .. })
    ));
}

#[test]
fn init_rejects_tables_that_cannot_reach_a_showdown() {
    // one played card plus three community cards is not a poker hand
    let short_board = GameConfig {
        community_cards: 3,
        ..GameConfig::with_seed(1)
    };
    let mut d = RoundDriver::new(short_board);
    assert!(matches!(
        d.init_game(&PLAYERS),
        Err(GameError::InvalidConfig(_))
    ));
    assert_eq!(d.state(), GameState::Setup);
    assert!(d.players().is_empty());

    let no_hands = GameConfig {
        hand_size: 0,
        ..GameConfig::with_seed(1)
    };
    let mut d = RoundDriver::new(no_hands);
    let err = d.init_game(&PLAYERS).unwrap_err();
    assert!(err.to_string().contains("hand_size 0"));

    let smallest_legal = GameConfig {
        community_cards: 4,
        hand_size: 1,
        ..GameConfig::with_seed(1)
    };
    let mut d = RoundDriver::new(smallest_legal);
    d.init_game(&PLAYERS).unwrap();
    d.deal_cards().unwrap();
    d.select_first_dealer().unwrap();
    assert!(d.dealer_call(1));
    play_everyone(&mut d);
    let round = d.current_round().unwrap();
    assert!(round.winner.is_some() && round.loser.is_some());
    assert_eq!(round.results.len(), PLAYERS.len());
}

#[test]
fn deal_fills_community_and_hands() {
    let d = dealt(11);
    assert_eq!(d.state(), GameState::FirstDealerSelection);
    assert_eq!(d.community_cards().len(), 4);
    for p in d.players() {
        assert_eq!(p.hand().len(), 5);
        assert_eq!(p.score(), 0);
    }
    assert_eq!(d.deck_remaining(), 52 - 4 - 15);
}

#[test]
fn deal_is_only_allowed_once_per_game() {
    let mut d = dealt(11);
    assert!(matches!(d.deal_cards(), Err(GameError::InvalidState { .. })));
}

#[test]
fn deal_runs_out_of_cards_with_oversized_hands() {
    let config = GameConfig {
        hand_size: 10,
        ..GameConfig::with_seed(3)
    };
    let mut d = RoundDriver::new(config);
    d.init_game(&["a", "b", "c", "d", "e", "f"]).unwrap();
    assert_eq!(d.deal_cards(), Err(GameError::DeckExhausted));
}

#[test]
fn same_seed_deals_the_same_table() {
    let a = dealt(42);
    let b = dealt(42);
    assert_eq!(a.community_cards(), b.community_cards());
    assert_eq!(a.players(), b.players());
}

#[test]
fn first_dealer_has_the_highest_reveal() {
    let mut d = dealt(5);
    let dealer = d.select_first_dealer().unwrap();
    let reveals = d.first_dealer_reveals().to_vec();
    assert_eq!(reveals.len(), PLAYERS.len());
    let best = reveals
        .iter()
        .max_by(|a, b| compare_reveal(a.1, b.1))
        .unwrap();
    assert_eq!(best.0, dealer);
    assert_eq!(d.dealer(), Some(dealer.as_str()));
    assert_eq!(d.state(), GameState::DealerCall);
    assert_eq!(d.current_round().unwrap().round_number, 1);
}

#[test]
fn dealer_call_outside_dealer_call_state_changes_nothing() {
    let mut d = dealt(7);
    assert!(!d.dealer_call(2));
    assert_eq!(d.cards_to_play(), 0);
    assert_eq!(d.state(), GameState::FirstDealerSelection);

    d.select_first_dealer().unwrap();
    assert!(d.dealer_call(2));
    assert_eq!(d.state(), GameState::PlayerSelection);
    assert!(!d.dealer_call(3));
    assert_eq!(d.cards_to_play(), 2);
}

#[test]
fn dealer_call_bounds() {
    let mut d = ready(7);
    assert!(!d.dealer_call(0));
    assert!(!d.dealer_call(4));
    assert_eq!(d.state(), GameState::DealerCall);
    assert!(d.dealer_call(1));
}

#[test]
fn illegal_plays_are_rejected_without_state_change() {
    let mut d = ready(9);
    assert!(d.dealer_call(2));

    let one = first_cards(&d, "ann", 1);
    assert!(!d.is_valid_play(&one, "ann"));
    assert_eq!(
        d.check_play(&one, "ann"),
        Err(PlayError::WrongCount { got: 1, expected: 2 })
    );

    let foreign = first_cards(&d, "bo", 2);
    assert!(!d.play_cards(&foreign, "ann"));
    assert!(!d.play_cards(&foreign, "nobody"));

    let own = first_cards(&d, "ann", 2);
    assert!(d.play_cards(&own, "ann"));
    assert_eq!(d.player("ann").unwrap().hand().len(), 3);
    let again = first_cards(&d, "ann", 2);
    assert!(!d.play_cards(&again, "ann"));
    assert_eq!(
        d.check_play(&again, "ann"),
        Err(PlayError::AlreadyPlayed("ann".into()))
    );
    assert_eq!(d.player("ann").unwrap().hand().len(), 3);
    assert_eq!(d.state(), GameState::PlayerSelection);
    assert_eq!(d.pending_players(), vec!["bo".to_string(), "cy".to_string()]);
}

#[test]
fn last_submission_resolves_the_showdown() {
    let mut d = ready(13);
    assert!(d.dealer_call(3));
    play_everyone(&mut d);
    assert_eq!(d.state(), GameState::Showdown);

    let round = d.current_round().unwrap().clone();
    let winner = round.winner.clone().expect("winner");
    let loser = round.loser.clone().expect("loser");
    assert_ne!(winner, loser);
    assert_eq!(round.results.len(), PLAYERS.len());

    for id in PLAYERS {
        let base = base_score(round.results[id].hand_type);
        let expected = if id == winner { base + 1 } else { base };
        assert_eq!(round.points[id], expected);
        assert_eq!(d.player(id).unwrap().score(), expected);
        assert_eq!(d.player(id).unwrap().played().len(), 3);
    }
}

#[test]
fn refill_rotates_dealer_to_loser() {
    let mut d = ready(21);
    assert!(!d.refill_hands());
    assert!(d.dealer_call(2));
    play_everyone(&mut d);
    let loser = d.current_round().unwrap().loser.clone().unwrap();
    let before = d.deck_remaining();

    assert!(d.refill_hands());
    assert_eq!(d.state(), GameState::DealerCall);
    assert_eq!(d.dealer(), Some(loser.as_str()));
    assert_eq!(d.history().len(), 1);
    assert_eq!(d.current_round().unwrap().round_number, 2);
    assert_eq!(d.deck_remaining(), before - 6);
    for p in d.players() {
        assert_eq!(p.hand().len(), 5);
        assert!(p.played().is_empty());
    }
}

#[test]
fn short_deck_refills_from_the_dealer_clockwise() {
    // 33 cards after the deal; three full refills of 9 leave 6
    let mut d = ready(4242);
    for _ in 0..3 {
        assert!(d.dealer_call(3));
        play_everyone(&mut d);
        assert!(d.refill_hands());
    }
    assert!(d.dealer_call(3));
    play_everyone(&mut d);
    assert_eq!(d.deck_remaining(), 6);

    let seats = d.players().len();
    let dealer_seat = d
        .players()
        .iter()
        .position(|p| Some(p.id()) == d.dealer())
        .unwrap();
    let before: Vec<usize> = d.players().iter().map(|p| p.hand().len()).collect();
    assert_eq!(before, vec![2, 2, 2]);

    assert!(d.refill_hands());
    let after: Vec<usize> = d.players().iter().map(|p| p.hand().len()).collect();
    assert_eq!(d.deck_remaining(), 0);
    assert_eq!(after[dealer_seat], 5);
    assert_eq!(after[(dealer_seat + 1) % seats], 5);
    assert_eq!(after[(dealer_seat + 2) % seats], 2);
    // every hand still covers a call, so play goes on
    assert_eq!(d.state(), GameState::DealerCall);
}

#[test]
fn game_runs_until_hands_are_empty() {
    let mut d = ready(1234);
    let mut rounds = 0;
    while !d.is_game_over() {
        assert_eq!(d.state(), GameState::DealerCall);
        let smallest = d.players().iter().map(|p| p.hand().len()).min().unwrap();
        assert!(d.dealer_call(smallest.min(3) as u8));
        play_everyone(&mut d);
        assert!(d.refill_hands());
        rounds += 1;
        assert!(rounds < 100, "game should terminate");
    }
    assert_eq!(d.deck_remaining(), 0);
    assert!(d.players().iter().any(|p| p.hand().is_empty()));
    assert_eq!(d.history().len(), rounds);

    let awarded: u32 = d.history().iter().flat_map(|r| r.points.values()).sum();
    let total: u32 = d.scores().values().sum();
    assert_eq!(awarded, total);
    for r in d.history() {
        assert!(r.winner.is_some() && r.loser.is_some());
    }
    assert!(!d.dealer_call(1));
}

#[test]
fn snapshot_reflects_table() {
    let mut d = ready(77);
    assert!(d.dealer_call(1));
    let snap = d.snapshot();
    assert_eq!(snap.state, GameState::PlayerSelection);
    assert_eq!(snap.community.len(), 4);
    assert_eq!(snap.hand_sizes["ann"], 5);
    assert_eq!(snap.round.unwrap().cards_to_play, 1);
    let json = serde_json::to_string(&d.snapshot()).unwrap();
    assert!(json.contains("\"PlayerSelection\""));
}
