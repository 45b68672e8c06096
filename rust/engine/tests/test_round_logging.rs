use std::fs;

use tricktable_engine::config::GameConfig;
use tricktable_engine::engine::RoundDriver;
use tricktable_engine::logger::{format_round_id, RoundLogger, RoundRecord};

fn played_round(seed: u64) -> (RoundDriver, RoundRecord) {
    let mut d = RoundDriver::new(GameConfig::with_seed(seed));
    d.init_game(&["p0", "p1"]).unwrap();
    d.deal_cards().unwrap();
    d.select_first_dealer().unwrap();
    assert!(d.dealer_call(1));
    for id in ["p0", "p1"] {
        let c = d.player(id).unwrap().hand()[..1].to_vec();
        assert!(d.play_cards(&c, id));
    }
    let rec = RoundRecord::from_round(
        format_round_id("20250102", 1),
        d.config().seed,
        d.community_cards(),
        d.current_round().unwrap(),
    );
    (d, rec)
}

#[test]
fn writes_jsonl_with_lf_only() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rounds.jsonl");
    let mut logger = RoundLogger::create(&path).expect("create logger");
    let (_, rec) = played_round(1);
    logger.write(&rec).expect("write");
    logger.write(&rec).expect("write again");
    let bytes = fs::read(&path).expect("read file");
    assert!(bytes.ends_with(b"\n"));
    assert!(!bytes.contains(&b'\r'));
    assert_eq!(bytes.iter().filter(|b| **b == b'\n').count(), 2);
}

#[test]
fn creates_missing_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested/deeper/rounds.jsonl");
    let mut logger = RoundLogger::create(&path).expect("create logger");
    let (_, rec) = played_round(2);
    logger.write(&rec).unwrap();
    assert!(path.exists());
}

#[test]
fn sequential_ids_increment() {
    let mut logger = RoundLogger::detached("20251231");
    assert_eq!(logger.next_id(), "20251231-000001");
    assert_eq!(logger.next_id(), "20251231-000002");
}

#[test]
fn ts_is_generated_when_missing_and_preserved_when_present() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ts.jsonl");
    let mut logger = RoundLogger::create(&path).expect("create logger");
    let (_, rec) = played_round(3);
    assert!(rec.ts.is_none());
    logger.write(&rec).expect("write");
    let line = fs::read_to_string(&path).unwrap();
    assert!(line.contains("\"ts\":\""), "ts should be injected");

    let preset = "2030-01-01T00:00:00Z".to_string();
    let rec2 = RoundRecord {
        ts: Some(preset.clone()),
        ..rec
    };
    logger.write(&rec2).expect("write2");
    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains(&preset), "preset ts must be kept");
}

#[test]
fn record_carries_round_outcome() {
    let (d, rec) = played_round(4);
    let round = d.current_round().unwrap();
    assert_eq!(rec.round_number, 1);
    assert_eq!(rec.cards_to_play, 1);
    assert_eq!(rec.seed, Some(4));
    assert_eq!(rec.community.len(), 4);
    assert_eq!(rec.plays.len(), 2);
    assert_eq!(rec.categories.len(), 2);
    assert_eq!(rec.winner, round.winner);
    assert_eq!(rec.loser, round.loser);

    let json = serde_json::to_string(&rec).unwrap();
    let back: RoundRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back, rec);
}
