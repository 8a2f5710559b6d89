// tests/infra_test.rs

//! Конфиг стола и детерминированный RNG.

use std::io::Write;

use poker_hand_engine::domain::{Chips, ConfigError, Deck, PlayerStatus};
use poker_hand_engine::engine::PokerGame;
use poker_hand_engine::infra::{load_table_config, parse_table_config, DeterministicRng, LoadError};

const CONFIG: &str = r#"{
    "big_blind": 20,
    "seats": [
        { "name": "Alice", "stack": 1000 },
        { "name": "Bob", "stack": 500 },
        { "name": "Carol", "stack": 0 }
    ]
}"#;

#[test]
fn parses_table_config() {
    let config = parse_table_config(CONFIG).unwrap();
    assert_eq!(config.big_blind, Chips(20));
    assert_eq!(config.seats.len(), 3);
    assert_eq!(config.seats[1].stack, Chips(500));

    let game = PokerGame::from_config(&config).unwrap();
    assert_eq!(game.seat_count(), 3);
    assert_eq!(game.players[2].status, PlayerStatus::Out);
    assert_eq!(game.num_funded_players(), 2);
}

#[test]
fn rejects_invalid_configs() {
    let dup = r#"{ "big_blind": 20, "seats": [
        { "name": "Alice", "stack": 100 }, { "name": "Alice", "stack": 100 } ] }"#;
    assert!(matches!(
        parse_table_config(dup),
        Err(LoadError::Invalid(ConfigError::DuplicateName(name))) if name == "Alice"
    ));

    let lonely = r#"{ "big_blind": 20, "seats": [ { "name": "Alice", "stack": 100 } ] }"#;
    assert!(matches!(
        parse_table_config(lonely),
        Err(LoadError::Invalid(ConfigError::SeatCount(1)))
    ));

    let free = r#"{ "big_blind": 0, "seats": [
        { "name": "A", "stack": 1 }, { "name": "B", "stack": 1 } ] }"#;
    assert!(matches!(
        parse_table_config(free),
        Err(LoadError::Invalid(ConfigError::ZeroBigBlind))
    ));

    assert!(matches!(parse_table_config("{ not json"), Err(LoadError::Parse(_))));
}

#[test]
fn loads_config_from_file() {
    let path = std::env::temp_dir().join(format!("poker_table_{}.json", std::process::id()));
    {
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(CONFIG.as_bytes()).unwrap();
    }
    let config = load_table_config(&path).unwrap();
    assert_eq!(config.seats[0].name, "Alice");
    std::fs::remove_file(&path).unwrap();

    assert!(matches!(load_table_config(&path), Err(LoadError::Io(_))));
}

#[test]
fn same_seed_same_deck() {
    let mut a = DeterministicRng::from_seed(123);
    let mut b = DeterministicRng::from_seed(123);
    let mut c = DeterministicRng::from_seed(124);

    let deck_a = Deck::shuffled(&mut a);
    assert_eq!(deck_a, Deck::shuffled(&mut b));
    assert_ne!(deck_a, Deck::shuffled(&mut c));
    assert_eq!(deck_a.len(), 52);
}
