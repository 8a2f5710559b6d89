// tests/engine_preflop_tests.rs

//! Интеграционные тесты старта раздачи и префлопа.
//!
//! Проверяем:
//! - сдвиг кнопки, раздачу карманных карт, единственный блайнд;
//! - первый ход через два места от кнопки;
//! - отказ стартовать без игроков с фишками или без карт в колоде.

use poker_hand_engine::domain::{Chips, Deck, Phase, Player, PlayerStatus};
use poker_hand_engine::domain::Card;
use poker_hand_engine::engine::{
    EngineError, HandEventKind, HandStatus, PlayerActionKind, PokerGame, RandomSource,
};
use poker_hand_engine::infra::DeterministicRng;

const TEST_STACK: u64 = 1_000;
const BIG_BLIND: u64 = 20;

/// RNG, который ничего не перемешивает: колода идёт в стандартном порядке.
struct DummyRng;

impl RandomSource for DummyRng {
    fn shuffle<T>(&mut self, _slice: &mut [T]) {}
}

fn make_game(num_players: usize) -> PokerGame {
    let players = (0..num_players)
        .map(|i| Player::new(format!("Player {}", i + 1), Chips(TEST_STACK)))
        .collect();
    PokerGame::new(players, Chips(BIG_BLIND))
}

#[test]
fn first_hand_posts_big_blind_after_button() {
    let mut game = make_game(4);
    let mut rng = DeterministicRng::from_seed(1);

    let status = game.start_new_hand(&mut rng).unwrap();
    assert_eq!(status, HandStatus::Ongoing);

    assert_eq!(game.hand_number, 1);
    assert_eq!(game.button_position, 1);
    assert_eq!(game.phase, Phase::PreFlop);

    let bb = &game.players[2];
    assert_eq!(bb.bet_amount, Chips(20));
    assert_eq!(bb.stack, Chips(980));
    assert_eq!(game.current_bet(), Chips(20));
    assert_eq!(game.pot(), Chips(20));
    assert_eq!(game.min_raise(), Chips(20));

    // Первым ходит место через два от кнопки.
    assert_eq!(game.active_player(), Some(3));
    assert!(game.community_cards.is_empty());
}

#[test]
fn every_funded_player_gets_two_cards() {
    let mut game = make_game(6);
    let mut rng = DeterministicRng::from_seed(2);
    game.start_new_hand(&mut rng).unwrap();

    let mut seen = Vec::new();
    for p in &game.players {
        assert_eq!(p.hole_cards.len(), 2);
        assert_eq!(p.status, PlayerStatus::Active);
        seen.extend_from_slice(&p.hole_cards);
    }
    seen.sort_by_key(|c| (c.suit, c.rank));
    seen.dedup();
    assert_eq!(seen.len(), 12);
    assert_eq!(game.deck.len(), 52 - 12);

    let dealt = game
        .history
        .events
        .iter()
        .filter(|e| matches!(e.kind, HandEventKind::HoleCardsDealt { .. }))
        .count();
    assert_eq!(dealt, 6);
}

#[test]
fn button_moves_one_seat_per_hand() {
    let mut game = make_game(3);
    let mut rng = DeterministicRng::from_seed(3);

    for expected in [1, 2, 0, 1] {
        game.start_new_hand(&mut rng).unwrap();
        assert_eq!(game.button_position, expected);
        while game.decision_point().is_some() {
            game.apply_action(PlayerActionKind::Fold).unwrap();
        }
        assert!(game.is_hand_over());
    }
    let total: Chips = game.players.iter().map(|p| p.stack).sum();
    assert_eq!(total, Chips(3 * TEST_STACK));
    assert_eq!(game.hand_number, 4);
}

#[test]
fn busted_player_sits_out_without_cards() {
    let players = vec![
        Player::new("Alice", Chips(1000)),
        Player::new("Bob", Chips::ZERO),
        Player::new("Carol", Chips(1000)),
    ];
    let mut game = PokerGame::new(players, Chips(BIG_BLIND));
    let mut rng = DeterministicRng::from_seed(4);

    game.start_new_hand(&mut rng).unwrap();

    // Кнопка на месте 1 (Bob, без фишек), блайнд ставит Carol.
    assert_eq!(game.button_position, 1);
    assert_eq!(game.players[1].status, PlayerStatus::Out);
    assert!(game.players[1].hole_cards.is_empty());
    assert_eq!(game.players[2].bet_amount, Chips(20));

    // Первый ход через два от кнопки – место 0.
    assert_eq!(game.active_player(), Some(0));
}

#[test]
fn short_stack_posts_what_it_has() {
    let players = vec![
        Player::new("Alice", Chips(1000)),
        Player::new("Bob", Chips(1000)),
        Player::new("Carol", Chips(12)),
    ];
    let mut game = PokerGame::new(players, Chips(BIG_BLIND));
    let mut rng = DeterministicRng::from_seed(5);

    game.start_new_hand(&mut rng).unwrap();

    let carol = &game.players[2];
    assert_eq!(carol.status, PlayerStatus::AllIn);
    assert_eq!(carol.bet_amount, Chips(12));
    assert_eq!(game.current_bet(), Chips(12));
    assert_eq!(game.pot(), Chips(12));
}

#[test]
fn needs_two_funded_players() {
    let players = vec![Player::new("Alice", Chips(1000)), Player::new("Bob", Chips::ZERO)];
    let mut game = PokerGame::new(players, Chips(BIG_BLIND));
    let mut rng = DeterministicRng::from_seed(6);

    assert_eq!(game.start_new_hand(&mut rng), Err(EngineError::NotEnoughPlayers));
    assert_eq!(game.phase, Phase::Setup);
    assert_eq!(game.hand_number, 0);
}

#[test]
fn short_deck_is_rejected_before_any_change() {
    let mut game = make_game(4);
    let mut full = Deck::standard_52();
    let seven = full.deal(7).unwrap();

    let err = game.start_new_hand_with_deck(Deck::from_cards(seven)).unwrap_err();
    assert!(matches!(err, EngineError::DeckExhausted(_)));
    assert!(err.is_fatal());

    assert_eq!(game.hand_number, 0);
    assert_eq!(game.phase, Phase::Setup);
    assert!(game.players.iter().all(|p| p.hole_cards.is_empty()));
}

#[test]
fn actions_outside_a_hand_are_rejected() {
    let mut game = make_game(2);
    assert_eq!(
        game.apply_action(PlayerActionKind::Check),
        Err(EngineError::NoActiveHand)
    );
    assert_eq!(game.decision_point(), None);
}

#[test]
fn hole_cards_are_dealt_from_the_top_in_seat_order() {
    let mut game = make_game(3);
    game.start_new_hand(&mut DummyRng).unwrap();

    let card = |s: &str| s.parse::<Card>().unwrap();
    assert_eq!(game.players[0].hole_cards, vec![card("2c"), card("3c")]);
    assert_eq!(game.players[1].hole_cards, vec![card("4c"), card("5c")]);
    assert_eq!(game.players[2].hole_cards, vec![card("6c"), card("7c")]);
}
