// tests/eval_tests.rs

//! Оценка рук: категории, кикеры, лучшие 5 из 7.

use poker_hand_engine::domain::{Card, HandCategory};
use poker_hand_engine::eval::{describe_hand, evaluate_best_hand, HandEvaluator, SevenCardEvaluator};

fn cards(s: &str) -> Vec<Card> {
    s.split_whitespace().map(|c| c.parse().unwrap()).collect()
}

fn category(hole: &str, board: &str) -> HandCategory {
    evaluate_best_hand(&cards(hole), &cards(board)).category
}

#[test]
fn recognizes_every_category() {
    let board = "2c 7d 9h Js 4c";
    assert_eq!(category("Ah Kd", board), HandCategory::HighCard);
    assert_eq!(category("Ah Ad", board), HandCategory::OnePair);
    assert_eq!(category("9c 7s", board), HandCategory::TwoPair);
    assert_eq!(category("9c 9s", board), HandCategory::ThreeOfAKind);
    assert_eq!(category("Tc 8s", board), HandCategory::Straight);
    assert_eq!(category("Kc Qc", "2c 7c 9h Js 4c"), HandCategory::Flush);
    assert_eq!(category("9c 9s", "2c 7d 9h 7s 4c"), HandCategory::FullHouse);
    assert_eq!(category("9c 9s", "9d 7d 9h Js 4c"), HandCategory::FourOfAKind);
    assert_eq!(category("8h Th", "9h Jh Qh 2c 2d"), HandCategory::StraightFlush);
}

#[test]
fn categories_are_totally_ordered() {
    let board = cards("2c 7d 9h Js 4c");
    let high = evaluate_best_hand(&cards("Ah Kd"), &board);
    let pair = evaluate_best_hand(&cards("3h 3d"), &board);
    let trips = evaluate_best_hand(&cards("2h 2d"), &board);
    assert!(high < pair);
    assert!(pair < trips);
}

#[test]
fn kicker_breaks_pair_ties() {
    let board = cards("Ac 7d 9h Js 4c");
    let ace_king = evaluate_best_hand(&cards("Ad Kd"), &board);
    let ace_queen = evaluate_best_hand(&cards("Ah Qh"), &board);
    assert_eq!(ace_king.category, HandCategory::OnePair);
    assert!(ace_king > ace_queen);
}

#[test]
fn board_plays_for_both() {
    let board = cards("Ts Jh Qd Kc Ad");
    let a = evaluate_best_hand(&cards("2c 3d"), &board);
    let b = evaluate_best_hand(&cards("4c 5h"), &board);
    assert_eq!(a, b);
    assert_eq!(describe_hand(a), "Straight");
}

#[test]
fn evaluator_trait_matches_free_function() {
    let hole = cards("Kh Kd");
    let board = cards("Kc 7d 7h");
    let via_trait = SevenCardEvaluator.evaluate(&hole, &board);
    assert_eq!(via_trait, evaluate_best_hand(&hole, &board));
    assert_eq!(via_trait.category, HandCategory::FullHouse);
}
