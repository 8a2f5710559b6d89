//! Оценка силы покерных рук (Texas Hold'em).
//!
//! Движок видит только трейт [`HandEvaluator`]; реализация по умолчанию –
//! [`SevenCardEvaluator`] (лучшие 5 из 7).

pub mod evaluator;
pub mod hand_rank;
pub mod lookup_tables;

pub use evaluator::{evaluate_best_hand, HandEvaluator, SevenCardEvaluator};
pub use hand_rank::describe_hand;
