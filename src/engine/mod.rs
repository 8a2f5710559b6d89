//! Покерный движок: легальность действий, переход улиц, шоудаун.
//!
//! Высокоуровневый объект: `PokerGame`
//! Основные операции:
//!   - `start_new_hand` – запустить новую раздачу
//!   - `decision_point` – чей ход и что ему можно
//!   - `apply_action` – применить действие игрока (дальше движок сам
//!     передаёт ход, открывает улицы и делит банк)

pub mod actions;
pub mod betting;
pub mod errors;
pub mod game_loop;
pub mod hand_history;
pub mod positions;
pub mod showdown;
pub mod validation;

pub use actions::PlayerActionKind;
pub use betting::BettingState;
pub use errors::EngineError;
pub use game_loop::{HandStatus, PokerGame};
pub use hand_history::{HandEvent, HandEventKind, HandHistory};
pub use showdown::split_pot;
pub use validation::DecisionPoint;

/// RNG интерфейс для engine: перемешивание колоды.
/// Реализации – в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
