//! Драйвер раздачи: спрашивает решения у игроков и передаёт их движку.
//!
//! Движок ничего не знает о том, кто принимает решения – человек в
//! терминале, скрипт в тесте или бот. Драйвер только повторяет запрос
//! после отклонённого действия и при необходимости форсирует fold.

pub mod bots;
pub mod human;

use crate::api::{build_table_view, TableViewDto};
use crate::domain::deck::Deck;
use crate::domain::hand::HandSummary;
use crate::engine::{DecisionPoint, EngineError, HandStatus, PlayerActionKind, PokerGame, RandomSource};
use crate::eval::HandEvaluator;

pub use bots::{CallingStation, RandomBot, ScriptedDecider};
pub use human::HumanDecider;

/// Кто-то, кто принимает решения за место.
pub trait Decider {
    /// Выбрать действие. `view` – стол глазами этого места.
    fn decide(&mut self, view: &TableViewDto, point: &DecisionPoint) -> PlayerActionKind;

    /// Движок отклонил предыдущее действие.
    fn on_rejected(&mut self, _point: &DecisionPoint, _error: &EngineError) {}
}

/// Сколько отказов подряд терпим от одного места по умолчанию.
pub const DEFAULT_MAX_INVALID: u32 = 3;

/// Ведёт одну раздачу от старта до шоудауна.
#[derive(Clone, Copy, Debug)]
pub struct HandRunner {
    /// После стольких отклонённых действий подряд место делает fold.
    pub max_invalid: u32,
}

impl Default for HandRunner {
    fn default() -> Self {
        Self {
            max_invalid: DEFAULT_MAX_INVALID,
        }
    }
}

impl HandRunner {
    pub fn new(max_invalid: u32) -> Self {
        Self { max_invalid }
    }

    /// Сыграть раздачу с перемешанной колодой.
    ///
    /// `deciders[seat]` отвечает за место `seat`.
    pub fn play_hand<E, R>(
        &self,
        game: &mut PokerGame<E>,
        rng: &mut R,
        deciders: &mut [Box<dyn Decider>],
    ) -> Result<HandSummary, EngineError>
    where
        E: HandEvaluator,
        R: RandomSource,
    {
        let status = game.start_new_hand(rng)?;
        self.drive(game, deciders, status)
    }

    /// Сыграть раздачу с заданной колодой.
    pub fn play_hand_with_deck<E: HandEvaluator>(
        &self,
        game: &mut PokerGame<E>,
        deck: Deck,
        deciders: &mut [Box<dyn Decider>],
    ) -> Result<HandSummary, EngineError> {
        let status = game.start_new_hand_with_deck(deck)?;
        self.drive(game, deciders, status)
    }

    fn drive<E: HandEvaluator>(
        &self,
        game: &mut PokerGame<E>,
        deciders: &mut [Box<dyn Decider>],
        mut status: HandStatus,
    ) -> Result<HandSummary, EngineError> {
        let mut rejected = 0u32;

        loop {
            if let HandStatus::Finished(summary) = status {
                return Ok(summary);
            }

            let point = game.decision_point().ok_or(EngineError::NoEligibleActor)?;
            let decider = deciders
                .get_mut(point.seat)
                .ok_or(EngineError::Internal("нет решающего для места"))?;

            let action = if rejected >= self.max_invalid {
                log::warn!(
                    "{}: {} отказов подряд – принудительный fold",
                    point.name,
                    rejected
                );
                PlayerActionKind::Fold
            } else {
                let view = build_table_view(game, Some(point.seat));
                decider.decide(&view, &point)
            };

            match game.apply_action(action) {
                Ok(next) => {
                    status = next;
                    rejected = 0;
                }
                Err(e) if e.is_illegal_action() => {
                    rejected += 1;
                    decider.on_rejected(&point, &e);
                }
                Err(e) => return Err(e),
            }
        }
    }
}
