use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::api::TableViewDto;
use crate::domain::chips::Chips;
use crate::engine::{DecisionPoint, PlayerActionKind};

use super::Decider;

/// Всегда check, а если нельзя – call.
#[derive(Clone, Copy, Debug, Default)]
pub struct CallingStation;

impl Decider for CallingStation {
    fn decide(&mut self, _view: &TableViewDto, point: &DecisionPoint) -> PlayerActionKind {
        if point.can_check {
            PlayerActionKind::Check
        } else {
            PlayerActionKind::Call
        }
    }
}

/// Проигрывает заранее заданную очередь действий, потом делает fold.
#[derive(Clone, Debug, Default)]
pub struct ScriptedDecider {
    pub script: VecDeque<PlayerActionKind>,
    /// Сколько раз движок отклонил действие из скрипта.
    pub rejections: u32,
}

impl ScriptedDecider {
    pub fn new(actions: impl IntoIterator<Item = PlayerActionKind>) -> Self {
        Self {
            script: actions.into_iter().collect(),
            rejections: 0,
        }
    }
}

impl Decider for ScriptedDecider {
    fn decide(&mut self, _view: &TableViewDto, _point: &DecisionPoint) -> PlayerActionKind {
        self.script.pop_front().unwrap_or(PlayerActionKind::Fold)
    }

    fn on_rejected(&mut self, _point: &DecisionPoint, _error: &crate::engine::EngineError) {
        self.rejections += 1;
    }
}

/// Случайный бот для симуляций и стресс-прогонов.
#[derive(Clone, Debug)]
pub struct RandomBot {
    rng: StdRng,
}

impl RandomBot {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Decider for RandomBot {
    fn decide(&mut self, _view: &TableViewDto, point: &DecisionPoint) -> PlayerActionKind {
        let roll: u32 = self.rng.gen_range(0..100);

        match roll {
            0..=14 if !point.can_check => PlayerActionKind::Fold,
            0..=69 => {
                if point.can_check {
                    PlayerActionKind::Check
                } else {
                    PlayerActionKind::Call
                }
            }
            70..=94 if point.min_total < point.max_total => {
                let total = self.rng.gen_range(point.min_total.0..=point.max_total.0);
                if point.facing_bet() {
                    PlayerActionKind::Raise(Chips(total))
                } else {
                    PlayerActionKind::Bet(Chips(total))
                }
            }
            _ => PlayerActionKind::AllIn,
        }
    }
}
