use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::engine::actions::PlayerActionKind;

/// Статус игрока в текущей раздаче.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PlayerStatus {
    /// Игрок в раздаче и может действовать.
    Active,
    /// Игрок сфолдил и больше не претендует на банк.
    Folded,
    /// Игрок поставил весь стек – действовать не может, но банк выиграть может.
    AllIn,
    /// На начало раздачи стек был пуст: карт не получает, не ходит.
    Out,
}

/// Состояние одного места за столом.
///
/// Между раздачами переживает только `stack`, остальное сбрасывается
/// в [`Player::reset_for_new_hand`].
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub stack: Chips,
    pub status: PlayerStatus,
    /// Карманные карты (пусто между раздачами, две карты в раздаче).
    pub hole_cards: Vec<Card>,
    /// Сколько игрок вложил на текущей улице.
    pub bet_amount: Chips,
}

impl Player {
    pub fn new(name: impl Into<String>, stack: Chips) -> Self {
        Self {
            name: name.into(),
            stack,
            status: if stack.is_zero() { PlayerStatus::Out } else { PlayerStatus::Active },
            hole_cards: Vec::new(),
            bet_amount: Chips::ZERO,
        }
    }

    pub fn reset_for_new_hand(&mut self) {
        self.hole_cards.clear();
        self.bet_amount = Chips::ZERO;
        self.status = if self.stack.is_zero() {
            PlayerStatus::Out
        } else {
            PlayerStatus::Active
        };
    }

    /// Может ли игрок сейчас принимать решения.
    pub fn can_act(&self) -> bool {
        matches!(self.status, PlayerStatus::Active)
    }

    /// Претендует ли игрок на банк.
    pub fn is_in_hand(&self) -> bool {
        matches!(self.status, PlayerStatus::Active | PlayerStatus::AllIn)
    }

    /// Применить уже проверенное движком действие.
    ///
    /// `chips` – сколько фишек движок просит внести. Реально списывается
    /// не больше стека; если стек обнулился, игрок уходит в all-in и
    /// записанное действие становится `AllIn`.
    ///
    /// Возвращает (фактическое действие, внесённые фишки).
    pub fn apply_action(&mut self, action: &PlayerActionKind, chips: Chips) -> (PlayerActionKind, Chips) {
        match action {
            PlayerActionKind::Fold => {
                self.status = PlayerStatus::Folded;
                (PlayerActionKind::Fold, Chips::ZERO)
            }
            PlayerActionKind::Check => (PlayerActionKind::Check, Chips::ZERO),
            PlayerActionKind::Call
            | PlayerActionKind::Bet(_)
            | PlayerActionKind::Raise(_)
            | PlayerActionKind::AllIn => {
                let committed = chips.min(self.stack);
                self.stack -= committed;
                self.bet_amount += committed;

                if self.stack.is_zero() {
                    self.status = PlayerStatus::AllIn;
                    (PlayerActionKind::AllIn, committed)
                } else {
                    (action.clone(), committed)
                }
            }
        }
    }
}
