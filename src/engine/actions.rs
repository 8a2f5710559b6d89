use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::Chips;

/// Тип действия игрока.
///
/// Сумма в `Bet`/`Raise` – всегда новый общий уровень ставки на улице
/// (сколько у игрока будет стоять перед ним), а не прирост.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayerActionKind {
    Fold,
    Check,
    /// Уравнять текущую ставку. Сумму считает движок.
    Call,
    /// Bet на улице, где ещё никто не ставил.
    Bet(Chips),
    /// Raise существующей ставки.
    Raise(Chips),
    /// All-in – поставить весь стек.
    AllIn,
}

impl PlayerActionKind {
    /// Короткое имя действия для логов и подсказок.
    pub fn name(&self) -> &'static str {
        match self {
            PlayerActionKind::Fold => "fold",
            PlayerActionKind::Check => "check",
            PlayerActionKind::Call => "call",
            PlayerActionKind::Bet(_) => "bet",
            PlayerActionKind::Raise(_) => "raise",
            PlayerActionKind::AllIn => "all-in",
        }
    }
}

impl fmt::Display for PlayerActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerActionKind::Bet(amount) | PlayerActionKind::Raise(amount) => {
                write!(f, "{} {}", self.name(), amount)
            }
            other => f.write_str(other.name()),
        }
    }
}
