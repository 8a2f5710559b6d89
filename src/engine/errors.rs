use thiserror::Error;

use crate::domain::{Chips, DeckError};

/// Ошибки движка покера.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Раздача не активна")]
    NoActiveHand,

    #[error("Недостаточно игроков с фишками для раздачи")]
    NotEnoughPlayers,

    #[error("Никто за столом не может действовать")]
    NoEligibleActor,

    #[error("Невозможно выполнить check – нужно доплатить {to_call}")]
    CannotCheck { to_call: Chips },

    #[error("Минимальный bet – {min}")]
    BetTooSmall { min: Chips },

    #[error("Минимальный raise – до {min}")]
    RaiseTooSmall { min: Chips },

    #[error("Колода не может выдать карты: {0}")]
    DeckExhausted(#[from] DeckError),

    #[error("Внутренняя ошибка: {0}")]
    Internal(&'static str),
}

impl EngineError {
    /// Действие нарушает правила торговли: состояние не менялось,
    /// вызывающий может повторить с другим действием.
    pub fn is_illegal_action(&self) -> bool {
        matches!(
            self,
            EngineError::CannotCheck { .. }
                | EngineError::BetTooSmall { .. }
                | EngineError::RaiseTooSmall { .. }
        )
    }

    /// Раздачу дальше вести нельзя – драйвер должен её прервать.
    pub fn is_fatal(&self) -> bool {
        matches!(self, EngineError::DeckExhausted(_) | EngineError::Internal(_))
    }
}
