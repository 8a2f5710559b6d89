use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::hand::{HandStrength, Phase};
use crate::domain::SeatIndex;
use crate::engine::actions::PlayerActionKind;

/// Тип события в раздаче.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum HandEventKind {
    /// Новая раздача началась, кнопка сдвинута.
    HandStarted { hand_number: u64, button: SeatIndex },

    /// Игрок получил карманные карты.
    HoleCardsDealt { seat: SeatIndex, cards: Vec<Card> },

    /// Единственный форсированный бет (small blind в этой игре нет).
    BlindPosted { seat: SeatIndex, amount: Chips },

    /// Принятое действие игрока.
    PlayerActed {
        seat: SeatIndex,
        requested: PlayerActionKind,
        recorded: PlayerActionKind,
        committed: Chips,
        stack_after: Chips,
        pot_after: Chips,
    },

    /// Переход на новую фазу.
    StreetChanged { phase: Phase },

    /// Открыты новые общие карты.
    BoardDealt { phase: Phase, cards: Vec<Card> },

    /// Шоудаун – открытие карт.
    ShowdownReveal {
        seat: SeatIndex,
        hole_cards: Vec<Card>,
        strength: HandStrength,
    },

    /// Выплата из банка.
    PotAwarded { seat: SeatIndex, amount: Chips },

    /// Раздача завершена.
    HandFinished { hand_number: u64 },
}

/// Событие в раздаче с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandEvent {
    pub index: u32,
    pub kind: HandEventKind,
}

/// Полная история одной раздачи.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandHistory {
    pub events: Vec<HandEvent>,
}

impl HandHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: HandEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(HandEvent { index: idx, kind });
    }

    /// Все принятые действия игроков в порядке хода.
    pub fn actions(&self) -> impl Iterator<Item = &HandEventKind> {
        self.events
            .iter()
            .map(|e| &e.kind)
            .filter(|k| matches!(k, HandEventKind::PlayerActed { .. }))
    }
}
