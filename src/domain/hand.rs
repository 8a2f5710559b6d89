use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::SeatIndex;

/// Фаза раздачи. Идёт строго вперёд, внутри раздачи не повторяется.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Phase {
    Setup,
    PreFlop,
    Flop,
    Turn,
    River,
    Showdown,
}

impl Phase {
    /// Следующая фаза и сколько общих карт при переходе открывается.
    /// Для `Showdown` следующей фазы нет.
    pub fn next(self) -> Option<(Phase, usize)> {
        match self {
            Phase::Setup => Some((Phase::PreFlop, 0)),
            Phase::PreFlop => Some((Phase::Flop, 3)),
            Phase::Flop => Some((Phase::Turn, 1)),
            Phase::Turn => Some((Phase::River, 1)),
            Phase::River => Some((Phase::Showdown, 0)),
            Phase::Showdown => None,
        }
    }

    /// Идёт ли в этой фазе торговля.
    pub fn is_betting(self) -> bool {
        matches!(self, Phase::PreFlop | Phase::Flop | Phase::Turn | Phase::River)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::Setup => "setup",
            Phase::PreFlop => "pre-flop",
            Phase::Flop => "flop",
            Phase::Turn => "turn",
            Phase::River => "river",
            Phase::Showdown => "showdown",
        };
        f.write_str(s)
    }
}

/// Категория покерной руки по силе.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandCategory {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

/// Сила руки: сначала категория, потом значение для разрешения ничьих.
/// Порядок полей важен: derive(Ord) сравнивает их лексикографически.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandStrength {
    pub category: HandCategory,
    pub tiebreak: u32,
}

/// Результат конкретного места в раздаче.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerHandResult {
    pub seat: SeatIndex,
    pub name: String,
    /// Сила руки, если её оценивали на шоудауне.
    pub strength: Option<HandStrength>,
    /// Сколько фишек игрок забрал из банка.
    pub won: Chips,
    pub is_winner: bool,
}

/// Краткое описание завершённой раздачи.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandSummary {
    pub hand_number: u64,
    pub phase_reached: Phase,
    pub board: Vec<Card>,
    pub total_pot: Chips,
    pub results: Vec<PlayerHandResult>,
}

impl HandSummary {
    pub fn winners(&self) -> impl Iterator<Item = &PlayerHandResult> {
        self.results.iter().filter(|r| r.is_winner)
    }
}
