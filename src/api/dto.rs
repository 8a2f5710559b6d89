use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::hand::{HandSummary, Phase};
use crate::domain::player::PlayerStatus;
use crate::domain::SeatIndex;
use crate::engine::DecisionPoint;

/// Что видно из карманных карт игрока.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "cards", rename_all = "snake_case")]
pub enum HoleCardsView {
    /// Карты видны (свой игрок или вскрытие на шоудауне).
    Visible(Vec<Card>),
    /// Карты есть, но закрыты.
    Hidden,
    Folded,
    Out,
}

/// DTO игрока за столом.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerViewDto {
    pub seat: SeatIndex,
    pub name: String,
    pub stack: Chips,
    pub bet_amount: Chips,
    pub status: PlayerStatus,
    pub is_button: bool,
    pub is_to_act: bool,
    pub cards: HoleCardsView,
}

/// DTO стола – всё, что нужно адаптеру ввода/вывода.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableViewDto {
    pub hand_number: u64,
    pub phase: Phase,
    pub pot: Chips,
    pub current_bet: Chips,
    pub min_raise: Chips,
    pub big_blind: Chips,
    pub button: SeatIndex,
    /// Чей ход, если раздача ждёт решения.
    pub active_seat: Option<SeatIndex>,
    pub community_cards: Vec<Card>,
    pub players: Vec<PlayerViewDto>,
    pub decision: Option<DecisionPoint>,
    /// Итог последней раздачи (после шоудауна).
    pub last_hand: Option<HandSummary>,
}
