use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::{Player, SeatIndex};
use crate::engine::positions::walk_passes;

/// Состояние раунда ставок на текущей улице.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BettingState {
    /// Уровень ставки, до которого должны дотянуться игроки.
    pub current_bet: Chips,
    /// Размер последнего повышения (общий уровень минус предыдущий).
    pub min_raise: Chips,
}

impl BettingState {
    pub fn new(big_blind: Chips) -> Self {
        Self {
            current_bet: Chips::ZERO,
            min_raise: big_blind,
        }
    }

    /// Новая улица: ставок нет, минимальный рейз снова равен BB.
    pub fn reset_for_street(&mut self, big_blind: Chips) {
        self.current_bet = Chips::ZERO;
        self.min_raise = big_blind;
    }

    /// Принятый bet/raise до общего уровня `total`.
    pub fn raise_to(&mut self, total: Chips) {
        self.min_raise = total.saturating_sub(self.current_bet);
        self.current_bet = total;
    }

    /// Сколько игроку не хватает до текущей ставки.
    pub fn to_call(&self, player: &Player) -> Chips {
        self.current_bet.saturating_sub(player.bet_amount)
    }
}

/// На новой улице торговаться некому: активных нет, или активный остался
/// один и ему нечего уравнивать (или он вообще единственный в раздаче).
pub fn no_one_left_to_bet(players: &[Player], current_bet: Chips) -> bool {
    let mut active = players.iter().filter(|p| p.can_act());
    match (active.next(), active.next()) {
        (None, _) => true,
        (Some(lone), None) => {
            lone.bet_amount >= current_bet
                || players.iter().filter(|p| p.is_in_hand()).count() <= 1
        }
        _ => false,
    }
}

/// Завершён ли раунд ставок.
///
/// Раунд закончен, если:
/// (a) активных (не all-in) игроков осталось не больше одного, или
/// (b) все активные уравняли `current_bet` и указатель хода, пройдя круг,
///     встал на место после кнопки (или прошёл через него, если само это
///     место действовать не может).
///
/// `pointer` – место, на которое указатель сдвинулся после последнего хода.
pub fn is_round_complete(
    players: &[Player],
    current_bet: Chips,
    pointer: SeatIndex,
    wrap_seat: SeatIndex,
) -> bool {
    let active = players.iter().filter(|p| p.can_act()).count();
    if active <= 1 {
        return true;
    }

    let all_matched = players
        .iter()
        .filter(|p| p.can_act())
        .all(|p| p.bet_amount == current_bet);

    all_matched && walk_passes(players, pointer, wrap_seat)
}
