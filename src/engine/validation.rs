use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::hand::Phase;
use crate::domain::player::Player;
use crate::domain::SeatIndex;
use crate::engine::actions::PlayerActionKind;
use crate::engine::betting::BettingState;
use crate::engine::errors::EngineError;

/// Действие после проверки: каким оно будет записано, сколько фишек
/// просить у игрока и какой станет ставка стола.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedAction {
    pub kind: PlayerActionKind,
    pub chips: Chips,
    /// `Some` – действие поднимает `current_bet` до этого уровня.
    pub new_current_bet: Option<Chips>,
}

/// Проверить действие игрока при текущем состоянии ставок и нормализовать его.
///
/// Порядок правил:
/// - check запрещён, если есть что уравнивать;
/// - call всегда равен недостающей сумме;
/// - bet/raise: при `current_bet == 0` это bet с минимумом в 1 фишку,
///   иначе raise с минимальным общим уровнем `current_bet`.
///
/// При ошибке состояние никто не трогал.
pub fn resolve_action(
    player: &Player,
    action: &PlayerActionKind,
    betting: &BettingState,
) -> Result<ResolvedAction, EngineError> {
    let to_call = betting.to_call(player);

    match action {
        PlayerActionKind::Fold => Ok(ResolvedAction {
            kind: PlayerActionKind::Fold,
            chips: Chips::ZERO,
            new_current_bet: None,
        }),

        PlayerActionKind::Check => {
            if !to_call.is_zero() {
                return Err(EngineError::CannotCheck { to_call });
            }
            Ok(ResolvedAction {
                kind: PlayerActionKind::Check,
                chips: Chips::ZERO,
                new_current_bet: None,
            })
        }

        PlayerActionKind::Call => Ok(ResolvedAction {
            kind: PlayerActionKind::Call,
            chips: to_call,
            new_current_bet: None,
        }),

        PlayerActionKind::Bet(amount) | PlayerActionKind::Raise(amount) => {
            let amount = *amount;
            let kind = if betting.current_bet.is_zero() {
                if amount < Chips(1) {
                    return Err(EngineError::BetTooSmall { min: Chips(1) });
                }
                PlayerActionKind::Bet(amount)
            } else {
                if amount < betting.current_bet {
                    return Err(EngineError::RaiseTooSmall {
                        min: betting.current_bet,
                    });
                }
                PlayerActionKind::Raise(amount)
            };

            // Уровень не может быть выше того, что игрок реально способен поставить.
            let level = amount.min(player.bet_amount + player.stack);
            Ok(ResolvedAction {
                kind,
                chips: level.saturating_sub(player.bet_amount),
                new_current_bet: (level > betting.current_bet).then_some(level),
            })
        }

        PlayerActionKind::AllIn => {
            let total = player.bet_amount + player.stack;
            Ok(ResolvedAction {
                kind: PlayerActionKind::AllIn,
                chips: player.stack,
                new_current_bet: (total > betting.current_bet).then_some(total),
            })
        }
    }
}

/// Точка решения для внешнего кода: чей ход и что ему можно.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DecisionPoint {
    pub seat: SeatIndex,
    pub name: String,
    pub phase: Phase,
    pub stack: Chips,
    pub bet_amount: Chips,
    pub current_bet: Chips,
    /// Сколько нужно доплатить для call.
    pub to_call: Chips,
    pub can_check: bool,
    /// Минимальный допустимый общий уровень для bet/raise.
    pub min_total: Chips,
    /// Уровень, который даёт all-in.
    pub max_total: Chips,
}

impl DecisionPoint {
    pub fn new(seat: SeatIndex, player: &Player, phase: Phase, betting: &BettingState) -> Self {
        let to_call = betting.to_call(player);
        let min_total = if betting.current_bet.is_zero() {
            Chips(1)
        } else {
            betting.current_bet
        };

        Self {
            seat,
            name: player.name.clone(),
            phase,
            stack: player.stack,
            bet_amount: player.bet_amount,
            current_bet: betting.current_bet,
            to_call,
            can_check: to_call.is_zero(),
            min_total,
            max_total: player.bet_amount + player.stack,
        }
    }

    /// Ставка на улице уже есть – агрессия будет raise, а не bet.
    pub fn facing_bet(&self) -> bool {
        !self.current_bet.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player_with(stack: u64, bet: u64) -> Player {
        let mut p = Player::new("hero", Chips(stack));
        p.bet_amount = Chips(bet);
        p
    }

    fn betting(current: u64) -> BettingState {
        let mut bs = BettingState::new(Chips(20));
        bs.current_bet = Chips(current);
        bs
    }

    #[test]
    fn check_against_bet_is_rejected() {
        let err = resolve_action(&player_with(1000, 0), &PlayerActionKind::Check, &betting(20));
        assert_eq!(err, Err(EngineError::CannotCheck { to_call: Chips(20) }));
    }

    #[test]
    fn call_is_normalized_to_shortfall() {
        let r = resolve_action(&player_with(1000, 20), &PlayerActionKind::Call, &betting(60)).unwrap();
        assert_eq!(r.chips, Chips(40));
        assert_eq!(r.new_current_bet, None);
    }

    #[test]
    fn raise_without_bet_becomes_bet() {
        let r = resolve_action(&player_with(1000, 0), &PlayerActionKind::Raise(Chips(5)), &betting(0)).unwrap();
        assert_eq!(r.kind, PlayerActionKind::Bet(Chips(5)));
        assert_eq!(r.new_current_bet, Some(Chips(5)));

        let zero = resolve_action(&player_with(1000, 0), &PlayerActionKind::Bet(Chips::ZERO), &betting(0));
        assert_eq!(zero, Err(EngineError::BetTooSmall { min: Chips(1) }));
    }

    #[test]
    fn raise_below_current_bet_is_rejected() {
        let err = resolve_action(&player_with(1000, 0), &PlayerActionKind::Bet(Chips(19)), &betting(20));
        assert_eq!(err, Err(EngineError::RaiseTooSmall { min: Chips(20) }));

        let ok = resolve_action(&player_with(1000, 20), &PlayerActionKind::Bet(Chips(60)), &betting(20)).unwrap();
        assert_eq!(ok.kind, PlayerActionKind::Raise(Chips(60)));
        assert_eq!(ok.chips, Chips(40));
    }

    #[test]
    fn raise_level_is_capped_by_stack() {
        let r = resolve_action(&player_with(280, 20), &PlayerActionKind::Raise(Chips(5000)), &betting(20)).unwrap();
        assert_eq!(r.chips, Chips(280));
        assert_eq!(r.new_current_bet, Some(Chips(300)));

        let short = resolve_action(&player_with(10, 0), &PlayerActionKind::Raise(Chips(40)), &betting(20)).unwrap();
        assert_eq!(short.chips, Chips(10));
        assert_eq!(short.new_current_bet, None);
    }

    #[test]
    fn short_all_in_does_not_lift_the_bet() {
        let r = resolve_action(&player_with(15, 0), &PlayerActionKind::AllIn, &betting(20)).unwrap();
        assert_eq!(r.chips, Chips(15));
        assert_eq!(r.new_current_bet, None);

        let big = resolve_action(&player_with(500, 20), &PlayerActionKind::AllIn, &betting(20)).unwrap();
        assert_eq!(big.new_current_bet, Some(Chips(520)));
    }
}
