use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::hand::HandStrength;
use crate::domain::{Player, SeatIndex};
use crate::eval::HandEvaluator;

/// Поделить банк между победителями.
///
/// Каждый получает `pot / n`, остаток раздаётся по одной фишке первым
/// победителям в порядке оценки. Результат в том же порядке, что и победители.
pub fn split_pot(pot: Chips, winners: usize) -> Vec<Chips> {
    if winners == 0 {
        return Vec::new();
    }
    let n = winners as u64;
    let share = pot.0 / n;
    let remainder = pot.0 % n;

    (0..n)
        .map(|i| Chips(share + u64::from(i < remainder)))
        .collect()
}

/// Оценить руки претендентов в заданном порядке.
pub fn rank_contenders<E: HandEvaluator + ?Sized>(
    evaluator: &E,
    players: &[Player],
    order: &[SeatIndex],
    board: &[Card],
) -> Vec<(SeatIndex, HandStrength)> {
    order
        .iter()
        .map(|&seat| (seat, evaluator.evaluate(&players[seat].hole_cards, board)))
        .collect()
}

/// Все места с лучшей рукой, в порядке оценки.
pub fn best_hands(ranked: &[(SeatIndex, HandStrength)]) -> Vec<SeatIndex> {
    let Some(best) = ranked.iter().map(|(_, s)| *s).max() else {
        return Vec::new();
    };
    ranked
        .iter()
        .filter(|(_, s)| *s == best)
        .map(|(seat, _)| *seat)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::hand::HandCategory;

    #[test]
    fn remainder_goes_to_first_winners() {
        assert_eq!(split_pot(Chips(100), 3), vec![Chips(34), Chips(33), Chips(33)]);
        assert_eq!(split_pot(Chips(9), 3), vec![Chips(3), Chips(3), Chips(3)]);
        assert_eq!(split_pot(Chips(11), 4), vec![Chips(3), Chips(3), Chips(3), Chips(2)]);
        assert_eq!(split_pot(Chips(50), 1), vec![Chips(50)]);
        assert!(split_pot(Chips(50), 0).is_empty());
    }

    #[test]
    fn ties_keep_evaluation_order() {
        let strong = HandStrength { category: HandCategory::Flush, tiebreak: 7 };
        let weak = HandStrength { category: HandCategory::OnePair, tiebreak: 99 };
        let ranked = vec![(2, weak), (3, strong), (0, strong), (1, weak)];
        assert_eq!(best_hands(&ranked), vec![3, 0]);
    }
}
