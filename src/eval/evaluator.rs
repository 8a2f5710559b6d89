use crate::domain::card::{Card, Rank};
use crate::domain::hand::{HandCategory, HandStrength};

use super::lookup_tables::{detect_straight, rank_to_bit, RankMask};

/// Оценщик силы руки для шоудауна.
///
/// Чистая функция: (карманные карты, борд) → сравнимая сила руки.
/// Движок ничего не знает о том, как именно считается рука.
pub trait HandEvaluator {
    fn evaluate(&self, hole: &[Card], board: &[Card]) -> HandStrength;
}

/// Лучшая 5-карточная рука из всех доступных карт (обычно 2 + 5).
#[derive(Clone, Copy, Debug, Default)]
pub struct SevenCardEvaluator;

impl HandEvaluator for SevenCardEvaluator {
    fn evaluate(&self, hole: &[Card], board: &[Card]) -> HandStrength {
        evaluate_best_hand(hole, board)
    }
}

/// Вычислить лучшую 5-карточную руку из hole + board.
///
/// При 5..7 картах перебираются все 5-карточные комбинации. Если карт
/// меньше пяти (раздача закончилась до ривера), оценивается то, что есть:
/// флеш и стрит в таком случае невозможны.
pub fn evaluate_best_hand(hole: &[Card], board: &[Card]) -> HandStrength {
    let mut all_cards = Vec::with_capacity(hole.len() + board.len());
    all_cards.extend_from_slice(hole);
    all_cards.extend_from_slice(board);

    if all_cards.len() <= 5 {
        return evaluate_five(&all_cards);
    }

    let mut best: Option<HandStrength> = None;
    for_each_five(&all_cards, &mut |five| {
        let s = evaluate_five(five);
        if best.map_or(true, |b| s > b) {
            best = Some(s);
        }
    });

    // при len > 5 хотя бы одна комбинация всегда есть
    best.unwrap_or_else(|| evaluate_five(&all_cards[..5]))
}

/// Перебор всех 5-карточных подмножеств.
fn for_each_five(cards: &[Card], f: &mut impl FnMut(&[Card])) {
    let n = cards.len();
    for a in 0..n {
        for b in (a + 1)..n {
            for c in (b + 1)..n {
                for d in (c + 1)..n {
                    for e in (d + 1)..n {
                        f(&[cards[a], cards[b], cards[c], cards[d], cards[e]]);
                    }
                }
            }
        }
    }
}

/// Оценка не более чем пяти карт.
fn evaluate_five(cards: &[Card]) -> HandStrength {
    let mut rank_counts = [0u8; 15];
    let mut rank_mask: RankMask = 0;
    for card in cards {
        rank_counts[card.rank as usize] += 1;
        rank_mask |= rank_to_bit(card.rank);
    }

    // Группы (ранг, количество): сначала по количеству, потом по рангу.
    let mut groups: Vec<(Rank, u8)> = Rank::ALL
        .iter()
        .rev()
        .filter(|r| rank_counts[**r as usize] > 0)
        .map(|r| (*r, rank_counts[*r as usize]))
        .collect();
    groups.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| b.0.cmp(&a.0)));

    let group_ranks: Vec<Rank> = groups.iter().map(|(r, _)| *r).collect();
    let counts: Vec<u8> = groups.iter().map(|(_, c)| *c).collect();

    let is_flush = cards.len() == 5 && cards.iter().all(|c| c.suit == cards[0].suit);
    let straight_high = if cards.len() == 5 { detect_straight(rank_mask) } else { None };

    if let (true, Some(high)) = (is_flush, straight_high) {
        return HandStrength::from_category_and_ranks(HandCategory::StraightFlush, &[high]);
    }

    match counts.as_slice() {
        [4, ..] => return HandStrength::from_category_and_ranks(HandCategory::FourOfAKind, &group_ranks),
        [3, 2, ..] => return HandStrength::from_category_and_ranks(HandCategory::FullHouse, &group_ranks),
        _ => {}
    }

    if is_flush {
        return HandStrength::from_category_and_ranks(HandCategory::Flush, &group_ranks);
    }
    if let Some(high) = straight_high {
        // стрит сравнивается только по старшей карте (wheel = пятёрка)
        return HandStrength::from_category_and_ranks(HandCategory::Straight, &[high]);
    }

    let category = match counts.as_slice() {
        [3, ..] => HandCategory::ThreeOfAKind,
        [2, 2, ..] => HandCategory::TwoPair,
        [2, ..] => HandCategory::OnePair,
        _ => HandCategory::HighCard,
    };
    HandStrength::from_category_and_ranks(category, &group_ranks)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace().map(|c| c.parse().unwrap()).collect()
    }

    #[test]
    fn wheel_loses_to_six_high_straight() {
        let board = cards("2c 3d 4h 5s Kd");
        let wheel = evaluate_best_hand(&cards("Ac 9d"), &board);
        let six_high = evaluate_best_hand(&cards("6c 9h"), &board);
        assert_eq!(wheel.category, HandCategory::Straight);
        assert!(six_high > wheel);
    }

    #[test]
    fn partial_board_still_ranks_pairs() {
        let pair = evaluate_best_hand(&cards("Ah Ad"), &cards("7c 2s"));
        assert_eq!(pair.category, HandCategory::OnePair);
        let high = evaluate_best_hand(&cards("Kh Qd"), &cards("7c 2s"));
        assert!(pair > high);
    }
}
