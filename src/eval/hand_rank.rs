use crate::domain::card::Rank;
use crate::domain::hand::{HandCategory, HandStrength};

impl HandStrength {
    /// Собрать силу руки из категории и до 5 значимых рангов
    /// (от старшего к младшему).
    ///
    /// Схема кодирования tiebreak (u32):
    ///   [r0:4][r1:4][r2:4][r3:4][r4:4]
    /// Rank: 2..14 влазит в 4 бита, недостающие ранги = 0.
    pub fn from_category_and_ranks(category: HandCategory, ranks: &[Rank]) -> Self {
        let tiebreak = (0..5).fold(0u32, |acc, i| {
            let nibble = ranks.get(i).map(|r| *r as u32).unwrap_or(0);
            (acc << 4) | nibble
        });
        HandStrength { category, tiebreak }
    }
}

/// Человеческое описание руки по категории.
pub fn describe_hand(strength: HandStrength) -> &'static str {
    match strength.category {
        HandCategory::HighCard => "High card",
        HandCategory::OnePair => "One pair",
        HandCategory::TwoPair => "Two pair",
        HandCategory::ThreeOfAKind => "Three of a kind",
        HandCategory::Straight => "Straight",
        HandCategory::Flush => "Flush",
        HandCategory::FullHouse => "Full house",
        HandCategory::FourOfAKind => "Four of a kind",
        HandCategory::StraightFlush => "Straight flush",
    }
}
