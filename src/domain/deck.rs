use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::card::{Card, Rank, Suit};
use crate::engine::RandomSource;

/// Колода не может выдать запрошенные карты.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DeckError {
    #[error("В колоде осталось {remaining} карт, запрошено {requested}")]
    Exhausted { requested: usize, remaining: usize },
}

/// Колода карт: упорядоченный список, раздача идёт с начала.
/// Каждая карта выдаётся не более одного раза.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Стандартная 52-карточная колода в порядке:
    /// Clubs 2..A, Diamonds 2..A, Hearts 2..A, Spades 2..A.
    pub fn standard_52() -> Self {
        let cards = Suit::ALL
            .iter()
            .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Card::new(rank, suit)))
            .collect();
        Deck { cards }
    }

    /// Перемешанная стандартная колода.
    pub fn shuffled<R: RandomSource>(rng: &mut R) -> Self {
        let mut cards: Vec<Card> = Deck::standard_52().cards.into();
        rng.shuffle(&mut cards);
        Deck { cards: cards.into() }
    }

    /// Колода с заранее заданным порядком (тесты, реплеи).
    /// Первая карта списка будет выдана первой.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Deck { cards: cards.into() }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Снять n карт сверху. Либо все n, либо ошибка и колода не меняется.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, DeckError> {
        if self.cards.len() < n {
            return Err(DeckError::Exhausted {
                requested: n,
                remaining: self.cards.len(),
            });
        }
        Ok(self.cards.drain(..n).collect())
    }
}

impl Default for Deck {
    fn default() -> Self {
        Deck::standard_52()
    }
}
