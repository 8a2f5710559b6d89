use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::chips::Chips;
use crate::domain::player::Player;

/// Меньше двух мест играть не с кем.
pub const MIN_SEATS: usize = 2;

/// 23 места * 2 карты + 5 карт борда = 51: больше колода не прокормит.
pub const MAX_SEATS: usize = 23;

/// Ошибки конфигурации стола.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Число мест должно быть от 2 до 23, задано {0}")]
    SeatCount(usize),

    #[error("Большой блайнд должен быть больше нуля")]
    ZeroBigBlind,

    #[error("Пустое имя игрока на месте {0}")]
    EmptyName(usize),

    #[error("Имя игрока {0:?} повторяется")]
    DuplicateName(String),
}

/// Одно место: имя игрока и стартовый стек.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeatConfig {
    pub name: String,
    pub stack: Chips,
}

/// Конфиг стола: единственный форсированный бет и фиксированный список мест.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableConfig {
    pub big_blind: Chips,
    pub seats: Vec<SeatConfig>,
}

impl TableConfig {
    /// Стол с одинаковыми стеками у всех игроков.
    pub fn uniform<S: Into<String>>(
        names: impl IntoIterator<Item = S>,
        stack: Chips,
        big_blind: Chips,
    ) -> Self {
        let seats = names
            .into_iter()
            .map(|name| SeatConfig {
                name: name.into(),
                stack,
            })
            .collect();
        Self { big_blind, seats }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_SEATS..=MAX_SEATS).contains(&self.seats.len()) {
            return Err(ConfigError::SeatCount(self.seats.len()));
        }
        if self.big_blind.is_zero() {
            return Err(ConfigError::ZeroBigBlind);
        }

        let mut seen = HashSet::new();
        for (idx, seat) in self.seats.iter().enumerate() {
            if seat.name.trim().is_empty() {
                return Err(ConfigError::EmptyName(idx));
            }
            if !seen.insert(seat.name.as_str()) {
                return Err(ConfigError::DuplicateName(seat.name.clone()));
            }
        }
        Ok(())
    }

    /// Игроки в порядке мест.
    pub fn players(&self) -> Vec<Player> {
        self.seats
            .iter()
            .map(|s| Player::new(s.name.clone(), s.stack))
            .collect()
    }
}
