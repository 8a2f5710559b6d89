//! Движок раздачи no-limit покера с одним блайндом.
//!
//! Слои:
//! - `domain` – карты, колода, фишки, игроки, конфиг стола;
//! - `eval` – оценка силы руки;
//! - `engine` – раздача: ставки, улицы, шоудаун;
//! - `api` – представление стола для адаптеров ввода/вывода;
//! - `driver` – цикл "спросить решение – применить" и боты;
//! - `infra` – RNG, логгер, загрузка конфига.

pub mod api;
pub mod domain;
pub mod driver;
pub mod engine;
pub mod eval;
pub mod infra;
