//! Инфраструктура вокруг движка:
//! - RNG-реализации для колоды;
//! - логгер для бинарников;
//! - загрузка конфига стола.

pub mod config;
pub mod logging;
pub mod rng;

pub use config::{load_table_config, parse_table_config, LoadError};
pub use logging::init_logging;
pub use rng::{DeterministicRng, SystemRng};
