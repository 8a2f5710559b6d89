//! Внешний API движка для адаптеров ввода/вывода.
//!
//! - DTO (dto.rs) – сериализуемые представления стола;
//! - запросы (queries.rs) – построение представления "глазами" места.

pub mod dto;
pub mod queries;

pub use dto::*;
pub use queries::*;
