//! Доменная модель раздачи: карты, колода, фишки, игроки, конфиг стола.

pub mod card;
pub mod chips;
pub mod deck;
pub mod hand;
pub mod player;
pub mod table;

/// Индекс места за столом (0..seats-1). Места фиксированы на всё время игры.
pub type SeatIndex = usize;

pub use card::*;
pub use chips::*;
pub use deck::*;
pub use hand::*;
pub use player::*;
pub use table::*;
