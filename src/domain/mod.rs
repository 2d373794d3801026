//! Доменная модель: карты, колода и сброс, рука, игроки, стол и его правила.

pub mod card;
pub mod deck;
pub mod errors;
pub mod hand;
pub mod player;
pub mod table;

/// Индекс игрока в исходном составе.
pub type SeatIndex = usize;

// Реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use deck::*;
pub use errors::*;
pub use hand::*;
pub use player::*;
pub use table::*;
