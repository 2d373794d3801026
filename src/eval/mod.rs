//! Проверка комбинаций сбрасываемых карт.
//!
//! Основные функции:
//!   `classify(cards) -> Option<Combination>`
//!   `minimum_size_hint(cards) -> bool`
//!   `Selection`: пошаговый выбор карт в течение хода.

pub mod combination;
pub mod lookup_tables;
pub mod selection;

pub use combination::{classify, minimum_size_hint, Combination};
pub use selection::{Selection, SelectionReject};
