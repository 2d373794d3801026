//! Внешний API игры.
//!
//! - фронт (frontend.rs): трейт, через который движок общается с игроком;
//! - запросы (queries.rs): только чтение состояния;
//! - DTO (dto.rs): структуры для фронта;
//! - ошибки (errors.rs): то, что видит игрок.

pub mod dto;
pub mod errors;
pub mod frontend;
pub mod queries;

pub use dto::*;
pub use errors::*;
pub use frontend::Frontend;
pub use queries::*;
