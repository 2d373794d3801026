//! Инфраструктурный слой вокруг движка:
//! - RNG-реализации для движка;
//! - бот, играющий через `Frontend`;
//! - подключение логов.

pub mod bot;
pub mod logging;
pub mod rng;

pub use bot::SimpleBot;
pub use rng::*;
