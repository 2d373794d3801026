//! Карточная игра на выбывание в духе рамми.
//!
//! Игроки по очереди сбрасывают одиночную карту, группу одного достоинства
//! или отрезок одной масти, добирают одну карту из колоды или сброса и
//! объявляют конец раунда, когда рука достаточно мала. По итогам раунда
//! начисляются очки; набравший порог выбывает. Партия идёт, пока в игре
//! не останется один игрок.
//!
//! Слои:
//!   - `domain`: карты, колода, рука, игроки, правила стола;
//!   - `eval`: проверка комбинаций;
//!   - `engine`: раунд, ходы, очки, партия;
//!   - `api`: фронт и DTO;
//!   - `infra`: RNG, бот, логи.

pub mod api;
pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;
