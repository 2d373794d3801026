//! Движок раунда и партии: очередь ходов, сброс и добор, подсчёт очков,
//! выбывание.
//!
//! Высокоуровневые объекты: `RoundEngine`, `Game`
//! Основные операции:
//!   - `start_round` – раздать карты и открыть сброс
//!   - `apply_turn` – применить решение игрока целиком
//!   - `select_card` / `commit_discard` / `pick_up` / `pass_turn` / `declare_end` – пошаговый ход
//!   - `Game::run` – играть раунды, пока не останется один игрок

pub mod actions;
pub mod errors;
pub mod game;
pub mod game_loop;
pub mod round_history;
pub mod scoring;
pub mod turn_order;
pub mod validation;

pub use actions::{PickupSource, TurnDecision};
pub use errors::EngineError;
pub use game::Game;
pub use game_loop::{
    apply_turn, cards_in_play, commit_discard, declare_end, deselect_card, end_turn, pass_turn,
    pick_up, select_card, start_round, RoundEngine, RoundStatus, RoundSummary, TurnPhase,
};
pub use round_history::{RoundEvent, RoundEventKind, RoundHistory};
pub use scoring::{apply_eliminations, declare_end_of_round, Elimination, RoundScore};
pub use turn_order::TurnOrder;

/// RNG интерфейс для engine.
/// Реализации в infra::rng (обёртки над `rand`), в тестах свои.
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
