use crate::domain::Player;
use crate::engine::actions::TurnDecision;

use super::dto::{Standing, TurnPrompt};
use super::errors::InvalidActionKind;

/// Внешний интерфейс игры: экран, консоль или бот.
///
/// Вызовы блокирующие: движок спрашивает и ждёт ответа.
/// `notify_*` ничего не возвращают.
pub trait Frontend {
    /// Имена игроков в порядке рассадки.
    fn prompt_player_roster(&mut self) -> Vec<String>;

    /// Решение текущего игрока на ход.
    fn prompt_turn_action(&mut self, prompt: &TurnPrompt) -> TurnDecision;

    fn notify_round_end(&mut self, players: &[Player], round_number: u32);

    fn notify_game_end(&mut self, standings: &[Standing]);

    /// Ввод отклонён; следом придёт тот же запрос.
    fn notify_invalid_action(&mut self, kind: InvalidActionKind);
}
