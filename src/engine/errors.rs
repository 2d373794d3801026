use thiserror::Error;

use crate::domain::{Card, CardError, SeatIndex};
use crate::engine::game_loop::TurnPhase;

/// Ошибки движка раунда и игры.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error(transparent)]
    Cards(#[from] CardError),

    #[error("Недопустимая комбинация карт (карта {0})")]
    InvalidCombination(Card),

    #[error("Выбранные карты нельзя сбросить: набор не завершён")]
    IncompleteCombination,

    #[error("Карта {0} уже выбрана")]
    AlreadySelected(Card),

    #[error("Карты {0} нет в руке игрока")]
    NotInHand(Card),

    #[error("Не сыграно ни одной карты")]
    NoCardPlayed,

    #[error("Карты сброшены, но не выбран источник добора")]
    MissingPickup,

    #[error("Игрок {0} больше не может пасовать")]
    PassUnavailable(SeatIndex),

    #[error("Игрок {0} не может объявить конец раунда")]
    DeclareUnavailable(SeatIndex),

    #[error("Игрок с именем «{0}» уже есть")]
    DuplicatePlayerName(String),

    #[error("Недопустимое число игроков: {count} (нужно от {min} до {max})")]
    InvalidPlayerCount { count: usize, min: usize, max: usize },

    #[error("Действие недопустимо в фазе {0:?}")]
    IllegalPhase(TurnPhase),

    #[error("Раунд не активен")]
    NoActiveRound,

    #[error("Раунд уже идёт")]
    RoundAlreadyInProgress,

    #[error("Недостаточно активных игроков для раунда")]
    NotEnoughPlayers,

    #[error("Игра окончена")]
    GameOver,
}

impl EngineError {
    /// Ошибка ввода игрока: сообщаем фронту и спрашиваем снова.
    /// Всё остальное считается нарушением согласованности состояния.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            EngineError::InvalidCombination(_)
                | EngineError::IncompleteCombination
                | EngineError::AlreadySelected(_)
                | EngineError::NotInHand(_)
                | EngineError::NoCardPlayed
                | EngineError::MissingPickup
                | EngineError::PassUnavailable(_)
                | EngineError::DeclareUnavailable(_)
                | EngineError::DuplicatePlayerName(_)
                | EngineError::InvalidPlayerCount { .. }
        )
    }
}
