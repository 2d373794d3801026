use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::EngineError;

/// Ошибка ввода, о которой сообщаем фронту перед повторным запросом.
#[derive(Clone, Copy, Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum InvalidActionKind {
    #[error("Неверная комбинация карт")]
    WrongCombination,

    #[error("Сначала нужно сыграть хотя бы одну карту")]
    NoCardPlayed,

    #[error("Выберите, откуда добрать карту")]
    MissingPickup,

    #[error("Пас уже использован")]
    PassUnavailable,

    #[error("Объявить конец раунда пока нельзя")]
    DeclareUnavailable,

    #[error("Имена игроков должны быть уникальными")]
    DuplicatePlayerName,

    #[error("Недопустимое число игроков")]
    InvalidPlayerCount,
}

impl TryFrom<&EngineError> for InvalidActionKind {
    /// Фатальная ошибка движка возвращается как есть.
    type Error = EngineError;

    fn try_from(err: &EngineError) -> Result<Self, Self::Error> {
        match err {
            EngineError::InvalidCombination(_)
            | EngineError::IncompleteCombination
            | EngineError::AlreadySelected(_)
            | EngineError::NotInHand(_) => Ok(InvalidActionKind::WrongCombination),
            EngineError::NoCardPlayed => Ok(InvalidActionKind::NoCardPlayed),
            EngineError::MissingPickup => Ok(InvalidActionKind::MissingPickup),
            EngineError::PassUnavailable(_) => Ok(InvalidActionKind::PassUnavailable),
            EngineError::DeclareUnavailable(_) => Ok(InvalidActionKind::DeclareUnavailable),
            EngineError::DuplicatePlayerName(_) => Ok(InvalidActionKind::DuplicatePlayerName),
            EngineError::InvalidPlayerCount { .. } => Ok(InvalidActionKind::InvalidPlayerCount),
            other => Err(other.clone()),
        }
    }
}
