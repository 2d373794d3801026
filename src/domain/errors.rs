use thiserror::Error;

use crate::domain::card::Card;

/// Ошибки контейнеров карт (колода, сброс, рука).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CardError {
    #[error("Недостаточно карт: запрошено {requested}, осталось {available}")]
    InsufficientCards { requested: usize, available: usize },

    #[error("Карта {0} не найдена")]
    CardNotFound(Card),
}
