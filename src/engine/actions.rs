use serde::{Deserialize, Serialize};

use crate::domain::Card;

/// Откуда игрок добирает карту после сброса.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PickupSource {
    Deck,
    Pile,
}

/// Решение игрока на один ход: ответ фронта на запрос хода.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TurnDecision {
    /// Сбрасываемые карты в порядке выбора.
    pub discarded: Vec<Card>,
    pub pickup: Option<PickupSource>,
    pub declared_end: bool,
    pub passed: bool,
}

impl TurnDecision {
    pub fn play(discarded: Vec<Card>, pickup: PickupSource) -> Self {
        Self {
            discarded,
            pickup: Some(pickup),
            ..Self::default()
        }
    }

    pub fn pass() -> Self {
        Self {
            passed: true,
            ..Self::default()
        }
    }

    pub fn declare_end() -> Self {
        Self {
            declared_end: true,
            ..Self::default()
        }
    }
}
