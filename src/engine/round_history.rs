use serde::{Deserialize, Serialize};

use crate::domain::{Card, SeatIndex};
use crate::engine::actions::PickupSource;
use crate::eval::Combination;

/// Тип события в раунде.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum RoundEventKind {
    /// Новый раунд начался.
    RoundStarted { round_number: u32, first_seat: SeatIndex },

    /// Игрок получил стартовую руку.
    HandDealt { seat: SeatIndex, cards: Vec<Card> },

    /// Первая открытая карта сброса.
    PileOpened { card: Card },

    /// Игрок сбросил комбинацию.
    Discarded {
        seat: SeatIndex,
        combination: Combination,
        cards: Vec<Card>,
    },

    /// Игрок добрал карту.
    PickedUp {
        seat: SeatIndex,
        source: PickupSource,
        card: Card,
    },

    Passed { seat: SeatIndex },

    /// Колода пополнена из сброса.
    DeckReplenished { moved: usize },

    /// Игрок объявил конец раунда.
    Declared { seat: SeatIndex, hand_value: i32 },

    PlayerEliminated { seat: SeatIndex, ranking: usize },

    RoundFinished { round_number: u32 },
}

/// Событие в раунде с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RoundEvent {
    pub index: u32,
    pub kind: RoundEventKind,
}

/// Полная история раунда.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct RoundHistory {
    pub events: Vec<RoundEvent>,
}

impl RoundHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: RoundEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(RoundEvent { index: idx, kind });
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn last(&self) -> Option<&RoundEventKind> {
        self.events.last().map(|e| &e.kind)
    }
}
