use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::errors::CardError;
use crate::eval::lookup_tables::count_value;

/// Рука игрока. Карты всегда отсортированы по рангу, затем по масти
/// (джокеры в конце).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        let mut hand = Self { cards };
        hand.sort();
        hand
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    pub fn sort(&mut self) {
        self.cards.sort();
    }

    /// Добавить карту с сохранением сортировки.
    pub fn insert(&mut self, card: Card) {
        let pos = self.cards.partition_point(|c| c < &card);
        self.cards.insert(pos, card);
    }

    pub fn remove(&mut self, card: &Card) -> Result<Card, CardError> {
        let pos = self
            .cards
            .iter()
            .position(|c| c == card)
            .ok_or(CardError::CardNotFound(*card))?;
        Ok(self.cards.remove(pos))
    }

    /// Забрать все карты (конец раунда).
    pub fn clear(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards)
    }

    /// Стоимость руки по таблице подсчёта: A=1, 2–9 по номиналу,
    /// 10/J/Q/K = 10, джокер = −1.
    pub fn value(&self) -> i32 {
        self.cards.iter().map(count_value).sum()
    }
}
