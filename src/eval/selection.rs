use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::eval::combination::{classify, minimum_size_hint, Combination};

/// Отказ при попытке добавить карту в выбор.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionReject {
    /// Карта уже выбрана.
    AlreadySelected(Card),
    /// С этой картой набор перестаёт быть допустимой комбинацией.
    InvalidCombination(Card),
}

/// Карты, отмеченные игроком в текущем ходе, и флаг «минимума».
///
/// Каждое переключение пересчитывает флаг по полному набору
/// и возвращает его новое значение.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Selection {
    cards: Vec<Card>,
    minimum_met: bool,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
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

    pub fn minimum_met(&self) -> bool {
        self.minimum_met
    }

    pub fn combination(&self) -> Option<Combination> {
        classify(&self.cards)
    }

    /// Можно ли сбросить выбор: он не пуст, допустим и «минимум» выполнен.
    pub fn is_committable(&self) -> bool {
        !self.cards.is_empty() && self.minimum_met && self.combination().is_some()
    }

    /// Отметить карту. При недопустимом наборе карта не добавляется.
    pub fn select(&mut self, card: Card) -> Result<bool, SelectionReject> {
        if self.cards.contains(&card) {
            return Err(SelectionReject::AlreadySelected(card));
        }
        self.cards.push(card);
        if classify(&self.cards).is_none() {
            self.cards.pop();
            self.minimum_met = minimum_size_hint(&self.cards);
            return Err(SelectionReject::InvalidCombination(card));
        }
        self.minimum_met = minimum_size_hint(&self.cards);
        Ok(self.minimum_met)
    }

    /// Снять отметку. Разрешено всегда; отсутствующая карта игнорируется.
    pub fn deselect(&mut self, card: &Card) -> bool {
        self.cards.retain(|c| c != card);
        self.minimum_met = minimum_size_hint(&self.cards);
        self.minimum_met
    }

    pub fn clear(&mut self) {
        self.cards.clear();
        self.minimum_met = false;
    }

    /// Отдать карты выбора, очистив его.
    pub fn take(&mut self) -> Vec<Card> {
        self.minimum_met = false;
        std::mem::take(&mut self.cards)
    }
}
