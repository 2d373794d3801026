use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};
use crate::domain::errors::CardError;
use crate::engine::RandomSource;

/// Число карт в полной колоде: 52 обычные + 2 джокера.
pub const FULL_DECK_SIZE: usize = 54;

/// Колода для добора. Верх колоды: последний элемент `cards`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    /// Стандартная колода из 54 карт в порядке:
    /// Hearts A..K, Diamonds A..K, Clubs A..K, Spades A..K, X1, X2.
    pub fn standard_54() -> Self {
        let mut cards = Vec::with_capacity(FULL_DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        cards.push(Card::joker(1));
        cards.push(Card::joker(2));
        Deck { cards }
    }

    /// Новая перемешанная колода.
    pub fn new_shuffled<R: RandomSource>(rng: &mut R) -> Self {
        let mut deck = Self::standard_54();
        deck.shuffle(rng);
        deck
    }

    pub fn shuffle<R: RandomSource>(&mut self, rng: &mut R) {
        rng.shuffle(&mut self.cards);
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Верхняя карта без снятия.
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Взять одну карту сверху колоды.
    pub fn draw_one(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Снять n карт сверху. Если карт меньше, колода не меняется.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, CardError> {
        if n > self.cards.len() {
            return Err(CardError::InsufficientCards {
                requested: n,
                available: self.cards.len(),
            });
        }
        let split_at = self.cards.len() - n;
        let mut taken = self.cards.split_off(split_at);
        // Первая снятая карта: бывший верх колоды.
        taken.reverse();
        Ok(taken)
    }

    /// Положить карту на верх колоды.
    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }
}

/// Стопка сброса. Верх: последняя сброшенная карта.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pile {
    pub cards: Vec<Card>,
}

impl Pile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Карта, лежащая сразу под верхними `k` картами.
    pub fn beneath(&self, k: usize) -> Option<&Card> {
        let len = self.cards.len();
        if k >= len {
            return None;
        }
        self.cards.get(len - k - 1)
    }

    /// Убрать карту из стопки по идентичности.
    pub fn take(&mut self, card: &Card) -> Result<Card, CardError> {
        let pos = self
            .cards
            .iter()
            .rposition(|c| c == card)
            .ok_or(CardError::CardNotFound(*card))?;
        Ok(self.cards.remove(pos))
    }

    /// Забрать карту из-под верхнего блока из `k` карт
    /// (только что сброшенных текущим игроком).
    pub fn take_beneath(&mut self, k: usize) -> Result<Card, CardError> {
        let len = self.cards.len();
        if k >= len {
            return Err(CardError::InsufficientCards {
                requested: k + 1,
                available: len,
            });
        }
        let pos = len - k - 1;
        Ok(self.cards.remove(pos))
    }

    /// Забрать все карты, кроме верхней, в порядке снизу вверх.
    pub fn drain_under_top(&mut self) -> Vec<Card> {
        if self.cards.len() <= 1 {
            return Vec::new();
        }
        let top_idx = self.cards.len() - 1;
        self.cards.drain(..top_idx).collect()
    }
}

/// Пополнить пустую колоду из сброса: всё, кроме верхней карты,
/// в обратном порядке (нижняя карта сброса становится верхом колоды).
///
/// Возвращает число перенесённых карт.
pub fn replenish_from_pile(deck: &mut Deck, pile: &mut Pile) -> usize {
    if !deck.is_empty() {
        return 0;
    }
    let moved = pile.drain_under_top();
    let count = moved.len();
    for card in moved.into_iter().rev() {
        deck.add(card);
    }
    count
}
