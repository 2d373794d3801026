use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::eval::lookup_tables::run_value;

/// Тип допустимой комбинации сбрасываемых карт.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Combination {
    /// Одна карта.
    Single,
    /// Две и более карты одного ранга (масть не важна).
    Group,
    /// Две и более карты одной масти подряд по рангу.
    Run,
}

/// Классифицировать набор различных карт. `None`: набор недопустим.
pub fn classify(cards: &[Card]) -> Option<Combination> {
    match cards {
        [] => None,
        [_] => Some(Combination::Single),
        [first, rest @ ..] => {
            if rest.iter().all(|c| c.same_rank(first)) {
                return Some(Combination::Group);
            }
            if same_suit(cards) && is_consecutive(cards) {
                return Some(Combination::Run);
            }
            None
        }
    }
}

/// Все карты одной масти. У джокера масти нет, поэтому с ним никогда.
pub fn same_suit(cards: &[Card]) -> bool {
    match cards.first().and_then(|c| c.suit()) {
        Some(suit) => cards.iter().all(|c| c.suit() == Some(suit)),
        None => false,
    }
}

/// `max - min == len - 1` по таблице серий.
/// Дубликаты исключены тем, что карты одной масти различны.
pub fn is_consecutive(cards: &[Card]) -> bool {
    let values: Option<Vec<u8>> = cards.iter().map(run_value).collect();
    let Some(values) = values else {
        return false;
    };
    let (Some(min), Some(max)) = (values.iter().min(), values.iter().max()) else {
        return false;
    };
    (max - min) as usize == values.len() - 1
}

/// Подсказка «минимума»: можно ли уже сбросить текущий выбор.
///
/// - одна карта, группа: да;
/// - одна масть из двух карт: нет (подряд или с разрывом);
/// - одна масть из трёх и более: да (подряд или с разрывом);
/// - пусто или смешанный набор: нет.
pub fn minimum_size_hint(cards: &[Card]) -> bool {
    match cards.len() {
        0 => false,
        1 => true,
        len => {
            if classify(cards) == Some(Combination::Group) {
                true
            } else if same_suit(cards) {
                len > 2
            } else {
                false
            }
        }
    }
}
