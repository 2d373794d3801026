use crate::domain::card::{Card, Rank};

/// Стоимость ранга при подсчёте руки, индекс = `Rank::index()`.
///
///   A  2  3  4  5  6  7  8  9  T  J  Q  K
///   1  2  3  4  5  6  7  8  9 10 10 10 10
pub const COUNT_VALUES: [i32; 13] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 10, 10, 10];

/// Стоимость джокера при подсчёте руки.
pub const JOKER_COUNT_VALUE: i32 = -1;

/// Порядок ранга внутри серии одной масти, индекс = `Rank::index()`.
/// Туз только младший. У джокера значения нет, в серию он не входит.
///
///   A  2  3  4  5  6  7  8  9  T  J  Q  K
///   1  2  3  4  5  6  7  8  9 10 11 12 13
pub const RUN_VALUES: [u8; 13] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13];

#[inline]
pub fn count_value(card: &Card) -> i32 {
    match card.rank() {
        Some(rank) => COUNT_VALUES[rank.index()],
        None => JOKER_COUNT_VALUE,
    }
}

#[inline]
pub fn run_value(card: &Card) -> Option<u8> {
    card.rank().map(|rank: Rank| RUN_VALUES[rank.index()])
}
