use serde::{Deserialize, Serialize};

use crate::domain::hand::Hand;
use crate::domain::SeatIndex;

/// Состояние игрока за столом на всю игру.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    /// Индекс в исходном составе (порядок ввода имён).
    pub seat: SeatIndex,
    /// Имя уникально в пределах игры.
    pub name: String,
    pub hand: Hand,
    /// Накопленный счёт за всю игру.
    pub score: i32,
    /// Изменение счёта в последнем раунде.
    pub score_round: i32,
    /// Сколько раз игрок пасовал за всю игру (не за раунд).
    pub number_of_pass: u32,
    /// Выбыл ли игрок. Меняется только false -> true.
    pub is_eliminated: bool,
    /// Итоговое место: 0: ещё в игре / не присвоено.
    pub ranking: usize,
    /// Игрок объявил конец текущего раунда.
    pub finish_round: bool,
}

impl Player {
    pub fn new(seat: SeatIndex, name: impl Into<String>) -> Self {
        Self {
            seat,
            name: name.into(),
            hand: Hand::new(),
            score: 0,
            score_round: 0,
            number_of_pass: 0,
            is_eliminated: false,
            ranking: 0,
            finish_round: false,
        }
    }

    /// Участвует ли игрок в раздачах.
    pub fn is_active(&self) -> bool {
        !self.is_eliminated
    }

    /// Стоимость руки (та же таблица, что и при подсчёте очков раунда).
    pub fn hand_value(&self) -> i32 {
        self.hand.value()
    }

    pub fn can_pass(&self, max_passes: u32) -> bool {
        self.number_of_pass < max_passes
    }

    pub fn pass_turn(&mut self) {
        self.number_of_pass += 1;
    }

    /// Пометить выбывшим. Место присваивается один раз.
    /// Возвращает `false`, если игрок уже выбыл.
    pub fn eliminate(&mut self, ranking: usize) -> bool {
        if self.is_eliminated {
            return false;
        }
        self.is_eliminated = true;
        if self.ranking == 0 {
            self.ranking = ranking;
        }
        true
    }
}
