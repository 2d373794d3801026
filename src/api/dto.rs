use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::player::Player;
use crate::domain::SeatIndex;
use crate::engine::scoring::RoundScore;

/// Представление игрока, чей сейчас ход: его рука видна полностью.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerView {
    pub seat: SeatIndex,
    pub name: String,
    pub hand: Vec<Card>,
    pub hand_value: i32,
    pub score: i32,
    pub number_of_pass: u32,
}

/// Соперник за столом: без карт, только размер руки и счёт.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct OpponentView {
    pub seat: SeatIndex,
    pub name: String,
    pub hand_len: usize,
    pub score: i32,
    pub is_eliminated: bool,
}

/// Запрос хода, который движок отдаёт фронту.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TurnPrompt {
    pub player: PlayerView,
    pub opponents: Vec<OpponentView>,
    /// Верхняя карта колоды.
    pub deck_top: Option<Card>,
    /// Верхняя карта сброса (её можно забрать после своего сброса).
    pub pile_top: Option<Card>,
    pub round_number: u32,
    pub can_pass: bool,
    pub can_declare: bool,
}

/// Итоговое место игрока.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Standing {
    pub position: usize,
    pub name: String,
    pub score: i32,
}

/// Одна строка таблицы очков: игрок, раунд, очки за раунд.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoreRow {
    pub name: String,
    pub round: u32,
    pub score_round: i32,
}

/// Таблица очков по раундам.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoreBoard {
    pub rows: Vec<ScoreRow>,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Записать итоги раунда.
    pub fn record_round(&mut self, round: u32, scores: &[RoundScore]) {
        self.rows.extend(scores.iter().map(|s| ScoreRow {
            name: s.name.clone(),
            round,
            score_round: s.delta,
        }));
    }

    pub fn rounds_played(&self) -> u32 {
        self.rows.iter().map(|r| r.round).max().unwrap_or(0)
    }

    /// Строки одного раунда.
    pub fn round(&self, round: u32) -> impl Iterator<Item = &ScoreRow> + '_ {
        self.rows.iter().filter(move |r| r.round == round)
    }

    /// Сумма очков игрока по всем записанным раундам.
    pub fn total_for(&self, name: &str) -> i32 {
        self.rows
            .iter()
            .filter(|r| r.name == name)
            .map(|r| r.score_round)
            .sum()
    }
}

impl From<&Player> for PlayerView {
    fn from(p: &Player) -> Self {
        Self {
            seat: p.seat,
            name: p.name.clone(),
            hand: p.hand.cards().to_vec(),
            hand_value: p.hand_value(),
            score: p.score,
            number_of_pass: p.number_of_pass,
        }
    }
}

impl From<&Player> for OpponentView {
    fn from(p: &Player) -> Self {
        Self {
            seat: p.seat,
            name: p.name.clone(),
            hand_len: p.hand.len(),
            score: p.score,
            is_eliminated: p.is_eliminated,
        }
    }
}
