use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::player::Player;
use crate::domain::SeatIndex;

/// По какому признаку игрок может объявить конец раунда.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DeclareGate {
    /// Число карт в руке <= порога.
    HandSize,
    /// Стоимость руки <= порога.
    HandValue,
}

/// Правила стола. Все поля имеют значения по умолчанию,
/// поэтому JSON-конфиг может содержать только то, что меняется.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TableConfig {
    /// Счёт, начиная с которого игрок выбывает.
    pub elimination_threshold: i32,
    pub declare_gate: DeclareGate,
    pub declare_threshold: i32,
    /// Сколько пасов разрешено игроку за всю игру.
    pub max_passes: u32,
    /// Сколько карт раздаётся каждому в начале раунда.
    pub hand_size: usize,
    /// Бонус объявившему, если его рука не хуже чьей-то.
    pub declare_bonus: i32,
    pub min_players: usize,
    pub max_players: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            elimination_threshold: 30,
            declare_gate: DeclareGate::HandSize,
            declare_threshold: 9,
            max_passes: 1,
            hand_size: 5,
            declare_bonus: 25,
            min_players: 2,
            max_players: 6,
        }
    }
}

/// Ошибки загрузки конфига.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Не удалось прочитать конфиг: {0}")]
    Io(#[from] std::io::Error),

    #[error("Некорректный JSON конфига: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Некорректное значение в конфиге: {0}")]
    Invalid(&'static str),
}

impl TableConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let cfg: TableConfig = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_players < 2 {
            return Err(ConfigError::Invalid("min_players must be at least 2"));
        }
        if self.max_players < self.min_players {
            return Err(ConfigError::Invalid("max_players must be >= min_players"));
        }
        if self.hand_size == 0 {
            return Err(ConfigError::Invalid("hand_size must be positive"));
        }
        // Колода из 54 карт: раздача + одна карта в сброс.
        let needed = self
            .hand_size
            .checked_mul(self.max_players)
            .and_then(|n| n.checked_add(1));
        match needed {
            Some(n) if n <= crate::domain::deck::FULL_DECK_SIZE => {}
            _ => return Err(ConfigError::Invalid("deck too small for hand_size * max_players")),
        }
        Ok(())
    }

    /// Может ли игрок с такой рукой объявить конец раунда.
    pub fn may_declare(&self, player: &Player) -> bool {
        let measure = match self.declare_gate {
            DeclareGate::HandSize => player.hand.len() as i32,
            DeclareGate::HandValue => player.hand_value(),
        };
        measure <= self.declare_threshold
    }
}

/// Стол: правила и игроки в исходном порядке.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Table {
    pub config: TableConfig,
    /// Индекс вектора = SeatIndex.
    pub players: Vec<Player>,
    /// Идёт ли сейчас раунд.
    pub round_in_progress: bool,
}

impl Table {
    pub fn new(config: TableConfig, players: Vec<Player>) -> Self {
        Self {
            config,
            players,
            round_in_progress: false,
        }
    }

    pub fn player(&self, seat: SeatIndex) -> Option<&Player> {
        self.players.get(seat)
    }

    pub fn player_mut(&mut self, seat: SeatIndex) -> Option<&mut Player> {
        self.players.get_mut(seat)
    }

    pub fn active_count(&self) -> usize {
        self.players.iter().filter(|p| p.is_active()).count()
    }

    pub fn eliminated_count(&self) -> usize {
        self.players.len() - self.active_count()
    }
}
