use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::domain::{Player, SeatIndex};

/// Очередь ходов: вращаемый список всех мест исходного состава.
///
/// Ходит тот, кто стоит первым. После каждого действия список
/// поворачивается на одну позицию, выбывшие в начале пропускаются.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TurnOrder {
    rotation: VecDeque<SeatIndex>,
}

impl TurnOrder {
    pub fn new(seats: impl IntoIterator<Item = SeatIndex>) -> Self {
        Self {
            rotation: seats.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.rotation.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rotation.is_empty()
    }

    pub fn current(&self) -> Option<SeatIndex> {
        self.rotation.front().copied()
    }

    /// Места в текущем порядке обхода.
    pub fn seats(&self) -> impl Iterator<Item = SeatIndex> + '_ {
        self.rotation.iter().copied()
    }

    /// Повернуть список на одну позицию.
    pub fn rotate(&mut self) {
        if !self.rotation.is_empty() {
            self.rotation.rotate_left(1);
        }
    }

    /// Поворачивать, пока первым не окажется активный игрок.
    pub fn skip_eliminated(&mut self, players: &[Player]) -> Option<SeatIndex> {
        for _ in 0..self.rotation.len() {
            let front = self.current()?;
            if players.get(front).map_or(false, Player::is_active) {
                return Some(front);
            }
            self.rotation.rotate_left(1);
        }
        None
    }

    /// Передать ход следующему активному игроку.
    pub fn advance(&mut self, players: &[Player]) -> Option<SeatIndex> {
        self.rotate();
        self.skip_eliminated(players)
    }
}
