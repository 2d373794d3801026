use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{Player, SeatIndex, TableConfig};

/// Итог раунда для одного игрока.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundScore {
    pub seat: SeatIndex,
    pub name: String,
    /// Стоимость руки на момент объявления.
    pub hand_value: i32,
    /// Изменение счёта за раунд (`score_round`).
    pub delta: i32,
    /// Счёт после раунда.
    pub total: i32,
}

/// Выбывание по итогам раунда.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Elimination {
    pub seat: SeatIndex,
    pub ranking: usize,
}

/// Подсчёт очков, когда игрок `declarer` объявляет конец раунда.
///
/// Объявивший P сравнивает стоимость руки с каждым активным соперником Q
/// в порядке `order`:
///   - P >= Q: P получает бонус (один раз за раунд); если Q < 0, Q получает Q;
///   - P <  Q: Q получает Q.
///
/// Если у P отрицательная рука, он дополнительно получает P, даже вместе
/// с бонусом (двойное начисление, см. тесты).
/// `score_round` всех игроков перезаписывается, `score` накапливается.
pub fn declare_end_of_round(
    players: &mut [Player],
    declarer: SeatIndex,
    order: &[SeatIndex],
    config: &TableConfig,
) -> Vec<RoundScore> {
    let declarer_value = players[declarer].hand_value();

    for p in players.iter_mut() {
        p.score_round = 0;
    }

    let mut bonus_earned = false;
    for &seat in order {
        if seat == declarer {
            continue;
        }
        let Some(q) = players.get_mut(seat) else {
            continue;
        };
        if !q.is_active() {
            continue;
        }

        let q_value = q.hand_value();
        if declarer_value >= q_value {
            bonus_earned = true;
            if q_value < 0 {
                q.score += q_value;
                q.score_round = q_value;
            }
        } else {
            q.score += q_value;
            q.score_round = q_value;
        }
    }

    let p = &mut players[declarer];
    p.finish_round = true;
    // Объявивший стоит первым в обходе, поэтому отрицательная рука
    // записывается раньше бонуса, и бонус перекрывает score_round.
    if declarer_value < 0 {
        p.score += declarer_value;
        p.score_round = declarer_value;
    }
    if bonus_earned {
        p.score += config.declare_bonus;
        p.score_round = config.declare_bonus;
    }

    debug!(
        declarer = %p.name,
        declarer_value,
        bonus_earned,
        "очки раунда подсчитаны"
    );

    order
        .iter()
        .filter_map(|&seat| players.get(seat))
        .filter(|p| p.is_active())
        .map(|p| RoundScore {
            seat: p.seat,
            name: p.name.clone(),
            hand_value: p.hand_value(),
            delta: p.score_round,
            total: p.score,
        })
        .collect()
}

/// Выбывание всех, чей счёт достиг порога.
///
/// Место = (число оставшихся активных) + 1 в момент выбывания;
/// при одновременном выбывании раньше обходится, у того хуже место.
pub fn apply_eliminations(
    players: &mut [Player],
    order: &[SeatIndex],
    threshold: i32,
) -> Vec<Elimination> {
    let total = players.len();
    let mut out = Vec::new();

    for &seat in order {
        let crosses = players
            .get(seat)
            .map_or(false, |p| p.is_active() && p.score >= threshold);
        if !crosses {
            continue;
        }
        let eliminated_after = players.iter().filter(|p| p.is_eliminated).count() + 1;
        let ranking = total - eliminated_after + 1;
        if players[seat].eliminate(ranking) {
            out.push(Elimination {
                seat,
                ranking: players[seat].ranking,
            });
        }
    }

    out
}
