use crate::domain::table::Table;
use crate::engine::RoundEngine;

use super::dto::{OpponentView, PlayerView, Standing, TurnPrompt};

/// Сформировать запрос хода для текущего игрока.
/// `None`, если раунд не идёт.
pub fn build_turn_prompt(table: &Table, engine: &RoundEngine) -> Option<TurnPrompt> {
    if !table.round_in_progress {
        return None;
    }
    let seat = engine.current_seat()?;
    let player = table.player(seat)?;

    let opponents = engine
        .order
        .seats()
        .filter(|&s| s != seat)
        .filter_map(|s| table.player(s))
        .map(OpponentView::from)
        .collect();

    Some(TurnPrompt {
        player: PlayerView::from(player),
        opponents,
        deck_top: engine.deck_top(),
        pile_top: engine.pile_pickup_card(),
        round_number: engine.round_number,
        can_pass: player.can_pass(table.config.max_passes),
        can_declare: table.config.may_declare(player),
    })
}

/// Итоговые места, отсортированные по позиции.
/// Игроки без места (ещё в игре) идут в конце в порядке мест за столом.
pub fn build_standings(table: &Table) -> Vec<Standing> {
    let mut standings: Vec<Standing> = table
        .players
        .iter()
        .map(|p| Standing {
            position: p.ranking,
            name: p.name.clone(),
            score: p.score,
        })
        .collect();

    standings.sort_by_key(|s| if s.position == 0 { usize::MAX } else { s.position });
    standings
}
