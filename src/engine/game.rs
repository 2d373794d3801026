use std::collections::HashSet;

use tracing::{info, warn};

use crate::api::dto::{ScoreBoard, Standing};
use crate::api::errors::InvalidActionKind;
use crate::api::frontend::Frontend;
use crate::api::queries::{build_standings, build_turn_prompt};
use crate::domain::{Player, Table, TableConfig};
use crate::engine::errors::EngineError;
use crate::engine::game_loop::{apply_turn, start_round, RoundStatus, RoundSummary};
use crate::engine::turn_order::TurnOrder;
use crate::engine::RandomSource;

/// Партия: раунды до тех пор, пока в игре не останется один игрок.
#[derive(Clone, Debug)]
pub struct Game {
    pub table: Table,
    /// Рассадка; первый ходит первым. Сдвигается на одно место после раунда.
    pub seating: TurnOrder,
    /// Номер следующего раунда.
    pub round_counter: u32,
    pub scoreboard: ScoreBoard,
}

impl Game {
    /// Новая партия. Имена должны быть уникальны, игроков от `min_players`
    /// до `max_players`.
    pub fn new(names: Vec<String>, config: TableConfig) -> Result<Self, EngineError> {
        validate_roster(&names, &config)?;

        let players: Vec<Player> = names
            .into_iter()
            .enumerate()
            .map(|(seat, name)| Player::new(seat, name))
            .collect();
        let seating = TurnOrder::new(0..players.len());

        Ok(Self {
            table: Table::new(config, players),
            seating,
            round_counter: 1,
            scoreboard: ScoreBoard::new(),
        })
    }

    /// Спрашивать состав у фронта, пока он не станет допустимым.
    pub fn from_frontend<F: Frontend>(frontend: &mut F, config: TableConfig) -> Self {
        loop {
            let names = frontend.prompt_player_roster();
            match Self::new(names, config.clone()) {
                Ok(game) => return game,
                Err(err) => {
                    warn!(%err, "состав игроков отклонён");
                    if let Ok(kind) = InvalidActionKind::try_from(&err) {
                        frontend.notify_invalid_action(kind);
                    }
                }
            }
        }
    }

    /// Партия окончена, когда активных игроков не больше одного.
    pub fn is_over(&self) -> bool {
        self.table.active_count() <= 1
    }

    /// Сыграть один раунд до объявления конца.
    ///
    /// Ошибки ввода уходят во фронт, и ход запрашивается заново.
    /// Фатальные ошибки прерывают раунд.
    pub fn play_round<R, F>(&mut self, rng: &mut R, frontend: &mut F) -> Result<RoundSummary, EngineError>
    where
        R: RandomSource,
        F: Frontend,
    {
        if self.is_over() {
            return Err(EngineError::GameOver);
        }

        let seating: Vec<_> = self.seating.seats().collect();
        let mut engine = start_round(&mut self.table, rng, &seating, self.round_counter)?;

        loop {
            let prompt = build_turn_prompt(&self.table, &engine).ok_or(EngineError::NoActiveRound)?;
            let decision = frontend.prompt_turn_action(&prompt);

            match apply_turn(&mut self.table, &mut engine, &decision) {
                Ok(RoundStatus::Ongoing) => {}
                Ok(RoundStatus::Finished(summary)) => {
                    self.scoreboard.record_round(self.round_counter, &summary.scores);
                    frontend.notify_round_end(&self.table.players, self.round_counter);

                    info!(
                        round = self.round_counter,
                        active = self.table.active_count(),
                        eliminated = self.table.eliminated_count(),
                        "раунд завершён"
                    );

                    self.seating.rotate();
                    self.round_counter += 1;
                    return Ok(summary);
                }
                Err(err) => {
                    let kind = InvalidActionKind::try_from(&err)?;
                    warn!(player = %prompt.player.name, %err, "действие отклонено");
                    frontend.notify_invalid_action(kind);
                }
            }
        }
    }

    /// Играть раунды до конца партии и вернуть итоговые места.
    pub fn run<R, F>(&mut self, rng: &mut R, frontend: &mut F) -> Result<Vec<Standing>, EngineError>
    where
        R: RandomSource,
        F: Frontend,
    {
        while !self.is_over() {
            self.play_round(rng, frontend)?;
        }

        self.finalize_rankings();
        let standings = self.standings();

        if let Some(winner) = standings.first() {
            info!(winner = %winner.name, rounds = self.round_counter - 1, "партия окончена");
        }
        frontend.notify_game_end(&standings);
        Ok(standings)
    }

    /// Оставшимся в игре достаются лучшие свободные места по порядку рассадки.
    pub fn finalize_rankings(&mut self) {
        let mut next = 1;
        for seat in self.seating.seats() {
            let Some(player) = self.table.player_mut(seat) else {
                continue;
            };
            if player.is_active() && player.ranking == 0 {
                player.ranking = next;
                next += 1;
            }
        }
    }

    pub fn standings(&self) -> Vec<Standing> {
        build_standings(&self.table)
    }
}

fn validate_roster(names: &[String], config: &TableConfig) -> Result<(), EngineError> {
    let count = names.len();
    if count < config.min_players || count > config.max_players {
        return Err(EngineError::InvalidPlayerCount {
            count,
            min: config.min_players,
            max: config.max_players,
        });
    }

    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name.as_str()) {
            return Err(EngineError::DuplicatePlayerName(name.clone()));
        }
    }
    Ok(())
}
