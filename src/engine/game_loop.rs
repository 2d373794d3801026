use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::deck::{replenish_from_pile, Deck, Pile};
use crate::domain::{Card, CardError, SeatIndex, Table};
use crate::engine::actions::{PickupSource, TurnDecision};
use crate::engine::errors::EngineError;
use crate::engine::round_history::{RoundEventKind, RoundHistory};
use crate::engine::scoring::{apply_eliminations, declare_end_of_round, Elimination, RoundScore};
use crate::engine::turn_order::TurnOrder;
use crate::engine::validation::{validate_decision, ValidatedTurn};
use crate::engine::RandomSource;
use crate::eval::{Combination, Selection};

/// Фаза хода внутри раунда.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TurnPhase {
    /// Текущий игрок выбирает и сбрасывает комбинацию.
    AwaitingPlay,
    /// Сброс сделан, нужно добрать карту из колоды или сброса.
    AwaitingPickup,
    /// Карта добрана, ход можно передавать.
    TurnComplete,
    /// Игрок объявил конец раунда, идёт подсчёт.
    RoundEnding,
    /// Раунд закрыт, движок ждёт нового `start_round`.
    RoundReset,
}

/// Контекст текущего хода: выбранные карты и фаза.
/// Сбрасывается при каждой передаче хода.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TurnContext {
    pub selection: Selection,
    /// Сколько карт игрок сбросил в этом ходе.
    pub discarded: usize,
    pub phase: TurnPhase,
}

impl TurnContext {
    fn new() -> Self {
        Self {
            selection: Selection::new(),
            discarded: 0,
            phase: TurnPhase::AwaitingPlay,
        }
    }
}

/// Итог закрытого раунда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RoundSummary {
    pub round_number: u32,
    pub declarer: SeatIndex,
    pub scores: Vec<RoundScore>,
    pub eliminations: Vec<Elimination>,
    pub history: RoundHistory,
}

/// Статус раунда для внешнего кода.
#[derive(Clone, Debug, PartialEq)]
pub enum RoundStatus {
    Ongoing,
    Finished(RoundSummary),
}

/// Внутреннее состояние раунда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RoundEngine {
    /// Номер раунда; после объявления конца сбрасывается в 1.
    pub round_number: u32,
    pub deck: Deck,
    pub pile: Pile,
    pub order: TurnOrder,
    pub turn: TurnContext,
    pub history: RoundHistory,
}

impl RoundEngine {
    /// Чей сейчас ход.
    pub fn current_seat(&self) -> Option<SeatIndex> {
        match self.turn.phase {
            TurnPhase::RoundEnding | TurnPhase::RoundReset => None,
            _ => self.order.current(),
        }
    }

    pub fn phase(&self) -> TurnPhase {
        self.turn.phase
    }

    pub fn deck_top(&self) -> Option<Card> {
        self.deck.top().copied()
    }

    /// Карта сброса, которую текущий игрок может забрать:
    /// лежит сразу под картами, сброшенными им в этом ходе.
    pub fn pile_pickup_card(&self) -> Option<Card> {
        self.pile.beneath(self.turn.discarded).copied()
    }
}

/// Старт нового раунда:
/// - новая перемешанная колода из 54 карт;
/// - по `hand_size` карт каждому активному игроку в порядке `seating`;
/// - одна открытая карта в сброс;
/// - ход у первого активного в `seating`.
pub fn start_round<R: RandomSource>(
    table: &mut Table,
    rng: &mut R,
    seating: &[SeatIndex],
    round_number: u32,
) -> Result<RoundEngine, EngineError> {
    if table.round_in_progress {
        return Err(EngineError::RoundAlreadyInProgress);
    }
    if table.active_count() < 2 {
        return Err(EngineError::NotEnoughPlayers);
    }

    let mut order = TurnOrder::new(seating.iter().copied());
    let first_seat = order
        .skip_eliminated(&table.players)
        .ok_or(EngineError::NotEnoughPlayers)?;

    let mut deck = Deck::new_shuffled(rng);
    let mut history = RoundHistory::new();
    history.push(RoundEventKind::RoundStarted {
        round_number,
        first_seat,
    });

    for player in table.players.iter_mut() {
        player.hand.clear();
        player.finish_round = false;
    }

    let hand_size = table.config.hand_size;
    for &seat in seating {
        let Some(player) = table.players.get_mut(seat) else {
            continue;
        };
        if !player.is_active() {
            continue;
        }
        for card in deck.deal(hand_size)? {
            player.hand.insert(card);
        }
        history.push(RoundEventKind::HandDealt {
            seat,
            cards: player.hand.cards().to_vec(),
        });
    }

    let mut pile = Pile::new();
    for card in deck.deal(1)? {
        history.push(RoundEventKind::PileOpened { card });
        pile.add(card);
    }

    table.round_in_progress = true;

    info!(
        round_number,
        first = %table.players[first_seat].name,
        deck = deck.len(),
        "раунд начат"
    );

    Ok(RoundEngine {
        round_number,
        deck,
        pile,
        order,
        turn: TurnContext::new(),
        history,
    })
}

/// Применить решение игрока целиком. Решение сначала проверяется
/// полностью, и только потом меняется состояние.
pub fn apply_turn(
    table: &mut Table,
    engine: &mut RoundEngine,
    decision: &TurnDecision,
) -> Result<RoundStatus, EngineError> {
    let seat = current_actor(table, engine)?;
    expect_phase(engine, TurnPhase::AwaitingPlay)?;

    let validated = validate_decision(&table.players[seat], decision, &table.config)?;
    engine.turn.selection.clear();

    match validated {
        ValidatedTurn::Declare => declare_end(table, engine).map(RoundStatus::Finished),
        ValidatedTurn::Pass => {
            pass_turn(table, engine)?;
            Ok(RoundStatus::Ongoing)
        }
        ValidatedTurn::Play { selection, pickup } => {
            engine.turn.selection = selection;
            commit_discard(table, engine)?;
            pick_up(table, engine, pickup)?;
            end_turn(table, engine)?;
            Ok(RoundStatus::Ongoing)
        }
    }
}

/// Отметить карту руки текущего игрока. Возвращает флаг «минимума».
pub fn select_card(table: &Table, engine: &mut RoundEngine, card: Card) -> Result<bool, EngineError> {
    let seat = current_actor(table, engine)?;
    expect_phase(engine, TurnPhase::AwaitingPlay)?;
    if !table.players[seat].hand.contains(&card) {
        return Err(EngineError::NotInHand(card));
    }
    Ok(engine.turn.selection.select(card)?)
}

/// Снять отметку с карты. Возвращает флаг «минимума».
pub fn deselect_card(engine: &mut RoundEngine, card: &Card) -> Result<bool, EngineError> {
    expect_phase(engine, TurnPhase::AwaitingPlay)?;
    Ok(engine.turn.selection.deselect(card))
}

/// Сбросить выбранные карты на верх сброса в порядке выбора.
pub fn commit_discard(table: &mut Table, engine: &mut RoundEngine) -> Result<Combination, EngineError> {
    let seat = current_actor(table, engine)?;
    expect_phase(engine, TurnPhase::AwaitingPlay)?;

    let selection = &engine.turn.selection;
    if selection.is_empty() {
        return Err(EngineError::NoCardPlayed);
    }
    let combination = match selection.combination() {
        Some(c) if selection.is_committable() => c,
        _ => return Err(EngineError::IncompleteCombination),
    };

    let cards = engine.turn.selection.take();
    let player = &mut table.players[seat];
    for card in &cards {
        let card = player.hand.remove(card)?;
        engine.pile.add(card);
    }

    debug!(player = %player.name, ?combination, count = cards.len(), "сброс");

    engine.turn.discarded = cards.len();
    engine.turn.phase = TurnPhase::AwaitingPickup;
    engine.history.push(RoundEventKind::Discarded {
        seat,
        combination,
        cards,
    });
    Ok(combination)
}

/// Добрать одну карту. Если сброс ещё не сделан, выбранные карты
/// сначала сбрасываются.
pub fn pick_up(
    table: &mut Table,
    engine: &mut RoundEngine,
    source: PickupSource,
) -> Result<Card, EngineError> {
    let seat = current_actor(table, engine)?;
    if engine.turn.phase == TurnPhase::AwaitingPlay {
        if engine.turn.selection.is_empty() {
            return Err(EngineError::NoCardPlayed);
        }
        commit_discard(table, engine)?;
    }
    expect_phase(engine, TurnPhase::AwaitingPickup)?;

    let card = match source {
        PickupSource::Deck => {
            replenish_deck(engine);
            engine.deck.draw_one().ok_or(CardError::InsufficientCards {
                requested: 1,
                available: 0,
            })?
        }
        PickupSource::Pile => engine.pile.take_beneath(engine.turn.discarded)?,
    };

    let player = &mut table.players[seat];
    player.hand.insert(card);
    debug!(player = %player.name, ?source, %card, "добор");

    engine.history.push(RoundEventKind::PickedUp { seat, source, card });
    replenish_deck(engine);
    engine.turn.phase = TurnPhase::TurnComplete;
    Ok(card)
}

/// Пас: без сброса и добора, ход сразу переходит дальше.
pub fn pass_turn(table: &mut Table, engine: &mut RoundEngine) -> Result<SeatIndex, EngineError> {
    let seat = current_actor(table, engine)?;
    expect_phase(engine, TurnPhase::AwaitingPlay)?;

    let max_passes = table.config.max_passes;
    let player = &mut table.players[seat];
    if !player.can_pass(max_passes) {
        return Err(EngineError::PassUnavailable(seat));
    }
    player.pass_turn();
    debug!(player = %player.name, passes = player.number_of_pass, "пас");

    engine.history.push(RoundEventKind::Passed { seat });
    engine.turn.phase = TurnPhase::TurnComplete;
    end_turn(table, engine)
}

/// Передать ход следующему активному игроку.
pub fn end_turn(table: &mut Table, engine: &mut RoundEngine) -> Result<SeatIndex, EngineError> {
    let seat = current_actor(table, engine)?;
    expect_phase(engine, TurnPhase::TurnComplete)?;

    table.players[seat].hand.sort();
    let next = engine
        .order
        .advance(&table.players)
        .ok_or(EngineError::NotEnoughPlayers)?;
    engine.turn = TurnContext::new();
    Ok(next)
}

/// Текущий игрок объявляет конец раунда: подсчёт очков, выбывание,
/// закрытие раунда.
pub fn declare_end(table: &mut Table, engine: &mut RoundEngine) -> Result<RoundSummary, EngineError> {
    let seat = current_actor(table, engine)?;
    expect_phase(engine, TurnPhase::AwaitingPlay)?;
    if !table.config.may_declare(&table.players[seat]) {
        return Err(EngineError::DeclareUnavailable(seat));
    }

    engine.turn.selection.clear();
    engine.turn.phase = TurnPhase::RoundEnding;
    let hand_value = table.players[seat].hand_value();
    engine.history.push(RoundEventKind::Declared { seat, hand_value });
    info!(player = %table.players[seat].name, hand_value, "объявлен конец раунда");

    let order: Vec<SeatIndex> = engine.order.seats().collect();
    let config = table.config.clone();
    let scores = declare_end_of_round(&mut table.players, seat, &order, &config);
    let eliminations = apply_eliminations(&mut table.players, &order, config.elimination_threshold);

    for e in &eliminations {
        info!(player = %table.players[e.seat].name, ranking = e.ranking, "игрок выбыл");
        engine.history.push(RoundEventKind::PlayerEliminated {
            seat: e.seat,
            ranking: e.ranking,
        });
    }

    let round_number = engine.round_number;
    engine.history.push(RoundEventKind::RoundFinished { round_number });

    // Подготовка к следующему раунду.
    for player in table.players.iter_mut() {
        player.finish_round = false;
    }
    table.round_in_progress = false;
    engine.round_number = 1;
    engine.turn.phase = TurnPhase::RoundReset;

    Ok(RoundSummary {
        round_number,
        declarer: seat,
        scores,
        eliminations,
        history: engine.history.clone(),
    })
}

/// Сколько карт сейчас в игре: колода + сброс + все руки.
pub fn cards_in_play(table: &Table, engine: &RoundEngine) -> usize {
    engine.deck.len()
        + engine.pile.len()
        + table.players.iter().map(|p| p.hand.len()).sum::<usize>()
}

/// Пополнить пустую колоду из сброса (всё, кроме верхней карты).
fn replenish_deck(engine: &mut RoundEngine) {
    let moved = replenish_from_pile(&mut engine.deck, &mut engine.pile);
    if moved > 0 {
        debug!(moved, "колода пополнена из сброса");
        engine.history.push(RoundEventKind::DeckReplenished { moved });
    }
}

fn current_actor(table: &Table, engine: &RoundEngine) -> Result<SeatIndex, EngineError> {
    if !table.round_in_progress {
        return Err(EngineError::NoActiveRound);
    }
    engine.current_seat().ok_or(EngineError::NoActiveRound)
}

fn expect_phase(engine: &RoundEngine, expected: TurnPhase) -> Result<(), EngineError> {
    if engine.turn.phase == expected {
        Ok(())
    } else {
        Err(EngineError::IllegalPhase(engine.turn.phase))
    }
}
