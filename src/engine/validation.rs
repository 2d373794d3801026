use crate::domain::{Card, Player, TableConfig};
use crate::engine::actions::{PickupSource, TurnDecision};
use crate::engine::errors::EngineError;
use crate::eval::{Selection, SelectionReject};

/// Проверенное решение игрока, готовое к применению.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidatedTurn {
    Declare,
    Pass,
    Play {
        selection: Selection,
        pickup: PickupSource,
    },
}

impl From<SelectionReject> for EngineError {
    fn from(reject: SelectionReject) -> Self {
        match reject {
            SelectionReject::AlreadySelected(card) => EngineError::AlreadySelected(card),
            SelectionReject::InvalidCombination(card) => EngineError::InvalidCombination(card),
        }
    }
}

/// Проверка, может ли игрок сделать такой ход. Состояние не меняется.
///
/// Приоритет как у кнопок стола: конец раунда, затем пас, затем сброс.
pub fn validate_decision(
    player: &Player,
    decision: &TurnDecision,
    config: &TableConfig,
) -> Result<ValidatedTurn, EngineError> {
    if decision.declared_end {
        return if config.may_declare(player) {
            Ok(ValidatedTurn::Declare)
        } else {
            Err(EngineError::DeclareUnavailable(player.seat))
        };
    }

    if decision.passed {
        return if player.can_pass(config.max_passes) {
            Ok(ValidatedTurn::Pass)
        } else {
            Err(EngineError::PassUnavailable(player.seat))
        };
    }

    if decision.discarded.is_empty() {
        return Err(EngineError::NoCardPlayed);
    }

    let selection = build_selection(player, &decision.discarded)?;
    if !selection.is_committable() {
        return Err(EngineError::IncompleteCombination);
    }

    let pickup = decision.pickup.ok_or(EngineError::MissingPickup)?;
    Ok(ValidatedTurn::Play { selection, pickup })
}

/// Собрать выбор так же, как его собирал бы игрок по одной карте.
pub fn build_selection(player: &Player, cards: &[Card]) -> Result<Selection, EngineError> {
    let mut selection = Selection::new();
    for card in cards {
        if !player.hand.contains(card) {
            return Err(EngineError::NotInHand(*card));
        }
        selection.select(*card)?;
    }
    Ok(selection)
}
