//! Простой бот: играет за всех игроков стола через `Frontend`.
//!
//! Стратегия:
//!   - объявить конец раунда, если рука стоит не больше `declare_at`
//!     (или раунд затянулся дольше `patience` ходов);
//!   - иначе сбросить самую дорогую допустимую комбинацию;
//!   - добрать из сброса, если карта там дешёвая, иначе из колоды.

use tracing::debug;

use crate::api::dto::{Standing, TurnPrompt};
use crate::api::errors::InvalidActionKind;
use crate::api::frontend::Frontend;
use crate::domain::{Card, Player};
use crate::engine::actions::{PickupSource, TurnDecision};
use crate::eval::lookup_tables::{count_value, run_value};
use crate::eval::Selection;

#[derive(Clone, Debug)]
pub struct SimpleBot {
    names: Vec<String>,
    /// Объявлять конец раунда при стоимости руки не выше этой.
    pub declare_at: i32,
    /// Сколько ходов раунда ждать хорошей руки.
    pub patience: u32,
    /// Брать карту из сброса, если она стоит не больше этого.
    pub pile_pick_max: i32,
    turns_this_round: u32,
    pub rounds_seen: u32,
    pub invalid_actions: Vec<InvalidActionKind>,
    pub final_standings: Option<Vec<Standing>>,
}

impl SimpleBot {
    pub fn new(names: Vec<String>) -> Self {
        Self {
            names,
            declare_at: 5,
            patience: 40,
            pile_pick_max: 3,
            turns_this_round: 0,
            rounds_seen: 0,
            invalid_actions: Vec::new(),
            final_standings: None,
        }
    }

    fn choose_pickup(&self, pile_top: Option<Card>) -> PickupSource {
        match pile_top {
            Some(card) if count_value(&card) <= self.pile_pick_max => PickupSource::Pile,
            _ => PickupSource::Deck,
        }
    }
}

impl Frontend for SimpleBot {
    fn prompt_player_roster(&mut self) -> Vec<String> {
        self.names.clone()
    }

    fn prompt_turn_action(&mut self, prompt: &TurnPrompt) -> TurnDecision {
        self.turns_this_round += 1;
        let hand = &prompt.player.hand;

        if prompt.can_declare
            && (prompt.player.hand_value <= self.declare_at || self.turns_this_round > self.patience)
        {
            debug!(player = %prompt.player.name, value = prompt.player.hand_value, "бот объявляет конец раунда");
            return TurnDecision::declare_end();
        }

        let best = candidate_plays(hand)
            .into_iter()
            .max_by_key(|play| play.iter().map(count_value).sum::<i32>());

        match best {
            Some(play) => TurnDecision::play(play, self.choose_pickup(prompt.pile_top)),
            None if prompt.can_pass => TurnDecision::pass(),
            None => TurnDecision::declare_end(),
        }
    }

    fn notify_round_end(&mut self, _players: &[Player], round_number: u32) {
        self.rounds_seen += 1;
        self.turns_this_round = 0;
        debug!(round_number, "бот: раунд окончен");
    }

    fn notify_game_end(&mut self, standings: &[Standing]) {
        self.final_standings = Some(standings.to_vec());
    }

    fn notify_invalid_action(&mut self, kind: InvalidActionKind) {
        self.invalid_actions.push(kind);
    }
}

/// Все сбрасываемые комбинации руки: одиночные карты, группы одного
/// достоинства целиком и отрезки мастей длиной от трёх.
/// Карты в каждой комбинации идут в порядке, в котором их можно выбирать.
pub fn candidate_plays(hand: &[Card]) -> Vec<Vec<Card>> {
    let mut plays: Vec<Vec<Card>> = hand.iter().map(|c| vec![*c]).collect();

    // Группы: рука отсортирована, одинаковые достоинства идут подряд.
    let mut i = 0;
    while i < hand.len() {
        let mut j = i + 1;
        while j < hand.len() && hand[j].same_rank(&hand[i]) {
            j += 1;
        }
        if j - i >= 2 {
            plays.push(hand[i..j].to_vec());
        }
        i = j;
    }

    // Отрезки мастей.
    for suit in crate::domain::Suit::ALL {
        let mut cards: Vec<Card> = hand.iter().copied().filter(|c| c.suit() == Some(suit)).collect();
        cards.sort_by_key(|c| run_value(c));
        cards.dedup();

        let mut start = 0;
        while start < cards.len() {
            let mut end = start + 1;
            while end < cards.len() && run_value(&cards[end]) == run_value(&cards[end - 1]).map(|v| v + 1) {
                end += 1;
            }
            for lo in start..end {
                for hi in (lo + 3)..=end {
                    plays.push(cards[lo..hi].to_vec());
                }
            }
            start = end;
        }
    }

    plays.retain(|play| is_committable(play));
    plays
}

fn is_committable(cards: &[Card]) -> bool {
    let mut selection = Selection::new();
    cards.iter().all(|c| selection.select(*c).is_ok()) && selection.is_committable()
}
