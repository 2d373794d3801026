use std::collections::HashSet;

use rummy_engine::domain::{
    card::{Card, Rank, Suit},
    deck::{replenish_from_pile, Deck, Pile, FULL_DECK_SIZE},
    errors::CardError,
    hand::Hand,
    player::Player,
    table::{ConfigError, DeclareGate, TableConfig},
};

fn c(s: &str) -> Card {
    s.parse().unwrap()
}

//
// card.rs
//
#[test]
fn card_display_and_parse_roundtrip_for_whole_deck() {
    for card in Deck::standard_54().cards {
        let text = card.to_string();
        assert_eq!(text.parse::<Card>().unwrap(), card, "{text}");
    }
    assert_eq!(c("Td").to_string(), "Td");
    assert_eq!(c("1h"), Card::new(Rank::Ace, Suit::Hearts));
    assert_eq!(c("x2"), Card::joker(2));
}

#[test]
fn card_parse_rejects_garbage() {
    assert!("".parse::<Card>().is_err());
    assert!("Zs".parse::<Card>().is_err());
    assert!("Ax".parse::<Card>().is_err());
    assert!("X3".parse::<Card>().is_err());
    assert!("10h".parse::<Card>().is_err());
}

#[test]
fn jokers_are_rank_equal_but_distinct() {
    let (x1, x2) = (Card::joker(1), Card::joker(2));
    assert_ne!(x1, x2);
    assert!(x1.same_rank(&x2));
    assert_eq!(x1.suit(), None);
    assert!(!x1.same_rank(&c("Ah")));
}

//
// deck.rs
//
#[test]
fn new_deck_has_54_unique_cards_two_jokers_and_13_by_4() {
    let deck = Deck::standard_54();
    assert_eq!(deck.len(), FULL_DECK_SIZE);

    let unique: HashSet<Card> = deck.cards.iter().copied().collect();
    assert_eq!(unique.len(), 54);

    let jokers = deck.cards.iter().filter(|c| c.is_joker()).count();
    assert_eq!(jokers, 2);

    for suit in Suit::ALL {
        let n = deck.cards.iter().filter(|c| c.suit() == Some(suit)).count();
        assert_eq!(n, 13, "{suit:?}");
    }
    for rank in Rank::ALL {
        let n = deck.cards.iter().filter(|c| c.rank() == Some(rank)).count();
        assert_eq!(n, 4, "{rank:?}");
    }
}

#[test]
fn draw_one_and_add_work_on_top() {
    let mut deck = Deck::standard_54();
    let top = deck.draw_one().unwrap();
    assert_eq!(top, Card::joker(2));
    assert_eq!(deck.len(), 53);

    deck.add(top);
    assert_eq!(deck.top(), Some(&Card::joker(2)));
}

#[test]
fn deal_takes_from_top_in_draw_order() {
    let mut deck = Deck::standard_54();
    let top = *deck.top().unwrap();
    let dealt = deck.deal(3).unwrap();
    assert_eq!(dealt.len(), 3);
    assert_eq!(dealt[0], top);
    assert_eq!(deck.len(), 51);
}

#[test]
fn deal_fails_without_removing_when_short() {
    let mut deck = Deck { cards: vec![c("Ah"), c("2h")] };
    assert_eq!(
        deck.deal(3),
        Err(CardError::InsufficientCards { requested: 3, available: 2 })
    );
    assert_eq!(deck.len(), 2);
    assert_eq!(deck.deal(2).unwrap(), vec![c("2h"), c("Ah")]);
    assert!(deck.is_empty());
}

#[test]
fn pile_take_and_take_beneath() {
    let mut pile = Pile::new();
    for card in [c("2c"), c("3c"), c("4c"), c("5c")] {
        pile.add(card);
    }

    assert_eq!(pile.top(), Some(&c("5c")));
    assert_eq!(pile.beneath(2), Some(&c("3c")));
    assert_eq!(pile.take(&c("Kh")), Err(CardError::CardNotFound(c("Kh"))));

    assert_eq!(pile.take_beneath(2).unwrap(), c("3c"));
    assert_eq!(pile.cards, vec![c("2c"), c("4c"), c("5c")]);

    assert!(pile.take_beneath(3).is_err());
    assert_eq!(pile.take(&c("4c")).unwrap(), c("4c"));
    assert_eq!(pile.len(), 2);
}

#[test]
fn replenish_moves_everything_but_top_and_keeps_card_count() {
    let mut deck = Deck::default();
    let mut pile = Pile {
        cards: Deck::standard_54().cards,
    };
    let top = *pile.top().unwrap();
    let bottom = pile.cards[0];

    let moved = replenish_from_pile(&mut deck, &mut pile);

    assert_eq!(moved, 53);
    assert_eq!(deck.len() + pile.len(), 54);
    assert_eq!(pile.cards, vec![top]);
    assert_eq!(deck.top(), Some(&bottom));
}

#[test]
fn replenish_keeps_top_and_reverses_rest() {
    let mut deck = Deck::default();
    let mut pile = Pile { cards: vec![c("2h"), c("3h"), c("4h")] };

    assert_eq!(replenish_from_pile(&mut deck, &mut pile), 2);
    assert_eq!(pile.cards, vec![c("4h")]);
    // Верх колоды: самая нижняя карта сброса.
    assert_eq!(deck.cards, vec![c("3h"), c("2h")]);
    assert_eq!(deck.draw_one(), Some(c("2h")));
}

#[test]
fn replenish_is_noop_while_deck_has_cards() {
    let mut deck = Deck { cards: vec![c("Ah")] };
    let mut pile = Pile { cards: vec![c("2h"), c("3h")] };
    assert_eq!(replenish_from_pile(&mut deck, &mut pile), 0);
    assert_eq!(pile.len(), 2);
}

//
// hand.rs
//
#[test]
fn hand_stays_sorted_with_jokers_last() {
    let mut hand = Hand::from_cards(vec![c("X1"), c("Kd"), c("2s"), c("2h")]);
    hand.insert(c("7c"));
    hand.insert(c("X2"));

    assert_eq!(
        hand.cards(),
        &[c("2h"), c("2s"), c("7c"), c("Kd"), c("X1"), c("X2")]
    );
}

#[test]
fn hand_value_uses_count_table() {
    let hand = Hand::from_cards(vec![c("Ah"), c("9d"), c("Tc"), c("Js"), c("Qh"), c("Kd"), c("X1")]);
    assert_eq!(hand.value(), 1 + 9 + 10 + 10 + 10 + 10 - 1);
    assert_eq!(Hand::new().value(), 0);
}

#[test]
fn hand_remove_missing_card_is_error() {
    let mut hand = Hand::from_cards(vec![c("Ah")]);
    assert_eq!(hand.remove(&c("2h")), Err(CardError::CardNotFound(c("2h"))));
    assert_eq!(hand.remove(&c("Ah")), Ok(c("Ah")));
    assert!(hand.is_empty());
}

//
// player.rs
//
#[test]
fn elimination_is_monotonic_and_ranking_assigned_once() {
    let mut p = Player::new(0, "Alice");
    assert!(p.is_active());

    assert!(p.eliminate(3));
    assert!(!p.eliminate(1));
    assert!(p.is_eliminated);
    assert_eq!(p.ranking, 3);
}

#[test]
fn pass_budget_is_cumulative() {
    let mut p = Player::new(0, "Alice");
    assert!(p.can_pass(1));
    p.pass_turn();
    assert!(!p.can_pass(1));
    assert!(p.can_pass(2));
}

//
// table.rs
//
#[test]
fn config_defaults() {
    let cfg = TableConfig::default();
    assert_eq!(cfg.elimination_threshold, 30);
    assert_eq!(cfg.declare_gate, DeclareGate::HandSize);
    assert_eq!(cfg.declare_threshold, 9);
    assert_eq!(cfg.max_passes, 1);
    assert_eq!(cfg.hand_size, 5);
    assert_eq!(cfg.declare_bonus, 25);
    assert_eq!((cfg.min_players, cfg.max_players), (2, 6));
}

#[test]
fn config_from_partial_json() {
    let cfg = TableConfig::from_json_str(
        r#"{ "elimination_threshold": 150, "declare_gate": "hand_value" }"#,
    )
    .unwrap();
    assert_eq!(cfg.elimination_threshold, 150);
    assert_eq!(cfg.declare_gate, DeclareGate::HandValue);
    assert_eq!(cfg.hand_size, 5);
}

#[test]
fn config_rejects_bad_values() {
    assert!(matches!(
        TableConfig::from_json_str(r#"{ "min_players": 1 }"#),
        Err(ConfigError::Invalid(_))
    ));
    assert!(matches!(
        TableConfig::from_json_str(r#"{ "hand_size": 10 }"#),
        Err(ConfigError::Invalid(_))
    ));
    assert!(matches!(
        TableConfig::from_json_str(r#"{ "hand_size": 18446744073709551615 }"#),
        Err(ConfigError::Invalid(_))
    ));
    assert!(matches!(
        TableConfig::from_json_str(r#"{ "hand_size": 2, "max_players": 9223372036854775807 }"#),
        Err(ConfigError::Invalid(_))
    ));
    assert!(matches!(
        TableConfig::from_json_str("{ not json"),
        Err(ConfigError::Parse(_))
    ));
    assert!(matches!(
        TableConfig::load("/definitely/missing/rummy.json"),
        Err(ConfigError::Io(_))
    ));
}

#[test]
fn declare_gate_by_size_or_value() {
    let mut p = Player::new(0, "Alice");
    p.hand = Hand::from_cards(vec![c("Kh"), c("Kd")]);

    let by_size = TableConfig::default();
    assert!(by_size.may_declare(&p));

    let by_value = TableConfig {
        declare_gate: DeclareGate::HandValue,
        ..TableConfig::default()
    };
    assert!(!by_value.may_declare(&p));

    p.hand = Hand::from_cards(vec![c("4h"), c("5d"), c("X1")]);
    assert!(by_value.may_declare(&p));
}
