use rummy_engine::domain::{card::Card, hand::Hand, player::Player, table::TableConfig};
use rummy_engine::engine::scoring::{apply_eliminations, declare_end_of_round, Elimination};

fn hand(s: &str) -> Hand {
    Hand::from_cards(s.split_whitespace().map(|t| t.parse::<Card>().unwrap()).collect())
}

fn players(hands: &[&str]) -> Vec<Player> {
    hands
        .iter()
        .enumerate()
        .map(|(seat, h)| {
            let mut p = Player::new(seat, format!("P{seat}"));
            p.hand = hand(h);
            p
        })
        .collect()
}

#[test]
fn declarer_not_worse_than_opponent_gets_bonus_once() {
    // A = 20, B = 5, C = 3
    let mut ps = players(&["Th Jd", "5c", "3d"]);
    let scores = declare_end_of_round(&mut ps, 0, &[0, 1, 2], &TableConfig::default());

    assert_eq!(ps[0].score, 25);
    assert_eq!(ps[0].score_round, 25);
    assert!(ps[0].finish_round);
    assert_eq!((ps[1].score, ps[1].score_round), (0, 0));
    assert_eq!((ps[2].score, ps[2].score_round), (0, 0));

    assert_eq!(scores.len(), 3);
    assert_eq!(scores[0].delta, 25);
    assert_eq!(scores[0].hand_value, 20);
}

#[test]
fn lower_declarer_hands_points_to_opponents() {
    // A = 5, B = 20: правило `>=` не выполняется, бонуса нет.
    let mut ps = players(&["5h", "Th Jd"]);
    declare_end_of_round(&mut ps, 0, &[0, 1], &TableConfig::default());

    assert_eq!((ps[0].score, ps[0].score_round), (0, 0));
    assert_eq!((ps[1].score, ps[1].score_round), (20, 20));
}

#[test]
fn negative_declarer_below_everyone_scores_own_value() {
    // A = -1 (джокер), B = 5.
    let mut ps = players(&["X1", "5d"]);
    declare_end_of_round(&mut ps, 0, &[0, 1], &TableConfig::default());

    assert_eq!((ps[1].score, ps[1].score_round), (5, 5));
    assert_eq!((ps[0].score, ps[0].score_round), (-1, -1));
}

#[test]
fn negative_declarer_also_keeps_bonus_double_award() {
    // A = -1, B = -1: A >= B даёт +25, и отрицательная рука A
    // начисляется поверх бонуса.
    let mut ps = players(&["X1", "X2"]);
    declare_end_of_round(&mut ps, 0, &[0, 1], &TableConfig::default());

    assert_eq!(ps[0].score, 25 - 1);
    assert_eq!(ps[0].score_round, 25);
    assert_eq!((ps[1].score, ps[1].score_round), (-1, -1));
}

#[test]
fn bonus_value_comes_from_config() {
    let mut ps = players(&["Ah", "Kh"]);
    let config = TableConfig {
        declare_bonus: 10,
        ..TableConfig::default()
    };
    declare_end_of_round(&mut ps, 1, &[1, 0], &config);
    assert_eq!(ps[1].score, 10);
}

#[test]
fn score_round_is_reset_and_eliminated_players_ignored() {
    let mut ps = players(&["2h", "Kh Kd", "Qc"]);
    for p in ps.iter_mut() {
        p.score_round = 99;
    }
    ps[2].eliminate(3);
    ps[2].score = 40;

    let scores = declare_end_of_round(&mut ps, 0, &[0, 1, 2], &TableConfig::default());

    assert_eq!(ps[1].score, 20);
    assert_eq!(ps[2].score, 40);
    assert_eq!(ps[2].score_round, 0);
    assert_eq!(ps[0].score_round, 0);
    assert_eq!(scores.iter().map(|s| s.seat).collect::<Vec<_>>(), vec![0, 1]);
}

#[test]
fn scores_accumulate_across_rounds() {
    let mut ps = players(&["5h", "Th Jd"]);
    let config = TableConfig::default();
    declare_end_of_round(&mut ps, 0, &[0, 1], &config);
    declare_end_of_round(&mut ps, 0, &[0, 1], &config);
    assert_eq!(ps[1].score, 40);
    assert_eq!(ps[1].score_round, 20);
}

#[test]
fn elimination_rankings_follow_turn_order() {
    let mut ps = players(&["", "", "", ""]);
    ps[0].score = 30;
    ps[1].score = 45;
    ps[2].score = 10;
    ps[3].score = 29;

    let out = apply_eliminations(&mut ps, &[1, 2, 3, 0], 30);
    assert_eq!(
        out,
        vec![
            Elimination { seat: 1, ranking: 4 },
            Elimination { seat: 0, ranking: 3 },
        ]
    );
    assert!(ps[0].is_eliminated && ps[1].is_eliminated);
    assert!(!ps[3].is_eliminated);

    // Повторный прогон ничего не меняет.
    let again = apply_eliminations(&mut ps, &[0, 1, 2, 3], 30);
    assert!(again.is_empty());
    assert_eq!((ps[0].ranking, ps[1].ranking), (3, 4));

    ps[2].score = 31;
    let next = apply_eliminations(&mut ps, &[0, 1, 2, 3], 30);
    assert_eq!(next, vec![Elimination { seat: 2, ranking: 2 }]);
}

#[test]
fn one_threshold_drives_elimination() {
    // Одно значение порога: 30 по умолчанию, 150 только если задано явно.
    let default_threshold = TableConfig::default().elimination_threshold;
    assert_eq!(default_threshold, 30);

    let mut ps = players(&["", ""]);
    ps[0].score = 30;
    assert_eq!(apply_eliminations(&mut ps.clone(), &[0, 1], default_threshold).len(), 1);
    assert!(apply_eliminations(&mut ps, &[0, 1], 150).is_empty());

    ps[0].score = 149;
    assert!(apply_eliminations(&mut ps, &[0, 1], 150).is_empty());
    ps[0].score = 150;
    assert_eq!(apply_eliminations(&mut ps, &[0, 1], 150)[0].seat, 0);
}
