// src/bin/rummy_cli.rs
//
// Консольная партия на одном терминале.
//
//   rummy_cli [config.json] [seed]
//
// Ход вводится строкой:
//   3s 4s 5s deck  : сбросить карты и добрать из колоды
//   Kh pile        : сбросить карту и забрать карту из сброса
//   pass           : пас
//   end            : объявить конец раунда

use std::error::Error;
use std::io::{self, BufRead, Write};

use rummy_engine::api::{Frontend, InvalidActionKind, Standing, TurnPrompt};
use rummy_engine::domain::{Card, Player, TableConfig};
use rummy_engine::engine::{Game, PickupSource, RandomSource, TurnDecision};
use rummy_engine::infra::{logging, DeterministicRng, SystemRng};

struct ConsoleFrontend {
    lines: io::Lines<io::StdinLock<'static>>,
}

impl ConsoleFrontend {
    fn new() -> Self {
        Self {
            lines: io::stdin().lock().lines(),
        }
    }

    fn ask(&mut self, question: &str) -> String {
        print!("{question}");
        let _ = io::stdout().flush();
        match self.lines.next() {
            Some(Ok(line)) => line.trim().to_string(),
            _ => {
                println!();
                println!("Ввод закрыт, выходим.");
                std::process::exit(0);
            }
        }
    }
}

impl Frontend for ConsoleFrontend {
    fn prompt_player_roster(&mut self) -> Vec<String> {
        loop {
            let raw = self.ask("Имена игроков через пробел: ");
            let names: Vec<String> = raw.split_whitespace().map(str::to_string).collect();
            let answer = self.ask(&format!(
                "{} игрок(ов) будут играть: {}. Подтвердить? (Y/N) ",
                names.len(),
                names.join(", ")
            ));
            if answer.eq_ignore_ascii_case("y") {
                return names;
            }
        }
    }

    fn prompt_turn_action(&mut self, prompt: &TurnPrompt) -> TurnDecision {
        println!();
        println!("================ РАУНД {} ================", prompt.round_number);
        for opp in &prompt.opponents {
            let status = if opp.is_eliminated { " (выбыл)" } else { "" };
            println!(
                "  {:<12} карт: {:<2} счёт: {}{}",
                opp.name, opp.hand_len, opp.score, status
            );
        }
        println!(
            "Сброс: {} | колода: {}",
            fmt_card(prompt.pile_top),
            if prompt.deck_top.is_some() { "есть" } else { "пусто" }
        );
        println!(
            "Ход: {} (счёт {}), рука [{}] = {}",
            prompt.player.name,
            prompt.player.score,
            fmt_cards(&prompt.player.hand),
            prompt.player.hand_value
        );

        let mut hints = vec!["<карты> deck|pile"];
        if prompt.can_pass {
            hints.push("pass");
        }
        if prompt.can_declare {
            hints.push("end");
        }

        loop {
            let line = self.ask(&format!("[{}] > ", hints.join(" / ")));
            match parse_decision(&line) {
                Ok(decision) => return decision,
                Err(msg) => println!("  {msg}"),
            }
        }
    }

    fn notify_round_end(&mut self, players: &[Player], round_number: u32) {
        println!();
        println!("------ Итоги раунда {round_number} ------");
        for p in players {
            let status = if p.is_eliminated {
                format!(" выбыл, место {}", p.ranking)
            } else {
                String::new()
            };
            println!(
                "  {:<12} рука [{}] {:+} → {}{}",
                p.name,
                fmt_cards(p.hand.cards()),
                p.score_round,
                p.score,
                status
            );
        }
    }

    fn notify_game_end(&mut self, standings: &[Standing]) {
        println!();
        println!("=========== ИТОГИ ПАРТИИ ===========");
        for s in standings {
            println!("  {}. {:<12} {}", s.position, s.name, s.score);
        }
    }

    fn notify_invalid_action(&mut self, kind: InvalidActionKind) {
        println!("  !! {kind}");
    }
}

fn parse_decision(line: &str) -> Result<TurnDecision, String> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        [] => Err("Пустой ввод".to_string()),
        ["end"] => Ok(TurnDecision::declare_end()),
        ["pass"] => Ok(TurnDecision::pass()),
        [cards @ .., source] => {
            let pickup = match *source {
                "deck" => Some(PickupSource::Deck),
                "pile" => Some(PickupSource::Pile),
                _ => None,
            };
            let card_tokens = if pickup.is_some() { cards } else { tokens.as_slice() };
            let discarded = card_tokens
                .iter()
                .map(|t| t.parse::<Card>())
                .collect::<Result<Vec<_>, _>>()?;
            Ok(TurnDecision {
                discarded,
                pickup,
                ..TurnDecision::default()
            })
        }
    }
}

fn fmt_card(card: Option<Card>) -> String {
    card.map_or_else(|| "—".to_string(), |c| c.to_string())
}

fn fmt_cards(cards: &[Card]) -> String {
    cards.iter().map(Card::to_string).collect::<Vec<_>>().join(" ")
}

fn play<R: RandomSource>(rng: &mut R, config: TableConfig) -> Result<Vec<Standing>, Box<dyn Error>> {
    let mut frontend = ConsoleFrontend::new();
    let mut game = Game::from_frontend(&mut frontend, config);
    Ok(game.run(rng, &mut frontend)?)
}

fn main() -> Result<(), Box<dyn Error>> {
    logging::init();

    let mut config = TableConfig::default();
    let mut seed: Option<u64> = None;
    for arg in std::env::args().skip(1) {
        match arg.parse::<u64>() {
            Ok(s) => seed = Some(s),
            Err(_) => config = TableConfig::load(&arg)?,
        }
    }

    println!("rummy_cli: порог выбывания {}", config.elimination_threshold);

    let standings = match seed {
        Some(s) => {
            let mut rng = DeterministicRng::from_seed(s);
            println!("rummy_cli: seed {} (повтор партии тем же seed)", rng.seed());
            play(&mut rng, config)?
        }
        None => play(&mut SystemRng, config)?,
    };

    println!("{}", serde_json::to_string_pretty(&standings)?);
    Ok(())
}
