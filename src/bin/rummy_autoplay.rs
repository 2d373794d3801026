// src/bin/rummy_autoplay.rs
//
// Прогон партий ботами.
//
//   rummy_autoplay [players] [games] [seed]

use std::error::Error;

use rummy_engine::domain::TableConfig;
use rummy_engine::engine::{Game, RandomSource};
use rummy_engine::infra::{logging, DeterministicRng, SimpleBot, SystemRng};

struct Stats {
    games: u32,
    rounds: u64,
    max_rounds: u32,
}

fn play_games<R: RandomSource>(
    rng: &mut R,
    players: usize,
    games: u32,
) -> Result<Stats, Box<dyn Error>> {
    let names: Vec<String> = (1..=players).map(|i| format!("Bot{i}")).collect();
    let mut stats = Stats {
        games: 0,
        rounds: 0,
        max_rounds: 0,
    };

    for n in 0..games {
        let mut bot = SimpleBot::new(names.clone());
        let mut game = Game::new(names.clone(), TableConfig::default())?;
        let standings = game.run(rng, &mut bot)?;

        let rounds = game.round_counter - 1;
        stats.games += 1;
        stats.rounds += u64::from(rounds);
        stats.max_rounds = stats.max_rounds.max(rounds);

        if let Some(winner) = standings.first() {
            println!(
                "[GAME {}] раундов: {:>3}, победитель: {} ({} очков)",
                n + 1,
                rounds,
                winner.name,
                winner.score
            );
        }
    }

    Ok(stats)
}

fn main() -> Result<(), Box<dyn Error>> {
    logging::init();

    let mut args = std::env::args().skip(1);
    let players: usize = args.next().map(|a| a.parse::<usize>()).transpose()?.unwrap_or(3);
    let games: u32 = args.next().map(|a| a.parse::<u32>()).transpose()?.unwrap_or(10);
    let seed: Option<u64> = args.next().map(|a| a.parse::<u64>()).transpose()?;

    println!("rummy_autoplay: {players} бот(ов), {games} партий");

    let stats = match seed {
        Some(s) => play_games(&mut DeterministicRng::from_seed(s), players, games)?,
        None => play_games(&mut SystemRng, players, games)?,
    };

    println!();
    println!("=========== AUTOPLAY SUMMARY ===========");
    println!("Партий сыграно: {}", stats.games);
    if stats.games > 0 {
        println!("Среднее число раундов: {}", stats.rounds / u64::from(stats.games));
        println!("Максимум раундов: {}", stats.max_rounds);
    }
    println!("========================================");
    Ok(())
}
