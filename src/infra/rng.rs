//! Источники перемешивания колоды.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{thread_rng, SeedableRng};

use crate::engine::RandomSource;

/// Живая игра: каждая колода из 54 карт перемешивается заново `thread_rng`.
#[derive(Clone, Debug, Default)]
pub struct SystemRng;

impl RandomSource for SystemRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut thread_rng());
    }
}

/// Повтор партии целиком по одному числу.
///
/// Все раунды берут колоды из одного потока, поэтому seed задаёт
/// не одну раздачу, а всю последовательность колод партии.
/// Тем же seed `rummy_cli` и `rummy_autoplay` воспроизводят игру.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    seed: u64,
    stream: StdRng,
}

impl DeterministicRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            stream: StdRng::seed_from_u64(seed),
        }
    }

    /// Seed, с которого начат поток.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for DeterministicRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.stream);
    }
}
