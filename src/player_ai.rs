use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::board::{Board, Mark};
use crate::player::Player;

/// Trivial AI: a uniform random pick among the empty cells.
pub struct RandomAi {
    rng: SmallRng,
}

impl RandomAi {
    pub fn new() -> Self {
        let mut seed_rng = rand::rng();
        Self {
            rng: SmallRng::from_rng(&mut seed_rng),
        }
    }

    /// Fixed seed for reproducible games.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAi {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for RandomAi {
    fn select_cell(&mut self, board: &Board, _mark: Mark) -> anyhow::Result<(usize, usize)> {
        let empty = board.empty_cells();
        anyhow::ensure!(!empty.is_empty(), "no empty cell left to play");
        Ok(empty[self.rng.random_range(0..empty.len())])
    }
}
