use chess_core::{Move, Position, Strategy, StrategyError};
use rand_chacha::ChaCha8Rng;

use crate::common::{captures, choose_preferring, legal_moves};

/// Captures whenever it can, otherwise moves at random.
#[derive(Debug, Clone)]
pub struct AggressiveStrategy {
    rng: ChaCha8Rng,
}

impl AggressiveStrategy {
    pub fn new(rng: ChaCha8Rng) -> Self {
        Self { rng }
    }
}

impl Strategy for AggressiveStrategy {
    fn name(&self) -> &str {
        "Aggressive Bot"
    }

    fn decide(&mut self, pos: &Position) -> Result<Move, StrategyError> {
        let moves = legal_moves(pos)?;
        let captures = captures(pos, &moves);
        choose_preferring(&mut self.rng, &captures, &moves)
    }
}

#[cfg(test)]
#[path = "aggressive_tests.rs"]
mod aggressive_tests;
