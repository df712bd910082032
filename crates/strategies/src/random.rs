use chess_core::{Move, Position, Strategy, StrategyError};
use rand_chacha::ChaCha8Rng;

use crate::common::{choose, legal_moves};

/// Uniformly random legal moves. The baseline every other bot should beat.
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    rng: ChaCha8Rng,
}

impl RandomStrategy {
    pub fn new(rng: ChaCha8Rng) -> Self {
        Self { rng }
    }
}

impl Strategy for RandomStrategy {
    fn name(&self) -> &str {
        "Random Bot"
    }

    fn decide(&mut self, pos: &Position) -> Result<Move, StrategyError> {
        let moves = legal_moves(pos)?;
        choose(&mut self.rng, &moves)
    }
}
