use chess_core::{Move, Position, Strategy, StrategyError};

use crate::clock::Clock;
use crate::common::legal_moves;

/// Indexes the legal move list with the current wall-clock second.
pub struct ChaoticStrategy {
    clock: Box<dyn Clock>,
}

impl ChaoticStrategy {
    pub fn new(clock: Box<dyn Clock>) -> Self {
        Self { clock }
    }
}

impl Strategy for ChaoticStrategy {
    fn name(&self) -> &str {
        "Chaotic Bot"
    }

    fn decide(&mut self, pos: &Position) -> Result<Move, StrategyError> {
        let moves = legal_moves(pos)?;
        let idx = self.clock.second() as usize % moves.len();
        Ok(moves[idx])
    }
}

#[cfg(test)]
#[path = "chaotic_tests.rs"]
mod chaotic_tests;
