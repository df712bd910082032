use chess_core::{Move, Position, Strategy, StrategyError};
use rand_chacha::ChaCha8Rng;

use crate::common::{after, choose_preferring, legal_moves};

/// Prefers moves after which the opponent has no capture at all.
#[derive(Debug, Clone)]
pub struct DefensiveStrategy {
    rng: ChaCha8Rng,
}

impl DefensiveStrategy {
    pub fn new(rng: ChaCha8Rng) -> Self {
        Self { rng }
    }

    /// True if the reply side has no capturing move.
    fn is_safe(pos: &Position, mv: Move) -> bool {
        after(pos, mv, |next| {
            next.legal_moves().into_iter().all(|reply| !next.is_capture(reply))
        })
    }
}

impl Strategy for DefensiveStrategy {
    fn name(&self) -> &str {
        "Defensive Bot"
    }

    fn decide(&mut self, pos: &Position) -> Result<Move, StrategyError> {
        let moves = legal_moves(pos)?;
        let safe: Vec<Move> = moves
            .iter()
            .copied()
            .filter(|&m| Self::is_safe(pos, m))
            .collect();
        choose_preferring(&mut self.rng, &safe, &moves)
    }
}

#[cfg(test)]
#[path = "defensive_tests.rs"]
mod defensive_tests;
