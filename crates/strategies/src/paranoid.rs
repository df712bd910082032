use chess_core::{chebyshev_distance, Color, Move, Position, Strategy, StrategyError};
use rand_chacha::ChaCha8Rng;

use crate::common::{after, best_by, choose, legal_moves};

/// Keeps its pieces as far from the enemy as it can.
#[derive(Debug, Clone)]
pub struct ParanoidStrategy {
    rng: ChaCha8Rng,
}

impl ParanoidStrategy {
    pub fn new(rng: ChaCha8Rng) -> Self {
        Self { rng }
    }
}

/// Sum over `side`'s pieces of the king-move distance to the closest enemy
/// piece. A piece with no enemy on the board counts the maximum, 8.
pub fn distance_score(pos: &Position, side: Color) -> f64 {
    let enemies = pos.occupied_by(side.other());
    pos.occupied_by(side)
        .squares()
        .map(|s| {
            enemies
                .squares()
                .map(|e| chebyshev_distance(s, e))
                .min()
                .unwrap_or(8)
                .min(8) as f64
        })
        .sum()
}

impl Strategy for ParanoidStrategy {
    fn name(&self) -> &str {
        "Paranoid Bot"
    }

    fn decide(&mut self, pos: &Position) -> Result<Move, StrategyError> {
        let me = pos.side_to_move;
        let moves = legal_moves(pos)?;
        let best = best_by(&moves, |m| after(pos, m, |next| distance_score(next, me)));
        choose(&mut self.rng, &best)
    }
}

#[cfg(test)]
#[path = "paranoid_tests.rs"]
mod paranoid_tests;
