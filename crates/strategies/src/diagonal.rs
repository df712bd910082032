use chess_core::{is_light_square, Move, PieceKind, Position, Strategy, StrategyError};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::common::{captures, choose, choose_preferring, legal_moves};

/// Only moves pieces between squares of the same colour.
///
/// Captures are preferred among such moves. When none exist it breaks the
/// rule, picking the most valuable piece it can move to an unattacked square.
#[derive(Debug, Clone)]
pub struct DiagonalStrategy {
    rng: ChaCha8Rng,
}

impl DiagonalStrategy {
    pub fn new(rng: ChaCha8Rng) -> Self {
        Self { rng }
    }

    /// Piece value, with the king worth 100 and a 5-point penalty for
    /// landing on an attacked square.
    fn fallback_score(pos: &Position, mv: Move) -> i32 {
        let value = match pos.piece_at(mv.from) {
            Some(pc) if pc.kind == PieceKind::King => 100,
            Some(pc) => pc.kind.value() as i32,
            None => 0,
        };
        if pos.is_square_attacked(mv.to, pos.side_to_move.other()) {
            value - 5
        } else {
            value
        }
    }
}

impl Strategy for DiagonalStrategy {
    fn name(&self) -> &str {
        "Diagonal Bot"
    }

    fn decide(&mut self, pos: &Position) -> Result<Move, StrategyError> {
        let moves = legal_moves(pos)?;
        let same_colour: Vec<Move> = moves
            .iter()
            .copied()
            .filter(|m| is_light_square(m.from) == is_light_square(m.to))
            .collect();

        if !same_colour.is_empty() {
            let caps = captures(pos, &same_colour);
            return choose_preferring(&mut self.rng, &caps, &same_colour);
        }

        debug!(bot = self.name(), "no colour-preserving move, breaking the rule");
        let mut best: Option<(Move, i32)> = None;
        for &mv in &moves {
            let score = Self::fallback_score(pos, mv);
            if best.map_or(true, |(_, b)| score > b) {
                best = Some((mv, score));
            }
        }
        match best {
            Some((mv, _)) => Ok(mv),
            None => choose(&mut self.rng, &moves),
        }
    }
}

#[cfg(test)]
#[path = "diagonal_tests.rs"]
mod diagonal_tests;
