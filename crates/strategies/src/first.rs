use chess_core::{move_to_uci, Move, Position, Strategy, StrategyError};

use crate::common::legal_moves;

/// Always plays the legal move whose UCI text sorts first.
///
/// Uses no randomness at all, which makes it the reference opponent for
/// reproducibility checks.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstMoveStrategy;

impl FirstMoveStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for FirstMoveStrategy {
    fn name(&self) -> &str {
        "First Move Bot"
    }

    fn decide(&mut self, pos: &Position) -> Result<Move, StrategyError> {
        legal_moves(pos)?
            .into_iter()
            .min_by_key(|&m| move_to_uci(m))
            .ok_or(StrategyError::NoLegalMoves)
    }
}
