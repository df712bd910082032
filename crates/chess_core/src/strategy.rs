use thiserror::Error;

use crate::board::Position;
use crate::types::Move;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StrategyError {
    #[error("no legal moves available")]
    NoLegalMoves,
    #[error("{0}")]
    Failed(String),
}

/// A move-selection policy that plays one side of a game.
///
/// The match engine hands `decide` a snapshot of the live game; the position
/// is never shared with the strategy, so it may explore it freely by cloning.
/// The returned move is checked against the legal move list before it is
/// played, and anything outside that list forfeits the game.
///
/// Strategies are moved onto a worker thread for the duration of a match,
/// hence the `Send` bound.
pub trait Strategy: Send {
    /// Display name written into results and PGN headers.
    fn name(&self) -> &str;

    /// Choose a move for the side to move in `pos`.
    ///
    /// Only called when `pos` has at least one legal move.
    fn decide(&mut self, pos: &Position) -> Result<Move, StrategyError>;
}

impl<S: Strategy + ?Sized> Strategy for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn decide(&mut self, pos: &Position) -> Result<Move, StrategyError> {
        (**self).decide(pos)
    }
}
