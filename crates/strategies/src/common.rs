//! Helpers shared by the strategy implementations.

use chess_core::{Color, Move, PieceKind, Position, StrategyError};
use rand::seq::SliceRandom;
use rand::Rng;

/// Legal moves of `pos`, or `NoLegalMoves` when there are none.
pub fn legal_moves(pos: &Position) -> Result<Vec<Move>, StrategyError> {
    let moves = pos.legal_moves();
    if moves.is_empty() {
        Err(StrategyError::NoLegalMoves)
    } else {
        Ok(moves)
    }
}

/// Uniform choice; `NoLegalMoves` if `moves` is empty.
pub fn choose<R: Rng + ?Sized>(rng: &mut R, moves: &[Move]) -> Result<Move, StrategyError> {
    moves
        .choose(rng)
        .copied()
        .ok_or(StrategyError::NoLegalMoves)
}

/// Uniform choice among `preferred`, falling back to `all` when it is empty.
pub fn choose_preferring<R: Rng + ?Sized>(
    rng: &mut R,
    preferred: &[Move],
    all: &[Move],
) -> Result<Move, StrategyError> {
    if preferred.is_empty() {
        choose(rng, all)
    } else {
        choose(rng, preferred)
    }
}

/// Moves sharing the highest score, in their original order.
///
/// Scores are compared exactly; NaN never wins.
pub fn best_by<F>(moves: &[Move], mut score: F) -> Vec<Move>
where
    F: FnMut(Move) -> f64,
{
    let mut best = f64::NEG_INFINITY;
    let mut out = Vec::new();
    for &mv in moves {
        let s = score(mv);
        if s > best {
            best = s;
            out.clear();
            out.push(mv);
        } else if s == best {
            out.push(mv);
        }
    }
    out
}

/// Moves sharing the lowest score, in their original order.
pub fn worst_by<F>(moves: &[Move], mut score: F) -> Vec<Move>
where
    F: FnMut(Move) -> f64,
{
    best_by(moves, |mv| -score(mv))
}

/// Play `mv` on a private copy and evaluate the result.
pub fn after<F, T>(pos: &Position, mv: Move, eval: F) -> T
where
    F: FnOnce(&Position) -> T,
{
    let mut next = pos.clone();
    next.push(mv);
    eval(&next)
}

pub fn captures(pos: &Position, moves: &[Move]) -> Vec<Move> {
    moves.iter().copied().filter(|&m| pos.is_capture(m)).collect()
}

pub fn checks(pos: &Position, moves: &[Move]) -> Vec<Move> {
    moves.iter().copied().filter(|&m| pos.gives_check(m)).collect()
}

/// Kind of the piece taken by `mv`, including en-passant pawns.
pub fn captured_kind(pos: &Position, mv: Move) -> Option<PieceKind> {
    if mv.is_en_passant {
        return Some(PieceKind::Pawn);
    }
    pos.piece_at(mv.to)
        .filter(|pc| pc.color != pos.side_to_move)
        .map(|pc| pc.kind)
}

/// Number of pieces `color` has on the board, king included.
pub fn piece_count(pos: &Position, color: Color) -> u32 {
    pos.occupied_by(color).popcount()
}
