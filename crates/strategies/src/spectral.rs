//! Algebraic connectivity of each side's piece network.
//!
//! Pieces are nodes; two pieces are joined when the first could reach the
//! second in at most five of its own moves, with weight `1 / (d/2 + 1/2)`.
//! The second-smallest Laplacian eigenvalue (the Fiedler value) measures how
//! well knit the group is. The strategy maximises its own Fiedler value minus
//! the opponent's after each candidate move.

use chess_core::{file_of, rank_of, Color, Move, PieceKind, Position, Strategy, StrategyError};
use rand_chacha::ChaCha8Rng;
use tracing::trace;

use crate::common::{after, best_by, choose, legal_moves};
use crate::numeric::{symmetric_eigenvalues, NumericInstability};

const MAX_EDGE_DISTANCE: u32 = 5;
const MAX_FIEDLER: f64 = 10.0;

/// Rough number of moves a piece of `kind` needs to travel between two
/// squares. `None` when it cannot get there along a single line.
pub fn move_distance(kind: PieceKind, a: u8, b: u8) -> Option<u32> {
    let df = (file_of(a) - file_of(b)).unsigned_abs() as u32;
    let dr = (rank_of(a) - rank_of(b)).unsigned_abs() as u32;
    let aligned_diag = df == dr;
    let aligned_line = df == 0 || dr == 0;
    match kind {
        PieceKind::Knight => Some(match (df, dr) {
            (0, 0) => 0,
            (1, 2) | (2, 1) => 1,
            _ if df + dr <= 3 => 2,
            _ => 3,
        }),
        PieceKind::Bishop => aligned_diag.then_some(df),
        PieceKind::Rook => aligned_line.then_some(df + dr),
        PieceKind::Queen if aligned_diag || aligned_line => Some(df.max(dr)),
        PieceKind::Queen => Some(df + dr),
        PieceKind::King => Some(df.max(dr)),
        PieceKind::Pawn => Some(df + dr),
    }
}

fn edge_weight(pos: &Position, a: u8, b: u8) -> f64 {
    let Some(pc) = pos.piece_at(a) else {
        return 0.0;
    };
    match move_distance(pc.kind, a, b) {
        Some(d) if d <= MAX_EDGE_DISTANCE => 1.0 / (d as f64 * 0.5 + 0.5),
        _ => 0.0,
    }
}

/// Weighted Laplacian of `color`'s piece graph, nodes in square order.
pub fn laplacian(pos: &Position, color: Color) -> Vec<Vec<f64>> {
    let squares: Vec<u8> = pos.occupied_by(color).squares().collect();
    let n = squares.len();
    let mut lap = vec![vec![0.0; n]; n];
    for i in 0..n {
        for j in (i + 1)..n {
            let w = edge_weight(pos, squares[i], squares[j]);
            if w > 0.0 {
                lap[i][j] = -w;
                lap[j][i] = -w;
                lap[i][i] += w;
                lap[j][j] += w;
            }
        }
    }
    lap
}

fn try_fiedler(pos: &Position, color: Color) -> Result<f64, NumericInstability> {
    let lap = laplacian(pos, color);
    if lap.len() < 2 {
        return Err(NumericInstability::TooFewNodes(lap.len()));
    }
    let eig = symmetric_eigenvalues(&lap)?;
    Ok(eig[1])
}

/// Fiedler value of `color`'s pieces, clamped to `[0, 10]`. Any numeric
/// trouble, including fewer than two pieces, yields 0.
pub fn fiedler_value(pos: &Position, color: Color) -> f64 {
    match try_fiedler(pos, color) {
        Ok(v) => v.clamp(0.0, MAX_FIEDLER),
        Err(err) => {
            trace!(%err, ?color, "fiedler value unavailable");
            0.0
        }
    }
}

/// Own connectivity minus the opponent's.
pub fn cohesion(pos: &Position, me: Color) -> f64 {
    fiedler_value(pos, me) - fiedler_value(pos, me.other())
}

#[derive(Debug, Clone)]
pub struct SpectralStrategy {
    rng: ChaCha8Rng,
}

impl SpectralStrategy {
    pub fn new(rng: ChaCha8Rng) -> Self {
        Self { rng }
    }
}

impl Strategy for SpectralStrategy {
    fn name(&self) -> &str {
        "Spectral Bot"
    }

    fn decide(&mut self, pos: &Position) -> Result<Move, StrategyError> {
        let me = pos.side_to_move;
        let moves = legal_moves(pos)?;
        let best = best_by(&moves, |m| after(pos, m, |next| cohesion(next, me)));
        choose(&mut self.rng, &best)
    }
}

#[cfg(test)]
#[path = "spectral_tests.rs"]
mod spectral_tests;
