//! Box-counting dimension of each side's piece layout.

use chess_core::{file_of, rank_of, Color, Move, Position, Strategy, StrategyError};
use rand_chacha::ChaCha8Rng;
use tracing::trace;

use crate::common::{after, best_by, choose, legal_moves};
use crate::numeric::{least_squares_slope, NumericInstability};

const SCALES: [u8; 3] = [1, 2, 4];
const MAX_DIMENSION: f64 = 2.0;

/// Non-empty `scale`×`scale` boxes covering `color`'s pieces.
pub fn box_count(pos: &Position, color: Color, scale: u8) -> usize {
    let per_side = (8 / scale) as usize;
    let mut boxes = vec![false; per_side * per_side];
    for s in pos.occupied_by(color) {
        let bx = (file_of(s) as u8 / scale) as usize;
        let by = (rank_of(s) as u8 / scale) as usize;
        boxes[by * per_side + bx] = true;
    }
    boxes.into_iter().filter(|&b| b).count()
}

fn try_dimension(pos: &Position, color: Color) -> Result<f64, NumericInstability> {
    let counts: Vec<usize> = SCALES.iter().map(|&s| box_count(pos, color, s)).collect();
    if counts[0] <= 1 {
        return Err(NumericInstability::TooFewSamples(counts[0]));
    }
    let xs: Vec<f64> = SCALES.iter().map(|&s| (1.0 / s as f64).ln()).collect();
    let ys: Vec<f64> = counts.iter().map(|&c| (c as f64).ln()).collect();
    least_squares_slope(&xs, &ys)
}

/// Fractal dimension of `color`'s pieces, clamped to `[0, 2]`; 0 with one
/// piece or fewer.
pub fn fractal_dimension(pos: &Position, color: Color) -> f64 {
    match try_dimension(pos, color) {
        Ok(d) => d.clamp(0.0, MAX_DIMENSION),
        Err(err) => {
            trace!(%err, ?color, "fractal dimension unavailable");
            0.0
        }
    }
}

/// Prefers spreading its own pieces while the opponent's stay clumped.
#[derive(Debug, Clone)]
pub struct FractalStrategy {
    rng: ChaCha8Rng,
}

impl FractalStrategy {
    pub fn new(rng: ChaCha8Rng) -> Self {
        Self { rng }
    }
}

impl Strategy for FractalStrategy {
    fn name(&self) -> &str {
        "Fractal Bot"
    }

    fn decide(&mut self, pos: &Position) -> Result<Move, StrategyError> {
        let me = pos.side_to_move;
        let moves = legal_moves(pos)?;
        let best = best_by(&moves, |m| {
            after(pos, m, |next| {
                fractal_dimension(next, me) - fractal_dimension(next, me.other())
            })
        });
        choose(&mut self.rng, &best)
    }
}

#[cfg(test)]
#[path = "fractal_tests.rs"]
mod fractal_tests;
