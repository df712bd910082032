//! Roulette-wheel selection over an arbitrary closed-form move score.

use std::f64::consts::{E, PI};

use chess_core::{file_of, rank_of, Move, Position, Strategy, StrategyError};
use rand::distributions::{Distribution, WeightedIndex};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::clock::Clock;
use crate::common::{choose, legal_moves};

const PHI: f64 = 1.618_033_988_749_895;

/// Inputs of the formula that do not depend on the move.
#[derive(Debug, Clone, Copy)]
struct Factors {
    magic: f64,
    board: f64,
}

impl Factors {
    fn new(clock: &dyn Clock, pos: &Position) -> Self {
        let hour = clock.hour() as f64 / 12.0 * PI;
        let minute = clock.minute() as f64 / 30.0 * E;
        let second = clock.second() as f64 / 30.0 * PHI;

        let board = pos.occupied().popcount() as f64 / 32.0 * E;
        let turn = pos.fullmove_number as f64 * PHI / 10.0;
        let check = if pos.is_check() { 2.0 } else { 1.0 };

        let magic = (hour.sin() * minute.cos() * (second + 0.1).tan() * board * turn * check)
            .abs()
            .rem_euclid(1.0);
        Self { magic, board }
    }
}

fn square_value(sq: u8) -> f64 {
    let (f, r) = (file_of(sq) as f64, rank_of(sq) as f64);
    (PHI.powf(f + 1.0) * (r * PI / 4.0).sin()).rem_euclid(1.0)
}

fn score(pos: &Position, mv: Move, factors: Factors) -> f64 {
    let (from, to) = (mv.from as f64, mv.to as f64);
    let spread = (mv.from as i32 - mv.to as i32).abs() % 8;

    let mut value = (square_value(mv.from) * PI).sin()
        * (square_value(mv.to) * PI).cos()
        * (factors.magic * E / 10.0).exp()
        * (factors.board + 1.0).ln()
        * PHI.powi(spread)
        / 10.0;

    // En-passant captures leave the target square empty and get no factor.
    if pos.is_capture(mv) {
        if let Some(victim) = pos.piece_at(mv.to) {
            let k = (victim.kind.idx() + 1) as f64;
            value *= k * k / 36.0;
        }
    }
    if let Some(promo) = mv.promo {
        let k = (promo.idx() + 1) as f64;
        value *= k * k / 25.0;
    }

    value + (from * to + 1.0).sqrt() / 64.0
}

/// Absolute scores as sampling weights. Non-finite scores weigh nothing.
pub fn weights(scores: &[f64]) -> Vec<f64> {
    scores
        .iter()
        .map(|s| if s.is_finite() { s.abs() } else { 0.0 })
        .collect()
}

/// Samples a move with probability proportional to the absolute value of a
/// formula mixing the time of day, board density and square coordinates.
pub struct MathStrategy {
    rng: ChaCha8Rng,
    clock: Box<dyn Clock>,
}

impl MathStrategy {
    pub fn new(rng: ChaCha8Rng, clock: Box<dyn Clock>) -> Self {
        Self { rng, clock }
    }

    /// Scores every move in `moves` for the current clock reading.
    pub fn scores(&self, pos: &Position, moves: &[Move]) -> Vec<f64> {
        let factors = Factors::new(self.clock.as_ref(), pos);
        moves.iter().map(|&m| score(pos, m, factors)).collect()
    }
}

impl Strategy for MathStrategy {
    fn name(&self) -> &str {
        "Math Bot"
    }

    fn decide(&mut self, pos: &Position) -> Result<Move, StrategyError> {
        let moves = legal_moves(pos)?;
        let weights = weights(&self.scores(pos, &moves));
        match WeightedIndex::new(&weights) {
            Ok(dist) => Ok(moves[dist.sample(&mut self.rng)]),
            Err(err) => {
                debug!(%err, "degenerate weights, choosing uniformly");
                choose(&mut self.rng, &moves)
            }
        }
    }
}

#[cfg(test)]
#[path = "math_tests.rs"]
mod math_tests;
