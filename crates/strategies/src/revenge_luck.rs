use chess_core::{Move, PieceKind, Position, Strategy, StrategyError};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::common::{captures, checks, choose, legal_moves, piece_count};

/// Bad luck added per piece lost, in percent.
pub const LUCK_PER_LOST_PIECE: u32 = 10;

/// Believes each lost piece curses it a little more, and tries to break the
/// curse by offering material.
///
/// The counter is the percentage chance of a sacrifice on the next turn.
/// Losing pieces raises it, winning one resets it, and each sacrifice halves
/// it. Otherwise the strategy plays captures, then checks, then anything.
#[derive(Debug, Clone)]
pub struct RevengeLuckStrategy {
    rng: ChaCha8Rng,
    bad_luck: u32,
    last_count: u32,
}

impl RevengeLuckStrategy {
    pub fn new(rng: ChaCha8Rng) -> Self {
        Self {
            rng,
            bad_luck: 0,
            last_count: 16,
        }
    }

    pub fn bad_luck(&self) -> u32 {
        self.bad_luck
    }

    fn update_luck(&mut self, count: u32) {
        if count < self.last_count {
            self.bad_luck += (self.last_count - count) * LUCK_PER_LOST_PIECE;
            debug!(lost = self.last_count - count, bad_luck = self.bad_luck, "pieces lost");
        } else if count > self.last_count {
            self.bad_luck = 0;
        }
        self.last_count = count;
    }

    /// The move that puts the most valuable piece on an attacked square.
    fn sacrifice(pos: &Position, moves: &[Move]) -> Option<Move> {
        let attacked = pos.attacked_squares(pos.side_to_move.other());
        let mut best: Option<(Move, u32)> = None;
        for &mv in moves {
            if !attacked.contains(mv.to) {
                continue;
            }
            let Some(pc) = pos.piece_at(mv.from) else {
                continue;
            };
            let value = match pc.kind {
                PieceKind::King => 0,
                k => k.value(),
            };
            if best.map_or(true, |(_, v)| value > v) {
                best = Some((mv, value));
            }
        }
        best.map(|(mv, _)| mv)
    }
}

impl Strategy for RevengeLuckStrategy {
    fn name(&self) -> &str {
        "Revenge Luck Bot"
    }

    fn decide(&mut self, pos: &Position) -> Result<Move, StrategyError> {
        let moves = legal_moves(pos)?;
        self.update_luck(piece_count(pos, pos.side_to_move));

        if self.rng.gen::<f64>() * 100.0 < self.bad_luck as f64 {
            if let Some(mv) = Self::sacrifice(pos, &moves) {
                self.bad_luck /= 2;
                debug!(bad_luck = self.bad_luck, "sacrificing to appease fate");
                return Ok(mv);
            }
        }

        let caps = captures(pos, &moves);
        if !caps.is_empty() {
            return choose(&mut self.rng, &caps);
        }
        let chk = checks(pos, &moves);
        if !chk.is_empty() {
            return choose(&mut self.rng, &chk);
        }
        choose(&mut self.rng, &moves)
    }
}

#[cfg(test)]
#[path = "revenge_luck_tests.rs"]
mod revenge_luck_tests;
