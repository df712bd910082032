//! A strategy whose pieces are on a leash.
//!
//! Every piece that leaves its square must come back within three of our
//! turns or it is frozen for the rest of the game. Bookkeeping is keyed by
//! [`PieceId`], so a capture that lands another piece on a vacated square
//! never inherits the old occupant's deadline.

use std::collections::{BTreeMap, BTreeSet};

use chess_core::{sq_to_coord, Move, PieceId, Position, Strategy, StrategyError};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, warn};

use crate::common::{choose, legal_moves};

/// Turns a piece may stay away from its origin.
pub const RETURN_WINDOW: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Leash {
    pub exit_turn: u32,
    pub origin: u8,
    pub remaining: u32,
}

#[derive(Debug, Clone)]
pub struct ReturnLineStrategy {
    rng: ChaCha8Rng,
    turn: u32,
    tracked: BTreeMap<PieceId, Leash>,
    trapped: BTreeSet<PieceId>,
}

impl ReturnLineStrategy {
    pub fn new(rng: ChaCha8Rng) -> Self {
        Self {
            rng,
            turn: 0,
            tracked: BTreeMap::new(),
            trapped: BTreeSet::new(),
        }
    }

    pub fn leash(&self, id: PieceId) -> Option<Leash> {
        self.tracked.get(&id).copied()
    }

    pub fn is_trapped(&self, id: PieceId) -> bool {
        self.trapped.contains(&id)
    }

    /// Forget pieces that have left the board.
    fn prune(&mut self, pos: &Position) {
        self.tracked.retain(|&id, _| pos.square_of(id).is_some());
        self.trapped.retain(|&id| pos.square_of(id).is_some());
    }

    fn tick(&mut self) {
        let mut expired = Vec::new();
        for (&id, leash) in self.tracked.iter_mut() {
            leash.remaining = leash.remaining.saturating_sub(1);
            if leash.remaining == 0 {
                expired.push(id);
            }
        }
        for id in expired {
            self.tracked.remove(&id);
            self.trapped.insert(id);
            debug!(piece = id.0, turn = self.turn, "piece failed to return and is trapped");
        }
    }
}

impl Strategy for ReturnLineStrategy {
    fn name(&self) -> &str {
        "Return Line Bot"
    }

    fn decide(&mut self, pos: &Position) -> Result<Move, StrategyError> {
        let moves = legal_moves(pos)?;
        self.turn += 1;
        self.prune(pos);
        self.tick();

        let mut returning = Vec::new();
        let mut allowed = Vec::new();
        let mut emergency = Vec::new();
        for &mv in &moves {
            let Some(id) = pos.piece_id_at(mv.from) else {
                continue;
            };
            if self.trapped.contains(&id) {
                continue;
            }
            match self.tracked.get(&id) {
                Some(leash) if mv.to == leash.origin => returning.push(mv),
                Some(leash) if leash.remaining > 1 => allowed.push(mv),
                Some(_) => {}
                None => allowed.push(mv),
            }
            emergency.push(mv);
        }

        if !returning.is_empty() {
            let mv = choose(&mut self.rng, &returning)?;
            if let Some(id) = pos.piece_id_at(mv.from) {
                self.tracked.remove(&id);
                debug!(piece = id.0, square = %sq_to_coord(mv.to), "piece returned home");
            }
            return Ok(mv);
        }

        if !allowed.is_empty() {
            let mv = choose(&mut self.rng, &allowed)?;
            if let Some(id) = pos.piece_id_at(mv.from) {
                let turn = self.turn;
                self.tracked.entry(id).or_insert(Leash {
                    exit_turn: turn,
                    origin: mv.from,
                    remaining: RETURN_WINDOW,
                });
            }
            return Ok(mv);
        }

        if !emergency.is_empty() {
            warn!(turn = self.turn, "no permitted move, moving a piece past its deadline");
            return choose(&mut self.rng, &emergency);
        }

        warn!(turn = self.turn, "every movable piece is trapped, ignoring the leash");
        choose(&mut self.rng, &moves)
    }
}

#[cfg(test)]
#[path = "return_line_tests.rs"]
mod return_line_tests;
