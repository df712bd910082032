use chess_core::{
    file_of, is_light_square, rank_of, Move, PieceKind, Position, Strategy, StrategyError,
};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::clock::Clock;
use crate::common::{choose, legal_moves};

/// Plays by omens: the weekday curses squares, the move number blesses a
/// piece kind.
///
/// Moves leaving a cursed square or made by a lucky piece are "good"; moves
/// onto a cursed square are "bad". Good moves are taken 70% of the time, bad
/// ones only when nothing else is left or a 10% chance says so.
pub struct SuperstitionStrategy {
    rng: ChaCha8Rng,
    clock: Box<dyn Clock>,
}

impl SuperstitionStrategy {
    pub fn new(rng: ChaCha8Rng, clock: Box<dyn Clock>) -> Self {
        Self { rng, clock }
    }
}

/// Cursed squares for a weekday (Monday = 0).
fn is_cursed(weekday: u32, sq: u8) -> bool {
    let (f, r) = (file_of(sq), rank_of(sq));
    match weekday {
        0 => (f == 0 || f == 7) && (r == 0 || r == 7),
        1 => (3..=4).contains(&f) && (3..=4).contains(&r),
        2 => is_light_square(sq),
        3 => !is_light_square(sq),
        4 => f == 0 || f == 7,
        5 => r == 0 || r == 7,
        _ => false,
    }
}

/// Lucky piece kind for a move number; `None` means every kind is lucky.
fn lucky_kind(fullmove: u32) -> Option<PieceKind> {
    match fullmove % 7 {
        0 => None,
        n => Some(PieceKind::ALL[(n - 1) as usize]),
    }
}

/// Legal moves sorted by omen.
#[derive(Debug, Default)]
struct Omens {
    good: Vec<Move>,
    neutral: Vec<Move>,
    bad: Vec<Move>,
}

fn read_omens(pos: &Position, moves: &[Move], weekday: u32) -> Omens {
    let lucky = lucky_kind(pos.fullmove_number);
    let mut omens = Omens::default();
    for &mv in moves {
        let Some(pc) = pos.piece_at(mv.from) else {
            omens.neutral.push(mv);
            continue;
        };
        // Captured kind numbered from pawn = 1 against the weekday number.
        let lucky_capture = pos.is_capture(mv)
            && pos
                .piece_at(mv.to)
                .is_some_and(|t| t.kind.idx() as u32 + 1 == weekday);

        if is_cursed(weekday, mv.from) {
            omens.good.push(mv);
        } else if is_cursed(weekday, mv.to) {
            omens.bad.push(mv);
        } else if lucky.map_or(true, |k| k == pc.kind) || lucky_capture {
            omens.good.push(mv);
        } else {
            omens.neutral.push(mv);
        }
    }
    omens
}

impl Strategy for SuperstitionStrategy {
    fn name(&self) -> &str {
        "Superstition Bot"
    }

    fn decide(&mut self, pos: &Position) -> Result<Move, StrategyError> {
        let moves = legal_moves(pos)?;
        let Omens { good, neutral, bad } = read_omens(pos, &moves, self.clock.weekday());

        if !good.is_empty() && self.rng.gen::<f64>() < 0.7 {
            choose(&mut self.rng, &good)
        } else if !neutral.is_empty() && (bad.is_empty() || self.rng.gen::<f64>() < 0.9) {
            choose(&mut self.rng, &neutral)
        } else if !bad.is_empty() {
            choose(&mut self.rng, &bad)
        } else {
            choose(&mut self.rng, &moves)
        }
    }
}

#[cfg(test)]
#[path = "superstition_tests.rs"]
mod superstition_tests;
