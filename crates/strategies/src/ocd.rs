use chess_core::{file_of, rank_of, Move, PieceKind, Position, Strategy, StrategyError};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::common::{captures, checks, choose, legal_moves};

/// Goals are redrawn every this many turns.
pub const REFRESH_EVERY: u32 = 15;
/// Formation completion at which the strategy turns to attacking.
pub const ATTACK_THRESHOLD: f64 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnightPattern {
    /// Either long diagonal.
    Diagonal,
    /// The pawn target rank.
    Rank,
    /// The rook target file.
    File,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Formation {
    /// 0-based rank index, 2 through 6.
    pub pawn_rank: i8,
    pub rook_file: i8,
    pub knights: KnightPattern,
}

impl Formation {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let knights = match rng.gen_range(0..3) {
            0 => KnightPattern::Diagonal,
            1 => KnightPattern::Rank,
            _ => KnightPattern::File,
        };
        Self {
            pawn_rank: rng.gen_range(2..=6),
            rook_file: rng.gen_range(0..=7),
            knights,
        }
    }

    /// Whether a piece of `kind` standing on `sq` is in formation. Kinds
    /// without a goal never are.
    pub fn fits(&self, kind: PieceKind, sq: u8) -> bool {
        let (f, r) = (file_of(sq), rank_of(sq));
        match kind {
            PieceKind::Pawn => r == self.pawn_rank,
            PieceKind::Rook => f == self.rook_file,
            PieceKind::Knight => match self.knights {
                KnightPattern::Diagonal => f == r || f == 7 - r,
                KnightPattern::Rank => r == self.pawn_rank,
                KnightPattern::File => f == self.rook_file,
            },
            _ => false,
        }
    }

    /// Weighted share of the mover's pawns, rooks and knights in formation.
    /// A kind with no pieces left counts as complete.
    pub fn completion(&self, pos: &Position) -> f64 {
        let me = pos.side_to_move;
        let ratio = |kind| {
            let squares = pos.pieces(me, kind);
            let total = squares.popcount();
            if total == 0 {
                return 1.0;
            }
            let fit = squares.squares().filter(|&s| self.fits(kind, s)).count();
            fit as f64 / total as f64
        };
        ratio(PieceKind::Pawn) * 0.6 + ratio(PieceKind::Rook) * 0.2 + ratio(PieceKind::Knight) * 0.2
    }
}

/// Obsessed with lining its pieces up; only attacks once the formation
/// is mostly in place.
#[derive(Debug, Clone)]
pub struct OcdStrategy {
    rng: ChaCha8Rng,
    turn: u32,
    formation: Formation,
}

impl OcdStrategy {
    pub fn new(mut rng: ChaCha8Rng) -> Self {
        let formation = Formation::random(&mut rng);
        Self {
            rng,
            turn: 0,
            formation,
        }
    }

    pub fn formation(&self) -> Formation {
        self.formation
    }

    fn in_formation(&self, pos: &Position, mv: Move) -> bool {
        pos.piece_at(mv.from)
            .is_some_and(|pc| self.formation.fits(pc.kind, mv.to))
    }

    fn improve(&mut self, pos: &Position, moves: &[Move]) -> Result<Move, StrategyError> {
        let (formation_captures, formation_quiet): (Vec<Move>, Vec<Move>) = moves
            .iter()
            .copied()
            .filter(|&m| self.in_formation(pos, m))
            .partition(|&m| pos.is_capture(m));

        if !formation_captures.is_empty() {
            return choose(&mut self.rng, &formation_captures);
        }
        if !formation_quiet.is_empty() {
            return choose(&mut self.rng, &formation_quiet);
        }
        let caps = captures(pos, moves);
        if !caps.is_empty() {
            return choose(&mut self.rng, &caps);
        }
        let chk = checks(pos, moves);
        if !chk.is_empty() {
            return choose(&mut self.rng, &chk);
        }
        choose(&mut self.rng, moves)
    }

    fn attack(&mut self, pos: &Position, moves: &[Move]) -> Result<Move, StrategyError> {
        let keeps: Vec<Move> = moves
            .iter()
            .copied()
            .filter(|&m| self.in_formation(pos, m))
            .collect();

        for group in [captures(pos, moves), checks(pos, moves)] {
            if group.is_empty() {
                continue;
            }
            let tidy: Vec<Move> = group.iter().copied().filter(|m| keeps.contains(m)).collect();
            return if tidy.is_empty() {
                choose(&mut self.rng, &group)
            } else {
                choose(&mut self.rng, &tidy)
            };
        }
        if !keeps.is_empty() {
            return choose(&mut self.rng, &keeps);
        }
        choose(&mut self.rng, moves)
    }
}

impl Strategy for OcdStrategy {
    fn name(&self) -> &str {
        "OCD Bot"
    }

    fn decide(&mut self, pos: &Position) -> Result<Move, StrategyError> {
        let moves = legal_moves(pos)?;
        self.turn += 1;
        if self.turn % REFRESH_EVERY == 0 {
            self.formation = Formation::random(&mut self.rng);
            debug!(turn = self.turn, formation = ?self.formation, "new formation goal");
        }

        if self.formation.completion(pos) >= ATTACK_THRESHOLD {
            self.attack(pos, &moves)
        } else {
            self.improve(pos, &moves)
        }
    }
}

#[cfg(test)]
#[path = "ocd_tests.rs"]
mod ocd_tests;
