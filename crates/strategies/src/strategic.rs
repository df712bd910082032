//! A conventional one-ply evaluator: material, piece-square tables,
//! mobility, king safety and pawn structure.

use chess_core::{file_of, rank_of, Color, Move, PieceKind, Position, Strategy, StrategyError};
use rand_chacha::ChaCha8Rng;

use crate::common::{after, best_by, captured_kind, choose, legal_moves};

const MATE: f64 = 10_000.0;

const MATERIAL_WEIGHT: f64 = 1.0;
const POSITION_WEIGHT: f64 = 0.3;
const MOBILITY_WEIGHT: f64 = 0.2;
const KING_SAFETY_WEIGHT: f64 = 0.4;
const PAWN_WEIGHT: f64 = 0.1;

// Tables are laid out as seen from White's side of the board: row 0 is the
// eighth rank, row 7 the first.
type Table = [[i32; 8]; 8];

const PAWN_TABLE: Table = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [50, 50, 50, 50, 50, 50, 50, 50],
    [10, 10, 20, 30, 30, 20, 10, 10],
    [5, 5, 10, 25, 25, 10, 5, 5],
    [0, 0, 0, 20, 20, 0, 0, 0],
    [5, -5, -10, 0, 0, -10, -5, 5],
    [5, 10, 10, -20, -20, 10, 10, 5],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

const KNIGHT_TABLE: Table = [
    [-50, -40, -30, -30, -30, -30, -40, -50],
    [-40, -20, 0, 0, 0, 0, -20, -40],
    [-30, 0, 10, 15, 15, 10, 0, -30],
    [-30, 5, 15, 20, 20, 15, 5, -30],
    [-30, 0, 15, 20, 20, 15, 0, -30],
    [-30, 5, 10, 15, 15, 10, 5, -30],
    [-40, -20, 0, 5, 5, 0, -20, -40],
    [-50, -40, -30, -30, -30, -30, -40, -50],
];

const BISHOP_TABLE: Table = [
    [-20, -10, -10, -10, -10, -10, -10, -20],
    [-10, 0, 0, 0, 0, 0, 0, -10],
    [-10, 0, 10, 10, 10, 10, 0, -10],
    [-10, 5, 5, 10, 10, 5, 5, -10],
    [-10, 0, 5, 10, 10, 5, 0, -10],
    [-10, 5, 5, 5, 5, 5, 5, -10],
    [-10, 0, 5, 0, 0, 5, 0, -10],
    [-20, -10, -10, -10, -10, -10, -10, -20],
];

const ROOK_TABLE: Table = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [5, 10, 10, 10, 10, 10, 10, 5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [0, 0, 0, 5, 5, 0, 0, 0],
];

const QUEEN_TABLE: Table = [
    [-20, -10, -10, -5, -5, -10, -10, -20],
    [-10, 0, 0, 0, 0, 0, 0, -10],
    [-10, 0, 5, 5, 5, 5, 0, -10],
    [-5, 0, 5, 5, 5, 5, 0, -5],
    [0, 0, 5, 5, 5, 5, 0, -5],
    [-10, 5, 5, 5, 5, 5, 0, -10],
    [-10, 0, 5, 0, 0, 0, 0, -10],
    [-20, -10, -10, -5, -5, -10, -10, -20],
];

const KING_MIDGAME_TABLE: Table = [
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-20, -30, -30, -40, -40, -30, -30, -20],
    [-10, -20, -20, -20, -20, -20, -20, -10],
    [20, 20, 0, 0, 0, 0, 20, 20],
    [20, 30, 10, 0, 0, 10, 30, 20],
];

const KING_ENDGAME_TABLE: Table = [
    [-50, -40, -30, -20, -20, -30, -40, -50],
    [-30, -20, -10, 0, 0, -10, -20, -30],
    [-30, -10, 20, 30, 30, 20, -10, -30],
    [-30, -10, 30, 40, 40, 30, -10, -30],
    [-30, -10, 30, 40, 40, 30, -10, -30],
    [-30, -10, 20, 30, 30, 20, -10, -30],
    [-30, -30, 0, 0, 0, 0, -30, -30],
    [-50, -30, -30, -30, -30, -30, -30, -50],
];

/// Centipawn values used by this evaluator.
pub fn centipawns(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 320,
        PieceKind::Bishop => 330,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 20_000,
    }
}

fn sign(c: Color) -> f64 {
    match c {
        Color::White => 1.0,
        Color::Black => -1.0,
    }
}

/// Endgame once neither side has more than one rook or queen.
fn is_endgame(pos: &Position) -> bool {
    Color::ALL.iter().all(|&c| {
        (pos.pieces(c, PieceKind::Rook) | pos.pieces(c, PieceKind::Queen)).popcount() <= 1
    })
}

fn table_value(kind: PieceKind, color: Color, sq: u8, endgame: bool) -> i32 {
    let table = match kind {
        PieceKind::Pawn => &PAWN_TABLE,
        PieceKind::Knight => &KNIGHT_TABLE,
        PieceKind::Bishop => &BISHOP_TABLE,
        PieceKind::Rook => &ROOK_TABLE,
        PieceKind::Queen => &QUEEN_TABLE,
        PieceKind::King if endgame => &KING_ENDGAME_TABLE,
        PieceKind::King => &KING_MIDGAME_TABLE,
    };
    let row = match color {
        Color::White => 7 - rank_of(sq),
        Color::Black => rank_of(sq),
    };
    table[row as usize][file_of(sq) as usize]
}

// The component scores below are all from White's point of view.

fn material(pos: &Position) -> f64 {
    let mut score = 0;
    for c in Color::ALL {
        for k in PieceKind::ALL {
            let n = pos.pieces(c, k).popcount() as i32;
            score += n * centipawns(k) * if c == Color::White { 1 } else { -1 };
        }
    }
    score as f64
}

fn placement(pos: &Position) -> f64 {
    let endgame = is_endgame(pos);
    let mut score = 0.0;
    for sq in pos.occupied() {
        if let Some(pc) = pos.piece_at(sq) {
            score += sign(pc.color) * table_value(pc.kind, pc.color, sq, endgame) as f64;
        }
    }
    score
}

fn mobility(pos: &Position) -> f64 {
    pos.legal_moves_for(Color::White).len() as f64 - pos.legal_moves_for(Color::Black).len() as f64
}

fn king_safety(pos: &Position) -> f64 {
    let (Some(wk), Some(bk)) = (
        pos.king_square(Color::White),
        pos.king_square(Color::Black),
    ) else {
        return 0.0;
    };

    let mut score = 0.0;
    score -= 50.0 * pos.attackers(Color::Black, wk).popcount() as f64;
    score += 50.0 * pos.attackers(Color::White, bk).popcount() as f64;

    if pos.is_check() {
        score -= 30.0 * sign(pos.side_to_move);
    }

    score += 10.0 * pos.attackers(Color::White, wk).popcount() as f64;
    score -= 10.0 * pos.attackers(Color::Black, bk).popcount() as f64;

    // Pawn shield in front of a castled king.
    for (color, king) in [(Color::White, wk), (Color::Black, bk)] {
        let back = color.back_rank();
        let kf = file_of(king);
        if rank_of(king) != back || (kf != 2 && kf != 6) {
            continue;
        }
        let shield_rank = back + color.forward();
        let pawns = pos.pieces(color, PieceKind::Pawn);
        for f in (kf - 1).max(0)..=(kf + 1).min(7) {
            if chess_core::sq(f, shield_rank).is_some_and(|s| pawns.contains(s)) {
                score += 15.0 * sign(color);
            }
        }
    }
    score
}

fn pawn_structure(pos: &Position) -> f64 {
    let mut score = 0.0;
    for color in Color::ALL {
        let pawns = pos.pieces(color, PieceKind::Pawn);
        let mut files = [0i32; 8];
        for s in pawns {
            files[file_of(s) as usize] += 1;
        }

        let mut penalty = 0;
        for f in 0..8 {
            if files[f] > 1 {
                penalty += (files[f] - 1) * 10;
            }
            let left = f == 0 || files[f - 1] == 0;
            let right = f == 7 || files[f + 1] == 0;
            if files[f] > 0 && left && right {
                penalty += 15 * files[f];
            }
        }
        score -= sign(color) * penalty as f64;

        for s in pawns {
            let advance = match color {
                Color::White => rank_of(s),
                Color::Black => 7 - rank_of(s),
            };
            score += sign(color) * 5.0 * advance as f64;
        }
    }
    score
}

/// Evaluation of `pos` from `me`'s point of view. Mates are worth
/// `±10000`, dead draws 0.
pub fn evaluate(pos: &Position, me: Color) -> f64 {
    if pos.is_checkmate() {
        return if pos.side_to_move == me { -MATE } else { MATE };
    }
    if pos.is_stalemate() || pos.is_insufficient_material() {
        return 0.0;
    }
    let white = material(pos) * MATERIAL_WEIGHT
        + placement(pos) * POSITION_WEIGHT
        + mobility(pos) * MOBILITY_WEIGHT
        + king_safety(pos) * KING_SAFETY_WEIGHT
        + pawn_structure(pos) * PAWN_WEIGHT;
    white * sign(me)
}

/// Picks the move with the best one-ply evaluation.
///
/// Among equally scored moves it prefers, in order, a mate, the capture of
/// at least a minor piece, and a queen promotion before falling back to a
/// random choice.
#[derive(Debug, Clone)]
pub struct StrategicStrategy {
    rng: ChaCha8Rng,
}

impl StrategicStrategy {
    pub fn new(rng: ChaCha8Rng) -> Self {
        Self { rng }
    }

    fn preferred(pos: &Position, tied: &[Move]) -> Option<Move> {
        tied.iter().copied().find(|&m| {
            after(pos, m, |next| next.is_checkmate())
                || captured_kind(pos, m).is_some_and(|k| centipawns(k) >= 300)
                || m.promo == Some(PieceKind::Queen)
        })
    }
}

impl Strategy for StrategicStrategy {
    fn name(&self) -> &str {
        "Strategic Bot"
    }

    fn decide(&mut self, pos: &Position) -> Result<Move, StrategyError> {
        let me = pos.side_to_move;
        let moves = legal_moves(pos)?;
        let best = best_by(&moves, |m| after(pos, m, |next| evaluate(next, me)));
        if best.len() > 1 {
            if let Some(mv) = Self::preferred(pos, &best) {
                return Ok(mv);
            }
        }
        choose(&mut self.rng, &best)
    }
}

#[cfg(test)]
#[path = "strategic_tests.rs"]
mod strategic_tests;
