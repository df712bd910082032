use crate::attacks::*;
use crate::bitboard::Bitboard;
use crate::{board::Position, types::*};

/// Generate all legal moves, returning a freshly allocated vector.
/// Internally delegates to `legal_moves_into`, cloning the position only once.
pub fn legal_moves(pos: &Position) -> Vec<Move> {
    let mut tmp = pos.clone();
    let mut out = Vec::with_capacity(64);
    legal_moves_into(&mut tmp, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
pub fn legal_moves_into(pos: &mut Position, out: &mut Vec<Move>) {
    out.clear();
    pseudo_moves(pos, out);

    let mover = pos.side_to_move;
    // Filter illegal moves in-place by playing them on the mutable position.
    out.retain(|&mv| {
        let undo = pos.make_move(mv);
        let illegal = pos.in_check(mover);
        pos.unmake_move(mv, undo);
        !illegal
    });
}

impl Position {
    pub fn legal_moves(&self) -> Vec<Move> {
        legal_moves(self)
    }

    /// Legal moves `color` would have if it were its turn.
    ///
    /// Any en-passant square belongs to the real side to move, so it is
    /// dropped when asking about the other side.
    pub fn legal_moves_for(&self, color: Color) -> Vec<Move> {
        if color == self.side_to_move {
            return legal_moves(self);
        }
        let mut tmp = self.clone();
        tmp.side_to_move = color;
        tmp.en_passant = None;
        let mut out = Vec::with_capacity(64);
        legal_moves_into(&mut tmp, &mut out);
        out
    }

    pub fn in_check(&self, c: Color) -> bool {
        match self.king_square(c) {
            Some(k) => self.is_square_attacked(k, c.other()),
            None => false,
        }
    }

    /// The side to move is in check.
    pub fn is_check(&self) -> bool {
        self.in_check(self.side_to_move)
    }

    pub fn is_capture(&self, mv: Move) -> bool {
        mv.is_en_passant
            || self
                .piece_at(mv.to)
                .is_some_and(|pc| pc.color != self.side_to_move)
    }

    /// True if playing `mv` leaves the opponent in check.
    pub fn gives_check(&self, mv: Move) -> bool {
        let mut tmp = self.clone();
        tmp.make_move(mv);
        tmp.is_check()
    }
}

fn pseudo_moves(pos: &Position, out: &mut Vec<Move>) {
    let us = pos.side_to_move;
    let own = pos.occupied_by(us);
    let occupied = pos.occupied();
    for from in own {
        let Some(pc) = pos.piece_at(from) else {
            continue;
        };
        let targets = match pc.kind {
            PieceKind::Pawn => {
                gen_pawn(pos, from, us, out);
                continue;
            }
            PieceKind::Knight => knight_attacks(from),
            PieceKind::Bishop => bishop_attacks(from, occupied),
            PieceKind::Rook => rook_attacks(from, occupied),
            PieceKind::Queen => queen_attacks(from, occupied),
            PieceKind::King => {
                gen_castle(pos, from, us, out);
                king_attacks(from)
            }
        };
        push_targets(from, targets & !own, out);
    }
}

fn push_targets(from: u8, targets: Bitboard, out: &mut Vec<Move>) {
    out.extend(targets.squares().map(|to| Move::new(from, to)));
}

fn push_pawn_move(from: u8, to: u8, c: Color, out: &mut Vec<Move>) {
    if rank_of(to) == 7 - c.back_rank() {
        for pk in PieceKind::PROMOTIONS {
            out.push(Move::with_promo(from, to, pk));
        }
    } else {
        out.push(Move::new(from, to));
    }
}

fn gen_pawn(pos: &Position, from: u8, c: Color, out: &mut Vec<Move>) {
    let f = file_of(from);
    let r = rank_of(from);
    let dir = c.forward();
    let start_rank = c.back_rank() + dir;

    if let Some(to) = sq(f, r + dir) {
        if pos.piece_at(to).is_none() {
            push_pawn_move(from, to, c, out);

            if r == start_rank {
                if let Some(to2) = sq(f, r + 2 * dir) {
                    if pos.piece_at(to2).is_none() {
                        out.push(Move::new(from, to2));
                    }
                }
            }
        }
    }

    let attacks = pawn_attacks(from, c);
    for to in attacks & pos.occupied_by(c.other()) {
        push_pawn_move(from, to, c, out);
    }
    if let Some(ep) = pos.en_passant {
        if attacks.contains(ep) && pos.piece_at(ep).is_none() {
            let mut mv = Move::new(from, ep);
            mv.is_en_passant = true;
            out.push(mv);
        }
    }
}

fn gen_castle(pos: &Position, from: u8, c: Color, out: &mut Vec<Move>) {
    let rank = c.back_rank();
    let Some(king_from) = sq(4, rank) else {
        return;
    };
    if from != king_from || pos.in_check(c) {
        return;
    }

    let enemy = c.other();
    let home_rook = |file: i8| {
        sq(file, rank).and_then(|s| pos.piece_at(s)) == Some(Piece::new(c, PieceKind::Rook))
    };
    let empty = |files: &[i8]| {
        files
            .iter()
            .all(|&f| sq(f, rank).is_some_and(|s| pos.piece_at(s).is_none()))
    };
    let safe = |files: &[i8]| {
        files
            .iter()
            .all(|&f| sq(f, rank).is_some_and(|s| !pos.is_square_attacked(s, enemy)))
    };

    // King side: f and g empty and unattacked.
    if pos.castling.kingside(c) && home_rook(7) && empty(&[5, 6]) && safe(&[5, 6]) {
        if let Some(to) = sq(6, rank) {
            let mut mv = Move::new(from, to);
            mv.is_castle = true;
            out.push(mv);
        }
    }
    // Queen side: b, c and d empty; only c and d need to be safe.
    if pos.castling.queenside(c) && home_rook(0) && empty(&[1, 2, 3]) && safe(&[2, 3]) {
        if let Some(to) = sq(2, rank) {
            let mut mv = Move::new(from, to);
            mv.is_castle = true;
            out.push(mv);
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
