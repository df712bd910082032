//! Standard algebraic notation for moves, as written into PGN movetext.

use crate::board::Position;
use crate::types::*;

/// SAN for a legal move `mv` in `pos`, including the `+`/`#` suffix.
pub fn move_to_san(pos: &Position, mv: Move) -> String {
    let mut out = san_body(pos, mv);

    let mut after = pos.clone();
    after.make_move(mv);
    if after.is_check() {
        out.push(if after.legal_moves().is_empty() { '#' } else { '+' });
    }
    out
}

fn san_body(pos: &Position, mv: Move) -> String {
    let Some(pc) = pos.piece_at(mv.from) else {
        return crate::uci::move_to_uci(mv);
    };

    if mv.is_castle {
        return if file_of(mv.to) == 6 { "O-O" } else { "O-O-O" }.to_string();
    }

    let capture = pos.is_capture(mv);
    let mut out = String::new();

    if pc.kind == PieceKind::Pawn {
        if capture {
            out.push((b'a' + file_of(mv.from) as u8) as char);
            out.push('x');
        }
        out.push_str(&sq_to_coord(mv.to));
        if let Some(p) = mv.promo {
            out.push('=');
            out.push(p.letter());
        }
        return out;
    }

    out.push(pc.kind.letter());

    // Other pieces of the same kind that could also reach the target.
    let rivals: Vec<u8> = pos
        .legal_moves()
        .into_iter()
        .filter(|m| m.to == mv.to && m.from != mv.from)
        .filter(|m| pos.piece_at(m.from) == Some(pc))
        .map(|m| m.from)
        .collect();

    if !rivals.is_empty() {
        let same_file = rivals.iter().any(|&s| file_of(s) == file_of(mv.from));
        let same_rank = rivals.iter().any(|&s| rank_of(s) == rank_of(mv.from));
        let coord = sq_to_coord(mv.from);
        if !same_file {
            out.push_str(&coord[..1]);
        } else if !same_rank {
            out.push_str(&coord[1..]);
        } else {
            out.push_str(&coord);
        }
    }

    if capture {
        out.push('x');
    }
    out.push_str(&sq_to_coord(mv.to));
    out
}

/// SAN for a whole line of moves starting at `start`.
pub fn line_to_san(start: &Position, moves: &[Move]) -> Vec<String> {
    let mut pos = start.clone();
    let mut out = Vec::with_capacity(moves.len());
    for &mv in moves {
        out.push(move_to_san(&pos, mv));
        pos.make_move(mv);
    }
    out
}

#[cfg(test)]
#[path = "san_tests.rs"]
mod san_tests;
