//! PGN export.

use crate::board::{Position, START_FEN};
use crate::san::line_to_san;
use crate::types::{Color, Move};

const LINE_WIDTH: usize = 80;

/// Escape a header value for use inside a quoted PGN tag.
fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Render a complete PGN game.
///
/// `headers` are written in the order given. When `start` is not the
/// standard initial position, `SetUp` and `FEN` tags are appended so the
/// movetext can be replayed.
pub fn export_game(
    headers: &[(String, String)],
    start: &Position,
    moves: &[Move],
    result: &str,
) -> String {
    let mut out = String::new();
    for (name, value) in headers {
        out.push_str(&format!("[{} \"{}\"]\n", name, escape(value)));
    }
    let fen = start.to_fen();
    if fen != START_FEN {
        out.push_str("[SetUp \"1\"]\n");
        out.push_str(&format!("[FEN \"{}\"]\n", escape(&fen)));
    }
    out.push('\n');

    let sans = line_to_san(start, moves);
    let mut tokens = Vec::with_capacity(sans.len() * 3 / 2 + 1);
    let mut number = start.fullmove_number;
    let mut side = start.side_to_move;
    for (i, san) in sans.into_iter().enumerate() {
        match side {
            Color::White => tokens.push(format!("{number}.")),
            Color::Black if i == 0 => tokens.push(format!("{number}...")),
            Color::Black => {}
        }
        tokens.push(san);
        if side == Color::Black {
            number += 1;
        }
        side = side.other();
    }
    tokens.push(result.to_string());

    let mut line_len = 0;
    for tok in tokens {
        if line_len > 0 && line_len + 1 + tok.len() > LINE_WIDTH {
            out.push('\n');
            line_len = 0;
        }
        if line_len > 0 {
            out.push(' ');
            line_len += 1;
        }
        line_len += tok.len();
        out.push_str(&tok);
    }
    out.push_str("\n\n");
    out
}

#[cfg(test)]
#[path = "pgn_tests.rs"]
mod pgn_tests;
