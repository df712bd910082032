use crate::{board::Position, movegen::legal_moves, types::*};

pub fn move_to_uci(mv: Move) -> String {
    let mut s = String::with_capacity(5);
    s.push_str(&sq_to_coord(mv.from));
    s.push_str(&sq_to_coord(mv.to));
    if let Some(p) = mv.promo {
        s.push(p.letter().to_ascii_lowercase());
    }
    s
}

/// Parse long algebraic notation (`e2e4`, `e7e8q`) into the matching legal
/// move, so castling and en-passant flags come out right.
pub fn parse_uci_move(pos: &Position, txt: &str) -> Option<Move> {
    let txt = txt.trim();
    if !(4..=5).contains(&txt.len()) || !txt.is_ascii() {
        return None;
    }
    let from = coord_to_sq(&txt[0..2])?;
    let to = coord_to_sq(&txt[2..4])?;
    let promo = match txt.chars().nth(4) {
        Some(c) => match PieceKind::from_letter(c)? {
            PieceKind::Pawn | PieceKind::King => return None,
            k => Some(k),
        },
        None => None,
    };

    let wanted = Move {
        from,
        to,
        promo,
        is_en_passant: false,
        is_castle: false,
    };
    legal_moves(pos).into_iter().find(|m| m.same_squares(&wanted))
}

/// Play a whitespace-separated list of UCI moves from `pos`, stopping at the
/// first one that is not legal. Returns how many were played.
pub fn play_uci_line(pos: &mut Position, line: &str) -> usize {
    let mut played = 0;
    for txt in line.split_whitespace() {
        match parse_uci_move(pos, txt) {
            Some(mv) => {
                pos.push(mv);
                played += 1;
            }
            None => break,
        }
    }
    played
}
