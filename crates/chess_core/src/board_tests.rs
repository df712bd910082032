use super::*;
use crate::uci::parse_uci_move;

fn play(pos: &mut Position, uci: &[&str]) {
    for u in uci {
        let mv = parse_uci_move(pos, u).unwrap_or_else(|| panic!("illegal move {u}"));
        pos.push(mv);
    }
}

#[test]
fn test_startpos_matches_start_fen() {
    let a = Position::startpos();
    let b = Position::from_fen(START_FEN).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.to_fen(), START_FEN);
    assert_eq!(a.hash(), b.hash());
}

#[test]
fn test_fen_roundtrip_preserves_fields() {
    let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R b Kq - 7 31";
    assert_eq!(Position::from_fen(fen).unwrap().to_fen(), fen);
}

#[test]
fn test_fen_errors() {
    assert_eq!(
        Position::from_fen("8/8/8 w - -").unwrap_err(),
        FenError::RankCount(3)
    );
    assert_eq!(Position::from_fen("8/8 w").unwrap_err(), FenError::FieldCount(2));
    assert_eq!(
        Position::from_fen("4k3/8/8/8/8/8/8/4X3 w - - 0 1").unwrap_err(),
        FenError::BadPiece('X')
    );
    assert_eq!(
        Position::from_fen("4k3/8/8/8/8/8/8/8 w - - 0 1").unwrap_err(),
        FenError::KingCount {
            color: Color::White,
            count: 0
        }
    );
    assert!(matches!(
        Position::from_fen("4k3/8/8/8/8/8/8/4K3 x - - 0 1"),
        Err(FenError::SideToMove(_))
    ));
}

#[test]
fn test_push_pop_restores_position() {
    let start = Position::startpos();
    let mut pos = start.clone();
    play(&mut pos, &["e2e4", "d7d5", "e4d5", "d8d5", "b1c3"]);
    assert_eq!(pos.ply_count(), 5);
    assert_eq!(pos.last_move().map(|m| m.to_string()), Some("b1c3".into()));

    while pos.pop().is_some() {}
    assert_eq!(pos, start);
    assert_eq!(pos.hash(), start.hash());
    assert_eq!(pos.pop(), None);
}

#[test]
fn test_piece_ids_follow_pieces() {
    let mut pos = Position::startpos();
    let knight = pos.piece_id_at(6).unwrap(); // g1
    let pawn_d7 = pos.piece_id_at(51).unwrap();

    play(&mut pos, &["g1f3", "d7d5", "f3e5"]);
    assert_eq!(pos.square_of(knight), Some(36));
    assert_eq!(pos.piece_id_at(6), None);

    // d5 pawn is captured and its id is gone for good.
    play(&mut pos, &["e7e6", "e5c6", "b7c6", "e2e4", "c8d7", "e4d5"]);
    assert_eq!(pos.square_of(pawn_d7), None);
    assert_eq!(pos.square_of(knight), None);

    pos.pop();
    assert_eq!(pos.square_of(pawn_d7), Some(35));
}

#[test]
fn test_castling_moves_rook_identity() {
    let mut pos = Position::from_fen("4k3/8/8/8/8/8/8/4K2R w K - 0 1").unwrap();
    let rook = pos.piece_id_at(7).unwrap();
    play(&mut pos, &["e1g1"]);
    assert_eq!(pos.square_of(rook), Some(5));
    assert!(!pos.castling.wk);
    pos.pop();
    assert_eq!(pos.square_of(rook), Some(7));
    assert!(pos.castling.wk);
}

#[test]
fn test_promotion_keeps_identity_and_unmakes_to_pawn() {
    let mut pos = Position::from_fen("7k/P7/8/8/8/8/8/K7 w - - 0 1").unwrap();
    let pawn = pos.piece_id_at(48).unwrap();
    play(&mut pos, &["a7a8n"]);
    assert_eq!(pos.square_of(pawn), Some(56));
    assert_eq!(
        pos.piece_at(56),
        Some(Piece::new(Color::White, PieceKind::Knight))
    );
    pos.pop();
    assert_eq!(pos.piece_at(48), Some(Piece::new(Color::White, PieceKind::Pawn)));
}

#[test]
fn test_en_passant_capture_and_undo() {
    let mut pos =
        Position::from_fen("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3").unwrap();
    let victim = pos.piece_id_at(37).unwrap(); // f5
    play(&mut pos, &["e5f6"]);
    assert_eq!(pos.piece_at(37), None);
    assert_eq!(pos.square_of(victim), None);
    pos.pop();
    assert_eq!(pos.square_of(victim), Some(37));
    assert_eq!(pos.en_passant, Some(45));
}

#[test]
fn test_repetition_count() {
    let mut pos = Position::startpos();
    assert_eq!(pos.repetition_count(), 1);
    play(&mut pos, &["g1f3", "g8f6", "f3g1", "f6g8"]);
    assert_eq!(pos.repetition_count(), 2);
    play(&mut pos, &["g1f3", "g8f6", "f3g1", "f6g8"]);
    assert_eq!(pos.repetition_count(), 3);
}

#[test]
fn test_material_count() {
    let pos = Position::startpos();
    assert_eq!(pos.material(Color::White), 39);
    assert_eq!(pos.material(Color::Black), 39);
}
