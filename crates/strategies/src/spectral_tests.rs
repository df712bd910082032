use super::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_move_distance_by_piece() {
    // b1 -> c3 is a single knight jump.
    assert_eq!(move_distance(PieceKind::Knight, 1, 18), Some(1));
    assert_eq!(move_distance(PieceKind::Knight, 0, 63), Some(3));
    assert_eq!(move_distance(PieceKind::Bishop, 2, 29), Some(3));
    assert_eq!(move_distance(PieceKind::Bishop, 2, 3), None);
    assert_eq!(move_distance(PieceKind::Rook, 0, 56), Some(7));
    assert_eq!(move_distance(PieceKind::Rook, 0, 9), None);
    assert_eq!(move_distance(PieceKind::Queen, 0, 9), Some(1));
    assert_eq!(move_distance(PieceKind::Queen, 0, 17), Some(3));
    assert_eq!(move_distance(PieceKind::King, 0, 18), Some(2));
    assert_eq!(move_distance(PieceKind::Pawn, 8, 17), Some(2));
}

#[test]
fn test_lone_piece_has_zero_connectivity() {
    let pos = Position::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    assert_eq!(fiedler_value(&pos, Color::White), 0.0);
    assert_eq!(cohesion(&pos, Color::White), 0.0);
}

#[test]
fn test_two_adjacent_pieces() {
    // King e1 and rook e2: one edge of weight 1, eigenvalues 0 and 2.
    let pos = Position::from_fen("4k3/8/8/8/8/8/4R3/4K3 w - - 0 1").unwrap();
    assert!(close(fiedler_value(&pos, Color::White), 2.0));
    assert!(close(cohesion(&pos, Color::White), 2.0));
    assert!(close(cohesion(&pos, Color::Black), -2.0));
}

#[test]
fn test_disconnected_pieces_score_zero() {
    // The rook on a1 is cut off from the king and bishop on the h-file.
    let pos = Position::from_fen("4k3/8/8/8/8/7B/8/R6K w - - 0 1").unwrap();
    assert!(close(fiedler_value(&pos, Color::White), 0.0));
}

#[test]
fn test_laplacian_rows_sum_to_zero() {
    let pos = Position::startpos();
    for color in Color::ALL {
        let lap = laplacian(&pos, color);
        assert_eq!(lap.len(), 16);
        for row in &lap {
            assert!(row.iter().sum::<f64>().abs() < 1e-9);
        }
    }
}

#[test]
fn test_startpos_values_are_clamped() {
    let pos = Position::startpos();
    for color in Color::ALL {
        let v = fiedler_value(&pos, color);
        assert!((0.0..=MAX_FIEDLER).contains(&v));
    }
}
