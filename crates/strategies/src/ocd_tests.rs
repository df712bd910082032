use super::*;

use rand::SeedableRng;

#[test]
fn test_random_formation_ranges() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    for _ in 0..200 {
        let f = Formation::random(&mut rng);
        assert!((2..=6).contains(&f.pawn_rank));
        assert!((0..=7).contains(&f.rook_file));
    }
}

#[test]
fn test_knight_patterns() {
    let diag = Formation {
        pawn_rank: 3,
        rook_file: 5,
        knights: KnightPattern::Diagonal,
    };
    // c3 lies on the a1-h8 diagonal, b7 on the a8-h1 one.
    assert!(diag.fits(PieceKind::Knight, 18));
    assert!(diag.fits(PieceKind::Knight, 49));
    assert!(!diag.fits(PieceKind::Knight, 17));

    let file = Formation {
        knights: KnightPattern::File,
        ..diag
    };
    assert!(file.fits(PieceKind::Knight, 5));
    assert!(!file.fits(PieceKind::Bishop, 5));
}

#[test]
fn test_completion_at_startpos() {
    let f = Formation {
        pawn_rank: 1,
        rook_file: 0,
        knights: KnightPattern::Diagonal,
    };
    // All pawns, one rook of two, no knights.
    let c = f.completion(&Position::startpos());
    assert!((c - 0.7).abs() < 1e-9);
}

#[test]
fn test_missing_kinds_count_as_complete() {
    let f = Formation {
        pawn_rank: 4,
        rook_file: 2,
        knights: KnightPattern::Rank,
    };
    let pos = Position::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    assert!((f.completion(&pos) - 1.0).abs() < 1e-9);
}

#[test]
fn test_improves_formation_when_incomplete() {
    let mut bot = OcdStrategy::new(ChaCha8Rng::seed_from_u64(5));
    bot.formation = Formation {
        pawn_rank: 3,
        rook_file: 7,
        knights: KnightPattern::File,
    };
    let pos = Position::startpos();
    let mv = bot.decide(&pos).unwrap();

    let kind = pos.piece_at(mv.from).unwrap().kind;
    match kind {
        PieceKind::Pawn => assert_eq!(rank_of(mv.to), 3),
        PieceKind::Knight => assert_eq!(mv.to, 23),
        other => panic!("unexpected {other:?} move"),
    }
}

#[test]
fn test_attack_mode_captures() {
    let mut bot = OcdStrategy::new(ChaCha8Rng::seed_from_u64(5));
    // No pawns, rooks or knights: the formation is trivially complete.
    bot.formation = Formation {
        pawn_rank: 2,
        rook_file: 0,
        knights: KnightPattern::Diagonal,
    };
    let pos = Position::from_fen("4k3/8/8/3p4/8/8/8/3QK3 w - - 0 1").unwrap();
    let mv = bot.decide(&pos).unwrap();
    assert!(pos.is_capture(mv));
}

#[test]
fn test_goal_is_redrawn_every_fifteen_turns() {
    let mut bot = OcdStrategy::new(ChaCha8Rng::seed_from_u64(8));
    let pos = Position::startpos();
    let mut seen = vec![bot.formation()];
    for _ in 0..(REFRESH_EVERY * 4) {
        bot.decide(&pos).unwrap();
        seen.push(bot.formation());
    }
    seen.dedup();
    assert!(seen.len() <= 5);
}
