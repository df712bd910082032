use super::*;

use chess_core::parse_uci_move;
use rand::SeedableRng;

fn strategy(seed: u64) -> WorstfishStrategy {
    WorstfishStrategy::new(ChaCha8Rng::seed_from_u64(seed))
}

#[test]
fn test_startpos_is_level() {
    let pos = Position::startpos();
    assert_eq!(evaluate(&pos, Color::White), 0.0);
    assert_eq!(evaluate(&pos, Color::Black), 0.0);
}

#[test]
fn test_never_plays_an_available_mate() {
    let pos = Position::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").unwrap();
    let mate = parse_uci_move(&pos, "a1a8").unwrap();
    assert!(after(&pos, mate, |next| next.is_checkmate()));

    for seed in 0..50 {
        assert_ne!(strategy(seed).decide(&pos).unwrap(), mate);
    }
}

#[test]
fn test_turns_down_free_material() {
    let pos = Position::from_fen("4k3/8/8/3q4/8/8/3R4/4K3 w - - 0 1").unwrap();
    let grab = parse_uci_move(&pos, "d2d5").unwrap();

    for seed in 0..20 {
        let mv = strategy(seed).decide(&pos).unwrap();
        assert_ne!(mv, grab);
        assert!(!pos.is_capture(mv));
    }
}

#[test]
fn test_picks_a_lowest_scoring_move() {
    let pos = Position::from_fen("4k3/8/8/3q4/8/8/3R4/4K3 w - - 0 1").unwrap();
    let scores: Vec<f64> = pos
        .legal_moves()
        .into_iter()
        .map(|m| after(&pos, m, |next| evaluate(next, Color::White)))
        .collect();
    let lowest = scores.iter().copied().fold(f64::INFINITY, f64::min);

    let mv = strategy(4).decide(&pos).unwrap();
    assert_eq!(after(&pos, mv, |next| evaluate(next, Color::White)), lowest);
}
