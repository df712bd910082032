use super::*;

use rand::SeedableRng;

#[test]
fn test_distance_score_sums_nearest_enemy_distances() {
    // King e1 is 7 from e8, knight d2 is 6.
    let pos = Position::from_fen("4k3/8/8/8/8/8/3N4/4K3 w - - 0 1").unwrap();
    assert_eq!(distance_score(&pos, Color::White), 13.0);
    // Black's lone king is nearest the knight.
    assert_eq!(distance_score(&pos, Color::Black), 6.0);
}

#[test]
fn test_plays_a_move_maximising_distance() {
    let pos = Position::from_fen("4k3/8/8/3n4/8/8/3N4/4K3 w - - 0 1").unwrap();
    let best = pos
        .legal_moves()
        .into_iter()
        .map(|m| after(&pos, m, |next| distance_score(next, Color::White)))
        .fold(f64::NEG_INFINITY, f64::max);

    for seed in 0..10 {
        let mv = ParanoidStrategy::new(ChaCha8Rng::seed_from_u64(seed))
            .decide(&pos)
            .unwrap();
        assert_eq!(after(&pos, mv, |next| distance_score(next, Color::White)), best);
    }
}
