use super::*;

#[test]
fn test_from_square() {
    assert_eq!(Bitboard::from_square(0).0, 1); // a1
    assert_eq!(Bitboard::from_square(7).0, 128); // h1
    assert_eq!(Bitboard::from_square(63).0, 1 << 63); // h8
}

#[test]
fn test_insert_remove_contains() {
    let mut bb = Bitboard::EMPTY;
    bb.insert(12);
    bb.insert(40);
    assert!(bb.contains(12));
    assert!(bb.contains(40));
    assert!(!bb.contains(13));
    bb.remove(12);
    assert!(!bb.contains(12));
    assert_eq!(bb.popcount(), 1);
}

#[test]
fn test_iteration_is_ascending() {
    let bb: Bitboard = [50u8, 3, 17].into_iter().collect();
    let squares: Vec<u8> = bb.squares().collect();
    assert_eq!(squares, vec![3, 17, 50]);
    assert_eq!(bb.first(), Some(3));
    assert_eq!(bb.last(), Some(50));
}

#[test]
fn test_empty_set_has_no_bounds() {
    assert!(Bitboard::EMPTY.is_empty());
    assert_eq!(Bitboard::EMPTY.first(), None);
    assert_eq!(Bitboard::EMPTY.last(), None);
    assert_eq!(Bitboard::ALL.popcount(), 64);
}
