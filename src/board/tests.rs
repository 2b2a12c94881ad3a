use super::*;

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
    assert_eq!(Stone::Empty.opponent(), Stone::Empty);
}

#[test]
fn test_stone_names() {
    assert_eq!(Stone::Black.to_string(), "Black");
    assert_eq!(Stone::White.to_string(), "White");
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(7, 7); // Center
    assert_eq!(pos.to_index(), 7 * 15 + 7);
    assert_eq!(pos.to_index(), 112);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(14, 14));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(15, 0));
    assert!(!Pos::is_valid(0, 15));
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 15);
    assert_eq!(TOTAL_CELLS, 225);
}

#[test]
fn test_pos_corner_indices() {
    assert_eq!(Pos::new(0, 0).to_index(), 0);
    assert_eq!(Pos::new(0, 14).to_index(), 14);
    assert_eq!(Pos::new(14, 0).to_index(), 210);
    assert_eq!(Pos::new(14, 14).to_index(), 224);
}

#[test]
fn test_bitboard_spans_words() {
    let mut bb = Bitboard::new();
    assert!(bb.is_empty());

    let last = Pos::new(14, 14);
    bb.set(last);
    bb.set(Pos::new(4, 4)); // index 64, second word
    assert!(bb.get(last));
    assert!(bb.get(Pos::new(4, 4)));
    assert!(!bb.get(Pos::new(4, 3)));
    assert_eq!(bb.count(), 2);
}

#[test]
fn test_board_get_and_clear() {
    let mut board = Board::new();
    assert!(board.is_board_empty());

    board.place_stone(Pos::new(3, 4), Stone::Black);
    board.place_stone(Pos::new(3, 5), Stone::White);
    board.place_stone(Pos::new(3, 6), Stone::Empty);

    assert_eq!(board.get(Pos::new(3, 4)), Stone::Black);
    assert_eq!(board.get(Pos::new(3, 5)), Stone::White);
    assert!(board.is_empty(Pos::new(3, 6)));
    assert_eq!(board.stone_count(), 2);

    board.clear();
    assert!(board.is_board_empty());
    assert_eq!(board, Board::new());
}
