//! Board tests: grid rebuild, validity and row clearing

use blockfall::core::{Board, LockedCells};
use blockfall::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

fn fill_row(locked: &mut LockedCells, row: i16) {
    for x in 0..BOARD_WIDTH as i16 {
        locked.insert(x, row, PieceKind::I);
    }
}

#[test]
fn test_board_default_is_empty() {
    let board = Board::default();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);
    assert_eq!(board.filled_count(), 0);

    for y in 0..BOARD_HEIGHT as i16 {
        for x in 0..BOARD_WIDTH as i16 {
            assert_eq!(board.get(x, y), Some(None), "cell ({}, {})", x, y);
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::default();
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i16, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i16), None);
}

#[test]
fn test_rebuild_mirrors_locked_cells() {
    let mut locked = LockedCells::new();
    locked.insert(0, 19, PieceKind::T);
    locked.insert(9, 0, PieceKind::L);

    let board = Board::rebuild(10, 20, &locked);
    assert_eq!(board.get(0, 19), Some(Some(PieceKind::T)));
    assert_eq!(board.get(9, 0), Some(Some(PieceKind::L)));
    assert_eq!(board.filled_count(), 2);
}

#[test]
fn test_is_valid_accepts_cells_above_board() {
    let board = Board::default();
    assert!(board.is_valid(&[(0, -1), (4, -3)]));
    // Rows above the board skip every other check.
    assert!(board.is_valid(&[(-1, -1), (10, -2)]));
}

#[test]
fn test_is_valid_rejects_out_of_bounds() {
    let board = Board::default();
    assert!(!board.is_valid(&[(-1, 0)]));
    assert!(!board.is_valid(&[(10, 5)]));
    assert!(!board.is_valid(&[(3, 20)]));
    assert!(board.is_valid(&[(0, 0), (9, 19)]));
}

#[test]
fn test_is_valid_rejects_overlap() {
    let mut locked = LockedCells::new();
    locked.insert(4, 10, PieceKind::O);
    let board = Board::rebuild(10, 20, &locked);

    assert!(!board.is_valid(&[(3, 10), (4, 10)]));
    assert!(board.is_valid(&[(3, 10), (5, 10)]));
}

#[test]
fn test_clear_two_bottom_rows_empties_board() {
    let mut locked = LockedCells::new();
    fill_row(&mut locked, 18);
    fill_row(&mut locked, 19);

    let mut board = Board::rebuild(10, 20, &locked);
    assert_eq!(board.clear_full_rows(&mut locked), 2);
    assert!(locked.is_empty());
    assert_eq!(board.filled_count(), 0);
}

#[test]
fn test_clear_non_adjacent_rows_shifts_remainder() {
    let mut locked = LockedCells::new();
    locked.insert(5, 16, PieceKind::S);
    fill_row(&mut locked, 17);
    locked.insert(0, 18, PieceKind::J);
    fill_row(&mut locked, 19);

    let mut board = Board::rebuild(10, 20, &locked);
    assert_eq!(board.clear_full_rows(&mut locked), 2);

    assert_eq!(locked.len(), 2);
    assert_eq!(locked.get(0, 19), Some(PieceKind::J));
    assert_eq!(locked.get(5, 18), Some(PieceKind::S));
    assert_eq!(board, Board::rebuild(10, 20, &locked));
}

#[test]
fn test_partial_rows_are_kept() {
    let mut locked = LockedCells::new();
    for x in 0..9 {
        locked.insert(x, 19, PieceKind::Z);
    }

    let mut board = Board::rebuild(10, 20, &locked);
    assert_eq!(board.clear_full_rows(&mut locked), 0);
    assert_eq!(locked.len(), 9);
    assert!(!board.is_row_full(19));
}

#[test]
fn test_four_row_clear_on_custom_board() {
    let mut locked = LockedCells::new();
    for y in 2..6 {
        for x in 0..6 {
            locked.insert(x, y, PieceKind::I);
        }
    }
    locked.insert(2, 1, PieceKind::T);

    let mut board = Board::rebuild(6, 6, &locked);
    assert_eq!(board.clear_full_rows(&mut locked), 4);
    assert_eq!(locked.len(), 1);
    assert_eq!(locked.get(2, 5), Some(PieceKind::T));
}
