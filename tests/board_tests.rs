//! Board tests - collision, merge and line clearing through the public API

use blockfall::core::{Board, GameError, Matrix, Piece};
use blockfall::types::{Cell, Color, ShapeKind};

const F: Cell = Cell::Filled(Color::Green);
const E: Cell = Cell::Empty;

fn dot(col: i32, row: i32, color: Color) -> Piece {
    let one = Matrix::from_rows(&[&[1]]).unwrap();
    Piece::new(ShapeKind::O, one, color, col, row)
}

#[test]
fn test_board_new_empty() {
    let board = Board::new(10, 20).unwrap();
    assert_eq!(board.width(), 10);
    assert_eq!(board.height(), 20);

    for row in 0..20 {
        for col in 0..10 {
            assert_eq!(board.get(col, row), Some(Cell::Empty), "({col}, {row})");
        }
    }
    assert_eq!(board.filled_count(), 0);
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new(10, 20).unwrap();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(10, 0), None);
    assert_eq!(board.get(0, 20), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new(10, 20).unwrap();

    assert!(board.set(5, 10, Cell::Filled(Color::Red)));
    assert_eq!(board.get(5, 10), Some(Cell::Filled(Color::Red)));
    assert!(board.is_occupied(5, 10));

    assert!(board.set(5, 10, Cell::Empty));
    assert!(!board.is_occupied(5, 10));

    assert!(!board.set(-1, 0, F));
    assert!(!board.set(10, 0, F));
}

#[test]
fn test_invalid_dimensions() {
    assert_eq!(
        Board::new(0, 0),
        Err(GameError::InvalidDimension {
            width: 0,
            height: 0
        })
    );
}

#[test]
fn test_single_line_clear_shifts_row_above_down() {
    // Bottom row full except its last cell; one marker cell above.
    let mut board = Board::from_rows(vec![vec![F, E, E, E], vec![F, F, F, E]]).unwrap();
    let piece = dot(3, 1, Color::Red);

    assert!(!board.is_blocked(&piece, 0, 0));
    board.merge(&piece);
    assert!(board.is_row_full(1));

    assert_eq!(board.clear_full_lines(), 1);
    assert_eq!(board.row(0), Some(&[E, E, E, E][..]));
    assert_eq!(board.row(1), Some(&[F, E, E, E][..]));
}

#[test]
fn test_single_row_board_clears_to_empty() {
    let mut board = Board::from_rows(vec![vec![F, F, F, E]]).unwrap();
    board.merge(&dot(3, 0, Color::Blue));

    assert_eq!(board.clear_full_lines(), 1);
    assert_eq!(board.filled_count(), 0);
}

#[test]
fn test_clear_is_idempotent() {
    let mut board = Board::from_rows(vec![
        vec![E, F, E],
        vec![F, F, F],
        vec![F, F, F],
    ])
    .unwrap();

    assert_eq!(board.clear_full_lines(), 2);
    assert_eq!(board.clear_full_lines(), 0);
    assert_eq!(board.row(2), Some(&[E, F, E][..]));
}

#[test]
fn test_clear_with_no_full_rows_leaves_board_untouched() {
    let rows = vec![vec![F, E], vec![E, F]];
    let mut board = Board::from_rows(rows.clone()).unwrap();
    let before = board.clone();

    assert_eq!(board.clear_full_lines(), 0);
    assert_eq!(board, before);
}

#[test]
fn test_whole_board_full() {
    let mut board = Board::from_rows(vec![vec![F; 5]; 4]).unwrap();
    assert_eq!(board.clear_full_lines(), 4);
    assert_eq!(board.filled_count(), 0);
}

#[test]
fn test_is_blocked_is_pure() {
    let board = Board::from_rows(vec![vec![E, F], vec![E, E]]).unwrap();
    let piece = dot(0, 0, Color::White);
    let before = board.clone();

    assert!(board.is_blocked(&piece, 1, 0));
    assert!(!board.is_blocked(&piece, 0, 1));
    assert!(board.is_blocked(&piece, 0, 2));
    assert_eq!(board, before);
}
