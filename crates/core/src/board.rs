//! Board module - manages the settled-cell grid
//!
//! The board is a fixed `width x height` grid where each cell is either empty
//! or filled with a color. Cells live in one flat, row-major `Vec` for cache
//! locality. Coordinates: `(col, row)` where col grows to the right and row 0
//! is the top. Coordinates are signed so hypothetical placements may fall
//! off the board; such cells simply report as blocked.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::piece::Piece;
use crate::types::Cell;

/// The settled-cell grid
///
/// Deserialization goes through the same checks as [`Board::new`], so a
/// loaded board always has positive dimensions and `width * height` cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BoardRepr")]
pub struct Board {
    width: u16,
    height: u16,
    /// Flat array of cells, row-major order (row * width + col)
    cells: Vec<Cell>,
}

/// Unchecked wire form of a [`Board`]
#[derive(Deserialize)]
struct BoardRepr {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl TryFrom<BoardRepr> for Board {
    type Error = GameError;

    fn try_from(repr: BoardRepr) -> Result<Self, Self::Error> {
        let mut board = Self::new(repr.width, repr.height)?;
        if repr.cells.len() != board.cells.len() {
            return Err(GameError::CellCount {
                expected: board.cells.len(),
                found: repr.cells.len(),
            });
        }
        board.cells = repr.cells;
        Ok(board)
    }
}

impl Board {
    /// Create a new empty board
    pub fn new(width: u16, height: u16) -> Result<Self, GameError> {
        if width == 0 || height == 0 {
            return Err(GameError::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![Cell::Empty; usize::from(width) * usize::from(height)],
        })
    }

    /// Build a board from rows, top row first
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, GameError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        let (Ok(w), Ok(h)) = (u16::try_from(width), u16::try_from(height)) else {
            return Err(GameError::TooLarge { width, height });
        };

        let mut board = Self::new(w, h)?;
        for (row, cells) in rows.into_iter().enumerate() {
            if cells.len() != width {
                return Err(GameError::RaggedRows {
                    row,
                    expected: width,
                    found: cells.len(),
                });
            }
            let start = row * width;
            board.cells[start..start + width].copy_from_slice(&cells);
        }
        Ok(board)
    }

    /// Calculate flat index from (col, row) coordinates
    #[inline(always)]
    fn index(&self, col: i32, row: i32) -> Option<usize> {
        if self.is_out_of_bounds(col, row) {
            return None;
        }
        Some((row as usize) * usize::from(self.width) + (col as usize))
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Get cell at `(col, row)`; `None` if out of bounds
    pub fn get(&self, col: i32, row: i32) -> Option<Cell> {
        self.index(col, row).map(|idx| self.cells[idx])
    }

    /// Set cell at `(col, row)`; returns false if out of bounds
    pub fn set(&mut self, col: i32, row: i32, cell: Cell) -> bool {
        match self.index(col, row) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    pub fn is_out_of_bounds(&self, col: i32, row: i32) -> bool {
        col < 0 || col >= i32::from(self.width) || row < 0 || row >= i32::from(self.height)
    }

    /// Within bounds and filled
    pub fn is_occupied(&self, col: i32, row: i32) -> bool {
        matches!(self.get(col, row), Some(Cell::Filled(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        self.row(row).is_some_and(|cells| cells.iter().all(Cell::is_filled))
    }

    /// One row of cells, top row is 0
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row >= usize::from(self.height) {
            return None;
        }
        let width = usize::from(self.width);
        let start = row * width;
        Some(&self.cells[start..start + width])
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(usize::from(self.width))
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_filled()).count()
    }

    /// Would `piece`, shifted by `(dx, dy)`, leave the board or overlap a
    /// settled cell?
    ///
    /// This is the only collision check the engine uses. Pure, no mutation.
    pub fn is_blocked(&self, piece: &Piece, dx: i32, dy: i32) -> bool {
        piece
            .cells_at(dx, dy)
            .any(|(col, row)| !matches!(self.get(col, row), Some(Cell::Empty)))
    }

    /// Write `piece`'s color into every cell it occupies at its current
    /// position.
    ///
    /// The caller must have checked `!is_blocked(piece, 0, 0)`. No collision
    /// test is repeated here; cells outside the grid are skipped.
    pub fn merge(&mut self, piece: &Piece) {
        for (col, row) in piece.cells() {
            if !self.set(col, row, Cell::Filled(piece.color)) {
                trace!("merge skipped off-board cell ({col}, {row})");
            }
        }
        trace!("merged {:?} at ({}, {})", piece.kind, piece.col, piece.row);
    }

    /// Remove every full row, prepend as many empty rows at the top, and
    /// return how many were removed.
    ///
    /// Remaining rows keep their relative order. Two-pointer scan from the
    /// bottom, no allocation.
    pub fn clear_full_lines(&mut self) -> usize {
        let width = usize::from(self.width);
        let height = usize::from(self.height);
        let mut cleared = 0;
        let mut write_row = height;

        // Scan from bottom to top
        for read_row in (0..height).rev() {
            if self.is_row_full(read_row) {
                cleared += 1;
            } else {
                write_row -= 1;
                if write_row != read_row {
                    let src = read_row * width;
                    self.cells.copy_within(src..src + width, write_row * width);
                }
            }
        }

        // Clear the vacated rows at the top
        self.cells[..write_row * width].fill(Cell::Empty);

        cleared
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{spawn_matrix, Matrix};
    use crate::types::{Color, ShapeKind};

    fn dot(col: i32, row: i32) -> Piece {
        let one = Matrix::from_rows(&[&[1]]).unwrap();
        Piece::new(ShapeKind::O, one, Color::White, col, row)
    }

    #[test]
    fn test_board_index_calculation() {
        let board = Board::new(10, 20).unwrap();
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(9, 0), Some(9));
        assert_eq!(board.index(0, 1), Some(10));
        assert_eq!(board.index(9, 19), Some(199));
        assert_eq!(board.index(-1, 0), None);
        assert_eq!(board.index(10, 0), None);
        assert_eq!(board.index(0, 20), None);
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert_eq!(
            Board::new(0, 5),
            Err(GameError::InvalidDimension {
                width: 0,
                height: 5
            })
        );
        assert!(Board::new(5, 0).is_err());
        assert!(Board::from_rows(Vec::new()).is_err());
    }

    #[test]
    fn test_from_rows_rejects_ragged_input() {
        let rows = vec![vec![Cell::Empty; 3], vec![Cell::Empty; 2]];
        assert_eq!(
            Board::from_rows(rows),
            Err(GameError::RaggedRows {
                row: 1,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn test_from_rows_reports_oversized_side() {
        let wide = vec![vec![Cell::Empty; usize::from(u16::MAX) + 1]];
        assert_eq!(
            Board::from_rows(wide),
            Err(GameError::TooLarge {
                width: 65536,
                height: 1
            })
        );
    }

    #[test]
    fn test_blocked_by_walls_floor_and_cells() {
        let mut board = Board::new(4, 4).unwrap();
        let piece = dot(0, 3);

        assert!(!board.is_blocked(&piece, 0, 0));
        assert!(board.is_blocked(&piece, -1, 0));
        assert!(board.is_blocked(&piece, 0, 1));
        assert!(board.is_blocked(&piece, 4, 0));
        assert!(board.is_blocked(&piece, 0, -4));

        board.set(1, 3, Cell::Filled(Color::Red));
        assert!(board.is_blocked(&piece, 1, 0));
    }

    #[test]
    fn test_merge_writes_piece_color() {
        let mut board = Board::new(6, 4).unwrap();
        let piece = Piece::new(ShapeKind::T, spawn_matrix(ShapeKind::T), Color::Magenta, 1, 2);
        board.merge(&piece);

        assert_eq!(board.get(2, 2), Some(Cell::Filled(Color::Magenta)));
        assert_eq!(board.get(1, 3), Some(Cell::Filled(Color::Magenta)));
        assert_eq!(board.get(2, 3), Some(Cell::Filled(Color::Magenta)));
        assert_eq!(board.get(3, 3), Some(Cell::Filled(Color::Magenta)));
        assert_eq!(board.get(1, 2), Some(Cell::Empty));
        assert_eq!(board.filled_count(), 4);
    }

    #[test]
    fn test_clear_compacts_non_contiguous_rows() {
        let f = Cell::Filled(Color::Green);
        let e = Cell::Empty;
        let mut board = Board::from_rows(vec![
            vec![e, e, f],
            vec![f, f, f],
            vec![f, e, e],
            vec![f, f, f],
        ])
        .unwrap();

        assert_eq!(board.clear_full_lines(), 2);
        assert_eq!(
            board.rows().collect::<Vec<_>>(),
            vec![&[e, e, e][..], &[e, e, e], &[e, e, f], &[f, e, e]]
        );
        assert_eq!(board.clear_full_lines(), 0);
    }
}
