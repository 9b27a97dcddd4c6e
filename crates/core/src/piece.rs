//! Piece module - a shape instance positioned on the board
//!
//! Coordinates are `(col, row)` with row 0 at the top. The origin is the
//! matrix's top-left corner, so an occupied matrix cell `(r, c)` lands on
//! board cell `(col + c, row + r)`.

use serde::{Deserialize, Serialize};

use crate::rng::Randomizer;
use crate::shapes::{Matrix, ShapeCatalog};
use crate::types::{Color, ShapeKind};

/// A falling (or queued) piece
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: ShapeKind,
    pub shape: Matrix,
    pub color: Color,
    pub col: i32,
    pub row: i32,
}

impl Piece {
    pub fn new(kind: ShapeKind, shape: Matrix, color: Color, col: i32, row: i32) -> Self {
        Self {
            kind,
            shape,
            color,
            col,
            row,
        }
    }

    /// Spawn a random piece centered at the top of a board `board_width` wide.
    ///
    /// Shape and color are drawn independently, shape first.
    pub fn spawn<R: Randomizer + ?Sized>(
        catalog: &ShapeCatalog,
        rng: &mut R,
        board_width: u16,
    ) -> Self {
        let shapes = catalog.shapes();
        let palette = catalog.palette();
        let entry = &shapes[rng.next_index(shapes.len()).min(shapes.len() - 1)];
        let color = palette[rng.next_index(palette.len()).min(palette.len() - 1)];
        let col = spawn_column(board_width, entry.matrix.cols());
        Self::new(entry.kind, entry.matrix.clone(), color, col, 0)
    }

    /// Matrix width in cells
    pub fn width(&self) -> usize {
        self.shape.cols()
    }

    /// Matrix height in cells
    pub fn height(&self) -> usize {
        self.shape.rows()
    }

    /// Absolute `(col, row)` of every occupied cell
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.cells_at(0, 0)
    }

    /// Occupied cells as if the piece were shifted by `(dx, dy)`
    pub fn cells_at(&self, dx: i32, dy: i32) -> impl Iterator<Item = (i32, i32)> + '_ {
        let col = self.col + dx;
        let row = self.row + dy;
        self.shape
            .cells()
            .map(move |(r, c)| (col + c as i32, row + r as i32))
    }
}

/// Return `piece` rotated 90 degrees clockwise about its origin.
///
/// Color and origin are kept; the input is untouched, so callers can test the
/// result and simply drop it if it collides.
pub fn rotate(piece: &Piece) -> Piece {
    Piece {
        shape: piece.shape.rotated_cw(),
        ..piece.clone()
    }
}

/// `floor(W / 2) - floor(matrix_width / 2)`
pub fn spawn_column(board_width: u16, matrix_width: usize) -> i32 {
    i32::from(board_width / 2) - (matrix_width / 2) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedRandomizer;
    use crate::shapes::spawn_matrix;

    #[test]
    fn test_spawn_centers_piece() {
        let catalog = ShapeCatalog::standard();
        let mut rng = ScriptedRandomizer::from_pieces(&[
            (ShapeKind::I, Color::Cyan),
            (ShapeKind::T, Color::Red),
        ]);

        let bar = Piece::spawn(&catalog, &mut rng, 10);
        assert_eq!(bar.kind, ShapeKind::I);
        assert_eq!(bar.color, Color::Cyan);
        assert_eq!((bar.col, bar.row), (3, 0));

        let tee = Piece::spawn(&catalog, &mut rng, 10);
        assert_eq!(tee.kind, ShapeKind::T);
        assert_eq!(tee.color, Color::Red);
        assert_eq!((tee.col, tee.row), (4, 0));
    }

    #[test]
    fn test_spawn_column_on_odd_and_narrow_boards() {
        assert_eq!(spawn_column(7, 2), 2);
        assert_eq!(spawn_column(4, 4), 0);
        assert_eq!(spawn_column(1, 4), -2);
    }

    #[test]
    fn test_cells_are_offset_by_origin() {
        let piece = Piece::new(ShapeKind::O, spawn_matrix(ShapeKind::O), Color::Yellow, 2, 5);
        let cells: Vec<_> = piece.cells().collect();
        assert_eq!(cells, vec![(2, 5), (3, 5), (2, 6), (3, 6)]);

        let shifted: Vec<_> = piece.cells_at(-1, 1).collect();
        assert_eq!(shifted, vec![(1, 6), (2, 6), (1, 7), (2, 7)]);
    }

    #[test]
    fn test_rotate_keeps_color_and_origin() {
        let piece = Piece::new(ShapeKind::L, spawn_matrix(ShapeKind::L), Color::Blue, 4, 2);
        let rotated = rotate(&piece);

        assert_eq!(rotated.color, Color::Blue);
        assert_eq!((rotated.col, rotated.row), (4, 2));
        assert_eq!(rotated.shape, piece.shape.rotated_cw());
        // Input untouched
        assert_eq!(piece.shape, spawn_matrix(ShapeKind::L));
    }
}
