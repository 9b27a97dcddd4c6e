//! Shape catalog - the seven tetromino occupancy matrices and the color palette
//!
//! Shapes are stored as small boolean matrices (at most 4x4) in a flat,
//! row-major `ArrayVec`, so rotating a piece never allocates.
//! Colors are not tied to shapes: a spawned piece draws its shape and its
//! color independently.

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::types::{Color, ShapeKind};

/// Largest side of any shape matrix
pub const MAX_DIM: usize = 4;

/// Occupancy matrix of a shape, row 0 at the top
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Matrix {
    rows: u8,
    cols: u8,
    /// Row-major occupancy (r * cols + c)
    cells: ArrayVec<bool, { MAX_DIM * MAX_DIM }>,
}

impl Matrix {
    /// Build a matrix from rows of 0/1 values.
    ///
    /// Returns `None` for empty, ragged, or larger-than-4x4 input.
    pub fn from_rows(rows: &[&[u8]]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        if height == 0 || width == 0 || height > MAX_DIM || width > MAX_DIM {
            return None;
        }
        if rows.iter().any(|r| r.len() != width) {
            return None;
        }
        Some(Self::literal(rows))
    }

    /// Catalog literals are known to be well-formed; anything past 4x4 is cut.
    fn literal(rows: &[&[u8]]) -> Self {
        let height = rows.len().min(MAX_DIM);
        let width = rows.first().map_or(0, |r| r.len()).min(MAX_DIM);
        let mut cells = ArrayVec::new();
        for row in rows.iter().take(height) {
            for c in 0..width {
                cells.push(row.get(c).is_some_and(|&bit| bit != 0));
            }
        }
        Self {
            rows: height as u8,
            cols: width as u8,
            cells,
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows as usize
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols as usize
    }

    /// Occupancy at (row, col); out-of-range reads are empty
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> bool {
        if row >= self.rows() || col >= self.cols() {
            return false;
        }
        self.cells[row * self.cols() + col]
    }

    /// One row of the matrix
    pub fn row(&self, row: usize) -> &[bool] {
        let start = row.min(self.rows()) * self.cols();
        let end = (start + self.cols()).min(self.cells.len());
        &self.cells[start..end]
    }

    /// Occupied `(row, col)` pairs in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols();
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &filled)| filled)
            .map(move |(i, _)| (i / cols, i % cols))
    }

    /// Number of occupied sub-cells
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&filled| filled).count()
    }

    /// Rotate 90 degrees clockwise.
    ///
    /// Source (i, j) lands on (j, rows - 1 - i): reverse the row order, then
    /// transpose.
    pub fn rotated_cw(&self) -> Self {
        let rows = self.rows();
        let cols = self.cols();
        let mut cells = ArrayVec::new();
        for r in 0..cols {
            for c in 0..rows {
                cells.push(self.get(rows - 1 - c, r));
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }
}

/// A catalog entry: the shape's name and its spawn-orientation matrix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeEntry {
    pub kind: ShapeKind,
    pub matrix: Matrix,
}

/// The seven canonical shapes in catalog order (I, O, T, J, L, S, Z)
pub fn all_shapes() -> [ShapeEntry; 7] {
    ShapeKind::ALL.map(|kind| ShapeEntry {
        kind,
        matrix: spawn_matrix(kind),
    })
}

/// Spawn-orientation matrix for a shape
pub fn spawn_matrix(kind: ShapeKind) -> Matrix {
    match kind {
        ShapeKind::I => Matrix::literal(&[&[1, 1, 1, 1]]),
        ShapeKind::O => Matrix::literal(&[&[1, 1], &[1, 1]]),
        ShapeKind::T => Matrix::literal(&[&[0, 1, 0], &[1, 1, 1]]),
        ShapeKind::J => Matrix::literal(&[&[1, 0, 0], &[1, 1, 1]]),
        ShapeKind::L => Matrix::literal(&[&[0, 0, 1], &[1, 1, 1]]),
        ShapeKind::S => Matrix::literal(&[&[0, 1, 1], &[1, 1, 0]]),
        ShapeKind::Z => Matrix::literal(&[&[1, 1, 0], &[0, 1, 1]]),
    }
}

/// Shapes plus the palette pieces draw their color from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeCatalog {
    shapes: [ShapeEntry; 7],
    palette: [Color; 8],
}

impl ShapeCatalog {
    /// The standard seven shapes with the full eight-color palette
    pub fn standard() -> Self {
        Self {
            shapes: all_shapes(),
            palette: Color::ALL,
        }
    }

    pub fn shapes(&self) -> &[ShapeEntry] {
        &self.shapes
    }

    pub fn palette(&self) -> &[Color] {
        &self.palette
    }
}

impl Default for ShapeCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
