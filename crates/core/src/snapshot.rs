use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::piece::Piece;
use crate::shapes::Matrix;
use crate::types::{Color, ShapeKind};

/// Read-only projection of a piece for drawing
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceView {
    pub kind: ShapeKind,
    pub shape: Matrix,
    pub color: Color,
    pub col: i32,
    pub row: i32,
}

impl PieceView {
    /// Absolute `(col, row)` of every occupied cell
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape
            .cells()
            .map(move |(r, c)| (self.col + c as i32, self.row + r as i32))
    }
}

impl From<&Piece> for PieceView {
    fn from(value: &Piece) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape.clone(),
            color: value.color,
            col: value.col,
            row: value.row,
        }
    }
}

/// Everything an external renderer needs after a tick
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub board: Board,
    pub current: PieceView,
    pub next: PieceView,
    pub score: u32,
    pub lines: u32,
    pub is_over: bool,
}
