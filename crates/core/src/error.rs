//! Construction-time errors.
//!
//! Blocked moves and rotations are not errors; they are silent no-ops
//! reported through `bool` returns and unchanged snapshots.

/// Errors raised while building a board or a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Board width or height is zero.
    InvalidDimension { width: u16, height: u16 },
    /// Pre-filled rows exceed the largest supported board side.
    TooLarge { width: usize, height: usize },
    /// A loaded board's cell list does not match `width * height`.
    CellCount { expected: usize, found: usize },
    /// A pre-filled board row does not match the first row's width.
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDimension { width, height } => {
                write!(
                    f,
                    "invalid board dimension {width}x{height}: width and height must be positive"
                )
            }
            Self::TooLarge { width, height } => {
                write!(f, "board {width}x{height} exceeds {}x{}", u16::MAX, u16::MAX)
            }
            Self::CellCount { expected, found } => {
                write!(f, "board has {found} cells, expected {expected}")
            }
            Self::RaggedRows {
                row,
                expected,
                found,
            } => {
                write!(f, "row {row} has {found} cells, expected {expected}")
            }
        }
    }
}

impl std::error::Error for GameError {}
