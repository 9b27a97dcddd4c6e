//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no game logic, so they can be shared by the
//! engine, the terminal front end and any external renderer.
//!
//! # Board Dimensions
//!
//! The default playfield matches the classic layout:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top)
//!
//! Boards of any positive size are supported by the engine; these constants
//! are only the defaults used by the driver.
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_TICK_MS` | 100 | Gravity pulse interval used by the driver (10 Hz) |
//!
//! The engine itself never reads the clock; the driver decides when to tick.
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Cell, Color, Command, ShapeKind};
//!
//! let cell = Cell::Filled(Color::Cyan);
//! assert!(cell.is_filled());
//! assert_eq!(cell.color(), Some(Color::Cyan));
//! assert!(!Cell::Empty.is_filled());
//!
//! assert_eq!(Command::from_str("moveLeft"), Some(Command::Left));
//! assert_eq!(ShapeKind::ALL.len(), 7);
//! assert_eq!(Color::ALL.len(), 8);
//! ```

use serde::{Deserialize, Serialize};

/// Default board width in cells (10 columns)
pub const DEFAULT_BOARD_WIDTH: u16 = 10;

/// Default board height in cells (20 rows)
pub const DEFAULT_BOARD_HEIGHT: u16 = 20;

/// Default gravity pulse interval in milliseconds (10 ticks per second)
pub const DEFAULT_TICK_MS: u64 = 100;

/// Flat score awarded per cleared row
pub const POINTS_PER_LINE: u32 = 100;

/// Piece colors. The palette is fixed; colors are assigned to pieces
/// independently of their shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Red,
    Green,
    Blue,
    Cyan,
    Magenta,
    Yellow,
    Orange,
}

impl Color {
    /// Every palette entry, in draw order
    pub const ALL: [Color; 8] = [
        Color::White,
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Cyan,
        Color::Magenta,
        Color::Yellow,
        Color::Orange,
    ];

    /// RGB components used by terminal front ends
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Color::White => (255, 255, 255),
            Color::Red => (255, 0, 0),
            Color::Green => (0, 255, 0),
            Color::Blue => (0, 0, 255),
            Color::Cyan => (0, 255, 255),
            Color::Magenta => (255, 0, 255),
            Color::Yellow => (255, 255, 0),
            Color::Orange => (255, 165, 0),
        }
    }
}

/// A single board cell: either empty or occupied by a settled color.
///
/// Emptiness is its own variant so no palette color can ever be mistaken
/// for an empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Filled(Color),
}

impl Cell {
    #[inline]
    pub fn is_filled(&self) -> bool {
        matches!(self, Cell::Filled(_))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Color of an occupied cell, `None` when empty
    pub fn color(&self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Filled(color) => Some(*color),
        }
    }
}

/// The seven canonical tetromino shapes, named by occupancy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    I,
    O,
    T,
    J,
    L,
    S,
    Z,
}

impl ShapeKind {
    /// Catalog order
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::T,
        ShapeKind::J,
        ShapeKind::L,
        ShapeKind::S,
        ShapeKind::Z,
    ];

    /// Single uppercase letter for display
    pub fn letter(&self) -> &'static str {
        match self {
            ShapeKind::I => "I",
            ShapeKind::O => "O",
            ShapeKind::T => "T",
            ShapeKind::J => "J",
            ShapeKind::L => "L",
            ShapeKind::S => "S",
            ShapeKind::Z => "Z",
        }
    }
}

/// Player commands accepted by the engine, at most one per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    Left,
    Right,
    SoftDrop,
    Rotate,
}

impl Command {
    /// Parse a command from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" | "moveleft" => Some(Command::Left),
            "right" | "moveright" => Some(Command::Right),
            "softdrop" | "down" => Some(Command::SoftDrop),
            "rotate" | "up" => Some(Command::Rotate),
            _ => None,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Left => "left",
            Command::Right => "right",
            Command::SoftDrop => "softDrop",
            Command::Rotate => "rotate",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_round_trip_names() {
        for cmd in [
            Command::Left,
            Command::Right,
            Command::SoftDrop,
            Command::Rotate,
        ] {
            assert_eq!(Command::from_str(cmd.as_str()), Some(cmd));
        }
        assert_eq!(Command::from_str("DOWN"), Some(Command::SoftDrop));
        assert_eq!(Command::from_str("hold"), None);
    }

    #[test]
    fn test_cell_default_is_empty() {
        assert_eq!(Cell::default(), Cell::Empty);
        assert_eq!(Cell::default().color(), None);
    }

    #[test]
    fn test_palette_is_distinct() {
        for (i, a) in Color::ALL.iter().enumerate() {
            for b in &Color::ALL[i + 1..] {
                assert_ne!(a, b);
                assert_ne!(a.rgb(), b.rgb());
            }
        }
    }
}
