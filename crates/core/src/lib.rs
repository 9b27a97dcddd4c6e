//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the game rules and state for the falling-block engine.
//! It has **no dependencies** on UI, terminal, or I/O, making it:
//!
//! - **Deterministic**: the same random source produces the same game
//! - **Testable**: the random source is injectable, so tests can script pieces
//! - **Portable**: any renderer can consume a [`GameSnapshot`]
//!
//! # Module Structure
//!
//! - [`shapes`]: the seven shape matrices, clockwise rotation, the color palette
//! - [`piece`]: a shape instance with color and origin; spawning and rotation
//! - [`board`]: the settled grid, collision testing, merging and line clearing
//! - [`game`]: the per-tick state machine
//! - [`rng`]: seeded and scripted random sources
//! - [`scoring`]: flat per-line scoring
//!
//! # Game Rules
//!
//! - **Spawning**: shape and color are drawn independently and uniformly; the
//!   piece is centered horizontally at row 0
//! - **Rotation**: clockwise only, rejected outright when blocked (no kicks)
//! - **Gravity**: one row per tick; a piece that cannot fall locks at once
//! - **Scoring**: 100 points per cleared row
//! - **Game over**: the promoted piece is blocked at its spawn position
//!
//! # Example
//!
//! ```
//! use blockfall_core::Game;
//! use blockfall_types::Command;
//!
//! let mut game = Game::with_seed(10, 20, 12345).unwrap();
//!
//! let snap = game.tick(Some(Command::SoftDrop));
//! // Soft drop and gravity both applied.
//! assert_eq!(snap.current.row, 2);
//! assert!(!snap.is_over);
//! ```
//!
//! # Timing
//!
//! The engine never reads the clock. A driver calls
//! [`Game::tick`](game::Game::tick) on every timer pulse and may call
//! [`Game::apply_command`](game::Game::apply_command) between pulses.

pub mod board;
pub mod error;
pub mod game;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod shapes;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use error::GameError;
pub use game::{Game, GameStatus, LockEvent};
pub use piece::{rotate, Piece};
pub use rng::{Randomizer, ScriptedRandomizer, SeededRandomizer};
pub use scoring::line_clear_points;
pub use shapes::{all_shapes, Matrix, ShapeCatalog, ShapeEntry};
pub use snapshot::{GameSnapshot, PieceView};
