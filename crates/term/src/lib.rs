//! Terminal "game renderer" module.
//!
//! Renders engine snapshots into a small framebuffer that is flushed to the
//! terminal through crossterm. Drawing is kept out of `core`, so the engine
//! stays deterministic and testable.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
