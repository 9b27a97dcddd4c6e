//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Command`] and detects
//! quit keys. Only key presses count; the driver drops repeat and release
//! events before they reach this module.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
