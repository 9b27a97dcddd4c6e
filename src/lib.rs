//! Blockfall (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof so the binary, the
//! integration tests and the benchmarks share `blockfall::{core,input,term,types}`
//! paths. The engine itself lives in `crates/core` and never touches the
//! terminal.

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;
