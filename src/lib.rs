//! Lanken Tetris (workspace facade crate).
//!
//! Re-exports the member crates as `lanken_tetris::{core,input,term,types}` so
//! the binary, integration tests, and benches share one import path.

pub use lanken_tetris_core as core;
pub use lanken_tetris_input as input;
pub use lanken_tetris_term as term;
pub use lanken_tetris_types as types;
