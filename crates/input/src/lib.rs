//! Terminal input: crossterm key events to engine actions.
//!
//! Host-level keys (quit, restart) are classified here too but never reach the
//! engine; the runner handles them.

pub mod map;

pub use lanken_tetris_types as types;

pub use map::{classify, handle_key_event, should_quit, should_restart, KeyCommand};
