//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: a snapshot is drawn into a
//! framebuffer, and the framebuffer is flushed to the terminal with diffing.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Draw the board, active piece, score, next piece, and game-over overlay
//! - Allow precise control over aspect ratio (2 chars wide per cell)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use lanken_tetris_core as core;
pub use lanken_tetris_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{piece_color, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
