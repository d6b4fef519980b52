//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on rendering, input devices, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical piece sequences
//! - **Testable**: Every transition is reachable from plain method calls
//! - **Portable**: Can run in any host (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: fixed grid with merge and simultaneous row clearing
//! - [`pieces`]: tetromino shape matrices and the quarter-turn transform
//! - [`collision`]: bounds and occupancy predicate for a whole piece
//! - [`game_state`]: session aggregate and the gravity/lock state machine
//! - [`rng`]: uniform seeded piece generator
//! - [`config`]: construction-time parameters and their validation
//! - [`clock`]: measured frame-to-frame time for the host loop
//! - [`snapshot`]: read-only views for renderers
//!
//! # Game Rules
//!
//! - **Gravity**: one row every 500ms by default, fixed for the whole session
//! - **Lock**: a piece that cannot fall locks on the next gravity step, no delay
//! - **Rotation**: no wall kicks; a colliding rotation is simply undone
//! - **Scoring**: 10 points per cleared row
//! - **Game over**: the piece promoted after a lock does not fit at spawn
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//!
//! use lanken_tetris_core::{GameConfig, GameState, TickOutcome};
//! use lanken_tetris_types::GameAction;
//!
//! let mut game = GameState::new(GameConfig::default(), 12345).unwrap();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//!
//! assert_eq!(game.tick(Duration::from_millis(16)), TickOutcome::Waiting);
//! assert_eq!(game.tick(Duration::from_millis(490)), TickOutcome::Fell);
//! assert!(!game.game_over());
//! ```

pub mod board;
pub mod clock;
pub mod collision;
pub mod config;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod snapshot;

pub use lanken_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use clock::FrameClock;
pub use collision::{block_fits, is_grounded, is_valid_move};
pub use config::{ConfigError, GameConfig};
pub use game_state::{GameState, LockEvent, Phase, TickOutcome};
pub use pieces::{get_shape, Block, Blocks, Piece, Shape};
pub use rng::PieceGenerator;
pub use snapshot::{ActiveSnapshot, GameSnapshot};
