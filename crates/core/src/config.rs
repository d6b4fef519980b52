//! Session configuration and its validation.
//!
//! Everything here is fixed for the lifetime of a session. A malformed config is a
//! programming error; it is rejected before any state exists.

use std::time::Duration;

use thiserror::Error;

use crate::pieces::get_shape;
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH, FALL_INTERVAL_MS, SPAWN_POSITION};

/// Largest accepted board side, in cells.
pub const MAX_BOARD_DIM: usize = 512;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board must have at least one column and one row (got {cols}x{rows})")]
    EmptyBoard { cols: usize, rows: usize },

    #[error("board {cols}x{rows} exceeds the {max}-cell limit per side")]
    BoardTooLarge { cols: usize, rows: usize, max: usize },

    #[error("fall interval must be greater than zero")]
    ZeroFallInterval,

    #[error("piece catalog is empty")]
    EmptyCatalog,

    #[error("spawn anchor ({col}, {row}) cannot hold a {width}x{height} piece on a {cols}x{rows} board")]
    SpawnOutOfBounds {
        col: i32,
        row: i32,
        width: usize,
        height: usize,
        cols: usize,
        rows: usize,
    },

    #[error("preset board is {got_cols}x{got_rows}, config expects {cols}x{rows}")]
    BoardMismatch {
        cols: usize,
        rows: usize,
        got_cols: usize,
        got_rows: usize,
    },
}

/// Construction-time parameters of a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub cols: usize,
    pub rows: usize,
    pub fall_interval_ms: u32,
    pub spawn_col: i32,
    pub spawn_row: i32,
    /// Kinds the generator picks from, uniformly. Duplicates weight a kind.
    pub catalog: Vec<PieceKind>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cols: BOARD_WIDTH,
            rows: BOARD_HEIGHT,
            fall_interval_ms: FALL_INTERVAL_MS,
            spawn_col: SPAWN_POSITION.0,
            spawn_row: SPAWN_POSITION.1,
            catalog: PieceKind::ALL.to_vec(),
        }
    }
}

impl GameConfig {
    pub fn with_dimensions(mut self, cols: usize, rows: usize) -> Self {
        self.cols = cols;
        self.rows = rows;
        self
    }

    pub fn with_fall_interval_ms(mut self, ms: u32) -> Self {
        self.fall_interval_ms = ms;
        self
    }

    pub fn with_spawn(mut self, col: i32, row: i32) -> Self {
        self.spawn_col = col;
        self.spawn_row = row;
        self
    }

    pub fn with_catalog(mut self, catalog: impl Into<Vec<PieceKind>>) -> Self {
        self.catalog = catalog.into();
        self
    }

    pub fn fall_interval(&self) -> Duration {
        Duration::from_millis(self.fall_interval_ms as u64)
    }

    pub fn spawn_position(&self) -> (i32, i32) {
        (self.spawn_col, self.spawn_row)
    }

    /// Check every constraint. The first violation wins.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (cols, rows) = (self.cols, self.rows);

        if cols == 0 || rows == 0 {
            return Err(ConfigError::EmptyBoard { cols, rows });
        }
        if cols > MAX_BOARD_DIM || rows > MAX_BOARD_DIM {
            return Err(ConfigError::BoardTooLarge {
                cols,
                rows,
                max: MAX_BOARD_DIM,
            });
        }
        if self.fall_interval_ms == 0 {
            return Err(ConfigError::ZeroFallInterval);
        }
        if self.catalog.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }

        // Every kind must be placeable at spawn on an empty board.
        let width = self.catalog.iter().map(|&k| get_shape(k).cols()).max().unwrap_or(0);
        let height = self.catalog.iter().map(|&k| get_shape(k).rows()).max().unwrap_or(0);
        let fits_x = self.spawn_col >= 0 && self.spawn_col as usize + width <= cols;
        let fits_y = (self.spawn_row as i64) + (height as i64) <= rows as i64;
        if !fits_x || !fits_y {
            return Err(ConfigError::SpawnOutOfBounds {
                col: self.spawn_col,
                row: self.spawn_row,
                width,
                height,
                cols,
                rows,
            });
        }

        Ok(())
    }
}
