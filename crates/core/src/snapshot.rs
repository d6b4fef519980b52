//! Read-only views of a session for renderers and score displays.

use crate::game_state::{GameState, Phase};
use crate::pieces::{Blocks, Piece};
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub x: i32,
    pub y: i32,
    pub blocks: Blocks,
}

impl From<&Piece> for ActiveSnapshot {
    fn from(value: &Piece) -> Self {
        Self {
            kind: value.kind,
            x: value.x,
            y: value.y,
            blocks: value.blocks(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub width: usize,
    pub height: usize,
    /// Row-major locked cells
    pub board: Vec<Cell>,
    pub active: Option<ActiveSnapshot>,
    pub next: Option<PieceKind>,
    pub score: u32,
    pub lines: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    /// Locked cell at (x, y); out of range reads as empty.
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.board[y * self.width + x]
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            board: vec![None; BOARD_WIDTH * BOARD_HEIGHT],
            active: None,
            next: None,
            score: 0,
            lines: 0,
            game_over: false,
        }
    }
}

impl GameState {
    /// Copy the current state into `out`, reusing its board allocation.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        let board = self.board();
        out.width = board.width();
        out.height = board.height();
        out.board.clear();
        out.board.extend_from_slice(board.cells());

        out.active = Some(ActiveSnapshot::from(self.active()));
        out.next = Some(self.next().kind);
        out.score = self.score();
        out.lines = self.lines();
        out.game_over = self.phase() == Phase::GameOver;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
