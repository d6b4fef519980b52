//! Pieces module - tetromino shape matrices and the quarter-turn transform
//!
//! A shape is a small boolean matrix (at most 4x4). A piece is a shape plus an
//! anchor on the board; its blocks are the true cells offset by the anchor.
//! Rotation replaces the matrix with its transpose, rows reversed.

use arrayvec::ArrayVec;

use crate::types::{PieceKind, SPAWN_POSITION};

/// Largest side of any shape matrix.
pub const MAX_SHAPE_DIM: usize = 4;

/// Board coordinate of a single block: (column, row)
pub type Block = (i32, i32);

/// Blocks of one piece. Stack-only.
pub type Blocks = ArrayVec<Block, { MAX_SHAPE_DIM * MAX_SHAPE_DIM }>;

/// Row-major boolean shape matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    cells: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl Shape {
    /// Build a shape from a 0/1 matrix.
    pub const fn from_matrix<const R: usize, const C: usize>(matrix: [[u8; C]; R]) -> Self {
        assert!(R > 0 && C > 0 && R <= MAX_SHAPE_DIM && C <= MAX_SHAPE_DIM);

        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        let mut r = 0;
        while r < R {
            let mut c = 0;
            while c < C {
                cells[r][c] = matrix[r][c] != 0;
                c += 1;
            }
            r += 1;
        }

        Self {
            rows: R as u8,
            cols: C as u8,
            cells,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows as usize
    }

    pub fn cols(&self) -> usize {
        self.cols as usize
    }

    /// Whether the matrix cell at (row, col) is filled. Out of range is empty.
    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.rows() && col < self.cols() && self.cells[row][col]
    }

    /// Transpose, then reverse row order.
    ///
    /// An `R x C` matrix becomes `C x R`; row `i` of the result is column
    /// `C - 1 - i` of the input read top to bottom.
    pub fn rotated(&self) -> Self {
        let (rows, cols) = (self.rows(), self.cols());
        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (i, out_row) in cells.iter_mut().enumerate().take(cols) {
            for (j, out) in out_row.iter_mut().enumerate().take(rows) {
                *out = self.cells[j][cols - 1 - i];
            }
        }

        Self {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }

    /// (col, row) offsets of every filled cell, row-major.
    pub fn offsets(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.rows()).flat_map(move |r| {
            (0..self.cols())
                .filter(move |&c| self.cells[r][c])
                .map(move |c| (c, r))
        })
    }

    /// Number of filled cells
    pub fn cell_count(&self) -> usize {
        self.offsets().count()
    }
}

const I_SHAPE: Shape = Shape::from_matrix([[1, 1, 1, 1]]);
const Z_SHAPE: Shape = Shape::from_matrix([[1, 1, 0], [0, 1, 1]]);
const S_SHAPE: Shape = Shape::from_matrix([[0, 1, 1], [1, 1, 0]]);
const O_SHAPE: Shape = Shape::from_matrix([[1, 1], [1, 1]]);
const J_SHAPE: Shape = Shape::from_matrix([[1, 0, 0], [1, 1, 1]]);
const L_SHAPE: Shape = Shape::from_matrix([[0, 0, 1], [1, 1, 1]]);
const T_SHAPE: Shape = Shape::from_matrix([[0, 1, 0], [1, 1, 1]]);

/// Get the spawn shape for a piece kind
pub fn get_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::Z => Z_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::L => L_SHAPE,
        PieceKind::T => T_SHAPE,
    }
}

/// A piece instance: kind, current shape, and anchor.
///
/// `y` may be negative while the piece is still above the visible board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i32,
    pub y: i32,
}

impl Piece {
    /// Create a piece in spawn orientation at the default spawn position
    pub fn new(kind: PieceKind) -> Self {
        Self::spawn(kind, SPAWN_POSITION)
    }

    /// Create a piece in spawn orientation at the given anchor
    pub fn spawn(kind: PieceKind, (x, y): (i32, i32)) -> Self {
        Self {
            kind,
            shape: get_shape(kind),
            x,
            y,
        }
    }

    /// Board cells covered by this piece.
    pub fn blocks(&self) -> Blocks {
        self.shape
            .offsets()
            .map(|(c, r)| (self.x + c as i32, self.y + r as i32))
            .collect()
    }

    /// Replace the shape with its rotated form. Does not validate.
    pub fn rotate(&mut self) {
        self.shape = self.shape.rotated();
    }
}
