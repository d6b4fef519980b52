//! Collision checks between a piece and the board.
//!
//! A block may sit above the board (negative row) but never left of column 0,
//! right of the last column, below the last row, or on an occupied cell.

use crate::board::Board;
use crate::pieces::Piece;

/// True iff every block of `piece` is a legal position on `board`.
pub fn is_valid_move(piece: &Piece, board: &Board) -> bool {
    piece
        .blocks()
        .iter()
        .all(|&(x, y)| block_fits(board, x, y))
}

/// Single-block form of [`is_valid_move`].
pub fn block_fits(board: &Board, x: i32, y: i32) -> bool {
    if x < 0 || x >= board.width() as i32 {
        return false;
    }
    if y >= board.height() as i32 {
        return false;
    }
    y < 0 || board.is_empty(x, y)
}

/// True iff the piece cannot descend one more row.
pub fn is_grounded(piece: &Piece, board: &Board) -> bool {
    let mut below = *piece;
    below.y += 1;
    !is_valid_move(&below, board)
}
