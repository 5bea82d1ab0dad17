//! Sliding piece (bishop, rook, queen) legality.

use crate::board::Board;
use crate::path::is_clear;
use crate::square::Square;

/// Diagonal move of any length with nothing in between.
pub fn is_legal_bishop(board: &Board, from: Square, to: Square) -> bool {
    let (d_row, d_col) = from.delta(to);
    d_row != 0 && d_row.abs() == d_col.abs() && is_clear(board, from, to)
}

/// Straight move along a row or a column with nothing in between.
pub fn is_legal_rook(board: &Board, from: Square, to: Square) -> bool {
    let (d_row, d_col) = from.delta(to);
    (d_row == 0) != (d_col == 0) && is_clear(board, from, to)
}

/// Either a rook move or a bishop move.
pub fn is_legal_queen(board: &Board, from: Square, to: Square) -> bool {
    is_legal_rook(board, from, to) || is_legal_bishop(board, from, to)
}
