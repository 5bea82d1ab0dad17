//! Pawn legality: pushes and diagonal captures. No en passant or promotion.

use crate::board::Board;
use crate::piece::Piece;
use crate::square::Square;

/// Check a pawn move for `piece` from `from` to `to`.
///
/// - one step forward onto an empty square;
/// - two steps forward from the pawn's starting row, with both the skipped
///   square and the destination empty;
/// - one step diagonally forward, only onto an enemy piece.
pub fn is_legal_pawn(board: &Board, from: Square, to: Square, piece: Piece) -> bool {
    let color = piece.color();
    let forward = color.forward();
    let (d_row, d_col) = from.delta(to);

    match d_col.abs() {
        0 => {
            if board.is_occupied(to) {
                return false;
            }
            if d_row == forward {
                return true;
            }
            if d_row == 2 * forward && from.row() == color.pawn_row() {
                return from
                    .offset(forward, 0)
                    .is_some_and(|skipped| !board.is_occupied(skipped));
            }
            false
        }
        1 if d_row == forward => board.at(to).is_some_and(|target| target.is_enemy_of(piece)),
        _ => false,
    }
}
