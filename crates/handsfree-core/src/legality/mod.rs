//! Per-piece move legality on a bare board.
//!
//! Each predicate answers whether a piece could travel from `from` to `to`
//! given only the occupancy of the board. The universal pre-checks (empty
//! source, own-piece capture) belong to the executor and are not repeated
//! here. There is no notion of check, castling, en passant or promotion.

mod king;
mod knights;
mod pawns;
mod sliders;

use crate::board::Board;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

pub use self::king::is_legal_king;
pub use self::knights::is_legal_knight;
pub use self::pawns::is_legal_pawn;
pub use self::sliders::{is_legal_bishop, is_legal_queen, is_legal_rook};

/// Dispatch to the predicate for `piece`'s kind.
pub fn is_legal(board: &Board, from: Square, to: Square, piece: Piece) -> bool {
    match piece.kind() {
        PieceKind::Pawn => is_legal_pawn(board, from, to, piece),
        PieceKind::Knight => is_legal_knight(from, to),
        PieceKind::Bishop => is_legal_bishop(board, from, to),
        PieceKind::Rook => is_legal_rook(board, from, to),
        PieceKind::Queen => is_legal_queen(board, from, to),
        PieceKind::King => is_legal_king(from, to),
    }
}
