//! Move execution: pre-checks, legality dispatch, and the single board update.

use tracing::debug;

use crate::board::Board;
use crate::chess_move::Move;
use crate::error::MoveError;
use crate::legality::is_legal;
use crate::piece::Piece;

/// Result of [`Board::apply`]: the applied move or the reason it was rejected.
pub type MoveOutcome = Result<AppliedMove, MoveError>;

/// Report of a move that was carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    /// The move as played.
    pub mv: Move,
    /// The piece that moved.
    pub piece: Piece,
    /// The enemy piece removed from the destination, if any.
    pub captured: Option<Piece>,
}

impl Board {
    /// Parse and apply a move string such as `"e2e4"`.
    ///
    /// The input is expected to be already normalized (no whitespace or
    /// filler words). On any error the board is left exactly as it was.
    ///
    /// # Errors
    ///
    /// [`MoveError::MalformedMove`] if the string does not parse; otherwise
    /// whatever [`Board::apply_move`] reports.
    pub fn apply(&mut self, input: &str) -> MoveOutcome {
        let mv = Move::parse(input).map_err(|source| {
            debug!(input, error = %source, "rejected malformed move");
            MoveError::MalformedMove {
                input: input.to_string(),
                source,
            }
        })?;
        self.apply_move(mv)
    }

    /// Validate and apply an already-parsed move.
    ///
    /// Checks run in a fixed order and stop at the first failure: source
    /// occupied, destination on the board, destination not held by a piece
    /// of the same color, then the piece's own movement rule. Only when all
    /// pass is the board modified: the source is cleared and the piece
    /// replaces whatever stood on the destination.
    ///
    /// # Errors
    ///
    /// [`MoveError::EmptySource`], [`MoveError::OutOfBounds`],
    /// [`MoveError::OwnPieceCapture`] or [`MoveError::IllegalPieceMove`].
    pub fn apply_move(&mut self, mv: Move) -> MoveOutcome {
        let result = self.check_move(mv);
        match &result {
            Ok(applied) => {
                self.set(mv.source(), None);
                self.set(mv.dest(), Some(applied.piece));
                debug!(%mv, piece = %applied.piece, captured = ?applied.captured, "applied move");
            }
            Err(err) => debug!(%mv, error = %err, "rejected move"),
        }
        result
    }

    /// Run every check for `mv` without touching the board.
    pub fn check_move(&self, mv: Move) -> MoveOutcome {
        let (from, to) = (mv.source(), mv.dest());

        let piece = self.at(from).ok_or(MoveError::EmptySource { square: from })?;

        if !to.is_on_board() {
            return Err(MoveError::OutOfBounds { square: to });
        }

        let target = self.at(to);
        if let Some(target) = target
            && !target.is_enemy_of(piece)
        {
            return Err(MoveError::OwnPieceCapture {
                square: to,
                color: piece.color(),
            });
        }

        if !is_legal(self, from, to, piece) {
            return Err(MoveError::IllegalPieceMove { piece, from, to });
        }

        Ok(AppliedMove {
            mv,
            piece,
            captured: target,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::AppliedMove;
    use crate::board::Board;
    use crate::chess_move::Move;
    use crate::error::{ErrorKind, MoveError};
    use crate::piece::Piece;
    use crate::square::Square;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn quiet_move_updates_both_squares() {
        let mut board = Board::starting_position();
        let applied = board.apply("g1f3").unwrap();
        assert_eq!(
            applied,
            AppliedMove {
                mv: Move::parse("g1f3").unwrap(),
                piece: Piece::WHITE_KNIGHT,
                captured: None,
            }
        );
        assert_eq!(board.at(sq("g1")), None);
        assert_eq!(board.at(sq("f3")), Some(Piece::WHITE_KNIGHT));
        assert_eq!(board.piece_count(), 32);
    }

    #[test]
    fn capture_replaces_enemy() {
        let mut board = Board::from_placement("8/8/8/3p4/4P3/8/8/8").unwrap();
        let applied = board.apply("e4d5").unwrap();
        assert_eq!(applied.captured, Some(Piece::BLACK_PAWN));
        assert_eq!(board.at(sq("d5")), Some(Piece::WHITE_PAWN));
        assert_eq!(board.at(sq("e4")), None);
        assert_eq!(board.piece_count(), 1);
    }

    #[test]
    fn rejection_order() {
        let mut board = Board::starting_position();
        assert_eq!(board.apply("e9e4").unwrap_err().kind(), ErrorKind::MalformedMove);
        assert_eq!(board.apply("e4e5").unwrap_err().kind(), ErrorKind::EmptySource);
        // Own-piece capture wins over the rook's blocked path.
        assert_eq!(board.apply("a1a2").unwrap_err().kind(), ErrorKind::OwnPieceCapture);
        assert_eq!(board.apply("a1a3").unwrap_err().kind(), ErrorKind::IllegalPieceMove);
        assert_eq!(board, Board::starting_position());
    }

    #[test]
    fn moving_onto_itself_is_own_piece_capture() {
        let mut board = Board::starting_position();
        let err = board.apply("d1d1").unwrap_err();
        assert_eq!(
            err,
            MoveError::OwnPieceCapture {
                square: sq("d1"),
                color: crate::color::Color::White,
            }
        );
    }

    #[test]
    fn check_move_never_mutates() {
        let board = Board::starting_position();
        let applied = board.check_move(Move::parse("e2e4").unwrap()).unwrap();
        assert_eq!(applied.piece, Piece::WHITE_PAWN);
        assert_eq!(board, Board::starting_position());
    }

    #[test]
    fn turn_order_is_not_enforced() {
        let mut board = Board::starting_position();
        board.apply("e7e5").unwrap();
        board.apply("d7d5").unwrap();
        assert_eq!(board.at(sq("e5")), Some(Piece::BLACK_PAWN));
        assert_eq!(board.at(sq("d5")), Some(Piece::BLACK_PAWN));
    }
}
