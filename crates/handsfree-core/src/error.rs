//! Error types for move parsing, move execution, and placement strings.

use std::fmt;

use crate::color::Color;
use crate::piece::Piece;
use crate::square::Square;

/// Why a square or move string could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The input does not have the expected number of characters.
    #[error("expected {expected} characters, found {found}")]
    WrongLength {
        /// Required character count.
        expected: usize,
        /// Character count of the input.
        found: usize,
    },
    /// A file position holds something other than 'a'..='h'.
    #[error("invalid file character: '{character}'")]
    BadFile {
        /// The offending character.
        character: char,
    },
    /// A rank position holds something other than '1'..='8'.
    #[error("invalid rank character: '{character}'")]
    BadRank {
        /// The offending character.
        character: char,
    },
}

/// A move rejected by [`Board::apply`](crate::board::Board::apply).
///
/// Every variant is recoverable: the board is left untouched and the caller
/// may simply try another move.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The move string fails length, charset, or range parsing.
    #[error("malformed move \"{input}\": {source}")]
    MalformedMove {
        /// The rejected input.
        input: String,
        /// What was wrong with it.
        source: ParseError,
    },
    /// The source square has no piece.
    #[error("no piece on {square}")]
    EmptySource {
        /// The empty source square.
        square: Square,
    },
    /// The destination square lies outside the grid.
    #[error("destination {square} is off the board")]
    OutOfBounds {
        /// The destination square.
        square: Square,
    },
    /// The destination holds a piece of the mover's own color.
    #[error("{square} is occupied by a {color} piece")]
    OwnPieceCapture {
        /// The destination square.
        square: Square,
        /// Color shared by both pieces.
        color: Color,
    },
    /// The piece cannot reach the destination, or a slider's path is blocked.
    #[error("{piece} cannot move from {from} to {to}")]
    IllegalPieceMove {
        /// The moving piece.
        piece: Piece,
        /// Source square.
        from: Square,
        /// Destination square.
        to: Square,
    },
}

/// The category of a [`MoveError`], without its details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MalformedMove,
    EmptySource,
    OutOfBounds,
    OwnPieceCapture,
    IllegalPieceMove,
}

impl MoveError {
    /// Return the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            MoveError::MalformedMove { .. } => ErrorKind::MalformedMove,
            MoveError::EmptySource { .. } => ErrorKind::EmptySource,
            MoveError::OutOfBounds { .. } => ErrorKind::OutOfBounds,
            MoveError::OwnPieceCapture { .. } => ErrorKind::OwnPieceCapture,
            MoveError::IllegalPieceMove { .. } => ErrorKind::IllegalPieceMove,
        }
    }
}

/// Errors that occur when parsing a piece-placement string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// The placement does not have exactly 8 ranks.
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank describes more or fewer than 8 squares.
    BadRankLength {
        /// Zero-based rank index (0 = rank 8, 7 = rank 1), which is also the grid row.
        rank_index: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in the placement.
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::WrongRankCount { found } => {
                write!(f, "expected 8 ranks in piece placement, found {found}")
            }
            PlacementError::BadRankLength { rank_index, length } => {
                write!(f, "rank {rank_index} describes {length} squares, expected 8")
            }
            PlacementError::InvalidPieceChar { character } => {
                write!(f, "invalid piece character: '{character}'")
            }
        }
    }
}

impl std::error::Error for PlacementError {}
