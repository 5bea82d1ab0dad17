//! Core chess types: board representation, move parsing, per-piece legality,
//! and move execution.

mod board;
mod chess_move;
mod color;
mod error;
mod file;
pub mod legality;
mod make_move;
pub mod path;
mod piece;
mod piece_kind;
mod placement;
mod rank;
mod square;

pub use board::{Board, Cell, PrettyBoard};
pub use chess_move::Move;
pub use color::Color;
pub use error::{ErrorKind, MoveError, ParseError, PlacementError};
pub use file::File;
pub use make_move::{AppliedMove, MoveOutcome};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use placement::STARTING_PLACEMENT;
pub use rank::Rank;
pub use square::Square;
