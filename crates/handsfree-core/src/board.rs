//! The chess board: an 8x8 grid of cells, each empty or holding one piece.

use std::fmt;

use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::rank::Rank;
use crate::square::Square;

/// A board cell: empty, or exactly one piece.
pub type Cell = Option<Piece>;

/// Piece placement on an 8x8 grid, indexed `[row][col]`.
///
/// Row 0 is rank 8. The board carries no side to move, castling rights or
/// move history; it is purely occupancy.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; 8]; 8],
}

impl Board {
    /// Return a board with no pieces.
    pub const fn empty() -> Board {
        Board {
            cells: [[None; 8]; 8],
        }
    }

    /// Return the standard starting position.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        for color in Color::ALL {
            let back = color.back_row() as usize;
            let pawns = color.pawn_row() as usize;
            for (col, kind) in PieceKind::BACK_RANK.into_iter().enumerate() {
                board.cells[back][col] = Some(Piece::new(kind, color));
                board.cells[pawns][col] = Some(Piece::new(PieceKind::Pawn, color));
            }
        }
        board
    }

    /// Return the cell at `sq`.
    #[inline]
    pub fn at(&self, sq: Square) -> Cell {
        self.cells[sq.row() as usize][sq.col() as usize]
    }

    /// Overwrite the cell at `sq`. No legality checking.
    #[inline]
    pub fn set(&mut self, sq: Square, cell: Cell) {
        self.cells[sq.row() as usize][sq.col() as usize] = cell;
    }

    /// Return `true` if the given square holds a piece.
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.at(sq).is_some()
    }

    /// Number of pieces on the board.
    pub fn piece_count(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| cell.is_some()).count()
    }

    /// Copy out all 64 cells in row-major order (index = row * 8 + col).
    pub fn snapshot(&self) -> [Cell; Square::COUNT] {
        let mut out = [None; Square::COUNT];
        for sq in Square::all() {
            out[sq.index()] = self.at(sq);
        }
        out
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self)
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid, rank 8 on top.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.0.cells.iter().enumerate() {
            let rank = Rank::from_row(row as u8).ok_or(fmt::Error)?;
            write!(f, "{rank}  ")?;
            for (col, cell) in cells.iter().enumerate() {
                let c = cell.map_or('.', Piece::letter);
                if col < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::piece::Piece;
    use crate::square::Square;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn starting_position_back_ranks() {
        let board = Board::starting_position();
        assert_eq!(board.at(sq("e1")), Some(Piece::WHITE_KING));
        assert_eq!(board.at(sq("d1")), Some(Piece::WHITE_QUEEN));
        assert_eq!(board.at(sq("a1")), Some(Piece::WHITE_ROOK));
        assert_eq!(board.at(sq("b1")), Some(Piece::WHITE_KNIGHT));
        assert_eq!(board.at(sq("c1")), Some(Piece::WHITE_BISHOP));
        assert_eq!(board.at(sq("e8")), Some(Piece::BLACK_KING));
        assert_eq!(board.at(sq("d8")), Some(Piece::BLACK_QUEEN));
        assert_eq!(board.at(sq("h8")), Some(Piece::BLACK_ROOK));
    }

    #[test]
    fn starting_position_pawns_and_gaps() {
        let board = Board::starting_position();
        for sq in Square::all() {
            let expected_pawn = match sq.row() {
                1 => Some(Piece::BLACK_PAWN),
                6 => Some(Piece::WHITE_PAWN),
                _ => None,
            };
            match sq.row() {
                1 | 6 => assert_eq!(board.at(sq), expected_pawn),
                2..=5 => assert_eq!(board.at(sq), None, "{sq} should be empty"),
                _ => assert!(board.is_occupied(sq)),
            }
        }
        assert_eq!(board.piece_count(), 32);
    }

    #[test]
    fn at_and_set() {
        let mut board = Board::empty();
        assert_eq!(board.piece_count(), 0);
        board.set(sq("d4"), Some(Piece::BLACK_KNIGHT));
        assert_eq!(board.at(sq("d4")), Some(Piece::BLACK_KNIGHT));
        board.set(sq("d4"), None);
        assert!(!board.is_occupied(sq("d4")));
    }

    #[test]
    fn snapshot_is_row_major() {
        let board = Board::starting_position();
        let cells = board.snapshot();
        assert_eq!(cells[0], Some(Piece::BLACK_ROOK));
        assert_eq!(cells[4], Some(Piece::BLACK_KING));
        assert_eq!(cells[6 * 8 + 4], Some(Piece::WHITE_PAWN));
        assert_eq!(cells[4 * 8 + 4], None);
        assert_eq!(cells[63], Some(Piece::WHITE_ROOK));
    }

    #[test]
    fn pretty_print() {
        let board = Board::starting_position();
        let output = format!("{}", board.pretty());
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines[0], "8  r n b q k b n r");
        assert_eq!(lines[3], "5  . . . . . . . .");
        assert_eq!(lines[7], "1  R N B Q K B N R");
        assert_eq!(lines[8], "   a b c d e f g h");
    }

    #[test]
    fn default_is_starting_position() {
        assert_eq!(Board::default(), Board::starting_position());
    }
}
