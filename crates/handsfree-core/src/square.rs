//! Board squares addressed by grid row and column.

use std::fmt;

use crate::error::ParseError;
use crate::file::File;
use crate::rank::Rank;

/// A square on the board as a (row, column) pair, both in `0..8`.
///
/// Row 0 is rank 8 (Black's back rank) and row 7 is rank 1. Column 0 is
/// file a. A `Square` can only be built through checked constructors, so
/// every value lies on the board.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Create a square from a rank and file.
    #[inline]
    pub const fn new(rank: Rank, file: File) -> Square {
        Square {
            row: rank.row() as u8,
            col: file.index() as u8,
        }
    }

    /// Create a square from signed grid coordinates, returning `None` if
    /// either one is off the board.
    #[inline]
    pub const fn from_coords(row: i8, col: i8) -> Option<Square> {
        if row >= 0 && row < 8 && col >= 0 && col < 8 {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Parse a two-character algebraic square such as "e4".
    pub fn from_algebraic(s: &str) -> Result<Square, ParseError> {
        let mut chars = s.chars();
        let (Some(f), Some(r), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(ParseError::WrongLength {
                expected: 2,
                found: s.chars().count(),
            });
        };
        Square::from_chars(f, r)
    }

    /// Build a square from a file letter and a rank digit.
    pub fn from_chars(file: char, rank: char) -> Result<Square, ParseError> {
        let file = File::from_char(file).ok_or(ParseError::BadFile { character: file })?;
        let rank = Rank::from_char(rank).ok_or(ParseError::BadRank { character: rank })?;
        Ok(Square::new(rank, file))
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Return `true` if both coordinates are inside the grid.
    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.row < 8 && self.col < 8
    }

    /// Row-major index (0 = a8, 63 = h1).
    #[inline]
    pub const fn index(self) -> usize {
        self.row as usize * 8 + self.col as usize
    }

    /// Return the rank of this square.
    #[inline]
    pub const fn rank(self) -> Rank {
        match self.row {
            0 => Rank::Rank8,
            1 => Rank::Rank7,
            2 => Rank::Rank6,
            3 => Rank::Rank5,
            4 => Rank::Rank4,
            5 => Rank::Rank3,
            6 => Rank::Rank2,
            _ => Rank::Rank1,
        }
    }

    /// Return the file of this square.
    #[inline]
    pub const fn file(self) -> File {
        match self.col {
            0 => File::FileA,
            1 => File::FileB,
            2 => File::FileC,
            3 => File::FileD,
            4 => File::FileE,
            5 => File::FileF,
            6 => File::FileG,
            _ => File::FileH,
        }
    }

    /// Signed (row, column) offset from `self` to `to`.
    #[inline]
    pub const fn delta(self, to: Square) -> (i8, i8) {
        (to.row as i8 - self.row as i8, to.col as i8 - self.col as i8)
    }

    /// Step by a signed offset, returning `None` when it leaves the board.
    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        Square::from_coords(self.row as i8 + d_row, self.col as i8 + d_col)
    }

    /// Iterate over all 64 squares in row-major order (a8, b8, ..., h1).
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(|i| Square { row: i / 8, col: i % 8 })
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self)
    }
}
