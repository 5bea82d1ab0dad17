//! Move representation and algebraic move-string parsing.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::square::Square;

/// A move from a source square to a destination square.
///
/// Parsed from a four-character string `<file><rank><file><rank>` such as
/// `"e2e4"`. No promotion suffix is accepted.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    source: Square,
    dest: Square,
}

impl Move {
    /// Number of characters in a move string.
    pub const TEXT_LEN: usize = 4;

    /// Create a move between two squares.
    pub const fn new(source: Square, dest: Square) -> Move {
        Move { source, dest }
    }

    /// Parse a move string such as `"e2e4"`.
    ///
    /// Files may be upper- or lowercase; ranks must be digits `1`..=`8`.
    pub fn parse(s: &str) -> Result<Move, ParseError> {
        let chars: Vec<char> = s.chars().collect();
        let &[from_file, from_rank, to_file, to_rank] = chars.as_slice() else {
            return Err(ParseError::WrongLength {
                expected: Move::TEXT_LEN,
                found: chars.len(),
            });
        };
        let source = Square::from_chars(from_file, from_rank)?;
        let dest = Square::from_chars(to_file, to_rank)?;
        Ok(Move::new(source, dest))
    }

    #[inline]
    pub const fn source(self) -> Square {
        self.source
    }

    #[inline]
    pub const fn dest(self) -> Square {
        self.dest
    }

    /// Signed (row, column) displacement of the move.
    #[inline]
    pub const fn delta(self) -> (i8, i8) {
        self.source.delta(self.dest)
    }
}

impl FromStr for Move {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Move, ParseError> {
        Move::parse(s)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.source, self.dest)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self)
    }
}
