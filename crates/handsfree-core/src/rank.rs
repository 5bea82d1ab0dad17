//! Chess board ranks (rows 1–8).

use std::fmt;

/// A rank on the chess board, from Rank1 (White's back rank) to Rank8.
///
/// Grid rows run the other way: Rank8 is row 0 and Rank1 is row 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Rank1 = 0,
    Rank2 = 1,
    Rank3 = 2,
    Rank4 = 3,
    Rank5 = 4,
    Rank6 = 5,
    Rank7 = 6,
    Rank8 = 7,
}

impl Rank {
    /// All ranks in index order.
    pub const ALL: [Rank; 8] = [
        Rank::Rank1,
        Rank::Rank2,
        Rank::Rank3,
        Rank::Rank4,
        Rank::Rank5,
        Rank::Rank6,
        Rank::Rank7,
        Rank::Rank8,
    ];

    /// Create a rank from a zero-based index (0 = Rank1, 7 = Rank8).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Rank> {
        match index {
            0 => Some(Rank::Rank1),
            1 => Some(Rank::Rank2),
            2 => Some(Rank::Rank3),
            3 => Some(Rank::Rank4),
            4 => Some(Rank::Rank5),
            5 => Some(Rank::Rank6),
            6 => Some(Rank::Rank7),
            7 => Some(Rank::Rank8),
            _ => None,
        }
    }

    /// Parse a rank digit '1'..='8'.
    pub fn from_char(c: char) -> Option<Rank> {
        if !('1'..='8').contains(&c) {
            return None;
        }
        Rank::from_index(c as u8 - b'1')
    }

    /// Grid row of this rank: `8 - rank`.
    #[inline]
    pub const fn row(self) -> usize {
        7 - self as usize
    }

    /// Rank shown on grid row `row`.
    #[inline]
    pub const fn from_row(row: u8) -> Option<Rank> {
        if row > 7 {
            return None;
        }
        Rank::from_index(7 - row)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", *self as u8 + 1)
    }
}
