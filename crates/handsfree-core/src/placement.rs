//! Piece-placement strings (the first field of a FEN record) for [`Board`].

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::error::PlacementError;
use crate::piece::Piece;
use crate::square::Square;

/// Placement string of the standard starting position.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

impl Board {
    /// Parse a placement string such as `"8/8/8/3k4/8/8/4P3/4K3"`.
    ///
    /// Ranks are listed from rank 8 down to rank 1, separated by `/`. Digits
    /// stand for runs of empty squares; `PNBRQK` are White pieces and
    /// `pnbrqk` are Black pieces. Trailing FEN fields are not accepted.
    pub fn from_placement(placement: &str) -> Result<Board, PlacementError> {
        let ranks: Vec<&str> = placement.trim().split('/').collect();
        if ranks.len() != 8 {
            return Err(PlacementError::WrongRankCount { found: ranks.len() });
        }

        let mut board = Board::empty();

        // Rank index doubles as grid row: the first listed rank is rank 8.
        for (rank_index, rank_str) in ranks.iter().enumerate() {
            let mut col: usize = 0;

            for c in rank_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(PlacementError::InvalidPieceChar { character: c });
                    }
                    col += digit as usize;
                } else {
                    let piece = Piece::from_letter(c)
                        .ok_or(PlacementError::InvalidPieceChar { character: c })?;
                    let overflow = PlacementError::BadRankLength {
                        rank_index,
                        length: col + 1,
                    };
                    if col >= 8 {
                        return Err(overflow);
                    }
                    let sq = Square::from_coords(rank_index as i8, col as i8).ok_or(overflow)?;
                    board.set(sq, Some(piece));
                    col += 1;
                }
            }

            if col != 8 {
                return Err(PlacementError::BadRankLength {
                    rank_index,
                    length: col,
                });
            }
        }

        Ok(board)
    }

    /// Return the placement string for this board.
    pub fn placement(&self) -> String {
        self.to_string()
    }
}

impl FromStr for Board {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Board, PlacementError> {
        Board::from_placement(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut empty_count = 0u8;
        for sq in Square::all() {
            match self.at(sq) {
                Some(piece) => {
                    if empty_count > 0 {
                        write!(f, "{empty_count}")?;
                        empty_count = 0;
                    }
                    write!(f, "{}", piece.letter())?;
                }
                None => empty_count += 1,
            }

            if sq.col() == 7 {
                if empty_count > 0 {
                    write!(f, "{empty_count}")?;
                    empty_count = 0;
                }
                if sq.row() < 7 {
                    write!(f, "/")?;
                }
            }
        }
        Ok(())
    }
}
