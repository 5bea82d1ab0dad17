//! King legality. Castling is not supported.

use crate::square::Square;

/// A king steps to any of the eight neighboring squares.
pub fn is_legal_king(from: Square, to: Square) -> bool {
    let (d_row, d_col) = from.delta(to);
    d_row.abs().max(d_col.abs()) == 1
}

#[cfg(test)]
mod tests {
    use super::is_legal_king;
    use crate::square::Square;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn one_step_any_direction() {
        let e4 = sq("e4");
        let count = Square::all().filter(|&to| is_legal_king(e4, to)).count();
        assert_eq!(count, 8);
        assert!(is_legal_king(e4, sq("f5")));
        assert!(is_legal_king(e4, sq("d3")));
    }

    #[test]
    fn no_castling_or_long_steps() {
        assert!(!is_legal_king(sq("e1"), sq("g1")));
        assert!(!is_legal_king(sq("e1"), sq("c1")));
        assert!(!is_legal_king(sq("e4"), sq("e6")));
        assert!(!is_legal_king(sq("e4"), sq("e4")));
    }
}
