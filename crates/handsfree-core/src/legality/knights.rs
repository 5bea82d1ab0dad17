//! Knight legality.

use crate::square::Square;

/// A knight moves two squares along one axis and one along the other.
/// Intervening pieces do not matter.
pub fn is_legal_knight(from: Square, to: Square) -> bool {
    let (d_row, d_col) = from.delta(to);
    matches!((d_row.abs(), d_col.abs()), (2, 1) | (1, 2))
}
