//! Path clearance between aligned squares, used by the sliding pieces.

use crate::board::Board;
use crate::square::Square;

/// Return the unit step from `start` toward `end` if the two squares share a
/// row, a column, or a diagonal. Identical squares are not aligned.
pub fn direction(start: Square, end: Square) -> Option<(i8, i8)> {
    let (d_row, d_col) = start.delta(end);
    let aligned = (d_row == 0) != (d_col == 0) || (d_row != 0 && d_row.abs() == d_col.abs());
    aligned.then(|| (d_row.signum(), d_col.signum()))
}

/// Iterator over the squares strictly between two aligned squares.
pub struct Between {
    next: Option<Square>,
    end: Square,
    step: (i8, i8),
}

impl Iterator for Between {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        let current = self.next.filter(|&sq| sq != self.end)?;
        self.next = current.offset(self.step.0, self.step.1);
        Some(current)
    }
}

/// Return the open interval of squares from `start` to `end`, or `None` if
/// they are not aligned. Adjacent squares yield an empty iterator.
pub fn between(start: Square, end: Square) -> Option<Between> {
    let step = direction(start, end)?;
    Some(Between {
        next: start.offset(step.0, step.1),
        end,
        step,
    })
}

/// Return `true` if every square strictly between `start` and `end` is empty.
///
/// The squares must share a row, a column, or a diagonal; callers check that
/// first. An unaligned pair trips a debug assertion and is reported as blocked.
pub fn is_clear(board: &Board, start: Square, end: Square) -> bool {
    debug_assert!(
        direction(start, end).is_some(),
        "is_clear called on unaligned squares {start} and {end}"
    );
    between(start, end).is_some_and(|mut squares| squares.all(|sq| !board.is_occupied(sq)))
}
