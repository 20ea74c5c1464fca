use core::fmt;

use serde::Serialize;

/// A direction in which a run of cells extends from its anchor.
///
/// Only forward directions are needed: every run has a unique first cell in
/// row-major scan order, and extending from that cell covers it exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    /// `(0, +1)`
    Right,
    /// `(+1, 0)`
    Down,
    /// `(+1, -1)`
    DownLeft,
    /// `(+1, +1)`
    DownRight,
}

impl Direction {
    /// All directions in enumeration order.
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Down,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    /// The `(row, column)` offset of one step in this direction.
    #[inline]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::DownLeft => (1, -1),
            Direction::DownRight => (1, 1),
        }
    }

    /// Take `n` steps from the given cell.
    ///
    /// Returns `None` if the coordinate would leave the `usize` range, which
    /// only happens when stepping left past column zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::prelude::*;
    ///
    /// assert_eq!(Direction::DownLeft.step(0, 2, 2), Some((2, 0)));
    /// assert_eq!(Direction::DownLeft.step(0, 2, 3), None);
    /// assert_eq!(Direction::Right.step(4, 1, 0), Some((4, 1)));
    /// ```
    #[inline]
    pub fn step(self, row: usize, column: usize, n: usize) -> Option<(usize, usize)> {
        let n = isize::try_from(n).ok()?;
        let (dr, dc) = self.delta();
        let row = row.checked_add_signed(dr.checked_mul(n)?)?;
        let column = column.checked_add_signed(dc.checked_mul(n)?)?;
        Some((row, column))
    }

    /// Test if a run of `len` cells anchored at the given cell lies entirely
    /// inside a `rows` by `columns` grid.
    ///
    /// Runs are straight, so it's enough to check the first and last cell.
    #[inline]
    pub fn fits(self, row: usize, column: usize, len: usize, rows: usize, columns: usize) -> bool {
        if len == 0 || row >= rows || column >= columns {
            return false;
        }

        match self.step(row, column, len - 1) {
            Some((row, column)) => row < rows && column < columns,
            None => false,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Right => write!(f, "right"),
            Direction::Down => write!(f, "down"),
            Direction::DownLeft => write!(f, "down-left"),
            Direction::DownRight => write!(f, "down-right"),
        }
    }
}
