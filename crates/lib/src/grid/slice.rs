use core::slice;

use crate::grid::{Grid, GridExt};

/// A grid view over a flat, row-major slice.
#[derive(Debug, Clone, Copy)]
pub struct SliceGrid<'a, T> {
    data: &'a [T],
    rows: usize,
    columns: usize,
}

impl<'a, T> SliceGrid<'a, T> {
    /// Iterate over rows in the grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::prelude::*;
    ///
    /// let values = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];
    /// let grid = values.as_grid(4);
    ///
    /// assert!(grid.rows().flatten().copied().eq([1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]));
    /// ```
    #[inline]
    pub fn rows(&self) -> slice::ChunksExact<'a, T> {
        self.data.chunks_exact(self.columns)
    }

    /// Iterate over the cells of a single column.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::prelude::*;
    ///
    /// let values = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];
    /// let grid = values.as_grid(4);
    ///
    /// assert!(grid.column(1).copied().eq([2, 6, 10]));
    /// assert_eq!(grid.column(4).count(), 0);
    /// ```
    #[inline]
    pub fn column(&self, column: usize) -> impl Iterator<Item = &'a T> + 'a {
        let data = self.data;
        let start = if column < self.columns {
            column
        } else {
            data.len()
        };

        data[start..].iter().step_by(self.columns)
    }
}

impl<T> Grid for SliceGrid<'_, T> {
    type Item = T;

    #[inline]
    fn rows_len(&self) -> usize {
        self.rows
    }

    #[inline]
    fn columns_len(&self) -> usize {
        self.columns
    }

    #[inline]
    fn row(&self, row: usize) -> Option<&[T]> {
        if row >= self.rows {
            return None;
        }

        let start = row * self.columns;
        self.data.get(start..start + self.columns)
    }
}

impl<T> GridExt<T> for [T] {
    #[inline]
    fn as_grid(&self, columns: usize) -> SliceGrid<'_, T> {
        assert!(columns != 0, "columns must be non-zero");

        let rem = self.len() % columns;
        let len = self.len().saturating_sub(rem);

        SliceGrid {
            data: &self[..len],
            rows: len / columns,
            columns,
        }
    }
}
