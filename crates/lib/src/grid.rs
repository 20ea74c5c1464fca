mod direction;
mod matrix;
pub mod slice;


pub use self::direction::Direction;
pub use self::matrix::Matrix;

mod sealed {
    pub trait Sealed {}
    impl<T> Sealed for [T] {}
}

use self::sealed::Sealed;
use self::slice::SliceGrid;

pub trait GridExt<T>: Sealed {
    /// Treat a flat, row-major buffer as a grid with the given number of
    /// columns.
    ///
    /// Trailing elements which do not fill a complete row are ignored.
    ///
    /// # Panics
    ///
    /// Panics if `columns` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::prelude::*;
    ///
    /// let values = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];
    /// let grid = values.as_grid(4);
    ///
    /// assert_eq!(grid.rows_len(), 3);
    /// assert_eq!(grid.columns_len(), 4);
    /// assert_eq!(grid.row(1), Some(&[5, 6, 7, 8][..]));
    /// ```
    fn as_grid(&self, columns: usize) -> SliceGrid<'_, T>;
}

/// A read-only view of rows of cells.
///
/// Implementations are not required to be rectangular. Use
/// [`validate`][crate::validate] to check the shape before relying on
/// [`Grid::columns_len`] for every row.
pub trait Grid {
    /// The cell type of the grid.
    type Item;

    /// Get number of rows in the grid.
    fn rows_len(&self) -> usize;

    /// Access the specified row in the grid.
    fn row(&self, row: usize) -> Option<&[Self::Item]>;

    /// Get number of columns in the grid, as defined by its first row.
    #[inline]
    fn columns_len(&self) -> usize {
        self.row(0).map_or(0, <[_]>::len)
    }

    /// Get the element at the given row and column.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::prelude::*;
    ///
    /// let data = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];
    /// let grid = data.as_grid(4);
    ///
    /// assert_eq!(grid.try_get(0, 1), Some(&2));
    /// assert_eq!(grid.try_get(1, 1), Some(&6));
    ///
    /// assert_eq!(grid.try_get(2, 0), Some(&9));
    /// assert_eq!(grid.try_get(2, 1), Some(&10));
    ///
    /// assert_eq!(grid.try_get(3, 0), None);
    /// ```
    #[inline]
    fn try_get(&self, row: usize, column: usize) -> Option<&Self::Item> {
        self.row(row)?.get(column)
    }

    /// Get the element at the given row and column.
    #[inline]
    #[track_caller]
    fn get(&self, row: usize, column: usize) -> &Self::Item {
        match self.try_get(row, column) {
            Some(value) => value,
            None => panic!("missing row `{row}`, column `{column}`"),
        }
    }
}

impl<G> Grid for &G
where
    G: ?Sized + Grid,
{
    type Item = G::Item;

    #[inline]
    fn rows_len(&self) -> usize {
        (**self).rows_len()
    }

    #[inline]
    fn row(&self, row: usize) -> Option<&[Self::Item]> {
        (**self).row(row)
    }

    #[inline]
    fn columns_len(&self) -> usize {
        (**self).columns_len()
    }
}

macro_rules! nested {
    ($({$($generics:tt)*} $ty:ty),* $(,)?) => {
        $(
            impl<$($generics)*> Grid for $ty {
                type Item = T;

                #[inline]
                fn rows_len(&self) -> usize {
                    self.len()
                }

                #[inline]
                fn row(&self, row: usize) -> Option<&[T]> {
                    let rows: &[_] = &self[..];
                    Some(&rows.get(row)?[..])
                }
            }
        )*
    }
}

nested! {
    {T} [Vec<T>],
    {T} Vec<Vec<T>>,
    {T, const N: usize} [[T; N]],
    {T, const N: usize} Vec<[T; N]>,
    {T, const N: usize, const M: usize} [[T; N]; M],
}
