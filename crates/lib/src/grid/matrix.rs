use crate::error::Error;
use crate::grid::slice::SliceGrid;
use crate::grid::{Grid, GridExt};

/// An owned rectangular grid stored as a flat row-major buffer.
///
/// Construction checks the shape, so a `Matrix` always has at least one row,
/// at least one column, and rows of identical length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<T> {
    data: Vec<T>,
    columns: usize,
}

impl<T> Matrix<T> {
    /// Get number of rows in the matrix.
    #[inline]
    pub fn rows_len(&self) -> usize {
        self.data.len() / self.columns
    }

    /// Get number of columns in the matrix.
    #[inline]
    pub fn columns_len(&self) -> usize {
        self.columns
    }

    /// Borrow the matrix as a grid view.
    #[inline]
    pub fn as_grid(&self) -> SliceGrid<'_, T> {
        self.data.as_grid(self.columns)
    }

    /// Access the underlying row-major data.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T> Grid for Matrix<T> {
    type Item = T;

    #[inline]
    fn rows_len(&self) -> usize {
        Matrix::rows_len(self)
    }

    #[inline]
    fn columns_len(&self) -> usize {
        self.columns
    }

    #[inline]
    fn row(&self, row: usize) -> Option<&[T]> {
        let start = row.checked_mul(self.columns)?;
        self.data.get(start..start.checked_add(self.columns)?)
    }
}

impl<T> TryFrom<Vec<Vec<T>>> for Matrix<T> {
    type Error = Error;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self, Self::Error> {
        crate::evaluator::validate_shape(&rows)?;

        let columns = rows.columns_len();
        let data = rows.into_iter().flatten().collect();
        Ok(Self { data, columns })
    }
}
