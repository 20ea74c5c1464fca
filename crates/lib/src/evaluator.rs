//! Greatest product of contiguous cells in a grid.

#[cfg(test)]
mod tests;

use core::iter::FusedIterator;

use num::{BigInt, Bounded, NumCast, PrimInt, ToPrimitive};

use crate::error::Error;
use crate::grid::{Direction, Grid};

/// Check that a grid is rectangular and non-empty.
///
/// This is the shape half of [`validate`].
pub fn validate_shape<G>(grid: &G) -> Result<(), Error>
where
    G: ?Sized + Grid,
{
    let Some(first) = grid.row(0) else {
        return Err(Error::EmptyGrid);
    };

    let expected = first.len();

    if expected == 0 {
        return Err(Error::EmptyRow);
    }

    for row in 1..grid.rows_len() {
        let actual = grid.row(row).map_or(0, <[_]>::len);

        if actual != expected {
            return Err(Error::RaggedRow {
                row,
                expected,
                actual,
            });
        }
    }

    Ok(())
}

/// Check that `grid` and the contiguous length `k` can be evaluated.
///
/// The grid must be non-empty and rectangular, and `k` must satisfy
/// `1 <= k <= max(rows, columns)`.
pub fn validate<G>(grid: &G, k: usize) -> Result<(), Error>
where
    G: ?Sized + Grid,
{
    validate_shape(grid)?;

    if k == 0 {
        return Err(Error::NonPositiveLength(0));
    }

    let rows = grid.rows_len();
    let columns = grid.columns_len();

    if k > rows.max(columns) {
        return Err(Error::LengthOutOfBounds { k, rows, columns });
    }

    Ok(())
}

/// Find the greatest product of `k` contiguous cells in any direction.
///
/// # Examples
///
/// ```
/// use lib::prelude::*;
///
/// let grid = [[1, 2, 3], [7, 8, 9], [4, 5, 6]];
/// assert_eq!(max_product(&grid, 3)?, 504);
/// # Ok::<(), lib::Error>(())
/// ```
pub fn max_product<G>(grid: &G, k: usize) -> Result<G::Item, Error>
where
    G: ?Sized + Grid,
    G::Item: PrimInt + Into<BigInt>,
{
    validate(grid, k)?;

    let rows = grid.rows_len();
    let columns = grid.columns_len();

    log::debug!("evaluating {rows}x{columns} grid with k = {k}");

    let mut max = None::<(Wide, Combination)>;

    for row in 0..rows {
        for column in 0..columns {
            for direction in Direction::ALL {
                let Some(product) = run_product(grid, row, column, direction, k) else {
                    continue;
                };

                if max.as_ref().map_or(true, |(max, _)| product.is_greater(max)) {
                    log::trace!("new maximum {direction} from {row}:{column}");

                    let at = Combination {
                        row,
                        column,
                        direction,
                        len: k,
                    };

                    max = Some((product, at));
                }
            }
        }
    }

    // Validation guarantees at least one run inside the grid.
    let Some((product, at)) = max else {
        return Ok(<G::Item as Bounded>::min_value());
    };

    product.narrow().ok_or_else(|| at.overflow())
}

/// Count the runs of `k` contiguous cells [`max_product`] examines.
///
/// # Examples
///
/// ```
/// use lib::prelude::*;
///
/// let grid = [[1, 2, 3], [4, 5, 6]];
/// assert_eq!(combination_count(&grid, 2)?, 11);
/// # Ok::<(), lib::Error>(())
/// ```
pub fn combination_count<G>(grid: &G, k: usize) -> Result<usize, Error>
where
    G: ?Sized + Grid,
{
    validate(grid, k)?;

    let rows = grid.rows_len();
    let columns = grid.columns_len();

    // Anchors which leave room for `k` cells along each axis.
    let fit_rows = (rows + 1).saturating_sub(k);
    let fit_columns = (columns + 1).saturating_sub(k);

    let horizontal = rows * fit_columns;
    let vertical = columns * fit_rows;
    let diagonal = fit_rows * fit_columns;
    Ok(horizontal + vertical + 2 * diagonal)
}

/// Construct a lazy iterator over every run of `k` contiguous cells inside
/// the grid, in row-major anchor order.
pub fn combinations<G>(grid: &G, k: usize) -> Result<Combinations, Error>
where
    G: ?Sized + Grid,
{
    validate(grid, k)?;
    Ok(Combinations::new(grid.rows_len(), grid.columns_len(), k))
}

/// The product of `len` cells starting at the given anchor, or `None` if any
/// of them falls outside of the grid.
fn run_product<G>(
    grid: &G,
    row: usize,
    column: usize,
    direction: Direction,
    len: usize,
) -> Option<Wide>
where
    G: ?Sized + Grid,
    G::Item: PrimInt + Into<BigInt>,
{
    let mut small = 1i128;
    let mut big = None::<BigInt>;

    for n in 0..len {
        let (row, column) = direction.step(row, column, n)?;
        let value = *grid.try_get(row, column)?;

        if let Some(big) = &mut big {
            let value: BigInt = value.into();
            *big *= value;
            continue;
        }

        match value.to_i128().and_then(|value| small.checked_mul(value)) {
            Some(next) => small = next,
            None => {
                let value: BigInt = value.into();
                big = Some(BigInt::from(small) * value);
            }
        }
    }

    Some(match big {
        Some(big) => Wide::Big(big),
        None => Wide::Small(small),
    })
}

/// A run product which cannot overflow.
///
/// Stays in `i128` until a multiplication overflows it.
#[derive(Debug, Clone)]
enum Wide {
    Small(i128),
    Big(BigInt),
}

impl Wide {
    fn to_big(&self) -> BigInt {
        match self {
            Wide::Small(n) => BigInt::from(*n),
            Wide::Big(n) => n.clone(),
        }
    }

    fn is_greater(&self, other: &Wide) -> bool {
        match (self, other) {
            (Wide::Small(a), Wide::Small(b)) => a > b,
            (a, b) => a.to_big() > b.to_big(),
        }
    }

    /// Convert into the cell type, if it can represent the product.
    fn narrow<T>(self) -> Option<T>
    where
        T: NumCast,
    {
        match self {
            Wide::Small(n) => <T as NumCast>::from(n),
            Wide::Big(n) => <T as NumCast>::from(n),
        }
    }
}

/// A run of contiguous cells: an anchor, a direction and a length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Combination {
    pub row: usize,
    pub column: usize,
    pub direction: Direction,
    pub len: usize,
}

impl Combination {
    /// Coordinates of the cells in this run, starting at the anchor.
    pub fn cells(self) -> impl Iterator<Item = (usize, usize)> {
        (0..self.len).filter_map(move |n| self.direction.step(self.row, self.column, n))
    }

    /// Compute the product of the cells in this run.
    ///
    /// Fails if the run leaves the grid, or if its product does not fit in
    /// the cell type.
    pub fn product<G>(&self, grid: &G) -> Result<G::Item, Error>
    where
        G: ?Sized + Grid,
        G::Item: PrimInt + Into<BigInt>,
    {
        let Some(product) = run_product(grid, self.row, self.column, self.direction, self.len)
        else {
            return Err(Error::OutOfBounds {
                row: self.row,
                column: self.column,
                direction: self.direction,
                len: self.len,
            });
        };

        product.narrow().ok_or_else(|| self.overflow())
    }

    fn overflow(&self) -> Error {
        Error::Overflow {
            row: self.row,
            column: self.column,
            direction: self.direction,
            len: self.len,
        }
    }
}

/// Iterator returned by [`combinations`].
#[derive(Debug, Clone)]
pub struct Combinations {
    rows: usize,
    columns: usize,
    len: usize,
    row: usize,
    column: usize,
    direction: usize,
}

impl Combinations {
    fn new(rows: usize, columns: usize, len: usize) -> Self {
        Self {
            rows,
            columns,
            len,
            row: 0,
            column: 0,
            direction: 0,
        }
    }

    fn advance(&mut self) {
        self.direction += 1;

        if self.direction < Direction::ALL.len() {
            return;
        }

        self.direction = 0;
        self.column += 1;

        if self.column < self.columns {
            return;
        }

        self.column = 0;
        self.row += 1;
    }
}

impl Iterator for Combinations {
    type Item = Combination;

    fn next(&mut self) -> Option<Self::Item> {
        while self.row < self.rows {
            let (row, column) = (self.row, self.column);
            let direction = Direction::ALL[self.direction];
            self.advance();

            if direction.fits(row, column, self.len, self.rows, self.columns) {
                return Some(Combination {
                    row,
                    column,
                    direction,
                    len: self.len,
                });
            }
        }

        None
    }
}

impl FusedIterator for Combinations {}
