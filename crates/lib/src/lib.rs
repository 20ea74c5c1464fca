//! Greatest product of contiguous cells in a rectangular grid of integers.
//!
//! ```
//! use lib::prelude::*;
//!
//! let grid = vec![vec![1, 2, 3], vec![4, 5, 6]];
//!
//! assert_eq!(max_product(&grid, 2)?, 30);
//! assert_eq!(combination_count(&grid, 2)?, 11);
//! # Ok::<(), lib::Error>(())
//! ```

pub mod cli;
mod error;
pub mod evaluator;
pub mod grid;
pub mod input;

pub use self::error::{Error, ErrorKind, LineCol};
pub use self::evaluator::{
    combination_count, combinations, max_product, validate, Combination, Combinations,
};

pub mod prelude {
    //! Helper prelude with useful imports.
    pub use crate::evaluator::{combination_count, combinations, max_product, validate};
    pub use crate::grid::{Direction, Grid, GridExt, Matrix};
    pub use anyhow::{anyhow, bail, Context, Result};
}
