use core::fmt;
use std::io;
use std::path::Path;

use thiserror::Error;

use crate::grid::Direction;

/// Broad classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An argument has the wrong shape or type.
    Type,
    /// An argument is well-typed but semantically invalid.
    Value,
    /// Input could not be read.
    Io,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Type => write!(f, "type error"),
            ErrorKind::Value => write!(f, "value error"),
            ErrorKind::Io => write!(f, "i/o error"),
        }
    }
}

/// A line and column combination.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCol {
    line: usize,
    start: usize,
}

impl LineCol {
    pub(crate) const fn new(line: usize, start: usize) -> Self {
        Self { line, start }
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = self.line + 1;
        write!(f, "{line}:{}", self.start)
    }
}

/// Errors raised while loading or evaluating a grid.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid type of grid: expected an array of rows, got {0}")]
    GridType(&'static str),
    #[error("invalid type of row {row}: expected an array of integers, got {found}")]
    RowType { row: usize, found: &'static str },
    #[error("invalid type of cell {row}:{column}: expected an integer, got {found}")]
    CellType {
        row: usize,
        column: usize,
        found: &'static str,
    },
    #[error("invalid type of contiguous integers: expected an integer, got `{0}`")]
    LengthType(Box<str>),
    #[error("empty grid")]
    EmptyGrid,
    #[error("empty grid: first row has no columns")]
    EmptyRow,
    #[error("varying row length, {expected} vs {actual} at row {row}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("contiguous integers {0} invalid; must be positive")]
    NonPositiveLength(i64),
    #[error("contiguous integers {k} invalid; # rows ({rows}) and # columns ({columns})")]
    LengthOutOfBounds {
        k: usize,
        rows: usize,
        columns: usize,
    },
    #[error("{pos}: not an integer or integer overflow `{value}`")]
    NotInteger { pos: LineCol, value: Box<str> },
    #[error("product of {len} cells {direction} from {row}:{column} overflows")]
    Overflow {
        row: usize,
        column: usize,
        direction: Direction,
        len: usize,
    },
    #[error("{len} cells {direction} from {row}:{column} leave the grid")]
    OutOfBounds {
        row: usize,
        column: usize,
        direction: Direction,
        len: usize,
    },
    #[error("malformed json")]
    Json(#[from] serde_json::Error),
    #[error("cannot open file {path}")]
    Open {
        path: Box<str>,
        #[source]
        error: io::Error,
    },
}

impl Error {
    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::GridType(..)
            | Error::RowType { .. }
            | Error::CellType { .. }
            | Error::LengthType(..) => ErrorKind::Type,
            Error::Open { .. } => ErrorKind::Io,
            _ => ErrorKind::Value,
        }
    }

    pub(crate) fn open(path: &Path, error: io::Error) -> Self {
        Error::Open {
            path: path.display().to_string().into(),
            error,
        }
    }
}
