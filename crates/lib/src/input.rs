//! Loading grids from text.


use std::path::Path;

use bstr::ByteSlice;
use serde_json::Value;

use crate::error::{Error, LineCol};

/// The UTF-8 byte-order mark.
const BOM: &[u8] = b"\xEF\xBB\xBF";

/// Cell separator in delimited input.
const SEP: &str = ",";

/// Parse comma-delimited input into rows of integers.
///
/// One row per line, with surrounding whitespace trimmed from each cell. A
/// leading byte-order mark and trailing blank lines are ignored. No shape
/// checks are performed here.
///
/// # Examples
///
/// ```
/// let grid = lib::input::from_csv(b"\xEF\xBB\xBF1, 2,3\r\n4,5,6\n")?;
/// assert_eq!(grid, [[1, 2, 3], [4, 5, 6]]);
/// # Ok::<(), lib::Error>(())
/// ```
pub fn from_csv(data: &[u8]) -> Result<Vec<Vec<i64>>, Error> {
    let data = data.strip_prefix(BOM).unwrap_or(data).trim_end();

    let mut grid = Vec::new();

    if data.is_empty() {
        return Ok(grid);
    }

    for (line, row) in data.lines().enumerate() {
        let mut cells = Vec::new();
        let mut start = 0;

        for cell in row.split_str(SEP) {
            let value = cell.trim();
            let offset = start + (cell.len() - cell.trim_start().len());

            let parsed = value
                .to_str()
                .ok()
                .and_then(|value| value.parse::<i64>().ok());

            let Some(parsed) = parsed else {
                return Err(Error::NotInteger {
                    pos: LineCol::new(line, offset),
                    value: value.to_str_lossy().into(),
                });
            };

            cells.push(parsed);
            start += cell.len() + SEP.len();
        }

        grid.push(cells);
    }

    Ok(grid)
}

/// Convert a JSON document into rows of integers.
///
/// This is a dynamically typed boundary, so shape mismatches are reported as
/// [`ErrorKind::Type`][crate::ErrorKind::Type].
pub fn from_json(value: &Value) -> Result<Vec<Vec<i64>>, Error> {
    let Value::Array(rows) = value else {
        return Err(Error::GridType(type_name(value)));
    };

    let mut grid = Vec::with_capacity(rows.len());

    for (row, value) in rows.iter().enumerate() {
        let Value::Array(cells) = value else {
            return Err(Error::RowType {
                row,
                found: type_name(value),
            });
        };

        let mut out = Vec::with_capacity(cells.len());

        for (column, value) in cells.iter().enumerate() {
            let Some(n) = value.as_i64() else {
                return Err(Error::CellType {
                    row,
                    column,
                    found: type_name(value),
                });
            };

            out.push(n);
        }

        grid.push(out);
    }

    Ok(grid)
}

/// Parse the contiguous length from a string argument.
///
/// # Examples
///
/// ```
/// use lib::ErrorKind;
///
/// assert_eq!(lib::input::parse_length("4")?, 4);
/// assert_eq!(lib::input::parse_length("-1").unwrap_err().kind(), ErrorKind::Value);
/// assert_eq!(lib::input::parse_length("three").unwrap_err().kind(), ErrorKind::Type);
/// # Ok::<(), lib::Error>(())
/// ```
pub fn parse_length(value: &str) -> Result<usize, Error> {
    let Ok(n) = value.trim().parse::<i64>() else {
        return Err(Error::LengthType(value.into()));
    };

    positive(n)
}

/// Read the contiguous length from a JSON value.
pub fn length_from_json(value: &Value) -> Result<usize, Error> {
    let Some(n) = value.as_i64() else {
        return Err(Error::LengthType(value.to_string().into()));
    };

    positive(n)
}

/// Load a grid from a file.
///
/// Files with a `.json` extension are read as a JSON array of rows, anything
/// else as comma-delimited text.
pub fn load<P>(path: P) -> Result<Vec<Vec<i64>>, Error>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let data = std::fs::read(path).map_err(|error| Error::open(path, error))?;

    log::debug!("read {} bytes from {}", data.len(), path.display());

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        let value = serde_json::from_slice::<Value>(&data)?;
        return from_json(&value);
    }

    from_csv(&data)
}

fn positive(n: i64) -> Result<usize, Error> {
    match usize::try_from(n) {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(Error::NonPositiveLength(n)),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(..) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(n) if n.is_i64() => "integer",
        Value::Number(..) => "out of range integer",
        Value::String(..) => "string",
        Value::Array(..) => "array",
        Value::Object(..) => "object",
    }
}
