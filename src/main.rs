use std::io::Write;
use std::time::Instant;

use lib::cli::{Opts, Output, Report};
use lib::prelude::*;
use lib::ErrorKind;

fn main() -> Result<()> {
    let opts = Opts::parse()?;

    let stdout = std::io::stdout();
    let mut o = Output::new(stdout.lock(), opts.output_kind());

    let grid = match lib::input::load(&opts.path) {
        Ok(grid) => grid,
        Err(error) => {
            if error.kind() == ErrorKind::Io {
                o.error(format_args!("Cannot open file {}", opts.path.display()))?;
            }

            return Err(error).with_context(|| anyhow!("{}", opts.path.display()));
        }
    };

    let report = evaluate(&grid, opts.contiguous_integers)?;
    o.report(&report)?;
    o.into_inner().flush()?;
    Ok(())
}

/// Evaluate both queries against a loaded grid.
fn evaluate(grid: &[Vec<i64>], k: usize) -> Result<Report> {
    let start = Instant::now();
    let max_product = max_product(grid, k)?;
    log::debug!("max_product: {:?}", start.elapsed());

    let start = Instant::now();
    let combinations = combination_count(grid, k)?;
    log::debug!("combination_count: {:?}", start.elapsed());

    Ok(Report {
        rows: grid.rows_len(),
        columns: grid.columns_len(),
        contiguous_integers: k,
        max_product,
        combinations,
    })
}
