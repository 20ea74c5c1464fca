//! CLI helpers.

mod output;
mod stdout_logger;


use core::fmt;
use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use serde::Serialize;

pub use self::output::{Output, OutputKind};

static STDOUT_LOGGER: stdout_logger::StdoutLogger = stdout_logger::StdoutLogger;

/// Default number of contiguous integers.
pub const DEFAULT_CONTIGUOUS_INTEGERS: usize = 3;

/// Input options.
#[derive(Debug)]
pub struct Opts {
    /// Path to the grid.
    pub path: PathBuf,
    /// Number of integers to consider for product.
    pub contiguous_integers: usize,
    /// Run in verbose mode.
    pub verbose: bool,
    /// Output JSON lines.
    pub json: bool,
}

impl Opts {
    /// Parse CLI options from the process arguments and install the logger.
    pub fn parse() -> Result<Self> {
        let opts = Self::parse_from(std::env::args_os().skip(1))?;

        if !opts.json {
            let level = if opts.verbose {
                log::LevelFilter::Debug
            } else {
                log::LevelFilter::Warn
            };

            log::set_max_level(level);
            log::set_logger(&STDOUT_LOGGER)
                .map_err(|error| anyhow!("failed to set log: {error}"))?;
        }

        Ok(opts)
    }

    /// Parse CLI options from the given arguments, excluding the program name.
    pub fn parse_from<I>(args: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<OsString>,
    {
        let mut path = None;
        let mut contiguous_integers = None;
        let mut verbose = false;
        let mut json = false;

        let mut it = args.into_iter().map(Into::into);

        while let Some(arg) = it.next() {
            let Some(arg) = arg.to_str() else {
                bail!("non-utf8 argument");
            };

            match arg {
                "-k" | "--contiguous-integers" => {
                    if contiguous_integers.is_some() {
                        bail!("duplicate `--contiguous-integers` arguments");
                    }

                    let k = it
                        .next()
                        .context("missing argument to `--contiguous-integers`")?;
                    let k = k
                        .to_str()
                        .context("missing string argument to `--contiguous-integers`")?;
                    contiguous_integers = Some(
                        crate::input::parse_length(k)
                            .context("bad argument to `--contiguous-integers`")?,
                    );
                }
                "--verbose" => {
                    verbose = true;
                }
                "--json" => {
                    json = true;
                }
                "--" => {
                    if let Some(rest) = it.next() {
                        set_path(&mut path, rest.into())?;
                    }

                    if let Some(other) = it.next() {
                        bail!("unexpected argument: {}", other.to_string_lossy());
                    }

                    break;
                }
                other if other.starts_with('-') && other != "-" => {
                    bail!("unsupported argument: {other}");
                }
                other => {
                    set_path(&mut path, other.into())?;
                }
            }
        }

        let path = path.context("missing path to the grid")?;

        Ok(Self {
            path,
            contiguous_integers: contiguous_integers.unwrap_or(DEFAULT_CONTIGUOUS_INTEGERS),
            verbose,
            json,
        })
    }

    /// The kind of output requested.
    pub fn output_kind(&self) -> OutputKind {
        if self.json {
            OutputKind::Json
        } else {
            OutputKind::Normal
        }
    }
}

fn set_path(path: &mut Option<PathBuf>, value: PathBuf) -> Result<()> {
    if let Some(existing) = path {
        bail!(
            "unexpected argument: {} (path already set to {})",
            value.display(),
            existing.display()
        );
    }

    *path = Some(value);
    Ok(())
}

/// The results of evaluating a grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub rows: usize,
    pub columns: usize,
    pub contiguous_integers: usize,
    pub max_product: i64,
    pub combinations: usize,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Report {
            max_product,
            combinations,
            ..
        } = self;

        writeln!(f, "Greatest product is {max_product}")?;
        write!(f, "Number of combinations is {combinations}")
    }
}
