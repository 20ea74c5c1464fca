use core::fmt;
use std::io::{self, Write};

use serde::Serialize;

use crate::cli::Report;

/// Writes evaluation results as plain text or as JSON lines.
pub struct Output<O> {
    out: O,
    kind: OutputKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    Json,
    Normal,
}

impl<O> Output<O>
where
    O: Write,
{
    pub fn new(out: O, kind: OutputKind) -> Self {
        Self { out, kind }
    }

    /// Report a failure which ends the run.
    pub fn error(&mut self, m: impl fmt::Display) -> io::Result<()> {
        match self.kind {
            OutputKind::Json => self.json(LineType::Error, &Error { output: m }),
            OutputKind::Normal => writeln!(self.out, "{m}"),
        }
    }

    pub fn report(&mut self, report: &Report) -> io::Result<()> {
        match self.kind {
            OutputKind::Json => self.json(LineType::Report, report),
            OutputKind::Normal => writeln!(self.out, "{report}"),
        }
    }

    /// Unwrap the underlying writer.
    pub fn into_inner(self) -> O {
        self.out
    }

    fn json<T>(&mut self, ty: LineType, data: &T) -> io::Result<()>
    where
        T: Serialize,
    {
        serde_json::to_writer(&mut self.out, &Line { ty, data })?;
        writeln!(self.out)
    }
}

#[derive(Serialize)]
struct Line<'a, T> {
    #[serde(rename = "type")]
    ty: LineType,
    data: &'a T,
}

#[derive(Serialize)]
#[serde(rename_all = "kebab-case")]
enum LineType {
    Error,
    Report,
}

struct Error<T> {
    output: T,
}

impl<T> Serialize for Error<T>
where
    T: fmt::Display,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("output", &format_args!("{}", self.output))?;
        map.end()
    }
}
