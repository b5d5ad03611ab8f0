//! Output rendering.

use std::fmt::Display;
use std::io::{self, Write};

/// Writes command output and error reports.
///
/// Every line is flushed immediately so output interleaves correctly with
/// an interactive prompt.
#[derive(Debug)]
pub struct Renderer<O, E> {
    out: O,
    err: E,
}

impl<O: Write, E: Write> Renderer<O, E> {
    /// Creates a renderer writing results to `out` and errors to `err`.
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    /// Writes one result line.
    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")?;
        self.out.flush()
    }

    /// Reports a rejected command.
    pub fn error(&mut self, error: &dyn Display) -> io::Result<()> {
        writeln!(self.err, "error: {error}")?;
        self.err.flush()
    }

    /// Consumes the renderer, returning the writers.
    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}
