//! Error types for the shell.

use rustyline::error::ReadlineError;
use std::io;
use thiserror::Error;

/// Result type for shell operations.
pub type CliResult<T> = Result<T, CliError>;

/// Errors that end a shell session.
///
/// Rejected commands and undecodable lines never show up here; the shell
/// reports them and keeps reading.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The terminal line editor failed.
    #[error("line editor error: {0}")]
    Readline(#[from] ReadlineError),
}
