//! Error types for SnapKV core.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur while dispatching or executing a command.
///
/// Both variants are recoverable: the caller reports them and keeps reading
/// commands. Rolling back with no open transaction and unsetting an absent
/// key are not errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A command received fewer arguments than it requires.
    #[error("{command} expects at least {expected} argument(s), got {actual}")]
    Arity {
        /// Name of the command.
        command: &'static str,
        /// Minimum number of arguments.
        expected: usize,
        /// Number of arguments supplied.
        actual: usize,
    },

    /// No command is registered under this name.
    #[error("unknown command `{name}`")]
    UnknownCommand {
        /// The name as typed.
        name: String,
    },
}

impl CoreError {
    /// Creates an arity error.
    pub fn arity(command: &'static str, expected: usize, actual: usize) -> Self {
        Self::Arity {
            command,
            expected,
            actual,
        }
    }

    /// Creates an unknown command error.
    pub fn unknown_command(name: impl Into<String>) -> Self {
        Self::UnknownCommand { name: name.into() }
    }
}
