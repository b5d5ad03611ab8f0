//! Shell configuration.

use std::path::PathBuf;

/// Prompt shown before each interactive line.
pub const DEFAULT_PROMPT: &str = "> ";

/// Line printed when the session ends.
pub const DEFAULT_FAREWELL: &str = "Bye!";

/// Configuration for a shell session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Prompt passed to the line source.
    pub prompt: String,

    /// Line printed on shutdown, if any.
    pub farewell: Option<String>,

    /// History file for interactive sessions.
    pub history: Option<PathBuf>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            farewell: Some(DEFAULT_FAREWELL.to_string()),
            history: None,
        }
    }
}

impl ShellConfig {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the prompt.
    #[must_use]
    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Sets the farewell line, or disables it with `None`.
    #[must_use]
    pub fn farewell(mut self, farewell: Option<String>) -> Self {
        self.farewell = farewell;
        self
    }

    /// Sets the history file.
    #[must_use]
    pub fn history(mut self, path: Option<PathBuf>) -> Self {
        self.history = path;
        self
    }
}
