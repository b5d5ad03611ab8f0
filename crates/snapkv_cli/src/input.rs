//! Line sources feeding the shell.

use crate::error::CliResult;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::BufRead;
use std::path::PathBuf;

/// One step of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEvent {
    /// A raw line, without its terminator.
    Line(String),
    /// A line that could not be decoded; the reason is reported and the
    /// session continues.
    Malformed(String),
    /// The operator pressed Ctrl-C.
    Interrupted,
    /// No more input.
    Eof,
}

/// Yields successive raw input lines.
pub trait LineSource {
    /// Blocks until the next line, an interrupt, or end of input.
    fn next_line(&mut self, prompt: &str) -> CliResult<LineEvent>;

    /// Called once when the session ends.
    fn finish(&mut self) -> CliResult<()> {
        Ok(())
    }
}

/// Reads lines from any buffered reader (piped stdin, script files).
///
/// The prompt is not echoed. Lines that are not valid UTF-8 come back as
/// [`LineEvent::Malformed`] rather than ending the stream.
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
    buf: Vec<u8>,
    line_no: usize,
}

impl<R: BufRead> ReaderSource<R> {
    /// Wraps a reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            line_no: 0,
        }
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn next_line(&mut self, _prompt: &str) -> CliResult<LineEvent> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(LineEvent::Eof);
        }
        self.line_no += 1;

        let mut line = self.buf.as_slice();
        while let [rest @ .., b'\n' | b'\r'] = line {
            line = rest;
        }
        match std::str::from_utf8(line) {
            Ok(text) => Ok(LineEvent::Line(text.to_string())),
            Err(e) => Ok(LineEvent::Malformed(format!(
                "line {} is not valid UTF-8 ({e})",
                self.line_no
            ))),
        }
    }
}

/// Interactive terminal input with line editing and history.
pub struct TerminalSource {
    editor: DefaultEditor,
    history: Option<PathBuf>,
}

impl TerminalSource {
    /// Creates a terminal source, loading `history` if it exists.
    pub fn new(history: Option<PathBuf>) -> CliResult<Self> {
        let mut editor = DefaultEditor::new()?;
        if let Some(path) = &history {
            // A missing history file is normal on first use.
            if let Err(e) = editor.load_history(path) {
                tracing::debug!(path = %path.display(), error = %e, "history not loaded");
            }
        }
        Ok(Self { editor, history })
    }
}

impl LineSource for TerminalSource {
    fn next_line(&mut self, prompt: &str) -> CliResult<LineEvent> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    if let Err(e) = self.editor.add_history_entry(line.as_str()) {
                        tracing::warn!(error = %e, "failed to record history entry");
                    }
                }
                Ok(LineEvent::Line(line))
            }
            Err(ReadlineError::Interrupted) => Ok(LineEvent::Interrupted),
            Err(ReadlineError::Eof) => Ok(LineEvent::Eof),
            Err(e) => Err(e.into()),
        }
    }

    fn finish(&mut self) -> CliResult<()> {
        if let Some(path) = &self.history {
            if let Err(e) = self.editor.save_history(path) {
                tracing::warn!(path = %path.display(), error = %e, "failed to save history");
            }
        }
        Ok(())
    }
}
