//! The read-dispatch-render loop.

use crate::config::ShellConfig;
use crate::error::CliResult;
use crate::input::{LineEvent, LineSource};
use crate::render::Renderer;
use snapkv_core::{CommandRegistry, Dispatcher, Engine};
use std::io::Write;

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellExit {
    /// The operator issued END.
    End,
    /// The operator pressed Ctrl-C.
    Interrupted,
    /// Input ran out.
    Eof,
}

/// One interactive session over a fresh engine.
///
/// Commands run one at a time to completion. Rejected commands are
/// reported through the renderer and the loop carries on; only END, an
/// interrupt, end of input, or an I/O failure stop it. Transactions still
/// open at shutdown are dropped.
pub struct Shell<'r, S, O, E> {
    dispatcher: Dispatcher<'r>,
    engine: Engine,
    source: S,
    renderer: Renderer<O, E>,
    config: ShellConfig,
}

impl<'r, S, O, E> Shell<'r, S, O, E>
where
    S: LineSource,
    O: Write,
    E: Write,
{
    /// Creates a session dispatching through `registry`.
    pub fn new(
        registry: &'r CommandRegistry,
        source: S,
        renderer: Renderer<O, E>,
        config: ShellConfig,
    ) -> Self {
        Self {
            dispatcher: Dispatcher::new(registry),
            engine: Engine::new(),
            source,
            renderer,
            config,
        }
    }

    /// Runs until END, interrupt, or end of input.
    ///
    /// The line source is always finished, even when the loop fails, so an
    /// interactive history file is saved on every exit path.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading input or writing output fails.
    pub fn run(&mut self) -> CliResult<ShellExit> {
        let result = self.read_loop();
        let finished = self.source.finish();
        let exit = result?;
        finished?;

        tracing::info!(
            ?exit,
            open_transactions = self.engine.txlog().depth(),
            "session ended"
        );
        Ok(exit)
    }

    fn read_loop(&mut self) -> CliResult<ShellExit> {
        let exit = loop {
            let line = match self.source.next_line(&self.config.prompt)? {
                LineEvent::Line(line) => line,
                LineEvent::Malformed(reason) => {
                    tracing::debug!(%reason, "input line rejected");
                    self.renderer.error(&reason)?;
                    continue;
                }
                LineEvent::Interrupted => break ShellExit::Interrupted,
                LineEvent::Eof => break ShellExit::Eof,
            };

            match self.dispatcher.dispatch_line(&line, &mut self.engine) {
                Ok(Some(output)) if output.is_halt() => break ShellExit::End,
                Ok(Some(output)) => {
                    if let Some(text) = output.render() {
                        self.renderer.line(&text)?;
                    }
                }
                Ok(None) => {}
                Err(err) => {
                    tracing::debug!(error = %err, "command rejected");
                    self.renderer.error(&err)?;
                }
            }
        };

        if let Some(farewell) = &self.config.farewell {
            self.renderer.line(farewell)?;
        }
        Ok(exit)
    }

    /// Returns the engine.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Consumes the session, returning the renderer.
    pub fn into_renderer(self) -> Renderer<O, E> {
        self.renderer
    }
}
