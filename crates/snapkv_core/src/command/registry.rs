//! Name-to-command binding and dispatch.

use crate::command::kind::Command;
use crate::command::output::Output;
use crate::command::parse::{parse_line, ParsedCommand};
use crate::engine::Engine;
use crate::error::{CoreError, CoreResult};
use std::collections::HashMap;

/// Immutable table mapping command names to commands.
///
/// Built once by [`CommandRegistry::builtin`] before the read loop starts
/// and never modified afterwards. The application owns it and lends it to a
/// [`Dispatcher`].
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    handlers: HashMap<&'static str, Command>,
}

impl CommandRegistry {
    /// Creates a registry holding every built-in command.
    #[must_use]
    pub fn builtin() -> Self {
        let handlers = Command::ALL
            .into_iter()
            .map(|command| (command.name(), command))
            .collect();
        Self { handlers }
    }

    /// Looks up a command by exact (case-sensitive) name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Command> {
        self.handlers.get(name).copied()
    }

    /// Returns the registered names in ascending order.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.handlers.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Returns the number of registered commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns true if no commands are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

/// Resolves parsed commands through a registry and runs them.
///
/// The dispatcher is stateless; all state lives in the [`Engine`] passed
/// to each call.
///
/// # Example
///
/// ```rust
/// use snapkv_core::{CommandRegistry, Dispatcher, Engine, Output};
///
/// let registry = CommandRegistry::builtin();
/// let dispatcher = Dispatcher::new(&registry);
/// let mut engine = Engine::new();
///
/// dispatcher.dispatch_line("SET a 10", &mut engine).unwrap();
/// let out = dispatcher.dispatch_line("GET a", &mut engine).unwrap();
/// assert_eq!(out, Some(Output::Value("10".into())));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Dispatcher<'r> {
    registry: &'r CommandRegistry,
}

impl<'r> Dispatcher<'r> {
    /// Creates a dispatcher over `registry`.
    #[must_use]
    pub fn new(registry: &'r CommandRegistry) -> Self {
        Self { registry }
    }

    /// Returns the command registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnknownCommand`] if nothing is registered under
    /// that exact name.
    pub fn resolve(&self, name: &str) -> CoreResult<Command> {
        self.registry
            .get(name)
            .ok_or_else(|| CoreError::unknown_command(name))
    }

    /// Resolves and executes a parsed command.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnknownCommand`] or [`CoreError::Arity`]. In
    /// both cases the engine is unchanged.
    pub fn dispatch(&self, parsed: &ParsedCommand, engine: &mut Engine) -> CoreResult<Output> {
        tracing::debug!(command = %parsed.name, args = ?parsed.args, "dispatch");
        let command = self.resolve(&parsed.name)?;
        command.execute(parsed.args.as_slice(), engine)
    }

    /// Tokenizes a raw line and dispatches it.
    ///
    /// Blank lines produce `Ok(None)` and touch nothing.
    ///
    /// # Errors
    ///
    /// Same as [`dispatch`](Self::dispatch).
    pub fn dispatch_line(&self, line: &str, engine: &mut Engine) -> CoreResult<Option<Output>> {
        match parse_line(line) {
            Some(parsed) => self.dispatch(&parsed, engine).map(Some),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(dispatcher: &Dispatcher<'_>, engine: &mut Engine, line: &str) -> Option<String> {
        dispatcher
            .dispatch_line(line, engine)
            .unwrap()
            .and_then(|out| out.render())
    }

    #[test]
    fn builtin_has_all_commands() {
        let registry = CommandRegistry::builtin();
        assert_eq!(registry.len(), 9);
        assert_eq!(
            registry.names(),
            vec!["BEGIN", "COMMIT", "COUNTS", "END", "FIND", "GET", "ROLLBACK", "SET", "UNSET"]
        );
        assert_eq!(registry.get("FIND"), Some(Command::Find));
    }

    #[test]
    fn resolve_is_case_sensitive() {
        let registry = CommandRegistry::builtin();
        let dispatcher = Dispatcher::new(&registry);

        assert_eq!(dispatcher.resolve("GET"), Ok(Command::Get));
        assert_eq!(
            dispatcher.resolve("get"),
            Err(CoreError::unknown_command("get"))
        );
    }

    #[test]
    fn unknown_command_leaves_engine_alone() {
        let registry = CommandRegistry::builtin();
        let dispatcher = Dispatcher::new(&registry);
        let mut engine = Engine::new();

        let err = dispatcher.dispatch_line("PUT a 1", &mut engine).unwrap_err();
        assert_eq!(err, CoreError::unknown_command("PUT"));
        assert!(engine.store().is_empty());
    }

    #[test]
    fn blank_line_is_ignored() {
        let registry = CommandRegistry::builtin();
        let dispatcher = Dispatcher::new(&registry);
        let mut engine = Engine::new();

        assert_eq!(dispatcher.dispatch_line("   ", &mut engine), Ok(None));
    }

    #[test]
    fn nested_transactions() {
        let registry = CommandRegistry::builtin();
        let d = Dispatcher::new(&registry);
        let mut engine = Engine::new();

        run(&d, &mut engine, "BEGIN");
        run(&d, &mut engine, "SET a 1");
        run(&d, &mut engine, "BEGIN");
        run(&d, &mut engine, "SET a 2");
        assert_eq!(run(&d, &mut engine, "GET a"), Some("2".into()));

        run(&d, &mut engine, "ROLLBACK");
        assert_eq!(run(&d, &mut engine, "GET a"), Some("1".into()));

        run(&d, &mut engine, "ROLLBACK");
        assert_eq!(run(&d, &mut engine, "GET a"), Some(String::new()));
    }

    #[test]
    fn commit_then_rollback_is_noop() {
        let registry = CommandRegistry::builtin();
        let d = Dispatcher::new(&registry);
        let mut engine = Engine::new();

        run(&d, &mut engine, "BEGIN");
        run(&d, &mut engine, "SET a 1");
        run(&d, &mut engine, "COMMIT");
        run(&d, &mut engine, "ROLLBACK");
        assert_eq!(run(&d, &mut engine, "GET a"), Some("1".into()));
    }

    #[test]
    fn counts_find_scenario() {
        let registry = CommandRegistry::builtin();
        let d = Dispatcher::new(&registry);
        let mut engine = Engine::new();

        run(&d, &mut engine, "SET a 10");
        run(&d, &mut engine, "SET b 10");
        assert_eq!(run(&d, &mut engine, "COUNTS 10"), Some("2".into()));
        run(&d, &mut engine, "UNSET a");
        assert_eq!(run(&d, &mut engine, "COUNTS 10"), Some("1".into()));
        assert_eq!(run(&d, &mut engine, "FIND 10"), Some("b".into()));
        assert_eq!(run(&d, &mut engine, "FIND 99"), Some(String::new()));
    }

    #[test]
    fn end_yields_halt() {
        let registry = CommandRegistry::builtin();
        let d = Dispatcher::new(&registry);
        let mut engine = Engine::new();

        assert_eq!(d.dispatch_line("END", &mut engine), Ok(Some(Output::Halt)));
    }
}
