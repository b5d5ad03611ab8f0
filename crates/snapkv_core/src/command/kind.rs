//! The fixed command set.

use crate::command::output::Output;
use crate::engine::Engine;
use crate::error::{CoreError, CoreResult};

/// One of the nine commands understood by the interpreter.
///
/// Commands carry no state of their own; a single value serves every
/// invocation. Each variant checks its argument count before touching the
/// engine, so a rejected command never leaves a partial change behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// `GET <key>`: print the value, or an empty line if unset.
    Get,
    /// `SET <key> <value>`: bind key to value.
    Set,
    /// `UNSET <key>`: remove the binding if present.
    Unset,
    /// `COUNTS <value>`: print how many keys hold the value.
    Counts,
    /// `FIND <value>`: print the keys holding the value.
    Find,
    /// `BEGIN`: open a (nested) transaction.
    Begin,
    /// `ROLLBACK`: undo the innermost open transaction.
    Rollback,
    /// `COMMIT`: close all open transactions.
    Commit,
    /// `END`: stop the read loop.
    End,
}

impl Command {
    /// Every command, in protocol order.
    pub const ALL: [Command; 9] = [
        Command::Get,
        Command::Set,
        Command::Unset,
        Command::Counts,
        Command::Find,
        Command::Begin,
        Command::Rollback,
        Command::Commit,
        Command::End,
    ];

    /// Returns the name the command is invoked by.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Set => "SET",
            Self::Unset => "UNSET",
            Self::Counts => "COUNTS",
            Self::Find => "FIND",
            Self::Begin => "BEGIN",
            Self::Rollback => "ROLLBACK",
            Self::Commit => "COMMIT",
            Self::End => "END",
        }
    }

    /// Returns the minimum number of arguments.
    #[must_use]
    pub const fn min_args(self) -> usize {
        match self {
            Self::Set => 2,
            Self::Get | Self::Unset | Self::Counts | Self::Find => 1,
            Self::Begin | Self::Rollback | Self::Commit | Self::End => 0,
        }
    }

    /// Runs the command against `engine`.
    ///
    /// Arguments beyond [`min_args`](Self::min_args) are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Arity`] if too few arguments were supplied; the
    /// engine is left unchanged.
    pub fn execute<S: AsRef<str>>(self, args: &[S], engine: &mut Engine) -> CoreResult<Output> {
        let required = self.min_args();
        if args.len() < required {
            return Err(CoreError::arity(self.name(), required, args.len()));
        }
        if args.len() > required {
            tracing::debug!(
                command = self.name(),
                surplus = args.len() - required,
                "ignoring surplus arguments"
            );
        }

        let arg = |i: usize| args[i].as_ref();
        let output = match self {
            Self::Get => Output::Value(engine.store().get(arg(0)).to_owned()),
            Self::Set => {
                engine.store_mut().set(arg(0), arg(1));
                Output::Unit
            }
            Self::Unset => {
                if !engine.store_mut().unset(arg(0)) {
                    tracing::trace!(key = arg(0), "unset of absent key");
                }
                Output::Unit
            }
            Self::Counts => Output::Count(engine.store().count_value(arg(0))),
            Self::Find => Output::Keys(engine.store().find_keys(arg(0))),
            Self::Begin => {
                engine.begin();
                Output::Unit
            }
            Self::Rollback => {
                engine.rollback();
                Output::Unit
            }
            Self::Commit => {
                engine.commit();
                Output::Unit
            }
            Self::End => Output::Halt,
        };
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_uppercase_and_unique() {
        let mut names: Vec<_> = Command::ALL.iter().map(|c| c.name()).collect();
        assert!(names.iter().all(|n| *n == n.to_uppercase()));
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Command::ALL.len());
    }

    #[test]
    fn set_then_get() {
        let mut engine = Engine::new();
        assert_eq!(Command::Set.execute(&["a", "1"], &mut engine), Ok(Output::Unit));
        assert_eq!(
            Command::Get.execute(&["a"], &mut engine),
            Ok(Output::Value("1".into()))
        );
    }

    #[test]
    fn get_missing_is_empty_value() {
        let mut engine = Engine::new();
        assert_eq!(
            Command::Get.execute(&["missing"], &mut engine),
            Ok(Output::Value(String::new()))
        );
    }

    #[test]
    fn short_set_leaves_store_unchanged() {
        let mut engine = Engine::new();
        let err = Command::Set.execute(&["a"], &mut engine).unwrap_err();
        assert_eq!(err, CoreError::arity("SET", 2, 1));
        assert!(engine.store().is_empty());
    }

    #[test]
    fn single_argument_commands_require_one() {
        let mut engine = Engine::new();
        let none: [&str; 0] = [];
        for cmd in [Command::Get, Command::Unset, Command::Counts, Command::Find] {
            assert_eq!(
                cmd.execute(&none, &mut engine),
                Err(CoreError::arity(cmd.name(), 1, 0))
            );
        }
    }

    #[test]
    fn unset_missing_is_not_an_error() {
        let mut engine = Engine::new();
        assert_eq!(Command::Unset.execute(&["nope"], &mut engine), Ok(Output::Unit));
    }

    #[test]
    fn surplus_arguments_ignored() {
        let mut engine = Engine::new();
        Command::Set.execute(&["a", "1", "extra"], &mut engine).unwrap();
        assert_eq!(engine.store().get("a"), "1");
        assert_eq!(Command::Begin.execute(&["x"], &mut engine), Ok(Output::Unit));
        assert_eq!(engine.txlog().depth(), 1);
    }

    #[test]
    fn counts_and_find_scenario() {
        let mut engine = Engine::new();
        Command::Set.execute(&["a", "10"], &mut engine).unwrap();
        Command::Set.execute(&["b", "10"], &mut engine).unwrap();
        assert_eq!(Command::Counts.execute(&["10"], &mut engine), Ok(Output::Count(2)));

        Command::Unset.execute(&["a"], &mut engine).unwrap();
        assert_eq!(Command::Counts.execute(&["10"], &mut engine), Ok(Output::Count(1)));
        assert_eq!(
            Command::Find.execute(&["10"], &mut engine),
            Ok(Output::Keys(vec!["b".into()]))
        );
    }

    #[test]
    fn end_halts() {
        let mut engine = Engine::new();
        let none: [&str; 0] = [];
        assert_eq!(Command::End.execute(&none, &mut engine), Ok(Output::Halt));
    }
}
