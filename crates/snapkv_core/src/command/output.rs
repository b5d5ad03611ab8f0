//! Command results.

/// Successful result of executing a command.
///
/// Each [`Command`](crate::Command) produces exactly one variant:
///
/// | Command | Output |
/// |---------|--------|
/// | GET | `Value` |
/// | COUNTS | `Count` |
/// | FIND | `Keys` |
/// | END | `Halt` |
/// | everything else | `Unit` |
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// No output (state-changing commands).
    Unit,
    /// A stored value; empty when the key is absent.
    Value(String),
    /// Number of matching entries.
    Count(usize),
    /// Matching keys in store order.
    Keys(Vec<String>),
    /// The read loop should stop.
    Halt,
}

impl Output {
    /// Returns the line to show the operator, if this output has one.
    ///
    /// Keys are joined by a single space. An empty line is still a line.
    #[must_use]
    pub fn render(&self) -> Option<String> {
        match self {
            Self::Value(value) => Some(value.clone()),
            Self::Count(count) => Some(count.to_string()),
            Self::Keys(keys) => Some(keys.join(" ")),
            Self::Unit | Self::Halt => None,
        }
    }

    /// Returns true if this output ends the session.
    #[must_use]
    pub fn is_halt(&self) -> bool {
        matches!(self, Self::Halt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_lines() {
        assert_eq!(Output::Value(String::new()).render(), Some(String::new()));
        assert_eq!(Output::Count(0).render(), Some("0".to_string()));
        assert_eq!(
            Output::Keys(vec!["a".into(), "b".into()]).render(),
            Some("a b".to_string())
        );
        assert_eq!(Output::Keys(Vec::new()).render(), Some(String::new()));
        assert_eq!(Output::Unit.render(), None);
        assert_eq!(Output::Halt.render(), None);
    }

    #[test]
    fn only_halt_halts() {
        assert!(Output::Halt.is_halt());
        assert!(!Output::Unit.is_halt());
    }
}
