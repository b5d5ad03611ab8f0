//! Tokenizer for the line protocol.

/// A command line split into its name and arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    /// First token, matched case-sensitively against the registry.
    pub name: String,
    /// Remaining tokens in order.
    pub args: Vec<String>,
}

impl ParsedCommand {
    /// Creates a parsed command from already-split parts.
    pub fn new<I, S>(name: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

/// Splits a raw line on whitespace.
///
/// Returns `None` for a blank line.
///
/// ```rust
/// use snapkv_core::parse_line;
///
/// let cmd = parse_line("SET a 10").unwrap();
/// assert_eq!(cmd.name, "SET");
/// assert_eq!(cmd.args, vec!["a", "10"]);
/// assert!(parse_line("   ").is_none());
/// ```
#[must_use]
pub fn parse_line(line: &str) -> Option<ParsedCommand> {
    let mut tokens = line.split_whitespace();
    let name = tokens.next()?;
    Some(ParsedCommand::new(name, tokens))
}
