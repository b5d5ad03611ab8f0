//! Command set, tokenizer, registry and dispatcher.

mod kind;
mod output;
mod parse;
mod registry;

pub use kind::Command;
pub use output::Output;
pub use parse::{parse_line, ParsedCommand};
pub use registry::{CommandRegistry, Dispatcher};
