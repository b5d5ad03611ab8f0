//! # SnapKV Core
//!
//! In-memory string key-value store with nested, snapshot-based
//! transactions, driven by a small fixed command language.
//!
//! This crate provides:
//! - [`Store`] - the live mapping, with value counting and reverse lookup
//! - [`TransactionLog`] - a stack of [`Snapshot`]s implementing
//!   BEGIN / ROLLBACK / COMMIT
//! - [`Engine`] - the store and log that commands run against
//! - [`Command`] - the nine commands as a tagged union
//! - [`CommandRegistry`] and [`Dispatcher`] - name resolution and execution
//!
//! ## Example
//!
//! ```rust
//! use snapkv_core::{CommandRegistry, Dispatcher, Engine};
//!
//! let registry = CommandRegistry::builtin();
//! let dispatcher = Dispatcher::new(&registry);
//! let mut engine = Engine::new();
//!
//! for line in ["SET a 1", "BEGIN", "SET a 2", "ROLLBACK"] {
//!     dispatcher.dispatch_line(line, &mut engine).unwrap();
//! }
//! assert_eq!(engine.store().get("a"), "1");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod command;
mod engine;
mod error;
mod store;
mod transaction;

pub use command::{parse_line, Command, CommandRegistry, Dispatcher, Output, ParsedCommand};
pub use engine::Engine;
pub use error::{CoreError, CoreResult};
pub use store::{Snapshot, Store};
pub use transaction::TransactionLog;

/// SnapKV version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
