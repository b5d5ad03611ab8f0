//! # SnapKV Shell
//!
//! The line-oriented front end for [`snapkv_core`]: line sources, output
//! rendering, and the read loop that ties them to a [`Dispatcher`].
//!
//! [`Dispatcher`]: snapkv_core::Dispatcher

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod input;
pub mod render;
pub mod shell;

pub use config::ShellConfig;
pub use error::{CliError, CliResult};
pub use input::{LineEvent, LineSource, ReaderSource, TerminalSource};
pub use render::Renderer;
pub use shell::{Shell, ShellExit};
