//! SnapKV CLI
//!
//! Interactive shell over an in-memory transactional key-value store.
//!
//! # Commands
//!
//! - `GET <key>` / `SET <key> <value>` / `UNSET <key>`
//! - `COUNTS <value>` / `FIND <value>`
//! - `BEGIN` / `ROLLBACK` / `COMMIT`
//! - `END`

use clap::Parser;
use snapkv_cli::{LineSource, ReaderSource, Renderer, Shell, ShellConfig, TerminalSource};
use snapkv_core::CommandRegistry;
use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// SnapKV interactive key-value shell.
#[derive(Parser)]
#[command(name = "snapkv")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Do not print the farewell line on exit
    #[arg(short, long)]
    quiet: bool,

    /// Prompt shown in interactive mode
    #[arg(long, default_value = snapkv_cli::config::DEFAULT_PROMPT)]
    prompt: String,

    /// History file for interactive mode
    #[arg(long)]
    history: Option<PathBuf>,

    /// Read commands from a script file instead of stdin
    #[arg(short, long)]
    file: Option<PathBuf>,
}

impl Cli {
    /// Builds the session configuration from the parsed flags.
    fn shell_config(&self) -> ShellConfig {
        ShellConfig::new()
            .prompt(self.prompt.as_str())
            .farewell((!self.quiet).then(|| snapkv_cli::config::DEFAULT_FAREWELL.to_string()))
            .history(self.history.clone())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = cli.shell_config();

    let registry = CommandRegistry::builtin();

    if let Some(path) = &cli.file {
        let file = File::open(path)?;
        run(&registry, ReaderSource::new(BufReader::new(file)), config)
    } else if io::stdin().is_terminal() {
        let source = TerminalSource::new(config.history.clone())?;
        run(&registry, source, config)
    } else {
        run(&registry, ReaderSource::new(io::stdin().lock()), config)
    }
}

fn run<S: LineSource>(
    registry: &CommandRegistry,
    source: S,
    config: ShellConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let renderer = Renderer::new(io::stdout(), io::stderr());
    let mut shell = Shell::new(registry, source, renderer, config);
    shell.run()?;
    Ok(())
}
