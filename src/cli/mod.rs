//! cli
//!
//! Command-line interface layer for zz.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Install logging and load configuration
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap and dispatches to
//! [`commands`]. All structural changes go through
//! [`Tissue`](crate::core::tissue::Tissue).

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use tracing_subscriber::EnvFilter;

use crate::core::config::Config;
use crate::ui::output::Verbosity;

/// Execution context shared by every command.
#[derive(Debug, Clone)]
pub struct Context {
    /// Resolved configuration
    pub config: Config,
    /// Config file named with `--config`, if any
    pub config_path: Option<PathBuf>,
    /// Output verbosity
    pub verbosity: Verbosity,
}

impl Context {
    /// Build a context, loading config from `config_path` or the default
    /// locations.
    ///
    /// An explicit path that does not exist yet yields default values; it
    /// is still the target of `zz config set`.
    pub fn load(config_path: Option<PathBuf>, verbosity: Verbosity) -> Result<Self> {
        let config = match &config_path {
            Some(path) if path.exists() => Config::load_from(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            Some(_) => Config::default(),
            None => Config::load().context("Failed to load config")?,
        };

        Ok(Self {
            config,
            config_path,
            verbosity,
        })
    }
}

/// Install the tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `--debug` turns on this crate's
/// debug events and everything else stays at `warn`.
pub fn init_logging(debug: bool) {
    let default = if debug { "zigzag=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // A second init (as in tests) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    init_logging(cli.debug);

    let verbosity = Verbosity::from_flags(cli.quiet, cli.debug);
    let ctx = Context::load(cli.config.clone(), verbosity)?;
    tracing::debug!(config = ?ctx.config.loaded_from(), "starting command");

    commands::dispatch(cli.command, &ctx)
}
