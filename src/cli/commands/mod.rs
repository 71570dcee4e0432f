//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Validates command-specific arguments
//! 2. Builds or reads the structures it needs
//! 3. Formats and displays output

mod completion;
mod config_cmd;
mod demo;

// Re-export command functions for testing and direct invocation
pub use completion::completion;
pub use config_cmd::{get as config_get, list as config_list, set as config_set};
pub use demo::{build_genealogy, collect_ranks, demo, find_by_value, RankView, GENERATION, SIBLING};

use anyhow::Result;

use super::args::{Command, ConfigAction};
use super::Context;

/// Dispatch a parsed command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Demo {
            delete,
            json,
            direction,
        } => demo(ctx, &delete, json, direction),
        Command::Config { action } => match action {
            ConfigAction::Get { key } => config_get(ctx, &key),
            ConfigAction::Set { key, value } => config_set(ctx, &key, &value),
            ConfigAction::List => config_list(ctx),
        },
        Command::Completion { shell } => completion(shell),
    }
}
