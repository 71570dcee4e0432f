//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--config <path>`: Read configuration from this file
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::core::types::Direction;

/// zz - build and walk zigzag cell structures
#[derive(Parser, Debug)]
#[command(name = "zz")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of the default locations
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build the genealogy example and print its ranks
    #[command(
        name = "demo",
        long_about = "Build the genealogy example structure and print every rank.\n\n\
            The structure holds Elizabeth II and her family on two dimensions: \
            'generation' links parents to children and 'sibling' links brothers \
            and sisters. Cells named with --delete are removed afterwards, and \
            the chains they sat in are spliced back together.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Print the structure
    zz demo

    # Remove Andrew and watch the sibling rank close up
    zz demo --delete Andrew

    # Machine-readable output, ranks walked Negative
    zz demo --json --direction negative"
    )]
    Demo {
        /// Delete the cell holding this name (repeatable, applied in order)
        #[arg(long = "delete", value_name = "NAME")]
        delete: Vec<String>,

        /// Output JSON
        #[arg(long)]
        json: bool,

        /// Direction to print ranks in (defaults to config, then positive)
        #[arg(long)]
        direction: Option<Direction>,
    },

    /// Get, set, or list configuration values
    #[command(
        name = "config",
        after_help = "\
WORKFLOW EXAMPLES:
    # Show every value and where it came from
    zz config list

    # Read one value
    zz config get direction

    # Set a value
    zz config set verify false"
    )]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        after_help = "\
WORKFLOW EXAMPLES:
    # Bash (add to ~/.bashrc)
    zz completion bash >> ~/.bashrc

    # Zsh (add to ~/.zshrc)
    zz completion zsh >> ~/.zshrc

    # Fish
    zz completion fish > ~/.config/fish/completions/zz.fish"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
    },
    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,
        /// Value to set
        value: String,
    },
    /// List all configuration values
    List,
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn demo_collects_deletions() {
        let args = ["zz", "demo", "--delete", "Andrew", "--delete", "Ann"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Command::Demo {
                delete,
                json,
                direction,
            } => {
                assert_eq!(delete, vec!["Andrew", "Ann"]);
                assert!(!json);
                assert!(direction.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn demo_parses_direction() {
        let cli = Cli::try_parse_from(["zz", "demo", "--direction", "negative"]).unwrap();
        match cli.command {
            Command::Demo { direction, .. } => assert_eq!(direction, Some(Direction::Negative)),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["zz", "config", "list", "--quiet", "--debug"]).unwrap();
        assert!(cli.quiet);
        assert!(cli.debug);
    }
}
