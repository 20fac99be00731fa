//! # CLI Argument Definitions
//!
//! Command-line interface of the `sfeed` tool, defined with `clap`.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "sfeed")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Validate and normalize marketplace product data")]
pub(crate) struct Cli {
    /// Configuration file (defaults to an optional `sfeed.toml` in the working directory)
    #[arg(short, long, global = true)]
    pub(crate) config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub(crate) verbose: u8,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub(crate) command: Commands,
}

/// Enumeration of available subcommands.
#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Validate a JSON document holding one product data object or an array of them
    Check {
        /// Path to the JSON document
        file: PathBuf,
        /// Pretty-print the normalized output
        #[arg(long)]
        pretty: bool,
    },
    /// List the first-class product data fields
    Fields {},
    /// List the configured condition types
    Conditions {},
}
