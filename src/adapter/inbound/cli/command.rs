//! Command-line interface definitions.
//!
//! Defines the CLI structure for the oracle using `clap`: the long-running
//! listener, a one-shot manual resolution and configuration utilities.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Resolution oracle for peer-created sports prediction markets
#[derive(Parser, Debug)]
#[command(name = "quintus-oracle")]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file.
    #[arg(short, long, global = true, default_value = "config.toml")]
    pub config: PathBuf,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Listen for markets ready for resolution and resolve them one by one
    Run(RunArgs),

    /// Resolve a single market and print the result as JSON
    Resolve(ResolveArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `quintus-oracle config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Display the effective configuration with defaults applied.
    Show,
    /// Validate a configuration file for correctness.
    Validate,
}

/// Arguments for the `run` subcommand.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// JSON-lines market event file; `-` or absent reads stdin.
    #[arg(long)]
    pub events: Option<PathBuf>,

    /// Append resolutions to this JSON-lines file for the chain relay.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Log resolutions instead of writing them (overrides config).
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `resolve` subcommand.
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Market title, e.g. "Will Arsenal beat Chelsea?".
    #[arg(long)]
    pub title: String,

    /// Optional market description.
    #[arg(long)]
    pub description: Option<String>,

    /// Allowed outcome; repeat for each (at least two).
    #[arg(long = "outcome", required = true, num_args = 1)]
    pub outcomes: Vec<String>,

    /// Betting close, epoch seconds.
    #[arg(long)]
    pub bet_deadline: i64,

    /// Resolution open, epoch seconds.
    #[arg(long)]
    pub resolution_deadline: i64,
}
