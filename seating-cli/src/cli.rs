//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{CompletionsCommand, RunCommand, ValidateCommand};
use clap::{Parser, Subcommand};
use seating::output::OutputFormat;
use std::path::PathBuf;

/// Command-line tool for replaying restaurant reservation batches.
#[derive(Parser)]
#[command(name = "seating")]
#[command(version, about = "Replay restaurant reservation batches", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress diagnostics
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Read configuration from this file instead of ./seating.yaml
    #[arg(long, value_name = "PATH", global = true, env = "SEATING_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format for events
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Replay a batch and print the resulting events
    Run(RunCommand),

    /// Parse a batch without running it
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
