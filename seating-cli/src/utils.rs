//! Utility functions for CLI operations.
//!
//! Configuration loading and batch input reading shared across commands.

use crate::error::CliError;
use seating::output::OutputFormat;
use seating::{Config, ConfigBuilder};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // verbose is consumed by the logger in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress diagnostics.
    pub quiet: bool,

    /// Explicit configuration file.
    pub config: Option<PathBuf>,

    /// Output format override.
    pub format: Option<OutputFormat>,
}

/// Load layered configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Command-line flags (`overrides` plus `--format`)
/// 2. Environment variables
/// 3. Configuration files
/// 4. Built-in defaults
pub fn load_configuration(global: &GlobalOptions, overrides: Config) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new().with_config(Config {
        output_format: global.format.or(overrides.output_format),
        ..overrides
    });

    if let Some(ref path) = global.config {
        builder = builder.with_config_file(path);
    }

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// Read batch input from `path`, or from stdin when `path` is `None` or `-`.
pub fn read_input(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(path) if path != Path::new("-") => {
            if !path.exists() {
                return Err(CliError::InvalidArguments(format!(
                    "File not found: {}",
                    path.display()
                )));
            }
            Ok(fs::read_to_string(path)?)
        }
        _ => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}
