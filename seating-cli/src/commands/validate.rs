//! Command to check a batch without running it.

use crate::error::CliError;
use crate::utils::{read_input, GlobalOptions};
use clap::Args;
use seating::batch::{Batch, Command};
use seating::output::OutputFormat;
use serde::Serialize;
use std::path::PathBuf;

/// Parse a batch and report what it contains.
#[derive(Args)]
pub struct ValidateCommand {
    /// Batch file to read (stdin if omitted or `-`)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct ValidationReport {
    restaurants: usize,
    commands: usize,
    invalid_lines: Vec<usize>,
}

impl ValidateCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let input = read_input(self.file.as_deref())?;
        let batch = Batch::parse(&input)?;

        let mut invalid_lines = Vec::new();
        for parsed in &batch.commands {
            if let Command::Invalid { reason } = &parsed.command {
                log::warn!("line {}: {reason}", parsed.line);
                invalid_lines.push(parsed.line);
            }
        }

        let report = ValidationReport {
            restaurants: batch.restaurants.len(),
            commands: batch.commands.len(),
            invalid_lines,
        };

        match global.format.unwrap_or_default() {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&report)
                    .map_err(|e| CliError::Library(e.into()))?;
                println!("{json}");
            }
            OutputFormat::Text => {
                println!(
                    "Batch is valid: {} restaurant(s), {} command(s)",
                    report.restaurants, report.commands
                );
                if !report.invalid_lines.is_empty() {
                    println!(
                        "{} invalid command line(s) would print \"Invalid Query\"",
                        report.invalid_lines.len()
                    );
                }
            }
        }

        Ok(())
    }
}
