//! Main entry point for the seating CLI.
//!
//! Commands:
//! - `run`: Replay a reservation batch and print the resulting events
//! - `validate`: Check that a batch parses
//! - `completions`: Generate shell completion scripts

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    // Diagnostics go to stderr; stdout is reserved for events
    let logger = seating::init_logger(cli.verbose, cli.quiet);
    seating::install_logger(logger);

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: cli.config,
        format: cli.format,
    };

    let result = match cli.command {
        cli::Command::Run(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
