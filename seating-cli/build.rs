//! Build script for seating-cli.
//!
//! This script generates the man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    Command::new("seating")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Replay restaurant reservation batches")
        .long_about(
            "Command-line tool that replays a batch of restaurant reservation commands \
             and prints the resulting notifications",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress diagnostics")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Read configuration from this file instead of ./seating.yaml")
                .value_name("PATH")
                .global(true)
                .env("SEATING_CONFIG"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format for events")
                .value_parser(["text", "json"])
                .global(true),
        )
        .subcommands(vec![
            Command::new("run")
                .about("Replay a batch and print the resulting events")
                .long_about("Read a batch from FILE or stdin and print one line per event")
                .arg(Arg::new("FILE").help("Batch file to read (stdin if omitted or -)"))
                .arg(
                    Arg::new("start-day")
                        .long("start-day")
                        .value_name("DAY")
                        .help("Simulated day the batch starts on"),
                )
                .arg(
                    Arg::new("cancellation-window")
                        .long("cancellation-window")
                        .value_name("POLICY")
                        .value_parser(["period-max", "booking-window"])
                        .help("Which offsets allow users to cancel without contacting the restaurant"),
                ),
            Command::new("validate")
                .about("Parse a batch without running it")
                .long_about("Parse a batch and report its restaurant and command counts")
                .arg(Arg::new("FILE").help("Batch file to read (stdin if omitted or -)")),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("seating.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
