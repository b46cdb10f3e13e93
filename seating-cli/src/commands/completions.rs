//! `seating completions <SHELL>`: print a completion script to stdout.
//!
//! A hint on where to install the script goes to stderr unless `--quiet`
//! is set, so redirecting stdout captures only the script.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io;

const BIN_NAME: &str = "seating";

/// Generate shell completion scripts
#[derive(Parser)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

fn install_hint(shell: Shell) -> Option<&'static str> {
    match shell {
        Shell::Bash => {
            Some("seating completions bash > ~/.local/share/bash-completion/completions/seating")
        }
        Shell::Zsh => Some("seating completions zsh > ~/.zsh/completions/_seating"),
        Shell::Fish => Some("seating completions fish > ~/.config/fish/completions/seating.fish"),
        Shell::PowerShell => Some("seating completions powershell | Out-String | Invoke-Expression"),
        _ => None,
    }
}

impl CompletionsCommand {
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        if !global.quiet {
            if let Some(hint) = install_hint(self.shell) {
                eprintln!("# Install with:\n#   {hint}");
            }
        }

        let mut cmd = Cli::command();
        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_install_hints() {
        assert!(install_hint(Shell::Zsh).unwrap().ends_with("_seating"));
        assert!(install_hint(Shell::Bash).unwrap().starts_with("seating completions bash"));
        assert!(install_hint(Shell::Elvish).is_none());
    }
}
