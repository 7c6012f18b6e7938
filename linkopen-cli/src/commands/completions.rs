//! Shell completion generation command.
//!
//! Completion scripts go to stdout; a one-line install hint goes to stderr so
//! the script can be piped straight into a file.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed binary
const BIN_NAME: &str = "linkopen";

/// Generate shell completion scripts
#[derive(Parser)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// How to enable the generated script, if the shell has a common convention.
fn install_hint(shell: Shell) -> Option<&'static str> {
    match shell {
        Shell::Bash => Some("eval \"$(linkopen completions bash)\""),
        Shell::Zsh => Some("linkopen completions zsh > ~/.zsh/completions/_linkopen"),
        Shell::Fish => Some("linkopen completions fish | source"),
        Shell::PowerShell => {
            Some("linkopen completions powershell | Out-String | Invoke-Expression")
        }
        _ => None,
    }
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(&self, _global: &GlobalOptions) -> Result<(), CliError> {
        if let Some(hint) = install_hint(self.shell) {
            eprintln!("# Enable with:\n#   {hint}\n");
        }

        let mut cmd = Cli::command();
        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());
        Ok(())
    }
}
