//! Command to reveal a file link in the file manager.

use crate::error::CliError;
use crate::utils::{build_opener, load_configuration, GlobalOptions};
use clap::Args;

/// Reveal a file link in the system file manager.
#[derive(Args)]
pub struct RevealCommand {
    /// Link text, e.g. `src/app.ts:42:7`
    #[arg(value_name = "LINK")]
    pub link: String,
}

impl RevealCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        build_opener(&config).reveal(&self.link)?;
        Ok(())
    }
}
