//! Command to open a file link with the configured application.

use crate::error::CliError;
use crate::utils::{build_opener, load_configuration, GlobalOptions};
use clap::Args;

/// Open a file link with the configured application.
///
/// When the configured target is `finder` the file is revealed in the file
/// manager instead.
#[derive(Args)]
pub struct OpenCommand {
    /// Link text, e.g. `src/app.ts:42:7`
    #[arg(value_name = "LINK")]
    pub link: String,
}

impl OpenCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let opener = build_opener(&config);
        opener.open_file_link(&self.link)?;
        Ok(())
    }
}
