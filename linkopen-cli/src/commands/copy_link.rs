//! Command to copy a file link to the clipboard.

use crate::error::CliError;
use crate::utils::{build_opener, load_configuration, GlobalOptions};
use clap::Args;

/// Copy a file link to the clipboard and print it.
///
/// A clipboard failure is reported as a warning; the command still succeeds.
#[derive(Args)]
pub struct CopyLinkCommand {
    /// Link text, e.g. `src/app.ts:42:7`
    #[arg(value_name = "LINK")]
    pub link: String,

    /// Print the link without touching the clipboard
    #[arg(long)]
    pub print_only: bool,
}

impl CopyLinkCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let opener = build_opener(&config);

        if self.print_only {
            println!("{}", opener.resolve(&self.link).copy_link_text());
            return Ok(());
        }

        let outcome = opener.copy_link(&self.link);
        println!("{}", outcome.text());
        Ok(())
    }
}
