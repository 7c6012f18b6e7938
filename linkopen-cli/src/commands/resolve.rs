//! Command to print the resolved path for a file link.

use crate::error::CliError;
use crate::utils::{load_configuration, resolve_raw, GlobalOptions};
use clap::Args;

/// Print the path a file link resolves to.
#[derive(Args)]
pub struct ResolveCommand {
    /// Link text, e.g. `src/app.ts:42:7`
    #[arg(value_name = "LINK")]
    pub link: String,

    /// Keep a trailing `:line:col` suffix
    #[arg(long)]
    pub keep_suffix: bool,
}

impl ResolveCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        println!("{}", resolve_raw(&config, &self.link, self.keep_suffix));
        Ok(())
    }
}
