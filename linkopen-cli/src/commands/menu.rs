//! Command to show, and optionally run, the context menu for a file link.

use crate::error::CliError;
use crate::utils::{build_opener, load_configuration, GlobalOptions, OutputFormat};
use clap::Args;
use linkopen::MenuEntry;

/// Show the context menu for a file link.
#[derive(Args)]
pub struct MenuCommand {
    /// Link text, e.g. `src/app.ts:42:7`
    #[arg(value_name = "LINK")]
    pub link: String,

    /// Output format
    #[arg(long, value_enum, default_value = "human", ignore_case = true)]
    pub format: OutputFormat,

    /// Run the item with this label instead of printing the menu
    #[arg(long, value_name = "LABEL")]
    pub select: Option<String>,
}

impl MenuCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let opener = build_opener(&config);
        let menu = opener.menu(&self.link);

        if let Some(label) = self.select {
            let action = menu.action_for(&label).ok_or_else(|| {
                CliError::InvalidArguments(format!("no enabled menu item labelled '{label}'"))
            })?;
            opener.perform(action, &self.link)?;
            return Ok(());
        }

        match self.format {
            OutputFormat::Json => println!("{}", menu.to_json()?),
            OutputFormat::Human => {
                for entry in menu.entries() {
                    match entry {
                        MenuEntry::Item { label, enabled, .. } => {
                            if *enabled {
                                println!("{label}");
                            } else {
                                println!("{label} (disabled)");
                            }
                        }
                        MenuEntry::Separator => println!("---"),
                        MenuEntry::Services => println!("Services"),
                    }
                }
            }
        }
        Ok(())
    }
}
