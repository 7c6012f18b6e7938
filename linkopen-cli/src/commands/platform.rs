//! Command to show the detected platform.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions, OutputFormat};
use clap::Args;

/// Show the platform links are resolved for.
#[derive(Args)]
pub struct PlatformCommand {
    /// Output format
    #[arg(long, value_enum, default_value = "human", ignore_case = true)]
    pub format: OutputFormat,
}

impl PlatformCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let platform = config.platform_or_detect();

        match self.format {
            OutputFormat::Json => {
                let value = serde_json::json!({
                    "platform": platform,
                    "class_name": platform.class_name(),
                    "reveal_label": platform.reveal_label(),
                    "separator": platform.separator().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
            }
            OutputFormat::Human => {
                println!("{platform}");
                log::info!("reveal label: {}", platform.reveal_label());
            }
        }
        Ok(())
    }
}
