//! Command to list the supported open targets.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions, OutputFormat};
use clap::Args;
use linkopen::OpenTarget;

/// List the applications links can be opened with.
#[derive(Args)]
pub struct TargetsCommand {
    /// Output format
    #[arg(long, value_enum, default_value = "human", ignore_case = true)]
    pub format: OutputFormat,
}

impl TargetsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let current = config.open_target();

        match self.format {
            OutputFormat::Json => {
                let targets: Vec<_> = OpenTarget::ALL
                    .iter()
                    .map(|target| {
                        serde_json::json!({
                            "id": target,
                            "app_name": target.app_name(),
                            "selected": *target == current,
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&targets)?);
            }
            OutputFormat::Human => {
                let platform = config.platform_or_detect();
                for target in OpenTarget::ALL {
                    let marker = if target == current { "*" } else { " " };
                    let name = target.app_name().unwrap_or(platform.reveal_label());
                    println!("{marker} {:<12}\t{name}", target.id());
                }
            }
        }
        Ok(())
    }
}
