//! Environment variable handling for configuration overrides.
//!
//! `LINKOPEN_*` variables override values loaded from configuration files.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::platform::PLATFORM_ENV;
use std::env;

/// Overrides the preferred open target.
pub const OPEN_APP_ENV: &str = "LINKOPEN_OPEN_APP";

/// Overrides the workspace root.
pub const WORKSPACE_ENV: &str = "LINKOPEN_WORKSPACE";

/// Overrides whether `:line:col` suffixes are stripped.
pub const STRIP_LINE_SUFFIX_ENV: &str = "LINKOPEN_STRIP_LINE_SUFFIX";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use linkopen::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if `LINKOPEN_PLATFORM` names an unknown platform or
    /// `LINKOPEN_STRIP_LINE_SUFFIX` is not a boolean.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(open_app) = env::var(OPEN_APP_ENV) {
            config.open_app = Some(open_app);
        }

        if let Ok(root) = env::var(WORKSPACE_ENV) {
            config.workspace_root = Some(root);
        }

        if let Ok(name) = env::var(PLATFORM_ENV) {
            let platform = name.parse().map_err(|_| Error::Validation {
                field: PLATFORM_ENV.into(),
                message: format!("Unknown platform '{name}' (expected windows/macos/linux/unknown)"),
            })?;
            config.platform = Some(platform);
        }

        if let Ok(val) = env::var(STRIP_LINE_SUFFIX_ENV) {
            config.strip_line_suffix = Some(Self::parse_bool(STRIP_LINE_SUFFIX_ENV, &val)?);
        }

        Ok(())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
