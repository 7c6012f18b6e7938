//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

use crate::platform::Platform;
use crate::target::OpenTarget;

/// Complete configuration structure.
///
/// Every field is optional so files and environment variables can be layered.
///
/// # Examples
///
/// ```
/// use linkopen::config::Config;
/// use linkopen::OpenTarget;
///
/// let config: Config = serde_yaml::from_str("open_app: zed\n").unwrap();
/// assert_eq!(config.open_target(), OpenTarget::Zed);
/// assert!(config.strips_line_suffix());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Preferred "open with" target identifier (e.g. `vscode`, `finder`).
    ///
    /// Kept as a string so an unrecognized value in an old config file falls
    /// back to the default instead of failing to load.
    pub open_app: Option<String>,

    /// Workspace root relative links are resolved against.
    pub workspace_root: Option<String>,

    /// Platform override. Detected from the host when unset.
    pub platform: Option<Platform>,

    /// Whether `:line:col` suffixes are dropped before resolving.
    pub strip_line_suffix: Option<bool>,
}

impl Config {
    /// The configured open target, defaulting to Visual Studio Code.
    #[must_use]
    pub fn open_target(&self) -> OpenTarget {
        OpenTarget::from_stored(self.open_app.as_deref())
    }

    /// The configured platform, or the detected host platform.
    #[must_use]
    pub fn platform_or_detect(&self) -> Platform {
        self.platform.unwrap_or_else(Platform::current)
    }

    /// Whether `:line:col` suffixes are stripped (default true).
    #[must_use]
    pub fn strips_line_suffix(&self) -> bool {
        self.strip_line_suffix.unwrap_or(true)
    }
}
