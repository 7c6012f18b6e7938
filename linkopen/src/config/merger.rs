//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use linkopen::config::{Config, ConfigMerger};
///
/// let low = Config { open_app: Some("zed".to_string()), ..Default::default() };
/// let high = Config { open_app: Some("cursor".to_string()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.open_app, Some("cursor".to_string()));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge sources ordered from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge source config into target. Fields set in `source` win.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.open_app.is_some() {
            target.open_app.clone_from(&source.open_app);
        }

        if source.workspace_root.is_some() {
            target.workspace_root.clone_from(&source.workspace_root);
        }

        if source.platform.is_some() {
            target.platform = source.platform;
        }

        if source.strip_line_suffix.is_some() {
            target.strip_line_suffix = source.strip_line_suffix;
        }
    }
}
