//! Builder assembling the final configuration from every source.

use std::env;
use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::error::Result;

/// Builds a [`Config`] from files, environment and programmatic overrides.
///
/// # Examples
///
/// ```
/// use linkopen::config::{Config, ConfigBuilder};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config {
///         open_app: Some("ghostty".to_string()),
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
///
/// assert_eq!(config.open_app.as_deref(), Some("ghostty"));
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    data_dir: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Vec<Config>,
}

impl ConfigBuilder {
    /// Create a builder that reads files from the current directory upward.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start project config discovery from `dir` instead of the current directory.
    #[must_use]
    pub fn with_working_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    /// Read the user config from `dir` instead of `~/.linkopen`.
    #[must_use]
    pub fn with_data_dir(mut self, dir: &Path) -> Self {
        self.data_dir = Some(dir.to_path_buf());
        self
    }

    /// Do not read any configuration files.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignore `LINKOPEN_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Layer a programmatic configuration on top of everything else.
    ///
    /// Later calls take priority over earlier ones.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides.push(config);
        self
    }

    /// Merge all sources into the final configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file cannot be read or parsed, or
    /// an environment variable holds an invalid value.
    pub fn build(self) -> Result<Config> {
        let mut config = if self.skip_files {
            Config::default()
        } else {
            let working_dir = match self.working_dir {
                Some(dir) => dir,
                None => env::current_dir()?,
            };
            ConfigMerger::merge(ConfigLoader::load_all(
                &working_dir,
                self.data_dir.as_deref(),
            )?)
        };

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        for overrides in &self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        Ok(config)
    }
}
