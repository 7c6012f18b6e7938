//! Configuration file discovery and loading.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the per-user configuration file inside the data directory.
pub const USER_CONFIG_FILE: &str = "config.yaml";

/// Name of the shared project configuration file.
pub const PROJECT_CONFIG_FILE: &str = "linkopen.yaml";

/// Name of the private, usually git-ignored, project configuration file.
pub const LOCAL_CONFIG_FILE: &str = "linkopen.local.yaml";

/// Configuration source with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: Config,
}

/// Default data directory: `~/.linkopen`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_data_dir() -> Result<PathBuf> {
    let home = home::home_dir().ok_or_else(|| Error::InvalidPath {
        path: PathBuf::from("~"),
        reason: "Cannot determine home directory".to_string(),
    })?;
    Ok(home.join(".linkopen"))
}

/// Loads configuration from various sources.
///
/// # Examples
///
/// ```no_run
/// use linkopen::config::ConfigLoader;
/// use std::path::Path;
///
/// let sources = ConfigLoader::load_all(Path::new("."), None).unwrap();
/// println!("Found {} configuration sources", sources.len());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Discover and load all configuration files.
    ///
    /// Searches for:
    /// 1. User config at `~/.linkopen/config.yaml` (precedence 1)
    /// 2. `linkopen.yaml` walking up from `working_dir` (precedence 2)
    /// 3. `linkopen.local.yaml` next to it (precedence 3)
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration file exists but cannot be read
    /// or parsed.
    pub fn load_all(working_dir: &Path, data_dir: Option<&Path>) -> Result<Vec<ConfigSource>> {
        let mut sources = Vec::new();

        if let Some(user_config) = Self::load_user_config(data_dir)? {
            sources.push(user_config);
        }

        sources.extend(Self::discover_project_configs(working_dir)?);
        sources.sort_by_key(|s| s.precedence);

        Ok(sources)
    }

    fn load_user_config(data_dir: Option<&Path>) -> Result<Option<ConfigSource>> {
        let config_path = match data_dir {
            Some(dir) => dir.join(USER_CONFIG_FILE),
            None => default_data_dir()?.join(USER_CONFIG_FILE),
        };

        if !config_path.exists() {
            return Ok(None);
        }

        let config = Self::load_file(&config_path)?;
        Ok(Some(ConfigSource {
            path: config_path,
            precedence: 1,
            config,
        }))
    }

    /// Discover project configurations by walking up directories.
    ///
    /// Stops at the first directory containing either project file.
    ///
    /// # Errors
    ///
    /// Returns an error if any discovered file cannot be read or parsed.
    pub fn discover_project_configs(start_dir: &Path) -> Result<Vec<ConfigSource>> {
        let mut configs = Vec::new();
        let mut current = start_dir.to_path_buf();

        loop {
            for (name, precedence) in [(PROJECT_CONFIG_FILE, 2), (LOCAL_CONFIG_FILE, 3)] {
                let path = current.join(name);
                if path.exists() {
                    let config = Self::load_file(&path)?;
                    log::debug!("loaded configuration from {}", path.display());
                    configs.push(ConfigSource {
                        path,
                        precedence,
                        config,
                    });
                }
            }

            if !configs.is_empty() || !current.pop() {
                break;
            }
        }

        Ok(configs)
    }

    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read configuration file: {e}"),
        })?;

        serde_yaml::from_str(&contents).map_err(|source| Error::Configuration {
            path: path.to_path_buf(),
            source,
        })
    }
}
