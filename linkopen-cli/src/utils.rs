//! Utility functions for CLI operations.
//!
//! Configuration loading and construction of the resolver and opener shared
//! by the commands.

use crate::error::CliError;
use clap::ValueEnum;
use linkopen::{
    Config, ConfigBuilder, FileLinkOpener, FileLinkResolver, OpenTarget, Platform, SystemHost,
};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
#[allow(dead_code)] // verbose/quiet are consumed by the logger in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Workspace root relative links are resolved against.
    pub workspace: Option<String>,

    /// Platform override.
    pub platform: Option<String>,

    /// Open target override.
    pub target: Option<String>,
}

/// Output format for informational commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text for people
    #[default]
    Human,
    /// JSON for scripts
    Json,
}

/// Load layered configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Configuration files
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let platform = global
        .platform
        .as_deref()
        .map(str::parse::<Platform>)
        .transpose()
        .map_err(|e| CliError::InvalidArguments(e.to_string()))?;

    // An explicit --target must be valid; only stored preferences fall back
    if let Some(target) = global.target.as_deref() {
        target.parse::<OpenTarget>()?;
    }

    let mut builder = ConfigBuilder::new();
    if let Some(ref data_dir) = global.data_dir {
        builder = builder.with_data_dir(data_dir);
    }

    builder
        .with_config(Config {
            open_app: global.target.clone(),
            workspace_root: global.workspace.clone(),
            platform,
            strip_line_suffix: None,
        })
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Build the resolver described by `config`.
pub fn build_resolver(config: &Config) -> FileLinkResolver {
    FileLinkResolver::new(config.platform_or_detect())
        .with_optional_workspace_root(config.workspace_root.clone())
}

/// Build an opener backed by system commands.
pub fn build_opener(config: &Config) -> FileLinkOpener<SystemHost> {
    let resolver = build_resolver(config);
    let host = SystemHost::new(resolver.platform());
    FileLinkOpener::new(resolver, config.open_target(), host)
}

/// Resolve `raw` honouring the `strip_line_suffix` setting and `keep_suffix` flag.
pub fn resolve_raw(config: &Config, raw: &str, keep_suffix: bool) -> String {
    let resolver = build_resolver(config);
    let resolved = if keep_suffix || !config.strips_line_suffix() {
        resolver.resolve_verbatim(raw)
    } else {
        resolver.resolve(raw)
    };
    resolved.into_string()
}
