//! Configuration system for linkopen.
//!
//! This module provides layered configuration with support for:
//! - YAML configuration files (user config and project files)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`LINKOPEN_*`)
//! 3. Private project config (`linkopen.local.yaml`)
//! 4. Project config (`linkopen.yaml`)
//! 5. User config (`~/.linkopen/config.yaml`)
//! 6. Built-in defaults
//!
//! # Examples
//!
//! Loading from a specific directory:
//!
//! ```no_run
//! use linkopen::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/path/to/project"))
//!     .build()
//!     .unwrap();
//!
//! println!("Opening links with {}", config.open_target());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{default_data_dir, ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::Config;
