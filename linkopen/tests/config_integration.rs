//! Integration tests for the layered configuration system.
//!
//! Tests that modify environment variables are marked with `#[serial]` so they
//! run sequentially; environment variables are process-global.

use linkopen::config::{Config, ConfigBuilder};
use linkopen::{OpenTarget, Platform};
use serial_test::serial;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

const LINKOPEN_VARS: [&str; 4] = [
    "LINKOPEN_OPEN_APP",
    "LINKOPEN_WORKSPACE",
    "LINKOPEN_PLATFORM",
    "LINKOPEN_STRIP_LINE_SUFFIX",
];

/// Helper to create a config file.
fn create_config(dir: &Path, filename: &str, content: &str) -> PathBuf {
    let path = dir.join(filename);
    fs::write(&path, content).unwrap();
    path
}

/// RAII guard that clears every `LINKOPEN_*` variable and restores it on drop.
struct EnvGuard {
    saved: Vec<(&'static str, Option<String>)>,
}

impl EnvGuard {
    fn clean() -> Self {
        let saved = LINKOPEN_VARS
            .iter()
            .map(|key| {
                let old = env::var(key).ok();
                env::remove_var(key);
                (*key, old)
            })
            .collect();
        Self { saved }
    }

    fn set(&self, key: &str, value: &str) {
        env::set_var(key, value);
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, old) in &self.saved {
            match old {
                Some(value) => env::set_var(key, value),
                None => env::remove_var(key),
            }
        }
    }
}

/// A project directory and an isolated user data directory.
struct Fixture {
    _root: TempDir,
    project: PathBuf,
    data: PathBuf,
}

impl Fixture {
    fn new() -> Self {
        let root = TempDir::new().unwrap();
        let project = root.path().join("project");
        let data = root.path().join("data");
        fs::create_dir_all(&project).unwrap();
        fs::create_dir_all(&data).unwrap();
        Self {
            _root: root,
            project,
            data,
        }
    }

    fn builder(&self) -> ConfigBuilder {
        ConfigBuilder::new()
            .with_working_dir(&self.project)
            .with_data_dir(&self.data)
    }
}

// ============================================================================
// File Discovery and Precedence
// ============================================================================

#[test]
#[serial]
fn test_full_precedence_chain() {
    let env = EnvGuard::clean();
    let fx = Fixture::new();

    create_config(
        &fx.data,
        "config.yaml",
        "open_app: zed\nworkspace_root: /user\nplatform: linux\nstrip_line_suffix: false\n",
    );
    create_config(&fx.project, "linkopen.yaml", "open_app: cursor\nworkspace_root: /project\n");
    create_config(&fx.project, "linkopen.local.yaml", "workspace_root: /local\n");
    env.set("LINKOPEN_OPEN_APP", "ghostty");

    let config = fx
        .builder()
        .with_config(Config {
            platform: Some(Platform::Windows),
            ..Default::default()
        })
        .build()
        .unwrap();

    assert_eq!(config.open_target(), OpenTarget::Ghostty);
    assert_eq!(config.workspace_root.as_deref(), Some("/local"));
    assert_eq!(config.platform, Some(Platform::Windows));
    assert!(!config.strips_line_suffix());
}

#[test]
#[serial]
fn test_project_config_found_from_subdirectory() {
    let _env = EnvGuard::clean();
    let fx = Fixture::new();
    create_config(&fx.project, "linkopen.yaml", "open_app: finder\n");

    let nested = fx.project.join("src").join("deep");
    fs::create_dir_all(&nested).unwrap();

    let config = ConfigBuilder::new()
        .with_working_dir(&nested)
        .with_data_dir(&fx.data)
        .build()
        .unwrap();
    assert_eq!(config.open_target(), OpenTarget::Finder);
}

#[test]
#[serial]
fn test_missing_files_give_defaults() {
    let _env = EnvGuard::clean();
    let fx = Fixture::new();

    let config = fx.builder().build().unwrap();
    assert_eq!(config.open_target(), OpenTarget::Vscode);
    assert!(config.workspace_root.is_none());
    assert!(config.strips_line_suffix());
}

#[test]
#[serial]
fn test_unknown_stored_target_falls_back() {
    let _env = EnvGuard::clean();
    let fx = Fixture::new();
    create_config(&fx.data, "config.yaml", "open_app: emacs\n");

    let config = fx.builder().build().unwrap();
    assert_eq!(config.open_app.as_deref(), Some("emacs"));
    assert_eq!(config.open_target(), OpenTarget::Vscode);
}

// ============================================================================
// Error Handling
// ============================================================================

#[test]
#[serial]
fn test_malformed_yaml_is_error() {
    let _env = EnvGuard::clean();
    let fx = Fixture::new();
    create_config(&fx.project, "linkopen.yaml", "open_app: [unterminated\n");

    assert!(fx.builder().build().is_err());
}

#[test]
#[serial]
fn test_invalid_platform_env_is_error() {
    let env = EnvGuard::clean();
    let fx = Fixture::new();
    env.set("LINKOPEN_PLATFORM", "plan9");

    let err = fx.builder().build().unwrap_err();
    assert!(err.to_string().contains("plan9"));
}

#[test]
#[serial]
fn test_invalid_bool_env_is_error() {
    let env = EnvGuard::clean();
    let fx = Fixture::new();
    env.set("LINKOPEN_STRIP_LINE_SUFFIX", "sometimes");

    assert!(fx.builder().build().is_err());
}

#[test]
#[serial]
fn test_skip_env_ignores_variables() {
    let env = EnvGuard::clean();
    let fx = Fixture::new();
    env.set("LINKOPEN_WORKSPACE", "/from/env");

    let config = fx.builder().skip_env().build().unwrap();
    assert!(config.workspace_root.is_none());
}
