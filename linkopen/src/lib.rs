#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # linkopen
//!
//! A library for resolving file links found in chat messages and opening
//! them in an editor, a terminal or the system file manager.
//!
//! ## Core Types
//!
//! - [`Platform`]: operating system family, passed explicitly to every path function
//! - [`ResolvedPath`] and [`FileLinkResolver`]: cross-platform link resolution
//! - [`OpenTarget`]: the configured "open with" application
//! - [`FileLinkOpener`] and [`Host`]: action dispatch to the host
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use linkopen::{FileLinkResolver, Platform};
//!
//! let resolver = FileLinkResolver::new(Platform::Linux).with_workspace_root("/repo");
//! assert_eq!(resolver.resolve("src/main.rs:42:7").as_str(), "/repo/src/main.rs");
//!
//! let windows = FileLinkResolver::new(Platform::Windows).with_workspace_root(r"C:\repo");
//! assert_eq!(windows.resolve("src/main.rs").as_str(), r"C:\repo\src\main.rs");
//! ```

pub mod config;
pub mod dispatch;
pub mod error;
pub mod host;
pub mod logging;
pub mod menu;
pub mod path;
pub mod platform;
pub mod target;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use dispatch::{CopyOutcome, FileLinkOpener, Host};
pub use error::{Error, Result};
pub use host::SystemHost;
pub use logging::{init_logger, LogLevel, Logger};
pub use menu::{FileLinkMenu, MenuAction, MenuEntry};
pub use path::{FileLinkResolver, ResolvedPath};
pub use platform::Platform;
pub use target::OpenTarget;
