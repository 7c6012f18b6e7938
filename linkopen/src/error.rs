//! Error types for the linkopen library.
//!
//! Path resolution itself never fails; these errors come from the
//! configuration layer and from host actions (opening an application,
//! revealing a file, writing the clipboard).

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a linkopen error.
///
/// # Examples
///
/// ```
/// use linkopen::{Error, Result};
///
/// fn example_operation() -> Result<&'static str> {
///     Ok("/workspace/src/main.rs")
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the linkopen library.
#[derive(Debug, Error)]
pub enum Error {
    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A configuration file is not valid YAML for the schema.
    #[error("configuration error in {}: {source}", path.display())]
    Configuration {
        /// The file that failed to parse.
        path: PathBuf,
        /// The underlying parse error.
        #[source]
        source: serde_yaml::Error,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// An open target identifier was not recognized.
    #[error("unknown open target '{id}'")]
    UnknownOpenTarget {
        /// The identifier that failed to parse.
        id: String,
    },

    /// An unknown platform name was provided.
    #[error("unknown platform '{name}'")]
    UnknownPlatform {
        /// The name that failed to parse.
        name: String,
    },

    /// A host action (open, reveal, clipboard) failed.
    #[error("{action} failed for {path}: {reason}")]
    HostAction {
        /// The action that was attempted.
        action: &'static str,
        /// The resolved path the action targeted.
        path: String,
        /// Why the host call failed.
        reason: String,
    },
}

impl Error {
    /// Check if the error came from a host action.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkopen::Error;
    ///
    /// let err = Error::HostAction {
    ///     action: "reveal",
    ///     path: "/tmp/a.txt".to_string(),
    ///     reason: "exit status 1".to_string(),
    /// };
    /// assert!(err.is_host_action());
    /// ```
    #[must_use]
    pub fn is_host_action(&self) -> bool {
        matches!(self, Self::HostAction { .. })
    }
}
