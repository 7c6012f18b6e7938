//! The resolved path value handed to host actions.

use std::fmt;

use serde::Serialize;

/// A platform-normalized path produced by the resolver.
///
/// The path is absolute whenever the raw input was absolute or a workspace
/// root was available. It carries no other metadata.
///
/// # Examples
///
/// ```
/// use linkopen::path::resolve_file_path;
/// use linkopen::Platform;
///
/// let resolved = resolve_file_path("src/main.rs", Some("/work"), Platform::Linux);
/// assert_eq!(resolved.as_str(), "/work/src/main.rs");
/// assert_eq!(resolved.copy_link_text(), "file:///work/src/main.rs");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ResolvedPath(String);

impl ResolvedPath {
    pub(crate) fn new(path: String) -> Self {
        Self(path)
    }

    /// Borrow the path string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the value and return the path string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Text placed on the clipboard by "Copy Link".
    ///
    /// POSIX-style absolute paths become `file://` URLs, anything else is
    /// copied verbatim.
    #[must_use]
    pub fn copy_link_text(&self) -> String {
        if self.0.starts_with('/') {
            format!("file://{}", self.0)
        } else {
            self.0.clone()
        }
    }
}

impl fmt::Display for ResolvedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ResolvedPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
