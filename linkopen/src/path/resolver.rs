//! Resolving raw link text against a workspace root.

use crate::path::join::join_path;
use crate::path::normalize::{is_absolute, normalize, strip_line_suffix};
use crate::path::types::ResolvedPath;
use crate::platform::Platform;

/// Resolve a path against an optional workspace root.
///
/// Surrounding whitespace is trimmed first. Absolute paths, and any path when
/// no root is available, are only normalized. Relative paths are joined onto
/// the root. Every branch ends with the same [`normalize`] call so the result
/// is always platform-normalized.
///
/// An empty root counts as no root.
///
/// # Examples
///
/// ```
/// use linkopen::path::resolve_file_path;
/// use linkopen::Platform;
///
/// let abs = resolve_file_path("  /abs/path.txt  ", Some("/workspace"), Platform::Linux);
/// assert_eq!(abs.as_str(), "/abs/path.txt");
///
/// let rel = resolve_file_path("rel/path.txt", Some("/workspace"), Platform::Linux);
/// assert_eq!(rel.as_str(), "/workspace/rel/path.txt");
/// ```
#[must_use]
pub fn resolve_file_path(
    path: &str,
    workspace_root: Option<&str>,
    platform: Platform,
) -> ResolvedPath {
    let trimmed = trim_link(path);
    let joined = match workspace_root.filter(|root| !root.is_empty()) {
        Some(root) if !is_absolute(trimmed, platform) => join_path(root, trimmed, platform),
        _ => trimmed.to_string(),
    };
    ResolvedPath::new(normalize(&joined, platform))
}

/// Strip surrounding whitespace, including a stray byte order mark.
fn trim_link(path: &str) -> &str {
    path.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Resolves file links for one workspace on one platform.
///
/// This bundles the inputs that stay fixed for a conversation so callers only
/// pass the raw link text.
///
/// # Examples
///
/// ```
/// use linkopen::path::FileLinkResolver;
/// use linkopen::Platform;
///
/// let resolver = FileLinkResolver::new(Platform::Windows)
///     .with_workspace_root(r"C:\proj");
///
/// let resolved = resolver.resolve("src/lib.rs:12:5");
/// assert_eq!(resolved.as_str(), r"C:\proj\src\lib.rs");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileLinkResolver {
    workspace_root: Option<String>,
    platform: Platform,
}

impl FileLinkResolver {
    /// Create a resolver with no workspace root.
    #[must_use]
    pub fn new(platform: Platform) -> Self {
        Self {
            workspace_root: None,
            platform,
        }
    }

    /// Set the workspace root relative links are resolved against.
    #[must_use]
    pub fn with_workspace_root(mut self, root: impl Into<String>) -> Self {
        self.workspace_root = Some(root.into());
        self
    }

    /// Set or clear the workspace root.
    #[must_use]
    pub fn with_optional_workspace_root(mut self, root: Option<String>) -> Self {
        self.workspace_root = root;
        self
    }

    /// Override the platform.
    #[must_use]
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// The platform paths are resolved for.
    #[must_use]
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// The configured workspace root, if any.
    #[must_use]
    pub fn workspace_root(&self) -> Option<&str> {
        self.workspace_root.as_deref()
    }

    /// Strip any `:line:col` suffix from `raw` and resolve the rest.
    #[must_use]
    pub fn resolve(&self, raw: &str) -> ResolvedPath {
        let resolved = resolve_file_path(
            strip_line_suffix(raw),
            self.workspace_root.as_deref(),
            self.platform,
        );
        log::debug!("resolved file link {raw:?} to {resolved}");
        resolved
    }

    /// Resolve `raw` without touching a `:line:col` suffix.
    #[must_use]
    pub fn resolve_verbatim(&self, raw: &str) -> ResolvedPath {
        resolve_file_path(raw, self.workspace_root.as_deref(), self.platform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_wins_over_root() {
        let resolved = resolve_file_path("  /abs/path.txt  ", Some("/workspace"), Platform::Linux);
        assert_eq!(resolved.as_str(), "/abs/path.txt");
    }

    #[test]
    fn test_leading_byte_order_mark_is_trimmed() {
        let resolved = resolve_file_path("\u{feff}/a.rs", Some("/w"), Platform::Linux);
        assert_eq!(resolved.as_str(), "/a.rs");

        let resolved = resolve_file_path("src/b.rs\u{feff}\n", Some("/w"), Platform::Linux);
        assert_eq!(resolved.as_str(), "/w/src/b.rs");
    }

    #[test]
    fn test_relative_joined_onto_root() {
        let resolved = resolve_file_path("rel/path.txt", Some("/workspace"), Platform::Linux);
        assert_eq!(resolved.as_str(), "/workspace/rel/path.txt");
    }

    #[test]
    fn test_tilde_is_absolute() {
        let resolved = resolve_file_path("~/notes.md", Some("/workspace"), Platform::Macos);
        assert_eq!(resolved.as_str(), "~/notes.md");
    }

    #[test]
    fn test_no_root_only_normalizes() {
        let resolved = resolve_file_path(" src/a.rs ", None, Platform::Windows);
        assert_eq!(resolved.as_str(), r"src\a.rs");

        let resolved = resolve_file_path("src/a.rs", Some(""), Platform::Linux);
        assert_eq!(resolved.as_str(), "src/a.rs");
    }

    #[test]
    fn test_windows_absolute_normalized() {
        let resolved = resolve_file_path("D:/data/x.csv", Some(r"C:\proj"), Platform::Windows);
        assert_eq!(resolved.as_str(), r"D:\data\x.csv");
    }

    #[test]
    fn test_windows_root_with_forward_slashes_normalized() {
        let resolved = resolve_file_path("src/a.rs", Some("C:/proj/"), Platform::Windows);
        assert_eq!(resolved.as_str(), r"C:\proj\src\a.rs");
    }

    #[test]
    fn test_resolver_strips_suffix() {
        let resolver = FileLinkResolver::new(Platform::Linux).with_workspace_root("/w");
        assert_eq!(resolver.resolve("src/app.ts:42:7").as_str(), "/w/src/app.ts");
        assert_eq!(resolver.resolve_verbatim("src/app.ts:42").as_str(), "/w/src/app.ts:42");
    }

    #[test]
    fn test_resolver_builders() {
        let resolver = FileLinkResolver::new(Platform::Linux)
            .with_optional_workspace_root(Some("/w".to_string()))
            .with_platform(Platform::Macos);
        assert_eq!(resolver.platform(), Platform::Macos);
        assert_eq!(resolver.workspace_root(), Some("/w"));

        let resolver = resolver.with_optional_workspace_root(None);
        assert_eq!(resolver.workspace_root(), None);
        assert_eq!(resolver.resolve("a.txt").as_str(), "a.txt");
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let resolver = FileLinkResolver::new(Platform::Windows).with_workspace_root(r"C:\w");
        let once = resolver.resolve("src/a.rs:3");
        let twice = resolver.resolve(once.as_str());
        assert_eq!(once, twice);
    }
}
