//! Path classification and separator normalization.
//!
//! These functions work on plain strings rather than `std::path::Path` so a
//! Windows path can be handled correctly on a Unix host and vice versa.

use crate::platform::Platform;

/// Characters that stop a `:line:col` suffix from being recognized.
const LINE_TERMINATORS: [char; 4] = ['\n', '\r', '\u{2028}', '\u{2029}'];

/// Check whether `path` is absolute for the given platform.
///
/// On Windows a path is absolute when it starts with a drive letter followed
/// by a separator (`C:\` or `C:/`) or with a UNC prefix (`\\`). Everywhere
/// else it must start with `/` or `~/`.
///
/// # Examples
///
/// ```
/// use linkopen::path::normalize::is_absolute;
/// use linkopen::Platform;
///
/// assert!(is_absolute("C:/foo", Platform::Windows));
/// assert!(is_absolute(r"\\server\share", Platform::Windows));
/// assert!(!is_absolute("foo/bar", Platform::Windows));
///
/// assert!(is_absolute("~/notes.md", Platform::Linux));
/// assert!(!is_absolute("notes.md", Platform::Macos));
/// ```
#[must_use]
pub fn is_absolute(path: &str, platform: Platform) -> bool {
    if platform.is_windows() {
        return has_drive_prefix(path) || path.starts_with(r"\\");
    }
    path.starts_with('/') || path.starts_with("~/")
}

fn has_drive_prefix(path: &str) -> bool {
    matches!(
        path.as_bytes(),
        [letter, b':', b'\\' | b'/', ..] if letter.is_ascii_alphabetic()
    )
}

/// Normalize separators for the given platform.
///
/// Windows paths get every `/` replaced by `\`; other platforms are left
/// untouched.
///
/// # Examples
///
/// ```
/// use linkopen::path::normalize::normalize;
/// use linkopen::Platform;
///
/// assert_eq!(normalize("C:/work/app.rs", Platform::Windows), r"C:\work\app.rs");
/// assert_eq!(normalize("/work/app.rs", Platform::Linux), "/work/app.rs");
/// ```
#[must_use]
pub fn normalize(path: &str, platform: Platform) -> String {
    if platform.is_windows() {
        path.replace('/', "\\")
    } else {
        path.to_string()
    }
}

/// Remove a trailing `:line` or `:line:col` suffix.
///
/// Compiler and tool output usually points at `file:line:col`. The longest
/// suffix of at most two numeric groups is dropped, so `a:1:2:3` keeps
/// `a:1`. Input spanning several lines is returned unchanged.
///
/// # Examples
///
/// ```
/// use linkopen::path::normalize::strip_line_suffix;
///
/// assert_eq!(strip_line_suffix("src/app.ts:42:7"), "src/app.ts");
/// assert_eq!(strip_line_suffix("src/app.ts:42"), "src/app.ts");
/// assert_eq!(strip_line_suffix("src/app.ts"), "src/app.ts");
/// ```
#[must_use]
pub fn strip_line_suffix(path: &str) -> &str {
    if path.contains(LINE_TERMINATORS) {
        return path;
    }
    match strip_numeric_group(path) {
        Some(rest) => strip_numeric_group(rest).unwrap_or(rest),
        None => path,
    }
}

/// Strip one trailing `:<digits>` group.
fn strip_numeric_group(s: &str) -> Option<&str> {
    let body = s.trim_end_matches(|c: char| c.is_ascii_digit());
    if body.len() == s.len() {
        return None;
    }
    body.strip_suffix(':')
}
