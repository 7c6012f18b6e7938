//! Joining a relative path onto a base directory.

use std::borrow::Cow;

use crate::platform::Platform;

/// Join `relative` onto `base` using the platform separator.
///
/// Trailing separators are trimmed from `base`. On Windows both `\` and `/`
/// count as separators and forward slashes in `relative` become `\`. On other
/// platforms leading `/` are trimmed from `relative`. When either side ends
/// up empty the other side is returned on its own.
///
/// # Examples
///
/// ```
/// use linkopen::path::join::join_path;
/// use linkopen::Platform;
///
/// assert_eq!(
///     join_path("/home/user", "proj/file.txt", Platform::Linux),
///     "/home/user/proj/file.txt"
/// );
/// assert_eq!(
///     join_path(r"C:\Users\me", "proj/file.txt", Platform::Windows),
///     r"C:\Users\me\proj\file.txt"
/// );
/// assert_eq!(join_path("", "rel.txt", Platform::Linux), "rel.txt");
/// assert_eq!(join_path("/base", "", Platform::Linux), "/base");
/// ```
#[must_use]
pub fn join_path(base: &str, relative: &str, platform: Platform) -> String {
    let (base, relative) = if platform.is_windows() {
        (
            base.trim_end_matches(['\\', '/']),
            Cow::Owned(relative.replace('/', "\\")),
        )
    } else {
        (
            base.trim_end_matches('/'),
            Cow::Borrowed(relative.trim_start_matches('/')),
        )
    };

    if base.is_empty() {
        return relative.into_owned();
    }
    if relative.is_empty() {
        return base.to_string();
    }
    format!("{base}{}{relative}", platform.separator())
}
