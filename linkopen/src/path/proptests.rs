//! Property-based tests for path resolution.
//!
//! The normalize module carries its own small property suite. This module
//! exercises join and resolve with larger case counts.

use super::join::join_path;
use super::normalize::{is_absolute, normalize};
use super::resolver::resolve_file_path;
use crate::platform::Platform;
use proptest::prelude::*;

fn component_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_.-]{1,12}"
}

fn relative_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(component_strategy(), 1..6).prop_map(|parts| parts.join("/"))
}

fn posix_root_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(component_strategy(), 1..5)
        .prop_map(|parts| format!("/{}", parts.join("/")))
}

fn windows_root_strategy() -> impl Strategy<Value = String> {
    (
        prop::sample::select(vec!['C', 'D', 'z']),
        prop::collection::vec(component_strategy(), 1..5),
    )
        .prop_map(|(drive, parts)| format!("{drive}:\\{}", parts.join("\\")))
}

fn platform_strategy() -> impl Strategy<Value = Platform> {
    prop::sample::select(Platform::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Joining a relative path onto a POSIX root yields an absolute path
    #[test]
    fn posix_join_is_absolute(root in posix_root_strategy(), rel in relative_strategy()) {
        let joined = join_path(&root, &rel, Platform::Linux);
        prop_assert!(is_absolute(&joined, Platform::Linux));
        prop_assert_eq!(joined, format!("{root}/{rel}"));
    }

    // Joining onto a drive root yields an absolute backslash-only path
    #[test]
    fn windows_join_is_absolute(root in windows_root_strategy(), rel in relative_strategy()) {
        let joined = join_path(&root, &rel, Platform::Windows);
        prop_assert!(is_absolute(&joined, Platform::Windows));
        prop_assert!(!joined.contains('/'));
    }

    // Resolution is deterministic and idempotent for any input
    #[test]
    fn resolve_idempotent(
        raw in ".{0,30}",
        root in proptest::option::of(posix_root_strategy()),
        platform in platform_strategy(),
    ) {
        let once = resolve_file_path(&raw, root.as_deref(), platform);
        let again = resolve_file_path(&raw, root.as_deref(), platform);
        prop_assert_eq!(&once, &again);
        if is_absolute(once.as_str(), platform) {
            let twice = resolve_file_path(once.as_str(), root.as_deref(), platform);
            prop_assert_eq!(once, twice);
        }
    }

    // Resolved output is always already normalized
    #[test]
    fn resolve_output_is_normalized(
        raw in ".{0,30}",
        root in proptest::option::of(windows_root_strategy()),
        platform in platform_strategy(),
    ) {
        let resolved = resolve_file_path(&raw, root.as_deref(), platform);
        prop_assert_eq!(normalize(resolved.as_str(), platform), resolved.as_str());
    }

    // Absolute inputs ignore the workspace root
    #[test]
    fn absolute_input_ignores_root(
        path in posix_root_strategy(),
        root in posix_root_strategy(),
    ) {
        let resolved = resolve_file_path(&path, Some(&root), Platform::Linux);
        prop_assert_eq!(resolved.as_str(), path.as_str());
    }
}
