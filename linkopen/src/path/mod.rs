//! Cross-platform resolution of file links.
//!
//! Links found in chat messages are untrusted strings. They may point at a
//! line (`src/app.ts:42:7`), use either separator style, and be relative to
//! the workspace that is open in the conversation.
//!
//! # Key Concepts
//!
//! ## Platform is explicit
//!
//! Every function takes the target [`Platform`](crate::Platform) as an
//! argument. Nothing here reads the environment; callers detect the platform
//! once at the boundary with [`Platform::current`](crate::Platform::current).
//!
//! ## Totality
//!
//! None of these functions can fail and none touch the filesystem. Malformed
//! input produces a best-effort string.
//!
//! # Examples
//!
//! ```
//! use linkopen::path::{strip_line_suffix, resolve_file_path};
//! use linkopen::Platform;
//!
//! let raw = "crates/core/src/lib.rs:10:3";
//! let resolved = resolve_file_path(strip_line_suffix(raw), Some("/repo"), Platform::Linux);
//! assert_eq!(resolved.as_str(), "/repo/crates/core/src/lib.rs");
//! ```

pub mod join;
pub mod normalize;
pub mod resolver;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use join::join_path;
pub use normalize::{is_absolute, normalize, strip_line_suffix};
pub use resolver::{resolve_file_path, FileLinkResolver};
pub use types::ResolvedPath;
