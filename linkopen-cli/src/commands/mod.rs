//! CLI command implementations.
//!
//! - `resolve`: Print the resolved path for a link
//! - `open`: Open a link with the configured application
//! - `reveal`: Reveal a link in the file manager
//! - `copy_link`: Copy a link to the clipboard
//! - `menu`: Show or run the context menu for a link
//! - `platform`: Show the detected platform
//! - `targets`: List supported open targets
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod copy_link;
pub mod menu;
pub mod open;
pub mod platform;
pub mod resolve;
pub mod reveal;
pub mod targets;

pub use completions::CompletionsCommand;
pub use copy_link::CopyLinkCommand;
pub use menu::MenuCommand;
pub use open::OpenCommand;
pub use platform::PlatformCommand;
pub use resolve::ResolveCommand;
pub use reveal::RevealCommand;
pub use targets::TargetsCommand;
