//! Dispatching file link actions to the host.
//!
//! The [`Host`] trait is the seam to the operating system or UI runtime.
//! [`FileLinkOpener`] resolves links and calls into it. Open and reveal
//! failures propagate to the caller; clipboard failures are logged and
//! reported through [`CopyOutcome`] but never returned as errors.

use crate::error::Result;
use crate::menu::{FileLinkMenu, MenuAction};
use crate::path::{FileLinkResolver, ResolvedPath};
use crate::target::OpenTarget;

/// Capabilities provided by the host environment.
#[cfg_attr(test, mockall::automock)]
pub trait Host {
    /// Show `path` highlighted in the native file manager.
    ///
    /// # Errors
    ///
    /// Returns an error if the host could not reveal the item.
    fn reveal_item_in_dir(&self, path: &str) -> Result<()>;

    /// Open `path` in the application called `app_name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the application could not be launched.
    fn open_in_app(&self, path: &str, app_name: &str) -> Result<()>;

    /// Replace the clipboard contents with `text`.
    ///
    /// # Errors
    ///
    /// Returns an error if the clipboard is unavailable.
    fn write_clipboard(&self, text: &str) -> Result<()>;
}

/// Result of a "Copy Link" action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The text is on the clipboard.
    Copied(String),
    /// The clipboard write failed; the failure was logged.
    Failed {
        /// Text that was supposed to be copied.
        text: String,
        /// Why the write failed.
        reason: String,
    },
}

impl CopyOutcome {
    /// The link text regardless of whether the copy succeeded.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Copied(text) | Self::Failed { text, .. } => text,
        }
    }

    /// Whether the clipboard now holds the link.
    #[must_use]
    pub fn is_copied(&self) -> bool {
        matches!(self, Self::Copied(_))
    }
}

/// Opens, reveals and copies file links for one conversation.
///
/// # Examples
///
/// ```
/// use linkopen::dispatch::{FileLinkOpener, Host};
/// use linkopen::path::FileLinkResolver;
/// use linkopen::{OpenTarget, Platform, Result};
/// use std::cell::RefCell;
///
/// #[derive(Default)]
/// struct Recorder(RefCell<Vec<String>>);
///
/// impl Host for Recorder {
///     fn reveal_item_in_dir(&self, path: &str) -> Result<()> {
///         self.0.borrow_mut().push(format!("reveal {path}"));
///         Ok(())
///     }
///     fn open_in_app(&self, path: &str, app: &str) -> Result<()> {
///         self.0.borrow_mut().push(format!("{app} {path}"));
///         Ok(())
///     }
///     fn write_clipboard(&self, _text: &str) -> Result<()> {
///         Ok(())
///     }
/// }
///
/// let resolver = FileLinkResolver::new(Platform::Linux).with_workspace_root("/w");
/// let opener = FileLinkOpener::new(resolver, OpenTarget::Zed, Recorder::default());
/// opener.open_file_link("src/a.rs:3").unwrap();
/// assert_eq!(opener.host().0.borrow()[0], "Zed /w/src/a.rs");
/// ```
#[derive(Debug)]
pub struct FileLinkOpener<H> {
    resolver: FileLinkResolver,
    target: OpenTarget,
    host: H,
}

impl<H: Host> FileLinkOpener<H> {
    /// Create an opener dispatching to `host`.
    #[must_use]
    pub fn new(resolver: FileLinkResolver, target: OpenTarget, host: H) -> Self {
        Self {
            resolver,
            target,
            host,
        }
    }

    /// The resolver used for every action.
    #[must_use]
    pub fn resolver(&self) -> &FileLinkResolver {
        &self.resolver
    }

    /// The configured open target.
    #[must_use]
    pub fn target(&self) -> OpenTarget {
        self.target
    }

    /// The host actions are dispatched to.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Resolve a raw link.
    #[must_use]
    pub fn resolve(&self, raw: &str) -> ResolvedPath {
        self.resolver.resolve(raw)
    }

    /// Open a link with the configured target.
    ///
    /// The file manager target reveals the file instead.
    ///
    /// # Errors
    ///
    /// Propagates the host failure.
    pub fn open_file_link(&self, raw: &str) -> Result<()> {
        let resolved = self.resolve(raw);
        if self.target.is_reveal() {
            return self.reveal_resolved(&resolved);
        }
        if let Some(app_name) = self.target.app_name() {
            log::info!("opening {resolved} in {app_name}");
            self.host.open_in_app(resolved.as_str(), app_name)?;
        }
        Ok(())
    }

    /// Reveal a link in the file manager.
    ///
    /// # Errors
    ///
    /// Propagates the host failure.
    pub fn reveal(&self, raw: &str) -> Result<()> {
        self.reveal_resolved(&self.resolve(raw))
    }

    fn reveal_resolved(&self, resolved: &ResolvedPath) -> Result<()> {
        log::info!("revealing {resolved}");
        self.host.reveal_item_in_dir(resolved.as_str())
    }

    /// Copy the link text to the clipboard.
    ///
    /// Never fails: a clipboard error is logged as a warning and returned as
    /// [`CopyOutcome::Failed`].
    pub fn copy_link(&self, raw: &str) -> CopyOutcome {
        let text = self.resolve(raw).copy_link_text();
        match self.host.write_clipboard(&text) {
            Ok(()) => CopyOutcome::Copied(text),
            Err(err) => {
                log::warn!("could not copy {text} to the clipboard: {err}");
                CopyOutcome::Failed {
                    text,
                    reason: err.to_string(),
                }
            }
        }
    }

    /// Build the context menu for a link.
    #[must_use]
    pub fn menu(&self, raw: &str) -> FileLinkMenu {
        FileLinkMenu::build(self.target, self.resolver.platform(), self.resolve(raw))
    }

    /// Run a menu action for a link.
    ///
    /// # Errors
    ///
    /// Propagates open and reveal failures. Copy failures are swallowed.
    pub fn perform(&self, action: MenuAction, raw: &str) -> Result<()> {
        match action {
            MenuAction::Open => self.open_file_link(raw),
            MenuAction::Reveal => self.reveal(raw),
            MenuAction::CopyLink => {
                self.copy_link(raw);
                Ok(())
            }
        }
    }
}
