//! Context menu model for a file link.
//!
//! The menu is plain data. Rendering it and positioning the popup belong to
//! the host UI; selecting an item maps back to a [`MenuAction`] which the
//! [`FileLinkOpener`](crate::dispatch::FileLinkOpener) performs.

use serde::Serialize;

use crate::path::ResolvedPath;
use crate::platform::Platform;
use crate::target::OpenTarget;

/// Label of the placeholder download entry.
pub const DOWNLOAD_LABEL: &str = "Download Linked File";

/// Label of the copy entry.
pub const COPY_LINK_LABEL: &str = "Copy Link";

/// What happens when a menu item is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MenuAction {
    /// Open with the configured target.
    Open,
    /// Reveal in the file manager.
    Reveal,
    /// Copy the link text to the clipboard.
    CopyLink,
}

/// A single menu entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum MenuEntry {
    /// A selectable (or greyed out) item.
    Item {
        /// Text shown to the user.
        label: String,
        /// Whether the item can be selected.
        enabled: bool,
        /// Action run on selection, if any.
        #[serde(skip_serializing_if = "Option::is_none")]
        action: Option<MenuAction>,
    },
    /// A horizontal separator.
    Separator,
    /// The host's predefined "Services" submenu.
    Services,
}

impl MenuEntry {
    fn item(label: impl Into<String>, action: MenuAction) -> Self {
        Self::Item {
            label: label.into(),
            enabled: true,
            action: Some(action),
        }
    }

    /// The label of an item entry.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Item { label, .. } => Some(label),
            Self::Separator | Self::Services => None,
        }
    }

    /// The action of an enabled item entry.
    #[must_use]
    pub fn action(&self) -> Option<MenuAction> {
        match self {
            Self::Item {
                enabled: true,
                action,
                ..
            } => *action,
            _ => None,
        }
    }
}

/// The right-click menu shown for a file link.
///
/// # Examples
///
/// ```
/// use linkopen::menu::{FileLinkMenu, MenuAction};
/// use linkopen::path::resolve_file_path;
/// use linkopen::{OpenTarget, Platform};
///
/// let resolved = resolve_file_path("/w/a.rs", None, Platform::Macos);
/// let menu = FileLinkMenu::build(OpenTarget::Zed, Platform::Macos, resolved);
///
/// let labels: Vec<_> = menu.entries().iter().filter_map(|e| e.label()).collect();
/// assert_eq!(
///     labels,
///     ["Open in Zed", "Reveal in Finder", "Download Linked File", "Copy Link"]
/// );
/// assert_eq!(menu.action_for("Copy Link"), Some(MenuAction::CopyLink));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileLinkMenu {
    target: OpenTarget,
    resolved: ResolvedPath,
    entries: Vec<MenuEntry>,
}

impl FileLinkMenu {
    /// Build the menu for a resolved link.
    #[must_use]
    pub fn build(target: OpenTarget, platform: Platform, resolved: ResolvedPath) -> Self {
        let mut entries = vec![MenuEntry::item(target.open_label(platform), MenuAction::Open)];

        // The open item already reveals when the target is the file manager
        if !target.is_reveal() {
            entries.push(MenuEntry::item(platform.reveal_label(), MenuAction::Reveal));
        }

        entries.push(MenuEntry::Item {
            label: DOWNLOAD_LABEL.to_string(),
            enabled: false,
            action: None,
        });
        entries.push(MenuEntry::item(COPY_LINK_LABEL, MenuAction::CopyLink));
        entries.push(MenuEntry::Separator);
        entries.push(MenuEntry::Services);

        Self {
            target,
            resolved,
            entries,
        }
    }

    /// Entries in display order.
    #[must_use]
    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    /// The target the open item dispatches to.
    #[must_use]
    pub fn target(&self) -> OpenTarget {
        self.target
    }

    /// The path every action operates on.
    #[must_use]
    pub fn resolved(&self) -> &ResolvedPath {
        &self.resolved
    }

    /// Find the action for an item by its label.
    ///
    /// Disabled items and unknown labels yield `None`.
    #[must_use]
    pub fn action_for(&self, label: &str) -> Option<MenuAction> {
        self.entries
            .iter()
            .find(|entry| entry.label() == Some(label))
            .and_then(MenuEntry::action)
    }

    /// Serialize the menu as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::resolve_file_path;

    fn menu(target: OpenTarget, platform: Platform) -> FileLinkMenu {
        FileLinkMenu::build(target, platform, resolve_file_path("/a.rs", None, platform))
    }

    #[test]
    fn test_app_target_has_reveal_item() {
        let menu = menu(OpenTarget::Vscode, Platform::Linux);
        assert_eq!(menu.entries().len(), 6);
        assert_eq!(
            menu.entries()[0].label(),
            Some("Open in Visual Studio Code")
        );
        assert_eq!(menu.entries()[1].label(), Some("Reveal in File Manager"));
        assert_eq!(menu.entries()[1].action(), Some(MenuAction::Reveal));
        assert_eq!(menu.entries()[4], MenuEntry::Separator);
        assert_eq!(menu.entries()[5], MenuEntry::Services);
    }

    #[test]
    fn test_finder_target_has_no_separate_reveal() {
        let menu = menu(OpenTarget::Finder, Platform::Windows);
        assert_eq!(menu.entries().len(), 5);
        assert_eq!(menu.entries()[0].label(), Some("Show in Explorer"));
        assert_eq!(menu.entries()[0].action(), Some(MenuAction::Open));
        assert_eq!(menu.action_for("Show in Explorer"), Some(MenuAction::Open));
    }

    #[test]
    fn test_download_item_disabled() {
        let menu = menu(OpenTarget::Cursor, Platform::Macos);
        assert_eq!(menu.action_for(DOWNLOAD_LABEL), None);
        assert_eq!(menu.action_for("Nonexistent"), None);
        assert!(matches!(
            &menu.entries()[2],
            MenuEntry::Item { enabled: false, .. }
        ));
    }

    #[test]
    fn test_json_shape() {
        let menu = menu(OpenTarget::Zed, Platform::Linux);
        let value: serde_json::Value = serde_json::from_str(&menu.to_json().unwrap()).unwrap();
        assert_eq!(value["target"], "zed");
        assert_eq!(value["resolved"], "/a.rs");
        assert_eq!(value["entries"][0]["kind"], "item");
        assert_eq!(value["entries"][0]["action"], "open");
        assert_eq!(value["entries"][3]["action"], "copy-link");
        assert!(value["entries"][2].get("action").is_none());
        assert_eq!(value["entries"][4]["kind"], "separator");
    }
}
