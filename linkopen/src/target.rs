//! Applications a file link can be opened with.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::platform::Platform;

/// The configured "open with" destination for file links.
///
/// `Finder` is a pseudo target meaning "reveal in the file manager" on every
/// platform, not only macOS.
///
/// # Examples
///
/// ```
/// use linkopen::OpenTarget;
///
/// assert_eq!(OpenTarget::Zed.app_name(), Some("Zed"));
/// assert_eq!(OpenTarget::Finder.app_name(), None);
/// assert_eq!(OpenTarget::from_stored(Some("bogus")), OpenTarget::Vscode);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpenTarget {
    /// Visual Studio Code.
    #[default]
    Vscode,
    /// Cursor editor.
    Cursor,
    /// Zed editor.
    Zed,
    /// Ghostty terminal.
    Ghostty,
    /// Antigravity editor.
    Antigravity,
    /// Reveal in the native file manager.
    Finder,
}

impl OpenTarget {
    /// All targets in menu order.
    pub const ALL: [Self; 6] = [
        Self::Vscode,
        Self::Cursor,
        Self::Zed,
        Self::Ghostty,
        Self::Antigravity,
        Self::Finder,
    ];

    /// Identifier stored in preferences.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Vscode => "vscode",
            Self::Cursor => "cursor",
            Self::Zed => "zed",
            Self::Ghostty => "ghostty",
            Self::Antigravity => "antigravity",
            Self::Finder => "finder",
        }
    }

    /// Display name of the application, `None` for the file manager.
    #[must_use]
    pub const fn app_name(&self) -> Option<&'static str> {
        match self {
            Self::Vscode => Some("Visual Studio Code"),
            Self::Cursor => Some("Cursor"),
            Self::Zed => Some("Zed"),
            Self::Ghostty => Some("Ghostty"),
            Self::Antigravity => Some("Antigravity"),
            Self::Finder => None,
        }
    }

    /// Whether opening means revealing in the file manager.
    #[must_use]
    pub const fn is_reveal(&self) -> bool {
        matches!(self, Self::Finder)
    }

    /// Menu label for the primary "open" action.
    #[must_use]
    pub fn open_label(&self, platform: Platform) -> String {
        if self.is_reveal() {
            return platform.reveal_label().to_string();
        }
        match self.app_name() {
            Some(name) => format!("Open in {name}"),
            None => "Open Link".to_string(),
        }
    }

    /// Interpret a stored preference.
    ///
    /// Unset or unrecognized values fall back to [`OpenTarget::Vscode`].
    #[must_use]
    pub fn from_stored(stored: Option<&str>) -> Self {
        match stored {
            None => Self::default(),
            Some(id) => id.parse().unwrap_or_else(|err| {
                log::warn!("{err}, falling back to {}", Self::default());
                Self::default()
            }),
        }
    }
}

impl fmt::Display for OpenTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for OpenTarget {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|target| target.id() == s)
            .ok_or_else(|| Error::UnknownOpenTarget { id: s.to_string() })
    }
}
