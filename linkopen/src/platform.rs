//! Operating system family detection.
//!
//! Detection is a pure function over identification signals so callers can
//! supply their own values in tests. [`Platform::current`] is the only place
//! that reads the live environment.

use std::env;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Environment variable that overrides the detected platform.
pub const PLATFORM_ENV: &str = "LINKOPEN_PLATFORM";

/// Operating system family the paths belong to.
///
/// # Examples
///
/// ```
/// use linkopen::Platform;
///
/// assert_eq!(Platform::from_signal("Win32"), Platform::Windows);
/// assert_eq!(Platform::from_signal("MacIntel"), Platform::Macos);
/// assert_eq!(Platform::from_signal("Linux x86_64"), Platform::Linux);
/// assert_eq!(Platform::from_signal("FreeBSD"), Platform::Unknown);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Microsoft Windows.
    Windows,
    /// Apple macOS.
    Macos,
    /// Linux and friends.
    Linux,
    /// No usable signal.
    #[default]
    Unknown,
}

impl Platform {
    /// Every platform, in detection order followed by `Unknown`.
    pub const ALL: [Self; 4] = [Self::Windows, Self::Macos, Self::Linux, Self::Unknown];

    /// Classify a free-text platform signal.
    ///
    /// Case-insensitive substring match, checked in the order
    /// windows, mac, linux. The first match wins.
    #[must_use]
    pub fn from_signal(signal: &str) -> Self {
        let normalized = signal.to_lowercase();
        if normalized.contains("win") {
            Self::Windows
        } else if normalized.contains("mac") {
            Self::Macos
        } else if normalized.contains("linux") {
            Self::Linux
        } else {
            Self::Unknown
        }
    }

    /// Detect the platform of the running host.
    #[must_use]
    pub fn current() -> Self {
        detect_platform(&PlatformSignals::from_host())
    }

    /// Returns the lowercase platform name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Windows => "windows",
            Self::Macos => "macos",
            Self::Linux => "linux",
            Self::Unknown => "unknown",
        }
    }

    /// Returns true for Windows.
    #[must_use]
    pub const fn is_windows(&self) -> bool {
        matches!(self, Self::Windows)
    }

    /// Path separator used when joining paths.
    #[must_use]
    pub const fn separator(&self) -> char {
        if self.is_windows() {
            '\\'
        } else {
            '/'
        }
    }

    /// CSS-style class name, e.g. `platform-macos`.
    #[must_use]
    pub fn class_name(&self) -> String {
        format!("platform-{}", self.as_str())
    }

    /// Label for the "reveal in file manager" action.
    #[must_use]
    pub const fn reveal_label(&self) -> &'static str {
        match self {
            Self::Macos => "Reveal in Finder",
            Self::Windows => "Show in Explorer",
            Self::Linux | Self::Unknown => "Reveal in File Manager",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownPlatform {
                name: s.to_string(),
            })
    }
}

/// Identification signals used for detection.
///
/// `structured` is preferred when present, otherwise `fallback` is used.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlatformSignals {
    /// Structured platform identifier.
    pub structured: Option<String>,
    /// Free-text identifier consulted when no structured value exists.
    pub fallback: Option<String>,
}

impl PlatformSignals {
    /// Signals for the running process: the `LINKOPEN_PLATFORM` override as
    /// the structured value and the compile-time target OS as the fallback.
    #[must_use]
    pub fn from_host() -> Self {
        Self {
            structured: env::var(PLATFORM_ENV).ok(),
            fallback: Some(env::consts::OS.to_string()),
        }
    }
}

/// Infer the platform from the given signals.
///
/// Never fails; returns [`Platform::Unknown`] when no signal is available.
///
/// # Examples
///
/// ```
/// use linkopen::platform::{detect_platform, PlatformSignals};
/// use linkopen::Platform;
///
/// let signals = PlatformSignals {
///     structured: None,
///     fallback: Some("Mozilla/5.0 (Macintosh)".to_string()),
/// };
/// assert_eq!(detect_platform(&signals), Platform::Macos);
/// assert_eq!(detect_platform(&PlatformSignals::default()), Platform::Unknown);
/// ```
#[must_use]
pub fn detect_platform(signals: &PlatformSignals) -> Platform {
    match signals.structured.as_deref().or(signals.fallback.as_deref()) {
        Some(signal) => Platform::from_signal(signal),
        None => Platform::Unknown,
    }
}
