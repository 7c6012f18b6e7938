//! Logging infrastructure for the linkopen library.
//!
//! Library code logs through the [`log`] facade. The CLI installs a
//! [`Logger`] as the backend, which writes to stderr according to a
//! [`LogLevel`].

use std::env;
use std::fmt;

/// Environment variable consulted by [`init_logger`].
pub const LOG_MODE_ENV: &str = "LINKOPEN_LOG_MODE";

/// Logging level for controlling output verbosity.
///
/// # Examples
///
/// ```
/// use linkopen::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Suppress all non-essential output.
    Quiet,
    /// Errors and warnings.
    Normal,
    /// Errors, warnings, info and debug messages.
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Normal => write!(f, "normal"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

impl LogLevel {
    /// Parses a log level from a string.
    ///
    /// Recognizes: "quiet", "normal", "verbose" (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkopen::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
    /// assert!(LogLevel::parse("loud").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }

    /// The most verbose `log` level that passes this filter.
    #[must_use]
    pub const fn level_filter(self) -> log::LevelFilter {
        match self {
            Self::Quiet => log::LevelFilter::Off,
            Self::Normal => log::LevelFilter::Warn,
            Self::Verbose => log::LevelFilter::Debug,
        }
    }
}

/// A stderr backend for the [`log`] facade.
///
/// At [`LogLevel::Verbose`] each line also names the module that emitted it,
/// so resolution steps can be told apart from host dispatch.
///
/// # Examples
///
/// ```
/// use linkopen::{Logger, LogLevel};
///
/// let logger = Logger::new(LogLevel::Normal);
/// assert_eq!(
///     logger.format_line(log::Level::Warn, "linkopen::dispatch", "clipboard unavailable"),
///     "WARN: clipboard unavailable"
/// );
/// ```
#[derive(Debug)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a new logger with the specified log level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the current log level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Render one stderr line for a record.
    #[must_use]
    pub fn format_line(&self, level: log::Level, target: &str, message: &str) -> String {
        if self.level == LogLevel::Verbose {
            format!("{level} [{target}]: {message}")
        } else {
            format!("{level}: {message}")
        }
    }

    /// Register this logger as the global `log` backend.
    ///
    /// Returns `false` if a backend was already installed.
    pub fn install(self) -> bool {
        let filter = self.level.level_filter();
        match log::set_boxed_logger(Box::new(self)) {
            Ok(()) => {
                log::set_max_level(filter);
                true
            }
            Err(_) => false,
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= self.level.level_filter()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let message = record.args().to_string();
        eprintln!(
            "{}",
            self.format_line(record.level(), record.target(), &message)
        );
    }

    fn flush(&self) {}
}

/// Initializes a logger based on environment variables and CLI flags.
///
/// The priority order is:
/// 1. CLI flags (verbose/quiet)
/// 2. `LINKOPEN_LOG_MODE` environment variable
/// 3. Default (Normal)
///
/// If both `verbose` and `quiet` are true, `verbose` takes precedence.
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    if verbose {
        return Logger::new(LogLevel::Verbose);
    }
    if quiet {
        return Logger::new(LogLevel::Quiet);
    }

    if let Ok(env_value) = env::var(LOG_MODE_ENV) {
        if let Ok(level) = LogLevel::parse(&env_value) {
            return Logger::new(level);
        }
    }

    Logger::new(LogLevel::Normal)
}
