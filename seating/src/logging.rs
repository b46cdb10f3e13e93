//! Logging infrastructure for the seating library.
//!
//! Diagnostics go to stderr so that stdout carries nothing but events.
//! Library code logs through the `log` macros; [`install_logger`] routes
//! them to a [`Logger`] at the configured verbosity.

use std::env;
use std::fmt;

/// Environment variable consulted by [`init_logger`].
pub const LOG_MODE_ENV: &str = "SEATING_LOG_MODE";

/// Logging level for controlling output verbosity.
///
/// Log levels are ordered from least verbose (Quiet) to most verbose (Verbose).
///
/// # Examples
///
/// ```
/// use seating::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Suppress all diagnostics.
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
    /// Parses a log level from a string, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not one of `quiet`, `normal` or
    /// `verbose`.
    ///
    /// # Examples
    ///
    /// ```
    /// use seating::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
    /// assert!(LogLevel::parse("chatty").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }

    /// The most detailed `log` level this verbosity lets through.
    #[must_use]
    pub const fn filter(self) -> log::LevelFilter {
        match self {
            Self::Quiet => log::LevelFilter::Off,
            Self::Normal => log::LevelFilter::Warn,
            Self::Verbose => log::LevelFilter::Debug,
        }
    }
}

/// A stderr logger.
///
/// # Examples
///
/// ```
/// use seating::{LogLevel, Logger};
///
/// let logger = Logger::new(LogLevel::Normal);
/// logger.warn("restaurant R1 replaced");
/// logger.info("not printed at Normal");
/// ```
#[derive(Debug, Clone, Copy)]
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

    /// Logs an error message unless the level is Quiet.
    pub fn error(&self, message: &str) {
        if self.level >= LogLevel::Normal {
            eprintln!("ERROR: {message}");
        }
    }

    /// Logs a warning message unless the level is Quiet.
    pub fn warn(&self, message: &str) {
        if self.level >= LogLevel::Normal {
            eprintln!("WARN: {message}");
        }
    }

    /// Logs an informational message at Verbose level.
    pub fn info(&self, message: &str) {
        if self.level >= LogLevel::Verbose {
            eprintln!("INFO: {message}");
        }
    }

    /// Logs a debug message at Verbose level.
    pub fn debug(&self, message: &str) {
        if self.level >= LogLevel::Verbose {
            eprintln!("DEBUG: {message}");
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= self.level.filter()
    }

    fn log(&self, record: &log::Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let message = record.args().to_string();
        match record.level() {
            log::Level::Error => self.error(&message),
            log::Level::Warn => self.warn(&message),
            log::Level::Info => self.info(&message),
            log::Level::Debug | log::Level::Trace => self.debug(&message),
        }
    }

    fn flush(&self) {}
}

/// Initializes a logger based on environment variables and CLI flags.
///
/// The priority order is:
/// 1. CLI flags (verbose/quiet)
/// 2. `SEATING_LOG_MODE` environment variable
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

/// Routes the `log` macros to `logger`.
///
/// Only the first call in a process takes effect; later calls return
/// `false` and leave the installed logger in place.
pub fn install_logger(logger: Logger) -> bool {
    let filter = logger.level().filter();
    let installed = log::set_logger(Box::leak(Box::new(logger))).is_ok();
    if installed {
        log::set_max_level(filter);
    }
    installed
}
