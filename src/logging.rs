//! Log levels, per-module thresholds, and the sink seam used by hex dumps.
//!
//! Each subsystem owns a [`LogModule`] carrying its own threshold. Messages
//! are routed through a [`LogSink`] supplied by the caller: production code
//! passes [`LogCrateSink`], which forwards to the `log` facade, while tests
//! capture records with [`crate::test_support::CapturingSink`].

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};

use serde::Deserialize;

use crate::error::ConfigError;

/// Severity of a log message, ordered from least to most permissive.
///
/// A module configured at a given level emits every message at that level or
/// any level before it in this ordering.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[serde(try_from = "String")]
#[repr(u8)]
pub enum LogLevel {
    /// Logging disabled.
    None = 0,
    /// Unrecoverable failures.
    Error = 1,
    /// Recoverable problems.
    Warning = 2,
    /// Normal operational messages.
    #[default]
    Info = 3,
    /// Diagnostic detail.
    Debug = 4,
    /// Everything, including hex dumps.
    Verbose = 5,
}

impl LogLevel {
    const fn from_u8(raw: u8) -> Self {
        match raw {
            0 => Self::None,
            1 => Self::Error,
            2 => Self::Warning,
            3 => Self::Info,
            4 => Self::Debug,
            5 => Self::Verbose,
            _ => Self::None,
        }
    }

    /// Returns the matching `log` crate level, or `None` for
    /// [`LogLevel::None`].
    #[must_use]
    pub const fn to_log_level(self) -> Option<log::Level> {
        match self {
            Self::None => None,
            Self::Error => Some(log::Level::Error),
            Self::Warning => Some(log::Level::Warn),
            Self::Info => Some(log::Level::Info),
            Self::Debug => Some(log::Level::Debug),
            Self::Verbose => Some(log::Level::Trace),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Verbose => "verbose",
        };
        formatter.write_str(name)
    }
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "error" => Ok(Self::Error),
            "warning" | "warn" => Ok(Self::Warning),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "verbose" | "trace" => Ok(Self::Verbose),
            _ => Err(ConfigError::UnknownLogLevel {
                value: input.to_owned(),
            }),
        }
    }
}

impl TryFrom<String> for LogLevel {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, ConfigError> {
        value.parse()
    }
}

/// A named logging module with its own threshold.
///
/// The threshold is atomic so modules can live in a `static` and be adjusted
/// at runtime by configuration or tests.
#[derive(Debug)]
pub struct LogModule {
    name: &'static str,
    level: AtomicU8,
}

impl LogModule {
    /// Creates a module named `name` emitting messages up to `level`.
    #[must_use]
    pub const fn new(name: &'static str, level: LogLevel) -> Self {
        Self {
            name,
            level: AtomicU8::new(level as u8),
        }
    }

    /// Returns the module name used as the log target.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the current threshold.
    #[must_use]
    pub fn level(&self) -> LogLevel {
        LogLevel::from_u8(self.level.load(Ordering::Relaxed))
    }

    /// Replaces the threshold.
    pub fn set_level(&self, level: LogLevel) {
        self.level.store(level as u8, Ordering::Relaxed);
    }

    /// Whether a message at `level` passes this module's threshold.
    #[must_use]
    pub fn enabled(&self, level: LogLevel) -> bool {
        level != LogLevel::None && level <= self.level()
    }

    /// Sets the threshold to `level`, returning a guard that restores the
    /// previous threshold when dropped.
    ///
    /// ```
    /// use nfc_util::{LogLevel, LogModule};
    ///
    /// let module = LogModule::new("example", LogLevel::Info);
    /// {
    ///     let _guard = module.override_level(LogLevel::Verbose);
    ///     assert!(module.enabled(LogLevel::Verbose));
    /// }
    /// assert_eq!(module.level(), LogLevel::Info);
    /// ```
    #[must_use = "the previous level is restored as soon as the guard is dropped"]
    pub fn override_level(&self, level: LogLevel) -> LevelOverride<'_> {
        let previous = self.level();
        self.set_level(level);
        LevelOverride {
            module: self,
            previous,
        }
    }
}

/// Guard returned by [`LogModule::override_level`].
#[derive(Debug)]
pub struct LevelOverride<'a> {
    module: &'a LogModule,
    previous: LogLevel,
}

impl Drop for LevelOverride<'_> {
    fn drop(&mut self) {
        self.module.set_level(self.previous);
    }
}

/// Logging module for the NFC core.
pub static NFC_CORE_LOG_MODULE: LogModule = LogModule::new("nfc-core", LogLevel::Info);

/// Destination for formatted log records.
pub trait LogSink {
    /// Records `message` logged by `module` at `level`.
    fn log(&self, module: &str, level: LogLevel, message: fmt::Arguments<'_>);
}

impl<S: LogSink + ?Sized> LogSink for &S {
    fn log(&self, module: &str, level: LogLevel, message: fmt::Arguments<'_>) {
        (**self).log(module, level, message);
    }
}

/// Sink forwarding records to the `log` facade with the module name as
/// target.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogCrateSink;

impl LogSink for LogCrateSink {
    fn log(&self, module: &str, level: LogLevel, message: fmt::Arguments<'_>) {
        if let Some(target_level) = level.to_log_level() {
            log::log!(target: module, target_level, "{message}");
        }
    }
}
