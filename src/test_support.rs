//! Test doubles for code that dumps buffers or reads the system locale.
//!
//! The helpers live in the library so unit tests, integration tests and
//! downstream crates can share them.

use std::cell::RefCell;
use std::env;
use std::ffi::{OsStr, OsString};
use std::fmt;

use crate::locale::LOCALE_VARIABLES;
use crate::logging::{LogLevel, LogSink};

/// A log record captured by [`CapturingSink`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CapturedRecord {
    /// Module that emitted the record.
    pub module: String,
    /// Severity of the record.
    pub level: LogLevel,
    /// Fully formatted message.
    pub message: String,
}

/// Sink recording every message for later assertions.
#[derive(Debug, Default)]
pub struct CapturingSink {
    records: RefCell<Vec<CapturedRecord>>,
}

impl CapturingSink {
    /// Returns a copy of the records captured so far.
    #[must_use]
    pub fn records(&self) -> Vec<CapturedRecord> {
        self.records.borrow().clone()
    }

    /// Returns every captured message, each followed by a newline.
    #[must_use]
    pub fn text(&self) -> String {
        self.records
            .borrow()
            .iter()
            .fold(String::new(), |mut text, record| {
                text.push_str(&record.message);
                text.push('\n');
                text
            })
    }

    /// Whether nothing has been captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }

    /// Discards captured records.
    pub fn clear(&self) {
        self.records.borrow_mut().clear();
    }
}

impl LogSink for CapturingSink {
    fn log(&self, module: &str, level: LogLevel, message: fmt::Arguments<'_>) {
        self.records.borrow_mut().push(CapturedRecord {
            module: module.to_owned(),
            level,
            message: message.to_string(),
        });
    }
}

/// Restore-on-drop override of one of the [`LOCALE_VARIABLES`] read by
/// [`crate::EnvLocale`].
///
/// Environment writes are process-wide, so every test holding one of these
/// guards must also hold a lock shared by all environment-touching tests in
/// its binary: the `temp-env` lock in unit tests, or the `ENVIRONMENT_LOCK`
/// mutex owned by the behaviour-test world. Guards stacked on the same
/// variable must be dropped newest first.
///
/// ```ignore
/// let _lock = ENVIRONMENT_LOCK.lock();
/// let _cleared = LocaleEnvOverride::clear_all();
/// let _lang = LocaleEnvOverride::set("LANG", "fi_FI.UTF-8");
/// assert_eq!(EnvLocale.system_locale().as_deref(), Some("fi_FI.UTF-8"));
/// ```
#[derive(Debug)]
pub struct LocaleEnvOverride {
    name: &'static str,
    previous: Option<OsString>,
}

impl LocaleEnvOverride {
    /// Points `name` at `value` until the guard drops.
    #[must_use = "the variable is restored as soon as the guard is dropped"]
    pub fn set(name: &'static str, value: &str) -> Self {
        Self::swap(name, Some(OsStr::new(value)))
    }

    /// Unsets `name` until the guard drops.
    #[must_use = "the variable is restored as soon as the guard is dropped"]
    pub fn clear(name: &'static str) -> Self {
        Self::swap(name, None)
    }

    /// Unsets `LC_ALL`, `LC_MESSAGES` and `LANG`, so only variables set
    /// afterwards are visible to [`crate::EnvLocale`].
    ///
    /// The three guards cover distinct variables, so their relative drop
    /// order is irrelevant; overrides stacked on top of them must drop first.
    #[must_use = "the variables are restored as soon as the guards are dropped"]
    pub fn clear_all() -> Vec<Self> {
        LOCALE_VARIABLES.into_iter().map(Self::clear).collect()
    }

    fn swap(name: &'static str, value: Option<&OsStr>) -> Self {
        let previous = env::var_os(name);
        write_variable(name, value);
        Self { name, previous }
    }
}

fn write_variable(name: &str, value: Option<&OsStr>) {
    // SAFETY: callers hold the binary's environment lock (see
    // `LocaleEnvOverride`), so no other thread reads or writes the
    // environment while this runs.
    unsafe {
        match value {
            Some(text) => env::set_var(name, text),
            None => env::remove_var(name),
        }
    }
}

impl Drop for LocaleEnvOverride {
    fn drop(&mut self) {
        write_variable(self.name, self.previous.as_deref());
    }
}
