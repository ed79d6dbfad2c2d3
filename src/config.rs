//! TOML configuration for the NFC utility helpers.
//!
//! `UtilConfig` captures the log threshold for [`NFC_CORE_LOG_MODULE`] and an
//! optional pinned locale. A document looks like:
//!
//! ```toml
//! log_level = "verbose"
//! locale = "fi_FI.UTF-8"
//! ```
//!
//! Both keys are optional. Unknown keys are rejected so typos surface early.
//!
//! [`NFC_CORE_LOG_MODULE`]: crate::NFC_CORE_LOG_MODULE

use log::debug;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::locale::{EnvLocale, FixedLocale, LocaleProvider};
use crate::logging::{LogLevel, LogModule};

/// Conventional name of the configuration document.
pub const CONFIG_SOURCE: &str = "nfc-util.toml";

/// Settings shared by the hex dump and language helpers.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct UtilConfig {
    /// Threshold applied to the core log module. Hex dumps need `verbose`.
    pub log_level: LogLevel,
    /// Locale used instead of the process environment.
    ///
    /// The value is trimmed and blank values are treated as absent, so
    /// `locale = ""` falls back to the environment.
    pub locale: Option<String>,
}

impl UtilConfig {
    /// Parses a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the document is malformed, has
    /// unknown keys, or names an unknown log level.
    ///
    /// # Examples
    ///
    /// ```
    /// use nfc_util::{LogLevel, UtilConfig};
    ///
    /// let config = UtilConfig::from_toml_str("log_level = \"debug\"")?;
    /// assert_eq!(config.log_level, LogLevel::Debug);
    /// # Ok::<(), nfc_util::ConfigError>(())
    /// ```
    pub fn from_toml_str(document: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(document)?)
    }

    /// Loads the configuration document named `source` through `loader`.
    ///
    /// The loader maps the source name (usually [`CONFIG_SOURCE`]) to the
    /// document text, or `None` when no document exists. A missing document
    /// yields the defaults; a present one is parsed with
    /// [`Self::from_toml_str`]. The crate itself never touches the file
    /// system, so the daemon passes a file reader and tests pass a stub.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the document exists but is
    /// invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use nfc_util::{CONFIG_SOURCE, UtilConfig};
    ///
    /// let config = UtilConfig::load_with(CONFIG_SOURCE, |_| None)?;
    /// assert_eq!(config, UtilConfig::default());
    /// # Ok::<(), nfc_util::ConfigError>(())
    /// ```
    pub fn load_with<F>(source: &str, loader: F) -> Result<Self, ConfigError>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        match loader(source) {
            Some(document) => Self::from_toml_str(&document),
            None => {
                debug!(target: "nfc_util::config", "`{source}` not found; using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Returns the pinned locale, if present and not blank.
    #[must_use]
    pub fn locale(&self) -> Option<&str> {
        self.locale
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    /// Returns the provider implied by this configuration: the pinned locale
    /// when set, the process environment otherwise.
    #[must_use]
    pub fn locale_provider(&self) -> Box<dyn LocaleProvider> {
        match self.locale() {
            Some(locale) => Box::new(FixedLocale::new(locale)),
            None => Box::new(EnvLocale),
        }
    }

    /// Applies the configured threshold to `module`.
    pub fn apply(&self, module: &LogModule) {
        module.set_level(self.log_level);
    }
}
