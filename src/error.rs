//! Error types for `nfc-util` configuration.
//!
//! Hex dumps and language lookups are total, so configuration parsing is the
//! only surface that can fail.

use thiserror::Error;

/// Errors raised while loading [`crate::UtilConfig`] or parsing a
/// [`crate::LogLevel`].
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ConfigError {
    /// The configuration document is not valid TOML or does not match the
    /// expected schema.
    #[error("invalid nfc-util configuration: {reason}")]
    Parse {
        /// Description of the parse failure.
        reason: String,
    },

    /// A log level name was not recognised.
    #[error("unknown log level `{value}`; expected one of none, error, warning, info, debug, verbose")]
    UnknownLogLevel {
        /// The rejected level name.
        value: String,
    },
}

impl From<toml::de::Error> for ConfigError {
    fn from(error: toml::de::Error) -> Self {
        Self::Parse {
            reason: error.to_string(),
        }
    }
}
