//! Hex dump and system language helpers shared by the NFC daemon core.
//!
//! [`hexdump`] renders byte buffers as `offset: hex  ascii` rows through a
//! [`LogSink`] when the owning [`LogModule`] runs at [`LogLevel::Verbose`].
//! [`system_language`] extracts the language and territory from the locale
//! reported by a [`LocaleProvider`]. Both hooks are passed in explicitly, so
//! tests substitute [`test_support::CapturingSink`] or [`FixedLocale`].

pub mod config;
pub mod error;
pub mod hexdump;
pub mod locale;
pub mod logging;
pub mod test_support;

pub use config::{CONFIG_SOURCE, UtilConfig};
pub use error::ConfigError;
pub use hexdump::{
    HEXDUMP_ROW_BYTES, HexdumpLine, HexdumpRow, hexdump, hexdump_data, hexdump_lines,
    hexdump_row, log_hexdump, log_hexdump_data,
};
pub use locale::{
    EnvLocale, FixedLocale, LOCALE_VARIABLES, Language, LocaleProvider, parse_language,
    system_language,
};
pub use logging::{
    LevelOverride, LogCrateSink, LogLevel, LogModule, LogSink, NFC_CORE_LOG_MODULE,
};
