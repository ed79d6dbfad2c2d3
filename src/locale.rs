//! System locale lookup and language extraction.
//!
//! Locales follow the POSIX shape `language[_territory][.encoding][@modifier]`.
//! [`system_language`] asks a [`LocaleProvider`] for the current locale and
//! keeps only the language and territory; encoding and modifier are dropped.
//! The `C` and `POSIX` locales carry no language at all.

use std::env;
use std::fmt;

use log::debug;

/// Environment variables consulted by [`EnvLocale`], highest priority first.
pub const LOCALE_VARIABLES: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// Language and optional territory extracted from a locale string.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Language {
    language: String,
    territory: Option<String>,
}

impl Language {
    /// Returns the language code, for example `en`. Never empty.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Returns the territory code, for example `US`, when the locale named
    /// one.
    #[must_use]
    pub fn territory(&self) -> Option<&str> {
        self.territory.as_deref()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.territory {
            Some(territory) => write!(formatter, "{}_{territory}", self.language),
            None => formatter.write_str(&self.language),
        }
    }
}

/// Source of the current system locale.
pub trait LocaleProvider {
    /// Returns the active locale string, or `None` when unset.
    fn system_locale(&self) -> Option<String>;
}

impl<P: LocaleProvider + ?Sized> LocaleProvider for &P {
    fn system_locale(&self) -> Option<String> {
        (**self).system_locale()
    }
}

impl<P: LocaleProvider + ?Sized> LocaleProvider for Box<P> {
    fn system_locale(&self) -> Option<String> {
        (**self).system_locale()
    }
}

/// Reads the message locale from the process environment.
///
/// The first non-empty value of `LC_ALL`, `LC_MESSAGES` and `LANG` wins.
#[derive(Clone, Copy, Debug, Default)]
pub struct EnvLocale;

impl LocaleProvider for EnvLocale {
    fn system_locale(&self) -> Option<String> {
        LOCALE_VARIABLES
            .iter()
            .filter_map(|name| env::var(name).ok())
            .find(|value| !value.is_empty())
    }
}

/// Provider returning a fixed locale.
///
/// ```
/// use nfc_util::{FixedLocale, system_language};
///
/// let language = system_language(&FixedLocale::new("fi_FI.UTF-8"));
/// assert_eq!(language.map(|found| found.to_string()).as_deref(), Some("fi_FI"));
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FixedLocale(Option<String>);

impl FixedLocale {
    /// Provider that always reports `locale`.
    #[must_use]
    pub fn new(locale: impl Into<String>) -> Self {
        Self(Some(locale.into()))
    }

    /// Provider that reports no locale.
    #[must_use]
    pub const fn unset() -> Self {
        Self(None)
    }
}

impl From<Option<&str>> for FixedLocale {
    fn from(locale: Option<&str>) -> Self {
        Self(locale.map(str::to_owned))
    }
}

impl LocaleProvider for FixedLocale {
    fn system_locale(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Extracts language and territory from `locale`.
///
/// Returns `None` for a missing locale, for `C` and `POSIX`, and when the
/// language segment is empty. An empty territory (`en_.UTF-8`) is treated as
/// absent.
///
/// ```
/// use nfc_util::parse_language;
///
/// let parsed = parse_language(Some("en_US.UTF-8@euro"));
/// assert_eq!(parsed.as_ref().map(|found| found.language()), Some("en"));
/// assert_eq!(parsed.as_ref().and_then(|found| found.territory()), Some("US"));
/// assert!(parse_language(Some("POSIX")).is_none());
/// ```
#[must_use]
pub fn parse_language(locale: Option<&str>) -> Option<Language> {
    let raw = locale.filter(|value| !matches!(*value, "C" | "POSIX"))?;

    // Encoding and modifier never precede the territory.
    let head = raw.split(['.', '@']).next().unwrap_or_default();
    let (language, territory) = match head.split_once('_') {
        Some((language, territory)) => (language, Some(territory)),
        None => (head, None),
    };

    if language.is_empty() {
        return None;
    }

    Some(Language {
        language: language.to_owned(),
        territory: territory
            .filter(|segment| !segment.is_empty())
            .map(str::to_owned),
    })
}

/// Determines the system language reported by `provider`.
#[must_use]
pub fn system_language<P: LocaleProvider + ?Sized>(provider: &P) -> Option<Language> {
    let locale = provider.system_locale();
    let language = parse_language(locale.as_deref());

    match (&locale, &language) {
        (_, Some(found)) => debug!(target: "nfc_util::locale", "system language is `{found}`"),
        (Some(raw), None) => {
            debug!(target: "nfc_util::locale", "locale `{raw}` carries no language");
        }
        (None, None) => debug!(target: "nfc_util::locale", "no system locale set"),
    }

    language
}
