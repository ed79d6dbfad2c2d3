//! Shared test support utilities for behaviour-driven suites.
//!
//! Exposes the `locale` helpers that parse step parameters (quoted locale
//! strings and environment variable names) so scenarios feed consistent
//! values into the language lookup.
pub mod locale;
