//! Localization lookup for user-facing strings.
//!
//! The engine only ever asks for a key with an English default; callers
//! plug in whatever catalogue they use.

use std::collections::BTreeMap;

/// Shown by the client when a query has no matches.
pub const NO_MATCHES_KEY: &str = "TypeAheadField.NO_MATCHES";
pub const NO_MATCHES_DEFAULT: &str = "No matches found";

/// Reported when a required selection does not match any suggestion.
pub const INVALID_KEY: &str = "TypeAheadField.INVALID";
pub const INVALID_DEFAULT: &str = "Invalid value";

///
/// Translator
///

pub trait Translator: Send + Sync {
    fn translate(&self, key: &str, default: &str) -> String;
}

///
/// DefaultTranslator
/// Returns the English default for every key.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultTranslator;

impl Translator for DefaultTranslator {
    fn translate(&self, _key: &str, default: &str) -> String {
        default.to_string()
    }
}

impl Translator for BTreeMap<String, String> {
    fn translate(&self, key: &str, default: &str) -> String {
        self.get(key).map_or_else(|| default.to_string(), Clone::clone)
    }
}
