//! Per-field configuration.
//!
//! `TypeaheadConfig` is built once when a field is set up and is read-only
//! afterwards. Every setting has a documented default, and the struct can be
//! loaded from JSON with camelCase keys.

use crate::{error::InternalError, model::FieldSpec, value::Value};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error as ThisError;

///
/// CONSTANTS
///

/// Cap applied when a limit or prefetch count is left at zero.
pub const DEFAULT_LIMIT: usize = 10;

/// Default display and key field.
pub const DEFAULT_FIELD: &str = "Title";

/// Minimum query length the client waits for before asking for suggestions.
pub const DEFAULT_MIN_SEARCH_LENGTH: u32 = 2;

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("invalid typeahead config: {0}")]
    Parse(#[from] serde_json::Error),
}

impl From<ConfigError> for InternalError {
    fn from(err: ConfigError) -> Self {
        Self::config_invalid(err.to_string())
    }
}

///
/// MatchMode
///
/// Whether inline candidates must match the query to be returned.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchMode {
    /// Only candidates matching the query pattern are returned.
    #[default]
    Strict,
    /// Every displayable candidate is returned up to the limit, matched or
    /// not. Kept for callers that depend on that older behavior.
    Legacy,
}

///
/// Limit
///
/// Suggestion cap. Serialized as a number, or `false` for no cap.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Limit {
    Unlimited,
    Capped(usize),
}

impl Limit {
    /// Cap to apply to a query; zero falls back to `DEFAULT_LIMIT`.
    #[must_use]
    pub const fn effective(self) -> Option<usize> {
        match self {
            Self::Unlimited => None,
            Self::Capped(0) => Some(DEFAULT_LIMIT),
            Self::Capped(n) => Some(n),
        }
    }
}

impl Default for Limit {
    fn default() -> Self {
        Self::Capped(DEFAULT_LIMIT)
    }
}

///
/// Prefetch
///
/// Eager suggestions loaded before the user types. Serialized as a number,
/// `true` (no cap), `false` (disabled), or a URL string (remote prefetch).
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Prefetch {
    Disabled,
    Count(usize),
    Unlimited,
    Remote(String),
}

impl Prefetch {
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        !matches!(self, Self::Disabled | Self::Count(0))
    }

    /// Cap for a local prefetch request.
    ///
    /// Anything other than an explicit count or `Unlimited` falls back to
    /// `DEFAULT_LIMIT`, so the prefetch endpoint still answers when called
    /// directly.
    #[must_use]
    pub const fn effective(&self) -> Option<usize> {
        match self {
            Self::Unlimited => None,
            Self::Count(n) if *n > 0 => Some(*n),
            _ => Some(DEFAULT_LIMIT),
        }
    }

    #[must_use]
    pub fn remote_url(&self) -> Option<&str> {
        match self {
            Self::Remote(url) if !url.is_empty() => Some(url),
            _ => None,
        }
    }
}

impl Default for Prefetch {
    fn default() -> Self {
        Self::Count(DEFAULT_LIMIT)
    }
}

///
/// TypeaheadConfig
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypeaheadConfig {
    /// Field shown as suggestion text.
    pub ref_field: String,
    /// Field used as the suggestion key.
    pub val_field: String,
    /// Explicit search fields; replaces the scaffolded ones when set.
    #[serde(with = "source_field")]
    pub source_field: Option<Vec<FieldSpec>>,
    #[serde(with = "limit")]
    pub limit: Limit,
    #[serde(with = "prefetch")]
    pub prefetch: Prefetch,
    pub min_search_length: u32,
    pub require_selection: bool,
    pub disabled_options: Vec<Value>,
    pub locked_options: Vec<Value>,
    pub match_mode: MatchMode,
    /// Explicit live-search URL; takes precedence over the form link.
    pub suggest_url: Option<String>,
}

impl TypeaheadConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn is_disabled(&self, key: &Value) -> bool {
        self.disabled_options.iter().any(|option| option.loose_eq(key))
    }

    #[must_use]
    pub fn is_locked(&self, key: &Value) -> bool {
        self.locked_options.iter().any(|option| option.loose_eq(key))
    }
}

impl Default for TypeaheadConfig {
    fn default() -> Self {
        Self {
            ref_field: DEFAULT_FIELD.to_string(),
            val_field: DEFAULT_FIELD.to_string(),
            source_field: None,
            limit: Limit::default(),
            prefetch: Prefetch::default(),
            min_search_length: DEFAULT_MIN_SEARCH_LENGTH,
            require_selection: false,
            disabled_options: Vec::new(),
            locked_options: Vec::new(),
            match_mode: MatchMode::default(),
            suggest_url: None,
        }
    }
}

//
// serde helpers for the loosely-typed settings
//

mod limit {
    use super::*;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Flag(bool),
        Count(usize),
    }

    pub fn serialize<S: Serializer>(limit: &Limit, serializer: S) -> Result<S::Ok, S::Error> {
        match limit {
            Limit::Unlimited => serializer.serialize_bool(false),
            Limit::Capped(n) => serializer.serialize_u64(*n as u64),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Limit, D::Error> {
        Ok(match Repr::deserialize(deserializer)? {
            Repr::Flag(false) => Limit::Unlimited,
            Repr::Flag(true) => Limit::default(),
            Repr::Count(n) => Limit::Capped(n),
        })
    }
}

mod prefetch {
    use super::*;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Flag(bool),
        Count(usize),
        Url(String),
    }

    pub fn serialize<S: Serializer>(prefetch: &Prefetch, serializer: S) -> Result<S::Ok, S::Error> {
        match prefetch {
            Prefetch::Disabled => serializer.serialize_bool(false),
            Prefetch::Unlimited => serializer.serialize_bool(true),
            Prefetch::Count(n) => serializer.serialize_u64(*n as u64),
            Prefetch::Remote(url) => serializer.serialize_str(url),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Prefetch, D::Error> {
        Ok(match Repr::deserialize(deserializer)? {
            Repr::Flag(false) => Prefetch::Disabled,
            Repr::Flag(true) => Prefetch::Unlimited,
            Repr::Count(n) => Prefetch::Count(n),
            Repr::Url(url) => Prefetch::Remote(url),
        })
    }
}

mod source_field {
    use super::*;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        One(FieldSpec),
        Many(Vec<FieldSpec>),
    }

    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(
        fields: &Option<Vec<FieldSpec>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        fields.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Vec<FieldSpec>>, D::Error> {
        Ok(match Option::<Repr>::deserialize(deserializer)? {
            None => None,
            Some(Repr::One(spec)) => Some(vec![spec]),
            Some(Repr::Many(specs)) => Some(specs),
        })
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FilterKind;

    #[test]
    fn defaults_match_documented_values() {
        let config = TypeaheadConfig::default();

        assert_eq!(config.ref_field, "Title");
        assert_eq!(config.val_field, "Title");
        assert_eq!(config.limit.effective(), Some(10));
        assert_eq!(config.prefetch.effective(), Some(10));
        assert_eq!(config.min_search_length, 2);
        assert_eq!(config.match_mode, MatchMode::Strict);
        assert!(!config.require_selection);
    }

    #[test]
    fn empty_json_yields_defaults() {
        let config = TypeaheadConfig::from_json_str("{}").expect("empty config should parse");

        assert_eq!(config, TypeaheadConfig::default());
    }

    #[test]
    fn loose_settings_parse() {
        let config = TypeaheadConfig::from_json_str(
            r#"{
                "limit": false,
                "prefetch": "/remote/prefetch.json",
                "sourceField": "Name:PartialMatchFilter",
                "disabledOptions": [1, "two"],
                "matchMode": "legacy"
            }"#,
        )
        .expect("config should parse");

        assert_eq!(config.limit, Limit::Unlimited);
        assert_eq!(config.prefetch.remote_url(), Some("/remote/prefetch.json"));
        assert_eq!(
            config.source_field,
            Some(vec![FieldSpec::with_filter("Name", FilterKind::PartialMatch)])
        );
        assert!(config.is_disabled(&Value::from("1")));
        assert!(config.is_disabled(&Value::from("two")));
        assert!(!config.is_locked(&Value::Uint(1)));
        assert_eq!(config.match_mode, MatchMode::Legacy);
    }

    #[test]
    fn prefetch_flags_parse() {
        let on = TypeaheadConfig::from_json_str(r#"{"prefetch": true}"#).expect("should parse");
        let off = TypeaheadConfig::from_json_str(r#"{"prefetch": false}"#).expect("should parse");

        assert_eq!(on.prefetch.effective(), None);
        assert!(on.prefetch.is_enabled());
        assert!(!off.prefetch.is_enabled());
        assert_eq!(off.prefetch.effective(), Some(DEFAULT_LIMIT));
    }

    #[test]
    fn zero_limit_falls_back_to_default() {
        assert_eq!(Limit::Capped(0).effective(), Some(DEFAULT_LIMIT));
        assert!(!Prefetch::Count(0).is_enabled());
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = TypeaheadConfig {
            source_field: Some(vec![FieldSpec::parse("Title:StartsWith")]),
            limit: Limit::Unlimited,
            prefetch: Prefetch::Unlimited,
            ..TypeaheadConfig::default()
        };

        let json = serde_json::to_string(&config).expect("config should serialize");
        let back = TypeaheadConfig::from_json_str(&json).expect("config should parse");

        assert_eq!(back, config);
    }

    #[test]
    fn malformed_json_reports_config_error() {
        let err = TypeaheadConfig::from_json_str(r#"{"limit": "many"}"#)
            .expect_err("string limit should fail");

        let internal = InternalError::from(err);
        assert_eq!(internal.origin, crate::error::ErrorOrigin::Config);
    }
}
