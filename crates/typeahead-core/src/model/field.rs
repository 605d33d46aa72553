use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::fmt;

///
/// SearchableFieldModel
/// One declared searchable field and the filter it was declared with.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SearchableFieldModel {
    pub name: &'static str,
    /// Declared filter name, e.g. `PartialMatchFilter`.
    pub filter: Option<&'static str>,
}

impl SearchableFieldModel {
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self { name, filter: None }
    }

    #[must_use]
    pub const fn with_filter(name: &'static str, filter: &'static str) -> Self {
        Self {
            name,
            filter: Some(filter),
        }
    }
}

///
/// FilterKind
///
/// How one field is matched against the query. Names are accepted with or
/// without a trailing `Filter` suffix.
///

#[derive(Clone, Debug, Display, Eq, Hash, PartialEq)]
pub enum FilterKind {
    StartsWith,
    EndsWith,
    PartialMatch,
    ExactMatch,
    #[display("{_0}")]
    Custom(String),
}

impl FilterKind {
    #[must_use]
    pub fn parse(name: &str) -> Self {
        let name = name.strip_suffix("Filter").unwrap_or(name);

        match name {
            "StartsWith" => Self::StartsWith,
            "EndsWith" => Self::EndsWith,
            "PartialMatch" => Self::PartialMatch,
            "ExactMatch" => Self::ExactMatch,
            other => Self::Custom(other.to_string()),
        }
    }
}

///
/// FieldSpec
///
/// A field name paired with an optional filter kind, written `Name` or
/// `Name:StartsWith`. An unspecified kind means "contains" when matching
/// inline candidates and `StartsWith` when querying a store.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(from = "String", into = "String")]
pub struct FieldSpec {
    pub field: String,
    pub filter: Option<FilterKind>,
}

impl FieldSpec {
    #[must_use]
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            filter: None,
        }
    }

    #[must_use]
    pub fn with_filter(field: impl Into<String>, filter: FilterKind) -> Self {
        Self {
            field: field.into(),
            filter: Some(filter),
        }
    }

    /// Parse `Name` or `Name:Filter`.
    #[must_use]
    pub fn parse(spec: &str) -> Self {
        match spec.split_once(':') {
            Some((field, filter)) if !filter.is_empty() => {
                Self::with_filter(field, FilterKind::parse(filter))
            }
            Some((field, _)) => Self::new(field),
            None => Self::new(spec),
        }
    }
}

impl fmt::Display for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.filter {
            Some(filter) => write!(f, "{}:{filter}", self.field),
            None => f.write_str(&self.field),
        }
    }
}

impl From<&str> for FieldSpec {
    fn from(spec: &str) -> Self {
        Self::parse(spec)
    }
}

impl From<String> for FieldSpec {
    fn from(spec: String) -> Self {
        Self::parse(&spec)
    }
}

impl From<FieldSpec> for String {
    fn from(spec: FieldSpec) -> Self {
        spec.to_string()
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_kind_strips_filter_suffix() {
        assert_eq!(FilterKind::parse("PartialMatchFilter"), FilterKind::PartialMatch);
        assert_eq!(FilterKind::parse("StartsWith"), FilterKind::StartsWith);
        assert_eq!(
            FilterKind::parse("GreaterThanFilter"),
            FilterKind::Custom("GreaterThan".to_string())
        );
    }

    #[test]
    fn field_spec_parses_optional_filter() {
        assert_eq!(FieldSpec::parse("Title"), FieldSpec::new("Title"));
        assert_eq!(
            FieldSpec::parse("Title:EndsWithFilter"),
            FieldSpec::with_filter("Title", FilterKind::EndsWith)
        );
        assert_eq!(FieldSpec::parse("Title:"), FieldSpec::new("Title"));
    }

    #[test]
    fn field_spec_displays_canonical_form() {
        let spec = FieldSpec::parse("Name:PartialMatchFilter");
        assert_eq!(spec.to_string(), "Name:PartialMatch");
        assert_eq!(String::from(FieldSpec::new("Name")), "Name");
    }
}
