use crate::{
    actor::Actor,
    config::TypeaheadConfig,
    traits::Record,
    value::Value,
};
use serde::{Deserialize, Serialize};

/// Key field used when `val_field` is configured empty.
const FALLBACK_KEY_FIELD: &str = "ID";

/// Display field used when `ref_field` is configured empty.
const FALLBACK_TEXT_FIELD: &str = "Title";

///
/// ResultRecord
/// One selectable suggestion as sent to the client.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ResultRecord {
    #[serde(rename = "id")]
    pub key: Value,
    pub text: String,
    pub disabled: bool,
    pub locked: bool,
}

///
/// ResultGroup
/// A labelled cluster of suggestions; never empty once emitted.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ResultGroup {
    pub text: String,
    pub children: Vec<Suggestion>,
}

///
/// Suggestion
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Suggestion {
    Group(ResultGroup),
    Record(ResultRecord),
}

impl Suggestion {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Group(group) => &group.text,
            Self::Record(record) => &record.text,
        }
    }

    #[must_use]
    pub const fn as_record(&self) -> Option<&ResultRecord> {
        match self {
            Self::Record(record) => Some(record),
            Self::Group(_) => None,
        }
    }
}

impl From<ResultRecord> for Suggestion {
    fn from(record: ResultRecord) -> Self {
        Self::Record(record)
    }
}

///
/// ResultShaper
///
/// Turns matched candidates into wire records. Disabled and locked flags are
/// membership tests against the configured key sets.
///

#[derive(Clone, Copy, Debug)]
pub struct ResultShaper<'a> {
    config: &'a TypeaheadConfig,
}

impl<'a> ResultShaper<'a> {
    #[must_use]
    pub const fn new(config: &'a TypeaheadConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn result_to_map(&self, key: impl Into<Value>, text: impl Into<Value>) -> ResultRecord {
        let key = key.into();

        ResultRecord {
            disabled: self.config.is_disabled(&key),
            locked: self.config.is_locked(&key),
            text: text.into().to_text(),
            key,
        }
    }

    #[must_use]
    pub fn result_group_to_map(
        &self,
        label: impl Into<String>,
        children: Vec<Suggestion>,
    ) -> ResultGroup {
        ResultGroup {
            text: label.into(),
            children,
        }
    }

    /// Shape store records, skipping any the actor may not view.
    #[must_use]
    pub fn results_to_map<I>(&self, records: I, actor: &Actor) -> Vec<ResultRecord>
    where
        I: IntoIterator<Item = Box<dyn Record>>,
    {
        let key_field = non_empty_or(&self.config.val_field, FALLBACK_KEY_FIELD);
        let text_field = non_empty_or(&self.config.ref_field, FALLBACK_TEXT_FIELD);

        records
            .into_iter()
            .filter(|record| record.can_view(actor))
            .map(|record| {
                self.result_to_map(
                    record.get_value(key_field).unwrap_or_default(),
                    record.get_value(text_field).unwrap_or_default(),
                )
            })
            .collect()
    }
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}

///
/// TESTS
///
