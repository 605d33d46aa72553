//! Inline candidate sources.
//!
//! An inline source is an ordered tree: scalar entries and flat records are
//! leaves, named groups hold a nested `Candidates` list. Every leaf carries
//! the key it was stored under (list index or map key), because scalar
//! candidates report that key as their result key.
mod json;

#[cfg(test)]
mod tests;

use crate::{traits::FieldValues, value::Value};
use derive_more::{Deref, IntoIterator};
use std::collections::BTreeMap;

///
/// Candidate
///

#[derive(Clone, Debug, PartialEq)]
pub enum Candidate {
    /// A bare value stored under `key`.
    Scalar { key: Value, value: Value },
    /// A flat key/value record.
    Record(CandidateRecord),
    /// A labelled cluster of nested candidates.
    Group(CandidateGroup),
}

///
/// CandidateRecord
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CandidateRecord(BTreeMap<String, Value>);

impl CandidateRecord {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(field.into(), value.into());
        self
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }
}

impl FieldValues for CandidateRecord {
    fn get_value(&self, field: &str) -> Option<Value> {
        self.get(field).cloned()
    }
}

impl<K, V> FromIterator<(K, V)> for CandidateRecord
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

///
/// CandidateGroup
///

#[derive(Clone, Debug, PartialEq)]
pub struct CandidateGroup {
    pub label: String,
    pub children: Candidates,
}

///
/// Candidates
/// Ordered inline candidate list.
///

#[derive(Clone, Debug, Default, Deref, IntoIterator, PartialEq)]
#[into_iterator(owned, ref)]
pub struct Candidates(Vec<Candidate>);

impl Candidates {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Scalar list keyed by position, e.g. `["Apple", "Apricot"]`.
    #[must_use]
    pub fn from_values<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        values
            .into_iter()
            .enumerate()
            .map(|(index, value)| Candidate::Scalar {
                key: Value::from(index),
                value: value.into(),
            })
            .collect()
    }

    /// Flat record list.
    #[must_use]
    pub fn from_records(records: impl IntoIterator<Item = CandidateRecord>) -> Self {
        records.into_iter().map(Candidate::Record).collect()
    }

    #[must_use]
    pub fn with_value(mut self, key: impl Into<Value>, value: impl Into<Value>) -> Self {
        self.0.push(Candidate::Scalar {
            key: key.into(),
            value: value.into(),
        });
        self
    }

    #[must_use]
    pub fn with_record(mut self, record: CandidateRecord) -> Self {
        self.0.push(Candidate::Record(record));
        self
    }

    #[must_use]
    pub fn with_group(mut self, label: impl Into<String>, children: Self) -> Self {
        self.0.push(Candidate::Group(CandidateGroup {
            label: label.into(),
            children,
        }));
        self
    }
}

impl FromIterator<Candidate> for Candidates {
    fn from_iter<I: IntoIterator<Item = Candidate>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
