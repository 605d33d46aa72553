use crate::{
    candidate::{Candidate, CandidateGroup, CandidateRecord, Candidates},
    error::InternalError,
    value::Value,
};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value as JsonValue};

impl Candidates {
    /// Build an inline source from JSON.
    ///
    /// Arrays become ordered lists keyed by index: objects inside them are
    /// flat records, scalars are scalar entries. Objects become keyed lists:
    /// array or object values are named groups, scalars are scalar entries
    /// keyed by the property name.
    pub fn from_json(json: &JsonValue) -> Result<Self, InternalError> {
        match json {
            JsonValue::Array(items) => Ok(items
                .iter()
                .enumerate()
                .map(|(index, item)| list_entry(index, item))
                .collect()),
            JsonValue::Object(entries) => entries
                .iter()
                .map(|(key, item)| keyed_entry(key, item))
                .collect(),
            other => Err(InternalError::source_invalid(format!(
                "candidate source must be a JSON array or object, found {}",
                json_kind(other)
            ))),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, InternalError> {
        let json: JsonValue = serde_json::from_str(json)
            .map_err(|err| InternalError::source_invalid(format!("invalid candidate JSON: {err}")))?;

        Self::from_json(&json)
    }
}

impl<'de> Deserialize<'de> for Candidates {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let json = JsonValue::deserialize(deserializer)?;

        Self::from_json(&json).map_err(serde::de::Error::custom)
    }
}

fn list_entry(index: usize, item: &JsonValue) -> Candidate {
    match item {
        JsonValue::Object(fields) => Candidate::Record(record(fields)),
        JsonValue::Array(items) => Candidate::Record(
            items
                .iter()
                .enumerate()
                .map(|(i, v)| (i.to_string(), scalar(v)))
                .collect(),
        ),
        other => Candidate::Scalar {
            key: Value::from(index),
            value: scalar(other),
        },
    }
}

fn keyed_entry(key: &str, item: &JsonValue) -> Result<Candidate, InternalError> {
    match item {
        JsonValue::Array(_) | JsonValue::Object(_) => Ok(Candidate::Group(CandidateGroup {
            label: key.to_string(),
            children: Candidates::from_json(item)?,
        })),
        other => Ok(Candidate::Scalar {
            key: Value::from(key),
            value: scalar(other),
        }),
    }
}

fn record(fields: &Map<String, JsonValue>) -> CandidateRecord {
    fields.iter().map(|(k, v)| (k.as_str(), scalar(v))).collect()
}

// Nested structures inside a record are not displayable; they collapse to Null.
fn scalar(json: &JsonValue) -> Value {
    match json {
        JsonValue::Bool(b) => Value::Bool(*b),
        JsonValue::Number(n) => {
            if let Some(v) = n.as_i64() {
                Value::Int(v)
            } else if let Some(v) = n.as_u64() {
                Value::Uint(v)
            } else {
                n.as_f64().map_or(Value::Null, Value::Float)
            }
        }
        JsonValue::String(s) => Value::Text(s.clone()),
        JsonValue::Null | JsonValue::Array(_) | JsonValue::Object(_) => Value::Null,
    }
}

const fn json_kind(json: &JsonValue) -> &'static str {
    match json {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}
