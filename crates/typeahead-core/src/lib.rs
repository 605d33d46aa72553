//! Core engine for typeahead suggestions: candidate sources, record models,
//! the query surface a record store answers, and the matching and shaping
//! pipeline behind every suggestion, prefetch and validation request.

// public exports are one module level down
pub mod actor;
pub mod candidate;
pub mod config;
pub mod engine;
pub mod error;
pub mod i18n;
pub mod model;
pub mod query;
pub mod source;
pub mod store;
pub mod traits;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, engines, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        actor::Actor,
        candidate::{CandidateRecord, Candidates},
        config::TypeaheadConfig,
        model::{FieldSpec, FilterKind, RecordModel, SearchableFieldModel},
        source::SourceKind,
        traits::{FieldValues, Record, RecordKind},
        value::Value,
    };
}
