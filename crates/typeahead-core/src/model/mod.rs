//! Runtime record-type declarations.
//!
//! A `RecordModel` is the static description of one record type: which
//! fields exist and which of them are declared searchable (and how). The
//! scaffolder reads nothing else, so any store can participate by exposing
//! a model for its record type.
pub mod field;
pub mod record;

pub use field::{FieldSpec, FilterKind, SearchableFieldModel};
pub use record::RecordModel;
