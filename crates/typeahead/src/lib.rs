//! Typeahead: server-side suggestions for autocomplete inputs.
//!
//! This is the public crate. Downstream users depend on **typeahead** only.
//!
//! ## Crate layout
//! - `core`: the engine (candidate sources, record models, matching, shaping).
//! - `field`: `TypeaheadField`, its endpoints, client options and validation.
//! - `response`: the JSON response both endpoints return.
//! - `error`: the public error taxonomy.

pub use typeahead_core as core;

pub mod error;
pub mod field;
pub mod response;

pub use error::Error;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        Error,
        field::{FormContext, TypeaheadField},
        response::JsonResponse,
    };
    pub use typeahead_core::{
        config::{Limit, MatchMode, Prefetch},
        engine::{Suggestion, ValidationIssue},
        prelude::*,
        store::{MemoryStore, RecordList},
    };
}
