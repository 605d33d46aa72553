//! Suggestion engine.
//!
//! Every request (live suggestion, prefetch, selection validation, inline
//! local data) enters through `SuggestionEngine::results`, which resolves
//! the source shape once and dispatches to the inline-array engine or the
//! queryable-list engine.
mod array;
mod list;
pub mod pattern;
pub mod scaffold;
pub mod shape;
pub mod validate;

#[cfg(test)]
mod tests;

pub use pattern::{Anchor, MatchPattern};
pub use scaffold::scaffold_search_fields;
pub use shape::{ResultGroup, ResultRecord, ResultShaper, Suggestion};
pub use validate::{ValidationIssue, ValidationKind, ValidationSink};

use crate::{
    actor::Actor,
    config::TypeaheadConfig,
    error::InternalError,
    model::{FieldSpec, RecordModel},
    source::{ResolvedSource, SourceKind},
};
use tracing::{debug, trace};

///
/// SuggestionEngine
///
/// Request-scoped view over read-only configuration. Holds no mutable state;
/// build one per request.
///

#[derive(Clone, Copy, Debug)]
pub struct SuggestionEngine<'a> {
    config: &'a TypeaheadConfig,
    actor: &'a Actor,
    model: Option<&'static RecordModel>,
}

impl<'a> SuggestionEngine<'a> {
    #[must_use]
    pub const fn new(config: &'a TypeaheadConfig, actor: &'a Actor) -> Self {
        Self {
            config,
            actor,
            model: None,
        }
    }

    /// Record model used when neither the caller nor the source supplies one.
    #[must_use]
    pub const fn with_model(mut self, model: Option<&'static RecordModel>) -> Self {
        self.model = model;
        self
    }

    #[must_use]
    pub const fn config(&self) -> &'a TypeaheadConfig {
        self.config
    }

    #[must_use]
    pub const fn shaper(&self) -> ResultShaper<'a> {
        ResultShaper::new(self.config)
    }

    /// Search scaffold for `model`, honoring the configured override.
    #[must_use]
    pub fn scaffold(&self, model: &RecordModel) -> Vec<FieldSpec> {
        scaffold_search_fields(model, self.config.source_field.as_deref())
    }

    ///
    /// results
    ///
    /// Run one query against `source`.
    ///
    /// Model precedence: `model`, then the queryable source's own model, then
    /// the engine's fallback. A deferred source is invoked exactly once; a
    /// remote source yields nothing locally.
    ///
    pub fn results(
        &self,
        query: &str,
        source: &SourceKind,
        model: Option<&'static RecordModel>,
        limit: Option<usize>,
    ) -> Result<Vec<Suggestion>, InternalError> {
        match source {
            SourceKind::InlineList(candidates) => {
                self.filter_array(query, candidates, model.or(self.model), limit)
            }
            SourceKind::Queryable(list) => {
                let model = model.unwrap_or_else(|| list.model());
                let records = self.filter_list(query, list.as_ref(), model, limit)?;

                Ok(records.into_iter().map(Suggestion::Record).collect())
            }
            SourceKind::Deferred(produce) => {
                trace!(query, "resolving deferred source");
                let resolved = produce(query);

                self.results(query, &resolved.into(), model, limit)
            }
            SourceKind::Remote(url) => {
                debug!(url = %url, "suggestions delegated to remote endpoint");
                Ok(Vec::new())
            }
        }
    }
}

impl From<ResolvedSource> for SourceKind {
    fn from(resolved: ResolvedSource) -> Self {
        match resolved {
            ResolvedSource::InlineList(candidates) => Self::InlineList(candidates),
            ResolvedSource::Queryable(list) => Self::Queryable(list),
        }
    }
}
