use crate::{candidate::Candidates, model::RecordModel, store::RecordList};
use std::{fmt, sync::Arc};

/// Shared handle to a queryable collection.
pub type SharedList = Arc<dyn RecordList>;

/// Source produced per query; invoked at most once per `results` call.
pub type DeferredSource = Arc<dyn Fn(&str) -> ResolvedSource + Send + Sync>;

///
/// SourceKind
///
/// Where suggestions come from. Resolved once per request.
///

#[derive(Clone)]
pub enum SourceKind {
    /// Inline candidates filtered in process.
    InlineList(Candidates),
    /// A record store queried per request.
    Queryable(SharedList),
    /// A function of the query producing one of the local shapes.
    Deferred(DeferredSource),
    /// Suggestions are served by another endpoint; nothing runs locally.
    Remote(String),
}

impl SourceKind {
    #[must_use]
    pub const fn inline(candidates: Candidates) -> Self {
        Self::InlineList(candidates)
    }

    #[must_use]
    pub fn queryable(list: impl RecordList + 'static) -> Self {
        Self::Queryable(Arc::new(list))
    }

    #[must_use]
    pub fn deferred<F>(f: F) -> Self
    where
        F: Fn(&str) -> ResolvedSource + Send + Sync + 'static,
    {
        Self::Deferred(Arc::new(f))
    }

    #[must_use]
    pub fn remote(url: impl Into<String>) -> Self {
        Self::Remote(url.into())
    }

    #[must_use]
    pub fn remote_url(&self) -> Option<&str> {
        match self {
            Self::Remote(url) => Some(url),
            _ => None,
        }
    }

    /// True for every shape that is filtered in process.
    #[must_use]
    pub const fn is_local(&self) -> bool {
        !matches!(self, Self::Remote(_))
    }

    /// Record model of a queryable source, if known without running a query.
    #[must_use]
    pub fn model(&self) -> Option<&'static RecordModel> {
        match self {
            Self::Queryable(list) => Some(list.model()),
            _ => None,
        }
    }
}

impl fmt::Debug for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InlineList(candidates) => f.debug_tuple("InlineList").field(candidates).finish(),
            Self::Queryable(list) => f
                .debug_tuple("Queryable")
                .field(&list.model().record_name)
                .finish(),
            Self::Deferred(_) => f.write_str("Deferred(..)"),
            Self::Remote(url) => f.debug_tuple("Remote").field(url).finish(),
        }
    }
}

impl From<Candidates> for SourceKind {
    fn from(candidates: Candidates) -> Self {
        Self::InlineList(candidates)
    }
}

///
/// ResolvedSource
/// Local source shape returned by a deferred source.
///

#[derive(Clone)]
pub enum ResolvedSource {
    InlineList(Candidates),
    Queryable(SharedList),
}

impl ResolvedSource {
    #[must_use]
    pub fn queryable(list: impl RecordList + 'static) -> Self {
        Self::Queryable(Arc::new(list))
    }
}

impl From<Candidates> for ResolvedSource {
    fn from(candidates: Candidates) -> Self {
        Self::InlineList(candidates)
    }
}
