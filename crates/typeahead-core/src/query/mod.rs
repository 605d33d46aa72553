pub mod eval;
pub mod predicate;


pub use predicate::{FieldFilter, Predicate};

use crate::error::InternalError;
use derive_more::Display;
use thiserror::Error as ThisError;

///
/// QueryError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum QueryError {
    #[error("unknown field '{field}' on record type '{record}'")]
    UnknownField { record: &'static str, field: String },

    #[error("filter '{filter}' on field '{field}' is not supported by this store")]
    UnsupportedFilter { field: String, filter: String },
}

impl From<QueryError> for InternalError {
    fn from(err: QueryError) -> Self {
        match err {
            QueryError::UnknownField { .. } => Self::query_invalid(err.to_string()),
            QueryError::UnsupportedFilter { .. } => Self::query_unsupported(err.to_string()),
        }
    }
}

///
/// Direction
///

#[derive(Clone, Copy, Debug, Default, Display, Eq, PartialEq)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

///
/// OrderSpec
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OrderSpec {
    pub field: String,
    pub direction: Direction,
}

///
/// ListQuery
///
/// Store-agnostic query intent: an optional filter, an optional single sort
/// key, and an optional row cap. Builders are pure; the store validates and
/// executes.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListQuery {
    predicate: Option<Predicate>,
    order: Option<OrderSpec>,
    limit: Option<usize>,
}

impl ListQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Intent builders (pure)
    // ------------------------------------------------------------------

    /// Add a predicate; repeated calls are combined with AND.
    #[must_use]
    pub fn filter(mut self, predicate: Predicate) -> Self {
        self.predicate = Some(match self.predicate.take() {
            Some(existing) => Predicate::and(vec![existing, predicate]),
            None => predicate,
        });
        self
    }

    /// Add an any-of filter across the given field filters.
    #[must_use]
    pub fn filter_any(self, filters: impl IntoIterator<Item = FieldFilter>) -> Self {
        self.filter(Predicate::any_of(filters))
    }

    #[must_use]
    pub fn order_by(self, field: impl Into<String>) -> Self {
        self.order(field, Direction::Asc)
    }

    #[must_use]
    pub fn order_by_desc(self, field: impl Into<String>) -> Self {
        self.order(field, Direction::Desc)
    }

    fn order(mut self, field: impl Into<String>, direction: Direction) -> Self {
        self.order = Some(OrderSpec {
            field: field.into(),
            direction,
        });
        self
    }

    /// Bound the number of returned rows.
    #[must_use]
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    // ------------------------------------------------------------------
    // Intent inspection
    // ------------------------------------------------------------------

    #[must_use]
    pub const fn predicate(&self) -> Option<&Predicate> {
        self.predicate.as_ref()
    }

    #[must_use]
    pub const fn order_spec(&self) -> Option<&OrderSpec> {
        self.order.as_ref()
    }

    #[must_use]
    pub const fn row_limit(&self) -> Option<usize> {
        self.limit
    }
}
