use crate::{
    error::InternalError,
    model::RecordModel,
    query::{Direction, ListQuery, QueryError, eval},
    traits::{Record, RecordKind},
};
use std::cmp::Ordering;

///
/// RecordList
///
/// A queryable collection of typed records backed by a record store.
///
/// Implementations validate and execute a `ListQuery` synchronously. Store
/// failures are returned as `InternalError` and travel to the caller
/// untouched; the engine never retries.
///

pub trait RecordList: Send + Sync {
    /// Model of the record type this collection yields.
    fn model(&self) -> &'static RecordModel;

    /// Execute the query and materialize matching rows in order.
    fn execute(&self, query: &ListQuery) -> Result<Vec<Box<dyn Record>>, InternalError>;

    /// Whether the query matches at least one row.
    fn exists(&self, query: &ListQuery) -> Result<bool, InternalError> {
        Ok(!self.execute(query)?.is_empty())
    }
}

///
/// MemoryStore
///
/// In-memory `RecordList` over owned rows of one record type.
///

#[derive(Clone, Debug)]
pub struct MemoryStore<R> {
    rows: Vec<R>,
}

impl<R> MemoryStore<R> {
    #[must_use]
    pub const fn new(rows: Vec<R>) -> Self {
        Self { rows }
    }

    #[must_use]
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<R> MemoryStore<R>
where
    R: RecordKind + Record,
{
    // Validate field references up front so bad queries fail even when the
    // store is empty.
    fn validate(query: &ListQuery) -> Result<(), QueryError> {
        let model = R::MODEL;

        if let Some(predicate) = query.predicate() {
            eval::validate(model, predicate)?;
        }
        if let Some(order) = query.order_spec()
            && !model.has_field(&order.field)
        {
            return Err(QueryError::UnknownField {
                record: model.record_name,
                field: order.field.clone(),
            });
        }

        Ok(())
    }

    fn select(&self, query: &ListQuery) -> Vec<&R> {
        let mut rows: Vec<&R> = self
            .rows
            .iter()
            .filter(|row| query.predicate().is_none_or(|p| eval::eval(*row, p)))
            .collect();

        if let Some(order) = query.order_spec() {
            // Stable sort keeps insertion order for equal keys.
            rows.sort_by(|a, b| {
                let ord = match (a.get_value(&order.field), b.get_value(&order.field)) {
                    (Some(a), Some(b)) => a.canonical_cmp(&b),
                    (None, Some(_)) => Ordering::Less,
                    (Some(_), None) => Ordering::Greater,
                    (None, None) => Ordering::Equal,
                };
                match order.direction {
                    Direction::Asc => ord,
                    Direction::Desc => ord.reverse(),
                }
            });
        }

        if let Some(limit) = query.row_limit() {
            rows.truncate(limit);
        }

        rows
    }
}

impl<R> RecordList for MemoryStore<R>
where
    R: RecordKind + Record + Clone + Send + Sync + 'static,
{
    fn model(&self) -> &'static RecordModel {
        R::MODEL
    }

    fn execute(&self, query: &ListQuery) -> Result<Vec<Box<dyn Record>>, InternalError> {
        Self::validate(query)?;

        Ok(self
            .select(query)
            .into_iter()
            .map(|row| Box::new(row.clone()) as Box<dyn Record>)
            .collect())
    }

    fn exists(&self, query: &ListQuery) -> Result<bool, InternalError> {
        Self::validate(query)?;

        Ok(!self.select(query).is_empty())
    }
}

///
/// TESTS
///
