use super::{SuggestionEngine, shape::ResultRecord};
use crate::{
    error::InternalError,
    model::{FilterKind, RecordModel},
    query::{FieldFilter, ListQuery},
    store::RecordList,
};
use tracing::debug;

impl SuggestionEngine<'_> {
    ///
    /// filter_list
    ///
    /// Query a record store: any-of over the scaffolded fields, ascending by
    /// the first field, capped at `limit`. An existence check runs before the
    /// rows are materialized. Store errors are returned as-is.
    ///
    pub(super) fn filter_list(
        &self,
        query: &str,
        list: &dyn RecordList,
        model: &'static RecordModel,
        limit: Option<usize>,
    ) -> Result<Vec<ResultRecord>, InternalError> {
        let specs = self.scaffold(model);

        let Some(first) = specs.first() else {
            // Nothing to search or sort by.
            if !query.is_empty() {
                debug!(record = model.record_name, "no search fields; query skipped");
                return Ok(Vec::new());
            }

            let records = list.execute(&Self::capped(ListQuery::new(), limit))?;
            return Ok(self.shaper().results_to_map(records, self.actor));
        };

        let mut plan = ListQuery::new();
        if !query.is_empty() {
            plan = plan.filter_any(specs.iter().map(|spec| {
                let kind = spec.filter.clone().unwrap_or(FilterKind::StartsWith);
                FieldFilter::new(spec.field.clone(), kind, query)
            }));
        }
        let plan = Self::capped(plan.order_by(first.field.clone()), limit);

        if !list.exists(&plan)? {
            debug!(record = model.record_name, query, "record store has no matches");
            return Ok(Vec::new());
        }

        let records = list.execute(&plan)?;
        debug!(
            record = model.record_name,
            query,
            rows = records.len(),
            "record store queried"
        );

        Ok(self.shaper().results_to_map(records, self.actor))
    }

    fn capped(plan: ListQuery, limit: Option<usize>) -> ListQuery {
        match limit {
            Some(limit) => plan.limit(limit),
            None => plan,
        }
    }
}
