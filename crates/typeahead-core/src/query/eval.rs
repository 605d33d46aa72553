use crate::{
    model::{FilterKind, RecordModel},
    query::{
        QueryError,
        predicate::{FieldFilter, Predicate},
    },
    traits::FieldValues,
    value::{TextMode, Value},
};

///
/// Validate a predicate against a record model.
///
/// Rejects unknown field names and filters the evaluator cannot run.
///
pub fn validate(model: &RecordModel, predicate: &Predicate) -> Result<(), QueryError> {
    let mut result = Ok(());

    predicate.for_each_filter(&mut |filter| {
        if result.is_err() {
            return;
        }
        result = validate_filter(model, filter);
    });

    result
}

fn validate_filter(model: &RecordModel, filter: &FieldFilter) -> Result<(), QueryError> {
    if !model.has_field(&filter.field) {
        return Err(QueryError::UnknownField {
            record: model.record_name,
            field: filter.field.clone(),
        });
    }

    if let FilterKind::Custom(name) = &filter.kind {
        return Err(QueryError::UnsupportedFilter {
            field: filter.field.clone(),
            filter: name.clone(),
        });
    }

    Ok(())
}

///
/// Evaluate a predicate against a single row.
///
/// Text filters are case-insensitive, matching the default collation of
/// typical text columns. A missing field never matches.
/// CONTRACT: predicates must be validated before evaluation.
///
#[must_use]
pub fn eval<R: FieldValues + ?Sized>(row: &R, predicate: &Predicate) -> bool {
    match predicate {
        Predicate::And(children) => children.iter().all(|child| eval(row, child)),
        Predicate::Or(children) => children.iter().any(|child| eval(row, child)),
        Predicate::Filter(filter) => eval_filter(row, filter),
    }
}

fn eval_filter<R: FieldValues + ?Sized>(row: &R, filter: &FieldFilter) -> bool {
    let Some(actual) = row.get_value(&filter.field) else {
        return false;
    };
    if matches!(actual, Value::Null) {
        return false;
    }

    let needle = &filter.value;
    match filter.kind {
        FilterKind::StartsWith => actual.text_starts_with(needle, TextMode::Ci),
        FilterKind::EndsWith => actual.text_ends_with(needle, TextMode::Ci),
        FilterKind::PartialMatch => actual.text_contains(needle, TextMode::Ci),
        FilterKind::ExactMatch => actual.text_eq(needle, TextMode::Ci),
        FilterKind::Custom(_) => false,
    }
}
