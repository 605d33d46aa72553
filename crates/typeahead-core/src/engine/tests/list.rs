use super::texts;
use crate::{
    actor::Actor,
    config::TypeaheadConfig,
    engine::SuggestionEngine,
    error::{ErrorClass, ErrorOrigin, InternalError},
    model::{FieldSpec, RecordModel},
    query::ListQuery,
    source::SourceKind,
    store::RecordList,
    test_fixtures::{BARE_MODEL, PRODUCT_MODEL, fruit_store},
    traits::Record,
    value::Value,
};
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

///
/// ScriptedList
/// Store double with no rows that counts existence checks and executions.
///

struct ScriptedList {
    model: &'static RecordModel,
    checks: Arc<AtomicUsize>,
    executions: Arc<AtomicUsize>,
    fail: bool,
}

impl ScriptedList {
    fn new(model: &'static RecordModel, fail: bool) -> Self {
        Self {
            model,
            checks: Arc::new(AtomicUsize::new(0)),
            executions: Arc::new(AtomicUsize::new(0)),
            fail,
        }
    }

    fn counters(&self) -> (Arc<AtomicUsize>, Arc<AtomicUsize>) {
        (Arc::clone(&self.checks), Arc::clone(&self.executions))
    }
}

impl RecordList for ScriptedList {
    fn model(&self) -> &'static RecordModel {
        self.model
    }

    fn execute(&self, _query: &ListQuery) -> Result<Vec<Box<dyn Record>>, InternalError> {
        self.executions.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(InternalError::store_unavailable("backend offline"));
        }

        Ok(Vec::new())
    }

    fn exists(&self, _query: &ListQuery) -> Result<bool, InternalError> {
        self.checks.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(InternalError::store_unavailable("backend offline"));
        }

        Ok(false)
    }
}

fn config_by_id() -> TypeaheadConfig {
    TypeaheadConfig {
        val_field: "ID".to_string(),
        ..TypeaheadConfig::default()
    }
}

#[test]
fn queries_sort_by_title_and_skip_hidden_rows() {
    let config = config_by_id();
    let actor = Actor::anonymous();
    let source = SourceKind::queryable(fruit_store());

    let results = SuggestionEngine::new(&config, &actor)
        .results("AP", &source, None, Some(10))
        .expect("query should execute");

    assert_eq!(texts(&results), vec!["Apple", "apricot"]);
    let keys: Vec<_> = results
        .iter()
        .filter_map(|entry| entry.as_record())
        .map(|record| record.key.clone())
        .collect();
    assert_eq!(keys, vec![Value::Uint(3), Value::Uint(2)]);
}

#[test]
fn privileged_actors_see_hidden_rows() {
    let config = config_by_id();
    let admin = Actor::member("root").with_role("admin");
    let source = SourceKind::queryable(fruit_store());

    let results = SuggestionEngine::new(&config, &admin)
        .results("ap", &source, None, Some(10))
        .expect("query should execute");

    assert_eq!(texts(&results), vec!["Apple", "Apple Secret", "apricot"]);
}

#[test]
fn limit_applies_before_view_checks() {
    let config = config_by_id();
    let actor = Actor::anonymous();
    let source = SourceKind::queryable(fruit_store());

    let results = SuggestionEngine::new(&config, &actor)
        .results("", &source, None, Some(3))
        .expect("query should execute");

    assert_eq!(texts(&results), vec!["Apple", "apricot"]);
}

#[test]
fn override_fields_use_their_declared_filter() {
    let config = TypeaheadConfig {
        source_field: Some(vec![FieldSpec::parse("Colour:PartialMatch")]),
        ..config_by_id()
    };
    let actor = Actor::anonymous();
    let source = SourceKind::queryable(fruit_store());

    let results = SuggestionEngine::new(&config, &actor)
        .results("e", &source, None, None)
        .expect("query should execute");

    // Sorted by colour: green (hidden), orange, red, red, yellow.
    assert_eq!(texts(&results), vec!["apricot", "Apple", "Cherry", "Banana"]);
}

#[test]
fn unknown_search_field_propagates_as_error() {
    let config = TypeaheadConfig {
        source_field: Some(vec![FieldSpec::new("Weight")]),
        ..TypeaheadConfig::default()
    };
    let actor = Actor::anonymous();
    let source = SourceKind::queryable(fruit_store());

    let err = SuggestionEngine::new(&config, &actor)
        .results("ap", &source, None, Some(10))
        .expect_err("unknown field should fail");

    assert_eq!(err.origin, ErrorOrigin::Query);
    assert!(err.message.contains("Weight"));
}

#[test]
fn explicit_model_takes_precedence_over_the_source() {
    let config = TypeaheadConfig::default();
    let actor = Actor::anonymous();
    let source = SourceKind::queryable(fruit_store());

    // Product's scaffold names fields the fruit store does not have.
    let err = SuggestionEngine::new(&config, &actor)
        .results("ap", &source, Some(&PRODUCT_MODEL), Some(10))
        .expect_err("foreign model fields should fail");

    assert_eq!(err.origin, ErrorOrigin::Query);
}

#[test]
fn store_failures_are_not_retried() {
    let config = TypeaheadConfig::default();
    let actor = Actor::anonymous();
    let list = ScriptedList::new(&PRODUCT_MODEL, true);
    let (checks, executions) = list.counters();
    let source = SourceKind::queryable(list);

    let err = SuggestionEngine::new(&config, &actor)
        .results("ap", &source, None, Some(10))
        .expect_err("store failure should propagate");

    assert_eq!(err.class, ErrorClass::Unavailable);
    assert_eq!(checks.load(Ordering::SeqCst), 1);
    assert_eq!(executions.load(Ordering::SeqCst), 0);
}

#[test]
fn queries_without_matches_skip_execution() {
    let config = TypeaheadConfig::default();
    let actor = Actor::anonymous();
    let list = ScriptedList::new(&PRODUCT_MODEL, false);
    let (checks, executions) = list.counters();
    let source = SourceKind::queryable(list);

    let results = SuggestionEngine::new(&config, &actor)
        .results("ap", &source, None, Some(10))
        .expect("query should execute");

    assert!(results.is_empty());
    assert_eq!(checks.load(Ordering::SeqCst), 1);
    assert_eq!(executions.load(Ordering::SeqCst), 0);
}

#[test]
fn no_search_fields_skips_non_empty_queries() {
    let config = TypeaheadConfig::default();
    let actor = Actor::anonymous();
    let list = ScriptedList::new(&BARE_MODEL, false);
    let (checks, executions) = list.counters();
    let source = SourceKind::queryable(list);
    let engine = SuggestionEngine::new(&config, &actor);

    let searched = engine
        .results("ap", &source, None, Some(10))
        .expect("empty scaffold should not fail");
    assert!(searched.is_empty());
    assert_eq!(checks.load(Ordering::SeqCst), 0);
    assert_eq!(executions.load(Ordering::SeqCst), 0);

    let listed = engine
        .results("", &source, None, Some(10))
        .expect("unfiltered listing should run");
    assert!(listed.is_empty());
    assert_eq!(executions.load(Ordering::SeqCst), 1);
}
