//! The typeahead form field.
//!
//! `TypeaheadField` wires a candidate source and per-field configuration to
//! the two JSON endpoints (`suggestion`, `prefetch`), the client widget
//! options, and the require-selection validation hook.
mod client;
mod form;


pub use client::{ClientOptions, QUERY_TEMPLATE};
pub use form::FormContext;

use crate::{Error, response::JsonResponse};
use std::{fmt, sync::Arc};
use tracing::{debug, warn};
use typeahead_core::{
    actor::Actor,
    candidate::Candidates,
    config::{DEFAULT_LIMIT, Limit, MatchMode, Prefetch, TypeaheadConfig},
    engine::{Suggestion, SuggestionEngine, ValidationSink},
    i18n::{DefaultTranslator, NO_MATCHES_DEFAULT, NO_MATCHES_KEY, Translator},
    model::{FieldSpec, RecordModel},
    source::SourceKind,
    value::Value,
};

///
/// BaseValidation
///
/// Validation the surrounding form framework applies to every field. Runs
/// only after the selection check passes.
///

pub trait BaseValidation: Send + Sync {
    fn validate(&self, field: &str, value: &str, sink: &mut dyn ValidationSink) -> bool;
}

///
/// AcceptAll
///

#[derive(Clone, Copy, Debug, Default)]
pub struct AcceptAll;

impl BaseValidation for AcceptAll {
    fn validate(&self, _field: &str, _value: &str, _sink: &mut dyn ValidationSink) -> bool {
        true
    }
}

///
/// TypeaheadField
///
/// Immutable once built; every endpoint takes `&self` plus the requesting
/// actor, so one field can serve concurrent requests.
///

#[derive(Clone)]
pub struct TypeaheadField {
    name: String,
    title: Option<String>,
    value: String,
    source: Option<SourceKind>,
    source_model: Option<&'static RecordModel>,
    config: TypeaheadConfig,
    form: Option<FormContext>,
    translator: Arc<dyn Translator>,
    base: Arc<dyn BaseValidation>,
}

impl TypeaheadField {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: None,
            value: String::new(),
            source: None,
            source_model: None,
            config: TypeaheadConfig::default(),
            form: None,
            translator: Arc::new(DefaultTranslator),
            base: Arc::new(AcceptAll),
        }
    }

    // ------------------------------------------------------------------
    // Builders
    // ------------------------------------------------------------------

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    #[must_use]
    pub fn with_source(mut self, source: impl Into<SourceKind>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Record type searched when the source does not declare its own.
    #[must_use]
    pub const fn with_source_model(mut self, model: &'static RecordModel) -> Self {
        self.source_model = Some(model);
        self
    }

    /// Replace the scaffolded search fields, e.g. `["Name:PartialMatch"]`.
    #[must_use]
    pub fn with_source_field<I>(mut self, fields: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<FieldSpec>,
    {
        self.config.source_field = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    /// Display field; an empty name keeps the current one.
    #[must_use]
    pub fn with_ref_field(mut self, field: impl Into<String>) -> Self {
        let field = field.into();
        if !field.is_empty() {
            self.config.ref_field = field;
        }
        self
    }

    /// Key field; an empty name keeps the current one.
    #[must_use]
    pub fn with_val_field(mut self, field: impl Into<String>) -> Self {
        let field = field.into();
        if !field.is_empty() {
            self.config.val_field = field;
        }
        self
    }

    #[must_use]
    pub fn with_config(mut self, config: TypeaheadConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn with_suggest_url(mut self, url: impl Into<String>) -> Self {
        self.config.suggest_url = Some(url.into());
        self
    }

    #[must_use]
    pub const fn with_limit(mut self, limit: Limit) -> Self {
        self.config.limit = limit;
        self
    }

    #[must_use]
    pub fn with_prefetch(mut self, prefetch: Prefetch) -> Self {
        self.config.prefetch = prefetch;
        self
    }

    #[must_use]
    pub const fn with_min_search_length(mut self, length: u32) -> Self {
        self.config.min_search_length = length;
        self
    }

    #[must_use]
    pub const fn require_selection(mut self, required: bool) -> Self {
        self.config.require_selection = required;
        self
    }

    #[must_use]
    pub fn with_disabled_options<I>(mut self, keys: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.config.disabled_options = keys.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_locked_options<I>(mut self, keys: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.config.locked_options = keys.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub const fn with_match_mode(mut self, mode: MatchMode) -> Self {
        self.config.match_mode = mode;
        self
    }

    #[must_use]
    pub fn with_form(mut self, form: FormContext) -> Self {
        self.form = Some(form);
        self
    }

    #[must_use]
    pub fn with_translator(mut self, translator: impl Translator + 'static) -> Self {
        self.translator = Arc::new(translator);
        self
    }

    #[must_use]
    pub fn with_base_validation(mut self, base: impl BaseValidation + 'static) -> Self {
        self.base = Arc::new(base);
        self
    }

    /// Store the submitted value ahead of validation.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.name)
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub const fn config(&self) -> &TypeaheadConfig {
        &self.config
    }

    /// DOM id: `<form>_<name>` inside a form, else the bare name.
    #[must_use]
    pub fn id(&self) -> String {
        match &self.form {
            Some(form) => format!("{}_{}", form.name(), self.name),
            None => self.name.clone(),
        }
    }

    /// Source filtered in process; `None` when unset or remote.
    #[must_use]
    pub fn source_list(&self) -> Option<&SourceKind> {
        self.source.as_ref().filter(|source| source.is_local())
    }

    /// Record type searched: explicit, then the source's own, then the form's.
    #[must_use]
    pub fn source_model(&self) -> Option<&'static RecordModel> {
        self.source_model
            .or_else(|| self.source.as_ref().and_then(SourceKind::model))
            .or_else(|| self.form_model())
    }

    fn form_model(&self) -> Option<&'static RecordModel> {
        self.form.as_ref().and_then(FormContext::record_model)
    }

    /// Live-search URL: a remote source, then the configured URL, then the
    /// form link. Empty when none applies.
    #[must_use]
    pub fn suggest_url(&self) -> String {
        if let Some(url) = self.source.as_ref().and_then(SourceKind::remote_url) {
            return url.to_string();
        }
        if let Some(url) = &self.config.suggest_url {
            return url.clone();
        }

        self.form
            .as_ref()
            .map(|form| form.field_link(&self.name, "suggestion"))
            .unwrap_or_default()
    }

    #[must_use]
    pub fn prefetch_url(&self) -> Option<String> {
        if let Some(url) = self.config.prefetch.remote_url() {
            return Some(url.to_string());
        }
        if !self.config.prefetch.is_enabled() {
            return None;
        }

        self.form
            .as_ref()
            .map(|form| form.field_link(&self.name, "prefetch"))
    }

    // ------------------------------------------------------------------
    // Endpoints
    // ------------------------------------------------------------------

    ///
    /// results
    ///
    /// Run one query against the local source. No local source yields an
    /// empty list.
    ///
    pub fn results(
        &self,
        query: &str,
        actor: &Actor,
        limit: Option<usize>,
    ) -> Result<Vec<Suggestion>, Error> {
        let Some(source) = self.source_list() else {
            return Ok(Vec::new());
        };

        Ok(self.engine(actor).results(query, source, None, limit)?)
    }

    /// `suggestion?q=...` handler.
    pub fn suggestion(&self, query: Option<&str>, actor: &Actor) -> Result<JsonResponse, Error> {
        if self.source_list().is_none() {
            warn!(field = %self.name, "suggestion requested without a local source");
            return Ok(JsonResponse::fail(&[] as &[Suggestion])?);
        }

        let query = query.unwrap_or_default();
        let results = self.results(query, actor, self.config.limit.effective())?;
        debug!(field = %self.name, query, results = results.len(), "suggestion served");

        Ok(JsonResponse::ok(&results)?)
    }

    /// `prefetch` handler.
    pub fn prefetch(&self, actor: &Actor) -> Result<JsonResponse, Error> {
        let results = self.results("", actor, self.config.prefetch.effective())?;
        debug!(field = %self.name, results = results.len(), "prefetch served");

        Ok(JsonResponse::ok(&results)?)
    }

    /// Options for the client widget. Outside a form the unfiltered result
    /// set is embedded as local data.
    pub fn client_options(&self, actor: &Actor) -> Result<ClientOptions, Error> {
        let suggest_url = Some(self.suggest_url())
            .filter(|url| !url.is_empty())
            .map(|url| format!("{url}{QUERY_TEMPLATE}"));

        let local = if self.form.is_none() {
            let results = self.results("", actor, Some(DEFAULT_LIMIT))?;
            Some(serde_json::to_string(&results)?)
        } else {
            None
        };

        Ok(ClientOptions {
            suggest_url,
            prefetch_url: self.prefetch_url(),
            min_length: self.config.min_search_length,
            require_selection: self.config.require_selection,
            name: self.id().to_lowercase(),
            empty_template: self.translator.translate(NO_MATCHES_KEY, NO_MATCHES_DEFAULT),
            autocomplete: "off".to_string(),
            local,
        })
    }

    ///
    /// validate
    ///
    /// With require-selection on, the current value must produce at least one
    /// suggestion; otherwise one issue is reported and base validation is
    /// skipped.
    ///
    pub fn validate(&self, actor: &Actor, sink: &mut dyn ValidationSink) -> Result<bool, Error> {
        // Without a local source nothing can match.
        let empty = SourceKind::inline(Candidates::new());
        let source = self.source_list().unwrap_or(&empty);

        let selected = self.engine(actor).validate_selection(
            &self.name,
            &self.value,
            source,
            None,
            sink,
            self.translator.as_ref(),
        )?;
        if !selected {
            return Ok(false);
        }

        Ok(self.base.validate(&self.name, &self.value, sink))
    }

    fn engine<'a>(&'a self, actor: &'a Actor) -> SuggestionEngine<'a> {
        SuggestionEngine::new(&self.config, actor)
            .with_model(self.source_model.or_else(|| self.form_model()))
    }
}

impl fmt::Debug for TypeaheadField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeaheadField")
            .field("name", &self.name)
            .field("value", &self.value)
            .field("source", &self.source)
            .field("config", &self.config)
            .field("form", &self.form)
            .finish_non_exhaustive()
    }
}
