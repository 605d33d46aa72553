use super::SuggestionEngine;
use crate::{
    config::DEFAULT_LIMIT,
    error::InternalError,
    i18n::{INVALID_DEFAULT, INVALID_KEY, Translator},
    model::RecordModel,
    source::SourceKind,
};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::warn;

///
/// ValidationKind
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Display, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationKind {
    #[default]
    #[display("validation")]
    Validation,
}

///
/// ValidationIssue
/// One field-scoped failure, as collected by a sink.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ValidationIssue {
    pub field: String,
    pub message: String,
    pub kind: ValidationKind,
}

///
/// ValidationSink
///
/// Receives validation failures. Failures are collected, never raised.
///

pub trait ValidationSink {
    fn validation_error(&mut self, field: &str, message: &str, kind: ValidationKind);
}

impl ValidationSink for Vec<ValidationIssue> {
    fn validation_error(&mut self, field: &str, message: &str, kind: ValidationKind) {
        self.push(ValidationIssue {
            field: field.to_string(),
            message: message.to_string(),
            kind,
        });
    }
}

impl SuggestionEngine<'_> {
    ///
    /// validate_selection
    ///
    /// Re-run the suggestion pipeline against a submitted value. When
    /// selection is required and nothing matches, exactly one error is
    /// reported for `field` and `Ok(false)` is returned. A store failure is
    /// an `Err`, not a validation failure.
    ///
    pub fn validate_selection(
        &self,
        field: &str,
        submitted: &str,
        source: &SourceKind,
        model: Option<&'static RecordModel>,
        sink: &mut dyn ValidationSink,
        translator: &dyn Translator,
    ) -> Result<bool, InternalError> {
        if !self.config.require_selection {
            return Ok(true);
        }

        let results = self.results(submitted, source, model, Some(DEFAULT_LIMIT))?;
        if !results.is_empty() {
            return Ok(true);
        }

        warn!(field, submitted, "submitted value matches no suggestion");
        sink.validation_error(
            field,
            &translator.translate(INVALID_KEY, INVALID_DEFAULT),
            ValidationKind::Validation,
        );

        Ok(false)
    }
}
