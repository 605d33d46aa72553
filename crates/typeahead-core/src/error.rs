use derive_more::Display;
use thiserror::Error as ThisError;

///
/// InternalError
///
/// Structured runtime error with a stable internal classification.
/// Not a stable API; the facade crate maps it onto its public taxonomy.
///

#[derive(Debug, ThisError)]
#[error("{message}")]
pub struct InternalError {
    pub class: ErrorClass,
    pub origin: ErrorOrigin,
    pub message: String,
}

impl InternalError {
    pub fn new(class: ErrorClass, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            class,
            origin,
            message: message.into(),
        }
    }

    /// Construct a query-origin error for a malformed query shape.
    pub(crate) fn query_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorClass::InvalidInput, ErrorOrigin::Query, message)
    }

    /// Construct a query-origin error for a filter the store cannot run.
    pub(crate) fn query_unsupported(message: impl Into<String>) -> Self {
        Self::new(ErrorClass::Unsupported, ErrorOrigin::Query, message)
    }

    /// Construct a pattern-origin internal error.
    pub(crate) fn pattern_internal(message: impl Into<String>) -> Self {
        Self::new(ErrorClass::Internal, ErrorOrigin::Pattern, message)
    }

    /// Construct a source-origin error for a candidate payload that cannot be read.
    pub(crate) fn source_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorClass::InvalidInput, ErrorOrigin::Source, message)
    }

    /// Construct a config-origin error.
    pub(crate) fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorClass::InvalidInput, ErrorOrigin::Config, message)
    }

    /// Construct a store-origin error for a backend that could not answer.
    ///
    /// External `RecordList` implementations use this to surface I/O faults.
    pub fn store_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorClass::Unavailable, ErrorOrigin::Store, message)
    }
}

///
/// ErrorClass
/// Internal error taxonomy for runtime classification.
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum ErrorClass {
    InvalidInput,
    Unsupported,
    Unavailable,
    Internal,
}

///
/// ErrorOrigin
/// Internal origin taxonomy for runtime classification.
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum ErrorOrigin {
    Config,
    Pattern,
    Query,
    Source,
    Store,
}
