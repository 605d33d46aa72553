use derive_more::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;
use typeahead_core::{
    config::ConfigError,
    error::{ErrorClass, ErrorOrigin as CoreErrorOrigin, InternalError},
};

///
/// Error
/// Public error type with a stable kind + origin taxonomy.
///

#[derive(Debug, Deserialize, Serialize, ThisError)]
#[error("{message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub origin: ErrorOrigin,
    pub message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            kind,
            origin,
            message: message.into(),
        }
    }
}

impl From<InternalError> for Error {
    fn from(err: InternalError) -> Self {
        let kind = match (err.class, err.origin) {
            (ErrorClass::InvalidInput, CoreErrorOrigin::Query) => {
                ErrorKind::Query(QueryErrorKind::Invalid)
            }
            (ErrorClass::Unsupported, _) => ErrorKind::Query(QueryErrorKind::Unsupported),
            (ErrorClass::Unavailable, _) => ErrorKind::Store(StoreErrorKind::Unavailable),
            (ErrorClass::InvalidInput, CoreErrorOrigin::Config) => ErrorKind::Config,
            (ErrorClass::InvalidInput, CoreErrorOrigin::Source) => ErrorKind::Source,
            _ => ErrorKind::Internal,
        };

        Self::new(kind, err.origin.into(), err.message)
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        InternalError::from(err).into()
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::new(ErrorKind::Internal, ErrorOrigin::Serialize, err.to_string())
    }
}

///
/// ErrorKind
/// Public error taxonomy for callers and HTTP adapters.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ErrorKind {
    Query(QueryErrorKind),
    Store(StoreErrorKind),

    /// Configuration could not be loaded.
    Config,

    /// An inline candidate payload could not be read.
    Source,

    /// The caller cannot remediate this.
    Internal,
}

///
/// QueryErrorKind
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum QueryErrorKind {
    /// Query names fields the record type does not have.
    Invalid,

    /// The store cannot run the requested filter.
    Unsupported,
}

///
/// StoreErrorKind
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum StoreErrorKind {
    Unavailable,
}

///
/// ErrorOrigin
/// Public origin taxonomy.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum ErrorOrigin {
    Config,
    Pattern,
    Query,
    Serialize,
    Source,
    Store,
}

impl From<CoreErrorOrigin> for ErrorOrigin {
    fn from(origin: CoreErrorOrigin) -> Self {
        match origin {
            CoreErrorOrigin::Config => Self::Config,
            CoreErrorOrigin::Pattern => Self::Pattern,
            CoreErrorOrigin::Query => Self::Query,
            CoreErrorOrigin::Source => Self::Source,
            CoreErrorOrigin::Store => Self::Store,
        }
    }
}

///
/// TESTS
///
