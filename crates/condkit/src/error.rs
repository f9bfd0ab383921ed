use condkit_core::error::{ErrorClass, QueryError};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// Error
/// Public error type with a stable kind + origin taxonomy.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, ThisError)]
#[error("{origin}: {message}")]
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

    /// Wrap a backend failure without reinterpreting it.
    pub fn backend(err: impl std::fmt::Display) -> Self {
        Self::new(ErrorKind::Backend, ErrorOrigin::Backend, err.to_string())
    }
}

impl From<QueryError> for Error {
    fn from(err: QueryError) -> Self {
        match err.class() {
            ErrorClass::Invalid => Self::new(
                ErrorKind::InvalidField,
                ErrorOrigin::Builder,
                err.to_string(),
            ),
            ErrorClass::Unsupported => Self::new(
                ErrorKind::UnsupportedOperator,
                ErrorOrigin::Compile,
                err.to_string(),
            ),
        }
    }
}

///
/// ErrorKind
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum ErrorKind {
    InvalidField,
    UnsupportedOperator,
    Backend,
}

///
/// ErrorOrigin
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum ErrorOrigin {
    #[display("builder")]
    Builder,
    #[display("compile")]
    Compile,
    #[display("backend")]
    Backend,
}
