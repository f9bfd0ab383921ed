use crate::{query::predicate::CompareOp, value::ValueTag};
use std::fmt;
use thiserror::Error as ThisError;

///
/// QueryError
///
/// Failures raised while accumulating or finalizing a filter.
/// Skipped (inactive) conditions never produce one.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum QueryError {
    #[error("invalid field identifier '{field}': must be non-empty")]
    InvalidField { field: String },

    #[error("operator '{op}' is not supported for {kind} values on field '{field}'")]
    UnsupportedOperator {
        field: String,
        op: CompareOp,
        kind: ValueTag,
    },
}

impl QueryError {
    pub(crate) fn invalid_field(field: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
        }
    }

    pub(crate) fn unsupported_operator(field: &str, op: CompareOp, kind: ValueTag) -> Self {
        Self::UnsupportedOperator {
            field: field.to_string(),
            op,
            kind,
        }
    }

    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::InvalidField { .. } => ErrorClass::Invalid,
            Self::UnsupportedOperator { .. } => ErrorClass::Unsupported,
        }
    }
}

///
/// ErrorClass
/// internal error taxonomy
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    /// Programmer error at the call site.
    Invalid,

    /// Operator/value pair the type system cannot compare.
    Unsupported,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Invalid => "invalid",
            Self::Unsupported => "unsupported",
        };
        write!(f, "{label}")
    }
}
