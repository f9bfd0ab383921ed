//! Family classification for `Value`.
//!
//! Families decide which comparison operators a value supports.

use crate::value::Value;

///
/// ValueFamily
///
/// Coarse value classification used by operator validation.
///
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ValueFamily {
    Numeric,  // Int, Uint, Float64
    Textual,  // Text
    Temporal, // Date, Timestamp
    Bool,
    Blob,
    Collection, // List
    Null,
}

impl ValueFamily {
    /// Whether values of this family have a total order usable by
    /// `<`, `<=`, `>` and `>=`.
    #[must_use]
    pub const fn is_orderable(self) -> bool {
        matches!(self, Self::Numeric | Self::Textual | Self::Temporal)
    }

    /// Whether values of this family can be compared with `=` and `<>`.
    #[must_use]
    pub const fn supports_equality(self) -> bool {
        !matches!(self, Self::Null)
    }
}

///
/// ValueFamilyExt
///
/// Maps a value to its family.
///
pub trait ValueFamilyExt {
    fn family(&self) -> ValueFamily;
}

impl ValueFamilyExt for Value {
    fn family(&self) -> ValueFamily {
        match self {
            Self::Int(_) | Self::Uint(_) | Self::Float64(_) => ValueFamily::Numeric,
            Self::Text(_) => ValueFamily::Textual,
            Self::Date(_) | Self::Timestamp(_) => ValueFamily::Temporal,
            Self::Bool(_) => ValueFamily::Bool,
            Self::Blob(_) => ValueFamily::Blob,
            Self::List(_) => ValueFamily::Collection,
            Self::Null => ValueFamily::Null,
        }
    }
}
