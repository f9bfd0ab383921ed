mod compare;
mod family;
mod tag;


use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

// re-exports
pub use compare::{strict_eq, strict_order_cmp};
pub use family::{ValueFamily, ValueFamilyExt};
pub use tag::ValueTag;

///
/// CONSTANTS
///

// 2^127, exactly representable as f64
#[expect(clippy::cast_precision_loss)]
const I128_BOUND: f64 = i128::MAX as f64;

///
/// Value
/// comparison operand carried by a condition and held by rows
///
/// Null        → the operand or field value is absent (SQL NULL).
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum Value {
    Blob(Vec<u8>),
    Bool(bool),
    Date(NaiveDate),
    Float64(f64),
    Int(i64),
    /// Ordered list of values.
    /// Compared structurally for equality, never ordered.
    List(Vec<Self>),
    Null,
    Text(String),
    Timestamp(DateTime<Utc>),
    Uint(u64),
}

impl Value {
    ///
    /// CONSTRUCTION
    ///

    /// Build a `Value::List` from owned items.
    pub fn from_list<T>(items: Vec<T>) -> Self
    where
        T: Into<Self>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    ///
    /// TYPES
    ///

    /// Returns true if the value is one of the numeric variants.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Uint(_) | Self::Float64(_))
    }

    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Whether the operand counts as supplied by the caller.
    ///
    /// `Null` is absent, and so is text that is empty or whitespace-only.
    /// Every other value is present, including `0`, `false` and empty lists.
    #[must_use]
    pub fn is_present(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Text(text) => !text.trim().is_empty(),
            _ => true,
        }
    }

    /// Stable variant tag for diagnostics.
    #[must_use]
    pub const fn tag(&self) -> ValueTag {
        tag::value_tag(self)
    }

    ///
    /// CONVERSION
    ///

    #[must_use]
    pub const fn as_text(&self) -> Option<&str> {
        if let Self::Text(s) = self {
            Some(s.as_str())
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_list(&self) -> Option<&[Self]> {
        if let Self::List(xs) = self {
            Some(xs.as_slice())
        } else {
            None
        }
    }

    fn as_i128(&self) -> Option<i128> {
        match self {
            Self::Int(i) => Some(i128::from(*i)),
            Self::Uint(u) => Some(i128::from(*u)),
            _ => None,
        }
    }

    /// Cross-type numeric comparison; returns None if either side is
    /// non-numeric or a float operand is NaN.
    #[must_use]
    pub fn cmp_numeric(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Float64(a), Self::Float64(b)) => a.partial_cmp(b),
            (Self::Float64(f), n) => cmp_int_float(n.as_i128()?, *f).map(Ordering::reverse),
            (n, Self::Float64(f)) => cmp_int_float(n.as_i128()?, *f),
            (a, b) => Some(a.as_i128()?.cmp(&b.as_i128()?)),
        }
    }
}

// Exact: the integer is never rounded into the float's precision.
#[expect(clippy::cast_possible_truncation)]
fn cmp_int_float(int: i128, float: f64) -> Option<Ordering> {
    if float.is_nan() {
        return None;
    }
    if float >= I128_BOUND {
        return Some(Ordering::Less);
    }
    if float < -I128_BOUND {
        return Some(Ordering::Greater);
    }

    // floor lies in [-2^127, 2^127), so the cast is exact
    let floor = float.floor();
    match int.cmp(&(floor as i128)) {
        Ordering::Equal if float > floor => Some(Ordering::Less),
        ord => Some(ord),
    }
}

///
/// From impls
///

macro_rules! impl_from_for_value {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl From<$type> for Value {
                fn from(v: $type) -> Self {
                    Self::$variant(v.into())
                }
            }
        )*
    };
}

impl_from_for_value!(
    i8 => Int,
    i16 => Int,
    i32 => Int,
    i64 => Int,
    u8 => Uint,
    u16 => Uint,
    u32 => Uint,
    u64 => Uint,
    f32 => Float64,
    f64 => Float64,
    bool => Bool,
    String => Text,
    NaiveDate => Date,
    DateTime<Utc> => Timestamp,
    Vec<u8> => Blob,
);

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Blob(bytes) => write!(f, "<blob {} bytes>", bytes.len()),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Date(d) => write!(f, "{d}"),
            Self::Float64(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Null => f.write_str("NULL"),
            Self::Text(s) => write!(f, "{s:?}"),
            Self::Timestamp(t) => write!(f, "{}", t.to_rfc3339()),
            Self::Uint(v) => write!(f, "{v}"),
        }
    }
}
