use crate::value::Value;
use std::{cmp::Ordering, mem::discriminant};

/// Equality used by predicate evaluation.
///
/// Numeric values widen across `Int`, `Uint` and `Float64`; every other
/// family compares only within the same variant. Returns `None` when the
/// pair is not comparable at all (mixed families, or either side `Null`).
#[must_use]
pub fn strict_eq(left: &Value, right: &Value) -> Option<bool> {
    if left.is_null() || right.is_null() {
        return None;
    }
    if left.is_numeric() && right.is_numeric() {
        return left.cmp_numeric(right).map(Ordering::is_eq);
    }
    if discriminant(left) != discriminant(right) {
        return None;
    }

    match (left, right) {
        (Value::List(a), Value::List(b)) => list_eq(a, b),
        _ => Some(left == right),
    }
}

/// Ordering used by predicate evaluation.
///
/// Returns `None` for mismatched or non-orderable variants.
#[must_use]
pub fn strict_order_cmp(left: &Value, right: &Value) -> Option<Ordering> {
    if left.is_numeric() && right.is_numeric() {
        return left.cmp_numeric(right);
    }

    match (left, right) {
        (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
        (Value::Date(a), Value::Date(b)) => Some(a.cmp(b)),
        (Value::Timestamp(a), Value::Timestamp(b)) => Some(a.cmp(b)),
        _ => None,
    }
}

// Element-wise equality; a non-comparable element makes the lists unequal.
fn list_eq(left: &[Value], right: &[Value]) -> Option<bool> {
    if left.len() != right.len() {
        return Some(false);
    }

    Some(
        left.iter()
            .zip(right.iter())
            .all(|(l, r)| strict_eq(l, r).unwrap_or(false)),
    )
}
