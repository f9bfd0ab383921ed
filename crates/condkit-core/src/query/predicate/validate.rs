//! Operator/value validation.
//!
//! Field identifiers are checked when a condition is accepted; operator
//! support is checked once over the finished tree. Neither step consults a
//! schema: whether a field exists is the backend's concern.

use crate::{error::QueryError, value::ValueFamilyExt};

use super::ast::{Condition, Expr, FilterTree};

/// Reject empty or whitespace-only field identifiers.
pub fn validate_field(field: &str) -> Result<(), QueryError> {
    if field.trim().is_empty() {
        return Err(QueryError::invalid_field(field));
    }

    Ok(())
}

/// Check every leaf of a finished tree; the first failure in append order wins.
pub fn validate_tree(tree: &FilterTree) -> Result<(), QueryError> {
    match tree.root() {
        Some(expr) => validate_expr(expr),
        None => Ok(()),
    }
}

fn validate_expr(expr: &Expr) -> Result<(), QueryError> {
    let (first, rest) = expr.spine();
    validate_condition(first)?;

    rest.into_iter().try_for_each(|(_, right)| validate_expr(right))
}

/// Operator support for a single condition.
pub fn validate_condition(cond: &Condition) -> Result<(), QueryError> {
    let family = cond.value.family();
    let supported = if cond.op.is_ordering() {
        family.is_orderable()
    } else {
        family.supports_equality()
    };

    if supported {
        Ok(())
    } else {
        Err(QueryError::unsupported_operator(
            &cond.field,
            cond.op,
            cond.value.tag(),
        ))
    }
}
