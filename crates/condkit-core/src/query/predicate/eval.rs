use crate::value::{Value, strict_eq, strict_order_cmp};
use std::{
    cmp::Ordering,
    collections::{BTreeMap, HashMap},
    hash::BuildHasher,
};

use super::ast::{Combinator, CompareOp, Condition, Expr, FilterTree};

///
/// FieldPresence
///

#[derive(Clone, Debug, PartialEq)]
pub enum FieldPresence {
    Present(Value),
    Missing,
}

///
/// Row
///
/// Candidate record for in-memory matching.
///

pub trait Row {
    fn field(&self, name: &str) -> FieldPresence;
}

impl Row for BTreeMap<String, Value> {
    fn field(&self, name: &str) -> FieldPresence {
        match self.get(name) {
            Some(value) => FieldPresence::Present(value.clone()),
            None => FieldPresence::Missing,
        }
    }
}

impl<S: BuildHasher> Row for HashMap<String, Value, S> {
    fn field(&self, name: &str) -> FieldPresence {
        match self.get(name) {
            Some(value) => FieldPresence::Present(value.clone()),
            None => FieldPresence::Missing,
        }
    }
}

impl<R: Row + ?Sized> Row for &R {
    fn field(&self, name: &str) -> FieldPresence {
        (**self).field(name)
    }
}

impl FilterTree {
    /// Match decision for one record. `MatchAll` accepts everything.
    #[must_use]
    pub fn matches<R: Row + ?Sized>(&self, row: &R) -> bool {
        match self.root() {
            Some(expr) => eval(row, expr),
            None => true,
        }
    }
}

/// Evaluate a tree node against a record, left operand first.
#[must_use]
pub fn eval<R: Row + ?Sized>(row: &R, expr: &Expr) -> bool {
    let (first, rest) = expr.spine();

    let mut acc = eval_compare(row, first);
    for (combinator, right) in rest {
        acc = match combinator {
            Combinator::And => acc && eval(row, right),
            Combinator::Or => acc || eval(row, right),
        };
    }

    acc
}

// Missing or null fields never satisfy a comparison, `<>` included.
fn eval_compare<R: Row + ?Sized>(row: &R, cond: &Condition) -> bool {
    let Condition { field, op, value } = cond;

    let FieldPresence::Present(actual) = row.field(field) else {
        return false;
    };

    match op {
        CompareOp::Eq => strict_eq(&actual, value).unwrap_or(false),
        CompareOp::Ne => strict_eq(&actual, value).is_some_and(|v| !v),
        CompareOp::Lt => strict_order_cmp(&actual, value).is_some_and(Ordering::is_lt),
        CompareOp::Lte => strict_order_cmp(&actual, value).is_some_and(Ordering::is_le),
        CompareOp::Gt => strict_order_cmp(&actual, value).is_some_and(Ordering::is_gt),
        CompareOp::Gte => strict_order_cmp(&actual, value).is_some_and(Ordering::is_ge),
    }
}
