use crate::value::Value;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::{
    fmt, mem,
    sync::{Arc, LazyLock},
};

///
/// CompareOp
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
pub enum CompareOp {
    #[display("=")]
    Eq,
    #[display("<>")]
    Ne,
    #[display(">")]
    Gt,
    #[display(">=")]
    Gte,
    #[display("<")]
    Lt,
    #[display("<=")]
    Lte,
}

impl CompareOp {
    /// Ordering operators need a totally ordered value family.
    #[must_use]
    pub const fn is_ordering(self) -> bool {
        matches!(self, Self::Gt | Self::Gte | Self::Lt | Self::Lte)
    }
}

///
/// Combinator
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
pub enum Combinator {
    #[display("AND")]
    And,
    #[display("OR")]
    Or,
}

///
/// Condition
/// one accepted field/operator/value leaf
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Condition {
    pub field: String,
    pub op: CompareOp,
    pub value: Value,
}

impl Condition {
    #[must_use]
    pub fn new(field: impl Into<String>, op: CompareOp, value: Value) -> Self {
        Self {
            field: field.into(),
            op,
            value,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.field, self.op, self.value)
    }
}

///
/// Expr
///
/// Left-associative combinator tree. `left` holds everything accumulated
/// before the call that produced this node and `right` the condition that
/// call appended. Nodes are never re-associated for operator precedence.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub enum Expr {
    Compare(Condition),
    Combine {
        combinator: Combinator,
        left: Arc<Expr>,
        right: Arc<Expr>,
    },
}

impl Expr {
    #[must_use]
    pub const fn as_compare(&self) -> Option<&Condition> {
        match self {
            Self::Compare(cond) => Some(cond),
            Self::Combine { .. } => None,
        }
    }

    #[must_use]
    pub fn as_combine(&self) -> Option<(Combinator, &Self, &Self)> {
        match self {
            Self::Combine {
                combinator,
                left,
                right,
            } => Some((*combinator, left.as_ref(), right.as_ref())),
            Self::Compare(_) => None,
        }
    }

    /// Leaves in append order.
    #[must_use]
    pub fn conditions(&self) -> Vec<&Condition> {
        let (first, rest) = self.spine();
        let mut out = vec![first];
        for (_, right) in rest {
            out.extend(right.conditions());
        }

        out
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        let (_, rest) = self.spine();

        rest.into_iter().fold(1, |depth, (_, right)| 1 + depth.max(right.depth()))
    }

    /// Walk down the left spine without recursing.
    ///
    /// Returns the leftmost leaf and every `(combinator, right operand)`
    /// pair above it, bottom first. Builder trees are left-deep with leaf
    /// right operands, so callers only recurse into `right` for trees that
    /// were assembled by hand.
    pub(crate) fn spine(&self) -> (&Condition, Vec<(Combinator, &Self)>) {
        let mut rest = Vec::new();
        let mut node = self;

        loop {
            match node {
                Self::Compare(cond) => {
                    rest.reverse();
                    return (cond, rest);
                }
                Self::Combine {
                    combinator,
                    left,
                    right,
                } => {
                    rest.push((*combinator, right.as_ref()));
                    node = left.as_ref();
                }
            }
        }
    }

    pub(crate) fn fold(
        root: Option<Arc<Self>>,
        combinator: Combinator,
        cond: Condition,
    ) -> Arc<Self> {
        let leaf = Arc::new(Self::Compare(cond));

        match root {
            // the first accepted condition ignores its combinator
            None => leaf,
            Some(left) => Arc::new(Self::Combine {
                combinator,
                left,
                right: leaf,
            }),
        }
    }
}

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        let (first, rest) = self.spine();
        let (other_first, other_rest) = other.spine();

        first == other_first
            && rest.len() == other_rest.len()
            && rest
                .iter()
                .zip(&other_rest)
                .all(|((a, left), (b, right))| a == b && left == right)
    }
}

// Stands in for children moved out of a node being torn down.
static DETACHED: LazyLock<Arc<Expr>> = LazyLock::new(|| {
    Arc::new(Expr::Compare(Condition::new(
        String::new(),
        CompareOp::Eq,
        Value::Null,
    )))
});

fn detach(slot: &mut Arc<Expr>) -> Arc<Expr> {
    mem::replace(slot, Arc::clone(&DETACHED))
}

// Uniquely owned children are unlinked onto a heap stack so a long chain
// never drops recursively.
impl Drop for Expr {
    fn drop(&mut self) {
        let Self::Combine { left, right, .. } = self else {
            return;
        };
        if Arc::ptr_eq(left, &DETACHED) && Arc::ptr_eq(right, &DETACHED) {
            return;
        }

        let mut stack = vec![detach(left), detach(right)];
        while let Some(child) = stack.pop() {
            if let Ok(mut expr) = Arc::try_unwrap(child)
                && let Self::Combine { left, right, .. } = &mut expr
            {
                stack.push(detach(left));
                stack.push(detach(right));
            }
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (first, rest) = self.spine();

        for _ in &rest {
            f.write_str("(")?;
        }
        write!(f, "{first}")?;
        for (combinator, right) in rest {
            write!(f, " {combinator} {right})")?;
        }

        Ok(())
    }
}

///
/// FilterTree
///
/// Finalized filter handed to backends. `MatchAll` is the identity:
/// it selects every record. Clones share the underlying tree.
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub enum FilterTree {
    #[default]
    MatchAll,
    Expr(Arc<Expr>),
}

impl FilterTree {
    #[must_use]
    pub const fn is_match_all(&self) -> bool {
        matches!(self, Self::MatchAll)
    }

    #[must_use]
    pub fn root(&self) -> Option<&Expr> {
        match self {
            Self::MatchAll => None,
            Self::Expr(expr) => Some(expr.as_ref()),
        }
    }

    /// Leaves in append order; empty for `MatchAll`.
    #[must_use]
    pub fn conditions(&self) -> Vec<&Condition> {
        self.root().map(Expr::conditions).unwrap_or_default()
    }

    /// Number of accepted conditions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.conditions().len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.is_match_all()
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.root().map_or(0, Expr::depth)
    }
}

impl fmt::Display for FilterTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MatchAll => f.write_str("TRUE"),
            Self::Expr(expr) => write!(f, "{expr}"),
        }
    }
}
