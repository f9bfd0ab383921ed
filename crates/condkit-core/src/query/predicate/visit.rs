use super::ast::{Combinator, Condition, Expr, FilterTree};

///
/// ExprVisitor
///
/// Read-only traversal contract for backend adapters. `walk` drives it
/// post-order, left subtree before right, so results compose in the same
/// left-associative shape the builder produced.
///

pub trait ExprVisitor {
    type Output;
    type Error;

    fn visit_match_all(&mut self) -> Result<Self::Output, Self::Error>;

    fn visit_compare(&mut self, cond: &Condition) -> Result<Self::Output, Self::Error>;

    fn visit_combine(
        &mut self,
        combinator: Combinator,
        left: Self::Output,
        right: Self::Output,
    ) -> Result<Self::Output, Self::Error>;
}

pub fn walk<V: ExprVisitor>(tree: &FilterTree, visitor: &mut V) -> Result<V::Output, V::Error> {
    match tree.root() {
        Some(expr) => walk_expr(expr, visitor),
        None => visitor.visit_match_all(),
    }
}

pub fn walk_expr<V: ExprVisitor>(expr: &Expr, visitor: &mut V) -> Result<V::Output, V::Error> {
    let (first, rest) = expr.spine();
    let mut out = visitor.visit_compare(first)?;

    for (combinator, right) in rest {
        let right = walk_expr(right, visitor)?;
        out = visitor.visit_combine(combinator, out, right)?;
    }

    Ok(out)
}
