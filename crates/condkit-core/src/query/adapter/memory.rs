use crate::{
    error::QueryError,
    query::predicate::{FilterTree, Row, validate_tree},
};
use tracing::debug;

use super::{Backend, FilterContext};

///
/// MemoryBackend
/// reference backend evaluating trees against in-memory rows
///

#[derive(Clone, Copy, Debug, Default)]
pub struct MemoryBackend;

impl<C: FilterContext + ?Sized> Backend<C> for MemoryBackend {
    type Output = RowFilter;
    type Error = QueryError;

    fn compile(&self, ctx: &C, tree: &FilterTree) -> Result<RowFilter, QueryError> {
        validate_tree(tree)?;
        debug!(
            context = ctx.name(),
            conditions = tree.len(),
            "compiled in-memory filter"
        );

        Ok(RowFilter { tree: tree.clone() })
    }
}

///
/// RowFilter
///

#[derive(Clone, Debug)]
pub struct RowFilter {
    tree: FilterTree,
}

impl RowFilter {
    #[must_use]
    pub const fn tree(&self) -> &FilterTree {
        &self.tree
    }

    #[must_use]
    pub fn matches<R: Row + ?Sized>(&self, row: &R) -> bool {
        self.tree.matches(row)
    }

    /// Matching rows in input order; each row appears at most once.
    #[must_use]
    pub fn filter<'r, R: Row>(&self, rows: &'r [R]) -> Vec<&'r R> {
        rows.iter().filter(|row| self.matches(*row)).collect()
    }

    #[must_use]
    pub fn count<R: Row>(&self, rows: &[R]) -> usize {
        rows.iter().filter(|row| self.matches(*row)).count()
    }
}
