//! Backend adapter boundary.
//!
//! A backend receives a finished `FilterTree` plus the context the builder
//! was bound to, and turns it into something executable. Adapters read the
//! tree through `ExprVisitor`/`walk` or by matching on `Expr`; they must
//! keep the left-associative shape and never mutate the tree.

mod memory;
#[cfg(feature = "sql")]
mod sql;


use crate::query::predicate::FilterTree;

pub use memory::{MemoryBackend, RowFilter};
#[cfg(feature = "sql")]
pub use sql::{Placeholder, SqlBackend, SqlOptions, SqlWhere};

///
/// FilterContext
///
/// Opaque schema/backend handle a builder is bound to. The builder only
/// carries it through; backends may downcast it to whatever they need by
/// implementing `Backend` for their own context type.
///

pub trait FilterContext {
    /// Label used in diagnostics.
    fn name(&self) -> &str {
        "default"
    }
}

impl FilterContext for () {}

///
/// Backend
///

pub trait Backend<C: FilterContext + ?Sized = ()> {
    type Output;
    type Error;

    fn compile(&self, ctx: &C, tree: &FilterTree) -> Result<Self::Output, Self::Error>;
}
