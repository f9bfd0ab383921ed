//! Filter building modules.
//!
//! `builder` accumulates optional conditions, `predicate` defines the
//! finished tree and its record-matching semantics, and `adapter` is the
//! boundary backends implement to execute a tree.

pub mod adapter;
pub mod builder;
pub mod predicate;

pub use adapter::{Backend, FilterContext, MemoryBackend, RowFilter};
#[cfg(feature = "sql")]
pub use adapter::{Placeholder, SqlBackend, SqlOptions, SqlWhere};
pub use builder::FilterBuilder;
pub use predicate::{Combinator, CompareOp, Condition, Expr, FilterTree};
