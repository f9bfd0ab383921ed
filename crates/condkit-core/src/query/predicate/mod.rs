pub(crate) mod ast;
pub mod eval;
pub mod validate;
pub mod visit;


pub use ast::{Combinator, CompareOp, Condition, Expr, FilterTree};
pub use eval::{FieldPresence, Row, eval};
pub use validate::{validate_condition, validate_field, validate_tree};
pub use visit::{ExprVisitor, walk, walk_expr};
