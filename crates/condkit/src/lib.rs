//! ## Crate layout
//! - `core`: values, the optional-condition builder, filter trees, and the
//!   backend adapter boundary.
//! - `error`: public error type with a stable kind/origin taxonomy.
//!
//! The `prelude` module is the surface most callers need: build a tree with
//! `FilterBuilder`, hand it to a `Backend`.

pub use condkit_core as core;

pub mod error;

pub use error::{Error, ErrorKind, ErrorOrigin};

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build a filter tree in one expression against `ctx`.
///
/// Errors from the builder are lifted into the public `Error`.
pub fn filter<'a, C, F>(ctx: &'a C, f: F) -> Result<core::query::FilterTree, Error>
where
    C: core::query::FilterContext + ?Sized,
    F: FnOnce(
        core::query::FilterBuilder<'a, C>,
    ) -> Result<core::query::FilterTree, core::error::QueryError>,
{
    core::query::FilterBuilder::of(ctx, f).map_err(Error::from)
}

/// Compile `tree` with `backend`.
///
/// Whatever the backend reports becomes an `Error` of kind and origin
/// `Backend`, carrying the backend's own message.
pub fn compile<B, C>(
    backend: &B,
    ctx: &C,
    tree: &core::query::FilterTree,
) -> Result<B::Output, Error>
where
    C: core::query::FilterContext + ?Sized,
    B: core::query::Backend<C>,
    B::Error: std::fmt::Display,
{
    backend.compile(ctx, tree).map_err(Error::backend)
}

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::core::{
        query::{
            Backend as _, Combinator, CompareOp, FilterBuilder, FilterContext, FilterTree,
            MemoryBackend,
            predicate::{FieldPresence, Row},
        },
        traits::FieldValue,
        value::Value,
    };
    #[cfg(feature = "sql")]
    pub use crate::core::query::{SqlBackend, SqlOptions};
    pub use crate::{Error, compile, filter};
}
