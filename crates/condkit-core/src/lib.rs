//! Core runtime for condkit: values, the optional-condition builder, the
//! finished filter tree, and the backend adapter boundary.
#![warn(unreachable_pub)]

pub mod error;
pub mod obs;
pub mod query;
pub mod traits;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, sinks, or backends are re-exported here.
///

pub mod prelude {
    pub use crate::{
        query::{Combinator, CompareOp, FilterBuilder, FilterTree},
        traits::FieldValue,
        value::Value,
    };
}
