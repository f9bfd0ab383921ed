// One two-argument (presence-activated) and one three-argument
// (explicitly activated) method per combinator/operator pair.
macro_rules! condition_methods {
    ( $( $combinator:ident, $op:ident => $name:ident, $name_if:ident, $sql:literal );* $(;)? ) => {
        $(
            #[doc = concat!(
                "`", stringify!($combinator), " ", $sql,
                "`, skipped when `value` is null or blank text."
            )]
            pub fn $name(self, field: &str, value: impl FieldValue) -> Result<Self, QueryError> {
                self.condition_present(Combinator::$combinator, field, CompareOp::$op, value)
            }

            #[doc = concat!(
                "`", stringify!($combinator), " ", $sql,
                "`, skipped when `active` is false."
            )]
            pub fn $name_if(
                self,
                field: &str,
                value: impl FieldValue,
                active: bool,
            ) -> Result<Self, QueryError> {
                self.condition(Combinator::$combinator, field, CompareOp::$op, value, active)
            }
        )*
    };
}

pub mod filter;

#[cfg(test)]
mod tests;

pub use filter::FilterBuilder;
