use crate::{
    error::QueryError,
    query::predicate::{Combinator, Condition, ExprVisitor, FilterTree, validate_tree, walk},
    value::Value,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Backend, FilterContext};

///
/// Placeholder
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Placeholder {
    /// `?` (MySQL, SQLite)
    #[default]
    Question,

    /// `$1`, `$2`, … (PostgreSQL)
    Dollar,
}

///
/// SqlOptions
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct SqlOptions {
    pub placeholder: Placeholder,
    pub quote_identifiers: bool,
}

impl Default for SqlOptions {
    fn default() -> Self {
        Self {
            placeholder: Placeholder::Question,
            quote_identifiers: true,
        }
    }
}

///
/// SqlWhere
/// parameterized WHERE fragment; `params` bind in placeholder order
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SqlWhere {
    pub clause: String,
    pub params: Vec<Value>,
}

///
/// SqlBackend
///
/// Renders a tree as a WHERE fragment. Every combinator node is fully
/// parenthesized so the SQL engine's AND-over-OR precedence cannot
/// re-associate the chain.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct SqlBackend {
    options: SqlOptions,
}

impl SqlBackend {
    #[must_use]
    pub const fn new(options: SqlOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub const fn options(&self) -> SqlOptions {
        self.options
    }
}

impl<C: FilterContext + ?Sized> Backend<C> for SqlBackend {
    type Output = SqlWhere;
    type Error = QueryError;

    fn compile(&self, ctx: &C, tree: &FilterTree) -> Result<SqlWhere, QueryError> {
        validate_tree(tree)?;

        let mut renderer = SqlRenderer {
            options: self.options,
            params: Vec::new(),
        };
        let clause = walk(tree, &mut renderer)?;
        debug!(
            context = ctx.name(),
            params = renderer.params.len(),
            "rendered sql filter"
        );

        Ok(SqlWhere {
            clause,
            params: renderer.params,
        })
    }
}

struct SqlRenderer {
    options: SqlOptions,
    params: Vec<Value>,
}

impl SqlRenderer {
    fn identifier(&self, field: &str) -> String {
        if self.options.quote_identifiers {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }

    fn placeholder(&self) -> String {
        match self.options.placeholder {
            Placeholder::Question => "?".to_string(),
            Placeholder::Dollar => format!("${}", self.params.len()),
        }
    }
}

impl ExprVisitor for SqlRenderer {
    type Output = String;
    type Error = QueryError;

    fn visit_match_all(&mut self) -> Result<String, QueryError> {
        Ok("1 = 1".to_string())
    }

    fn visit_compare(&mut self, cond: &Condition) -> Result<String, QueryError> {
        self.params.push(cond.value.clone());

        Ok(format!(
            "{} {} {}",
            self.identifier(&cond.field),
            cond.op,
            self.placeholder()
        ))
    }

    fn visit_combine(
        &mut self,
        combinator: Combinator,
        left: String,
        right: String,
    ) -> Result<String, QueryError> {
        Ok(format!("({left} {combinator} {right})"))
    }
}
