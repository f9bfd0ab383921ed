use crate::{
    error::QueryError,
    obs::{MetricsEvent, MetricsSink, NoopSink},
    query::{
        adapter::FilterContext,
        predicate::{
            Combinator, CompareOp, Condition, Expr, FilterTree, validate_field, validate_tree,
        },
    },
    traits::FieldValue,
};
use std::{fmt, sync::Arc};
use tracing::{debug, trace};

static NOOP_SINK: NoopSink = NoopSink;

///
/// FilterBuilder
///
/// Fluent accumulator for optional conditions. Each call decides once
/// whether its condition is active; inactive calls leave no trace. Active
/// conditions fold left-associatively in call order, so `a AND b OR c`
/// means `(a AND b) OR c`.
///
/// Mutating calls consume the builder and hand it back, so a call that
/// fails leaves nothing to reuse.
///

pub struct FilterBuilder<'a, C: FilterContext + ?Sized = ()> {
    ctx: &'a C,
    root: Option<Arc<Expr>>,
    sink: &'a dyn MetricsSink,
}

impl<'a, C: FilterContext + ?Sized> FilterBuilder<'a, C> {
    #[must_use]
    pub fn new(ctx: &'a C) -> Self {
        Self {
            ctx,
            root: None,
            sink: &NOOP_SINK,
        }
    }

    /// Build a tree in a single expression: the callback receives a fresh
    /// builder bound to `ctx` and returns the finished tree.
    pub fn of<F>(ctx: &'a C, f: F) -> Result<FilterTree, QueryError>
    where
        F: FnOnce(Self) -> Result<FilterTree, QueryError>,
    {
        f(Self::new(ctx))
    }

    #[must_use]
    pub fn with_sink(mut self, sink: &'a dyn MetricsSink) -> Self {
        self.sink = sink;
        self
    }

    #[must_use]
    pub const fn context(&self) -> &'a C {
        self.ctx
    }

    /// Whether no condition has been accepted yet.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Add a condition when `active` is true; otherwise return the builder
    /// untouched. The field is only checked for accepted conditions.
    pub fn condition(
        mut self,
        combinator: Combinator,
        field: &str,
        op: CompareOp,
        value: impl FieldValue,
        active: bool,
    ) -> Result<Self, QueryError> {
        if !active {
            return Ok(self);
        }
        validate_field(field)?;

        trace!(field, %op, %combinator, first = self.root.is_none(), "fold condition");
        let cond = Condition::new(field, op, value.to_value());
        self.root = Some(Expr::fold(self.root.take(), combinator, cond));
        self.sink.record(MetricsEvent::ConditionFolded);

        Ok(self)
    }

    /// Add a condition only when the converted value is present
    /// (not null, and not empty or whitespace-only text).
    pub fn condition_present(
        self,
        combinator: Combinator,
        field: &str,
        op: CompareOp,
        value: impl FieldValue,
    ) -> Result<Self, QueryError> {
        let value = value.to_value();
        let active = value.is_present();

        self.condition(combinator, field, op, value, active)
    }

    /// Finalize the tree accumulated so far. Repeatable; the builder keeps
    /// its state. Operator support is checked here.
    pub fn build(&self) -> Result<FilterTree, QueryError> {
        let tree = self
            .root
            .as_ref()
            .map_or(FilterTree::MatchAll, |root| FilterTree::Expr(Arc::clone(root)));

        if let Err(err) = validate_tree(&tree) {
            self.sink.record(MetricsEvent::ValidationFailed);
            debug!(context = self.ctx.name(), error = %err, "filter build rejected");
            return Err(err);
        }

        let conditions = tree.len();
        debug!(context = self.ctx.name(), conditions, "filter built");
        self.sink.record(MetricsEvent::Build {
            conditions: conditions as u64,
        });

        Ok(tree)
    }

    condition_methods! {
        And, Eq  => and_equals, and_equals_if, "field = value";
        And, Ne  => and_not_equals, and_not_equals_if, "field <> value";
        And, Gt  => and_greater_than, and_greater_than_if, "field > value";
        And, Gte => and_greater_than_equal, and_greater_than_equal_if, "field >= value";
        And, Lt  => and_less_than, and_less_than_if, "field < value";
        And, Lte => and_less_than_equal, and_less_than_equal_if, "field <= value";
        Or,  Eq  => or_equals, or_equals_if, "field = value";
        Or,  Ne  => or_not_equals, or_not_equals_if, "field <> value";
        Or,  Gt  => or_greater_than, or_greater_than_if, "field > value";
        Or,  Gte => or_greater_than_equal, or_greater_than_equal_if, "field >= value";
        Or,  Lt  => or_less_than, or_less_than_if, "field < value";
        Or,  Lte => or_less_than_equal, or_less_than_equal_if, "field <= value";
    }
}

impl<C: FilterContext + ?Sized> fmt::Debug for FilterBuilder<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterBuilder")
            .field("context", &self.ctx.name())
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}
