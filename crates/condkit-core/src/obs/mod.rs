//! Observability: build counters and the sink boundary.
//!
//! Builder logic records `MetricsEvent`s through a `MetricsSink`; it never
//! touches counter state directly.

mod sink;


pub use sink::{BuildReport, CountingSink, MetricsEvent, MetricsSink, NoopSink};
