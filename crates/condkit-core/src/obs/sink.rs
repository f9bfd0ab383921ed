//! Metrics sink boundary.
//!
//! Skipped conditions are not events: the inactive path stays silent.
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

///
/// MetricsEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MetricsEvent {
    ConditionFolded,
    Build { conditions: u64 },
    ValidationFailed,
}

///
/// MetricsSink
///

pub trait MetricsSink: Send + Sync {
    fn record(&self, event: MetricsEvent);
}

///
/// NoopSink
/// default sink when the host installs none
///

#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl MetricsSink for NoopSink {
    fn record(&self, _event: MetricsEvent) {}
}

///
/// CountingSink
///
/// Process-local atomic counters. Safe to share between builders used on
/// different threads.
///

#[derive(Debug, Default)]
pub struct CountingSink {
    conditions_folded: AtomicU64,
    builds: AtomicU64,
    built_conditions: AtomicU64,
    validation_failures: AtomicU64,
}

impl CountingSink {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            conditions_folded: AtomicU64::new(0),
            builds: AtomicU64::new(0),
            built_conditions: AtomicU64::new(0),
            validation_failures: AtomicU64::new(0),
        }
    }

    #[must_use]
    pub fn report(&self) -> BuildReport {
        BuildReport {
            conditions_folded: self.conditions_folded.load(Ordering::Relaxed),
            builds: self.builds.load(Ordering::Relaxed),
            built_conditions: self.built_conditions.load(Ordering::Relaxed),
            validation_failures: self.validation_failures.load(Ordering::Relaxed),
        }
    }

    pub fn reset(&self) {
        self.conditions_folded.store(0, Ordering::Relaxed);
        self.builds.store(0, Ordering::Relaxed);
        self.built_conditions.store(0, Ordering::Relaxed);
        self.validation_failures.store(0, Ordering::Relaxed);
    }
}

impl MetricsSink for CountingSink {
    fn record(&self, event: MetricsEvent) {
        match event {
            MetricsEvent::ConditionFolded => {
                self.conditions_folded.fetch_add(1, Ordering::Relaxed);
            }
            MetricsEvent::Build { conditions } => {
                self.builds.fetch_add(1, Ordering::Relaxed);
                self.built_conditions.fetch_add(conditions, Ordering::Relaxed);
            }
            MetricsEvent::ValidationFailed => {
                self.validation_failures.fetch_add(1, Ordering::Relaxed);
            }
        }
    }
}

///
/// BuildReport
/// point-in-time snapshot of a `CountingSink`
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct BuildReport {
    pub conditions_folded: u64,
    pub builds: u64,
    pub built_conditions: u64,
    pub validation_failures: u64,
}
