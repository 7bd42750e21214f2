//! Observability metrics for the logger.
//!
//! Provides counters about dispatch behavior for monitoring and debugging.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Metrics tracking logger statistics.
///
/// All metrics use atomic operations for thread-safe updates and reads.
/// Clones of a logger share the same metrics.
#[derive(Debug, Clone)]
pub struct Metrics {
    inner: Arc<MetricsInner>,
}

#[derive(Debug)]
struct MetricsInner {
    /// Lines rendered and handed to the sinks
    lines_emitted: AtomicU64,
    /// Silence notices among the emitted lines
    notices_emitted: AtomicU64,
    /// Error calls dropped because the error budget was exhausted
    errors_suppressed: AtomicU64,
    /// Individual sink writes that returned an error
    sink_failures: AtomicU64,
    /// Lines cut short by the line capacity
    lines_truncated: AtomicU64,
}

impl Metrics {
    /// Create a new metrics tracker.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(MetricsInner {
                lines_emitted: AtomicU64::new(0),
                notices_emitted: AtomicU64::new(0),
                errors_suppressed: AtomicU64::new(0),
                sink_failures: AtomicU64::new(0),
                lines_truncated: AtomicU64::new(0),
            }),
        }
    }

    pub(crate) fn record_emitted(&self) {
        self.inner.lines_emitted.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_notice(&self) {
        self.inner.notices_emitted.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_suppressed(&self) {
        self.inner.errors_suppressed.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_sink_failure(&self) {
        self.inner.sink_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_truncated(&self) {
        self.inner.lines_truncated.fetch_add(1, Ordering::Relaxed);
    }

    /// Get the number of lines emitted.
    pub fn lines_emitted(&self) -> u64 {
        self.inner.lines_emitted.load(Ordering::Relaxed)
    }

    /// Get the number of silence notices emitted.
    pub fn notices_emitted(&self) -> u64 {
        self.inner.notices_emitted.load(Ordering::Relaxed)
    }

    /// Get the number of error calls suppressed by the error budget.
    pub fn errors_suppressed(&self) -> u64 {
        self.inner.errors_suppressed.load(Ordering::Relaxed)
    }

    /// Get the number of failed sink writes.
    pub fn sink_failures(&self) -> u64 {
        self.inner.sink_failures.load(Ordering::Relaxed)
    }

    /// Get the number of truncated lines.
    pub fn lines_truncated(&self) -> u64 {
        self.inner.lines_truncated.load(Ordering::Relaxed)
    }

    /// Get a snapshot of all metrics.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            lines_emitted: self.lines_emitted(),
            notices_emitted: self.notices_emitted(),
            errors_suppressed: self.errors_suppressed(),
            sink_failures: self.sink_failures(),
            lines_truncated: self.lines_truncated(),
        }
    }

    /// Reset all metrics to zero.
    ///
    /// Useful for testing or when starting a new monitoring period.
    pub fn reset(&self) {
        self.inner.lines_emitted.store(0, Ordering::Relaxed);
        self.inner.notices_emitted.store(0, Ordering::Relaxed);
        self.inner.errors_suppressed.store(0, Ordering::Relaxed);
        self.inner.sink_failures.store(0, Ordering::Relaxed);
        self.inner.lines_truncated.store(0, Ordering::Relaxed);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

/// A point-in-time snapshot of metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsSnapshot {
    /// Lines rendered and handed to the sinks
    pub lines_emitted: u64,
    /// Silence notices among the emitted lines
    pub notices_emitted: u64,
    /// Error calls dropped because the error budget was exhausted
    pub errors_suppressed: u64,
    /// Individual sink writes that returned an error
    pub sink_failures: u64,
    /// Lines cut short by the line capacity
    pub lines_truncated: u64,
}

impl MetricsSnapshot {
    /// Total log calls that reached a decision.
    ///
    /// Emitted lines plus suppressed errors, minus the silence notices the
    /// logger added on its own.
    pub fn total_calls(&self) -> u64 {
        self.lines_emitted
            .saturating_sub(self.notices_emitted)
            .saturating_add(self.errors_suppressed)
    }

    /// Ratio of suppressed calls to all calls (0.0 to 1.0).
    ///
    /// Returns 0.0 if nothing has been logged.
    pub fn suppression_rate(&self) -> f64 {
        let total = self.total_calls();
        if total == 0 {
            0.0
        } else {
            self.errors_suppressed as f64 / total as f64
        }
    }
}
