//! Rate limited logger.
//!
//! Formats log calls into timestamped lines and fans them out to every
//! registered sink. Error calls go through an [`ErrorBudget`]; once it is
//! exhausted, error calls return immediately without formatting anything.

use crate::application::{
    error_budget::{BudgetDecision, BudgetState, ErrorBudget, SILENCE_NOTICE},
    metrics::Metrics,
    ports::{Clock, LogSink},
};
use crate::domain::{
    record::{LogRecord, Message},
    severity::Severity,
};
use std::sync::Arc;

/// Timestamping, multi-sink logger with an error budget.
///
/// Cloning is cheap: clones share sinks, clock, budget and metrics.
///
/// Nothing here returns an error or panics on a degraded sink. Overlong
/// messages are truncated, failed sink writes are counted and dropped, and
/// error calls past the budget are dropped.
///
/// Construct one with [`RateLimitedLogger::builder`].
#[derive(Debug, Clone)]
pub struct RateLimitedLogger {
    sinks: Arc<[Arc<dyn LogSink>]>,
    clock: Arc<dyn Clock>,
    budget: Arc<ErrorBudget>,
    metrics: Metrics,
    debug_enabled: bool,
    line_capacity: usize,
}

impl RateLimitedLogger {
    pub(crate) fn from_parts(
        sinks: Vec<Arc<dyn LogSink>>,
        clock: Arc<dyn Clock>,
        budget: Arc<ErrorBudget>,
        debug_enabled: bool,
        line_capacity: usize,
    ) -> Self {
        Self {
            sinks: sinks.into(),
            clock,
            budget,
            metrics: Metrics::new(),
            debug_enabled,
            line_capacity,
        }
    }

    /// Log an informational message to every sink.
    ///
    /// Info calls are never subject to the error budget.
    pub fn info(&self, message: Message<'_>) {
        self.dispatch(Severity::Info, message);
    }

    /// Log an error, subject to the error budget.
    ///
    /// The call that exhausts the budget logs its own message followed by a
    /// single [`SILENCE_NOTICE`] at info severity. Every later call is a
    /// no-op.
    pub fn error(&self, message: Message<'_>) {
        match self.budget.register_error() {
            BudgetDecision::Emit => self.dispatch(Severity::Error, message),
            BudgetDecision::EmitAndSilence => {
                self.dispatch(Severity::Error, message);
                self.info(Message::new(
                    SILENCE_NOTICE,
                    format_args!("{}", SILENCE_NOTICE),
                ));
                self.metrics.record_notice();
            }
            BudgetDecision::Suppress => self.metrics.record_suppressed(),
        }
    }

    /// Log a debug message if debug output is enabled.
    ///
    /// When disabled the message is never formatted.
    pub fn debug(&self, message: Message<'_>) {
        if self.debug_enabled {
            self.dispatch(Severity::Debug, message);
        }
    }

    /// Log at the given severity.
    pub fn log(&self, severity: Severity, message: Message<'_>) {
        match severity {
            Severity::Debug => self.debug(message),
            Severity::Info => self.info(message),
            Severity::Error => self.error(message),
        }
    }

    /// Whether debug messages produce output.
    #[inline]
    pub fn debug_enabled(&self) -> bool {
        self.debug_enabled
    }

    /// Whether the error budget is exhausted.
    pub fn is_silenced(&self) -> bool {
        self.budget.state() == BudgetState::Silent
    }

    /// Get the error budget.
    pub fn error_budget(&self) -> &ErrorBudget {
        &self.budget
    }

    /// Get the metrics.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Get the number of registered sinks.
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    /// Get the maximum byte length of a rendered line.
    pub fn line_capacity(&self) -> usize {
        self.line_capacity
    }

    fn dispatch(&self, severity: Severity, message: Message<'_>) {
        let line = LogRecord::new(severity, self.clock.now(), message).render(self.line_capacity);
        if line.is_truncated() {
            self.metrics.record_truncated();
        }

        for sink in self.sinks.iter() {
            if sink.write_line(severity, line.as_str()).is_err() {
                self.metrics.record_sink_failure();
            }
        }

        self.metrics.record_emitted();
    }
}
