//! Logger construction.
//!
//! Provides the builder that wires sinks, clock and error budget into a
//! [`RateLimitedLogger`] and validates its configuration.

use crate::application::{
    error_budget::{BudgetError, ErrorBudget},
    logger::RateLimitedLogger,
    ports::{Clock, LogSink},
};
use crate::domain::record::TIMESTAMP_PREFIX_LEN;
use crate::infrastructure::clock::SystemClock;
use crate::infrastructure::config::LoggerConfig;

use std::sync::Arc;

/// Error returned when building a RateLimitedLogger fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// Error budget validation failed
    ErrorBudget(BudgetError),
    /// Line capacity cannot hold the timestamp prefix
    LineCapacityTooSmall {
        /// Requested capacity in bytes
        capacity: usize,
        /// Smallest accepted capacity in bytes
        minimum: usize,
    },
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildError::ErrorBudget(e) => {
                write!(f, "error budget configuration error: {}", e)
            }
            BuildError::LineCapacityTooSmall { capacity, minimum } => {
                write!(
                    f,
                    "line_capacity must be at least {} bytes, got {}",
                    minimum, capacity
                )
            }
        }
    }
}

impl std::error::Error for BuildError {}

impl From<BudgetError> for BuildError {
    fn from(e: BudgetError) -> Self {
        BuildError::ErrorBudget(e)
    }
}

/// Builder for constructing a `RateLimitedLogger`.
pub struct RateLimitedLoggerBuilder {
    sinks: Vec<Arc<dyn LogSink>>,
    clock: Option<Arc<dyn Clock>>,
    budget: Option<Arc<ErrorBudget>>,
    max_errors: u64,
    debug_enabled: bool,
    line_capacity: usize,
}

impl RateLimitedLogger {
    /// Create a builder with default settings.
    ///
    /// Defaults: no sinks, 100 errors before going silent, 1024-byte lines,
    /// debug output enabled only in debug builds.
    pub fn builder() -> RateLimitedLoggerBuilder {
        RateLimitedLoggerBuilder::from_config(&LoggerConfig::default())
    }
}

impl Default for RateLimitedLoggerBuilder {
    fn default() -> Self {
        RateLimitedLogger::builder()
    }
}

impl RateLimitedLoggerBuilder {
    /// Seed a builder from a configuration value.
    pub fn from_config(config: &LoggerConfig) -> Self {
        Self {
            sinks: Vec::new(),
            clock: None,
            budget: None,
            max_errors: config.max_errors,
            debug_enabled: config.debug_enabled,
            line_capacity: config.line_capacity,
        }
    }

    /// Register a sink.
    ///
    /// The caller keeps its own handle, e.g. to close a `FileSink` later.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use log_budget::{FileSink, RateLimitedLogger};
    /// # use std::fs::OpenOptions;
    /// # use std::sync::Arc;
    /// let file = OpenOptions::new().create(true).append(true).open("app.log").unwrap();
    /// let file_sink = Arc::new(FileSink::new(file));
    ///
    /// let logger = RateLimitedLogger::builder()
    ///     .with_sink(file_sink.clone())
    ///     .build()
    ///     .unwrap();
    ///
    /// // Later, during shutdown
    /// file_sink.close().unwrap();
    /// ```
    pub fn with_sink(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.sinks.push(sink);
        self
    }

    /// Register several sinks.
    pub fn with_sinks(mut self, sinks: impl IntoIterator<Item = Arc<dyn LogSink>>) -> Self {
        self.sinks.extend(sinks);
        self
    }

    /// Set a custom clock (mainly for testing).
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Set how many error lines are logged before going silent.
    ///
    /// Default: 100. The value will be validated when `build()` is called.
    pub fn with_max_errors(mut self, max_errors: u64) -> Self {
        self.max_errors = max_errors;
        self
    }

    /// Use an existing error budget instead of creating one.
    ///
    /// Loggers built with the same budget go silent together. Overrides
    /// `with_max_errors`.
    pub fn with_error_budget(mut self, budget: Arc<ErrorBudget>) -> Self {
        self.budget = Some(budget);
        self
    }

    /// Enable or disable debug output.
    ///
    /// Default: enabled in debug builds (`debug_assertions`), disabled otherwise.
    pub fn with_debug(mut self, enabled: bool) -> Self {
        self.debug_enabled = enabled;
        self
    }

    /// Set the maximum byte length of a rendered line.
    ///
    /// Longer lines are truncated. Default: 1024. Must be able to hold the
    /// 27-byte timestamp prefix; validated when `build()` is called.
    pub fn with_line_capacity(mut self, capacity: usize) -> Self {
        self.line_capacity = capacity;
        self
    }

    /// Build the logger.
    ///
    /// # Errors
    /// Returns `BuildError` if the configuration is invalid.
    pub fn build(self) -> Result<RateLimitedLogger, BuildError> {
        if self.line_capacity < TIMESTAMP_PREFIX_LEN {
            return Err(BuildError::LineCapacityTooSmall {
                capacity: self.line_capacity,
                minimum: TIMESTAMP_PREFIX_LEN,
            });
        }

        let budget = match self.budget {
            Some(budget) => budget,
            None => Arc::new(ErrorBudget::new(self.max_errors)?),
        };
        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock::new()));

        Ok(RateLimitedLogger::from_parts(
            self.sinks,
            clock,
            budget,
            self.debug_enabled,
            self.line_capacity,
        ))
    }
}

impl std::fmt::Debug for RateLimitedLoggerBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimitedLoggerBuilder")
            .field("sinks", &self.sinks.len())
            .field("max_errors", &self.max_errors)
            .field("shared_budget", &self.budget.is_some())
            .field("debug_enabled", &self.debug_enabled)
            .field("line_capacity", &self.line_capacity)
            .finish()
    }
}
