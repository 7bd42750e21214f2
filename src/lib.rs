//! # log-budget
//!
//! Timestamped multi-sink logging with an error budget.
//!
//! A [`RateLimitedLogger`] renders every call as one line,
//! `YYYY-MM-DD HH:MM:SS ±ZZZZ: <message>`, and writes it to each registered
//! sink. Error calls draw from a fixed budget. The call that spends the last
//! unit is logged together with a one-time notice, and every error call after
//! it is dropped for the rest of the process. Info calls are never limited.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use log_budget::{log_debug, log_error, log_info, FileSink, RateLimitedLogger, StderrSink};
//! use std::fs::OpenOptions;
//! use std::sync::Arc;
//!
//! let file = OpenOptions::new().create(true).append(true).open("app.log").unwrap();
//! let file_sink = Arc::new(FileSink::new(file));
//!
//! let logger = RateLimitedLogger::builder()
//!     .with_sink(Arc::new(StderrSink::new()))
//!     .with_sink(file_sink.clone())
//!     .with_max_errors(100)
//!     .build()
//!     .unwrap();
//!
//! log_info!(logger, "session started, {} devices", 2);
//! log_error!(logger, "failed to acquire swapchain image: {}", -3);
//! log_debug!(logger, "frame {} submitted", 42);
//!
//! // Closing the file later turns further writes to it into no-ops
//! file_sink.close().unwrap();
//! ```
//!
//! ## Error Budget
//!
//! With a budget of 3, errors `a`, `b`, `c`, `d` produce four lines:
//!
//! ```text
//! 2024-05-01 10:00:00 +0200: a
//! 2024-05-01 10:00:00 +0200: b
//! 2024-05-01 10:00:00 +0200: c
//! 2024-05-01 10:00:00 +0200: Maximum number of errors logged. Going silent.
//! ```
//!
//! The budget is a one-way circuit breaker. It is updated with a single
//! atomic read-modify-write, so when many threads hit the limit at once
//! exactly one of them logs the notice. Once silent, error calls return
//! before formatting their arguments.
//!
//! ```rust
//! # use log_budget::{log_error, RateLimitedLogger};
//! let logger = RateLimitedLogger::builder().with_max_errors(1).build().unwrap();
//! log_error!(logger, "first");
//! assert!(logger.is_silenced());
//! assert_eq!(logger.error_budget().remaining(), 0);
//! ```
//!
//! ## Debug Output
//!
//! Debug output is switched on or off once, at construction
//! ([`RateLimitedLoggerBuilder::with_debug`]). It defaults to on in builds
//! with `debug_assertions`. When it is off, `log_debug!` does not even
//! evaluate its arguments.
//!
//! ## Sinks
//!
//! - [`FileSink`]: an already-open file, flushed per line, closable by its owner
//! - [`StderrSink`]: the process debug-output channel
//! - [`WriterSink`]: any `io::Write`
//! - [`TracingSink`]: forwards lines to the current `tracing` subscriber
//!
//! Implement [`LogSink`] for anything else. Sinks serialize their own writes,
//! and their errors are counted in [`Metrics`] but never returned to callers.
//!
//! ## Failure Semantics
//!
//! Logging never fails the caller:
//! - lines longer than the capacity (default 1024 bytes) are truncated
//! - failed sink writes are dropped
//! - a `Display` impl that errors is replaced by the raw format template
//!
//! Only construction can fail, with a [`BuildError`].

// Domain layer - pure logging concepts
pub mod domain;

// Application layer - orchestration
pub mod application;

// Infrastructure layer - external adapters
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use domain::{
    record::{LineBuffer, LogRecord, Message, DEFAULT_LINE_CAPACITY, TIMESTAMP_FORMAT},
    severity::Severity,
};

pub use application::{
    error_budget::{
        BudgetDecision, BudgetError, BudgetState, ErrorBudget, DEFAULT_MAX_ERRORS, SILENCE_NOTICE,
    },
    logger::RateLimitedLogger,
    metrics::{Metrics, MetricsSnapshot},
    ports::{Clock, LogSink},
};

pub use infrastructure::{
    builder::{BuildError, RateLimitedLoggerBuilder},
    clock::SystemClock,
    config::LoggerConfig,
    sink::{FileSink, StderrSink, TracingSink, WriterSink},
};

/// Build a [`Message`] from a format string and arguments.
///
/// Arguments are type-checked like `format!`, but nothing is formatted until
/// a sink needs the line.
///
/// ```
/// use log_budget::message;
///
/// let attempts = 3;
/// assert_eq!(message!("retrying after {} attempts", attempts).template(), "retrying after {} attempts");
/// ```
#[macro_export]
macro_rules! message {
    ($fmt:literal $(,)?) => {
        $crate::Message::new($fmt, ::core::format_args!($fmt))
    };
    ($fmt:literal, $($arg:tt)+) => {
        $crate::Message::new($fmt, ::core::format_args!($fmt, $($arg)+))
    };
}

/// Log at info severity.
///
/// ```
/// # use log_budget::{log_info, RateLimitedLogger};
/// # let logger = RateLimitedLogger::builder().build().unwrap();
/// log_info!(logger, "loaded {} bindings", 12);
/// ```
#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.info($crate::message!($($arg)+))
    };
}

/// Log at error severity, subject to the error budget.
///
/// ```
/// # use log_budget::{log_error, RateLimitedLogger};
/// # let logger = RateLimitedLogger::builder().build().unwrap();
/// log_error!(logger, "xrCreateSession failed: {}", "XR_ERROR_RUNTIME_FAILURE");
/// ```
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.error($crate::message!($($arg)+))
    };
}

/// Log at debug severity.
///
/// Arguments are not evaluated when the logger has debug output disabled.
///
/// ```
/// # use log_budget::{log_debug, RateLimitedLogger};
/// # let logger = RateLimitedLogger::builder().with_debug(false).build().unwrap();
/// log_debug!(logger, "pose {:?}", expensive_pose());
/// # fn expensive_pose() -> (f32, f32, f32) { unreachable!() }
/// ```
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)+) => {{
        let logger = &$logger;
        if logger.debug_enabled() {
            logger.debug($crate::message!($($arg)+));
        }
    }};
}
