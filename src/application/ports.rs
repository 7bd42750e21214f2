//! Ports (interfaces) for the application layer.
//!
//! In hexagonal architecture, ports define the interfaces that the application
//! layer needs. Infrastructure adapters implement these ports.

use crate::domain::severity::Severity;
use chrono::{DateTime, FixedOffset};
use std::fmt::Debug;
use std::io;

/// Port for obtaining the current wall-clock time.
///
/// Log lines carry local time with its UTC offset, so the port returns a
/// fixed-offset datetime rather than a monotonic instant.
/// Infrastructure provides concrete implementations (SystemClock, MockClock).
pub trait Clock: Send + Sync + Debug {
    /// Get the current local time.
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Port for a destination of finished log lines.
///
/// Sinks are owned by the host application and shared with the logger.
/// Infrastructure provides concrete implementations (FileSink, WriterSink,
/// StderrSink, TracingSink).
///
/// # Contract
///
/// - `line` carries no terminator; the sink appends `\n` if its medium needs one.
/// - Concurrent calls must not interleave partial lines. Implementations
///   serialize their own writes.
/// - Errors are returned, not panicked on. The logger counts and discards them.
/// - A sink that has been closed accepts writes as no-ops.
pub trait LogSink: Send + Sync + Debug {
    /// Write one finished line.
    fn write_line(&self, severity: Severity, line: &str) -> io::Result<()>;
}
