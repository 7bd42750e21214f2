//! Log severities.

use std::fmt;

/// Severity of a log call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    /// Debug-only output, dropped unless debug output is enabled
    Debug,
    /// Regular operational messages, never rate limited
    Info,
    /// Errors, counted against the error budget
    Error,
}

impl Severity {
    /// Upper-case name of the severity.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Error => "ERROR",
        }
    }

    /// Whether calls at this severity consume the error budget.
    pub fn is_budgeted(&self) -> bool {
        matches!(self, Severity::Error)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
