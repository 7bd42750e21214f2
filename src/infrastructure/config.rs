//! Logger configuration values.
//!
//! Loading configuration is left to the host. With the `serde` feature,
//! [`LoggerConfig`] can be embedded in the host's own config file; missing
//! fields fall back to their defaults.

use crate::application::error_budget::DEFAULT_MAX_ERRORS;
use crate::domain::record::DEFAULT_LINE_CAPACITY;

/// Plain configuration for a `RateLimitedLogger`.
///
/// Validation happens in `RateLimitedLoggerBuilder::build`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LoggerConfig {
    /// Error lines logged before going silent
    pub max_errors: u64,
    /// Whether debug messages produce output
    pub debug_enabled: bool,
    /// Maximum byte length of a rendered line
    pub line_capacity: usize,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            max_errors: DEFAULT_MAX_ERRORS,
            debug_enabled: cfg!(debug_assertions),
            line_capacity: DEFAULT_LINE_CAPACITY,
        }
    }
}

impl LoggerConfig {
    /// Start a builder from this configuration.
    pub fn builder(&self) -> crate::infrastructure::builder::RateLimitedLoggerBuilder {
        crate::infrastructure::builder::RateLimitedLoggerBuilder::from_config(self)
    }
}
