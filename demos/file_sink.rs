//! Logging to an externally opened file.
//!
//! The host opens the log file in append mode and keeps a handle to the sink
//! so it can close it during shutdown. Lines logged after closing still reach
//! the other sinks.

use log_budget::{log_error, log_info, FileSink, LoggerConfig, StderrSink};
use std::fs::OpenOptions;
use std::sync::Arc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::temp_dir().join("log-budget-demo.log");
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    let file_sink = Arc::new(FileSink::new(file));

    let config = LoggerConfig {
        max_errors: 2,
        ..LoggerConfig::default()
    };
    let logger = config
        .builder()
        .with_sink(Arc::new(StderrSink::new()))
        .with_sink(file_sink.clone())
        .build()?;

    log_info!(logger, "writing to {}", path.display());
    log_error!(logger, "first failure");
    log_error!(logger, "second failure");
    log_error!(logger, "third failure is suppressed");

    file_sink.close()?;
    log_info!(logger, "only stderr sees this line");

    println!("\nFile contents:\n{}", std::fs::read_to_string(&path)?);
    Ok(())
}
