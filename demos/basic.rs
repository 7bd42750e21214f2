//! Basic example demonstrating the error budget.
//!
//! Logs to stderr directly and through `tracing`, with a budget of 3 errors.
//! The third error is followed by the one-time notice; later errors vanish
//! while info lines keep flowing.

use log_budget::{log_debug, log_error, log_info, RateLimitedLogger, StderrSink, TracingSink};
use std::sync::Arc;
use tracing_subscriber::prelude::*;

fn main() {
    // Lines forwarded by TracingSink go through a regular fmt layer
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .init();

    let logger = RateLimitedLogger::builder()
        .with_sink(Arc::new(StderrSink::new()))
        .with_sink(Arc::new(TracingSink::new()))
        .with_max_errors(3)
        .with_debug(true)
        .build()
        .expect("valid logger configuration");

    println!("=== Error Budget Example ===\n");
    println!("Budget: 3 errors, then silence\n");

    log_info!(logger, "runtime initialized, api version {}.{}", 1, 0);
    log_debug!(logger, "debug output is enabled");

    println!("Emitting 10 errors:");
    for i in 1..=10 {
        log_error!(logger, "failed to submit frame {}", i);
    }

    println!("\nInfo lines are never limited:");
    for i in 1..=3 {
        log_info!(logger, "heartbeat {}", i);
    }

    let snapshot = logger.metrics().snapshot();
    println!("\n=== Example Complete ===");
    println!(
        "lines emitted: {}, errors suppressed: {}",
        snapshot.lines_emitted, snapshot.errors_suppressed
    );
}
