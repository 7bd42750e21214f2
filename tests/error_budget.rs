//! Error budget behavior observed through sinks.

use chrono::{FixedOffset, TimeZone};
use log_budget::infrastructure::mocks::{MemorySink, MockClock};
use log_budget::{
    log_error, log_info, BudgetState, ErrorBudget, RateLimitedLogger, Severity, SILENCE_NOTICE,
};
use std::sync::Arc;

fn logger_with(sink: &MemorySink, max_errors: u64) -> RateLimitedLogger {
    let clock = MockClock::new(
        FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 5, 1, 10, 0, 0)
            .unwrap(),
    );
    RateLimitedLogger::builder()
        .with_sink(Arc::new(sink.clone()))
        .with_clock(Arc::new(clock))
        .with_max_errors(max_errors)
        .build()
        .unwrap()
}

#[test]
fn test_errors_below_max_all_dispatched() {
    let max = 10;
    for n in 0..max {
        let sink = MemorySink::new();
        let logger = logger_with(&sink, max);

        for i in 0..n {
            log_error!(logger, "error {}", i);
        }

        assert_eq!(sink.count(), n as usize);
        assert_eq!(sink.count_ending_with(SILENCE_NOTICE), 0);
        assert!(!logger.is_silenced());
    }
}

#[test]
fn test_tripping_call_emits_two_lines() {
    let sink = MemorySink::new();
    let logger = logger_with(&sink, 5);

    for i in 0..4 {
        log_error!(logger, "error {}", i);
    }
    let before = sink.count();

    log_error!(logger, "the last one");

    let lines = sink.lines();
    assert_eq!(sink.count() - before, 2);
    assert!(lines[before].ends_with(": the last one"));
    assert_eq!(
        lines[before + 1],
        format!("2024-05-01 10:00:00 +0000: {}", SILENCE_NOTICE)
    );
}

#[test]
fn test_silent_for_the_rest_of_the_run() {
    let sink = MemorySink::new();
    let logger = logger_with(&sink, 2);

    log_error!(logger, "one");
    log_error!(logger, "two");
    let after_trip = sink.count();

    for i in 0..1000 {
        log_error!(logger, "ignored {}", i);
    }

    assert_eq!(sink.count(), after_trip);
    assert_eq!(logger.error_budget().state(), BudgetState::Silent);
    assert_eq!(logger.metrics().errors_suppressed(), 1000);
    assert_eq!(logger.error_budget().errors_seen(), 1002);
}

#[test]
fn test_max_three_example() {
    let sink = MemorySink::new();
    let logger = logger_with(&sink, 3);

    log_error!(logger, "a");
    log_error!(logger, "b");
    log_error!(logger, "c");

    assert_eq!(
        sink.lines(),
        vec![
            "2024-05-01 10:00:00 +0000: a",
            "2024-05-01 10:00:00 +0000: b",
            "2024-05-01 10:00:00 +0000: c",
            "2024-05-01 10:00:00 +0000: Maximum number of errors logged. Going silent.",
        ]
    );

    log_error!(logger, "d");
    assert_eq!(sink.count(), 4);
}

#[test]
fn test_info_always_dispatched() {
    let sink = MemorySink::new();
    let logger = logger_with(&sink, 1);

    log_info!(logger, "before");
    log_error!(logger, "trip");
    log_info!(logger, "after");
    log_error!(logger, "dropped");
    log_info!(logger, "still after");

    let severities: Vec<_> = sink.captured().iter().map(|c| c.severity).collect();
    assert_eq!(
        severities,
        vec![
            Severity::Info,
            Severity::Error,
            Severity::Info, // notice
            Severity::Info,
            Severity::Info,
        ]
    );
}

#[test]
fn test_independent_loggers_do_not_share_budgets() {
    let sink_a = MemorySink::new();
    let sink_b = MemorySink::new();
    let a = logger_with(&sink_a, 1);
    let b = logger_with(&sink_b, 1);

    log_error!(a, "a trips");
    assert!(a.is_silenced());
    assert!(!b.is_silenced());

    log_error!(b, "b still logs");
    assert_eq!(sink_b.count(), 2);
}

#[test]
fn test_shared_budget_across_loggers() {
    let budget = Arc::new(ErrorBudget::new(2).unwrap());
    let sink = MemorySink::new();
    let build = || {
        RateLimitedLogger::builder()
            .with_sink(Arc::new(sink.clone()))
            .with_error_budget(Arc::clone(&budget))
            .build()
            .unwrap()
    };
    let a = build();
    let b = build();

    log_error!(a, "from a");
    log_error!(b, "from b");
    log_error!(a, "dropped");

    assert_eq!(sink.count(), 3);
    assert_eq!(sink.count_ending_with(SILENCE_NOTICE), 1);
}
