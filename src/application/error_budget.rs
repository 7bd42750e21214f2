//! Error budget for error-severity logging.
//!
//! A one-way circuit breaker: every error call consumes one unit of budget,
//! and once the budget is exhausted the error severity goes silent for the
//! lifetime of the budget. Exactly one call observes the transition and is
//! responsible for announcing it.

use std::sync::atomic::{AtomicU64, Ordering};

/// Notice logged once, at info severity, when the budget trips.
pub const SILENCE_NOTICE: &str = "Maximum number of errors logged. Going silent.";

/// Default number of error lines allowed before going silent.
pub const DEFAULT_MAX_ERRORS: u64 = 100;

/// Error returned when error budget validation fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetError {
    /// Maximum error count must be greater than zero
    ZeroMaxErrors,
}

impl std::fmt::Display for BudgetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BudgetError::ZeroMaxErrors => {
                write!(f, "max_errors must be greater than 0")
            }
        }
    }
}

impl std::error::Error for BudgetError {}

/// Error budget states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetState {
    /// Fewer errors than the maximum have been registered
    Active,
    /// The budget is exhausted, error calls produce no output
    Silent,
}

/// Outcome of registering one error call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetDecision {
    /// Budget remains, emit the error
    Emit,
    /// This call spent the last unit: emit the error, then the silence notice
    EmitAndSilence,
    /// Budget already exhausted, drop the call without formatting it
    Suppress,
}

impl BudgetDecision {
    /// Check if the error line should be emitted.
    pub fn is_emit(&self) -> bool {
        matches!(self, BudgetDecision::Emit | BudgetDecision::EmitAndSilence)
    }

    /// Check if this call tripped the budget.
    pub fn trips(&self) -> bool {
        matches!(self, BudgetDecision::EmitAndSilence)
    }
}

/// Atomic error counter with a fixed maximum.
///
/// The counter only grows. It saturates at `u64::MAX` instead of wrapping,
/// so a silent budget can never become active again.
#[derive(Debug)]
pub struct ErrorBudget {
    errors_seen: AtomicU64,
    max_errors: u64,
}

impl ErrorBudget {
    /// Create a budget allowing `max_errors` error lines.
    ///
    /// # Errors
    /// Returns `BudgetError::ZeroMaxErrors` if `max_errors` is zero.
    pub fn new(max_errors: u64) -> Result<Self, BudgetError> {
        if max_errors == 0 {
            return Err(BudgetError::ZeroMaxErrors);
        }

        Ok(Self {
            errors_seen: AtomicU64::new(0),
            max_errors,
        })
    }

    /// Register one error call and decide what to do with it.
    ///
    /// The increment is a single atomic read-modify-write, so among any number
    /// of concurrent callers exactly one receives `EmitAndSilence`.
    pub fn register_error(&self) -> BudgetDecision {
        let previous = self
            .errors_seen
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |seen| {
                Some(seen.saturating_add(1))
            })
            .unwrap_or_else(|seen| seen);

        if previous >= self.max_errors {
            BudgetDecision::Suppress
        } else if previous + 1 == self.max_errors {
            BudgetDecision::EmitAndSilence
        } else {
            BudgetDecision::Emit
        }
    }

    /// Get the current budget state.
    pub fn state(&self) -> BudgetState {
        if self.errors_seen() >= self.max_errors {
            BudgetState::Silent
        } else {
            BudgetState::Active
        }
    }

    /// Get the number of error calls registered so far, including suppressed ones.
    pub fn errors_seen(&self) -> u64 {
        self.errors_seen.load(Ordering::Acquire)
    }

    /// Get the configured maximum.
    pub fn max_errors(&self) -> u64 {
        self.max_errors
    }

    /// Get the number of error lines that may still be emitted.
    pub fn remaining(&self) -> u64 {
        self.max_errors.saturating_sub(self.errors_seen())
    }

    /// Reset the counter to zero.
    ///
    /// Production code never resets a budget; this exists so test fixtures can
    /// reuse one.
    #[cfg(any(test, feature = "test-helpers"))]
    pub fn reset(&self) {
        self.errors_seen.store(0, Ordering::Release);
    }
}

impl Default for ErrorBudget {
    fn default() -> Self {
        Self {
            errors_seen: AtomicU64::new(0),
            max_errors: DEFAULT_MAX_ERRORS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Barrier};
    use std::thread;

    #[test]
    fn test_initial_state() {
        let budget = ErrorBudget::default();
        assert_eq!(budget.state(), BudgetState::Active);
        assert_eq!(budget.errors_seen(), 0);
        assert_eq!(budget.max_errors(), DEFAULT_MAX_ERRORS);
        assert_eq!(budget.remaining(), DEFAULT_MAX_ERRORS);
    }

    #[test]
    fn test_zero_max_rejected() {
        assert_eq!(ErrorBudget::new(0).unwrap_err(), BudgetError::ZeroMaxErrors);
        assert_eq!(
            BudgetError::ZeroMaxErrors.to_string(),
            "max_errors must be greater than 0"
        );
    }

    #[test]
    fn test_decisions_around_threshold() {
        let budget = ErrorBudget::new(3).unwrap();

        assert_eq!(budget.register_error(), BudgetDecision::Emit);
        assert_eq!(budget.register_error(), BudgetDecision::Emit);
        assert_eq!(budget.state(), BudgetState::Active);
        assert_eq!(budget.remaining(), 1);

        assert_eq!(budget.register_error(), BudgetDecision::EmitAndSilence);
        assert_eq!(budget.state(), BudgetState::Silent);

        assert_eq!(budget.register_error(), BudgetDecision::Suppress);
        assert_eq!(budget.register_error(), BudgetDecision::Suppress);
        assert_eq!(budget.errors_seen(), 5);
        assert_eq!(budget.remaining(), 0);
    }

    #[test]
    fn test_budget_of_one_trips_immediately() {
        let budget = ErrorBudget::new(1).unwrap();
        assert_eq!(budget.register_error(), BudgetDecision::EmitAndSilence);
        assert_eq!(budget.register_error(), BudgetDecision::Suppress);
    }

    #[test]
    fn test_decision_helpers() {
        assert!(BudgetDecision::Emit.is_emit());
        assert!(BudgetDecision::EmitAndSilence.is_emit());
        assert!(!BudgetDecision::Suppress.is_emit());
        assert!(BudgetDecision::EmitAndSilence.trips());
        assert!(!BudgetDecision::Emit.trips());
    }

    #[test]
    fn test_counter_saturates() {
        let budget = ErrorBudget::new(u64::MAX).unwrap();
        budget.errors_seen.store(u64::MAX - 1, Ordering::Release);

        assert_eq!(budget.register_error(), BudgetDecision::EmitAndSilence);
        assert_eq!(budget.register_error(), BudgetDecision::Suppress);
        assert_eq!(budget.errors_seen(), u64::MAX);
        assert_eq!(budget.state(), BudgetState::Silent);
    }

    #[test]
    fn test_reset() {
        let budget = ErrorBudget::new(1).unwrap();
        budget.register_error();
        assert_eq!(budget.state(), BudgetState::Silent);

        budget.reset();
        assert_eq!(budget.state(), BudgetState::Active);
        assert_eq!(budget.register_error(), BudgetDecision::EmitAndSilence);
    }

    #[test]
    fn test_concurrent_trip_observed_once() {
        let budget = Arc::new(ErrorBudget::new(4).unwrap());
        for _ in 0..3 {
            budget.register_error();
        }

        let threads = 16;
        let barrier = Arc::new(Barrier::new(threads));
        let handles: Vec<_> = (0..threads)
            .map(|_| {
                let budget = Arc::clone(&budget);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    budget.register_error()
                })
            })
            .collect();

        let decisions: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        let trips = decisions.iter().filter(|d| d.trips()).count();
        let emits = decisions.iter().filter(|d| **d == BudgetDecision::Emit).count();
        assert_eq!(trips, 1);
        assert_eq!(emits, 0);
        assert_eq!(budget.errors_seen(), 3 + threads as u64);
    }

    #[test]
    fn test_concurrent_many_errors() {
        let budget = Arc::new(ErrorBudget::new(100).unwrap());
        let mut handles = vec![];

        // 8 threads, 50 errors each
        for _ in 0..8 {
            let budget = Arc::clone(&budget);
            handles.push(thread::spawn(move || {
                let mut emitted = 0;
                let mut trips = 0;
                for _ in 0..50 {
                    let decision = budget.register_error();
                    if decision.is_emit() {
                        emitted += 1;
                    }
                    if decision.trips() {
                        trips += 1;
                    }
                }
                (emitted, trips)
            }));
        }

        let (emitted, trips) = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .fold((0, 0), |acc, (e, t)| (acc.0 + e, acc.1 + t));

        assert_eq!(emitted, 100);
        assert_eq!(trips, 1);
        assert_eq!(budget.errors_seen(), 400);
    }
}
