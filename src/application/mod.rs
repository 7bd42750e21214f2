//! Application layer - orchestration of domain logic.
//!
//! This layer coordinates the domain logic and manages the runtime behavior:
//! - Error budget (one-way circuit breaker for error severity)
//! - Rate limited logger (formatting and fan-out to sinks)
//! - Metrics
//!
//! ## Ports
//!
//! The application layer defines ports (traits) that infrastructure
//! adapters must implement. This keeps the application layer independent
//! from infrastructure details.

pub mod error_budget;
pub mod logger;
pub mod metrics;
pub mod ports;
