//! Domain layer - pure logging concepts with no I/O.
//!
//! This layer contains the core concepts of the logging facility:
//! - Severities and how they relate to the error budget
//! - Messages (type-safe format arguments plus their template)
//! - Log records and bounded line rendering
//!
//! All types in this layer are pure and easily testable.

pub mod record;
pub mod severity;
