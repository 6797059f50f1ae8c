//! Observability
//!
//! Structured logging through `tracing`, plus scoped begin/complete events
//! around catalog loading and query execution.
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on query results
//! 3. Log output never shares stdout with command output

mod logger;
mod scope;

pub use logger::{init_logger, LogFormat};
pub use scope::{ObservationScope, Timer};
