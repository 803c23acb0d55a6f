//! Observability subsystem for stayscore
//!
//! Structured logging and operational counters for the prediction service.
//!
//! # Principles
//!
//! 1. Observability is read-only: no side effects on prediction results
//! 2. Logs are synchronous, one JSON line per event
//! 3. Deterministic output: fields are emitted in sorted key order
//! 4. Counters are monotonic and reset only on process start

mod logger;
mod metrics;

pub use logger::{Logger, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot};
