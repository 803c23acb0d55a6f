//! Operational counters for the prediction service
//!
//! Counters only, monotonic, reset on process start. Relaxed atomics are
//! enough: metrics tolerate eventual consistency.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Counter registry shared across requests
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    /// Prediction requests answered with a result
    predictions_served: AtomicU64,
    /// Prediction requests that failed during inference or explanation
    predictions_failed: AtomicU64,
    /// Requests rejected at record validation
    records_rejected: AtomicU64,
    /// Requests refused because the artifact pair never loaded
    predictions_unavailable: AtomicU64,
}

impl MetricsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_predictions_served(&self) {
        self.predictions_served.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_predictions_failed(&self) {
        self.predictions_failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_records_rejected(&self) {
        self.records_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_predictions_unavailable(&self) {
        self.predictions_unavailable.fetch_add(1, Ordering::Relaxed);
    }

    pub fn predictions_served(&self) -> u64 {
        self.predictions_served.load(Ordering::Relaxed)
    }

    /// Point-in-time copy of all counters
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            predictions_served: self.predictions_served.load(Ordering::Relaxed),
            predictions_failed: self.predictions_failed.load(Ordering::Relaxed),
            records_rejected: self.records_rejected.load(Ordering::Relaxed),
            predictions_unavailable: self.predictions_unavailable.load(Ordering::Relaxed),
            captured_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Serializable counter snapshot
#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    pub predictions_served: u64,
    pub predictions_failed: u64,
    pub records_rejected: u64,
    pub predictions_unavailable: u64,
    pub captured_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let metrics = MetricsRegistry::new();
        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.predictions_served, 0);
        assert_eq!(snapshot.predictions_failed, 0);
        assert_eq!(snapshot.records_rejected, 0);
        assert_eq!(snapshot.predictions_unavailable, 0);
    }

    #[test]
    fn test_increments_are_visible_in_snapshot() {
        let metrics = MetricsRegistry::new();
        metrics.increment_predictions_served();
        metrics.increment_predictions_served();
        metrics.increment_predictions_failed();
        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.predictions_served, 2);
        assert_eq!(snapshot.predictions_failed, 1);
    }
}
