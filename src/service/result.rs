//! Prediction and explanation result types
//!
//! Both are ephemeral, derived per request. The explanation keeps the full
//! order-preserving contribution list; ranking and truncation for display
//! are views, never mutations of the raw list.

use serde::{Deserialize, Serialize};

/// Display cap for the emphasized contribution view
pub const DISPLAY_LIMIT: usize = 10;

/// Binary prediction outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    WillCancel,
    WillProceed,
}

/// Classification result for one booking
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub label: Outcome,
    /// Positive-class probability, always in [0, 1]
    pub probability_of_cancellation: f64,
}

/// One transformed feature's contribution to the prediction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contribution {
    pub feature: String,
    pub value: f64,
}

/// Feature-attribution explanation of one prediction
///
/// Invariant: `base_value + Σ contributions` reconstructs the model's raw
/// score for the positive class (within numeric tolerance); the service
/// enforces this before handing the result out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplanationResult {
    pub base_value: f64,
    /// Contributions in transformed-feature order, one per feature
    pub contributions: Vec<Contribution>,
}

impl ExplanationResult {
    /// Contributions ranked by descending absolute value, truncated to
    /// `limit` for display
    ///
    /// A pure reordering of the raw list: ties keep their original relative
    /// order and nothing is dropped before truncation.
    pub fn top_contributions(&self, limit: usize) -> Vec<Contribution> {
        let mut ranked = self.contributions.clone();
        ranked.sort_by(|a, b| {
            b.value
                .abs()
                .partial_cmp(&a.value.abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ranked.truncate(limit);
        ranked
    }
}
