//! Per-request service errors
//!
//! Everything here is recoverable: the failing request reports its cause and
//! the service keeps accepting requests.

use thiserror::Error;

use crate::artifact::ModelError;
use crate::booking::RecordError;

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Failures during one predict-and-explain request
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ServiceError {
    /// Record failed domain or bounds validation
    #[error("invalid booking record: {0}")]
    InvalidRecord(#[from] RecordError),

    /// Pipeline or explainer evaluation failed
    #[error("model evaluation failed: {0}")]
    Model(#[from] ModelError),

    /// A class label required by the service is absent from the artifact
    #[error("class {class} is not among artifact classes {classes:?}")]
    UnknownClass { class: i64, classes: Vec<i64> },

    /// Contribution list length differs from the transformed feature count
    #[error("{contributions} contributions returned for {features} transformed features")]
    ContributionCountMismatch {
        contributions: usize,
        features: usize,
    },

    /// Additivity identity broken: base + contributions must reconstruct the
    /// model's raw score
    #[error(
        "inconsistent explanation: base {base} + contribution sum {sum} \
         does not reconstruct model score {score}"
    )]
    InconsistentExplanation { base: f64, sum: f64, score: f64 },
}
