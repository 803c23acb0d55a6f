//! Artifact error types
//!
//! Two tiers, matching the two failure surfaces:
//!
//! - `ArtifactError`: startup tier. Loading or cross-validating the artifact
//!   pair failed; prediction stays disabled for the process lifetime.
//! - `ModelError`: evaluation tier. A single transform / classification /
//!   attribution call failed; the request is rejected and the process stays
//!   healthy.

use thiserror::Error;

/// Result type for artifact loading
pub type ArtifactResult<T> = Result<T, ArtifactError>;

/// Result type for model evaluation
pub type ModelResult<T> = Result<T, ModelError>;

/// Startup-tier artifact failures
///
/// Clone-able so the load-once cache can hand the same failure to every
/// later caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArtifactError {
    /// Artifact file path did not resolve
    #[error("artifact not found: {path}")]
    NotFound { path: String },

    /// Artifact existed but could not be deserialized or is internally
    /// inconsistent
    #[error("artifact corrupt: {path}: {cause}")]
    Corrupt { path: String, cause: String },

    /// Pipeline and explainer disagree with each other
    #[error("artifact pair mismatch: {detail}")]
    Mismatch { detail: String },
}

/// Evaluation-tier model failures
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// Input frame columns differ from the trained columns
    #[error("column mismatch: pipeline was trained on [{expected}], got [{actual}]")]
    ColumnMismatch { expected: String, actual: String },

    /// A trained column is absent from the input frame
    #[error("missing column: {0}")]
    MissingColumn(String),

    /// A cell holds a value of the wrong type for its encoder
    #[error("column '{column}' expected a {expected} value")]
    UnexpectedType {
        column: String,
        expected: &'static str,
    },

    /// Vector length differs from the trained feature count
    #[error("shape mismatch: expected {expected} values, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// A non-finite number escaped the model arithmetic
    #[error("non-numeric model output: {context}")]
    NonNumeric { context: String },
}
