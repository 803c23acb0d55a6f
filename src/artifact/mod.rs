//! Artifact subsystem for stayscore
//!
//! The trained pipeline and its bound explainer are produced by an offline
//! training process and exported as JSON artifacts. This module owns:
//!
//! - The deserialized artifact types and their capability surfaces
//!   (`PipelineArtifact`: predict / predict_proba / decision_function /
//!   transform / feature_names_out; `ExplainerArtifact`: shap_values /
//!   expected_value)
//! - The one-row `Frame` the pipeline consumes
//! - `ArtifactStore`, the load-at-most-once process-wide cache
//!
//! # Principles
//!
//! - Artifacts are read-only after load; nothing here mutates them
//! - A load failure is cached and reported, never retried within a process
//! - Pipeline and explainer are cross-validated at load time so a mismatched
//!   pair is rejected before it can serve a single request

mod errors;
mod explainer;
mod frame;
mod loader;
mod pipeline;

pub use errors::{ArtifactError, ArtifactResult, ModelError, ModelResult};
pub use explainer::{ExpectedValue, ExplainerArtifact, OutputLayout, ShapOutput};
pub use frame::Frame;
pub use loader::{ArtifactPaths, ArtifactStore, LoadedArtifacts};
pub use pipeline::{Classifier, Encoder, EncoderKind, PipelineArtifact, Preprocessing};
