//! Inference & explanation service
//!
//! One orchestrating operation, `PredictionService::predict_and_explain`:
//! wrap a validated booking record into the trained column frame, classify
//! it, transform it through the preprocessing stage in isolation, attribute
//! the prediction through the explainer, and assemble the prediction and
//! explanation results.
//!
//! All failures along that path are per-request: they surface with their
//! cause and leave the process serving the next request.

mod errors;
mod predictor;
mod result;
mod shap_adapter;

pub use errors::{ServiceError, ServiceResult};
pub use predictor::{frame_from_record, PredictionService, POSITIVE_LABEL};
pub use result::{Contribution, ExplanationResult, Outcome, PredictionResult, DISPLAY_LIMIT};
pub use shap_adapter::{base_value_for_class, contributions_for_class, positive_class_index};
