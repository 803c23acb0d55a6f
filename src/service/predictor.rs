//! The predict-and-explain orchestration
//!
//! Strictly linear per request: validate -> frame -> transform -> classify
//! -> attribute -> cross-check -> assemble. The shared artifact pair is
//! immutable; the service holds nothing else.

use std::sync::Arc;

use serde_json::json;

use crate::artifact::{Frame, LoadedArtifacts};
use crate::booking::{BookingRecord, COLUMNS};

use super::errors::{ServiceError, ServiceResult};
use super::result::{Contribution, ExplanationResult, Outcome, PredictionResult};
use super::shap_adapter::{base_value_for_class, contributions_for_class, positive_class_index};

/// Class label the trainer assigns to "booking was cancelled"
pub const POSITIVE_LABEL: i64 = 1;

/// Tolerance for the base + contributions ≈ raw score identity
const ADDITIVITY_TOLERANCE: f64 = 1e-3;

/// Wrap one record into the single-row frame the pipeline was trained on,
/// with the exact trained column names and order
pub fn frame_from_record(record: &BookingRecord) -> Frame {
    Frame::from_pairs(vec![
        (COLUMNS[0].to_string(), json!(record.country.as_str())),
        (COLUMNS[1].to_string(), json!(record.market_segment.as_str())),
        (COLUMNS[2].to_string(), json!(record.deposit_type.as_str())),
        (COLUMNS[3].to_string(), json!(record.customer_type.as_str())),
        (
            COLUMNS[4].to_string(),
            json!(record.reserved_room_type.as_str()),
        ),
        (COLUMNS[5].to_string(), json!(record.previous_cancellations)),
        (COLUMNS[6].to_string(), json!(record.booking_changes)),
        (COLUMNS[7].to_string(), json!(record.days_in_waiting_list)),
        (
            COLUMNS[8].to_string(),
            json!(record.required_car_parking_spaces),
        ),
        (
            COLUMNS[9].to_string(),
            json!(record.total_of_special_requests),
        ),
    ])
}

/// Inference & explanation service over a loaded artifact pair
#[derive(Debug, Clone)]
pub struct PredictionService {
    artifacts: Arc<LoadedArtifacts>,
}

impl PredictionService {
    pub fn new(artifacts: Arc<LoadedArtifacts>) -> Self {
        PredictionService { artifacts }
    }

    /// Transformed feature count, for status reporting
    pub fn feature_count(&self) -> usize {
        self.artifacts.pipeline.n_transformed_features()
    }

    /// Trained class labels, for status reporting
    pub fn classes(&self) -> Vec<i64> {
        self.artifacts.pipeline.classes().to_vec()
    }

    /// Predict one booking's cancellation and explain the prediction
    pub fn predict_and_explain(
        &self,
        record: &BookingRecord,
    ) -> ServiceResult<(PredictionResult, ExplanationResult)> {
        record.validate()?;
        let frame = frame_from_record(record);

        let pipeline = &self.artifacts.pipeline;
        let explainer = &self.artifacts.explainer;

        // Encode once; classification and attribution share the transformed
        // vector, so label, probability, and score agree by construction
        let transformed = pipeline.transform(&frame)?;
        let feature_names = pipeline.feature_names_out();
        let classifier = &pipeline.classifier;

        // Classification
        let proba = classifier.predict_proba(&transformed)?;
        let proba_index = positive_class_index(pipeline.classes(), POSITIVE_LABEL)?;
        let probability_of_cancellation = proba[proba_index];
        let label = if classifier.predict(&transformed)? == POSITIVE_LABEL {
            Outcome::WillCancel
        } else {
            Outcome::WillProceed
        };

        // Attribution, normalized to the positive class
        let shap_output = explainer.shap_values(&transformed)?;
        let class_index = positive_class_index(&explainer.classes, explainer.positive_class)?;
        let values = contributions_for_class(
            &shap_output,
            class_index,
            explainer.classes.len(),
            transformed.len(),
        )?;
        let base_value = base_value_for_class(
            &explainer.expected_value(),
            class_index,
            explainer.classes.len(),
        )?;

        if values.len() != feature_names.len() {
            return Err(ServiceError::ContributionCountMismatch {
                contributions: values.len(),
                features: feature_names.len(),
            });
        }

        // Additivity guard: the explanation must reconstruct the raw score
        // of the class it attributes to. The classifier's decision function
        // is the log-odds of its second class, so the reference flips sign
        // when the attributed class sits first in the pipeline's class order.
        let raw_score = classifier.decision_function(&transformed)?;
        let score = if pipeline.classes()[1] == explainer.positive_class {
            raw_score
        } else {
            -raw_score
        };
        let sum: f64 = values.iter().sum();
        if (base_value + sum - score).abs() > ADDITIVITY_TOLERANCE {
            return Err(ServiceError::InconsistentExplanation {
                base: base_value,
                sum,
                score,
            });
        }

        let contributions = feature_names
            .into_iter()
            .zip(values)
            .map(|(feature, value)| Contribution { feature, value })
            .collect();

        Ok((
            PredictionResult {
                label,
                probability_of_cancellation,
            },
            ExplanationResult {
                base_value,
                contributions,
            },
        ))
    }
}
