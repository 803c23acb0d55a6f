//! Prediction API routes
//!
//! `/predict`, `/schema`, and `/status` under the `/api` nest. The shared
//! state carries the artifact availability decided at boot: either a ready
//! `PredictionService` or the static startup-tier diagnostic.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use uuid::Uuid;

use crate::booking::{form_schema, BookingRecord, FieldSpec};
use crate::observability::{Logger, MetricsRegistry};
use crate::service::{
    Contribution, ExplanationResult, PredictionResult, PredictionService, ServiceError,
    DISPLAY_LIMIT,
};

use super::errors::{HttpError, HttpResult};

/// Whether prediction is possible for this process
#[derive(Debug, Clone)]
pub enum Availability {
    Ready(PredictionService),
    /// Startup-tier failure: the static diagnostic shown for every request
    Disabled { reason: String },
}

/// Shared state for the prediction routes
#[derive(Debug)]
pub struct PredictState {
    pub availability: Availability,
    pub metrics: Arc<MetricsRegistry>,
}

impl PredictState {
    pub fn new(availability: Availability, metrics: Arc<MetricsRegistry>) -> Self {
        PredictState {
            availability,
            metrics,
        }
    }
}

/// Prediction plus its explanation, as served over the wire
#[derive(Debug, Clone, Serialize)]
pub struct PredictResponse {
    pub prediction: PredictionResult,
    pub explanation: ExplanationBody,
}

/// Explanation with both the full raw list and the display view
#[derive(Debug, Clone, Serialize)]
pub struct ExplanationBody {
    pub base_value: f64,
    /// Full contribution list in transformed-feature order
    pub contributions: Vec<Contribution>,
    /// Ranked by descending absolute value, capped for display
    pub top_contributions: Vec<Contribution>,
}

impl ExplanationBody {
    fn from_result(explanation: ExplanationResult) -> Self {
        let top_contributions = explanation.top_contributions(DISPLAY_LIMIT);
        ExplanationBody {
            base_value: explanation.base_value,
            contributions: explanation.contributions,
            top_contributions,
        }
    }
}

/// Form schema response
#[derive(Debug, Clone, Serialize)]
pub struct SchemaResponse {
    pub fields: Vec<FieldSpec>,
}

/// Artifact availability report
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub model_loaded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<Vec<i64>>,
}

/// Build the `/api` router
pub fn api_routes(state: Arc<PredictState>) -> Router {
    Router::new()
        .route("/predict", post(predict))
        .route("/schema", get(schema))
        .route("/status", get(status))
        .with_state(state)
}

async fn predict(
    State(state): State<Arc<PredictState>>,
    Json(record): Json<BookingRecord>,
) -> HttpResult<Json<PredictResponse>> {
    let request_id = Uuid::new_v4().to_string();

    let service = match &state.availability {
        Availability::Ready(service) => service,
        Availability::Disabled { reason } => {
            state.metrics.increment_predictions_unavailable();
            Logger::warn(
                "PREDICTION_UNAVAILABLE",
                &[("request_id", request_id.as_str())],
            );
            return Err(HttpError::PredictionUnavailable(reason.clone()));
        }
    };

    match service.predict_and_explain(&record) {
        Ok((prediction, explanation)) => {
            state.metrics.increment_predictions_served();
            let label = format!("{:?}", prediction.label);
            let probability = format!("{:.4}", prediction.probability_of_cancellation);
            Logger::info(
                "PREDICTION_SERVED",
                &[
                    ("label", label.as_str()),
                    ("probability", probability.as_str()),
                    ("request_id", request_id.as_str()),
                ],
            );
            Ok(Json(PredictResponse {
                prediction,
                explanation: ExplanationBody::from_result(explanation),
            }))
        }
        Err(err) => {
            match &err {
                ServiceError::InvalidRecord(_) => state.metrics.increment_records_rejected(),
                _ => state.metrics.increment_predictions_failed(),
            }
            let cause = err.to_string();
            Logger::error(
                "PREDICTION_FAILED",
                &[("cause", cause.as_str()), ("request_id", request_id.as_str())],
            );
            Err(err.into())
        }
    }
}

async fn schema() -> Json<SchemaResponse> {
    Json(SchemaResponse {
        fields: form_schema(),
    })
}

async fn status(State(state): State<Arc<PredictState>>) -> Json<StatusResponse> {
    let response = match &state.availability {
        Availability::Ready(service) => StatusResponse {
            model_loaded: true,
            detail: None,
            feature_count: Some(service.feature_count()),
            classes: Some(service.classes()),
        },
        Availability::Disabled { reason } => StatusResponse {
            model_loaded: false,
            detail: Some(reason.clone()),
            feature_count: None,
            classes: None,
        },
    };
    Json(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explanation_body_keeps_full_list() {
        let explanation = ExplanationResult {
            base_value: 0.1,
            contributions: (0..15)
                .map(|i| Contribution {
                    feature: format!("f{}", i),
                    value: i as f64,
                })
                .collect(),
        };
        let body = ExplanationBody::from_result(explanation);
        assert_eq!(body.contributions.len(), 15);
        assert_eq!(body.top_contributions.len(), DISPLAY_LIMIT);
        // Largest magnitude first in the display view
        assert_eq!(body.top_contributions[0].feature, "f14");
        // Raw list untouched
        assert_eq!(body.contributions[0].feature, "f0");
    }

    #[tokio::test]
    async fn test_predict_returns_503_while_disabled() {
        let reason = "Prediction is disabled: artifact not found. Required files:\n  \
                      - models/pipeline.json\n  - models/explainer.json";
        let state = Arc::new(PredictState::new(
            Availability::Disabled {
                reason: reason.to_string(),
            },
            Arc::new(MetricsRegistry::new()),
        ));

        let err = predict(State(state.clone()), Json(BookingRecord::default()))
            .await
            .unwrap_err();

        assert_eq!(
            err.status_code(),
            axum::http::StatusCode::SERVICE_UNAVAILABLE
        );
        match err {
            HttpError::PredictionUnavailable(detail) => {
                assert!(detail.contains("models/pipeline.json"));
                assert!(detail.contains("models/explainer.json"));
            }
            other => panic!("expected PredictionUnavailable, got {:?}", other),
        }
        assert_eq!(state.metrics.snapshot().predictions_unavailable, 1);
    }

    #[test]
    fn test_status_serialization_omits_absent_fields() {
        let response = StatusResponse {
            model_loaded: false,
            detail: Some("artifacts missing".to_string()),
            feature_count: None,
            classes: None,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["model_loaded"], false);
        assert!(json.get("feature_count").is_none());
    }
}
