//! # HTTP API Errors
//!
//! Error envelope for the prediction API. Service errors keep their cause
//! text; the status mapping is the only translation applied here.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::service::ServiceError;

/// Result type for HTTP handlers
pub type HttpResult<T> = Result<T, HttpError>;

/// HTTP-tier errors
#[derive(Debug, Clone, Error)]
pub enum HttpError {
    /// Record failed domain or bounds validation (422)
    #[error("invalid booking record: {0}")]
    InvalidRecord(String),

    /// Artifacts never loaded; prediction is disabled (503)
    #[error("{0}")]
    PredictionUnavailable(String),

    /// Inference or explanation failed for this request (500)
    #[error("prediction failed: {0}")]
    PredictionFailed(String),
}

impl HttpError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            HttpError::InvalidRecord(_) => StatusCode::UNPROCESSABLE_ENTITY,
            HttpError::PredictionUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            HttpError::PredictionFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidRecord(cause) => HttpError::InvalidRecord(cause.to_string()),
            other => HttpError::PredictionFailed(other.to_string()),
        }
    }
}

/// JSON error body
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
