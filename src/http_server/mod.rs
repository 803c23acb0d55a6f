//! # stayscore HTTP Server Module
//!
//! The presentation surface: one axum server combining the form UI, the
//! prediction API, and health/metrics endpoints.
//!
//! # Endpoints
//!
//! - `/` - Single-page prediction form
//! - `/health` - Liveness check
//! - `/api/predict` - Predict and explain one booking record
//! - `/api/schema` - Form field metadata (options, bounds, defaults)
//! - `/api/status` - Artifact availability
//! - `/observability/metrics` - Counter snapshot

pub mod config;
pub mod errors;
pub mod observability_routes;
pub mod predict_routes;
pub mod server;
pub mod ui_routes;

pub use config::HttpServerConfig;
pub use errors::{HttpError, HttpResult};
pub use predict_routes::{Availability, PredictState};
pub use server::HttpServer;
