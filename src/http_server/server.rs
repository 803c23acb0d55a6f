//! # HTTP Server
//!
//! Combines the UI, prediction API, and observability routers into one axum
//! server. The artifact availability is decided before the server starts;
//! the server itself never loads or reloads artifacts.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::observability::{Logger, MetricsRegistry};

use super::config::HttpServerConfig;
use super::observability_routes::{health_routes, observability_routes};
use super::predict_routes::{api_routes, Availability, PredictState};
use super::ui_routes::ui_routes;

/// HTTP server for the prediction service
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server with the availability decided at boot
    pub fn new(
        config: HttpServerConfig,
        availability: Availability,
        metrics: Arc<MetricsRegistry>,
    ) -> Self {
        let router = Self::build_router(&config, availability, metrics);
        Self { config, router }
    }

    fn build_router(
        config: &HttpServerConfig,
        availability: Availability,
        metrics: Arc<MetricsRegistry>,
    ) -> Router {
        let state = Arc::new(PredictState::new(availability, metrics.clone()));

        let cors = if config.cors_origins.is_empty() {
            // Permissive for development when no origins are configured
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            use tower_http::cors::AllowOrigin;
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .merge(ui_routes())
            .merge(health_routes())
            .nest("/api", api_routes(state))
            .nest("/observability", observability_routes(metrics))
            .layer(cors)
    }

    /// Socket address string
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until shutdown
    pub async fn start(self) -> Result<(), io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid socket address '{}': {}", self.config.socket_addr(), e),
            )
        })?;

        let bind_addr = addr.to_string();
        Logger::info("HTTP_SERVER_STARTED", &[("addr", bind_addr.as_str())]);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}
