//! Form UI route
//!
//! Serves the embedded single-page form. Pure presentation: the page reads
//! `/api/schema` to build its widgets and posts to `/api/predict`.

use axum::response::Html;
use axum::routing::get;
use axum::Router;

const INDEX_HTML: &str = include_str!("../../assets/index.html");

/// Build the root UI router
pub fn ui_routes() -> Router {
    Router::new().route("/", get(index))
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
