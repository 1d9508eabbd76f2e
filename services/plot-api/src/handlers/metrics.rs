//! Health and metrics endpoints.

use axum::{
    extract::Extension,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::atomic::Ordering;
use std::sync::Arc;

use crate::state::AppState;

/// GET /health - Basic health check
pub async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "plot-api",
    }))
}

/// GET /metrics - Prometheus metrics endpoint
pub async fn metrics_handler(Extension(state): Extension<Arc<AppState>>) -> Response {
    let mut output = String::new();

    output.push_str(&format!(
        "# HELP charts_rendered_total Total charts rendered\n# TYPE charts_rendered_total counter\ncharts_rendered_total {}\n",
        state.metrics.charts_rendered.load(Ordering::Relaxed)
    ));
    output.push_str(&format!(
        "# HELP client_errors_total Total requests rejected as invalid\n# TYPE client_errors_total counter\nclient_errors_total {}\n",
        state.metrics.client_errors.load(Ordering::Relaxed)
    ));
    output.push_str(&format!(
        "# HELP server_errors_total Total requests failed server-side\n# TYPE server_errors_total counter\nserver_errors_total {}\n",
        state.metrics.server_errors.load(Ordering::Relaxed)
    ));

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/plain; version=0.0.4")
        .body(output.into())
        .unwrap()
}
