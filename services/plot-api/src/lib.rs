//! Polar temperature chart API service library.
//!
//! This module exposes the internal modules for testing purposes.

pub mod handlers;
pub mod state;
pub mod validation;

use axum::{extract::Extension, routing::get, Router};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use state::AppState;

/// Build the service router with all routes and middleware attached.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::landing_handler))
        .route(
            "/plot-surface-temperature",
            get(handlers::surface_temperature_handler),
        )
        .route(
            "/plot-925mb-temperature",
            get(handlers::mb925_temperature_handler),
        )
        .route("/health", get(handlers::health_handler))
        .route("/metrics", get(handlers::metrics_handler))
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
}
