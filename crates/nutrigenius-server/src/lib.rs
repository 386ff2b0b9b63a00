//! HTTP server library for the NutriGenius API.
//!
//! Router construction lives here, behind [`build_router`], so the binary
//! and the integration tests drive the exact same application. Configuration
//! is an explicit [`config::ServerConfig`] passed in by the caller; there is
//! no process-global application object.

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod services;

use std::time::Duration;

use axum::body::Body;
use axum::extract::DefaultBodyLimit;
use axum::http::{Request, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ServerConfig;

/// Builds the application router from an explicit configuration.
///
/// Cross-origin requests are allowed from any origin with any method and
/// header, matching the mobile-development setup. Tighten before production.
pub fn build_router(config: &ServerConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %req.method(),
                uri = %req.uri(),
                version = ?req.version(),
            )
        })
        .on_response(|res: &Response<Body>, latency: Duration, _span: &tracing::Span| {
            info!(
                latency = %format!("{} ms", latency.as_millis()),
                status = %res.status().as_u16(),
                "finished processing request"
            );
        });

    let logged_routes = Router::new()
        .route("/api/v1/food/classify", post(handlers::food::classify))
        .route("/api/v1/growth/predict", post(handlers::growth::predict))
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(trace_layer);

    Router::new()
        .merge(logged_routes)
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .layer(cors)
}
