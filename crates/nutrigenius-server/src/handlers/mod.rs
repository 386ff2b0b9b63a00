//! HTTP route handlers for the NutriGenius API server.

pub mod food;
pub mod growth;

use axum::Json;

use crate::dto::WelcomeResponse;

/// Welcome message for the API root.
pub async fn root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to NutriGenius API",
    })
}

/// Health check endpoint.
pub async fn health() -> &'static str {
    "OK"
}
