//! Growth prediction HTTP handler.

use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde_json::Value;
use tracing::info;

use crate::dto::GrowthResponse;
use crate::error::AppError;
use crate::services;

/// Predicts growth patterns from child measurement data.
///
/// The input contract is deliberately schemaless: any JSON object is
/// accepted and handed to the prediction service as-is.
pub async fn predict(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<GrowthResponse>, AppError> {
    let Json(data) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let input = data
        .as_object()
        .ok_or_else(|| AppError::BadRequest("request body must be a JSON object".to_string()))?;

    info!(fields = input.len(), "Predicting growth");
    let prediction = services::growth::predict(input);

    Ok(Json(GrowthResponse {
        success: true,
        prediction,
    }))
}
