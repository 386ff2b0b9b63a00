//! Food image classification HTTP handler.

use axum::extract::multipart::{Multipart, MultipartRejection};
use axum::Json;
use tracing::{info, warn};

use crate::dto::ClassifyResponse;
use crate::error::AppError;
use crate::services;

/// Form field carrying the uploaded image.
const FILE_FIELD: &str = "file";

/// Classifies an uploaded food image.
///
/// Accepts a multipart form with a `file` field, reads the upload fully into
/// memory, and returns the classification result. The request body is capped
/// by the configured upload limit.
pub async fn classify(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ClassifyResponse>, AppError> {
    let mut multipart = multipart.map_err(|e| AppError::BadRequest(e.body_text()))?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("invalid multipart body: {}", e)))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or("unnamed").to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();

        let data = field.bytes().await.map_err(|e| {
            warn!("Failed to read upload {}: {}", filename, e);
            AppError::BadRequest(format!("failed to read file: {}", e))
        })?;

        info!(file = %filename, size = data.len(), "Classifying food image");
        let classification = services::classify::classify_image(&data, &filename, &content_type);

        return Ok(Json(ClassifyResponse {
            success: true,
            classification,
        }));
    }

    Err(AppError::BadRequest(format!(
        "missing '{}' field in multipart form",
        FILE_FIELD
    )))
}
