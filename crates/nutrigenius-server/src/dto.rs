//! Data transfer objects for HTTP message serialization.

use nutrigenius_core::{FoodClassification, GrowthPrediction};
use serde::Serialize;

/// Welcome message returned from the API root.
#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
}

/// Response from food image classification.
#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub success: bool,
    #[serde(flatten)]
    pub classification: FoodClassification,
}

/// Response from growth prediction.
#[derive(Debug, Serialize)]
pub struct GrowthResponse {
    pub success: bool,
    pub prediction: GrowthPrediction,
}
