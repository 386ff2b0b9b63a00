//! Food image classification service.

use nutrigenius_core::{FoodClassification, NutritionalInfo};
use tracing::debug;

/// Classifies a food image from its raw bytes.
// TODO: run the exported food-recognition model here once training finishes;
// until then every image maps to the same placeholder entry.
pub fn classify_image(data: &[u8], filename: &str, content_type: &str) -> FoodClassification {
    debug!(
        file = %filename,
        content_type = %content_type,
        bytes = data.len(),
        "Running placeholder classification"
    );

    FoodClassification {
        food_name: "Sample Food".to_string(),
        confidence: 0.95,
        nutritional_info: NutritionalInfo {
            calories: 100,
            protein: 10,
            carbs: 20,
            fat: 5,
        },
    }
}
