//! Growth prediction service.

use nutrigenius_core::{GrowthPrediction, GrowthStatus};
use serde_json::{Map, Value};
use tracing::debug;

/// Predicts growth patterns for a child.
///
/// Input measurements are accepted but not yet consumed.
// TODO: feed the measurements into the growth model once it is exported.
pub fn predict(input: &Map<String, Value>) -> GrowthPrediction {
    debug!(fields = input.len(), "Running placeholder growth prediction");

    GrowthPrediction {
        height: 100,
        weight: 20,
        status: GrowthStatus::Normal,
    }
}
