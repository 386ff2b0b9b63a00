//! Core domain types for the NutriGenius API.
//!
//! This crate provides the fundamental types shared between the HTTP server
//! and future clients:
//!
//! - [`FoodClassification`] — Result of classifying a food image
//! - [`NutritionalInfo`] — Nutritional breakdown of a classified food
//! - [`GrowthPrediction`] — Result of a child growth prediction
//! - [`GrowthStatus`] — Growth assessment category
//!
//! # Example
//!
//! ```rust
//! use nutrigenius_core::{GrowthPrediction, GrowthStatus};
//!
//! let prediction = GrowthPrediction {
//!     height: 100,
//!     weight: 20,
//!     status: GrowthStatus::Normal,
//! };
//!
//! assert_eq!(prediction.status, GrowthStatus::Normal);
//! ```

use serde::{Deserialize, Serialize};

/// Nutritional breakdown of a classified food item.
///
/// Calories are kilocalories per serving; protein, carbs, and fat are grams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionalInfo {
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
}

/// Result of classifying a food image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodClassification {
    /// Human-readable name of the recognized food.
    pub food_name: String,
    /// Model confidence in the range (0, 1).
    pub confidence: f64,
    /// Nutritional values for the recognized food.
    pub nutritional_info: NutritionalInfo,
}

/// Growth assessment category for a child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GrowthStatus {
    #[default]
    Normal,
    Stunted,
    Underweight,
    Overweight,
}

impl GrowthStatus {
    /// Returns a human-readable label for logging.
    pub fn label(&self) -> &'static str {
        match self {
            GrowthStatus::Normal => "normal",
            GrowthStatus::Stunted => "stunted",
            GrowthStatus::Underweight => "underweight",
            GrowthStatus::Overweight => "overweight",
        }
    }
}

/// Result of a child growth prediction.
///
/// Height is centimeters, weight is kilograms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthPrediction {
    pub height: u32,
    pub weight: u32,
    pub status: GrowthStatus,
}
