// ABOUTME: Static food nutrition reference catalog served to clients
// ABOUTME: Per-serving calories and macronutrients for common whole foods
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Engine

//! Food Reference Catalog
//!
//! A small curated table of per-serving nutrition facts for common whole
//! foods. The engine does not consume this table in any calculation; it is
//! reference data exposed to upstream callers for display and lookup, held
//! here so it is named and inspectable rather than embedded at a call site.

use crate::config::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Per-serving nutrition facts for one food
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodEntry {
    /// Display name
    pub name: String,
    /// Calories per serving (kcal)
    pub calories: u32,
    /// Protein per serving (grams)
    pub protein_g: f64,
    /// Carbohydrates per serving (grams)
    pub carbs_g: f64,
    /// Fats per serving (grams)
    pub fats_g: f64,
    /// Serving description
    pub serving: String,
}

fn food(name: &str, calories: u32, protein_g: f64, carbs_g: f64, fats_g: f64, serving: &str) -> FoodEntry {
    FoodEntry {
        name: name.into(),
        calories,
        protein_g,
        carbs_g,
        fats_g,
        serving: serving.into(),
    }
}

/// Food reference catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodCatalogConfig {
    /// Catalog entries in display order
    pub entries: Vec<FoodEntry>,
}

impl FoodCatalogConfig {
    /// All catalog entries
    #[must_use]
    pub fn entries(&self) -> &[FoodEntry] {
        &self.entries
    }

    /// Look up an entry by case-insensitive name
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&FoodEntry> {
        self.entries
            .iter()
            .find(|e| e.name.eq_ignore_ascii_case(name))
    }

    /// Validate the catalog
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingField` when the catalog is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.entries.is_empty() {
            return Err(ConfigError::MissingField(
                "Food catalog must have at least one entry",
            ));
        }
        Ok(())
    }
}

impl Default for FoodCatalogConfig {
    fn default() -> Self {
        Self {
            entries: vec![
                food("Chicken Breast", 165, 31.0, 0.0, 3.6, "100g"),
                food("Brown Rice", 112, 2.6, 24.0, 0.9, "100g"),
                food("Broccoli", 55, 3.7, 11.0, 0.6, "100g"),
                food("Salmon", 208, 20.0, 0.0, 13.0, "100g"),
                food("Eggs", 155, 13.0, 1.1, 11.0, "2 large"),
                food("Oatmeal", 71, 2.5, 12.0, 1.5, "100g"),
                food("Banana", 105, 1.3, 27.0, 0.4, "1 medium"),
                food("Greek Yogurt", 100, 17.0, 6.0, 0.7, "170g"),
                food("Almonds", 164, 6.0, 6.0, 14.0, "28g"),
                food("Sweet Potato", 86, 1.6, 20.0, 0.1, "100g"),
                food("Spinach", 23, 2.9, 3.6, 0.4, "100g"),
                food("Tuna", 132, 28.0, 0.0, 1.3, "100g"),
                food("Quinoa", 120, 4.4, 21.0, 1.9, "100g"),
                food("Avocado", 160, 2.0, 9.0, 15.0, "100g"),
                food("Cottage Cheese", 98, 11.0, 3.4, 4.3, "100g"),
                food("Apple", 52, 0.3, 14.0, 0.2, "100g"),
                food("Turkey Breast", 135, 30.0, 0.0, 0.7, "100g"),
                food("Black Beans", 132, 8.9, 24.0, 0.5, "100g"),
                food("Peanut Butter", 188, 8.0, 7.0, 16.0, "2 tbsp"),
                food("Orange", 47, 0.9, 12.0, 0.1, "100g"),
            ],
        }
    }
}
