// ABOUTME: Engine configuration container orchestrating all policy tables
// ABOUTME: Provides the process-wide config global, env overrides, and unified validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Engine

//! Engine Configuration
//!
//! All reference data the engine consults (formula coefficients, activity
//! factors, calorie adjustments, macro ratios, meal slot weights, schedule
//! rotations, exercise templates, advisory text, and the food catalog) is
//! collected here as named, immutable configuration loaded once at process
//! start. Operations take the config by reference, so tests can substitute
//! any table without touching process state.
//!
//! # Module Structure
//!
//! - `nutrition` - BMR/TDEE coefficients, calorie adjustments, macros, meals
//! - `plans` - training frequency, day-type rotations, muscle cycle
//! - `exercises` - per-type/per-group exercise templates
//! - `advisory` - goal-keyed authored guidance and plan names
//! - `food` - static food nutrition reference catalog

pub mod advisory;
pub mod error;
pub mod exercises;
pub mod food;
pub mod nutrition;
pub mod plans;

pub use advisory::{AdvisoryConfig, GoalMessages, GoalNames};
pub use error::ConfigError;
pub use exercises::{ExerciseCatalogConfig, StrengthCatalog};
pub use food::{FoodCatalogConfig, FoodEntry};
pub use nutrition::{
    ActivityFactorsConfig, BmrConfig, CalorieAdjustmentConfig, MacroRatio, MacroRatiosConfig,
    MealSlotsConfig, NutritionConfig,
};
pub use plans::{DayTypeRotationsConfig, PlanConfig, WeeklyFrequencyConfig};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static ENGINE_CONFIG: OnceLock<EngineConfig> = OnceLock::new();

/// Main engine configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Nutrition policy tables
    pub nutrition: NutritionConfig,
    /// Workout plan policy tables
    pub plans: PlanConfig,
    /// Exercise template catalog
    pub exercises: ExerciseCatalogConfig,
    /// Goal-keyed advisory content
    pub advisory: AdvisoryConfig,
    /// Food nutrition reference catalog
    pub food: FoodCatalogConfig,
}

impl EngineConfig {
    /// Get the global configuration instance
    ///
    /// Loads from environment on first access; falls back to defaults with a
    /// warning if the environment holds invalid values.
    pub fn global() -> &'static Self {
        ENGINE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load engine config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable holds an unparseable
    /// value or the resulting configuration fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        config = config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Validate every policy table
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` raised by a sub-config.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.nutrition.validate()?;
        self.plans.validate()?;
        self.exercises.validate()?;
        self.food.validate()?;
        Ok(())
    }

    /// Helper to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            "FITPLAN_DEFICIT_KCAL",
            &mut self.nutrition.calorie_adjustments.deficit_kcal,
        )?;
        Self::apply_env_var(
            "FITPLAN_MILD_DEFICIT_KCAL",
            &mut self.nutrition.calorie_adjustments.mild_deficit_kcal,
        )?;
        Self::apply_env_var(
            "FITPLAN_SURPLUS_KCAL",
            &mut self.nutrition.calorie_adjustments.surplus_kcal,
        )?;
        Self::apply_env_var(
            "FITPLAN_MIN_DAILY_CALORIES",
            &mut self.nutrition.calorie_adjustments.min_daily_calories,
        )?;
        Self::apply_env_var(
            "FITPLAN_PLAN_DURATION_WEEKS",
            &mut self.plans.duration_weeks,
        )?;
        Self::apply_env_var(
            "FITPLAN_NEUTRAL_BMR_CONSTANT",
            &mut self.nutrition.bmr.msj_neutral_constant,
        )?;

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_macro_rows_sum_to_one() {
        let ratios = MacroRatiosConfig::default();
        for row in [ratios.lose_weight, ratios.maintain, ratios.gain_muscle] {
            assert!((row.total() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_invalid_meal_weights_rejected() {
        let mut config = EngineConfig::default();
        config.nutrition.meal_slots.lunch = 0.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_descending_activity_factors_rejected() {
        let mut config = EngineConfig::default();
        config.nutrition.activity_factors.active = 1.3;
        assert!(config.validate().is_err());
    }
}
