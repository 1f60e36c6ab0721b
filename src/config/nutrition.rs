// ABOUTME: Nutrition policy tables for metabolic estimation, calorie targeting, macros, and meals
// ABOUTME: Configures Mifflin-St Jeor coefficients, activity factors, goal adjustments, and slot weights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Engine

//! Nutrition Policy Configuration
//!
//! Every numeric policy the diet pipeline applies lives here as a named,
//! inspectable table: BMR formula coefficients, TDEE activity factors,
//! goal-based calorie adjustments, macro ratio rows, and meal slot weights.
//! Tests assert against these tables directly rather than against literals
//! embedded in the calculations.
//!
//! # Scientific References
//!
//! - BMR: Mifflin, M.D., et al. (1990). A new predictive equation for resting
//!   energy expenditure. *American Journal of Clinical Nutrition*, 51(2),
//!   241-247. DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010).
//!   Exercise Physiology
//! - Deficit sizing: ~500 kcal/day approximates 0.45 kg (1 lb) of fat mass
//!   per week (Wishnofsky convention)

use crate::config::error::ConfigError;
use crate::models::{ActivityLevel, FitnessGoal};
use serde::{Deserialize, Serialize};

/// Nutrition policy configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate (BMR) formula coefficients
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE calculation
    pub activity_factors: ActivityFactorsConfig,
    /// Goal-based calorie target adjustments
    pub calorie_adjustments: CalorieAdjustmentConfig,
    /// Goal-keyed macronutrient ratio rows
    pub macro_ratios: MacroRatiosConfig,
    /// Meal slot weight policy
    pub meal_slots: MealSlotsConfig,
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). DOI: 10.1093/ajcn/51.2.241
///
/// The equation defines constants for male (+5) and female (-161) only.
/// `msj_neutral_constant` is this engine's explicit policy for the `other`
/// gender: the arithmetic mean of the two published constants (-78).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
    /// Constant for unspecified gender: mean of male and female (-78)
    pub msj_neutral_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
            msj_neutral_constant: -78.0,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
///
/// Reference: `McArdle` et al. (2010) - Exercise Physiology
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Light exercise 1-3 days/week: 1.375
    pub light: f64,
    /// Moderate exercise 3-5 days/week: 1.55
    pub moderate: f64,
    /// Hard exercise 5-6 days/week: 1.725
    pub active: f64,
    /// Very hard exercise 6-7 days/week: 1.9
    pub very_active: f64,
}

impl ActivityFactorsConfig {
    /// Multiplier for an activity level
    #[must_use]
    pub const fn factor_for(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::Light => self.light,
            ActivityLevel::Moderate => self.moderate,
            ActivityLevel::Active => self.active,
            ActivityLevel::VeryActive => self.very_active,
        }
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            light: 1.375,
            moderate: 1.55,
            active: 1.725,
            very_active: 1.9,
        }
    }
}

/// Goal-based calorie target adjustments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalorieAdjustmentConfig {
    /// Daily deficit for weight loss (kcal): 500
    pub deficit_kcal: f64,
    /// Daily deficit for gradual weight loss (kcal): 250
    pub mild_deficit_kcal: f64,
    /// Daily surplus for muscle gain (kcal): 400, within the 300-500 band
    pub surplus_kcal: f64,
    /// Safety floor applied to every recommended target (kcal): 1200
    pub min_daily_calories: f64,
}

impl Default for CalorieAdjustmentConfig {
    fn default() -> Self {
        Self {
            deficit_kcal: 500.0,
            mild_deficit_kcal: 250.0,
            surplus_kcal: 400.0,
            min_daily_calories: 1200.0,
        }
    }
}

/// Macronutrient ratio row (protein/carbs/fats as fractions of calories)
///
/// Each row must sum to 1.0.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MacroRatio {
    /// Protein fraction of calories
    pub protein: f64,
    /// Carbohydrate fraction of calories
    pub carbs: f64,
    /// Fat fraction of calories
    pub fats: f64,
}

impl MacroRatio {
    /// Sum of the three fractions
    #[must_use]
    pub fn total(&self) -> f64 {
        self.protein + self.carbs + self.fats
    }
}

/// Goal-keyed macronutrient ratio table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroRatiosConfig {
    /// Weight loss: protein-forward to preserve lean mass
    pub lose_weight: MacroRatio,
    /// Maintenance: balanced distribution
    pub maintain: MacroRatio,
    /// Muscle gain: carb-forward to fuel training volume
    pub gain_muscle: MacroRatio,
}

impl MacroRatiosConfig {
    /// Ratio row for a goal
    #[must_use]
    pub const fn ratio_for(&self, goal: FitnessGoal) -> MacroRatio {
        match goal {
            FitnessGoal::LoseWeight => self.lose_weight,
            FitnessGoal::Maintain => self.maintain,
            FitnessGoal::GainMuscle => self.gain_muscle,
        }
    }
}

impl Default for MacroRatiosConfig {
    fn default() -> Self {
        Self {
            lose_weight: MacroRatio {
                protein: 0.40,
                carbs: 0.35,
                fats: 0.25,
            },
            maintain: MacroRatio {
                protein: 0.30,
                carbs: 0.40,
                fats: 0.30,
            },
            gain_muscle: MacroRatio {
                protein: 0.35,
                carbs: 0.45,
                fats: 0.20,
            },
        }
    }
}

/// Meal slot weight policy
///
/// Fractions of the daily target assigned to each slot; must sum to 1.0.
/// Lunch is the largest slot and absorbs the rounding remainder so the
/// four slots always sum exactly to the daily target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealSlotsConfig {
    /// Breakfast fraction: 0.25
    pub breakfast: f64,
    /// Lunch fraction: 0.35
    pub lunch: f64,
    /// Dinner fraction: 0.30
    pub dinner: f64,
    /// Snack fraction: 0.10
    pub snack: f64,
}

impl MealSlotsConfig {
    /// Sum of the four slot weights
    #[must_use]
    pub fn total(&self) -> f64 {
        self.breakfast + self.lunch + self.dinner + self.snack
    }
}

impl Default for MealSlotsConfig {
    fn default() -> Self {
        Self {
            breakfast: 0.25,
            lunch: 0.35,
            dinner: 0.30,
            snack: 0.10,
        }
    }
}

impl NutritionConfig {
    /// Validate the nutrition policy tables
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` when coefficients are non-positive, activity
    /// factors are out of range or not ascending, a macro ratio row does not
    /// sum to 1.0, or the meal slot weights do not sum to 1.0.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bmr.msj_weight_coef <= 0.0 || self.bmr.msj_height_coef <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR weight and height coefficients must be positive",
            ));
        }

        let factors = &self.activity_factors;
        if factors.sedentary < 1.0 || factors.very_active > 2.5 {
            return Err(ConfigError::ValueOutOfRange(
                "Activity factors must be between 1.0 and 2.5",
            ));
        }
        if factors.sedentary >= factors.light
            || factors.light >= factors.moderate
            || factors.moderate >= factors.active
            || factors.active >= factors.very_active
        {
            return Err(ConfigError::InvalidRange(
                "Activity factors must be in ascending order",
            ));
        }

        let adjustments = &self.calorie_adjustments;
        if adjustments.deficit_kcal <= 0.0 || adjustments.mild_deficit_kcal <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Calorie deficits must be positive",
            ));
        }
        if adjustments.mild_deficit_kcal >= adjustments.deficit_kcal {
            return Err(ConfigError::InvalidRange(
                "mild_deficit_kcal must be < deficit_kcal",
            ));
        }
        if !(100.0..=1000.0).contains(&adjustments.surplus_kcal) {
            return Err(ConfigError::ValueOutOfRange(
                "Surplus must be between 100 and 1000 kcal",
            ));
        }
        if !(800.0..=2000.0).contains(&adjustments.min_daily_calories) {
            return Err(ConfigError::ValueOutOfRange(
                "Minimum daily calories must be between 800 and 2000 kcal",
            ));
        }

        let ratio_rows = [
            self.macro_ratios.lose_weight,
            self.macro_ratios.maintain,
            self.macro_ratios.gain_muscle,
        ];
        for row in ratio_rows {
            if row.protein < 0.0 || row.carbs < 0.0 || row.fats < 0.0 {
                return Err(ConfigError::ValueOutOfRange(
                    "Macro ratio fractions must be non-negative",
                ));
            }
            if (row.total() - 1.0).abs() > 1e-6 {
                return Err(ConfigError::InvalidWeights(
                    "Each macro ratio row must sum to 1.0",
                ));
            }
        }

        if (self.meal_slots.total() - 1.0).abs() > 1e-6 {
            return Err(ConfigError::InvalidWeights(
                "Meal slot weights must sum to 1.0",
            ));
        }

        Ok(())
    }
}
