// ABOUTME: Goal-based calorie target resolution with safety floor and variant bundle
// ABOUTME: Adjusts TDEE by fitness goal and computes all named target variants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Engine

//! Calorie Target Resolver
//!
//! Adjusts a TDEE estimate by fitness goal into a daily calorie target, and
//! always computes the full variant bundle (maintenance, mild deficit,
//! deficit, surplus) so callers can present alternatives without a second
//! call. Every value is clamped to the configured safety floor: the engine
//! never recommends an intake below it, regardless of how aggressive the
//! deficit arithmetic comes out.

use crate::config::{CalorieAdjustmentConfig, NutritionConfig};
use crate::errors::{AppError, AppResult};
use crate::metabolic::estimate_energy;
use crate::models::{BiometricProfile, CaloriePrediction, CalorieTarget, CalorieVariants, FitnessGoal};

/// Round a kcal value to a whole target, clamped to the safety floor
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn floored(kcal: f64, config: &CalorieAdjustmentConfig) -> u32 {
    kcal.max(config.min_daily_calories).round() as u32
}

/// Compute the full variant bundle for a TDEE estimate
#[must_use]
pub fn calorie_variants(tdee: f64, config: &CalorieAdjustmentConfig) -> CalorieVariants {
    CalorieVariants {
        maintenance: floored(tdee, config),
        mild_deficit: floored(tdee - config.mild_deficit_kcal, config),
        deficit: floored(tdee - config.deficit_kcal, config),
        surplus: floored(tdee + config.surplus_kcal, config),
    }
}

/// Resolve the daily calorie target for a goal
///
/// - `lose_weight`: TDEE minus the configured deficit (default 500 kcal,
///   ~0.5 kg/week), clamped to the safety floor (default 1200 kcal)
/// - `maintain`: TDEE unchanged
/// - `gain_muscle`: TDEE plus the configured surplus (default 400 kcal)
///
/// The variants bundle is returned with every resolution.
///
/// # Errors
///
/// Returns `InvalidBiometric` when the TDEE input is negative.
pub fn resolve_daily_target(
    tdee: f64,
    goal: FitnessGoal,
    config: &CalorieAdjustmentConfig,
) -> AppResult<CalorieTarget> {
    if tdee < 0.0 {
        return Err(AppError::invalid_biometric(format!(
            "TDEE must be non-negative, got {tdee:.1}"
        )));
    }

    let variants = calorie_variants(tdee, config);
    let recommended_calories = match goal {
        FitnessGoal::LoseWeight => variants.deficit,
        FitnessGoal::Maintain => variants.maintenance,
        FitnessGoal::GainMuscle => variants.surplus,
    };

    Ok(CalorieTarget {
        recommended_calories,
        variants,
    })
}

/// Predict calorie needs for a biometric profile
///
/// Bundles the metabolic estimate with every target variant; the caller's
/// goal is not consulted, so clients can show all directions at once.
///
/// # Errors
///
/// Returns the profile's validation error when any field is out of range.
pub fn predict_calories(
    profile: &BiometricProfile,
    config: &NutritionConfig,
) -> AppResult<CaloriePrediction> {
    let energy = estimate_energy(profile, config)?;

    Ok(CaloriePrediction {
        bmr: energy.bmr,
        tdee: energy.tdee,
        recommended_calories: calorie_variants(energy.tdee, &config.calorie_adjustments),
    })
}
