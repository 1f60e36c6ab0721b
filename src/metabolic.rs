// ABOUTME: Metabolic estimation using the Mifflin-St Jeor equation and activity factors
// ABOUTME: Computes BMR and TDEE from validated biometric inputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Engine

//! Metabolic Estimator
//!
//! Basal Metabolic Rate via the Mifflin-St Jeor equation, scaled to Total
//! Daily Energy Expenditure by an activity factor. Both functions are pure
//! and deterministic; all validation happens before any arithmetic.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting
//!   energy expenditure. *American Journal of Clinical Nutrition*, 51(2),
//!   241-247. DOI: 10.1093/ajcn/51.2.241
//! - `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology

use crate::config::{ActivityFactorsConfig, BmrConfig, NutritionConfig};
use crate::errors::{AppError, AppResult};
use crate::models::{ActivityLevel, BiometricProfile, EnergyEstimate, Gender};

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `gender_constant`
/// - Male: +5
/// - Female: -161
/// - Other: -78 (arithmetic mean of the published constants; see `BmrConfig`)
///
/// # Errors
///
/// Returns `InvalidAge` when age is 0 or above 120, `InvalidBiometric` when
/// weight or height is outside (0, 300].
pub fn calculate_mifflin_st_jeor(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: Gender,
    config: &BmrConfig,
) -> AppResult<f64> {
    if age == 0 || age > 120 {
        return Err(AppError::invalid_age(format!(
            "Age must be between 1 and 120 years, got {age}"
        )));
    }
    if weight_kg <= 0.0 || weight_kg > 300.0 {
        return Err(AppError::invalid_biometric(format!(
            "Weight must be between 0 and 300 kg, got {weight_kg:.1}"
        )));
    }
    if height_cm <= 0.0 || height_cm > 300.0 {
        return Err(AppError::invalid_biometric(format!(
            "Height must be between 0 and 300 cm, got {height_cm:.1}"
        )));
    }

    let weight_component = config.msj_weight_coef * weight_kg;
    let height_component = config.msj_height_coef * height_cm;
    let age_component = config.msj_age_coef * f64::from(age);

    let gender_constant = match gender {
        Gender::Male => config.msj_male_constant,
        Gender::Female => config.msj_female_constant,
        Gender::Other => config.msj_neutral_constant,
    };

    let bmr = weight_component + height_component + age_component + gender_constant;

    // The equation can dip below zero at extreme but in-range inputs
    Ok(bmr.max(0.0))
}

/// Calculate Total Daily Energy Expenditure
///
/// Formula: TDEE = BMR x activity factor
///
/// Activity factors (`McArdle` et al. 2010): sedentary 1.2, light 1.375,
/// moderate 1.55, active 1.725, very active 1.9.
///
/// # Errors
///
/// Returns `InvalidBiometric` when BMR is negative.
pub fn calculate_tdee(
    bmr: f64,
    activity_level: ActivityLevel,
    config: &ActivityFactorsConfig,
) -> AppResult<f64> {
    if bmr < 0.0 {
        return Err(AppError::invalid_biometric(format!(
            "BMR must be non-negative, got {bmr:.1}"
        )));
    }

    Ok(bmr * config.factor_for(activity_level))
}

/// Estimate BMR and TDEE for a biometric profile
///
/// # Errors
///
/// Returns the profile's validation error when any field is out of range.
pub fn estimate_energy(
    profile: &BiometricProfile,
    config: &NutritionConfig,
) -> AppResult<EnergyEstimate> {
    profile.validate()?;

    let bmr = calculate_mifflin_st_jeor(
        profile.weight_kg,
        profile.height_cm,
        profile.age,
        profile.gender,
        &config.bmr,
    )?;
    let tdee = calculate_tdee(bmr, profile.activity_level, &config.activity_factors)?;

    Ok(EnergyEstimate { bmr, tdee })
}
