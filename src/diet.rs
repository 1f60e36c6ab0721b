// ABOUTME: Diet recommendation composer orchestrating the full nutrition pipeline
// ABOUTME: Chains metabolic estimation, calorie targeting, macros, meals, and advisory text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Engine

//! Diet Recommendation Composer
//!
//! The main entry point of the diet pipeline: estimates energy expenditure,
//! resolves the goal-adjusted calorie target, allocates macros and meal
//! slots from that target, and attaches the goal-keyed advisory guidance
//! from configuration.

use crate::calorie_targets::resolve_daily_target;
use crate::config::EngineConfig;
use crate::errors::AppResult;
use crate::macros::allocate_macros;
use crate::meal_plan::build_meal_breakdown;
use crate::metabolic::estimate_energy;
use crate::models::{BiometricProfile, DietRecommendation};
use tracing::debug;

/// Compose a complete diet recommendation for a biometric profile
///
/// Pipeline: BMR/TDEE -> calorie target -> macro split + meal breakdown
/// (both from the resolved target) -> advisory guidance for the goal.
///
/// # Errors
///
/// Returns the first validation error raised by any pipeline stage; no
/// partial recommendation is ever produced.
pub fn recommend_diet(
    profile: &BiometricProfile,
    config: &EngineConfig,
) -> AppResult<DietRecommendation> {
    debug!(
        goal = profile.goal.as_str(),
        activity = profile.activity_level.as_str(),
        "composing diet recommendation"
    );

    let energy = estimate_energy(profile, &config.nutrition)?;
    let target = resolve_daily_target(
        energy.tdee,
        profile.goal,
        &config.nutrition.calorie_adjustments,
    )?;

    let macros = allocate_macros(
        target.recommended_calories,
        profile.goal,
        &config.nutrition.macro_ratios,
    )?;
    let meals_breakdown =
        build_meal_breakdown(target.recommended_calories, &config.nutrition.meal_slots)?;

    Ok(DietRecommendation {
        daily_calories: target.recommended_calories,
        macros,
        meals_breakdown,
        recommendations: config
            .advisory
            .diet_guidance
            .for_goal(profile.goal)
            .to_vec(),
    })
}
