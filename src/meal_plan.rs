// ABOUTME: Meal breakdown distributing a daily calorie target across fixed slots
// ABOUTME: Assigns the rounding remainder to lunch so slots always sum exactly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Engine

//! Meal Breakdown Generator
//!
//! Distributes a daily calorie target across breakfast, lunch, dinner, and
//! snack using the configured slot weights. Each slot is rounded to whole
//! kcal; the rounding remainder lands on lunch, the largest slot, so the
//! four slots always sum exactly to the input.

use crate::config::MealSlotsConfig;
use crate::errors::AppResult;
use crate::models::MealBreakdown;

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn slot(calories: u32, weight: f64) -> u32 {
    (f64::from(calories) * weight).round() as u32
}

/// Build the per-meal calorie distribution for a daily target
///
/// Invariant: `breakfast + lunch + dinner + snack == calories`, exactly,
/// for any target including zero.
///
/// # Errors
///
/// This operation accepts any non-negative target; the `AppResult` return
/// keeps the signature uniform with the rest of the pipeline.
pub fn build_meal_breakdown(calories: u32, config: &MealSlotsConfig) -> AppResult<MealBreakdown> {
    let breakfast = slot(calories, config.breakfast);
    let dinner = slot(calories, config.dinner);
    let snack = slot(calories, config.snack);

    // Lunch takes whatever the other rounded slots leave, which keeps the
    // sum exact; with weights summing to 1.0 this differs from
    // round(calories x lunch_weight) by at most a couple of kcal.
    let lunch = calories.saturating_sub(breakfast + dinner + snack);

    Ok(MealBreakdown {
        breakfast,
        lunch,
        dinner,
        snack,
    })
}
