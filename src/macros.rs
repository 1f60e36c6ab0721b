// ABOUTME: Macronutrient allocation splitting a calorie target by goal-keyed ratios
// ABOUTME: Floors gram amounts and absorbs rounding leftover into carbohydrates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Engine

//! Macro Allocator
//!
//! Splits a daily calorie target into protein, carbohydrate, and fat grams
//! using the goal-keyed ratio table. Gram amounts are floored, then any
//! leftover calories are absorbed into carbohydrates in whole grams, so the
//! reconstructed energy never exceeds the target and lands within a few kcal
//! below it.

use crate::config::MacroRatiosConfig;
use crate::errors::AppResult;
use crate::models::{FitnessGoal, MacroSplit};
use crate::physiological_constants::energy::{
    CARBS_KCAL_PER_G, FAT_KCAL_PER_G, PROTEIN_KCAL_PER_G,
};

/// Allocate macronutrient grams for a calorie target
///
/// grams = floor(calories x ratio / kcal per gram), per macro; leftover
/// calories after flooring go to carbs in 4-kcal whole-gram steps.
///
/// Invariant: `protein_g*4 + carbs_g*4 + fats_g*9` is never above `calories`
/// and never more than 10 kcal below it.
///
/// # Errors
///
/// This operation accepts any non-negative target; the `AppResult` return
/// keeps the signature uniform with the rest of the pipeline.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn allocate_macros(
    calories: u32,
    goal: FitnessGoal,
    config: &MacroRatiosConfig,
) -> AppResult<MacroSplit> {
    let ratio = config.ratio_for(goal);
    let calories_f = f64::from(calories);

    let protein_g = (calories_f * ratio.protein / PROTEIN_KCAL_PER_G).floor() as u32;
    let mut carbs_g = (calories_f * ratio.carbs / CARBS_KCAL_PER_G).floor() as u32;
    let fats_g = (calories_f * ratio.fats / FAT_KCAL_PER_G).floor() as u32;

    let consumed = protein_g * 4 + carbs_g * 4 + fats_g * 9;
    let leftover = calories.saturating_sub(consumed);
    carbs_g += leftover / 4;

    Ok(MacroSplit {
        protein_g,
        carbs_g,
        fats_g,
    })
}

/// Reconstruct the energy content of a macro split (kcal)
#[must_use]
pub const fn reconstructed_calories(split: &MacroSplit) -> u32 {
    split.protein_g * 4 + split.carbs_g * 4 + split.fats_g * 9
}
