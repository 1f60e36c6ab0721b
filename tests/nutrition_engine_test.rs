// ABOUTME: Comprehensive algorithm tests for the nutrition calculation pipeline
// ABOUTME: Covers BMR, TDEE, calorie targets, macro allocation, and meal breakdowns
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Engine
//! Comprehensive algorithm tests for the nutrition pipeline
//!
//! Covers:
//! - Mifflin-St Jeor BMR for male/female/other and input validation
//! - TDEE across all five activity levels
//! - Goal-based calorie targets, the safety floor, and the variant bundle
//! - Macro allocation ratios and the energy reconstruction invariant
//! - Meal breakdowns and the exact-sum guarantee

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fitplan_engine::{
    calorie_targets::{predict_calories, resolve_daily_target},
    config::EngineConfig,
    macros::{allocate_macros, reconstructed_calories},
    meal_plan::build_meal_breakdown,
    metabolic::{calculate_mifflin_st_jeor, calculate_tdee, estimate_energy},
    models::{ActivityLevel, FitnessGoal, Gender},
};

mod common;

// ============================================================================
// BMR CALCULATION TESTS - Mifflin-St Jeor Formula
// ============================================================================

#[test]
fn test_mifflin_st_jeor_male_typical() {
    common::init_test_logging();
    let config = &EngineConfig::global().nutrition;

    // 30-year-old male, 80kg, 180cm
    let bmr = calculate_mifflin_st_jeor(80.0, 180.0, 30, Gender::Male, &config.bmr).unwrap();

    // Expected: 10 * 80 + 6.25 * 180 - 5 * 30 + 5 = 800 + 1125 - 150 + 5 = 1780
    assert!(
        (bmr - 1780.0).abs() < 1e-9,
        "BMR should be exactly 1780, got {bmr}"
    );
}

#[test]
fn test_mifflin_st_jeor_male_age_25() {
    common::init_test_logging();
    let config = &EngineConfig::global().nutrition;

    let bmr = calculate_mifflin_st_jeor(80.0, 180.0, 25, Gender::Male, &config.bmr).unwrap();

    // Expected: 800 + 1125 - 125 + 5 = 1805
    assert!(
        (bmr - 1805.0).abs() < 1e-9,
        "BMR should be exactly 1805, got {bmr}"
    );
}

#[test]
fn test_mifflin_st_jeor_female_typical() {
    common::init_test_logging();
    let config = &EngineConfig::global().nutrition;

    // 25-year-old female, 60kg, 165cm
    let bmr = calculate_mifflin_st_jeor(60.0, 165.0, 25, Gender::Female, &config.bmr).unwrap();

    // Expected: 600 + 1031.25 - 125 - 161 = 1345.25
    assert!(
        (bmr - 1345.25).abs() < 1e-9,
        "BMR should be exactly 1345.25, got {bmr}"
    );
}

#[test]
fn test_mifflin_st_jeor_other_uses_mean_constant() {
    common::init_test_logging();
    let config = &EngineConfig::global().nutrition;

    let male = calculate_mifflin_st_jeor(70.0, 170.0, 30, Gender::Male, &config.bmr).unwrap();
    let female = calculate_mifflin_st_jeor(70.0, 170.0, 30, Gender::Female, &config.bmr).unwrap();
    let other = calculate_mifflin_st_jeor(70.0, 170.0, 30, Gender::Other, &config.bmr).unwrap();

    // Neutral constant is the arithmetic mean of the published constants
    assert!(
        (other - (male + female) / 2.0).abs() < 1e-9,
        "other-gender BMR should be the male/female mean, got {other}"
    );
}

#[test]
fn test_mifflin_st_jeor_rejects_out_of_range_inputs() {
    common::init_test_logging();
    let config = &EngineConfig::global().nutrition;

    assert!(calculate_mifflin_st_jeor(80.0, 180.0, 0, Gender::Male, &config.bmr).is_err());
    assert!(calculate_mifflin_st_jeor(80.0, 180.0, 121, Gender::Male, &config.bmr).is_err());
    assert!(calculate_mifflin_st_jeor(0.0, 180.0, 30, Gender::Male, &config.bmr).is_err());
    assert!(calculate_mifflin_st_jeor(80.0, -170.0, 30, Gender::Male, &config.bmr).is_err());
    assert!(calculate_mifflin_st_jeor(350.0, 180.0, 30, Gender::Male, &config.bmr).is_err());
}

// ============================================================================
// TDEE CALCULATION TESTS - Activity Level Multipliers
// ============================================================================

#[test]
fn test_tdee_all_activity_levels() {
    common::init_test_logging();
    let config = &EngineConfig::global().nutrition;
    let bmr = 1600.0;

    let cases = [
        (ActivityLevel::Sedentary, 1920.0),
        (ActivityLevel::Light, 2200.0),
        (ActivityLevel::Moderate, 2480.0),
        (ActivityLevel::Active, 2760.0),
        (ActivityLevel::VeryActive, 3040.0),
    ];

    for (level, expected) in cases {
        let tdee = calculate_tdee(bmr, level, &config.activity_factors).unwrap();
        assert!(
            (tdee - expected).abs() < 1e-9,
            "TDEE for {level:?} should be {expected}, got {tdee}"
        );
    }
}

#[test]
fn test_tdee_scenario_male_moderate() {
    common::init_test_logging();
    let config = &EngineConfig::global().nutrition;

    let bmr = calculate_mifflin_st_jeor(80.0, 180.0, 25, Gender::Male, &config.bmr).unwrap();
    let tdee = calculate_tdee(bmr, ActivityLevel::Moderate, &config.activity_factors).unwrap();

    // 1805 * 1.55 = 2797.75
    assert!(
        (tdee - 2797.75).abs() < 1e-9,
        "TDEE should be 2797.75, got {tdee}"
    );
}

#[test]
fn test_tdee_rejects_negative_bmr() {
    common::init_test_logging();
    let config = &EngineConfig::global().nutrition;

    assert!(calculate_tdee(-1.0, ActivityLevel::Moderate, &config.activity_factors).is_err());
}

#[test]
fn test_energy_estimate_tdee_never_below_bmr() {
    common::init_test_logging();
    let config = &EngineConfig::global().nutrition;

    // All activity factors are >= 1, so TDEE >= BMR >= 0 for any valid input
    for age in [18, 30, 55, 80, 120] {
        for gender in [Gender::Male, Gender::Female, Gender::Other] {
            for level in [
                ActivityLevel::Sedentary,
                ActivityLevel::Moderate,
                ActivityLevel::VeryActive,
            ] {
                let profile =
                    common::profile(age, gender, 170.0, 70.0, level, FitnessGoal::Maintain);
                let energy = estimate_energy(&profile, config).unwrap();
                assert!(energy.bmr >= 0.0, "BMR must be non-negative");
                assert!(
                    energy.tdee >= energy.bmr,
                    "TDEE {t} must be >= BMR {b}",
                    t = energy.tdee,
                    b = energy.bmr
                );
            }
        }
    }
}

// ============================================================================
// CALORIE TARGET TESTS - Goal Adjustment, Floor, and Variants
// ============================================================================

#[test]
fn test_calorie_target_lose_weight() {
    common::init_test_logging();
    let config = &EngineConfig::global().nutrition;

    let target = resolve_daily_target(2800.0, FitnessGoal::LoseWeight, &config.calorie_adjustments)
        .unwrap();

    assert_eq!(target.recommended_calories, 2300);
    assert_eq!(target.variants.maintenance, 2800);
    assert_eq!(target.variants.mild_deficit, 2550);
    assert_eq!(target.variants.deficit, 2300);
    assert_eq!(target.variants.surplus, 3200);
}

#[test]
fn test_calorie_target_maintain_and_gain() {
    common::init_test_logging();
    let config = &EngineConfig::global().nutrition;

    let maintain =
        resolve_daily_target(2500.0, FitnessGoal::Maintain, &config.calorie_adjustments).unwrap();
    assert_eq!(maintain.recommended_calories, 2500);

    let gain =
        resolve_daily_target(2500.0, FitnessGoal::GainMuscle, &config.calorie_adjustments).unwrap();
    assert_eq!(gain.recommended_calories, 2900);
}

#[test]
fn test_calorie_target_safety_floor_enforced() {
    common::init_test_logging();
    let config = &EngineConfig::global().nutrition;

    // 1500 - 500 = 1000, below the 1200 kcal floor
    let target = resolve_daily_target(1500.0, FitnessGoal::LoseWeight, &config.calorie_adjustments)
        .unwrap();

    assert_eq!(
        target.recommended_calories, 1200,
        "deficit target must clamp to the safety floor"
    );
    assert_eq!(target.variants.deficit, 1200);
    assert_eq!(target.variants.mild_deficit, 1250);
    assert_eq!(target.variants.maintenance, 1500);
}

#[test]
fn test_calorie_target_rejects_negative_tdee() {
    common::init_test_logging();
    let config = &EngineConfig::global().nutrition;

    assert!(
        resolve_daily_target(-100.0, FitnessGoal::Maintain, &config.calorie_adjustments).is_err()
    );
}

#[test]
fn test_predict_calories_bundles_estimate_and_variants() {
    common::init_test_logging();
    let config = &EngineConfig::global().nutrition;

    let profile = common::reference_profile(FitnessGoal::Maintain);
    let prediction = predict_calories(&profile, config).unwrap();

    // BMR 1780, TDEE 1780 * 1.55 = 2759
    assert!((prediction.bmr - 1780.0).abs() < 1e-9);
    assert!((prediction.tdee - 2759.0).abs() < 1e-9);
    assert_eq!(prediction.recommended_calories.maintenance, 2759);
    assert_eq!(prediction.recommended_calories.deficit, 2259);
    assert_eq!(prediction.recommended_calories.surplus, 3159);
}

// ============================================================================
// MACRO ALLOCATION TESTS - Ratio Rows and Reconstruction Invariant
// ============================================================================

#[test]
fn test_macro_allocation_maintain_2000() {
    common::init_test_logging();
    let config = &EngineConfig::global().nutrition;

    let split = allocate_macros(2000, FitnessGoal::Maintain, &config.macro_ratios).unwrap();

    // protein: floor(2000*0.30/4) = 150, carbs: floor(2000*0.40/4) = 200 + 1
    // leftover gram, fats: floor(2000*0.30/9) = 66
    assert_eq!(split.protein_g, 150);
    assert_eq!(split.carbs_g, 201);
    assert_eq!(split.fats_g, 66);
    assert_eq!(reconstructed_calories(&split), 1998);
}

#[test]
fn test_macro_allocation_goal_profiles_differ() {
    common::init_test_logging();
    let config = &EngineConfig::global().nutrition;

    let lose = allocate_macros(2400, FitnessGoal::LoseWeight, &config.macro_ratios).unwrap();
    let gain = allocate_macros(2400, FitnessGoal::GainMuscle, &config.macro_ratios).unwrap();

    // Weight loss is protein-forward; muscle gain is carb-forward
    assert!(lose.protein_g > gain.protein_g);
    assert!(gain.carbs_g > lose.carbs_g);
    assert!(lose.fats_g > gain.fats_g);
}

#[test]
fn test_macro_reconstruction_within_tolerance() {
    common::init_test_logging();
    let config = &EngineConfig::global().nutrition;

    for calories in [0_u32, 1, 13, 800, 1200, 1999, 2000, 2300, 2797, 3500, 5000] {
        for goal in [
            FitnessGoal::LoseWeight,
            FitnessGoal::Maintain,
            FitnessGoal::GainMuscle,
        ] {
            let split = allocate_macros(calories, goal, &config.macro_ratios).unwrap();
            let energy = reconstructed_calories(&split);
            assert!(
                energy <= calories,
                "reconstruction {energy} exceeds target {calories} for {goal:?}"
            );
            assert!(
                calories - energy <= 10,
                "reconstruction {energy} more than 10 kcal under target {calories} for {goal:?}"
            );
        }
    }
}

// ============================================================================
// MEAL BREAKDOWN TESTS - Slot Weights and Exact-Sum Guarantee
// ============================================================================

#[test]
fn test_meal_breakdown_scenario_2000() {
    common::init_test_logging();
    let config = &EngineConfig::global().nutrition;

    let meals = build_meal_breakdown(2000, &config.meal_slots).unwrap();

    assert_eq!(meals.breakfast, 500);
    assert_eq!(meals.lunch, 700);
    assert_eq!(meals.dinner, 600);
    assert_eq!(meals.snack, 200);
    assert_eq!(meals.total(), 2000);
}

#[test]
fn test_meal_breakdown_sums_exactly_for_awkward_totals() {
    common::init_test_logging();
    let config = &EngineConfig::global().nutrition;

    for calories in (0..=50).chain([123, 999, 1201, 1999, 2001, 2797, 3333, 9999]) {
        let meals = build_meal_breakdown(calories, &config.meal_slots).unwrap();
        assert_eq!(
            meals.total(),
            calories,
            "slots must sum exactly to the target"
        );
    }
}

#[test]
fn test_meal_breakdown_lunch_is_largest_slot() {
    common::init_test_logging();
    let config = &EngineConfig::global().nutrition;

    let meals = build_meal_breakdown(2400, &config.meal_slots).unwrap();
    assert!(meals.lunch >= meals.breakfast);
    assert!(meals.lunch >= meals.dinner);
    assert!(meals.lunch >= meals.snack);
}
