// ABOUTME: End-to-end tests for the diet recommendation composer
// ABOUTME: Covers pipeline orchestration, advisory lookup, serialization shape, and idempotence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Engine
//! End-to-end tests for the diet recommendation composer

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fitplan_engine::{
    config::EngineConfig,
    diet::recommend_diet,
    macros::reconstructed_calories,
    models::{ActivityLevel, FitnessGoal, Gender},
};

mod common;

// ============================================================================
// PIPELINE COMPOSITION
// ============================================================================

#[test]
fn test_recommendation_reference_profile_lose_weight() {
    common::init_test_logging();
    let config = EngineConfig::global();

    let profile = common::reference_profile(FitnessGoal::LoseWeight);
    let rec = recommend_diet(&profile, config).unwrap();

    // BMR 1780 -> TDEE 2759 -> deficit target 2259
    assert_eq!(rec.daily_calories, 2259);
    assert_eq!(rec.meals_breakdown.total(), 2259);

    let energy = reconstructed_calories(&rec.macros);
    assert!(energy <= 2259 && energy >= 2249);
}

#[test]
fn test_recommendation_macros_and_meals_use_resolved_target() {
    common::init_test_logging();
    let config = EngineConfig::global();

    for goal in [
        FitnessGoal::LoseWeight,
        FitnessGoal::Maintain,
        FitnessGoal::GainMuscle,
    ] {
        let rec = recommend_diet(&common::reference_profile(goal), config).unwrap();

        assert_eq!(
            rec.meals_breakdown.total(),
            rec.daily_calories,
            "meal slots must sum to the resolved target for {goal:?}"
        );
        let energy = reconstructed_calories(&rec.macros);
        assert!(
            energy <= rec.daily_calories && rec.daily_calories - energy <= 10,
            "macro energy must reconstruct the resolved target for {goal:?}"
        );
    }
}

#[test]
fn test_recommendation_attaches_goal_keyed_guidance() {
    common::init_test_logging();
    let config = EngineConfig::global();

    for goal in [
        FitnessGoal::LoseWeight,
        FitnessGoal::Maintain,
        FitnessGoal::GainMuscle,
    ] {
        let rec = recommend_diet(&common::reference_profile(goal), config).unwrap();
        let expected = config.advisory.diet_guidance.for_goal(goal);

        assert_eq!(
            rec.recommendations, expected,
            "advisory text must come from the config table for {goal:?}"
        );
        assert!(!rec.recommendations.is_empty());
    }
}

#[test]
fn test_recommendation_fails_fast_on_invalid_profile() {
    common::init_test_logging();
    let config = EngineConfig::global();

    let mut profile = common::reference_profile(FitnessGoal::Maintain);
    profile.age = 0;
    assert!(recommend_diet(&profile, config).is_err());

    let mut profile = common::reference_profile(FitnessGoal::Maintain);
    profile.weight_kg = -80.0;
    assert!(recommend_diet(&profile, config).is_err());
}

// ============================================================================
// SERIALIZATION CONTRACT
// ============================================================================

#[test]
fn test_recommendation_serializes_with_contract_field_names() {
    common::init_test_logging();
    let config = EngineConfig::global();

    let rec = recommend_diet(&common::reference_profile(FitnessGoal::Maintain), config).unwrap();
    let json = serde_json::to_value(&rec).unwrap();

    assert!(json.get("daily_calories").is_some());
    assert!(json.get("macros").is_some());
    assert!(json.get("meals_breakdown").is_some());
    assert!(json.get("recommendations").is_some());

    let meals = json.get("meals_breakdown").unwrap();
    for slot in ["breakfast", "lunch", "dinner", "snack"] {
        assert!(meals.get(slot).is_some(), "missing meal slot field {slot}");
    }

    let macros = json.get("macros").unwrap();
    for field in ["protein_g", "carbs_g", "fats_g"] {
        assert!(macros.get(field).is_some(), "missing macro field {field}");
    }
}

#[test]
fn test_enums_serialize_snake_case() {
    common::init_test_logging();

    assert_eq!(
        serde_json::to_string(&Gender::Male).unwrap(),
        "\"male\""
    );
    assert_eq!(
        serde_json::to_string(&ActivityLevel::VeryActive).unwrap(),
        "\"very_active\""
    );
    assert_eq!(
        serde_json::to_string(&FitnessGoal::LoseWeight).unwrap(),
        "\"lose_weight\""
    );
}

// ============================================================================
// IDEMPOTENCE
// ============================================================================

#[test]
fn test_recommendation_is_bit_identical_across_calls() {
    common::init_test_logging();
    let config = EngineConfig::global();

    let profile = common::profile(
        42,
        Gender::Other,
        168.5,
        74.3,
        ActivityLevel::Active,
        FitnessGoal::GainMuscle,
    );

    let first = serde_json::to_string(&recommend_diet(&profile, config).unwrap()).unwrap();
    let second = serde_json::to_string(&recommend_diet(&profile, config).unwrap()).unwrap();

    assert_eq!(first, second, "identical inputs must produce identical output");
}
