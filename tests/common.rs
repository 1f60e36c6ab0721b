// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides logging init and biometric profile factories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Engine
#![allow(dead_code)]

//! Shared test utilities for `fitplan_engine`

use fitplan_engine::models::{ActivityLevel, BiometricProfile, FitnessGoal, Gender};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Reference profile: 30-year-old male, 180cm, 80kg, moderate activity
pub fn reference_profile(goal: FitnessGoal) -> BiometricProfile {
    BiometricProfile {
        age: 30,
        gender: Gender::Male,
        height_cm: 180.0,
        weight_kg: 80.0,
        activity_level: ActivityLevel::Moderate,
        goal,
    }
}

/// Profile with every field supplied by the caller
pub fn profile(
    age: u32,
    gender: Gender,
    height_cm: f64,
    weight_kg: f64,
    activity_level: ActivityLevel,
    goal: FitnessGoal,
) -> BiometricProfile {
    BiometricProfile {
        age,
        gender,
        height_cm,
        weight_kg,
        activity_level,
        goal,
    }
}
