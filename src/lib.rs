// ABOUTME: Main library entry point for the FitPlan recommendation engine
// ABOUTME: Computes diet and workout recommendations from user biometrics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Engine

#![deny(unsafe_code)]

//! # FitPlan Engine
//!
//! A fitness recommendation calculation engine: metabolic estimation,
//! calorie targeting, macronutrient allocation, meal breakdowns, and weekly
//! workout plan generation from a validated biometric profile.
//!
//! Upstream plumbing (auth, HTTP transport, persistence) hands the engine a
//! `BiometricProfile` and serializes the structured result; the engine
//! re-validates ranges and enum values itself and fails fast with a typed
//! error before any computation.
//!
//! ## Design
//!
//! - Every operation is a pure, synchronous function over immutable inputs;
//!   identical inputs produce bit-identical outputs. Safe to call from any
//!   number of threads with no coordination.
//! - Every numeric policy (formula coefficients, activity factors, macro
//!   ratios, meal weights, schedule rotations, exercise templates, advisory
//!   text) lives in named configuration tables, loaded once at process
//!   start and passed by reference.
//!
//! ## Example
//!
//! ```rust
//! use fitplan_engine::config::EngineConfig;
//! use fitplan_engine::diet::recommend_diet;
//! use fitplan_engine::models::{
//!     ActivityLevel, BiometricProfile, FitnessGoal, Gender,
//! };
//!
//! # fn main() -> fitplan_engine::errors::AppResult<()> {
//! let profile = BiometricProfile {
//!     age: 30,
//!     gender: Gender::Male,
//!     height_cm: 180.0,
//!     weight_kg: 80.0,
//!     activity_level: ActivityLevel::Moderate,
//!     goal: FitnessGoal::LoseWeight,
//! };
//!
//! let recommendation = recommend_diet(&profile, EngineConfig::global())?;
//! assert!(recommendation.daily_calories > 0);
//! # Ok(())
//! # }
//! ```

/// Goal-based calorie target resolution and prediction
pub mod calorie_targets;

/// Named, immutable configuration tables for every engine policy
pub mod config;

/// Diet recommendation composer orchestrating the nutrition pipeline
pub mod diet;

/// Unified error handling with standard error codes
pub mod errors;

/// Macronutrient gram allocation
pub mod macros;

/// Per-meal calorie distribution
pub mod meal_plan;

/// BMR and TDEE estimation
pub mod metabolic;

/// Input and output data models
pub mod models;

/// Physiological constants from nutrition science
pub mod physiological_constants;

/// Weekly workout plan generation
pub mod workout_planner;

pub use calorie_targets::{predict_calories, resolve_daily_target};
pub use diet::recommend_diet;
pub use errors::{AppError, AppResult, ErrorCode};
pub use macros::allocate_macros;
pub use meal_plan::build_meal_breakdown;
pub use metabolic::{calculate_mifflin_st_jeor, calculate_tdee, estimate_energy};
pub use workout_planner::{exercise_details, generate_workout_plan};
