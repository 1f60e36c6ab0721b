// ABOUTME: Core data models for the recommendation engine input and output records
// ABOUTME: Closed enums for biometric categories plus plain structured result types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Engine

//! # Data Models
//!
//! Input and output records for the recommendation engine. Inputs use closed
//! enumerations validated at the boundary, so every policy table in the
//! engine is an exhaustive match with no default fallback. Outputs are plain
//! structured records suitable for direct JSON serialization; field names are
//! part of the API contract with upstream transport code.
//!
//! All records are created fresh per call and carry no identity beyond the
//! call that produced them.

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Gender for BMR calculation
///
/// The Mifflin-St Jeor equation defines constants for male and female only;
/// `Other` uses the arithmetic mean of the two (see `BmrConfig`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male (+5 kcal constant)
    Male,
    /// Female (-161 kcal constant)
    Female,
    /// Unspecified or non-binary (mean of the male/female constants)
    Other,
}

impl Gender {
    /// Wire name of this gender
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            "other" => Ok(Self::Other),
            other => Err(AppError::invalid_biometric(format!(
                "Unknown gender: '{other}'. Valid options: male, female, other"
            ))),
        }
    }
}

/// Activity level for TDEE calculation and training frequency
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 5-6 days/week
    Active,
    /// Very hard exercise 6-7 days/week
    VeryActive,
}

impl ActivityLevel {
    /// Wire name of this activity level
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Active => "active",
            Self::VeryActive => "very_active",
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sedentary" => Ok(Self::Sedentary),
            "light" => Ok(Self::Light),
            "moderate" => Ok(Self::Moderate),
            "active" => Ok(Self::Active),
            "very_active" => Ok(Self::VeryActive),
            other => Err(AppError::invalid_activity_level(format!(
                "Unknown activity level: '{other}'. Valid options: sedentary, light, moderate, active, very_active"
            ))),
        }
    }
}

/// Fitness goal steering calorie, macro, and workout policy
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    /// Caloric deficit targeting ~0.5 kg/week loss
    LoseWeight,
    /// Caloric balance
    Maintain,
    /// Caloric surplus supporting hypertrophy
    GainMuscle,
}

impl FitnessGoal {
    /// Wire name of this goal
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::LoseWeight => "lose_weight",
            Self::Maintain => "maintain",
            Self::GainMuscle => "gain_muscle",
        }
    }
}

impl FromStr for FitnessGoal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lose_weight" => Ok(Self::LoseWeight),
            "maintain" => Ok(Self::Maintain),
            "gain_muscle" => Ok(Self::GainMuscle),
            other => Err(AppError::invalid_goal(format!(
                "Unknown goal: '{other}'. Valid options: lose_weight, maintain, gain_muscle"
            ))),
        }
    }
}

/// Workout type assigned to a scheduled day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutType {
    /// Resistance training
    Strength,
    /// Aerobic conditioning
    Cardio,
    /// Mobility and stretching
    Flexibility,
    /// Recovery day, no exercises
    Rest,
    /// Unstructured activity
    Other,
}

impl WorkoutType {
    /// Wire name of this workout type
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Cardio => "cardio",
            Self::Flexibility => "flexibility",
            Self::Rest => "rest",
            Self::Other => "other",
        }
    }
}

/// Muscle group focused by a strength day
///
/// Strength days rotate through these groups across the week rather than
/// training a single fixed group.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MuscleGroup {
    Chest,
    Back,
    Legs,
    Shoulders,
    Arms,
    Core,
}

impl MuscleGroup {
    /// Wire name of this muscle group
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Chest => "chest",
            Self::Back => "back",
            Self::Legs => "legs",
            Self::Shoulders => "shoulders",
            Self::Arms => "arms",
            Self::Core => "core",
        }
    }
}

/// Validated biometric input record
///
/// Upstream callers guarantee field presence and types; the engine
/// re-validates ranges here and fails fast before any computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BiometricProfile {
    /// Age in years (1-120)
    pub age: u32,
    /// Gender for the BMR constant
    pub gender: Gender,
    /// Height in centimeters
    pub height_cm: f64,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Activity level for the TDEE multiplier
    pub activity_level: ActivityLevel,
    /// Fitness goal steering downstream policy
    pub goal: FitnessGoal,
}

impl BiometricProfile {
    /// Validate ranges on the raw biometric values
    ///
    /// # Errors
    ///
    /// Returns `InvalidAge` when age is 0 or above 120, `InvalidBiometric`
    /// when height or weight is non-positive or physiologically implausible.
    pub fn validate(&self) -> AppResult<()> {
        if self.age == 0 || self.age > 120 {
            return Err(AppError::invalid_age(format!(
                "Age must be between 1 and 120 years, got {}",
                self.age
            )));
        }
        if self.weight_kg <= 0.0 || self.weight_kg > 300.0 {
            return Err(AppError::invalid_biometric(format!(
                "Weight must be between 0 and 300 kg, got {:.1}",
                self.weight_kg
            )));
        }
        if self.height_cm <= 0.0 || self.height_cm > 300.0 {
            return Err(AppError::invalid_biometric(format!(
                "Height must be between 0 and 300 cm, got {:.1}",
                self.height_cm
            )));
        }
        Ok(())
    }
}

/// Basal and total daily energy expenditure estimate
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnergyEstimate {
    /// Basal Metabolic Rate (kcal/day)
    pub bmr: f64,
    /// Total Daily Energy Expenditure (kcal/day)
    pub tdee: f64,
}

/// Named calorie target variants returned with every resolution
///
/// All four variants are computed regardless of the caller's goal so clients
/// can present alternatives without a second call.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalorieVariants {
    /// TDEE unchanged
    pub maintenance: u32,
    /// TDEE - 250 kcal (~0.25 kg/week)
    pub mild_deficit: u32,
    /// TDEE - 500 kcal (~0.5 kg/week)
    pub deficit: u32,
    /// TDEE + surplus (~0.25-0.5 kg/week gain)
    pub surplus: u32,
}

/// Goal-resolved daily calorie target
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CalorieTarget {
    /// Daily target for the caller's goal (kcal)
    pub recommended_calories: u32,
    /// Alternative targets for every goal direction
    pub variants: CalorieVariants,
}

/// Calorie prediction bundle: metabolic estimate plus every target variant
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CaloriePrediction {
    /// Basal Metabolic Rate (kcal/day)
    pub bmr: f64,
    /// Total Daily Energy Expenditure (kcal/day)
    pub tdee: f64,
    /// Daily calorie targets for each goal direction
    pub recommended_calories: CalorieVariants,
}

/// Macronutrient gram allocation for a daily calorie target
///
/// Invariant: `protein_g*4 + carbs_g*4 + fats_g*9` is within 10 kcal below
/// the input target and never above it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MacroSplit {
    /// Daily protein (grams)
    pub protein_g: u32,
    /// Daily carbohydrates (grams)
    pub carbs_g: u32,
    /// Daily fats (grams)
    pub fats_g: u32,
}

/// Calorie allotment per meal slot
///
/// Invariant: the four slots sum exactly to the daily target.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MealBreakdown {
    /// Breakfast allotment (kcal)
    pub breakfast: u32,
    /// Lunch allotment (kcal) - largest slot, absorbs rounding remainder
    pub lunch: u32,
    /// Dinner allotment (kcal)
    pub dinner: u32,
    /// Snack allotment (kcal)
    pub snack: u32,
}

impl MealBreakdown {
    /// Total calories across all slots
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.breakfast + self.lunch + self.dinner + self.snack
    }
}

/// Complete diet recommendation for one biometric profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DietRecommendation {
    /// Goal-resolved daily calorie target (kcal)
    pub daily_calories: u32,
    /// Macronutrient gram allocation
    pub macros: MacroSplit,
    /// Per-meal calorie distribution
    pub meals_breakdown: MealBreakdown,
    /// Goal-keyed advisory guidance, in authored order
    pub recommendations: Vec<String>,
}

/// Exercise prescription template
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExerciseTemplate {
    /// Exercise name
    pub name: String,
    /// Target number of sets
    pub target_sets: u32,
    /// Target repetitions, expressed as a range ("8-10") or count ("15")
    pub target_reps: String,
    /// Target duration in minutes, for timed work
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_duration_min: Option<u32>,
}

/// One scheduled day within a weekly plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaySlot {
    /// Day index within the week (0 = first day)
    pub day_index: u32,
    /// Workout type for this day
    pub workout_type: WorkoutType,
    /// Muscle group focus, set for strength days
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus: Option<MuscleGroup>,
    /// Prescribed exercises; empty on rest days
    pub exercises: Vec<ExerciseTemplate>,
}

/// Weekly workout plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutPlan {
    /// Goal-keyed plan name
    pub plan_name: String,
    /// Plan length in weeks
    pub duration_weeks: u32,
    /// Seven day slots, rest days included
    pub weekly_schedule: Vec<DaySlot>,
    /// Goal-keyed coaching tips, in authored order
    pub tips: Vec<String>,
}
