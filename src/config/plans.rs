// ABOUTME: Workout plan policy tables for weekly frequency, day-type rotation, and muscle focus
// ABOUTME: Configures training frequency per activity level and deterministic schedule rotations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Engine

//! Workout Plan Policy Configuration
//!
//! The schedule builder is fully table-driven: training frequency comes from
//! the activity level, day types cycle through a goal-keyed rotation, and
//! strength days walk a muscle-group cycle. Identical inputs always produce
//! the identical schedule.

use crate::config::error::ConfigError;
use crate::models::{ActivityLevel, FitnessGoal, MuscleGroup, WorkoutType};
use serde::{Deserialize, Serialize};

/// Workout plan policy configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanConfig {
    /// Training days per week derived from activity level
    pub weekly_frequency: WeeklyFrequencyConfig,
    /// Plan length in weeks (fixed policy constant, not computed)
    pub duration_weeks: u32,
    /// Goal-keyed day-type rotation rows
    pub rotations: DayTypeRotationsConfig,
    /// Muscle-group cycle walked by strength days across the week
    pub muscle_rotation: Vec<MuscleGroup>,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            weekly_frequency: WeeklyFrequencyConfig::default(),
            duration_weeks: 4,
            rotations: DayTypeRotationsConfig::default(),
            muscle_rotation: vec![
                MuscleGroup::Chest,
                MuscleGroup::Back,
                MuscleGroup::Legs,
                MuscleGroup::Shoulders,
                MuscleGroup::Arms,
                MuscleGroup::Core,
            ],
        }
    }
}

/// Training days per week by activity level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyFrequencyConfig {
    /// Sedentary: 3 days
    pub sedentary: u32,
    /// Light: 3 days
    pub light: u32,
    /// Moderate: 4 days
    pub moderate: u32,
    /// Active: 5 days
    pub active: u32,
    /// Very active: 6 days
    pub very_active: u32,
}

impl WeeklyFrequencyConfig {
    /// Training days per week for an activity level
    #[must_use]
    pub const fn days_for(&self, level: ActivityLevel) -> u32 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::Light => self.light,
            ActivityLevel::Moderate => self.moderate,
            ActivityLevel::Active => self.active,
            ActivityLevel::VeryActive => self.very_active,
        }
    }
}

impl Default for WeeklyFrequencyConfig {
    fn default() -> Self {
        Self {
            sedentary: 3,
            light: 3,
            moderate: 4,
            active: 5,
            very_active: 6,
        }
    }
}

/// Goal-keyed day-type rotation rows
///
/// Workout day `i` of the week takes the type at `row[i % row.len()]`.
/// Rest never appears in a row; unscheduled days are rest days.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayTypeRotationsConfig {
    /// Weight loss: cardio-forward with flexibility work
    pub lose_weight: Vec<WorkoutType>,
    /// Maintenance: even balance across the three modalities
    pub maintain: Vec<WorkoutType>,
    /// Muscle gain: strength-forward with supporting cardio
    pub gain_muscle: Vec<WorkoutType>,
}

impl DayTypeRotationsConfig {
    /// Rotation row for a goal
    #[must_use]
    pub fn rotation_for(&self, goal: FitnessGoal) -> &[WorkoutType] {
        match goal {
            FitnessGoal::LoseWeight => &self.lose_weight,
            FitnessGoal::Maintain => &self.maintain,
            FitnessGoal::GainMuscle => &self.gain_muscle,
        }
    }
}

impl Default for DayTypeRotationsConfig {
    fn default() -> Self {
        Self {
            lose_weight: vec![
                WorkoutType::Cardio,
                WorkoutType::Strength,
                WorkoutType::Cardio,
                WorkoutType::Flexibility,
            ],
            maintain: vec![
                WorkoutType::Strength,
                WorkoutType::Cardio,
                WorkoutType::Flexibility,
            ],
            gain_muscle: vec![
                WorkoutType::Strength,
                WorkoutType::Strength,
                WorkoutType::Cardio,
            ],
        }
    }
}

impl PlanConfig {
    /// Validate the plan policy tables
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` when a frequency is outside 1..=7, the plan
    /// duration is zero, a rotation row is empty or schedules rest days
    /// explicitly, or the muscle rotation cycle is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let frequencies = [
            self.weekly_frequency.sedentary,
            self.weekly_frequency.light,
            self.weekly_frequency.moderate,
            self.weekly_frequency.active,
            self.weekly_frequency.very_active,
        ];
        if frequencies.iter().any(|&d| !(1..=7).contains(&d)) {
            return Err(ConfigError::ValueOutOfRange(
                "Weekly training frequency must be between 1 and 7 days",
            ));
        }

        if self.duration_weeks == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "Plan duration must be at least 1 week",
            ));
        }

        let rotations = [
            &self.rotations.lose_weight,
            &self.rotations.maintain,
            &self.rotations.gain_muscle,
        ];
        for row in rotations {
            if row.is_empty() {
                return Err(ConfigError::MissingField(
                    "Each goal needs a non-empty day-type rotation",
                ));
            }
            if row.contains(&WorkoutType::Rest) {
                return Err(ConfigError::InvalidRange(
                    "Rotation rows must not schedule rest days; unscheduled days rest",
                ));
            }
        }

        if self.muscle_rotation.is_empty() {
            return Err(ConfigError::MissingField(
                "Muscle rotation cycle must not be empty",
            ));
        }

        Ok(())
    }
}
