// ABOUTME: Static exercise template catalog keyed by workout type and muscle group
// ABOUTME: Configures authored set/rep/duration prescriptions for schedule slots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Engine

//! Exercise Catalog Configuration
//!
//! Authored exercise prescriptions attached to scheduled days. Strength
//! templates are keyed by muscle group; cardio, flexibility, and
//! unstructured days each carry one generic list. Rest days map to an empty
//! list. The catalog is plain data, so tests assert against it directly.

use crate::config::error::ConfigError;
use crate::models::{ExerciseTemplate, MuscleGroup, WorkoutType};
use serde::{Deserialize, Serialize};

fn lift(name: &str, sets: u32, reps: &str) -> ExerciseTemplate {
    ExerciseTemplate {
        name: name.into(),
        target_sets: sets,
        target_reps: reps.into(),
        target_duration_min: None,
    }
}

fn timed(name: &str, sets: u32, reps: &str, minutes: u32) -> ExerciseTemplate {
    ExerciseTemplate {
        name: name.into(),
        target_sets: sets,
        target_reps: reps.into(),
        target_duration_min: Some(minutes),
    }
}

/// Exercise template catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseCatalogConfig {
    /// Strength templates keyed by muscle group
    pub strength: StrengthCatalog,
    /// Generic cardio session
    pub cardio: Vec<ExerciseTemplate>,
    /// Generic mobility session
    pub flexibility: Vec<ExerciseTemplate>,
    /// Unstructured activity suggestions
    pub other: Vec<ExerciseTemplate>,
}

/// Strength templates per muscle group
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrengthCatalog {
    pub chest: Vec<ExerciseTemplate>,
    pub back: Vec<ExerciseTemplate>,
    pub legs: Vec<ExerciseTemplate>,
    pub shoulders: Vec<ExerciseTemplate>,
    pub arms: Vec<ExerciseTemplate>,
    pub core: Vec<ExerciseTemplate>,
}

impl StrengthCatalog {
    /// Templates for a muscle group
    #[must_use]
    pub fn for_group(&self, group: MuscleGroup) -> &[ExerciseTemplate] {
        match group {
            MuscleGroup::Chest => &self.chest,
            MuscleGroup::Back => &self.back,
            MuscleGroup::Legs => &self.legs,
            MuscleGroup::Shoulders => &self.shoulders,
            MuscleGroup::Arms => &self.arms,
            MuscleGroup::Core => &self.core,
        }
    }
}

impl ExerciseCatalogConfig {
    /// Templates for a workout type and optional muscle focus
    ///
    /// Strength without an explicit focus falls back to the first group in
    /// the catalog ordering (chest). Rest days yield an empty list.
    #[must_use]
    pub fn templates_for(
        &self,
        workout_type: WorkoutType,
        focus: Option<MuscleGroup>,
    ) -> Vec<ExerciseTemplate> {
        match workout_type {
            WorkoutType::Strength => self
                .strength
                .for_group(focus.unwrap_or(MuscleGroup::Chest))
                .to_vec(),
            WorkoutType::Cardio => self.cardio.clone(),
            WorkoutType::Flexibility => self.flexibility.clone(),
            WorkoutType::Other => self.other.clone(),
            WorkoutType::Rest => Vec::new(),
        }
    }

    /// Validate the catalog
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingField` when any non-rest category or
    /// muscle group has no templates.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let groups = [
            &self.strength.chest,
            &self.strength.back,
            &self.strength.legs,
            &self.strength.shoulders,
            &self.strength.arms,
            &self.strength.core,
        ];
        if groups.iter().any(|g| g.is_empty()) {
            return Err(ConfigError::MissingField(
                "Every muscle group needs at least one strength template",
            ));
        }
        if self.cardio.is_empty() || self.flexibility.is_empty() || self.other.is_empty() {
            return Err(ConfigError::MissingField(
                "Cardio, flexibility, and other categories need templates",
            ));
        }
        Ok(())
    }
}

impl Default for ExerciseCatalogConfig {
    fn default() -> Self {
        Self {
            strength: StrengthCatalog {
                chest: vec![
                    lift("Barbell Bench Press", 4, "8-10"),
                    lift("Incline Dumbbell Press", 3, "10-12"),
                    lift("Cable Fly", 3, "12-15"),
                    lift("Push-Up", 3, "15"),
                ],
                back: vec![
                    lift("Lat Pulldown", 4, "8-10"),
                    lift("Barbell Row", 3, "8-10"),
                    lift("Seated Cable Row", 3, "10-12"),
                    lift("Face Pull", 3, "12-15"),
                ],
                legs: vec![
                    lift("Back Squat", 4, "6-8"),
                    lift("Romanian Deadlift", 3, "8-10"),
                    lift("Walking Lunge", 3, "10 per leg"),
                    lift("Standing Calf Raise", 4, "12-15"),
                ],
                shoulders: vec![
                    lift("Overhead Press", 4, "6-8"),
                    lift("Lateral Raise", 3, "12-15"),
                    lift("Rear Delt Fly", 3, "12-15"),
                    lift("Dumbbell Shrug", 3, "10-12"),
                ],
                arms: vec![
                    lift("Barbell Curl", 3, "8-10"),
                    lift("Triceps Pushdown", 3, "10-12"),
                    lift("Hammer Curl", 3, "10-12"),
                    lift("Skull Crusher", 3, "10-12"),
                ],
                core: vec![
                    timed("Plank", 3, "max hold", 1),
                    lift("Hanging Knee Raise", 3, "10-15"),
                    lift("Cable Crunch", 3, "12-15"),
                    lift("Russian Twist", 3, "20"),
                ],
            },
            cardio: vec![
                timed("Warm-Up Walk", 1, "1", 5),
                timed("Interval Run", 8, "1 min hard / 2 min easy", 24),
                timed("Cool-Down Jog", 1, "1", 10),
            ],
            flexibility: vec![
                timed("Dynamic Stretching Circuit", 1, "1", 10),
                timed("Yoga Flow", 1, "1", 20),
                timed("Static Stretching", 1, "30 sec per muscle", 15),
            ],
            other: vec![
                timed("Brisk Walk", 1, "1", 30),
                timed("Recreational Sport", 1, "1", 45),
            ],
        }
    }
}
