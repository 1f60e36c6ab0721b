// ABOUTME: Weekly workout plan generation from goal, activity level, and training frequency
// ABOUTME: Builds a deterministic 7-day schedule with rotating muscle-group focus
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Engine

//! Workout Plan Generator
//!
//! Builds a weekly schedule of typed day slots from the goal and activity
//! level. The schedule always covers seven days: training days are spread
//! evenly across the week and the remaining days are rest days with empty
//! exercise lists. Day types cycle through the goal's rotation row, and
//! strength days walk the configured muscle-group cycle so no group repeats
//! until the cycle wraps. The same inputs always produce the same plan.

use crate::config::{EngineConfig, ExerciseCatalogConfig};
use crate::errors::{AppError, AppResult};
use crate::models::{
    ActivityLevel, DaySlot, ExerciseTemplate, FitnessGoal, MuscleGroup, WorkoutPlan, WorkoutType,
};
use tracing::debug;

/// Days in a weekly schedule
const DAYS_PER_WEEK: u32 = 7;

/// Exercise templates for a workout type and optional muscle focus
///
/// Rest days yield an empty list; strength without a focus defaults to the
/// first group of the catalog ordering.
#[must_use]
pub fn exercise_details(
    workout_type: WorkoutType,
    focus: Option<MuscleGroup>,
    catalog: &ExerciseCatalogConfig,
) -> Vec<ExerciseTemplate> {
    catalog.templates_for(workout_type, focus)
}

/// Generate a weekly workout plan
///
/// Training frequency comes from the activity level table unless the caller
/// overrides it explicitly; an override must be within 1..=7.
///
/// # Errors
///
/// Returns `InvalidDaysPerWeek` when an explicit override is outside 1..=7.
pub fn generate_workout_plan(
    goal: FitnessGoal,
    activity_level: ActivityLevel,
    days_per_week: Option<u32>,
    config: &EngineConfig,
) -> AppResult<WorkoutPlan> {
    let days = match days_per_week {
        Some(days) => {
            if !(1..=DAYS_PER_WEEK).contains(&days) {
                return Err(AppError::invalid_days_per_week(format!(
                    "Days per week must be between 1 and 7, got {days}"
                )));
            }
            days
        }
        None => config.plans.weekly_frequency.days_for(activity_level),
    };

    debug!(
        goal = goal.as_str(),
        activity = activity_level.as_str(),
        days, "generating workout plan"
    );

    let rotation = config.plans.rotations.rotation_for(goal);
    let muscle_cycle = &config.plans.muscle_rotation;

    // Training day i of n lands on weekday i*7/n, spreading sessions evenly
    let mut schedule: Vec<DaySlot> = (0..DAYS_PER_WEEK)
        .map(|day_index| DaySlot {
            day_index,
            workout_type: WorkoutType::Rest,
            focus: None,
            exercises: Vec::new(),
        })
        .collect();

    let mut strength_ordinal = 0_usize;
    for session in 0..days {
        let day_index = (session * DAYS_PER_WEEK / days) as usize;
        let workout_type = rotation[session as usize % rotation.len()];

        let focus = if workout_type == WorkoutType::Strength {
            let group = muscle_cycle[strength_ordinal % muscle_cycle.len()];
            strength_ordinal += 1;
            Some(group)
        } else {
            None
        };

        schedule[day_index] = DaySlot {
            day_index: day_index as u32,
            workout_type,
            focus,
            exercises: config.exercises.templates_for(workout_type, focus),
        };
    }

    Ok(WorkoutPlan {
        plan_name: config.advisory.plan_names.for_goal(goal).to_owned(),
        duration_weeks: config.plans.duration_weeks,
        weekly_schedule: schedule,
        tips: config.advisory.workout_tips.for_goal(goal).to_vec(),
    })
}
