// ABOUTME: Authored advisory content keyed by fitness goal
// ABOUTME: Configures diet guidance strings, plan names, and workout coaching tips
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Engine

//! Advisory Content Configuration
//!
//! Static, goal-keyed guidance text attached to diet recommendations and
//! workout plans. The text is authored content held in a lookup table, never
//! computed and never inlined at call sites, so it can be substituted for
//! testing or localization.

use crate::models::FitnessGoal;
use serde::{Deserialize, Serialize};

/// Advisory content configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisoryConfig {
    /// Diet guidance strings per goal, in presentation order
    pub diet_guidance: GoalMessages,
    /// Workout plan display names per goal
    pub plan_names: GoalNames,
    /// Workout coaching tips per goal, in presentation order
    pub workout_tips: GoalMessages,
}

/// Ordered message lists keyed by goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalMessages {
    /// Messages for the weight loss goal
    pub lose_weight: Vec<String>,
    /// Messages for the maintenance goal
    pub maintain: Vec<String>,
    /// Messages for the muscle gain goal
    pub gain_muscle: Vec<String>,
}

impl GoalMessages {
    /// Message list for a goal
    #[must_use]
    pub fn for_goal(&self, goal: FitnessGoal) -> &[String] {
        match goal {
            FitnessGoal::LoseWeight => &self.lose_weight,
            FitnessGoal::Maintain => &self.maintain,
            FitnessGoal::GainMuscle => &self.gain_muscle,
        }
    }
}

/// Single display string keyed by goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalNames {
    /// Name for the weight loss goal
    pub lose_weight: String,
    /// Name for the maintenance goal
    pub maintain: String,
    /// Name for the muscle gain goal
    pub gain_muscle: String,
}

impl GoalNames {
    /// Display name for a goal
    #[must_use]
    pub fn for_goal(&self, goal: FitnessGoal) -> &str {
        match goal {
            FitnessGoal::LoseWeight => &self.lose_weight,
            FitnessGoal::Maintain => &self.maintain,
            FitnessGoal::GainMuscle => &self.gain_muscle,
        }
    }
}

impl Default for AdvisoryConfig {
    fn default() -> Self {
        Self {
            diet_guidance: GoalMessages {
                lose_weight: vec![
                    "Create a consistent calorie deficit".into(),
                    "Prioritize protein to preserve muscle".into(),
                    "Fill half your plate with vegetables".into(),
                    "Limit liquid calories and alcohol".into(),
                    "Weigh in weekly, not daily".into(),
                ],
                maintain: vec![
                    "Keep portions consistent day to day".into(),
                    "Spread protein evenly across meals".into(),
                    "Favor whole foods over processed snacks".into(),
                    "Adjust intake if weight drifts over a month".into(),
                ],
                gain_muscle: vec![
                    "Eat a consistent calorie surplus".into(),
                    "Aim for protein with every meal".into(),
                    "Time carbohydrates around training".into(),
                    "Sleep 7-9 hours to support recovery".into(),
                    "Increase intake if the scale stalls for two weeks".into(),
                ],
            },
            plan_names: GoalNames {
                lose_weight: "Lean Conditioning Program".into(),
                maintain: "Balanced Fitness Program".into(),
                gain_muscle: "Strength Building Program".into(),
            },
            workout_tips: GoalMessages {
                lose_weight: vec![
                    "Keep cardio sessions at a conversational pace".into(),
                    "Strength work preserves muscle while losing fat".into(),
                    "Consistency beats intensity for fat loss".into(),
                ],
                maintain: vec![
                    "Rotate modalities to avoid overuse injuries".into(),
                    "Use rest days for light walking or stretching".into(),
                    "Revisit the plan every few weeks and adjust loads".into(),
                ],
                gain_muscle: vec![
                    "Add weight or reps each week where possible".into(),
                    "Leave one or two reps in reserve on working sets".into(),
                    "Treat cardio as recovery, not extra volume".into(),
                ],
            },
        }
    }
}
