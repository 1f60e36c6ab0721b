// ABOUTME: Physiological constants from nutrition science used across the engine
// ABOUTME: Atwater energy densities for macronutrient calorie conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Engine

//! Physiological constants based on nutrition science
//!
//! Scientifically established values used throughout the engine, kept in one
//! place so calculations and tests reference the same numbers.

/// Atwater general factors: metabolizable energy per gram of macronutrient
///
/// Reference: Atwater, W.O. & Bryant, A.P. (1900). The availability and
/// fuel value of food materials. USDA Annual Report.
pub mod energy {
    /// Energy density of protein (kcal per gram)
    pub const PROTEIN_KCAL_PER_G: f64 = 4.0;

    /// Energy density of carbohydrate (kcal per gram)
    pub const CARBS_KCAL_PER_G: f64 = 4.0;

    /// Energy density of fat (kcal per gram)
    pub const FAT_KCAL_PER_G: f64 = 9.0;
}
