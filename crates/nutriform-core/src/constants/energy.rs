// ABOUTME: Physiological energy factors for converting macronutrient grams to kilocalories
// ABOUTME: Atwater general factors for protein, carbohydrate, and fat
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriform Contributors

//! Atwater general factors.
//!
//! These are domain constants, not configuration. Reference: Atwater, W.O. &
//! Bryant, A.P. (1900). The availability and fuel value of food materials.

/// Kilocalories per gram of protein
pub const PROTEIN_KCAL_PER_GRAM: f64 = 4.0;

/// Kilocalories per gram of carbohydrate
pub const CARBS_KCAL_PER_GRAM: f64 = 4.0;

/// Kilocalories per gram of fat
pub const FAT_KCAL_PER_GRAM: f64 = 9.0;
