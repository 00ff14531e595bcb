// ABOUTME: Macronutrient breakdown calculator turning gram totals into calorie shares
// ABOUTME: Converts grams with Atwater factors and emits protein, carbohydrate, fat slices
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriform Contributors

//! Macro Breakdown Calculator
//!
//! Converts a [`MacroRecord`] into three display-ready slices in the fixed
//! order protein, carbohydrate, fat. Each slice's share is its fraction of
//! the calories derived from the gram values; the record's stored `calories`
//! is never read here.
//!
//! # Rounding
//!
//! Shares are rounded half away from zero to tenths of a percent (`43.75`
//! becomes `43.8`), then formatted with exactly one decimal. Three
//! independently rounded shares sum to `100.0` within `0.15`.
//!
//! # Zero total
//!
//! When every macro is zero the derived total is `0` and no division is
//! performed: every share is `0.0` and the breakdown is flagged `degenerate`.

use crate::constants::chart::{
    CARBS_COLOR, CARBS_LABEL, FATS_COLOR, FATS_LABEL, FULL_SHARE_PERCENT, PROTEIN_COLOR,
    PROTEIN_LABEL, SHARE_SCALE,
};
use crate::constants::energy::{CARBS_KCAL_PER_GRAM, FAT_KCAL_PER_GRAM, PROTEIN_KCAL_PER_GRAM};
use crate::errors::{AppError, AppResult};
use crate::models::MacroRecord;
use serde::Serialize;
use tracing::debug;

/// The three macronutrients, in chart order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Macronutrient {
    /// Protein (4 kcal/g)
    Protein,
    /// Carbohydrate (4 kcal/g)
    Carbohydrate,
    /// Fat (9 kcal/g)
    Fat,
}

impl Macronutrient {
    /// Chart order
    pub const ALL: [Self; 3] = [Self::Protein, Self::Carbohydrate, Self::Fat];

    /// Energy factor in kcal per gram
    #[must_use]
    pub const fn kcal_per_gram(self) -> f64 {
        match self {
            Self::Protein => PROTEIN_KCAL_PER_GRAM,
            Self::Carbohydrate => CARBS_KCAL_PER_GRAM,
            Self::Fat => FAT_KCAL_PER_GRAM,
        }
    }

    /// Legend label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Protein => PROTEIN_LABEL,
            Self::Carbohydrate => CARBS_LABEL,
            Self::Fat => FATS_LABEL,
        }
    }

    /// Chart segment colour token
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Protein => PROTEIN_COLOR,
            Self::Carbohydrate => CARBS_COLOR,
            Self::Fat => FATS_COLOR,
        }
    }

    /// Grams of this macronutrient in `macros`
    #[must_use]
    pub const fn grams_in(self, macros: &MacroRecord) -> f64 {
        match self {
            Self::Protein => macros.protein,
            Self::Carbohydrate => macros.carbs,
            Self::Fat => macros.fats,
        }
    }
}

/// One macronutrient's share of the derived calorie total
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownSlice {
    /// Which macronutrient this slice represents
    pub macronutrient: Macronutrient,
    /// Legend label
    pub label: &'static str,
    /// Grams; the chart sizes segments by this value
    pub grams: f64,
    /// Kilocalories derived from `grams`
    pub calories: f64,
    /// Colour token
    pub color: &'static str,
    /// Share rounded to tenths of a percent
    pub share: f64,
    /// `share` formatted with exactly one decimal
    pub share_percent: String,
}

/// Complete breakdown of a macro record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MacroBreakdown {
    /// Slices in order protein, carbohydrate, fat
    pub slices: [BreakdownSlice; 3],
    /// Sum of the derived slice calories
    pub total_calories: f64,
    /// True when the derived total is zero and every share defaulted to `0.0`
    pub degenerate: bool,
}

impl MacroBreakdown {
    /// Slice for `macronutrient`
    #[must_use]
    pub fn slice(&self, macronutrient: Macronutrient) -> &BreakdownSlice {
        match macronutrient {
            Macronutrient::Protein => &self.slices[0],
            Macronutrient::Carbohydrate => &self.slices[1],
            Macronutrient::Fat => &self.slices[2],
        }
    }

    /// Sum of the rounded shares
    #[must_use]
    pub fn share_sum(&self) -> f64 {
        self.slices.iter().map(|slice| slice.share).sum()
    }
}

/// Kilocalories supplied by `grams` of `macronutrient`
#[must_use]
pub fn macro_calories(grams: f64, macronutrient: Macronutrient) -> f64 {
    grams * macronutrient.kcal_per_gram()
}

/// Round a percentage half away from zero to tenths
#[must_use]
pub fn round_share(percent: f64) -> f64 {
    (percent * SHARE_SCALE).round() / SHARE_SCALE
}

/// Format a rounded share with exactly one decimal
#[must_use]
pub fn format_share(share: f64) -> String {
    format!("{share:.1}")
}

/// Calculate the calorie breakdown for a macro record
///
/// # Errors
///
/// Returns `InvalidInput` if any gram value is negative, `NaN`, or infinite,
/// or if the derived calories overflow to infinity
pub fn calculate_macro_breakdown(macros: &MacroRecord) -> AppResult<MacroBreakdown> {
    macros.validate()?;

    let calories = Macronutrient::ALL.map(|m| macro_calories(m.grams_in(macros), m));
    let total_calories: f64 = calories.iter().sum();
    if !total_calories.is_finite() {
        return Err(AppError::invalid_input(
            "Macro grams are too large to convert to calories",
        )
        .with_details(serde_json::json!({ "field": "total_calories" })));
    }
    let degenerate = total_calories == 0.0;

    if degenerate {
        debug!("Macro record has no energy; emitting zero shares");
    }

    let slices = Macronutrient::ALL.map(|m| {
        let slice_calories = macro_calories(m.grams_in(macros), m);
        let share = if degenerate {
            0.0
        } else {
            round_share(slice_calories / total_calories * FULL_SHARE_PERCENT)
        };
        BreakdownSlice {
            macronutrient: m,
            label: m.label(),
            grams: m.grams_in(macros),
            calories: slice_calories,
            color: m.color(),
            share,
            share_percent: format_share(share),
        }
    });

    Ok(MacroBreakdown {
        slices,
        total_calories,
        degenerate,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_share_ties_go_away_from_zero() {
        assert!((round_share(43.75) - 43.8).abs() < 1e-9);
        assert!((round_share(56.25) - 56.3).abs() < 1e-9);
        assert!((round_share(12.5) - 12.5).abs() < 1e-9);
    }

    #[test]
    fn test_format_share_always_has_one_decimal() {
        assert_eq!(format_share(25.0), "25.0");
        assert_eq!(format_share(0.0), "0.0");
        assert_eq!(format_share(100.0), "100.0");
    }

    #[test]
    fn test_energy_factors() {
        assert_eq!(macro_calories(10.0, Macronutrient::Protein), 40.0);
        assert_eq!(macro_calories(10.0, Macronutrient::Carbohydrate), 40.0);
        assert_eq!(macro_calories(10.0, Macronutrient::Fat), 90.0);
    }
}
