// ABOUTME: Nutrition intelligence - macronutrient breakdowns and calorie reconciliation
// ABOUTME: Pure, synchronous calculations over menu macro records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriform Contributors

/// Macronutrient-to-calorie breakdown for the nutrition chart
pub mod macro_breakdown;

/// Stored versus derived calorie totals
pub mod calorie_reconciliation;

pub use calorie_reconciliation::{
    reconcile_calories, reconcile_menu_calories, CalorieReconciliation,
};
pub use macro_breakdown::{
    calculate_macro_breakdown, format_share, macro_calories, round_share, BreakdownSlice,
    MacroBreakdown, Macronutrient,
};
