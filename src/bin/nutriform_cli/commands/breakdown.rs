// ABOUTME: Breakdown command for nutriform-cli
// ABOUTME: Prints the calorie shares for arbitrary macronutrient grams
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriform Contributors

use nutriform::errors::AppResult;
use nutriform::formatters::OutputFormat;
use nutriform::intelligence::calculate_macro_breakdown;
use nutriform::models::MacroRecord;

use crate::helpers::display::print_output;

/// Print the breakdown for the given grams
///
/// The stored total is irrelevant to the chart, so the record carries `0`.
pub fn run(protein: f64, carbs: f64, fats: f64, format: OutputFormat) -> AppResult<()> {
    let macros = MacroRecord::new(protein, carbs, fats, 0.0)?;
    let breakdown = calculate_macro_breakdown(&macros)?;
    print_output(&breakdown, format)
}
