// ABOUTME: Rendering contract for the menu dialog, combining catalog data and the macro chart
// ABOUTME: Serializable for machine output and Display-able as a plain text card
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriform Contributors

use crate::config::{CalorieSource, DisplayConfig};
use crate::constants::chart::CHART_TITLE;
use crate::errors::AppResult;
use crate::intelligence::{
    calculate_macro_breakdown, reconcile_menu_calories, CalorieReconciliation, MacroBreakdown,
};
use crate::models::{MealEntry, MenuKey, MenuRecord};
use serde::Serialize;
use std::fmt;

/// Everything the menu dialog displays
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuPresentation {
    /// Catalog key
    pub menu_key: MenuKey,
    /// Dialog title
    pub title: &'static str,
    /// One-paragraph description
    pub description: &'static str,
    /// The three dishes
    pub meals: [MealEntry; 3],
    /// Chart slices and derived total
    pub breakdown: MacroBreakdown,
    /// Total shown under the chart
    pub displayed_total_kcal: f64,
    /// Which total `displayed_total_kcal` is
    pub calorie_source: CalorieSource,
    /// Stored versus derived totals
    pub reconciliation: CalorieReconciliation,
}

impl MenuPresentation {
    /// Build the presentation for a catalog menu
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the record's macros cannot be broken down
    pub fn for_menu(record: &'static MenuRecord, display: &DisplayConfig) -> AppResult<Self> {
        let breakdown = calculate_macro_breakdown(&record.macros)?;
        let reconciliation = reconcile_menu_calories(
            record.key,
            &record.macros,
            &breakdown,
            display.discrepancy_tolerance_kcal,
        );

        Ok(Self {
            menu_key: record.key,
            title: record.title,
            description: record.description,
            meals: record.meals,
            displayed_total_kcal: reconciliation.total_for(display.calorie_source),
            calorie_source: display.calorie_source,
            breakdown,
            reconciliation,
        })
    }
}

/// Format a kilocalorie or gram figure without a trailing `.0`
#[must_use]
pub fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

impl fmt::Display for MenuPresentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", self.description)?;
        writeln!(f)?;
        for meal in &self.meals {
            writeln!(f, "- {}", meal.name)?;
            writeln!(
                f,
                "  ~{} cal | {}g proteína",
                format_amount(meal.calories),
                format_amount(meal.protein)
            )?;
        }
        writeln!(f)?;
        writeln!(f, "{CHART_TITLE}")?;
        write!(f, "{}", BreakdownLegend(&self.breakdown))?;
        write!(f, "Total: {} cal", format_amount(self.displayed_total_kcal))?;
        if !self.reconciliation.consistent {
            write!(
                f,
                "\n(aviso: total guardado {} cal, calculado {} cal)",
                format_amount(self.reconciliation.stored_kcal),
                format_amount(self.reconciliation.derived_kcal)
            )?;
        }
        Ok(())
    }
}

/// Legend lines for a breakdown, one per slice
pub struct BreakdownLegend<'a>(pub &'a MacroBreakdown);

impl fmt::Display for BreakdownLegend<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slice in &self.0.slices {
            writeln!(f, "{}: {}%", slice.label, slice.share_percent)?;
        }
        Ok(())
    }
}

impl fmt::Display for MacroBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{CHART_TITLE}")?;
        write!(f, "{}", BreakdownLegend(self))?;
        write!(f, "Total: {} cal", format_amount(self.total_calories))
    }
}
