// ABOUTME: Compares a menu's stored calorie total with the total derived from its macros
// ABOUTME: Flags discrepancies beyond a configured tolerance instead of hiding them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriform Contributors

use super::macro_breakdown::MacroBreakdown;
use crate::config::CalorieSource;
use crate::logging::AppLogger;
use crate::models::{MacroRecord, MenuKey};
use serde::Serialize;

/// Stored versus derived calorie totals for one record
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalorieReconciliation {
    /// Total stored on the record
    pub stored_kcal: f64,
    /// Total derived from grams with the energy factors
    pub derived_kcal: f64,
    /// `stored_kcal - derived_kcal`
    pub difference_kcal: f64,
    /// Tolerance the comparison used
    pub tolerance_kcal: f64,
    /// Whether `|difference_kcal| <= tolerance_kcal`
    pub consistent: bool,
}

impl CalorieReconciliation {
    /// Total to headline for the configured source
    #[must_use]
    pub const fn total_for(&self, source: CalorieSource) -> f64 {
        match source {
            CalorieSource::Stored => self.stored_kcal,
            CalorieSource::Derived => self.derived_kcal,
        }
    }
}

/// Compare the stored total on `record` with the total in `breakdown`
#[must_use]
pub fn reconcile_calories(
    record: &MacroRecord,
    breakdown: &MacroBreakdown,
    tolerance_kcal: f64,
) -> CalorieReconciliation {
    let difference_kcal = record.calories - breakdown.total_calories;
    CalorieReconciliation {
        stored_kcal: record.calories,
        derived_kcal: breakdown.total_calories,
        difference_kcal,
        tolerance_kcal,
        consistent: difference_kcal.abs() <= tolerance_kcal,
    }
}

/// Reconcile a catalog menu and log a warning when the totals disagree
#[must_use]
pub fn reconcile_menu_calories(
    key: MenuKey,
    record: &MacroRecord,
    breakdown: &MacroBreakdown,
    tolerance_kcal: f64,
) -> CalorieReconciliation {
    let reconciliation = reconcile_calories(record, breakdown, tolerance_kcal);
    if !reconciliation.consistent {
        AppLogger::log_calorie_discrepancy(key, &reconciliation);
    }
    reconciliation
}
