// ABOUTME: Menu models - meal entries, aggregate macro records, and catalog keys
// ABOUTME: Records are compiled-in constants; MacroRecord can also be built from user input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriform Contributors

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Catalog key identifying one of the static menus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MenuKey {
    /// Low-calorie, high-protein menu for fat loss
    Hypocaloric,
    /// High-calorie, high-protein menu for muscle gain
    HypercaloricHyperproteic,
}

impl MenuKey {
    /// Every key in catalog order
    pub const ALL: [Self; 2] = [Self::Hypocaloric, Self::HypercaloricHyperproteic];

    /// Wire name of this key
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hypocaloric => "hypocaloric",
            Self::HypercaloricHyperproteic => "hypercaloricHyperproteic",
        }
    }
}

impl fmt::Display for MenuKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MenuKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "hypocaloric" => Ok(Self::Hypocaloric),
            "hypercaloricHyperproteic" => Ok(Self::HypercaloricHyperproteic),
            other => Err(AppError::not_found(format!("menu '{other}'"))),
        }
    }
}

/// One dish in a menu
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MealEntry {
    /// Dish name
    pub name: &'static str,
    /// Approximate kilocalories
    pub calories: f64,
    /// Protein in grams
    pub protein: f64,
    /// Static asset path for the dish photo
    pub image_ref: &'static str,
}

/// Aggregate macronutrients for a menu.
///
/// `calories` is specified independently of the gram values and may not match
/// the total derived from them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroRecord {
    /// Protein in grams
    pub protein: f64,
    /// Carbohydrates in grams
    pub carbs: f64,
    /// Fats in grams
    pub fats: f64,
    /// Stored total kilocalories
    pub calories: f64,
}

impl MacroRecord {
    /// Build a record for compiled-in data
    #[must_use]
    pub const fn from_parts(protein: f64, carbs: f64, fats: f64, calories: f64) -> Self {
        Self {
            protein,
            carbs,
            fats,
            calories,
        }
    }

    /// Build a record from untrusted values
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if any value is negative, `NaN`, or infinite
    pub fn new(protein: f64, carbs: f64, fats: f64, calories: f64) -> AppResult<Self> {
        let record = Self::from_parts(protein, carbs, fats, calories);
        record.validate()?;
        Ok(record)
    }

    /// Check every field is a finite, non-negative number
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` naming the first offending field
    pub fn validate(&self) -> AppResult<()> {
        let fields = [
            ("protein", self.protein),
            ("carbs", self.carbs),
            ("fats", self.fats),
            ("calories", self.calories),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(AppError::invalid_input(format!(
                    "{name} must be a finite, non-negative number (got {value})"
                ))
                .with_details(serde_json::json!({ "field": name })));
            }
        }
        Ok(())
    }
}

/// Sum of the per-meal figures of a menu
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MealTotals {
    /// Sum of meal kilocalories
    pub calories: f64,
    /// Sum of meal protein grams
    pub protein: f64,
}

/// A complete static menu
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MenuRecord {
    /// Catalog key of this menu
    pub key: MenuKey,
    /// Display title
    pub title: &'static str,
    /// Display description
    pub description: &'static str,
    /// Dishes in display order
    pub meals: [MealEntry; 3],
    /// Aggregate macronutrients
    pub macros: MacroRecord,
}

impl MenuRecord {
    /// Aggregate the per-meal calorie and protein figures
    #[must_use]
    pub fn meal_totals(&self) -> MealTotals {
        self.meals.iter().fold(
            MealTotals {
                calories: 0.0,
                protein: 0.0,
            },
            |acc, meal| MealTotals {
                calories: acc.calories + meal.calories,
                protein: acc.protein + meal.protein,
            },
        )
    }
}
