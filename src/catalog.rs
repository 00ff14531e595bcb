// ABOUTME: Static menu catalog with the two compiled-in menus and goal-to-menu resolution
// ABOUTME: Records are process-wide constants with no mutation API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriform Contributors

//! Menu Catalog
//!
//! Two menus exist, keyed by [`MenuKey`]. The recommendation is a pure lookup
//! on the user's [`Goal`]; no other profile field influences the result.
//! In both menus the stored `calories` equals the sum of the meal calories.

use crate::models::{Goal, MacroRecord, MealEntry, MenuKey, MenuRecord};

/// Low-calorie, high-protein menu
pub static HYPOCALORIC: MenuRecord = MenuRecord {
    key: MenuKey::Hypocaloric,
    title: "Menú bajo en calorías",
    description: "Menú bajo en calorías y alto en proteínas diseñado para bajar grasa corporal.",
    meals: [
        MealEntry {
            name: "Bife de cerdo con cebollas caramelizadas",
            calories: 610.0,
            protein: 52.0,
            image_ref: "/menus/CaramelizedOnionAppleJusRoastedPork.webp",
        },
        MealEntry {
            name: "Bife con arroz yamani y brócoli",
            calories: 510.0,
            protein: 48.0,
            image_ref: "/menus/Steak&BrownRice.webp",
        },
        MealEntry {
            name: "Pastel de carne con papas rústicas",
            calories: 750.0,
            protein: 55.0,
            image_ref: "/menus/CottagePie.webp",
        },
    ],
    macros: MacroRecord::from_parts(201.0, 147.0, 53.0, 1870.0),
};

/// High-calorie, high-protein menu
pub static HYPERCALORIC_HYPERPROTEIC: MenuRecord = MenuRecord {
    key: MenuKey::HypercaloricHyperproteic,
    title: "Menú de Aumento de Masa Muscular",
    description: "Alto en proteínas y calorías para desarrollo muscular.",
    meals: [
        MealEntry {
            name: "Empanadas de pollo con cebolla caramelizada",
            calories: 1036.0,
            protein: 59.0,
            image_ref: "/menus/empanadas.png",
        },
        MealEntry {
            name: "Souffle de calabaza con albóndigas",
            calories: 971.0,
            protein: 67.4,
            image_ref: "/menus/suffleAlbondigas.png",
        },
        MealEntry {
            name: "Mousse de tofu con batata y chocolate",
            calories: 329.6,
            protein: 31.0,
            image_ref: "/menus/mousseTofu.png",
        },
    ],
    macros: MacroRecord::from_parts(227.4, 179.0, 79.0, 2336.6),
};

/// Catalog key recommended for a goal
#[must_use]
pub const fn menu_key_for_goal(goal: Goal) -> MenuKey {
    match goal {
        Goal::LoseWeight => MenuKey::Hypocaloric,
        Goal::GainMuscle => MenuKey::HypercaloricHyperproteic,
    }
}

/// Menu stored under `key`
#[must_use]
pub fn menu(key: MenuKey) -> &'static MenuRecord {
    match key {
        MenuKey::Hypocaloric => &HYPOCALORIC,
        MenuKey::HypercaloricHyperproteic => &HYPERCALORIC_HYPERPROTEIC,
    }
}

/// Menu recommended for `goal`. Total over the goal enumeration.
#[must_use]
pub fn resolve_menu(goal: Goal) -> &'static MenuRecord {
    menu(menu_key_for_goal(goal))
}

/// All menus in catalog order
#[must_use]
pub fn all_menus() -> [&'static MenuRecord; 2] {
    MenuKey::ALL.map(menu)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_are_filed_under_their_own_key() {
        for key in MenuKey::ALL {
            assert_eq!(menu(key).key, key);
        }
    }

    #[test]
    fn test_stored_calories_match_meal_sum() {
        for record in all_menus() {
            let totals = record.meal_totals();
            assert!(
                (totals.calories - record.macros.calories).abs() < 1e-9,
                "{} stored calories should equal the meal sum",
                record.key
            );
        }
    }
}
