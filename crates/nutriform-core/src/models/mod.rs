// ABOUTME: Core data models for menus, macronutrients, and the nutrition profile form
// ABOUTME: Re-exports menu, profile, and order types used across the workspace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriform Contributors

/// Menu records, meal entries, and aggregate macronutrient records
pub mod menu;
/// Delivery choices offered once a menu is shown
pub mod order;
/// Profile form enumerations and field identifiers
pub mod profile;

pub use menu::{MacroRecord, MealEntry, MealTotals, MenuKey, MenuRecord};
pub use order::DeliveryOption;
pub use profile::{Goal, ProfileField, Sex};
