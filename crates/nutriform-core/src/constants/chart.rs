// ABOUTME: Display constants for the macronutrient breakdown chart
// ABOUTME: Slice labels, colour tokens, and share precision in fixed slice order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriform Contributors

/// Protein slice label
pub const PROTEIN_LABEL: &str = "Proteínas";
/// Carbohydrate slice label
pub const CARBS_LABEL: &str = "Carbohidratos";
/// Fat slice label
pub const FATS_LABEL: &str = "Grasas";

/// Protein slice colour token
pub const PROTEIN_COLOR: &str = "#FF6384";
/// Carbohydrate slice colour token
pub const CARBS_COLOR: &str = "#36A2EB";
/// Fat slice colour token
pub const FATS_COLOR: &str = "#FFCE56";

/// Chart heading shown above the breakdown
pub const CHART_TITLE: &str = "Perfil Nutricional";

/// Shares are rounded to tenths of a percent
pub const SHARE_SCALE: f64 = 10.0;

/// Total share expected across all slices
pub const FULL_SHARE_PERCENT: f64 = 100.0;
