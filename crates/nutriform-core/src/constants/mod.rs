// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for energy conversion, chart display, and form validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriform Contributors

//! Constants module
//!
//! Constants are grouped by domain rather than collected in a single file.

/// Energy conversion factors (kcal per gram of macronutrient)
pub mod energy;
/// Nutrition chart labels, colour tokens, and rounding precision
pub mod chart;
/// Profile form bounds and user-facing validation messages
pub mod validation;
/// Service identity used in logs
pub mod service_names;

pub use energy::*;
