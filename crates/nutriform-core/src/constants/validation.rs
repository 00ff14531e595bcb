// ABOUTME: Profile form bounds and the localized messages shown for each failing rule
// ABOUTME: Age, height, and weight ranges are inclusive on both ends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriform Contributors

/// Minimum accepted age (years, inclusive)
pub const AGE_MIN: f64 = 1.0;
/// Maximum accepted age (years, inclusive)
pub const AGE_MAX: f64 = 150.0;

/// Minimum accepted height (cm, inclusive)
pub const HEIGHT_MIN_CM: f64 = 50.0;
/// Maximum accepted height (cm, inclusive)
pub const HEIGHT_MAX_CM: f64 = 250.0;

/// Minimum accepted weight (kg, inclusive)
pub const WEIGHT_MIN_KG: f64 = 20.0;
/// Maximum accepted weight (kg, inclusive)
pub const WEIGHT_MAX_KG: f64 = 250.0;

/// Shown when a numeric field cannot be read as a number
pub const MSG_INVALID_NUMBER: &str = "Debe ingresar un número válido";

/// Age below minimum
pub const MSG_AGE_MIN: &str = "La edad debe ser un número positivo";
/// Age above maximum
pub const MSG_AGE_MAX: &str = "Por favor, ingrese una edad válida";

/// Height below minimum
pub const MSG_HEIGHT_MIN: &str = "Altura debe ser al menos 50 cm";
/// Height above maximum
pub const MSG_HEIGHT_MAX: &str = "Por favor, ingrese una altura válida";

/// Weight below minimum
pub const MSG_WEIGHT_MIN: &str = "Peso debe ser al menos 20 kg";
/// Weight above maximum
pub const MSG_WEIGHT_MAX: &str = "Por favor, ingrese un peso válido";

/// Sex not provided
pub const MSG_SEX_REQUIRED: &str = "Por favor, seleccione su sexo";
/// Sex outside the accepted options
pub const MSG_SEX_INVALID: &str = "Opción de sexo inválida";

/// Goal not provided
pub const MSG_GOAL_REQUIRED: &str = "Por favor, selecciona un objetivo";
/// Goal outside the accepted options
pub const MSG_GOAL_INVALID: &str = "Objetivo inválido";
