// ABOUTME: Profile form validation with numeric coercion and field-scoped messages
// ABOUTME: Turns raw form input into a ValidatedProfile or a set of per-field errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriform Contributors

//! Profile Form Validation
//!
//! Numeric fields accept either JSON numbers or text. Text is trimmed and
//! coerced: empty text coerces to `0` (and then fails the range check),
//! anything that does not parse to a finite number is reported as an invalid
//! number. Every field is checked independently, so one submission can
//! report several fields at once, each with a single message.

use crate::constants::validation::{
    AGE_MAX, AGE_MIN, HEIGHT_MAX_CM, HEIGHT_MIN_CM, MSG_AGE_MAX, MSG_AGE_MIN, MSG_GOAL_INVALID,
    MSG_GOAL_REQUIRED, MSG_HEIGHT_MAX, MSG_HEIGHT_MIN, MSG_INVALID_NUMBER, MSG_SEX_INVALID,
    MSG_SEX_REQUIRED, MSG_WEIGHT_MAX, MSG_WEIGHT_MIN, WEIGHT_MAX_KG, WEIGHT_MIN_KG,
};
use crate::errors::ValidationErrors;
use crate::models::{Goal, ProfileField, Sex};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A raw form value as submitted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Numeric input
    Number(f64),
    /// Text input, coerced where a number is expected
    Text(String),
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Unvalidated profile form input
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawProfileInput {
    /// Age in years
    #[serde(default)]
    pub age: Option<FieldValue>,
    /// `male` or `female`
    #[serde(default)]
    pub sex: Option<FieldValue>,
    /// Height in centimetres
    #[serde(default)]
    pub height: Option<FieldValue>,
    /// Weight in kilograms
    #[serde(default)]
    pub weight: Option<FieldValue>,
    /// `loseWeight` or `gainMuscle`
    #[serde(default)]
    pub goal: Option<FieldValue>,
}

impl RawProfileInput {
    /// Empty form
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the age field
    #[must_use]
    pub fn age(mut self, value: impl Into<FieldValue>) -> Self {
        self.age = Some(value.into());
        self
    }

    /// Set the sex field
    #[must_use]
    pub fn sex(mut self, value: impl Into<FieldValue>) -> Self {
        self.sex = Some(value.into());
        self
    }

    /// Set the height field
    #[must_use]
    pub fn height(mut self, value: impl Into<FieldValue>) -> Self {
        self.height = Some(value.into());
        self
    }

    /// Set the weight field
    #[must_use]
    pub fn weight(mut self, value: impl Into<FieldValue>) -> Self {
        self.weight = Some(value.into());
        self
    }

    /// Set the goal field
    #[must_use]
    pub fn goal(mut self, value: impl Into<FieldValue>) -> Self {
        self.goal = Some(value.into());
        self
    }
}

/// A profile that passed every field rule.
///
/// Only `goal` influences the recommendation; the other fields are collected
/// and range-checked but not used.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValidatedProfile {
    /// Age in years
    pub age: f64,
    /// Biological sex
    pub sex: Sex,
    /// Height in centimetres
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Nutrition goal
    pub goal: Goal,
}

struct RangeRule {
    min: f64,
    max: f64,
    below_min: &'static str,
    above_max: &'static str,
}

const AGE_RULE: RangeRule = RangeRule {
    min: AGE_MIN,
    max: AGE_MAX,
    below_min: MSG_AGE_MIN,
    above_max: MSG_AGE_MAX,
};

const HEIGHT_RULE: RangeRule = RangeRule {
    min: HEIGHT_MIN_CM,
    max: HEIGHT_MAX_CM,
    below_min: MSG_HEIGHT_MIN,
    above_max: MSG_HEIGHT_MAX,
};

const WEIGHT_RULE: RangeRule = RangeRule {
    min: WEIGHT_MIN_KG,
    max: WEIGHT_MAX_KG,
    below_min: MSG_WEIGHT_MIN,
    above_max: MSG_WEIGHT_MAX,
};

/// Coerce a raw value to a finite number
///
/// Missing values and text that does not parse to a finite number yield `None`.
/// Text spelling a non-finite value (`"Infinity"`, `"inf"`, `"NaN"`) is treated
/// as not a number, so the field reports the invalid-number message rather than
/// a range message: such text never describes a body measurement.
#[must_use]
pub fn coerce_number(value: Option<&FieldValue>) -> Option<f64> {
    let number = match value? {
        FieldValue::Number(n) => *n,
        FieldValue::Text(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse::<f64>().ok()?
            }
        }
    };
    number.is_finite().then_some(number)
}

fn check_range(
    field: ProfileField,
    value: Option<&FieldValue>,
    rule: &RangeRule,
    errors: &mut ValidationErrors,
) -> Option<f64> {
    let Some(number) = coerce_number(value) else {
        errors.add(field, MSG_INVALID_NUMBER);
        return None;
    };
    if number < rule.min {
        errors.add(field, rule.below_min);
        return None;
    }
    if number > rule.max {
        errors.add(field, rule.above_max);
        return None;
    }
    Some(number)
}

fn check_choice<T: FromStr>(
    field: ProfileField,
    value: Option<&FieldValue>,
    required: &'static str,
    invalid: &'static str,
    errors: &mut ValidationErrors,
) -> Option<T> {
    match value {
        None => {
            errors.add(field, required);
            None
        }
        Some(FieldValue::Text(text)) if text.trim().is_empty() => {
            errors.add(field, required);
            None
        }
        Some(FieldValue::Text(text)) => {
            let parsed = text.trim().parse::<T>().ok();
            if parsed.is_none() {
                errors.add(field, invalid);
            }
            parsed
        }
        Some(FieldValue::Number(_)) => {
            errors.add(field, invalid);
            None
        }
    }
}

/// Validate a raw profile
///
/// # Errors
///
/// Returns every failing field with the message of the first rule it broke
pub fn validate_profile(input: &RawProfileInput) -> Result<ValidatedProfile, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let age = check_range(ProfileField::Age, input.age.as_ref(), &AGE_RULE, &mut errors);
    let sex = check_choice::<Sex>(
        ProfileField::Sex,
        input.sex.as_ref(),
        MSG_SEX_REQUIRED,
        MSG_SEX_INVALID,
        &mut errors,
    );
    let height = check_range(
        ProfileField::Height,
        input.height.as_ref(),
        &HEIGHT_RULE,
        &mut errors,
    );
    let weight = check_range(
        ProfileField::Weight,
        input.weight.as_ref(),
        &WEIGHT_RULE,
        &mut errors,
    );
    let goal = check_choice::<Goal>(
        ProfileField::Goal,
        input.goal.as_ref(),
        MSG_GOAL_REQUIRED,
        MSG_GOAL_INVALID,
        &mut errors,
    );

    match (age, sex, height, weight, goal) {
        (Some(age), Some(sex), Some(height_cm), Some(weight_kg), Some(goal)) => {
            Ok(ValidatedProfile {
                age,
                sex,
                height_cm,
                weight_kg,
                goal,
            })
        }
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_number_trims_and_parses_text() {
        assert_eq!(coerce_number(Some(&FieldValue::from(" 42 "))), Some(42.0));
        assert_eq!(coerce_number(Some(&FieldValue::from("72.5"))), Some(72.5));
    }

    #[test]
    fn test_coerce_number_empty_text_is_zero() {
        assert_eq!(coerce_number(Some(&FieldValue::from(""))), Some(0.0));
    }

    #[test]
    fn test_infinity_text_is_not_a_number() {
        let mut errors = ValidationErrors::new();
        let value = FieldValue::from("Infinity");
        assert_eq!(
            check_range(ProfileField::Age, Some(&value), &AGE_RULE, &mut errors),
            None
        );
        assert_eq!(errors.get(ProfileField::Age), Some(MSG_INVALID_NUMBER));
    }

    #[test]
    fn test_coerce_number_rejects_garbage_and_non_finite() {
        assert_eq!(coerce_number(Some(&FieldValue::from("abc"))), None);
        assert_eq!(coerce_number(Some(&FieldValue::from("NaN"))), None);
        assert_eq!(coerce_number(Some(&FieldValue::Number(f64::INFINITY))), None);
        assert_eq!(coerce_number(None), None);
    }
}
