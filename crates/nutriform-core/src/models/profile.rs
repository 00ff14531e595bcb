// ABOUTME: Nutrition profile enumerations - sex, goal, and form field identifiers
// ABOUTME: Wire names match the values submitted by the profile form
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriform Contributors

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Biological sex as collected by the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    /// Male
    Male,
    /// Female
    Female,
}

impl Sex {
    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl FromStr for Sex {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            other => Err(AppError::invalid_format(format!("unknown sex '{other}'"))),
        }
    }
}

/// Goal selected by the user; the only input that drives the recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Goal {
    /// Lose body fat
    LoseWeight,
    /// Gain muscle mass
    GainMuscle,
}

impl Goal {
    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::LoseWeight => "loseWeight",
            Self::GainMuscle => "gainMuscle",
        }
    }

    /// Option label shown in the goal selector
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::LoseWeight => "Bajar peso",
            Self::GainMuscle => "Aumentar masa muscular",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Goal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "loseWeight" => Ok(Self::LoseWeight),
            "gainMuscle" => Ok(Self::GainMuscle),
            other => Err(AppError::invalid_format(format!("unknown goal '{other}'"))),
        }
    }
}

/// Profile form fields, ordered as they appear on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileField {
    /// Age in years
    Age,
    /// Biological sex
    Sex,
    /// Height in centimetres
    Height,
    /// Weight in kilograms
    Weight,
    /// Nutrition goal
    Goal,
}

impl ProfileField {
    /// Wire name of the field
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Age => "age",
            Self::Sex => "sex",
            Self::Height => "height",
            Self::Weight => "weight",
            Self::Goal => "goal",
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
