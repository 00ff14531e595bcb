// ABOUTME: Display configuration for the menu presentation
// ABOUTME: Chooses which calorie total is headlined and the discrepancy tolerance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriform Contributors

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which calorie total the presentation headlines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalorieSource {
    /// Total stored on the menu record
    Stored,
    /// Total derived from macro grams (what the chart's centre shows)
    #[default]
    Derived,
}

impl CalorieSource {
    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Stored => "stored",
            Self::Derived => "derived",
        }
    }
}

impl fmt::Display for CalorieSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalorieSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "stored" => Ok(Self::Stored),
            "derived" => Ok(Self::Derived),
            other => Err(format!("unknown calorie source '{other}'")),
        }
    }
}

/// Presentation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Calorie total to headline
    pub calorie_source: CalorieSource,
    /// Maximum |stored - derived| (kcal) still considered consistent
    pub discrepancy_tolerance_kcal: f64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            calorie_source: CalorieSource::Derived,
            discrepancy_tolerance_kcal: 1.0,
        }
    }
}
