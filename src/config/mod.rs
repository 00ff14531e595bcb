// ABOUTME: Planner configuration loaded once from defaults and environment overrides
// ABOUTME: Provides a validated process-wide singleton with fallback to defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriform Contributors

//! Planner Configuration
//!
//! Defaults are overridden by environment variables:
//!
//! | Variable | Field |
//! |----------|-------|
//! | `NUTRIFORM_CALORIE_SOURCE` | `display.calorie_source` (`stored` or `derived`) |
//! | `NUTRIFORM_CALORIE_TOLERANCE_KCAL` | `display.discrepancy_tolerance_kcal` |

/// Presentation settings
pub mod display;
/// Configuration error types
pub mod error;

pub use display::{CalorieSource, DisplayConfig};
pub use error::ConfigError;

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Environment variable selecting the headline calorie total
pub const ENV_CALORIE_SOURCE: &str = "NUTRIFORM_CALORIE_SOURCE";

/// Environment variable for the stored/derived discrepancy tolerance
pub const ENV_CALORIE_TOLERANCE: &str = "NUTRIFORM_CALORIE_TOLERANCE_KCAL";

/// Global configuration singleton
static PLANNER_CONFIG: OnceLock<PlannerConfig> = OnceLock::new();

/// Main planner configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Presentation settings
    pub display: DisplayConfig,
}

impl PlannerConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        PLANNER_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load planner config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment
    ///
    /// # Errors
    ///
    /// Returns an error if an environment override cannot be parsed or the
    /// resulting configuration is invalid
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` if the tolerance is negative or not finite
    pub fn validate(&self) -> Result<(), ConfigError> {
        let tolerance = self.display.discrepancy_tolerance_kcal;
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Calorie discrepancy tolerance must be a finite, non-negative number",
            ));
        }
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(ENV_CALORIE_SOURCE, &mut self.display.calorie_source)?;
        Self::apply_env_var(
            ENV_CALORIE_TOLERANCE,
            &mut self.display.discrepancy_tolerance_kcal,
        )?;
        Ok(self)
    }
}
