// ABOUTME: Tests for planner configuration defaults and environment overrides
// ABOUTME: Serialized because overrides are read from process environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriform Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutriform::{
    config::{
        CalorieSource, ConfigError, PlannerConfig, ENV_CALORIE_SOURCE, ENV_CALORIE_TOLERANCE,
    },
    errors::{AppError, ErrorCode},
};
use serial_test::serial;
use std::env;

fn clear_overrides() {
    env::remove_var(ENV_CALORIE_SOURCE);
    env::remove_var(ENV_CALORIE_TOLERANCE);
}

#[test]
#[serial]
fn test_defaults_without_overrides() {
    clear_overrides();

    let config = PlannerConfig::load().unwrap();

    assert_eq!(config.display.calorie_source, CalorieSource::Derived);
    assert_eq!(config.display.discrepancy_tolerance_kcal, 1.0);
}

#[test]
#[serial]
fn test_env_overrides_are_applied() {
    clear_overrides();
    env::set_var(ENV_CALORIE_SOURCE, "Stored");
    env::set_var(ENV_CALORIE_TOLERANCE, "2.5");

    let config = PlannerConfig::load().unwrap();
    clear_overrides();

    assert_eq!(config.display.calorie_source, CalorieSource::Stored);
    assert_eq!(config.display.discrepancy_tolerance_kcal, 2.5);
}

#[test]
#[serial]
fn test_unknown_calorie_source_fails_to_parse() {
    clear_overrides();
    env::set_var(ENV_CALORIE_SOURCE, "average");

    let result = PlannerConfig::load();
    clear_overrides();

    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
#[serial]
fn test_negative_tolerance_is_out_of_range() {
    clear_overrides();
    env::set_var(ENV_CALORIE_TOLERANCE, "-1");

    let result = PlannerConfig::load();
    clear_overrides();

    let error = result.unwrap_err();
    assert!(matches!(error, ConfigError::ValueOutOfRange(_)));
    assert_eq!(AppError::from(error).code, ErrorCode::ConfigInvalid);
}

#[test]
fn test_calorie_source_wire_names() {
    assert_eq!(CalorieSource::Stored.as_str(), "stored");
    assert_eq!(
        serde_json::to_string(&CalorieSource::Derived).unwrap(),
        "\"derived\""
    );
    assert!("both".parse::<CalorieSource>().is_err());
}
