// ABOUTME: Algorithm tests for the macronutrient breakdown calculator
// ABOUTME: Covers energy factors, rounding, share sums, zero totals, and input rejection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriform Contributors
//! Macro breakdown tests
//!
//! Shares are derived from grams with 4/4/9 kcal per gram, rounded half away
//! from zero to tenths of a percent, and never read the stored calorie total.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutriform::{
    errors::ErrorCode,
    intelligence::{calculate_macro_breakdown, Macronutrient},
    models::MacroRecord,
};

mod common;

fn record(protein: f64, carbs: f64, fats: f64, calories: f64) -> MacroRecord {
    MacroRecord::from_parts(protein, carbs, fats, calories)
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

// ============================================================================
// CATALOG FIGURES
// ============================================================================

#[test]
fn test_hypocaloric_figures() {
    common::init_test_logging();
    let breakdown = calculate_macro_breakdown(&record(201.0, 147.0, 53.0, 1870.0)).unwrap();

    assert_close(breakdown.slice(Macronutrient::Protein).calories, 804.0);
    assert_close(breakdown.slice(Macronutrient::Carbohydrate).calories, 588.0);
    assert_close(breakdown.slice(Macronutrient::Fat).calories, 477.0);
    assert_close(breakdown.total_calories, 1869.0);

    let shares: Vec<&str> = breakdown
        .slices
        .iter()
        .map(|s| s.share_percent.as_str())
        .collect();
    assert_eq!(shares, ["43.0", "31.5", "25.5"]);
    assert!(!breakdown.degenerate);
}

#[test]
fn test_hypercaloric_hyperproteic_figures() {
    common::init_test_logging();
    let breakdown = calculate_macro_breakdown(&record(227.4, 179.0, 79.0, 2336.6)).unwrap();

    assert!((breakdown.total_calories - 2336.6).abs() < 1e-6);
    let shares: Vec<&str> = breakdown
        .slices
        .iter()
        .map(|s| s.share_percent.as_str())
        .collect();
    assert_eq!(shares, ["38.9", "30.6", "30.4"]);
}

#[test]
fn test_stored_calories_do_not_affect_shares() {
    let a = calculate_macro_breakdown(&record(201.0, 147.0, 53.0, 1870.0)).unwrap();
    let b = calculate_macro_breakdown(&record(201.0, 147.0, 53.0, 99_999.0)).unwrap();
    assert_eq!(a, b);
}

// ============================================================================
// ROUNDING AND ORDER
// ============================================================================

#[test]
fn test_ties_round_away_from_zero() {
    let breakdown = calculate_macro_breakdown(&record(7.0, 9.0, 0.0, 0.0)).unwrap();

    assert_close(breakdown.total_calories, 64.0);
    assert_eq!(breakdown.slices[0].share_percent, "43.8");
    assert_eq!(breakdown.slices[1].share_percent, "56.3");
    assert_eq!(breakdown.slices[2].share_percent, "0.0");
}

#[test]
fn test_slices_are_in_chart_order_with_labels_and_colors() {
    let breakdown = calculate_macro_breakdown(&record(10.0, 10.0, 10.0, 0.0)).unwrap();

    let labels: Vec<&str> = breakdown.slices.iter().map(|s| s.label).collect();
    assert_eq!(labels, ["Proteínas", "Carbohidratos", "Grasas"]);

    let colors: Vec<&str> = breakdown.slices.iter().map(|s| s.color).collect();
    assert_eq!(colors, ["#FF6384", "#36A2EB", "#FFCE56"]);

    assert_close(breakdown.slices[0].grams, 10.0);
}

#[test]
fn test_single_macro_gets_full_share() {
    let breakdown = calculate_macro_breakdown(&record(0.0, 0.0, 12.0, 0.0)).unwrap();
    assert_eq!(breakdown.slice(Macronutrient::Fat).share_percent, "100.0");
    assert_eq!(breakdown.slice(Macronutrient::Protein).share_percent, "0.0");
}

#[test]
fn test_share_sum_stays_near_one_hundred() {
    let cases = [
        (201.0, 147.0, 53.0),
        (227.4, 179.0, 79.0),
        (7.0, 9.0, 0.0),
        (1.0, 1.0, 1.0),
        (33.3, 66.6, 11.1),
        (0.1, 250.0, 3.0),
    ];
    for (protein, carbs, fats) in cases {
        let breakdown = calculate_macro_breakdown(&record(protein, carbs, fats, 0.0)).unwrap();
        assert!(
            (breakdown.share_sum() - 100.0).abs() <= 0.15 + 1e-9,
            "shares for ({protein}, {carbs}, {fats}) sum to {}",
            breakdown.share_sum()
        );
    }
}

// ============================================================================
// EDGE CASES
// ============================================================================

#[test]
fn test_zero_total_is_degenerate_with_zero_shares() {
    let breakdown = calculate_macro_breakdown(&record(0.0, 0.0, 0.0, 500.0)).unwrap();

    assert!(breakdown.degenerate);
    assert_close(breakdown.total_calories, 0.0);
    for slice in &breakdown.slices {
        assert_eq!(slice.share_percent, "0.0");
        assert!(!slice.share.is_nan());
    }
}

#[test]
fn test_negative_and_non_finite_grams_are_rejected() {
    for bad in [
        record(-1.0, 0.0, 0.0, 0.0),
        record(0.0, f64::NAN, 0.0, 0.0),
        record(0.0, 0.0, f64::INFINITY, 0.0),
    ] {
        let error = calculate_macro_breakdown(&bad).unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidInput);
    }
}

#[test]
fn test_calorie_overflow_is_rejected() {
    let huge = MacroRecord::new(1e308, 0.0, 1e308, 0.0).unwrap();

    let error = calculate_macro_breakdown(&huge).unwrap_err();

    assert_eq!(error.code, ErrorCode::InvalidInput);
}

#[test]
fn test_largest_convertible_grams_yield_numeric_shares() {
    let breakdown = calculate_macro_breakdown(&record(1e300, 1e300, 1e300, 0.0)).unwrap();

    for slice in &breakdown.slices {
        assert!(slice.share.is_finite());
        assert_ne!(slice.share_percent, "NaN");
    }
    assert_eq!(breakdown.slice(Macronutrient::Fat).share_percent, "52.9");
}
