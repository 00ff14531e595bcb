// ABOUTME: Integration tests for nutriform-cli binary
// ABOUTME: Tests recommend, menu, and breakdown commands along with error exit codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriform Contributors

//! Integration tests for the nutriform-cli binary.
//!
//! These tests verify command output, JSON envelopes, and exit codes.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::process::Command;

/// Helper to run CLI command and capture output
fn run_cli(args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_nutriform-cli"))
        .args(args)
        .env("RUST_LOG", "error")
        .env_remove("NUTRIFORM_CALORIE_SOURCE")
        .env_remove("NUTRIFORM_CALORIE_TOLERANCE_KCAL")
        .output()
        .unwrap();

    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (exit_code, stdout, stderr)
}

const PROFILE: [&str; 10] = [
    "--age", "34", "--sex", "female", "--height", "168", "--weight", "70", "--goal",
    "loseWeight",
];

#[test]
fn test_cli_help_shows_commands() {
    let (exit_code, stdout, _stderr) = run_cli(&["--help"]);

    assert_eq!(exit_code, 0, "CLI help should exit with 0");
    for command in ["recommend", "menu", "breakdown"] {
        assert!(stdout.contains(command), "Help should mention '{command}'");
    }
}

#[test]
fn test_breakdown_text_output() {
    let (exit_code, stdout, _stderr) =
        run_cli(&["breakdown", "--protein", "7", "--carbs", "9", "--fats", "0"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Proteínas: 43.8%"));
    assert!(stdout.contains("Carbohidratos: 56.3%"));
    assert!(stdout.contains("Grasas: 0.0%"));
    assert!(stdout.contains("Total: 64 cal"));
}

#[test]
fn test_breakdown_rejects_negative_grams() {
    let (exit_code, _stdout, stderr) =
        run_cli(&["breakdown", "--protein=-1", "--carbs", "9", "--fats", "0"]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("protein"));
}

#[test]
fn test_menu_text_output() {
    let (exit_code, stdout, _stderr) = run_cli(&["menu", "loseWeight"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Menú bajo en calorías"));
    assert!(stdout.contains("Total: 1869 cal"));
}

#[test]
fn test_menu_unknown_goal_fails() {
    let (exit_code, stdout, _stderr) = run_cli(&["menu", "maintain", "--format", "json"]);

    assert_eq!(exit_code, 2);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["error"]["code"], "INVALID_FORMAT");
}

#[test]
fn test_recommend_prints_menu() {
    let mut args = vec!["recommend"];
    args.extend(PROFILE);

    let (exit_code, stdout, _stderr) = run_cli(&args);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Menú bajo en calorías"));
    assert!(stdout.contains("Perfil Nutricional"));
    assert!(!stdout.contains("Pedido confirmado"));
}

#[test]
fn test_recommend_with_delivery_confirms_order() {
    let (exit_code, stdout, _stderr) = run_cli(&[
        "recommend", "--age", "25", "--sex", "male", "--height", "180", "--weight", "75",
        "--goal", "gainMuscle", "--delivery", "pickup", "--format", "json",
    ]);

    assert_eq!(exit_code, 0);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["menu"]["menu_key"], "hypercaloricHyperproteic");
    assert_eq!(json["order"]["delivery"], "pickup");
}

#[test]
fn test_recommend_validation_failure_json_envelope() {
    let (exit_code, stdout, _stderr) = run_cli(&[
        "recommend", "--age", "0", "--sex", "female", "--height", "49", "--weight", "70",
        "--goal", "loseWeight", "--format", "json",
    ]);

    assert_eq!(exit_code, 2);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["error"]["code"], "VALIDATION_FAILED");
    assert_eq!(
        json["error"]["details"]["fields"]["age"],
        "La edad debe ser un número positivo"
    );
    assert_eq!(
        json["error"]["details"]["fields"]["height"],
        "Altura debe ser al menos 50 cm"
    );
}

#[test]
fn test_recommend_validation_failure_text() {
    let (exit_code, stdout, stderr) = run_cli(&["recommend", "--goal", "loseWeight"]);

    assert_eq!(exit_code, 2);
    assert!(stdout.is_empty());
    assert!(stderr.contains("sex: Por favor, seleccione su sexo"));
}

#[test]
fn test_recommend_text_errors_follow_form_order() {
    let (exit_code, _stdout, stderr) = run_cli(&["recommend"]);

    assert_eq!(exit_code, 2);
    let fields: Vec<&str> = stderr
        .lines()
        .filter_map(|line| line.trim_start().split_once(": "))
        .map(|(field, _)| field)
        .filter(|field| ["age", "sex", "height", "weight", "goal"].contains(field))
        .collect();
    assert_eq!(fields, ["age", "sex", "height", "weight", "goal"]);
}
