// ABOUTME: Main library entry point for the Nutriform menu recommendation form
// ABOUTME: Validates a profile, recommends a static menu, and breaks down its macros
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriform Contributors

#![deny(unsafe_code)]

//! # Nutriform
//!
//! A goal-driven menu recommender. A user fills a short profile form (age,
//! sex, height, weight, goal); the goal alone selects one of two compiled-in
//! menus, and the menu's aggregate macronutrients are turned into a
//! calorie-share breakdown for display.
//!
//! ## Architecture
//!
//! - **catalog**: the two static menus and goal-to-menu resolution
//! - **intelligence**: macro breakdown and calorie reconciliation
//! - **forms**: input validation and the selection dialog state machine
//! - **presentation**: the rendering contract handed to a UI or the CLI
//! - **formatters**: JSON and text output
//! - **config** / **logging**: environment-driven settings and tracing setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nutriform::config::PlannerConfig;
//! use nutriform::errors::AppResult;
//! use nutriform::forms::{RawProfileInput, SelectionFlow};
//!
//! fn main() -> AppResult<()> {
//!     let mut flow = SelectionFlow::new();
//!     let input = RawProfileInput::new()
//!         .age(34)
//!         .sex("female")
//!         .height(168)
//!         .weight(70)
//!         .goal("loseWeight");
//!     flow.submit(&input)?;
//!     let presentation = flow.presentation(&PlannerConfig::global().display)?;
//!     println!("{presentation}");
//!     Ok(())
//! }
//! ```

pub use nutriform_core::{constants, errors, models};

/// Static menu catalog
pub mod catalog;

/// Configuration management
pub mod config;

/// Output formatters (JSON, text)
pub mod formatters;

/// Profile form validation and selection flow
pub mod forms;

/// Macro breakdown and calorie reconciliation
pub mod intelligence;

/// Logging configuration and domain event helpers
pub mod logging;

/// Menu dialog rendering contract
pub mod presentation;
