// ABOUTME: Nutriform CLI - recommends a menu from a profile and prints its macro breakdown
// ABOUTME: Runs the selection flow, catalog lookups, and ad-hoc breakdowns from the terminal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriform Contributors
//!
//! Usage:
//! ```bash
//! # Validate a profile and show the recommended menu
//! nutriform-cli recommend --age 34 --sex female --height 168 --weight 70 --goal loseWeight
//!
//! # Also choose delivery and confirm the order
//! nutriform-cli recommend --age 34 --sex female --height 168 --weight 70 \
//!     --goal gainMuscle --delivery pickup --format json
//!
//! # Show the menu for a goal
//! nutriform-cli menu gainMuscle
//!
//! # Break down arbitrary macro grams
//! nutriform-cli breakdown --protein 7 --carbs 9 --fats 0
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use nutriform::config::PlannerConfig;
use nutriform::constants::service_names;
use nutriform::errors::AppResult;
use nutriform::formatters::OutputFormat;
use nutriform::logging::LoggingConfig;
use std::process::ExitCode;
use tracing::debug;

use commands::recommend::RecommendArgs;

#[derive(Parser)]
#[command(
    name = "nutriform-cli",
    about = "Nutriform menu recommendation CLI",
    long_about = "Validates a nutrition profile, recommends a menu for the chosen goal, and prints its macronutrient breakdown."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format (json or text)
    #[arg(long, short = 'f', global = true, default_value = "text")]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Validate a profile and show the recommended menu
    Recommend(RecommendArgs),

    /// Show the menu for a goal (loseWeight or gainMuscle)
    Menu {
        /// Goal wire name
        goal: String,
    },

    /// Break down arbitrary macronutrient grams
    Breakdown {
        /// Protein in grams
        #[arg(long)]
        protein: f64,

        /// Carbohydrates in grams
        #[arg(long)]
        carbs: f64,

        /// Fats in grams
        #[arg(long)]
        fats: f64,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    logging.service_name = service_names::NUTRIFORM_CLI.to_owned();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    if let Err(e) = logging.init() {
        eprintln!("Warning: logging not initialized: {e}");
    }

    let format = cli.format;
    match run(cli.command, format) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            let code = error.code.exit_code();
            helpers::display::report_error(error, format);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

fn run(command: Command, format: OutputFormat) -> AppResult<()> {
    let config = PlannerConfig::load()?;
    debug!(
        calorie_source = %config.display.calorie_source,
        tolerance_kcal = config.display.discrepancy_tolerance_kcal,
        "Planner configuration loaded"
    );

    match command {
        Command::Recommend(args) => commands::recommend::run(&args, &config.display, format),
        Command::Menu { goal } => commands::menu::run(&goal, &config.display, format),
        Command::Breakdown {
            protein,
            carbs,
            fats,
        } => commands::breakdown::run(protein, carbs, fats, format),
    }
}
