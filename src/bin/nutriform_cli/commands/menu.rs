// ABOUTME: Menu command for nutriform-cli
// ABOUTME: Prints the catalog menu recommended for a goal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriform Contributors

use nutriform::catalog;
use nutriform::config::DisplayConfig;
use nutriform::errors::AppResult;
use nutriform::formatters::OutputFormat;
use nutriform::models::Goal;
use nutriform::presentation::MenuPresentation;
use tracing::info;

use crate::helpers::display::print_output;

/// Print the menu presentation for `goal`
pub fn run(goal: &str, display: &DisplayConfig, format: OutputFormat) -> AppResult<()> {
    let goal: Goal = goal.parse()?;
    let record = catalog::resolve_menu(goal);
    info!(goal = %goal, menu.key = %record.key, "Showing menu");

    let presentation = MenuPresentation::for_menu(record, display)?;
    print_output(&presentation, format)
}
