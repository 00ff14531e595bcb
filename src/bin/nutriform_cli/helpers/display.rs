// ABOUTME: Output formatting helpers for nutriform-cli
// ABOUTME: Prints rendered results and turns errors into text messages or JSON envelopes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriform Contributors

use nutriform::errors::{AppError, AppResult, ErrorResponse};
use nutriform::formatters::{format_output_pretty, OutputFormat};
use serde::Serialize;
use std::fmt;

/// Render `data` in `format` and print it to stdout
pub fn print_output<T: Serialize + fmt::Display>(data: &T, format: OutputFormat) -> AppResult<()> {
    let output = format_output_pretty(data, format)?;
    println!("{}", output.data);
    Ok(())
}

/// Report a failed command.
///
/// JSON mode writes the error envelope to stdout so scripted callers can
/// parse it; text mode writes a human message to stderr, one line per
/// invalid form field.
pub fn report_error(error: AppError, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let response = ErrorResponse::from(error);
            match serde_json::to_string_pretty(&response) {
                Ok(json) => println!("{json}"),
                Err(e) => eprintln!("Error: {} ({e})", response.error.message),
            }
        }
        OutputFormat::Text => {
            let field_messages = error
                .details
                .get("fields")
                .and_then(serde_json::Value::as_object);
            match field_messages {
                Some(fields) => {
                    eprintln!("Error: {}", error.code.description());
                    for (field, message) in fields {
                        eprintln!("  {field}: {}", message.as_str().unwrap_or_default());
                    }
                }
                None => eprintln!("Error: {error}"),
            }
        }
    }
}
