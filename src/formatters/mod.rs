// ABOUTME: Output format abstraction for rendering results as JSON or plain text
// ABOUTME: Supports JSON (default) for machines and text cards for terminals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriform Contributors

//! Output Format Abstraction Layer
//!
//! ## Supported Formats
//!
//! - **JSON**: Default format, the serialized rendering contract
//! - **Text**: The value's `Display` rendering, meant for a terminal
//!
//! ## Usage
//!
//! ```rust,no_run
//! use nutriform::catalog;
//! use nutriform::config::DisplayConfig;
//! use nutriform::formatters::{format_output, OutputFormat};
//! use nutriform::presentation::MenuPresentation;
//!
//! let presentation =
//!     MenuPresentation::for_menu(&catalog::HYPOCALORIC, &DisplayConfig::default())?;
//! let output = format_output(&presentation, OutputFormat::Text)?;
//! println!("{}", output.data);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::errors::AppError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// JSON format (default)
    #[default]
    Json,
    /// Human-readable text
    Text,
}

impl OutputFormat {
    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "text" => Ok(Self::Text),
            other => Err(format!("unknown output format '{other}' (expected json or text)")),
        }
    }
}

/// Formatted output containing the serialized data and metadata
#[derive(Debug, Clone)]
pub struct FormattedOutput {
    /// The rendered data
    pub data: String,
    /// The format used
    pub format: OutputFormat,
}

/// Error type for formatting operations
#[derive(Debug, Clone)]
pub struct FormatError {
    /// Error message describing what went wrong
    pub message: String,
    /// The format that was being used when the error occurred
    pub format: OutputFormat,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Format error ({}): {}", self.format, self.message)
    }
}

impl std::error::Error for FormatError {}

impl From<FormatError> for AppError {
    fn from(error: FormatError) -> Self {
        Self::serialization(error.message.clone()).with_source(error)
    }
}

/// Render data in the specified output format
///
/// # Errors
///
/// Returns `FormatError` if JSON serialization fails
pub fn format_output<T: Serialize + fmt::Display>(
    data: &T,
    format: OutputFormat,
) -> Result<FormattedOutput, FormatError> {
    let data = match format {
        OutputFormat::Json => serde_json::to_string(data).map_err(|e| FormatError {
            message: e.to_string(),
            format,
        })?,
        OutputFormat::Text => data.to_string(),
    };

    Ok(FormattedOutput {
        data,
        format,
    })
}

/// Render data with pretty-printed JSON (for terminals)
///
/// # Errors
///
/// Returns `FormatError` if JSON serialization fails
pub fn format_output_pretty<T: Serialize + fmt::Display>(
    data: &T,
    format: OutputFormat,
) -> Result<FormattedOutput, FormatError> {
    let data = match format {
        OutputFormat::Json => serde_json::to_string_pretty(data).map_err(|e| FormatError {
            message: e.to_string(),
            format,
        })?,
        OutputFormat::Text => data.to_string(),
    };

    Ok(FormattedOutput {
        data,
        format,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_is_case_insensitive_and_strict() {
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("TEXT".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
