// ABOUTME: Unified error handling for Nutriform with standard error codes
// ABOUTME: Defines AppError, ErrorCode, and the serializable error response envelope
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriform Contributors

//! # Unified Error Handling System
//!
//! Every fallible operation in Nutriform returns [`AppResult`]. Domain-specific
//! failures (such as field-scoped form validation) have their own types in
//! submodules and convert into [`AppError`] at the boundary.

/// Field-scoped validation errors produced by the profile form
pub mod validation;

pub use validation::ValidationErrors;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Generic invalid input (e.g. negative grams)
    InvalidInput = 3000,
    /// One or more form fields failed validation
    ValidationFailed = 3001,
    /// A value could not be parsed into the expected format
    InvalidFormat = 3002,

    // State (4000-4999)
    /// The requested resource does not exist
    ResourceNotFound = 4000,
    /// Operation is not allowed in the current selection state
    InvalidState = 4001,

    // Configuration (6000-6999)
    /// Configuration error encountered
    ConfigError = 6000,
    /// Configuration value is invalid
    ConfigInvalid = 6001,

    // Internal (9000-9999)
    /// Unexpected internal failure
    InternalError = 9000,
    /// Output serialization failed
    SerializationError = 9001,
}

impl ErrorCode {
    /// Get a user-facing description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::ValidationFailed => "One or more fields failed validation",
            Self::InvalidFormat => "The data format is invalid",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::InvalidState => "The operation is not allowed in the current state",
            Self::ConfigError => "Configuration error encountered",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
            Self::SerializationError => "Data serialization failed",
        }
    }

    /// Process exit code used by the CLI when this error terminates a command
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidInput | Self::ValidationFailed | Self::InvalidFormat => 2,
            Self::ResourceNotFound | Self::InvalidState => 3,
            Self::ConfigError | Self::ConfigInvalid => 4,
            Self::InternalError | Self::SerializationError => 1,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
#[error("{}: {}", .code.description(), .message)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Structured details (field messages, offending values)
    pub details: serde_json::Value,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: serde_json::Value::Null,
            source: None,
        }
    }

    /// Attach structured details
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = details;
        self
    }

    /// Attach a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Field-scoped validation failure
    #[must_use]
    pub fn validation_failed(errors: &ValidationErrors) -> Self {
        Self::new(ErrorCode::ValidationFailed, errors.to_string())
            .with_details(errors.to_details())
    }

    /// Unparseable value
    #[must_use]
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidFormat, message)
    }

    /// Operation not allowed in the current state
    #[must_use]
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidState, message)
    }

    /// Resource not found
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Internal error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Serialization failure
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        Self::validation_failed(&errors)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization(error.to_string()).with_source(error)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Serializable error envelope
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error payload
    pub error: ErrorResponseDetails,
}

/// Body of an [`ErrorResponse`]
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Structured details, omitted when empty
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub details: serde_json::Value,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.message,
                details: error.details,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_serializes_screaming_snake_case() {
        let json = serde_json::to_string(&ErrorCode::ValidationFailed).unwrap();
        assert_eq!(json, "\"VALIDATION_FAILED\"");
    }

    #[test]
    fn test_exit_codes_group_by_category() {
        assert_eq!(ErrorCode::ValidationFailed.exit_code(), 2);
        assert_eq!(ErrorCode::InvalidState.exit_code(), 3);
        assert_eq!(ErrorCode::ConfigInvalid.exit_code(), 4);
        assert_eq!(ErrorCode::InternalError.exit_code(), 1);
    }

    #[test]
    fn test_display_includes_description_and_message() {
        let error = AppError::invalid_state("dialog is closed");
        assert_eq!(
            error.to_string(),
            "The operation is not allowed in the current state: dialog is closed"
        );
    }

    #[test]
    fn test_error_response_skips_null_details() {
        let response = ErrorResponse::from(AppError::not_found("menu"));
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("RESOURCE_NOT_FOUND"));
        assert!(json.contains("menu not found"));
        assert!(!json.contains("details"));
    }
}
