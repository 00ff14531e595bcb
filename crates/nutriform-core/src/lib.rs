// ABOUTME: Core types and constants for the Nutriform meal recommendation platform
// ABOUTME: Foundation crate with error handling, domain constants, and menu models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriform Contributors

#![deny(unsafe_code)]

//! # Nutriform Core
//!
//! Foundation crate providing shared types and constants. It changes
//! infrequently so the rest of the workspace benefits from incremental
//! compilation.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode`, and field-scoped `ValidationErrors`
//! - **constants**: energy factors, chart tokens, and form bounds
//! - **models**: menus, macro records, profile enums, and delivery options

/// Unified error handling system with standard error codes
pub mod errors;

/// Domain constants organized by concern
pub mod constants;

/// Core data models
pub mod models;
