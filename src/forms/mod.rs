// ABOUTME: Profile form handling - input validation and the menu selection flow
// ABOUTME: Validated goals drive the catalog lookup that opens the menu dialog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriform Contributors

/// Raw input coercion and per-field validation
pub mod validation;

/// Dialog state machine from submission to order confirmation
pub mod selection;

pub use selection::{OrderConfirmation, SelectionFlow, SelectionState};
pub use validation::{validate_profile, FieldValue, RawProfileInput, ValidatedProfile};
