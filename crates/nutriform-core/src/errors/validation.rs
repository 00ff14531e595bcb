// ABOUTME: Field-scoped validation errors for the nutrition profile form
// ABOUTME: Collects one message per failing field and converts into AppError details
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriform Contributors

use crate::models::ProfileField;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

/// Validation failures keyed by form field.
///
/// Holds at most one message per field: the first rule the field failed.
/// Iteration follows form order (age, sex, height, weight, goal).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: BTreeMap<ProfileField, String>,
}

impl ValidationErrors {
    /// Create an empty collection
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for `field`, keeping the first message if one exists
    pub fn add(&mut self, field: ProfileField, message: impl Into<String>) {
        self.fields.entry(field).or_insert_with(|| message.into());
    }

    /// Whether no field failed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of failing fields
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Message recorded for `field`, if any
    #[must_use]
    pub fn get(&self, field: ProfileField) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    /// Failing fields in form order
    pub fn fields(&self) -> impl Iterator<Item = ProfileField> + '_ {
        self.fields.keys().copied()
    }

    /// `(field, message)` pairs in form order
    pub fn iter(&self) -> impl Iterator<Item = (ProfileField, &str)> {
        self.fields.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    /// `Ok(())` when empty, otherwise `Err(self)`
    ///
    /// # Errors
    ///
    /// Returns the collection itself when at least one field failed
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// JSON object mapping wire field names to messages
    #[must_use]
    pub fn to_details(&self) -> Value {
        let fields: Map<String, Value> = self
            .iter()
            .map(|(field, msg)| (field.as_str().to_owned(), Value::String(msg.to_owned())))
            .collect();
        serde_json::json!({ "fields": fields })
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {message}", field.as_str())?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_message_per_field_wins() {
        let mut errors = ValidationErrors::new();
        errors.add(ProfileField::Age, "first");
        errors.add(ProfileField::Age, "second");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(ProfileField::Age), Some("first"));
    }

    #[test]
    fn test_display_follows_form_order() {
        let mut errors = ValidationErrors::new();
        errors.add(ProfileField::Goal, "g");
        errors.add(ProfileField::Age, "a");
        assert_eq!(errors.to_string(), "age: a; goal: g");
    }

    #[test]
    fn test_details_use_wire_names() {
        let mut errors = ValidationErrors::new();
        errors.add(ProfileField::Height, "too short");
        let details = errors.to_details();
        assert_eq!(details["fields"]["height"], "too short");
    }
}
