// ABOUTME: Delivery options offered in the menu dialog
// ABOUTME: Home delivery and in-store pickup are mutually exclusive choices
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriform Contributors

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the customer wants to receive the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryOption {
    /// Delivered to the customer's address
    Home,
    /// Collected at the store
    Pickup,
}

impl DeliveryOption {
    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Pickup => "pickup",
        }
    }

    /// Checkbox label shown in the dialog
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Home => "Enviar a domicilio",
            Self::Pickup => "Retiro en local",
        }
    }
}

impl fmt::Display for DeliveryOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeliveryOption {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "home" => Ok(Self::Home),
            "pickup" => Ok(Self::Pickup),
            other => Err(AppError::invalid_format(format!(
                "unknown delivery option '{other}' (expected home or pickup)"
            ))),
        }
    }
}
