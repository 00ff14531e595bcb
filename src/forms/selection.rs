// ABOUTME: Menu selection flow state machine from form submission to order confirmation
// ABOUTME: Tracks the open dialog, the selected menu and the exclusive delivery choice
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriform Contributors

//! Selection Flow
//!
//! ```text
//! Idle --submit(valid)--> MenuSelected { delivery: None }
//! MenuSelected --choose_delivery--> MenuSelected { delivery: Some(_) }
//! MenuSelected { delivery: Some(_) } --confirm_order--> Idle
//! any --dismiss--> Idle
//! ```
//!
//! The dialog is open exactly when a menu is selected. Nothing is sent
//! anywhere on confirmation.

use super::validation::{validate_profile, RawProfileInput};
use crate::catalog;
use crate::config::DisplayConfig;
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use crate::models::{DeliveryOption, MenuKey};
use crate::presentation::MenuPresentation;
use serde::Serialize;

/// Where the flow currently is
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum SelectionState {
    /// Form visible, no dialog
    #[default]
    Idle,
    /// Dialog open on a recommended menu
    MenuSelected {
        /// Recommended menu
        menu: MenuKey,
        /// Delivery choice, if one has been made
        delivery: Option<DeliveryOption>,
    },
}

/// Result of a confirmed order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderConfirmation {
    /// Confirmed menu
    pub menu: MenuKey,
    /// Chosen delivery option
    pub delivery: DeliveryOption,
}

/// Drives one user through form, dialog and confirmation
#[derive(Debug, Clone, Default)]
pub struct SelectionFlow {
    state: SelectionState,
}

impl SelectionFlow {
    /// New flow in `Idle`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> SelectionState {
        self.state
    }

    /// Whether the menu dialog is open
    #[must_use]
    pub const fn is_dialog_open(&self) -> bool {
        matches!(self.state, SelectionState::MenuSelected { .. })
    }

    /// Menu shown in the open dialog
    #[must_use]
    pub const fn selected_menu(&self) -> Option<MenuKey> {
        match self.state {
            SelectionState::MenuSelected { menu, .. } => Some(menu),
            SelectionState::Idle => None,
        }
    }

    /// Current delivery choice
    #[must_use]
    pub const fn delivery(&self) -> Option<DeliveryOption> {
        match self.state {
            SelectionState::MenuSelected { delivery, .. } => delivery,
            SelectionState::Idle => None,
        }
    }

    /// Validate the form and open the dialog on the recommended menu
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if the dialog is already open, or
    /// `ValidationFailed` with per-field messages. A failed submission leaves
    /// the state unchanged.
    pub fn submit(&mut self, input: &RawProfileInput) -> AppResult<MenuKey> {
        if self.is_dialog_open() {
            return Err(AppError::invalid_state(
                "Close the menu dialog before submitting the form again",
            ));
        }

        let profile = validate_profile(input).map_err(|errors| {
            AppLogger::log_validation_rejected(errors.fields());
            AppError::from(errors)
        })?;

        let menu = catalog::menu_key_for_goal(profile.goal);
        self.state = SelectionState::MenuSelected {
            menu,
            delivery: None,
        };
        AppLogger::log_menu_selected(menu);
        Ok(menu)
    }

    /// Choose how the order is received, replacing any earlier choice
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if no dialog is open
    pub fn choose_delivery(&mut self, option: DeliveryOption) -> AppResult<()> {
        let SelectionState::MenuSelected { menu, .. } = self.state else {
            return Err(AppError::invalid_state(
                "No menu is selected; submit the form first",
            ));
        };
        self.state = SelectionState::MenuSelected {
            menu,
            delivery: Some(option),
        };
        AppLogger::log_delivery_chosen(menu, option);
        Ok(())
    }

    /// Confirm the order and close the dialog
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if no dialog is open or no delivery option has
    /// been chosen
    pub fn confirm_order(&mut self) -> AppResult<OrderConfirmation> {
        match self.state {
            SelectionState::MenuSelected {
                menu,
                delivery: Some(delivery),
            } => {
                self.state = SelectionState::Idle;
                AppLogger::log_order_confirmed(menu, delivery);
                Ok(OrderConfirmation { menu, delivery })
            }
            SelectionState::MenuSelected { delivery: None, .. } => Err(AppError::invalid_state(
                "Choose a delivery option before confirming",
            )),
            SelectionState::Idle => Err(AppError::invalid_state(
                "No menu is selected; submit the form first",
            )),
        }
    }

    /// Close the dialog, dropping the selection and delivery choice
    pub fn dismiss(&mut self) {
        AppLogger::log_dialog_dismissed(self.selected_menu());
        self.state = SelectionState::Idle;
    }

    /// Build the rendering contract for the open dialog
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if no dialog is open
    pub fn presentation(&self, display: &DisplayConfig) -> AppResult<MenuPresentation> {
        let menu = self
            .selected_menu()
            .ok_or_else(|| AppError::invalid_state("No menu dialog is open"))?;
        MenuPresentation::for_menu(catalog::menu(menu), display)
    }
}
