// ABOUTME: Recommend command for nutriform-cli
// ABOUTME: Runs the selection flow end to end from profile form to optional order confirmation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriform Contributors

use clap::Args;
use nutriform::config::DisplayConfig;
use nutriform::errors::AppResult;
use nutriform::formatters::OutputFormat;
use nutriform::forms::{OrderConfirmation, RawProfileInput, SelectionFlow};
use nutriform::models::DeliveryOption;
use nutriform::presentation::MenuPresentation;
use serde::Serialize;
use std::fmt;

use crate::helpers::display::print_output;

/// Profile form fields, passed through as raw text so the form's own
/// validation messages apply
#[derive(Args)]
pub struct RecommendArgs {
    /// Age in years
    #[arg(long)]
    age: Option<String>,

    /// male or female
    #[arg(long)]
    sex: Option<String>,

    /// Height in centimetres
    #[arg(long)]
    height: Option<String>,

    /// Weight in kilograms
    #[arg(long)]
    weight: Option<String>,

    /// loseWeight or gainMuscle
    #[arg(long)]
    goal: Option<String>,

    /// Choose delivery (home or pickup) and confirm the order
    #[arg(long)]
    delivery: Option<String>,
}

impl RecommendArgs {
    fn to_raw_input(&self) -> RawProfileInput {
        RawProfileInput {
            age: self.age.clone().map(Into::into),
            sex: self.sex.clone().map(Into::into),
            height: self.height.clone().map(Into::into),
            weight: self.weight.clone().map(Into::into),
            goal: self.goal.clone().map(Into::into),
        }
    }
}

#[derive(Serialize)]
struct RecommendOutput {
    menu: MenuPresentation,
    #[serde(skip_serializing_if = "Option::is_none")]
    order: Option<OrderConfirmation>,
}

impl fmt::Display for RecommendOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.menu)?;
        if let Some(order) = &self.order {
            write!(f, "\n\nPedido confirmado: {}", order.delivery.label())?;
        }
        Ok(())
    }
}

/// Validate the profile, open the recommended menu, and optionally confirm an order
pub fn run(args: &RecommendArgs, display: &DisplayConfig, format: OutputFormat) -> AppResult<()> {
    let delivery = args
        .delivery
        .as_deref()
        .map(str::parse::<DeliveryOption>)
        .transpose()?;

    let mut flow = SelectionFlow::new();
    flow.submit(&args.to_raw_input())?;
    let menu = flow.presentation(display)?;

    let order = match delivery {
        Some(option) => {
            flow.choose_delivery(option)?;
            Some(flow.confirm_order()?)
        }
        None => {
            flow.dismiss();
            None
        }
    };

    print_output(&RecommendOutput { menu, order }, format)
}
