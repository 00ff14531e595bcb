// ABOUTME: Re-exports command modules for nutriform-cli
// ABOUTME: Provides access to the recommend, menu, and breakdown commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriform Contributors

pub mod breakdown;
pub mod menu;
pub mod recommend;
