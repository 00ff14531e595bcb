// ABOUTME: Re-exports helper modules for nutriform-cli
// ABOUTME: Provides access to output and error display utilities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriform Contributors

pub mod display;
