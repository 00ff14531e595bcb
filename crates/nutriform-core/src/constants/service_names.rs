// ABOUTME: Service identity constants used in structured logs
// ABOUTME: Keeps log service names consistent across the library and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriform Contributors

/// Default service name for log records
pub const NUTRIFORM: &str = "nutriform";

/// Service name used by the command-line front end
pub const NUTRIFORM_CLI: &str = "nutriform-cli";
