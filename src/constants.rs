// ABOUTME: System-wide constants for the Bodylog server
// ABOUTME: Re-exports defaults, limits, environment variable names and unit factors from bodylog-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module

pub use bodylog_core::constants::*;
