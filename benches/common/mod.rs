// ABOUTME: Common benchmark utilities for performance testing
// ABOUTME: Provides reusable measurement series generators for Criterion benchmarks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Common benchmark utilities.

pub mod fixtures;
