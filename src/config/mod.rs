// ABOUTME: Configuration module for the workout tracker
// ABOUTME: Re-exports the environment-based configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment variable configuration
pub mod environment;

pub use environment::{Environment, TrackerConfig, OUTPUT_FORMAT_VAR};
