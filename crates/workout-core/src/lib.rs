// ABOUTME: Core types and constants for the workout tracker
// ABOUTME: Foundation crate with error handling, formula constants, and report models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Workout Core
//!
//! Foundation crate providing the shared types and constants used by the
//! workout tracker. It changes rarely, so the calculation crate on top of it
//! recompiles on its own.
//!
//! ## Modules
//!
//! - **errors**: `WorkoutError`, `ErrorCode`, and the `AppResult` alias
//! - **constants**: Unit conversions and the per-activity calorie coefficients
//! - **models**: Activity codes and the `SummaryReport` value object

/// Unified error handling with stable error codes
pub mod errors;

/// Unit conversion factors and calorie formula coefficients
pub mod constants;

/// Activity codes and summary report models
pub mod models;
