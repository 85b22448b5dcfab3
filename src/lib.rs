// ABOUTME: Main library entry point for the workout tracker
// ABOUTME: Computes distance, mean speed, and calories from raw workout sensor packages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Workout Tracker
//!
//! Computes workout summaries from raw sensor packages for three activity
//! types: running (`RUN`), sports walking (`WLK`), and pool swimming (`SWM`).
//!
//! ## Architecture
//!
//! - **Intelligence**: per-activity formulas and the package dispatcher
//! - **Formatters**: report line and JSON rendering
//! - **Config / Logging**: environment-driven settings and tracing setup
//!
//! ## Example
//!
//! ```rust
//! use workout_tracker::intelligence::{read_package, Training};
//!
//! # fn main() -> Result<(), workout_tracker::errors::WorkoutError> {
//! let workout = read_package("RUN", &[15000.0, 1.0, 75.0])?;
//! let report = workout.summary()?;
//! assert_eq!(report.training_type, "Running");
//! # Ok(())
//! # }
//! ```

/// Workout formulas and sensor package dispatch
pub mod intelligence;

/// Output formats for summary reports
pub mod formatters;

/// Environment-based configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Error types re-exported from `workout-core`
pub use workout_core::errors;

/// Data models re-exported from `workout-core`
pub use workout_core::models;

/// Constants re-exported from `workout-core`
pub use workout_core::constants;
