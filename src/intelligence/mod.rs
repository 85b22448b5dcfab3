// ABOUTME: Intelligence module for workout summary calculations
// ABOUTME: Hosts the training formulas and the sensor package dispatcher
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Turns raw sensor packages into workout records and computes distance,
//! mean speed, and calories for each supported activity type.

/// Training records and per-activity formulas
pub mod training;

/// Activity code dispatch from raw sensor values
pub mod dispatcher;

pub use dispatcher::{
    demo_packages, read_package, summarize_packages, PackageParseError, SensorPackage,
};
pub use training::{Running, SportsWalking, Swimming, Training, TrainingBase, Workout};
