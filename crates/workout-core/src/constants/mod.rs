// ABOUTME: Unit conversion factors and per-activity formula coefficients
// ABOUTME: Named constants so the calorie formulas carry no magic numbers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants grouped by domain.

/// Unit conversion constants
pub mod units {
    /// Meters per kilometer conversion factor
    pub const METERS_PER_KM: f64 = 1000.0;

    /// Minutes per hour
    pub const MINUTES_PER_HOUR: f64 = 60.0;
}

/// Distance covered by one action unit, in meters
pub mod step_length {
    /// One running or walking step
    pub const STEP_M: f64 = 0.65;

    /// One swimming stroke
    pub const STROKE_M: f64 = 1.38;
}

/// Running calorie coefficients
pub mod running {
    /// Speed multiplier
    pub const SPEED_MULTIPLIER: f64 = 18.0;

    /// Speed offset subtracted after the multiplier
    pub const SPEED_SHIFT: f64 = 20.0;
}

/// Sports walking calorie coefficients
pub mod walking {
    /// Weight coefficient of the base term
    pub const WEIGHT_MULTIPLIER: f64 = 0.035;

    /// Weight coefficient of the speed/height term
    pub const SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
}

/// Swimming calorie coefficients
pub mod swimming {
    /// Offset added to mean speed
    pub const SPEED_SHIFT: f64 = 1.1;

    /// Weight multiplier
    pub const WEIGHT_MULTIPLIER: f64 = 2.0;
}

/// Canonical training type labels used in reports
pub mod training_types {
    /// Shared base record
    pub const TRAINING: &str = "Training";

    /// Running
    pub const RUNNING: &str = "Running";

    /// Sports (race) walking
    pub const SPORTS_WALKING: &str = "SportsWalking";

    /// Pool swimming
    pub const SWIMMING: &str = "Swimming";
}
