// ABOUTME: Workout records and their distance, speed, and calorie formulas
// ABOUTME: Training trait holds the shared contract; Workout enum dispatches over variants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Training Formulas
//!
//! Each workout variant is a plain record implementing [`Training`]. The
//! trait's default methods carry the shared base behavior:
//!
//! - `distance_km = action_count x step_length / 1000`
//! - `mean_speed_kmh = distance_km / duration_hours`
//! - `spent_calories` fails with `CalorieFormulaNotImplemented`
//!
//! Variants override what differs. [`Workout`] is the closed tagged union the
//! dispatcher returns.
//!
//! Duration is not checked here. A zero duration yields an infinite or NaN
//! speed following IEEE-754; validate before constructing (the dispatcher
//! does).

use tracing::debug;
use workout_core::constants::{
    running, step_length, swimming, training_types,
    units::{METERS_PER_KM, MINUTES_PER_HOUR},
    walking,
};
use workout_core::errors::{AppResult, WorkoutError};
use workout_core::models::{ActivityCode, SummaryReport};

/// Shared capability set of every workout record
pub trait Training {
    /// Fields common to every variant
    fn base(&self) -> &TrainingBase;

    /// Canonical label used in the summary report
    fn training_type(&self) -> &'static str;

    /// Distance covered by one action unit, in meters
    fn step_length_m(&self) -> f64 {
        step_length::STEP_M
    }

    /// Distance covered in kilometers
    fn distance_km(&self) -> f64 {
        f64::from(self.base().action_count) * self.step_length_m() / METERS_PER_KM
    }

    /// Mean speed in km/h
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.base().duration_hours
    }

    /// Energy spent in kcal
    ///
    /// # Errors
    ///
    /// The default implementation always returns
    /// `WorkoutError::CalorieFormulaNotImplemented`; only concrete variants
    /// know their formula.
    fn spent_calories(&self) -> AppResult<f64> {
        Err(WorkoutError::CalorieFormulaNotImplemented {
            training_type: self.training_type(),
        })
    }

    /// Assemble the summary report for this record
    ///
    /// # Errors
    ///
    /// Propagates the error from [`Training::spent_calories`].
    fn summary(&self) -> AppResult<SummaryReport> {
        let report = SummaryReport::new(
            self.training_type(),
            self.base().duration_hours,
            self.distance_km(),
            self.mean_speed_kmh(),
            self.spent_calories()?,
        );
        debug!(
            training_type = %report.training_type,
            distance_km = report.distance_km,
            speed_kmh = report.speed_kmh,
            calories_kcal = report.calories_kcal,
            "Computed workout summary"
        );
        Ok(report)
    }
}

/// Fields shared by all workout records
///
/// On its own this is the abstract base: it reports distance and speed but
/// has no calorie formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingBase {
    /// Discrete motion units recorded by the sensor (steps or strokes)
    pub action_count: u32,
    /// Workout duration in hours
    pub duration_hours: f64,
    /// Athlete weight in kilograms
    pub weight_kg: f64,
}

impl TrainingBase {
    /// Create a base record
    #[must_use]
    pub const fn new(action_count: u32, duration_hours: f64, weight_kg: f64) -> Self {
        Self {
            action_count,
            duration_hours,
            weight_kg,
        }
    }
}

impl Training for TrainingBase {
    fn base(&self) -> &TrainingBase {
        self
    }

    fn training_type(&self) -> &'static str {
        training_types::TRAINING
    }
}

/// Running workout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    base: TrainingBase,
}

impl Running {
    /// Create a running record
    #[must_use]
    pub const fn new(action_count: u32, duration_hours: f64, weight_kg: f64) -> Self {
        Self {
            base: TrainingBase::new(action_count, duration_hours, weight_kg),
        }
    }
}

impl Training for Running {
    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn training_type(&self) -> &'static str {
        training_types::RUNNING
    }

    #[allow(clippy::suboptimal_flops)]
    fn spent_calories(&self) -> AppResult<f64> {
        let speed = self.mean_speed_kmh();
        Ok(
            (running::SPEED_MULTIPLIER * speed - running::SPEED_SHIFT) * self.base.weight_kg
                / METERS_PER_KM
                * self.base.duration_hours
                * MINUTES_PER_HOUR,
        )
    }
}

/// Sports (race) walking workout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SportsWalking {
    base: TrainingBase,
    height_cm: f64,
}

impl SportsWalking {
    /// Create a sports walking record
    #[must_use]
    pub const fn new(
        action_count: u32,
        duration_hours: f64,
        weight_kg: f64,
        height_cm: f64,
    ) -> Self {
        Self {
            base: TrainingBase::new(action_count, duration_hours, weight_kg),
            height_cm,
        }
    }

    /// Athlete height in centimeters
    #[must_use]
    pub const fn height_cm(&self) -> f64 {
        self.height_cm
    }
}

impl Training for SportsWalking {
    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn training_type(&self) -> &'static str {
        training_types::SPORTS_WALKING
    }

    /// The speed/height term is floor-divided.
    ///
    /// For typical walking speeds it is zero, so only the weight term
    /// contributes. Keep the floor; true division changes the result.
    #[allow(clippy::suboptimal_flops)]
    fn spent_calories(&self) -> AppResult<f64> {
        let speed = self.mean_speed_kmh();
        let speed_height_term = floor_div(speed * speed, self.height_cm);
        Ok((walking::WEIGHT_MULTIPLIER * self.base.weight_kg
            + speed_height_term * walking::SPEED_HEIGHT_MULTIPLIER * self.base.weight_kg)
            * self.base.duration_hours
            * MINUTES_PER_HOUR)
    }
}

/// Floored quotient of `dividend / divisor`
///
/// Derived from the remainder rather than from `(dividend / divisor).floor()`,
/// which rounds up when the true quotient sits just below a whole number.
fn floor_div(dividend: f64, divisor: f64) -> f64 {
    let remainder = dividend % divisor;
    let mut quotient = (dividend - remainder) / divisor;
    if remainder != 0.0 && (divisor < 0.0) != (remainder < 0.0) {
        quotient -= 1.0;
    }
    if quotient == 0.0 {
        return 0.0_f64.copysign(dividend / divisor);
    }
    let floored = quotient.floor();
    if quotient - floored > 0.5 {
        floored + 1.0
    } else {
        floored
    }
}

/// Pool swimming workout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    base: TrainingBase,
    pool_length_m: f64,
    pool_laps: u32,
}

impl Swimming {
    /// Create a swimming record
    #[must_use]
    pub const fn new(
        action_count: u32,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_laps: u32,
    ) -> Self {
        Self {
            base: TrainingBase::new(action_count, duration_hours, weight_kg),
            pool_length_m,
            pool_laps,
        }
    }

    /// Pool length in meters
    #[must_use]
    pub const fn pool_length_m(&self) -> f64 {
        self.pool_length_m
    }

    /// Number of pool laps swum
    #[must_use]
    pub const fn pool_laps(&self) -> u32 {
        self.pool_laps
    }
}

impl Training for Swimming {
    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn training_type(&self) -> &'static str {
        training_types::SWIMMING
    }

    fn step_length_m(&self) -> f64 {
        step_length::STROKE_M
    }

    // Pool geometry, not stroke count
    fn mean_speed_kmh(&self) -> f64 {
        self.pool_length_m * f64::from(self.pool_laps) / METERS_PER_KM / self.base.duration_hours
    }

    fn spent_calories(&self) -> AppResult<f64> {
        Ok(
            (self.mean_speed_kmh() + swimming::SPEED_SHIFT)
                * swimming::WEIGHT_MULTIPLIER
                * self.base.weight_kg,
        )
    }
}

/// Workout record of one of the supported activity types
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Workout {
    /// Running (`RUN`)
    Running(Running),
    /// Sports walking (`WLK`)
    SportsWalking(SportsWalking),
    /// Pool swimming (`SWM`)
    Swimming(Swimming),
}

impl Workout {
    /// Activity code this workout is read from
    #[must_use]
    pub const fn code(&self) -> ActivityCode {
        match self {
            Self::Running(_) => ActivityCode::Running,
            Self::SportsWalking(_) => ActivityCode::SportsWalking,
            Self::Swimming(_) => ActivityCode::Swimming,
        }
    }

    fn as_training(&self) -> &dyn Training {
        match self {
            Self::Running(workout) => workout,
            Self::SportsWalking(workout) => workout,
            Self::Swimming(workout) => workout,
        }
    }
}

impl Training for Workout {
    fn base(&self) -> &TrainingBase {
        self.as_training().base()
    }

    fn training_type(&self) -> &'static str {
        self.as_training().training_type()
    }

    fn step_length_m(&self) -> f64 {
        self.as_training().step_length_m()
    }

    fn distance_km(&self) -> f64 {
        self.as_training().distance_km()
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.as_training().mean_speed_kmh()
    }

    fn spent_calories(&self) -> AppResult<f64> {
        self.as_training().spent_calories()
    }
}

impl From<Running> for Workout {
    fn from(workout: Running) -> Self {
        Self::Running(workout)
    }
}

impl From<SportsWalking> for Workout {
    fn from(workout: SportsWalking) -> Self {
        Self::SportsWalking(workout)
    }
}

impl From<Swimming> for Workout {
    fn from(workout: Swimming) -> Self {
        Self::Swimming(workout)
    }
}
