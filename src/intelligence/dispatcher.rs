// ABOUTME: Reading dispatcher mapping an activity code and raw sensor values to a workout
// ABOUTME: Binds values by position, checks arity, and validates counts and measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Reading Dispatcher
//!
//! Sensors send a package made of a three-letter activity code and a flat list
//! of numbers. The dispatcher resolves the code against the closed
//! [`ActivityCode`] set, binds the values by position, and builds the
//! matching [`Workout`] variant.
//!
//! | Code | Variant         | Values                                                                |
//! |------|-----------------|-----------------------------------------------------------------------|
//! | SWM  | `Swimming`      | `action_count`, `duration_hours`, `weight_kg`, `pool_length_m`, `pool_laps` |
//! | RUN  | `Running`       | `action_count`, `duration_hours`, `weight_kg`                         |
//! | WLK  | `SportsWalking` | `action_count`, `duration_hours`, `weight_kg`, `height_cm`            |

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;
use workout_core::errors::{AppResult, WorkoutError};
use workout_core::models::{ActivityCode, SummaryReport};

use super::training::{Running, SportsWalking, Swimming, Training, Workout};

/// Build a workout from an activity code and positional sensor values
///
/// # Errors
///
/// - `WorkoutError::UnknownActivityCode` if `code` is not SWM, RUN or WLK
/// - `WorkoutError::ArityMismatch` if `values` has the wrong length for the code
/// - `WorkoutError::InvalidDuration` if the duration is not a positive finite number
/// - `WorkoutError::InvalidReading` if a count is negative or fractional, or a
///   measurement is not strictly positive
pub fn read_package(code: &str, values: &[f64]) -> AppResult<Workout> {
    let activity = code.parse::<ActivityCode>()?;
    debug!(code = %activity, values = values.len(), "Reading sensor package");

    let workout = match (activity, values) {
        (ActivityCode::Running, &[action, duration, weight]) => Running::new(
            count_value("action_count", action)?,
            duration_value(duration)?,
            positive_value("weight_kg", weight)?,
        )
        .into(),
        (ActivityCode::SportsWalking, &[action, duration, weight, height]) => SportsWalking::new(
            count_value("action_count", action)?,
            duration_value(duration)?,
            positive_value("weight_kg", weight)?,
            positive_value("height_cm", height)?,
        )
        .into(),
        (ActivityCode::Swimming, &[action, duration, weight, pool_length, pool_laps]) => {
            Swimming::new(
                count_value("action_count", action)?,
                duration_value(duration)?,
                positive_value("weight_kg", weight)?,
                positive_value("pool_length_m", pool_length)?,
                count_value("pool_laps", pool_laps)?,
            )
            .into()
        }
        (activity, values) => {
            return Err(WorkoutError::arity_mismatch(
                activity.as_str(),
                activity.arity(),
                values.len(),
            ));
        }
    };

    Ok(workout)
}

fn duration_value(value: f64) -> AppResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(WorkoutError::InvalidDuration(value))
    }
}

fn positive_value(field: &'static str, value: f64) -> AppResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(WorkoutError::invalid_reading(
            field,
            value,
            "must be a positive number",
        ))
    }
}

fn count_value(field: &'static str, value: f64) -> AppResult<u32> {
    if !value.is_finite() || value < 0.0 || value > f64::from(u32::MAX) {
        return Err(WorkoutError::invalid_reading(
            field,
            value,
            "must be a non-negative count",
        ));
    }
    if value.fract() != 0.0 {
        return Err(WorkoutError::invalid_reading(
            field,
            value,
            "must be a whole number",
        ));
    }
    Ok(value as u32)
}

/// Errors parsing a `CODE:v1,v2,...` package string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PackageParseError {
    /// No `:` between the code and the values
    #[error("Package '{0}' must look like CODE:v1,v2,...")]
    MissingSeparator(String),

    /// A value is not a number
    #[error("Value '{0}' is not a number")]
    InvalidNumber(String),
}

/// One sensor package: an activity code and its raw values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorPackage {
    /// Activity code as sent by the sensor
    pub code: String,
    /// Positional sensor values
    pub values: Vec<f64>,
}

impl SensorPackage {
    /// Create a package
    #[must_use]
    pub fn new(code: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            code: code.into(),
            values,
        }
    }

    /// Dispatch this package to a workout
    ///
    /// # Errors
    ///
    /// See [`read_package`].
    pub fn read(&self) -> AppResult<Workout> {
        read_package(&self.code, &self.values)
    }

    /// Dispatch this package and compute its summary
    ///
    /// # Errors
    ///
    /// Returns any dispatch error from [`read_package`].
    pub fn summarize(&self) -> AppResult<SummaryReport> {
        self.read()?.summary()
    }
}

impl FromStr for SensorPackage {
    type Err = PackageParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (code, raw_values) = s
            .split_once(':')
            .ok_or_else(|| PackageParseError::MissingSeparator(s.to_owned()))?;

        // A blank value list is an empty package; any other empty field is malformed
        if raw_values.trim().is_empty() {
            return Ok(Self::new(code.trim(), Vec::new()));
        }

        let values = raw_values
            .split(',')
            .map(str::trim)
            .map(|v| {
                v.parse::<f64>()
                    .map_err(|_| PackageParseError::InvalidNumber(v.to_owned()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(code.trim(), values))
    }
}

impl fmt::Display for SensorPackage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.code)?;
        for (index, value) in self.values.iter().enumerate() {
            if index > 0 {
                f.write_str(",")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

/// Sample packages processed when no input is given
#[must_use]
pub fn demo_packages() -> Vec<SensorPackage> {
    vec![
        SensorPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
        SensorPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Summarize packages in order, stopping at the first failure
///
/// # Errors
///
/// Returns the first error raised by [`SensorPackage::summarize`].
pub fn summarize_packages(packages: &[SensorPackage]) -> AppResult<Vec<SummaryReport>> {
    packages.iter().map(SensorPackage::summarize).collect()
}
