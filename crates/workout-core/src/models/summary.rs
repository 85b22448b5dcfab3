// ABOUTME: Summary report value object for a single computed workout
// ABOUTME: Renders the fixed human-readable report line with three-decimal precision
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Computed result for one workout record
///
/// Built fresh by each `summary()` call and never mutated afterwards. Two
/// reports are equal when every field is equal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryReport {
    /// Canonical training type label (e.g. "Running")
    pub training_type: String,
    /// Workout duration in hours
    pub duration_hours: f64,
    /// Distance covered in kilometers
    pub distance_km: f64,
    /// Mean speed in km/h
    pub speed_kmh: f64,
    /// Energy spent in kcal
    pub calories_kcal: f64,
}

impl SummaryReport {
    /// Create a new report
    #[must_use]
    pub fn new(
        training_type: impl Into<String>,
        duration_hours: f64,
        distance_km: f64,
        speed_kmh: f64,
        calories_kcal: f64,
    ) -> Self {
        Self {
            training_type: training_type.into(),
            duration_hours,
            distance_km,
            speed_kmh,
            calories_kcal,
        }
    }

    /// Render the report line shown to the athlete
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SummaryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            self.training_type,
            self.duration_hours,
            self.distance_km,
            self.speed_kmh,
            self.calories_kcal
        )
    }
}
