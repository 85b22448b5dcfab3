// ABOUTME: Activity code enumeration for incoming sensor packages
// ABOUTME: Closed set of SWM, RUN, and WLK with parsing, arity, and labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::training_types;
use crate::errors::WorkoutError;

/// Activity code attached to a sensor package
///
/// Codes are matched exactly as the sensors send them, so `"run"` is not a
/// valid spelling of `"RUN"`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ActivityCode {
    /// Pool swimming (`SWM`)
    #[serde(rename = "SWM")]
    Swimming,
    /// Running (`RUN`)
    #[serde(rename = "RUN")]
    Running,
    /// Sports walking (`WLK`)
    #[serde(rename = "WLK")]
    SportsWalking,
}

impl ActivityCode {
    /// All supported codes in sensor order
    pub const ALL: [Self; 3] = [Self::Swimming, Self::Running, Self::SportsWalking];

    /// Get the wire spelling of this code
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Swimming => "SWM",
            Self::Running => "RUN",
            Self::SportsWalking => "WLK",
        }
    }

    /// Number of positional values the matching variant binds
    #[must_use]
    pub const fn arity(&self) -> usize {
        match self {
            Self::Running => 3,
            Self::SportsWalking => 4,
            Self::Swimming => 5,
        }
    }

    /// Canonical training type label used in reports
    #[must_use]
    pub const fn training_type(&self) -> &'static str {
        match self {
            Self::Swimming => training_types::SWIMMING,
            Self::Running => training_types::RUNNING,
            Self::SportsWalking => training_types::SPORTS_WALKING,
        }
    }
}

impl FromStr for ActivityCode {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SWM" => Ok(Self::Swimming),
            "RUN" => Ok(Self::Running),
            "WLK" => Ok(Self::SportsWalking),
            other => Err(WorkoutError::unknown_code(other)),
        }
    }
}

impl fmt::Display for ActivityCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
