// ABOUTME: Unified error types for workout dispatch and calorie computation
// ABOUTME: Maps every failure to a stable ErrorCode for logs and JSON output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! Every failure in the tracker is a [`WorkoutError`]. Each variant carries a
//! stable [`ErrorCode`] so callers can match on the kind without parsing the
//! message text.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Result alias used across the workspace
pub type AppResult<T> = Result<T, WorkoutError>;

/// Standard error codes used throughout the tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Dispatch (1000-1999)
    /// Activity code outside the supported set
    #[serde(rename = "UNKNOWN_ACTIVITY_CODE")]
    UnknownActivityCode = 1000,
    /// Wrong number of positional sensor values
    #[serde(rename = "ARITY_MISMATCH")]
    ArityMismatch = 1001,

    // Validation (3000-3999)
    /// Duration is zero, negative, or not finite
    #[serde(rename = "INVALID_DURATION")]
    InvalidDuration = 3000,
    /// Sensor value cannot be bound to its field
    #[serde(rename = "INVALID_READING")]
    InvalidReading = 3001,

    // Computation (4000-4999)
    /// Calorie formula requested on the shared base record
    #[serde(rename = "CALORIE_FORMULA_NOT_IMPLEMENTED")]
    CalorieFormulaNotImplemented = 4000,
}

impl ErrorCode {
    /// Get a short user-facing description of this error kind
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::UnknownActivityCode => "Unknown activity code",
            Self::ArityMismatch => "Wrong number of sensor values for activity",
            Self::InvalidDuration => "Workout duration must be a positive number of hours",
            Self::InvalidReading => "Sensor reading is out of range",
            Self::CalorieFormulaNotImplemented => "No calorie formula for this training type",
        }
    }

    /// Get the serialized name of this code
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::UnknownActivityCode => "UNKNOWN_ACTIVITY_CODE",
            Self::ArityMismatch => "ARITY_MISMATCH",
            Self::InvalidDuration => "INVALID_DURATION",
            Self::InvalidReading => "INVALID_READING",
            Self::CalorieFormulaNotImplemented => "CALORIE_FORMULA_NOT_IMPLEMENTED",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised while reading sensor packages or computing summaries
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorkoutError {
    /// Dispatcher was given a code outside {SWM, RUN, WLK}
    #[error("Unknown activity code: '{0}'. Valid codes: SWM, RUN, WLK")]
    UnknownActivityCode(String),

    /// Positional values do not match the variant's parameter list
    #[error("Activity '{code}' expects {expected} values, got {actual}")]
    ArityMismatch {
        /// Activity code the values were supplied for
        code: String,
        /// Number of values the variant binds
        expected: usize,
        /// Number of values supplied
        actual: usize,
    },

    /// Calorie computation invoked on a record with no formula of its own
    #[error("Calorie formula is not implemented for '{training_type}'")]
    CalorieFormulaNotImplemented {
        /// Label of the training type
        training_type: &'static str,
    },

    /// Duration is zero, negative, or not finite
    #[error("Invalid duration: {0} hours")]
    InvalidDuration(f64),

    /// Value cannot be bound to the named field
    #[error("Invalid reading for {field}: {value} ({reason})")]
    InvalidReading {
        /// Field the value was bound to
        field: &'static str,
        /// Raw value as supplied
        value: f64,
        /// Why the value was rejected
        reason: &'static str,
    },
}

impl WorkoutError {
    /// Create an "unknown activity code" error
    #[must_use]
    pub fn unknown_code(code: impl Into<String>) -> Self {
        Self::UnknownActivityCode(code.into())
    }

    /// Create an "arity mismatch" error
    #[must_use]
    pub fn arity_mismatch(code: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::ArityMismatch {
            code: code.into(),
            expected,
            actual,
        }
    }

    /// Create an "invalid reading" error
    #[must_use]
    pub const fn invalid_reading(field: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidReading {
            field,
            value,
            reason,
        }
    }

    /// Get the stable error code for this error
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::UnknownActivityCode(_) => ErrorCode::UnknownActivityCode,
            Self::ArityMismatch { .. } => ErrorCode::ArityMismatch,
            Self::CalorieFormulaNotImplemented { .. } => ErrorCode::CalorieFormulaNotImplemented,
            Self::InvalidDuration(_) => ErrorCode::InvalidDuration,
            Self::InvalidReading { .. } => ErrorCode::InvalidReading,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_match_variants() {
        assert_eq!(
            WorkoutError::unknown_code("XYZ").code(),
            ErrorCode::UnknownActivityCode
        );
        assert_eq!(
            WorkoutError::arity_mismatch("RUN", 3, 2).code(),
            ErrorCode::ArityMismatch
        );
        assert_eq!(
            WorkoutError::InvalidDuration(0.0).code(),
            ErrorCode::InvalidDuration
        );
    }

    #[test]
    fn test_error_messages() {
        let err = WorkoutError::arity_mismatch("RUN", 3, 2);
        assert_eq!(err.to_string(), "Activity 'RUN' expects 3 values, got 2");

        let err = WorkoutError::unknown_code("XYZ");
        assert!(err.to_string().contains("'XYZ'"));
    }

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::ArityMismatch).unwrap();
        assert_eq!(json, "\"ARITY_MISMATCH\"");
        assert_eq!(ErrorCode::ArityMismatch.to_string(), "ARITY_MISMATCH");
    }
}
