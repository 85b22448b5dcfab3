// ABOUTME: Environment-based configuration for the workout tracker
// ABOUTME: Loads runtime environment, output format, and logging settings from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-only configuration
//!
//! There are no config files. Every setting comes from an environment variable
//! with a sensible default, and the CLI can override the result.

use std::env;
use std::fmt;

use crate::formatters::OutputFormat;
use crate::logging::LoggingConfig;

/// Environment variable selecting the report output format
pub const OUTPUT_FORMAT_VAR: &str = "WORKOUT_OUTPUT_FORMAT";

/// Runtime environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production
    Production,
    /// Test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Tracker configuration assembled from the environment
#[derive(Debug, Clone, Default)]
pub struct TrackerConfig {
    /// Runtime environment
    pub environment: Environment,
    /// Report output format
    pub output_format: OutputFormat,
    /// Logging settings
    pub logging: LoggingConfig,
}

impl TrackerConfig {
    /// Load configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let environment = env::var("ENVIRONMENT")
            .map_or_else(|_| Environment::default(), |e| Environment::from_str_or_default(&e));

        let output_format = env::var(OUTPUT_FORMAT_VAR)
            .map_or_else(|_| OutputFormat::default(), |f| OutputFormat::from_str_param(&f));

        Self {
            environment,
            output_format,
            logging: LoggingConfig::from_env(),
        }
    }
}
