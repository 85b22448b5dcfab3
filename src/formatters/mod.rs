// ABOUTME: Output format abstraction for rendering workout summary reports
// ABOUTME: Supports the human-readable report line (default) and JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output Format Abstraction Layer
//!
//! Summary reports are rendered either as the fixed report line shown to the
//! athlete or as JSON for downstream tooling.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use workout_tracker::formatters::{format_report, OutputFormat};
//! use workout_tracker::intelligence::{read_package, Training};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let report = read_package("RUN", &[15000.0, 1.0, 75.0])?.summary()?;
//! let output = format_report(&report, OutputFormat::Text)?;
//! println!("{}", output.data);
//! # Ok(())
//! # }
//! ```

use clap::ValueEnum;
use serde::Serialize;
use std::fmt;
use workout_core::models::SummaryReport;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Report line (default)
    #[default]
    Text,
    /// JSON object per report
    Json,
}

impl OutputFormat {
    /// Parse format from string parameter (case-insensitive)
    /// Returns `Text` for unrecognized values
    #[must_use]
    pub fn from_str_param(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    /// Get the MIME content type for this format
    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        match self {
            Self::Text => "text/plain; charset=utf-8",
            Self::Json => "application/json",
        }
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Formatted output containing the rendered data and metadata
#[derive(Debug, Clone)]
pub struct FormattedOutput {
    /// The rendered data as a string
    pub data: String,
    /// The format used for rendering
    pub format: OutputFormat,
    /// The MIME content type
    pub content_type: &'static str,
}

/// Error type for formatting operations
#[derive(Debug, Clone)]
pub struct FormatError {
    /// Error message describing what went wrong
    pub message: String,
    /// The format that was being used when the error occurred
    pub format: OutputFormat,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Format error ({}): {}", self.format, self.message)
    }
}

impl std::error::Error for FormatError {}

fn to_json<T: Serialize + ?Sized>(data: &T, format: OutputFormat) -> Result<String, FormatError> {
    serde_json::to_string(data).map_err(|e| FormatError {
        message: e.to_string(),
        format,
    })
}

/// Render one summary report in the requested format
///
/// # Errors
///
/// Returns `FormatError` if JSON serialization fails.
pub fn format_report(
    report: &SummaryReport,
    format: OutputFormat,
) -> Result<FormattedOutput, FormatError> {
    let data = match format {
        OutputFormat::Text => report.message(),
        OutputFormat::Json => to_json(report, format)?,
    };

    Ok(FormattedOutput {
        data,
        format,
        content_type: format.content_type(),
    })
}

/// Render a batch of reports
///
/// Text output puts one report line per row. JSON output is a single array.
///
/// # Errors
///
/// Returns `FormatError` if JSON serialization fails.
pub fn format_reports(
    reports: &[SummaryReport],
    format: OutputFormat,
) -> Result<FormattedOutput, FormatError> {
    let data = match format {
        OutputFormat::Text => reports
            .iter()
            .map(SummaryReport::message)
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Json => to_json(reports, format)?,
    };

    Ok(FormattedOutput {
        data,
        format,
        content_type: format.content_type(),
    })
}
