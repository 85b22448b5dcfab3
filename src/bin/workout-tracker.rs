// ABOUTME: Workout tracker CLI - prints a summary line per sensor package
// ABOUTME: Runs the built-in demo packages unless packages are given on the command line
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Summarize the three demo packages
//! workout-tracker
//!
//! # Summarize your own packages
//! workout-tracker --package RUN:15000,1,75 --package WLK:9000,1,75,180
//!
//! # JSON output with debug logging on stderr
//! workout-tracker --format json -v
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use workout_tracker::{
    config::TrackerConfig,
    formatters::{format_report, OutputFormat},
    intelligence::{demo_packages, SensorPackage},
};

#[derive(Debug, Parser)]
#[command(
    name = "workout-tracker",
    version,
    about = "Workout summary calculator",
    long_about = "Computes distance, mean speed, and calories for running (RUN), sports walking (WLK), and swimming (SWM) sensor packages."
)]
struct Cli {
    /// Sensor package as CODE:v1,v2,... (repeatable, defaults to the demo packages)
    #[arg(long = "package", short = 'p', value_name = "CODE:VALUES")]
    packages: Vec<SensorPackage>,

    /// Output format, overriding the environment setting
    #[arg(long, short = 'f', value_enum, ignore_case = true)]
    format: Option<OutputFormat>,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = TrackerConfig::from_env();
    if cli.verbose {
        config.logging = config.logging.with_level("debug");
    }
    if let Some(format) = cli.format {
        config.output_format = format;
    }
    config.logging.init()?;

    let packages = if cli.packages.is_empty() {
        demo_packages()
    } else {
        cli.packages
    };

    info!(
        packages = packages.len(),
        format = %config.output_format,
        environment = %config.environment,
        "Processing sensor packages"
    );

    for package in &packages {
        let report = package
            .summarize()
            .inspect_err(|e| {
                error!(
                    code = %e.code(),
                    description = e.code().description(),
                    "Sensor package rejected"
                );
            })
            .with_context(|| format!("Failed to summarize package {package}"))?;
        let output = format_report(&report, config.output_format)?;
        println!("{}", output.data);
    }

    Ok(())
}
