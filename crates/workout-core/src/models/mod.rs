// ABOUTME: Core data models shared by the dispatcher and the report formatters
// ABOUTME: Re-exports activity codes and the summary report value object
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Three-letter activity codes selecting a formula set
pub mod activity_code;

/// Summary report produced for one workout record
pub mod summary;

pub use activity_code::ActivityCode;
pub use summary::SummaryReport;
