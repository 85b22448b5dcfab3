// ABOUTME: Integration tests for the sensor package dispatcher
// ABOUTME: Tests code resolution, positional binding, arity checks, and reading validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use workout_tracker::errors::{ErrorCode, WorkoutError};
use workout_tracker::intelligence::{
    demo_packages, read_package, summarize_packages, PackageParseError, SensorPackage, Training,
    Workout,
};
use workout_tracker::models::ActivityCode;

// === Code resolution ===

#[test]
fn test_each_code_builds_its_variant() {
    assert!(matches!(
        read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap(),
        Workout::Running(_)
    ));
    assert!(matches!(
        read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap(),
        Workout::SportsWalking(_)
    ));
    assert!(matches!(
        read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap(),
        Workout::Swimming(_)
    ));
}

#[test]
fn test_unknown_code_is_rejected() {
    let err = read_package("XYZ", &[1.0, 1.0, 1.0]).unwrap_err();
    assert_eq!(err, WorkoutError::UnknownActivityCode("XYZ".to_owned()));
    assert_eq!(err.code(), ErrorCode::UnknownActivityCode);
}

#[test]
fn test_unknown_code_wins_over_arity() {
    let err = read_package("BIKE", &[]).unwrap_err();
    assert_eq!(err.code(), ErrorCode::UnknownActivityCode);
}

#[test]
fn test_codes_are_case_sensitive() {
    let err = read_package("run", &[15000.0, 1.0, 75.0]).unwrap_err();
    assert_eq!(err.code(), ErrorCode::UnknownActivityCode);
}

// === Arity ===

#[test]
fn test_too_few_values() {
    let err = read_package("RUN", &[15000.0, 1.0]).unwrap_err();
    assert_eq!(err, WorkoutError::arity_mismatch("RUN", 3, 2));
}

#[test]
fn test_too_many_values() {
    let err = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0, 1.0]).unwrap_err();
    assert_eq!(err, WorkoutError::arity_mismatch("WLK", 4, 5));
}

#[test]
fn test_arity_matches_activity_code() {
    for code in ActivityCode::ALL {
        let values = vec![1.0; code.arity()];
        assert!(read_package(code.as_str(), &values).is_ok(), "{code}");

        let short = vec![1.0; code.arity() - 1];
        let err = read_package(code.as_str(), &short).unwrap_err();
        assert_eq!(err.code(), ErrorCode::ArityMismatch);
    }
}

// === Positional binding ===

#[test]
fn test_values_bind_by_position() {
    let workout = read_package("SWM", &[720.0, 2.0, 80.0, 50.0, 20.0]).unwrap();
    let Workout::Swimming(swimming) = workout else {
        panic!("expected swimming, got {workout:?}");
    };

    assert_eq!(swimming.base().action_count, 720);
    assert!((swimming.base().duration_hours - 2.0).abs() < f64::EPSILON);
    assert!((swimming.base().weight_kg - 80.0).abs() < f64::EPSILON);
    assert!((swimming.pool_length_m() - 50.0).abs() < f64::EPSILON);
    assert_eq!(swimming.pool_laps(), 20);
}

// === Validation ===

#[test]
fn test_zero_duration_is_rejected() {
    let err = read_package("RUN", &[15000.0, 0.0, 75.0]).unwrap_err();
    assert_eq!(err, WorkoutError::InvalidDuration(0.0));
}

#[test]
fn test_negative_and_nan_duration_are_rejected() {
    for duration in [-1.0, f64::NAN, f64::INFINITY] {
        let err = read_package("RUN", &[15000.0, duration, 75.0]).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidDuration);
    }
}

#[test]
fn test_fractional_count_is_rejected() {
    let err = read_package("RUN", &[150.5, 1.0, 75.0]).unwrap_err();
    assert!(matches!(
        err,
        WorkoutError::InvalidReading {
            field: "action_count",
            ..
        }
    ));
}

#[test]
fn test_negative_count_is_rejected() {
    let err = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, -1.0]).unwrap_err();
    assert!(matches!(
        err,
        WorkoutError::InvalidReading {
            field: "pool_laps",
            ..
        }
    ));
}

#[test]
fn test_non_positive_measurements_are_rejected() {
    let err = read_package("WLK", &[9000.0, 1.0, 75.0, 0.0]).unwrap_err();
    assert!(matches!(
        err,
        WorkoutError::InvalidReading {
            field: "height_cm",
            ..
        }
    ));

    let err = read_package("SWM", &[720.0, 1.0, 80.0, -25.0, 40.0]).unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidReading);

    let err = read_package("RUN", &[15000.0, 1.0, 0.0]).unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidReading);
}

#[test]
fn test_zero_counts_are_valid() {
    let report = read_package("SWM", &[0.0, 1.0, 80.0, 25.0, 0.0])
        .unwrap()
        .summary()
        .unwrap();

    assert!(report.distance_km.abs() < f64::EPSILON);
    assert!(report.speed_kmh.abs() < f64::EPSILON);
    // (0 + 1.1) * 2 * 80
    assert!((report.calories_kcal - 176.0).abs() < 1e-9);
}

// === Sensor packages ===

#[test]
fn test_parse_package() {
    let package: SensorPackage = "RUN:15000,1,75".parse().unwrap();
    assert_eq!(package, SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]));
    assert_eq!(package.to_string(), "RUN:15000,1,75");
}

#[test]
fn test_parse_package_trims_whitespace() {
    let package: SensorPackage = " WLK : 9000, 1, 75, 180 ".parse().unwrap();
    assert_eq!(package.code, "WLK");
    assert_eq!(package.values, vec![9000.0, 1.0, 75.0, 180.0]);
}

#[test]
fn test_parse_package_errors() {
    assert_eq!(
        "RUN".parse::<SensorPackage>().unwrap_err(),
        PackageParseError::MissingSeparator("RUN".to_owned())
    );
    assert_eq!(
        "RUN:1,abc,3".parse::<SensorPackage>().unwrap_err(),
        PackageParseError::InvalidNumber("abc".to_owned())
    );
}

#[test]
fn test_parse_package_rejects_empty_fields() {
    // An empty slot must not shift later values into earlier positions
    for raw in ["WLK:9000,,1,75,180", "RUN:15000,1,75,", "RUN:,15000,1,75", "RUN: , "] {
        assert_eq!(
            raw.parse::<SensorPackage>().unwrap_err(),
            PackageParseError::InvalidNumber(String::new()),
            "{raw}"
        );
    }
}

#[test]
fn test_blank_value_list_is_empty_package() {
    let package: SensorPackage = "RUN:  ".parse().unwrap();
    assert!(package.values.is_empty());
}

#[test]
fn test_empty_package_reports_arity() {
    let package: SensorPackage = "RUN:".parse().unwrap();
    let err = package.read().unwrap_err();
    assert_eq!(err, WorkoutError::arity_mismatch("RUN", 3, 0));
}

#[test]
fn test_demo_packages_summarize() {
    let reports = summarize_packages(&demo_packages()).unwrap();

    let labels: Vec<&str> = reports.iter().map(|r| r.training_type.as_str()).collect();
    assert_eq!(labels, ["Swimming", "Running", "SportsWalking"]);
}

#[test]
fn test_summarize_stops_at_first_error() {
    let packages = vec![
        SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
        SensorPackage::new("XYZ", vec![1.0]),
        SensorPackage::new("RUN", vec![15000.0]),
    ];

    let err = summarize_packages(&packages).unwrap_err();
    assert_eq!(err.code(), ErrorCode::UnknownActivityCode);
}

#[test]
fn test_well_formed_packages_never_fail() {
    let packages = [
        SensorPackage::new("RUN", vec![1.0, 0.01, 40.0]),
        SensorPackage::new("RUN", vec![50_000.0, 5.0, 120.0]),
        SensorPackage::new("WLK", vec![1.0, 0.5, 50.0, 150.0]),
        SensorPackage::new("WLK", vec![120_000.0, 3.0, 90.0, 200.0]),
        SensorPackage::new("SWM", vec![1.0, 0.25, 60.0, 25.0, 1.0]),
        SensorPackage::new("SWM", vec![5_000.0, 2.0, 95.0, 50.0, 160.0]),
    ];

    for package in &packages {
        let report = package.summarize().unwrap();
        assert!(report.calories_kcal.is_finite(), "{package}");
        assert!(report.speed_kmh.is_finite(), "{package}");
    }
}
