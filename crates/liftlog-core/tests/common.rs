// ABOUTME: Shared fixtures for liftlog-core integration tests
// ABOUTME: Small exercise catalog, preset builders, and fixed timestamps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

#![allow(
    dead_code,
    missing_docs,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::missing_panics_doc
)]

use chrono::{DateTime, TimeZone, Utc};
use liftlog_core::models::{Exercise, ExerciseCategory, SetType, WorkoutSet};

pub fn bench_press() -> Exercise {
    Exercise::new("ex1", "Bench Press", ExerciseCategory::Compound, &["barbell", "bench"])
}

pub fn lateral_raise() -> Exercise {
    Exercise::new("ex2", "Lateral Raise", ExerciseCategory::Isolation, &["dumbbell"])
}

pub fn pull_up() -> Exercise {
    let mut exercise = Exercise::new("pullup", "Pull-up", ExerciseCategory::Compound, &["pull-up bar"]);
    exercise.bodyweight = true;
    exercise
}

pub fn push_up() -> Exercise {
    Exercise::new("pushup", "Push-up", ExerciseCategory::Compound, &[])
}

pub fn catalog() -> Vec<Exercise> {
    vec![bench_press(), lateral_raise(), pull_up(), push_up()]
}

/// 2025-03-10 at `hour:minute` UTC
pub fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 10, hour, minute, 0).single().unwrap()
}

pub fn record(
    id: &str,
    exercise_id: &str,
    set_type: Option<SetType>,
    weight: Option<f64>,
    reps: u32,
    logged_at: Option<DateTime<Utc>>,
) -> WorkoutSet {
    WorkoutSet {
        id: id.to_owned(),
        exercise_id: exercise_id.to_owned(),
        set_type,
        weight,
        reps,
        dropdown_weights: None,
        logged_at,
    }
}
