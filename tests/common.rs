// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, a small catalog, presets, and in-memory store wiring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors
#![allow(
    dead_code,
    missing_docs,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `liftlog`

use chrono::{DateTime, TimeZone, Utc};
use liftlog::models::{Exercise, ExerciseCategory, PresetEntry, StandaloneEntry, WorkoutPreset};
use liftlog::stores::{InMemoryLastUsedStore, InMemorySessionStore, InMemoryStateStore};
use liftlog::workout::WorkoutStores;
use std::env;
use std::sync::{Arc, Once};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

pub fn bench_press() -> Exercise {
    Exercise::new("ex1", "Bench Press", ExerciseCategory::Compound, &["barbell", "bench"])
}

pub fn lateral_raise() -> Exercise {
    Exercise::new("ex2", "Lateral Raise", ExerciseCategory::Isolation, &["dumbbell"])
}

pub fn catalog() -> Vec<Exercise> {
    vec![bench_press(), lateral_raise()]
}

/// Bench press with a warmup and three working sets, then two lateral raise sets
pub fn upper_body() -> WorkoutPreset {
    WorkoutPreset::new("p1", "Upper Body Day 1")
        .with_entry(PresetEntry::Normal(
            StandaloneEntry::new("e1", "ex1", 3).with_warmup(),
        ))
        .with_entry(PresetEntry::Normal(StandaloneEntry::new("e2", "ex2", 2)))
}

/// 2025-03-10 at `hour:minute` UTC
pub fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 10, hour, minute, 0)
        .single()
        .unwrap()
}

/// In-memory stores with handles kept for inspection
#[derive(Clone, Default)]
pub struct TestStores {
    pub sessions: InMemorySessionStore,
    pub last_used: InMemoryLastUsedStore,
    pub state: InMemoryStateStore,
}

impl TestStores {
    pub fn new() -> Self {
        init_test_logging();
        Self::default()
    }

    pub fn workout_stores(&self) -> WorkoutStores {
        WorkoutStores {
            sessions: Arc::new(self.sessions.clone()),
            last_used: Arc::new(self.last_used.clone()),
            state: Arc::new(self.state.clone()),
        }
    }
}
