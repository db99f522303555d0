// ABOUTME: Data models for the exercise catalog, workout presets, and persisted sessions
// ABOUTME: Re-exports Exercise, WorkoutPreset, WorkoutSession and their wire records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

//! # Data Models
//!
//! Plain records exchanged with the REST backend. Field names follow the
//! backend's camelCase JSON so the same types serve as wire payloads.
//!
//! - `Exercise`: immutable catalog entry
//! - `WorkoutPreset`: user-authored template of exercises and sets
//! - `WorkoutSession`: persisted aggregate holding the logged `WorkoutSet`s

mod exercise;
mod preset;
mod workout;

pub use exercise::{Exercise, ExerciseCategory, MuscleGroup};
pub use preset::{
    DropdownEntry, PresetEntry, PresetStatus, StandaloneEntry, SupersetEntry, SupersetMember,
    WorkoutPreset, WorkoutTag,
};
pub use workout::{
    SetType, TierRecord, WorkoutSession, WorkoutSessionCreate, WorkoutSessionUpdate, WorkoutSet,
};
