// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Prescription defaults used when expanding presets into planned sets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

//! Constants module
//!
//! Values here describe what a freshly expanded, never-logged set looks like.

/// Prescription defaults applied during preset expansion
pub mod prescription {
    /// Baseline working weight (kg) for a weighted exercise with no history
    pub const BASELINE_WORKING_WEIGHT: f64 = 60.0;

    /// Weight removed per drop tier of a dropdown set (kg)
    pub const DROP_STEP: f64 = 2.5;

    /// Fraction of the working weight used for a warmup set
    pub const WARMUP_RATIO: f64 = 0.5;

    /// Default reps for every planned set
    pub const DEFAULT_REPS: u32 = 10;

    /// Set count used when a preset entry omits it (or gives zero)
    pub const DEFAULT_SET_COUNT: u32 = 3;

    /// `set_number` carried by warmup sets
    pub const WARMUP_SET_NUMBER: u32 = 0;
}

/// Item id prefixes for generated set items
pub mod id_prefix {
    /// Warmup set of a standalone entry
    pub const WARMUP: &str = "warmup";
    /// Warmup set of a superset member
    pub const SUPERSET_WARMUP: &str = "warmup-superset";
    /// Working set of a superset member
    pub const SUPERSET: &str = "superset";
    /// Dropdown set
    pub const DROPDOWN: &str = "dropdown";
    /// Working set of a standalone entry
    pub const SET: &str = "set";
    /// Ad hoc set appended to an existing exercise
    pub const EXTRA: &str = "extra";
    /// First set of an exercise added mid-workout
    pub const NEW: &str = "new";
}

/// Equipment label that marks an exercise as bodyweight-only
pub const BODYWEIGHT_EQUIPMENT: &str = "bodyweight";
