// ABOUTME: Core domain types and algorithms for the liftlog active-workout tracker
// ABOUTME: Set-item variants, preset expansion, resume reconciliation, and volume math
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

#![deny(unsafe_code)]

//! # Liftlog Core
//!
//! Pure, synchronous domain crate for tracking an in-progress strength workout.
//! Nothing in here performs I/O; the root `liftlog` crate wires these pieces to
//! remote stores.
//!
//! ## Modules
//!
//! - **models**: Exercises, presets, and persisted workout sessions (wire shapes)
//! - **`set_item`**: The four set variants (warmup, normal, bodyweight, dropdown)
//! - **expansion**: Turns a preset into an ordered list of planned sets
//! - **reconcile**: Overlays previously persisted sets onto a fresh expansion
//! - **calculations**: Volume totals, set counts, and view ordering
//! - **errors**: Store and application error types
//! - **constants**: Prescription defaults (baseline weight, drop step, reps)

/// Prescription defaults and wire-level constants
pub mod constants;

/// Store and application error types
pub mod errors;

/// Exercise catalog, preset, and workout session models
pub mod models;

/// Polymorphic set-item model
pub mod set_item;

/// Preset expansion into planned set items
pub mod expansion;

/// Resume reconciliation against persisted sets
pub mod reconcile;

/// Volume and set-count calculations
pub mod calculations;

pub use errors::{AppError, AppResult, ErrorCode, StoreError};
pub use expansion::{expand, extra_set_for, new_exercise_set};
pub use reconcile::reconcile;
pub use set_item::{
    DisplayFragment, DropTier, LastUsedData, PlainSetItem, SetForm, SetItem, SetKind, TierForm,
};
