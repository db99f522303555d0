// ABOUTME: Active-workout module: controller, persisted pointer state, and sync planning
// ABOUTME: Applies user actions locally first, then mirrors completed sets to the session store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

//! # Active Workout
//!
//! - **active**: `ActiveWorkout`, the single owner of an in-progress session
//! - **persistence**: Pure planning of create/update/finish payloads
//! - **state**: The local pointer blob used to resume on this device

/// Active-workout controller
pub mod active;

/// Session write planning
pub mod persistence;

/// Local active-workout pointer
pub mod state;

pub use active::{ActiveWorkout, WorkoutStores};
pub use persistence::{
    finish_request, full_snapshot, plan_sync, unsaved_sets, SessionSnapshot, SyncRequest,
};
pub use state::ActiveWorkoutState;
