// ABOUTME: Async store ports consumed by the active-workout controller
// ABOUTME: Exercise catalog, workout sessions, last-used values, and the active-workout pointer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

//! # Stores
//!
//! The controller only talks to these traits. Three adapter families are
//! provided: in-memory (tests and offline use), HTTP (the REST backend), and
//! file (the local active-workout pointer).

/// JSON file adapter for the active-workout pointer
pub mod file;

/// REST backend adapter
pub mod http;

/// In-memory adapters
pub mod memory;

use crate::workout::ActiveWorkoutState;
use async_trait::async_trait;
use liftlog_core::errors::StoreResult;
use liftlog_core::models::{Exercise, WorkoutSession, WorkoutSessionCreate, WorkoutSessionUpdate};
use liftlog_core::LastUsedData;
use serde::{Deserialize, Serialize};

pub use file::FileStateStore;
pub use http::HttpApiClient;
pub use memory::{
    InMemoryLastUsedStore, InMemorySessionStore, InMemoryStateStore, SessionCall, StaticCatalog,
};

/// Result of deleting a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeleteOutcome {
    /// The session existed and was removed
    Deleted,
    /// There was nothing to delete
    NotFound,
}

/// Read-only exercise catalog
#[async_trait]
pub trait ExerciseCatalog: Send + Sync {
    /// Every exercise known to the catalog
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be read
    async fn all_exercises(&self) -> StoreResult<Vec<Exercise>>;
}

/// Remote workout session aggregate
///
/// `update_session` replaces the stored set list as a whole.
#[async_trait]
pub trait WorkoutSessionStore: Send + Sync {
    /// Fetch a session by id
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the session does not exist
    async fn get_session(&self, id: &str) -> StoreResult<WorkoutSession>;

    /// Create a session; the store assigns its id
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the write
    async fn create_session(&self, payload: &WorkoutSessionCreate) -> StoreResult<WorkoutSession>;

    /// Overwrite a session's sets and optionally stamp its end time
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the session does not exist
    async fn update_session(
        &self,
        id: &str,
        payload: &WorkoutSessionUpdate,
    ) -> StoreResult<WorkoutSession>;

    /// Delete a session
    ///
    /// # Errors
    ///
    /// Returns an error for failures other than the session being absent
    async fn delete_session(&self, id: &str) -> StoreResult<DeleteOutcome>;
}

/// Per-exercise last-used values shared across devices
#[async_trait]
pub trait LastUsedStore: Send + Sync {
    /// Remember the values last used for an exercise
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the write
    async fn set_last_used(&self, exercise_id: &str, data: &LastUsedData) -> StoreResult<()>;
}

/// Single-record pointer to the workout in progress on this device
#[async_trait]
pub trait ActiveStateStore: Send + Sync {
    /// Replace the stored state
    ///
    /// # Errors
    ///
    /// Returns an error if the state cannot be written
    async fn save(&self, state: &ActiveWorkoutState) -> StoreResult<()>;

    /// Load the stored state; unreadable state is reported as absent
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage cannot be reached
    async fn load(&self) -> StoreResult<Option<ActiveWorkoutState>>;

    /// Remove the stored state
    ///
    /// # Errors
    ///
    /// Returns an error if the state cannot be removed
    async fn clear(&self) -> StoreResult<()>;
}
