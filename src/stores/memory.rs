// ABOUTME: In-memory store adapters for tests and offline use
// ABOUTME: Session store records every call and can be told to fail the next writes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

use super::{ActiveStateStore, DeleteOutcome, ExerciseCatalog, LastUsedStore, WorkoutSessionStore};
use crate::workout::ActiveWorkoutState;
use async_trait::async_trait;
use liftlog_core::errors::{StoreError, StoreResult};
use liftlog_core::models::{Exercise, WorkoutSession, WorkoutSessionCreate, WorkoutSessionUpdate};
use liftlog_core::LastUsedData;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

const SESSION: &str = "session";

/// Fixed exercise list
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    exercises: Vec<Exercise>,
}

impl StaticCatalog {
    /// Catalog serving `exercises`
    #[must_use]
    pub const fn new(exercises: Vec<Exercise>) -> Self {
        Self { exercises }
    }
}

#[async_trait]
impl ExerciseCatalog for StaticCatalog {
    async fn all_exercises(&self) -> StoreResult<Vec<Exercise>> {
        Ok(self.exercises.clone())
    }
}

/// A call received by `InMemorySessionStore`
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCall {
    /// `create_session`
    Create(WorkoutSessionCreate),
    /// `update_session`
    Update {
        /// Addressed session
        id: String,
        /// Payload sent
        payload: WorkoutSessionUpdate,
    },
    /// `delete_session`
    Delete {
        /// Addressed session
        id: String,
    },
}

#[derive(Debug, Default)]
struct SessionState {
    sessions: HashMap<String, WorkoutSession>,
    calls: Vec<SessionCall>,
    failure: Option<StoreError>,
}

/// Session store held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    inner: Arc<RwLock<SessionState>>,
}

impl InMemorySessionStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a session, e.g. one saved by another device
    pub async fn insert(&self, session: WorkoutSession) {
        self.inner
            .write()
            .await
            .sessions
            .insert(session.id.clone(), session);
    }

    /// Drop a session without recording a call, as an external delete would
    pub async fn remove(&self, id: &str) -> Option<WorkoutSession> {
        self.inner.write().await.sessions.remove(id)
    }

    /// Stored session by id
    pub async fn session(&self, id: &str) -> Option<WorkoutSession> {
        self.inner.read().await.sessions.get(id).cloned()
    }

    /// Number of stored sessions
    pub async fn len(&self) -> usize {
        self.inner.read().await.sessions.len()
    }

    /// Whether no session is stored
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.sessions.is_empty()
    }

    /// Calls received so far, oldest first
    pub async fn calls(&self) -> Vec<SessionCall> {
        self.inner.read().await.calls.clone()
    }

    /// Make every following call fail with `failure` until reset with `None`
    pub async fn fail_with(&self, failure: Option<StoreError>) {
        self.inner.write().await.failure = failure;
    }
}

#[async_trait]
impl WorkoutSessionStore for InMemorySessionStore {
    async fn get_session(&self, id: &str) -> StoreResult<WorkoutSession> {
        let state = self.inner.read().await;
        if let Some(failure) = &state.failure {
            return Err(failure.clone());
        }
        state
            .sessions
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(SESSION, id))
    }

    async fn create_session(&self, payload: &WorkoutSessionCreate) -> StoreResult<WorkoutSession> {
        let mut state = self.inner.write().await;
        state.calls.push(SessionCall::Create(payload.clone()));
        if let Some(failure) = &state.failure {
            return Err(failure.clone());
        }
        let session = WorkoutSession {
            id: Uuid::new_v4().to_string(),
            name: payload.name.clone(),
            started_at: payload.started_at,
            ended_at: payload.ended_at,
            sets: payload.sets.clone(),
            notes: None,
            total_volume: None,
        };
        state.sessions.insert(session.id.clone(), session.clone());
        Ok(session)
    }

    async fn update_session(
        &self,
        id: &str,
        payload: &WorkoutSessionUpdate,
    ) -> StoreResult<WorkoutSession> {
        let mut state = self.inner.write().await;
        state.calls.push(SessionCall::Update {
            id: id.to_owned(),
            payload: payload.clone(),
        });
        if let Some(failure) = &state.failure {
            return Err(failure.clone());
        }
        let session = state
            .sessions
            .get_mut(id)
            .ok_or_else(|| StoreError::not_found(SESSION, id))?;
        session.sets.clone_from(&payload.sets);
        if payload.ended_at.is_some() {
            session.ended_at = payload.ended_at;
        }
        Ok(session.clone())
    }

    async fn delete_session(&self, id: &str) -> StoreResult<DeleteOutcome> {
        let mut state = self.inner.write().await;
        state.calls.push(SessionCall::Delete { id: id.to_owned() });
        if let Some(failure) = &state.failure {
            return Err(failure.clone());
        }
        Ok(if state.sessions.remove(id).is_some() {
            DeleteOutcome::Deleted
        } else {
            DeleteOutcome::NotFound
        })
    }
}

/// Last-used values held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryLastUsedStore {
    values: Arc<RwLock<HashMap<String, LastUsedData>>>,
}

impl InMemoryLastUsedStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Values stored for an exercise
    pub async fn get(&self, exercise_id: &str) -> Option<LastUsedData> {
        self.values.read().await.get(exercise_id).cloned()
    }
}

#[async_trait]
impl LastUsedStore for InMemoryLastUsedStore {
    async fn set_last_used(&self, exercise_id: &str, data: &LastUsedData) -> StoreResult<()> {
        self.values
            .write()
            .await
            .insert(exercise_id.to_owned(), data.clone());
        Ok(())
    }
}

/// Active-workout pointer held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryStateStore {
    state: Arc<RwLock<Option<ActiveWorkoutState>>>,
}

impl InMemoryStateStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ActiveStateStore for InMemoryStateStore {
    async fn save(&self, state: &ActiveWorkoutState) -> StoreResult<()> {
        *self.state.write().await = Some(state.clone());
        Ok(())
    }

    async fn load(&self) -> StoreResult<Option<ActiveWorkoutState>> {
        Ok(self.state.read().await.clone())
    }

    async fn clear(&self) -> StoreResult<()> {
        *self.state.write().await = None;
        Ok(())
    }
}
