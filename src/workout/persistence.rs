// ABOUTME: Decides which session write mirrors the local set list
// ABOUTME: Create on first completion, full-snapshot update afterwards, end time on finish
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

//! # Session Write Planning
//!
//! The remote session's set list is state, not an event log. Once a session
//! exists every write carries the full list of completed sets, so a failed or
//! reordered write is repaired by the next one.

use chrono::{DateTime, Utc};
use liftlog_core::models::{WorkoutSessionCreate, WorkoutSessionUpdate, WorkoutSet};
use liftlog_core::SetItem;

/// The local view a write is planned from
#[derive(Debug, Clone, Copy)]
pub struct SessionSnapshot<'a> {
    /// Session name (the preset's name)
    pub name: &'a str,
    /// Workout start
    pub started_at: DateTime<Utc>,
    /// Remote session id, once created
    pub session_id: Option<&'a str>,
    /// Current set list
    pub items: &'a [SetItem],
}

/// A write to issue against the session store
#[derive(Debug, Clone, PartialEq)]
pub enum SyncRequest {
    /// Create the backing session
    Create(WorkoutSessionCreate),
    /// Overwrite the backing session's sets
    Update {
        /// Session id
        id: String,
        /// Full set list, plus the end time when finishing
        payload: WorkoutSessionUpdate,
    },
}

impl SyncRequest {
    /// Sets carried by the request
    #[must_use]
    pub fn sets(&self) -> &[WorkoutSet] {
        match self {
            Self::Create(payload) => &payload.sets,
            Self::Update { payload, .. } => &payload.sets,
        }
    }
}

/// Records of every fully completed item, saved or not
#[must_use]
pub fn full_snapshot(items: &[SetItem], started_at: DateTime<Utc>) -> Vec<WorkoutSet> {
    items
        .iter()
        .filter_map(|item| item.persisted_set(started_at))
        .collect()
}

/// Records not yet held by the store
#[must_use]
pub fn unsaved_sets(items: &[SetItem], started_at: DateTime<Utc>) -> Vec<WorkoutSet> {
    items
        .iter()
        .flat_map(|item| item.to_workout_sets(started_at))
        .collect()
}

/// Plan the write that follows a change in completion state
///
/// Without a session, the first completed set creates one. With a session,
/// the full snapshot replaces its set list, even when nothing is completed
/// any more. Returns `None` when there is nothing to write.
#[must_use]
pub fn plan_sync(snapshot: &SessionSnapshot<'_>) -> Option<SyncRequest> {
    match snapshot.session_id {
        Some(id) => Some(SyncRequest::Update {
            id: id.to_owned(),
            payload: WorkoutSessionUpdate {
                sets: full_snapshot(snapshot.items, snapshot.started_at),
                ended_at: None,
            },
        }),
        None => {
            let sets = unsaved_sets(snapshot.items, snapshot.started_at);
            if sets.is_empty() {
                None
            } else {
                Some(SyncRequest::Create(WorkoutSessionCreate {
                    name: snapshot.name.to_owned(),
                    started_at: snapshot.started_at,
                    ended_at: None,
                    sets,
                }))
            }
        }
    }
}

/// Plan the write that finishes the workout at `ended_at`
#[must_use]
pub fn finish_request(snapshot: &SessionSnapshot<'_>, ended_at: DateTime<Utc>) -> SyncRequest {
    let sets = full_snapshot(snapshot.items, snapshot.started_at);
    match snapshot.session_id {
        Some(id) => SyncRequest::Update {
            id: id.to_owned(),
            payload: WorkoutSessionUpdate {
                sets,
                ended_at: Some(ended_at),
            },
        },
        None => SyncRequest::Create(WorkoutSessionCreate {
            name: snapshot.name.to_owned(),
            started_at: snapshot.started_at,
            ended_at: Some(ended_at),
            sets,
        }),
    }
}
