// ABOUTME: Serializable pointer to the workout in progress on this device
// ABOUTME: Holds the preset, flattened set rows, start time, session id, and last-used values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

use chrono::{DateTime, Local, Utc};
use liftlog_core::models::WorkoutPreset;
use liftlog_core::{LastUsedData, PlainSetItem, SetItem};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Snapshot of an active workout, stored locally for resumption
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActiveWorkoutState {
    /// Preset the workout was built from
    pub preset: WorkoutPreset,
    /// Set list in display order
    pub set_rows: Vec<PlainSetItem>,
    /// Workout start
    pub start_time: DateTime<Utc>,
    /// Remote session backing the workout, once created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workout_session_id: Option<String>,
    /// Last-used values per exercise id
    #[serde(default)]
    pub last_used: HashMap<String, LastUsedData>,
}

impl ActiveWorkoutState {
    /// Capture the current workout
    #[must_use]
    pub fn capture(
        preset: &WorkoutPreset,
        items: &[SetItem],
        start_time: DateTime<Utc>,
        workout_session_id: Option<&str>,
        last_used: &HashMap<String, LastUsedData>,
    ) -> Self {
        Self {
            preset: preset.clone(),
            set_rows: items.iter().map(SetItem::to_plain).collect(),
            start_time,
            workout_session_id: workout_session_id.map(str::to_owned),
            last_used: last_used.clone(),
        }
    }

    /// Rebuild the set items
    #[must_use]
    pub fn items(&self) -> Vec<SetItem> {
        self.set_rows.iter().cloned().map(SetItem::from_plain).collect()
    }

    /// Whether this state may be resumed for `preset_id` at `now`
    ///
    /// State started on an earlier local calendar day, or for another preset,
    /// is stale.
    #[must_use]
    pub fn is_resumable(&self, preset_id: &str, now: DateTime<Utc>) -> bool {
        self.preset.id == preset_id && self.started_same_day(now)
    }

    /// Whether the workout started on the same local calendar day as `now`
    #[must_use]
    pub fn started_same_day(&self, now: DateTime<Utc>) -> bool {
        self.start_time.with_timezone(&Local).date_naive() == now.with_timezone(&Local).date_naive()
    }
}
