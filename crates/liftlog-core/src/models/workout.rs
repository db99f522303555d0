// ABOUTME: Persisted workout session aggregate and its per-set wire records
// ABOUTME: Create/update payloads carry the full completed-set list, never an append log
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Variant label of a persisted set
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SetType {
    /// Straight working set
    Normal,
    /// Warmup set
    Warmup,
    /// Working set with drop tiers
    Dropdown,
    /// Set without external load
    Bodyweight,
}

impl SetType {
    /// Wire label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Warmup => "warmup",
            Self::Dropdown => "dropdown",
            Self::Bodyweight => "bodyweight",
        }
    }

    /// Parse a wire label; unknown labels yield `None`
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "normal" => Some(Self::Normal),
            "warmup" => Some(Self::Warmup),
            "dropdown" => Some(Self::Dropdown),
            "bodyweight" => Some(Self::Bodyweight),
            _ => None,
        }
    }
}

impl fmt::Display for SetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weight/reps of one dropdown tier as sent alongside a dropdown set
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TierRecord {
    /// Tier load (kg)
    pub weight: f64,
    /// Tier reps
    pub reps: u32,
}

/// One persisted set inside a workout session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSet {
    /// Record identifier (defaults to the set item's id until the store assigns one)
    pub id: String,
    /// Catalog exercise id
    pub exercise_id: String,
    /// Variant label; absent on records written by older clients
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set_type: Option<SetType>,
    /// Load (kg); absent for bodyweight work
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Repetitions
    pub reps: u32,
    /// Tier detail for dropdown sets; informational only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dropdown_weights: Option<Vec<TierRecord>>,
    /// Completion time; absent means the slot was saved but not completed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logged_at: Option<DateTime<Utc>>,
}

impl WorkoutSet {
    /// Load × reps for this record (zero without a weight)
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.weight.map_or(0.0, |w| w * f64::from(self.reps))
    }
}

/// Persisted workout session aggregate
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSession {
    /// Store-assigned identifier
    pub id: String,
    /// Session name (the preset's name)
    pub name: String,
    /// Session start
    pub started_at: DateTime<Utc>,
    /// Session end; absent while the workout is active
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<DateTime<Utc>>,
    /// Logged sets
    #[serde(default)]
    pub sets: Vec<WorkoutSet>,
    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Derived total volume (kg)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_volume: Option<f64>,
}

impl WorkoutSession {
    /// Whether the session has been finished
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.ended_at.is_some()
    }
}

/// Payload for creating a session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSessionCreate {
    /// Session name
    pub name: String,
    /// Session start
    pub started_at: DateTime<Utc>,
    /// Session end, present only when creating an already finished workout
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<DateTime<Utc>>,
    /// Completed sets
    pub sets: Vec<WorkoutSet>,
}

/// Payload for updating a session; `sets` fully replaces the stored list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSessionUpdate {
    /// Complete list of completed sets
    pub sets: Vec<WorkoutSet>,
    /// Session end; absent keeps the session active
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<DateTime<Utc>>,
}
