// ABOUTME: Workout preset templates: ordered standalone, dropdown, and superset entries
// ABOUTME: Accepts the backend's legacy entry type labels when deserializing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

use crate::constants::prescription::DEFAULT_SET_COUNT;
use crate::set_item::LastUsedData;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Classification tag on a preset
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutTag {
    /// Strength-focused day
    Strength,
    /// Conditioning day
    Cardio,
    /// Mixed day
    Mixed,
}

/// Lifecycle status of a preset
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PresetStatus {
    /// Offered when starting a workout
    #[default]
    Active,
    /// Hidden from the start screen
    Archived,
}

/// Reusable prescription of exercises and sets for a training day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPreset {
    /// Preset identifier
    pub id: String,
    /// Display name, e.g. "Upper Body Day 1"
    pub name: String,
    /// Optional weekday label, e.g. "Monday"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_label: Option<String>,
    /// Ordered planned entries
    #[serde(default)]
    pub exercises: Vec<PresetEntry>,
    /// Classification tags
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<WorkoutTag>,
    /// Lifecycle status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PresetStatus>,
    /// Last used weights per exercise id, as stored by the backend
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub last_used_weights: HashMap<String, LastUsedData>,
}

impl WorkoutPreset {
    /// Identifier of the built-in free-form preset
    pub const FREESTYLE_ID: &'static str = "freestyle";

    /// Create an empty preset
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            day_label: None,
            exercises: Vec::new(),
            tags: Vec::new(),
            status: None,
            last_used_weights: HashMap::new(),
        }
    }

    /// Free-form preset with no planned entries
    #[must_use]
    pub fn freestyle() -> Self {
        Self::new(Self::FREESTYLE_ID, "Freestyle")
    }

    /// Append an entry (builder style)
    #[must_use]
    pub fn with_entry(mut self, entry: PresetEntry) -> Self {
        self.exercises.push(entry);
        self
    }

    /// Whether this preset plans nothing and sets are added ad hoc
    #[must_use]
    pub fn is_freestyle(&self) -> bool {
        self.id == Self::FREESTYLE_ID || self.exercises.is_empty()
    }
}

/// One planned entry of a preset
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PresetEntry {
    /// Straight sets of one exercise, optionally preceded by a warmup
    #[serde(alias = "bodyweight", alias = "warmup")]
    Normal(StandaloneEntry),
    /// Working set plus reduced-weight drop tiers, logged together
    Dropdown(DropdownEntry),
    /// Exercises performed round-robin
    Superset(SupersetEntry),
}

impl PresetEntry {
    /// Entry identifier
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Normal(entry) => &entry.id,
            Self::Dropdown(entry) => &entry.id,
            Self::Superset(entry) => &entry.id,
        }
    }
}

/// Standalone straight-set entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StandaloneEntry {
    /// Entry identifier
    pub id: String,
    /// Catalog exercise id
    pub exercise_id: String,
    /// Number of working sets
    #[serde(default)]
    pub sets: u32,
    /// Prepend one warmup set
    #[serde(default)]
    pub warmup: bool,
}

impl StandaloneEntry {
    /// Create an entry without a warmup
    #[must_use]
    pub fn new(id: impl Into<String>, exercise_id: impl Into<String>, sets: u32) -> Self {
        Self {
            id: id.into(),
            exercise_id: exercise_id.into(),
            sets,
            warmup: false,
        }
    }

    /// Enable the warmup set
    #[must_use]
    pub const fn with_warmup(mut self) -> Self {
        self.warmup = true;
        self
    }

    /// Working set count, falling back to the default when unset
    #[must_use]
    pub const fn set_count(&self) -> u32 {
        effective_sets(self.sets)
    }
}

/// Dropdown entry: each set carries a working tier and `drop_tiers` drops
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DropdownEntry {
    /// Entry identifier
    pub id: String,
    /// Catalog exercise id
    pub exercise_id: String,
    /// Number of dropdown sets
    #[serde(default)]
    pub sets: u32,
    /// Number of reduced-weight tiers after the working tier
    #[serde(default, rename = "dropdowns")]
    pub drop_tiers: u32,
}

impl DropdownEntry {
    /// Create a dropdown entry
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        exercise_id: impl Into<String>,
        sets: u32,
        drop_tiers: u32,
    ) -> Self {
        Self {
            id: id.into(),
            exercise_id: exercise_id.into(),
            sets,
            drop_tiers,
        }
    }

    /// Dropdown set count, falling back to the default when unset
    #[must_use]
    pub const fn set_count(&self) -> u32 {
        effective_sets(self.sets)
    }
}

/// Superset entry: members are executed round-robin
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SupersetEntry {
    /// Entry identifier
    pub id: String,
    /// Members in execution order
    #[serde(default)]
    pub exercises: Vec<SupersetMember>,
}

impl SupersetEntry {
    /// Create a superset from its members
    #[must_use]
    pub fn new(id: impl Into<String>, exercises: Vec<SupersetMember>) -> Self {
        Self {
            id: id.into(),
            exercises,
        }
    }
}

/// One exercise inside a superset
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SupersetMember {
    /// Catalog exercise id
    pub exercise_id: String,
    /// Number of working sets for this member
    #[serde(default)]
    pub sets: u32,
    /// Emit a warmup for this member before the round-robin starts
    #[serde(default)]
    pub warmup: bool,
}

impl SupersetMember {
    /// Create a member without a warmup
    #[must_use]
    pub fn new(exercise_id: impl Into<String>, sets: u32) -> Self {
        Self {
            exercise_id: exercise_id.into(),
            sets,
            warmup: false,
        }
    }

    /// Enable the warmup set
    #[must_use]
    pub const fn with_warmup(mut self) -> Self {
        self.warmup = true;
        self
    }

    /// Working set count, falling back to the default when unset
    #[must_use]
    pub const fn set_count(&self) -> u32 {
        effective_sets(self.sets)
    }
}

const fn effective_sets(sets: u32) -> u32 {
    if sets == 0 {
        DEFAULT_SET_COUNT
    } else {
        sets
    }
}
