// ABOUTME: Flat serializable form of a set item used by the active-workout state blob
// ABOUTME: Rebuilds the right variant from its setType label, tolerating legacy rows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

use super::{DropTier, SetItem, SetKind};
use crate::constants::prescription::DEFAULT_REPS;
use crate::models::{Exercise, SetType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Plain record of a set item
///
/// Every field except the identity is optional so rows written by older
/// clients still load. An unknown or missing `set_type` yields a normal set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlainSetItem {
    /// Item identifier
    pub id: String,
    /// Catalog exercise id
    pub exercise_id: String,
    /// Denormalized exercise name
    #[serde(default)]
    pub exercise_name: String,
    /// Denormalized catalog entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercise: Option<Exercise>,
    /// Position within the exercise
    #[serde(default)]
    pub set_number: u32,
    /// Variant label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set_type: Option<String>,
    /// Load (kg)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Repetitions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<u32>,
    /// Completion flag
    #[serde(default)]
    pub completed: bool,
    /// Completion time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    /// Logged without load
    #[serde(default)]
    pub is_bodyweight: bool,
    /// Weight suggested at planning time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_weight: Option<f64>,
    /// Added beyond the preset
    #[serde(default)]
    pub is_extra: bool,
    /// Part of a superset
    #[serde(default)]
    pub is_superset: bool,
    /// Display position at build time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_index: Option<usize>,
    /// Reconciled persisted record id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_workout_set_id: Option<String>,
    /// Remote store already holds this set
    #[serde(default)]
    pub already_saved: bool,
    /// Dropdown tiers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_sets: Option<Vec<DropTier>>,
}

impl SetItem {
    /// Flatten into the plain record
    #[must_use]
    pub fn to_plain(&self) -> PlainSetItem {
        let sub_sets = match &self.kind {
            SetKind::Dropdown { tiers } => Some(tiers.clone()),
            _ => None,
        };
        PlainSetItem {
            id: self.id.clone(),
            exercise_id: self.exercise_id.clone(),
            exercise_name: self.exercise_name.clone(),
            exercise: self.exercise.clone(),
            set_number: self.set_number,
            set_type: Some(self.set_type().as_str().to_owned()),
            weight: self.weight(),
            reps: Some(self.reps()),
            completed: self.completed,
            completed_at: self.completed_at,
            is_bodyweight: self.is_bodyweight,
            suggested_weight: self.suggested_weight,
            is_extra: self.is_extra,
            is_superset: self.is_superset,
            original_index: self.original_index,
            original_workout_set_id: self.original_workout_set_id.clone(),
            already_saved: self.already_saved,
            sub_sets,
        }
    }

    /// Rebuild an item from its plain record
    ///
    /// Variant invariants are re-established: bodyweight sets carry no load,
    /// dropdown sets are never bodyweight, and dropdown tiers share the item's
    /// completion state.
    #[must_use]
    pub fn from_plain(plain: PlainSetItem) -> Self {
        let reps = plain.reps.unwrap_or(DEFAULT_REPS);
        let set_type = plain.set_type.as_deref().and_then(SetType::parse);
        let (kind, is_bodyweight) = match set_type {
            Some(SetType::Warmup) => (
                SetKind::Warmup {
                    weight: plain.weight,
                    reps,
                },
                plain.is_bodyweight,
            ),
            Some(SetType::Bodyweight) => (SetKind::Bodyweight { reps }, true),
            Some(SetType::Dropdown) => {
                let tiers = plain
                    .sub_sets
                    .unwrap_or_default()
                    .into_iter()
                    .map(|tier| DropTier {
                        completed: plain.completed,
                        completed_at: if plain.completed {
                            tier.completed_at.or(plain.completed_at)
                        } else {
                            None
                        },
                        ..tier
                    })
                    .collect();
                (SetKind::Dropdown { tiers }, false)
            }
            Some(SetType::Normal) | None => (
                SetKind::Normal {
                    weight: plain.weight,
                    reps,
                },
                plain.is_bodyweight,
            ),
        };
        Self {
            id: plain.id,
            exercise_id: plain.exercise_id,
            exercise_name: plain.exercise_name,
            exercise: plain.exercise,
            set_number: plain.set_number,
            completed: plain.completed,
            completed_at: plain.completed_at,
            is_bodyweight,
            suggested_weight: plain.suggested_weight,
            is_extra: plain.is_extra,
            is_superset: plain.is_superset,
            original_index: plain.original_index,
            original_workout_set_id: plain.original_workout_set_id,
            already_saved: plain.already_saved,
            kind,
        }
    }
}

impl From<PlainSetItem> for SetItem {
    fn from(plain: PlainSetItem) -> Self {
        Self::from_plain(plain)
    }
}

impl From<&SetItem> for PlainSetItem {
    fn from(item: &SetItem) -> Self {
        item.to_plain()
    }
}
