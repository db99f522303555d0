// ABOUTME: Polymorphic set-item model: warmup, normal, bodyweight, and dropdown sets
// ABOUTME: Copy-on-write operations for completing, editing, and persisting a planned set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

//! # Set Items
//!
//! A `SetItem` is one planned or logged unit of work inside an active workout.
//! The shared identity and completion bookkeeping live on the struct; the
//! variant-specific data lives in `SetKind`. Every operation returns a new
//! value, the list that owns the items is never mutated behind its back.
//!
//! Dropdown items keep their tier list authoritative: `weight()` and `reps()`
//! read tier 0, and completion is all-or-nothing across tiers.

mod display;
mod form;
mod plain;

pub use display::{DisplayFragment, Emphasis};
pub use form::{LastUsedData, SetForm, TierForm};
pub use plain::PlainSetItem;

use crate::constants::prescription::DEFAULT_REPS;
use crate::models::{Exercise, SetType, TierRecord, WorkoutSet};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One tier of a dropdown set (tier 0 is the working set)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DropTier {
    /// Tier load (kg)
    pub weight: f64,
    /// Tier reps
    pub reps: u32,
    /// Whether this tier is done
    #[serde(default)]
    pub completed: bool,
    /// When this tier was done
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl DropTier {
    /// Pending tier
    #[must_use]
    pub const fn new(weight: f64, reps: u32) -> Self {
        Self {
            weight,
            reps,
            completed: false,
            completed_at: None,
        }
    }
}

/// Variant-specific data of a set item
#[derive(Debug, Clone, PartialEq)]
pub enum SetKind {
    /// Warmup before the working sets; no weight input is offered
    Warmup {
        /// Load (kg), absent for bodyweight exercises
        weight: Option<f64>,
        /// Repetitions
        reps: u32,
    },
    /// Straight working set
    Normal {
        /// Load (kg), optional for bodyweight-compatible exercises
        weight: Option<f64>,
        /// Repetitions
        reps: u32,
    },
    /// Working set without external load
    Bodyweight {
        /// Repetitions
        reps: u32,
    },
    /// Working set followed by reduced-weight drop tiers
    Dropdown {
        /// Fixed-length tier list
        tiers: Vec<DropTier>,
    },
}

impl SetKind {
    /// Persisted label of this variant
    #[must_use]
    pub const fn set_type(&self) -> SetType {
        match self {
            Self::Warmup { .. } => SetType::Warmup,
            Self::Normal { .. } => SetType::Normal,
            Self::Bodyweight { .. } => SetType::Bodyweight,
            Self::Dropdown { .. } => SetType::Dropdown,
        }
    }
}

/// One planned or logged set of an active workout
#[derive(Debug, Clone, PartialEq)]
pub struct SetItem {
    /// Identifier, unique within a session
    pub id: String,
    /// Catalog exercise id
    pub exercise_id: String,
    /// Denormalized exercise name
    pub exercise_name: String,
    /// Denormalized catalog entry, when known
    pub exercise: Option<Exercise>,
    /// 1-based position within its exercise (warmups use 0); fixed at creation
    pub set_number: u32,
    /// Completion flag (mirrors the tiers for dropdown sets)
    pub completed: bool,
    /// Completion time
    pub completed_at: Option<DateTime<Utc>>,
    /// Whether the set is logged without load
    pub is_bodyweight: bool,
    /// Weight suggested at planning time
    pub suggested_weight: Option<f64>,
    /// Added by the user beyond the preset
    pub is_extra: bool,
    /// Part of a superset group
    pub is_superset: bool,
    /// Position assigned when the list was built
    pub original_index: Option<usize>,
    /// Id of the persisted record this item was reconciled against
    pub original_workout_set_id: Option<String>,
    /// The remote store already holds this completed set
    pub already_saved: bool,
    /// Variant data
    pub kind: SetKind,
}

impl SetItem {
    /// Create a pending set for `exercise`
    ///
    /// `is_bodyweight` follows the exercise, except that bodyweight sets are
    /// always bodyweight and dropdown sets never are.
    #[must_use]
    pub fn new(id: impl Into<String>, exercise: &Exercise, set_number: u32, kind: SetKind) -> Self {
        let is_bodyweight = match kind {
            SetKind::Bodyweight { .. } => true,
            SetKind::Dropdown { .. } => false,
            SetKind::Warmup { .. } | SetKind::Normal { .. } => exercise.is_bodyweight(),
        };
        Self {
            id: id.into(),
            exercise_id: exercise.id.clone(),
            exercise_name: exercise.name.clone(),
            exercise: Some(exercise.clone()),
            set_number,
            completed: false,
            completed_at: None,
            is_bodyweight,
            suggested_weight: None,
            is_extra: false,
            is_superset: false,
            original_index: None,
            original_workout_set_id: None,
            already_saved: false,
            kind,
        }
    }

    /// Tag as part of a superset
    #[must_use]
    pub fn in_superset(mut self) -> Self {
        self.is_superset = true;
        self
    }

    /// Tag as added beyond the preset
    #[must_use]
    pub fn as_extra(mut self) -> Self {
        self.is_extra = true;
        self
    }

    /// Attach a suggested weight
    #[must_use]
    pub fn with_suggested_weight(mut self, weight: Option<f64>) -> Self {
        self.suggested_weight = weight;
        self
    }

    /// Stamp the display position
    #[must_use]
    pub fn with_original_index(mut self, index: usize) -> Self {
        self.original_index = Some(index);
        self
    }

    /// Persisted label of this item's variant
    #[must_use]
    pub const fn set_type(&self) -> SetType {
        self.kind.set_type()
    }

    /// Load of the set (tier 0 for dropdown sets)
    #[must_use]
    pub fn weight(&self) -> Option<f64> {
        match &self.kind {
            SetKind::Warmup { weight, .. } | SetKind::Normal { weight, .. } => *weight,
            SetKind::Bodyweight { .. } => None,
            SetKind::Dropdown { tiers } => tiers.first().map(|t| t.weight),
        }
    }

    /// Repetitions of the set (tier 0 for dropdown sets)
    #[must_use]
    pub fn reps(&self) -> u32 {
        match &self.kind {
            SetKind::Warmup { reps, .. }
            | SetKind::Normal { reps, .. }
            | SetKind::Bodyweight { reps } => *reps,
            SetKind::Dropdown { tiers } => tiers.first().map_or(DEFAULT_REPS, |t| t.reps),
        }
    }

    /// Dropdown tiers (empty for other variants)
    #[must_use]
    pub fn tiers(&self) -> &[DropTier] {
        match &self.kind {
            SetKind::Dropdown { tiers } => tiers,
            _ => &[],
        }
    }

    /// Completed for simple variants; every tier completed for dropdown sets
    #[must_use]
    pub fn is_fully_completed(&self) -> bool {
        match &self.kind {
            SetKind::Dropdown { tiers } if !tiers.is_empty() => tiers.iter().all(|t| t.completed),
            _ => self.completed,
        }
    }

    /// Completed copy stamped with `now`; dropdown tiers complete together
    #[must_use]
    pub fn mark_completed(&self, now: DateTime<Utc>) -> Self {
        let mut next = self.clone();
        next.completed = true;
        next.completed_at = Some(now);
        if let SetKind::Dropdown { tiers } = &mut next.kind {
            for tier in tiers {
                tier.completed = true;
                tier.completed_at = Some(now);
            }
        }
        next
    }

    /// Pending copy; clears the completion time of the item and every tier
    #[must_use]
    pub fn mark_uncompleted(&self) -> Self {
        let mut next = self.clone();
        next.completed = false;
        next.completed_at = None;
        if let SetKind::Dropdown { tiers } = &mut next.kind {
            for tier in tiers {
                tier.completed = false;
                tier.completed_at = None;
            }
        }
        next
    }

    /// Values used to seed the editor for this set
    ///
    /// Values last used for the exercise win over the planned ones. A dropdown
    /// only adopts remembered tiers when the remembered tier count matches its
    /// own.
    #[must_use]
    pub fn initial_form(&self, last_used: Option<&LastUsedData>) -> SetForm {
        match &self.kind {
            SetKind::Warmup { weight, reps } | SetKind::Normal { weight, reps } => SetForm {
                weight: last_used
                    .and_then(|l| l.weight)
                    .or(*weight)
                    .or(self.suggested_weight),
                reps: last_used.map_or(*reps, |l| l.reps),
                sub_sets: None,
            },
            SetKind::Bodyweight { reps } => SetForm::reps_only(last_used.map_or(*reps, |l| l.reps)),
            SetKind::Dropdown { tiers } => {
                let remembered = last_used
                    .and_then(|l| l.sub_sets.as_ref())
                    .filter(|saved| saved.len() == tiers.len());
                let sub_sets: Vec<TierForm> = remembered
                    .cloned()
                    .unwrap_or_else(|| tiers.iter().map(TierForm::from).collect());
                let first = sub_sets.first().copied();
                SetForm {
                    weight: last_used
                        .and_then(|l| l.weight)
                        .or_else(|| first.map(|t| t.weight)),
                    reps: last_used
                        .map(|l| l.reps)
                        .or_else(|| first.map(|t| t.reps))
                        .unwrap_or(DEFAULT_REPS),
                    sub_sets: Some(sub_sets),
                }
            }
        }
    }

    /// Apply the editor's values and complete the set
    ///
    /// The result always needs to be re-sent, so `already_saved` is cleared.
    #[must_use]
    pub fn apply_form_and_complete(&self, form: &SetForm, now: DateTime<Utc>) -> Self {
        let mut next = self.mark_completed(now);
        match &mut next.kind {
            SetKind::Warmup { weight, reps } | SetKind::Normal { weight, reps } => {
                *weight = form.weight;
                *reps = form.reps;
            }
            SetKind::Bodyweight { reps } => *reps = form.reps,
            SetKind::Dropdown { tiers } => apply_tier_form(tiers, form),
        }
        next.already_saved = false;
        next
    }

    /// Slice of a submitted form worth remembering for the exercise
    #[must_use]
    pub fn last_used_data(&self, form: &SetForm) -> LastUsedData {
        match &self.kind {
            SetKind::Bodyweight { .. } => LastUsedData {
                weight: None,
                reps: form.reps,
                sub_sets: None,
            },
            SetKind::Dropdown { tiers } => LastUsedData {
                weight: form.weight,
                reps: form.reps,
                sub_sets: Some(
                    form.sub_sets
                        .clone()
                        .unwrap_or_else(|| tiers.iter().map(TierForm::from).collect()),
                ),
            },
            SetKind::Warmup { .. } | SetKind::Normal { .. } => LastUsedData {
                weight: form.weight,
                reps: form.reps,
                sub_sets: None,
            },
        }
    }

    /// Copy with a new load (tier 0 for dropdown sets)
    #[must_use]
    pub fn with_weight(&self, new_weight: Option<f64>) -> Self {
        let mut next = self.clone();
        let changed = match &mut next.kind {
            SetKind::Warmup { weight, .. } | SetKind::Normal { weight, .. } => {
                let changed = *weight != new_weight;
                *weight = new_weight;
                changed
            }
            SetKind::Bodyweight { .. } => false,
            SetKind::Dropdown { tiers } => match (tiers.first_mut(), new_weight) {
                (Some(tier), Some(w)) if (tier.weight - w).abs() > f64::EPSILON => {
                    tier.weight = w;
                    true
                }
                _ => false,
            },
        };
        next.already_saved &= !changed;
        next
    }

    /// Copy with new reps (tier 0 for dropdown sets)
    #[must_use]
    pub fn with_reps(&self, new_reps: u32) -> Self {
        let mut next = self.clone();
        let changed = match &mut next.kind {
            SetKind::Warmup { reps, .. }
            | SetKind::Normal { reps, .. }
            | SetKind::Bodyweight { reps } => {
                let changed = *reps != new_reps;
                *reps = new_reps;
                changed
            }
            SetKind::Dropdown { tiers } => tiers.first_mut().is_some_and(|tier| {
                let changed = tier.reps != new_reps;
                tier.reps = new_reps;
                changed
            }),
        };
        next.already_saved &= !changed;
        next
    }

    /// Copy with one dropdown tier edited; out-of-range indexes and other
    /// variants return an unchanged copy
    #[must_use]
    pub fn with_tier(&self, index: usize, weight: f64, reps: u32) -> Self {
        let mut next = self.clone();
        if let SetKind::Dropdown { tiers } = &mut next.kind {
            if let Some(tier) = tiers.get_mut(index) {
                let changed = (tier.weight - weight).abs() > f64::EPSILON || tier.reps != reps;
                tier.weight = weight;
                tier.reps = reps;
                next.already_saved &= !changed;
            }
        }
        next
    }

    /// Persisted record for this set if it is fully completed, regardless of
    /// whether the store already has it
    #[must_use]
    pub fn persisted_set(&self, session_start: DateTime<Utc>) -> Option<WorkoutSet> {
        if !self.is_fully_completed() {
            return None;
        }
        let dropdown_weights = match &self.kind {
            SetKind::Dropdown { tiers } => Some(
                tiers
                    .iter()
                    .map(|t| TierRecord {
                        weight: t.weight,
                        reps: t.reps,
                    })
                    .collect(),
            ),
            _ => None,
        };
        Some(WorkoutSet {
            id: self
                .original_workout_set_id
                .clone()
                .unwrap_or_else(|| self.id.clone()),
            exercise_id: self.exercise_id.clone(),
            set_type: Some(self.set_type()),
            weight: self.weight(),
            reps: self.reps(),
            dropdown_weights,
            logged_at: Some(self.completed_at.unwrap_or(session_start)),
        })
    }

    /// Records to send in a delta save: none when pending or already saved,
    /// otherwise exactly one
    #[must_use]
    pub fn to_workout_sets(&self, session_start: DateTime<Utc>) -> Vec<WorkoutSet> {
        if self.already_saved {
            return Vec::new();
        }
        self.persisted_set(session_start).into_iter().collect()
    }
}

fn apply_tier_form(tiers: &mut [DropTier], form: &SetForm) {
    match form.sub_sets.as_deref() {
        Some(entered) if entered.len() == tiers.len() => {
            for (tier, values) in tiers.iter_mut().zip(entered) {
                tier.weight = values.weight;
                tier.reps = values.reps;
            }
        }
        _ => {
            if let Some(first) = tiers.first_mut() {
                if let Some(w) = form.weight {
                    first.weight = w;
                }
                first.reps = form.reps;
            }
        }
    }
}
