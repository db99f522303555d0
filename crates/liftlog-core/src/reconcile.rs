// ABOUTME: Resume reconciliation: overlays persisted sets onto a freshly expanded set list
// ABOUTME: Matches positionally within exercise and compatible set type, never by record id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

//! # Session Reconciliation
//!
//! The preset decides which slots exist; persisted records only say which of
//! those slots are already done. Records are consumed in their stored order,
//! per exercise, by the first expanded item of a compatible variant. Records
//! left over once every slot has been visited are dropped from the view.

use crate::expansion::stamp_original_index;
use crate::models::{SetType, WorkoutSet};
use crate::set_item::{SetItem, SetKind};
use std::collections::HashMap;
use tracing::debug;

/// Overlay `persisted` onto `expanded`, keeping the expanded order and shape
#[must_use]
pub fn reconcile(expanded: &[SetItem], persisted: &[WorkoutSet]) -> Vec<SetItem> {
    let mut by_exercise: HashMap<&str, Vec<usize>> = HashMap::new();
    for (index, record) in persisted.iter().enumerate() {
        by_exercise
            .entry(record.exercise_id.as_str())
            .or_default()
            .push(index);
    }
    let mut used = vec![false; persisted.len()];

    let reconciled: Vec<SetItem> = expanded
        .iter()
        .map(|item| {
            let candidate = by_exercise.get(item.exercise_id.as_str()).and_then(|indexes| {
                indexes
                    .iter()
                    .copied()
                    .find(|&i| !used[i] && accepts(&item.kind, persisted[i].set_type))
            });
            candidate.map_or_else(
                || item.clone(),
                |i| {
                    used[i] = true;
                    overlay(item, &persisted[i])
                },
            )
        })
        .collect();

    let matched = used.iter().filter(|u| **u).count();
    debug!(
        items = reconciled.len(),
        persisted = persisted.len(),
        matched,
        dropped = persisted.len() - matched,
        "Reconciled resumed session"
    );

    stamp_original_index(reconciled)
}

/// Whether a persisted record of `set_type` can fill a slot of `kind`
///
/// Records without a type come from older clients that only knew straight
/// sets; dropdown sets were once stored as plain `normal` records.
fn accepts(kind: &SetKind, set_type: Option<SetType>) -> bool {
    match kind {
        SetKind::Warmup { .. } => set_type == Some(SetType::Warmup),
        SetKind::Normal { .. } => matches!(set_type, Some(SetType::Normal) | None),
        SetKind::Bodyweight { .. } => matches!(set_type, Some(SetType::Bodyweight) | None),
        SetKind::Dropdown { .. } => matches!(
            set_type,
            Some(SetType::Dropdown | SetType::Normal) | None
        ),
    }
}

fn overlay(item: &SetItem, record: &WorkoutSet) -> SetItem {
    let completed = record.logged_at.is_some();
    let mut next = item.clone();

    match &mut next.kind {
        SetKind::Warmup { weight, reps } | SetKind::Normal { weight, reps } => {
            *weight = record.weight;
            *reps = record.reps;
        }
        SetKind::Bodyweight { reps } => *reps = record.reps,
        SetKind::Dropdown { tiers } => {
            if let (Some(first), Some(w)) = (tiers.first_mut(), record.weight) {
                first.weight = w;
            }
            for tier in tiers.iter_mut() {
                tier.reps = record.reps;
                tier.completed = completed;
                tier.completed_at = record.logged_at;
            }
        }
    }

    next.completed = completed;
    next.completed_at = record.logged_at;
    next.original_workout_set_id = Some(record.id.clone());
    next.already_saved = completed;
    next
}
