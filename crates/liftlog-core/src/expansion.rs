// ABOUTME: Expands a workout preset into the ordered list of planned set items
// ABOUTME: Handles warmups, straight sets, bodyweight sets, dropdown tiers, and round-robin supersets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

//! # Preset Expansion
//!
//! `expand` is pure and deterministic for a given preset and catalog. Item ids
//! are built from the entry position and set indexes only, so they stay unique
//! even when a preset repeats an entry id or an exercise.

use crate::constants::id_prefix;
use crate::constants::prescription::{
    BASELINE_WORKING_WEIGHT, DEFAULT_REPS, DROP_STEP, WARMUP_RATIO, WARMUP_SET_NUMBER,
};
use crate::models::{
    DropdownEntry, Exercise, PresetEntry, StandaloneEntry, SupersetEntry, WorkoutPreset,
};
use crate::set_item::{DropTier, LastUsedData, SetItem, SetKind};
use std::collections::HashMap;
use tracing::{debug, warn};
use uuid::Uuid;

/// Build the planned set list for `preset`
///
/// Entries whose exercise is missing from `catalog` are skipped. Each item's
/// `original_index` is its position in the returned list.
#[must_use]
pub fn expand(preset: &WorkoutPreset, catalog: &[Exercise]) -> Vec<SetItem> {
    if preset.is_freestyle() {
        return Vec::new();
    }

    let lookup: HashMap<&str, &Exercise> = catalog.iter().map(|e| (e.id.as_str(), e)).collect();
    let mut items = Vec::new();

    for (position, entry) in preset.exercises.iter().enumerate() {
        let before = items.len();
        match entry {
            PresetEntry::Normal(standalone) => {
                expand_standalone(position, standalone, &lookup, &mut items);
            }
            PresetEntry::Dropdown(dropdown) => {
                expand_dropdown(position, dropdown, &lookup, &mut items);
            }
            PresetEntry::Superset(superset) => {
                expand_superset(position, superset, &lookup, &mut items);
            }
        }
        if items.len() == before {
            debug!(entry_id = %entry.id(), position, "Preset entry produced no sets");
        }
    }

    debug!(
        preset_id = %preset.id,
        entries = preset.exercises.len(),
        items = items.len(),
        "Expanded preset"
    );

    stamp_original_index(items)
}

/// Re-stamp `original_index` with each item's current position
#[must_use]
pub fn stamp_original_index(items: Vec<SetItem>) -> Vec<SetItem> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| item.with_original_index(index))
        .collect()
}

/// Ad hoc set appended to an exercise already in the list
///
/// Numbered after the exercise's existing sets and pre-filled from the
/// exercise's last-used values, falling back to its most recent set.
#[must_use]
pub fn extra_set_for(
    exercise: &Exercise,
    items: &[SetItem],
    last_used: Option<&LastUsedData>,
) -> SetItem {
    let existing: Vec<&SetItem> = items
        .iter()
        .filter(|item| item.exercise_id == exercise.id)
        .collect();
    let previous = existing.last();
    let weight = last_used
        .and_then(|l| l.weight)
        .or_else(|| previous.and_then(|item| item.weight()));
    let reps = last_used
        .map(|l| l.reps)
        .or_else(|| previous.map(|item| item.reps()))
        .unwrap_or(DEFAULT_REPS);

    let id = format!("{}-{}", id_prefix::EXTRA, Uuid::new_v4().simple());
    ad_hoc_set(id, exercise, next_set_number(&existing), weight, reps)
        .with_original_index(items.len())
}

/// First set of an exercise added mid-workout, using the baseline prescription
#[must_use]
pub fn new_exercise_set(exercise: &Exercise, items: &[SetItem]) -> SetItem {
    let existing: Vec<&SetItem> = items
        .iter()
        .filter(|item| item.exercise_id == exercise.id)
        .collect();
    let id = format!("{}-{}", id_prefix::NEW, Uuid::new_v4().simple());
    ad_hoc_set(
        id,
        exercise,
        next_set_number(&existing),
        Some(BASELINE_WORKING_WEIGHT),
        DEFAULT_REPS,
    )
    .with_original_index(items.len())
}

fn next_set_number(existing: &[&SetItem]) -> u32 {
    u32::try_from(existing.len()).map_or(u32::MAX, |n| n.saturating_add(1))
}

fn ad_hoc_set(
    id: String,
    exercise: &Exercise,
    set_number: u32,
    weight: Option<f64>,
    reps: u32,
) -> SetItem {
    let kind = if exercise.is_bodyweight() {
        SetKind::Bodyweight { reps }
    } else {
        SetKind::Normal { weight, reps }
    };
    SetItem::new(id, exercise, set_number, kind).as_extra()
}

fn resolve<'a>(
    lookup: &HashMap<&str, &'a Exercise>,
    entry_id: &str,
    exercise_id: &str,
) -> Option<&'a Exercise> {
    let found = lookup.get(exercise_id).copied();
    if found.is_none() {
        warn!(
            entry_id = %entry_id,
            exercise_id = %exercise_id,
            "Skipping preset entry: exercise not in catalog"
        );
    }
    found
}

fn warmup_set(id: String, exercise: &Exercise) -> SetItem {
    if exercise.is_bodyweight() {
        return SetItem::new(
            id,
            exercise,
            WARMUP_SET_NUMBER,
            SetKind::Warmup {
                weight: None,
                reps: DEFAULT_REPS,
            },
        );
    }
    let warmup_weight = (BASELINE_WORKING_WEIGHT * WARMUP_RATIO).floor();
    SetItem::new(
        id,
        exercise,
        WARMUP_SET_NUMBER,
        SetKind::Warmup {
            weight: Some(warmup_weight),
            reps: DEFAULT_REPS,
        },
    )
    .with_suggested_weight(Some(warmup_weight))
}

fn working_set(id: String, exercise: &Exercise, set_number: u32) -> SetItem {
    let kind = if exercise.is_bodyweight() {
        SetKind::Bodyweight {
            reps: DEFAULT_REPS,
        }
    } else {
        SetKind::Normal {
            weight: Some(BASELINE_WORKING_WEIGHT),
            reps: DEFAULT_REPS,
        }
    };
    SetItem::new(id, exercise, set_number, kind)
}

fn expand_standalone(
    position: usize,
    entry: &StandaloneEntry,
    lookup: &HashMap<&str, &Exercise>,
    items: &mut Vec<SetItem>,
) {
    let Some(exercise) = resolve(lookup, &entry.id, &entry.exercise_id) else {
        return;
    };

    if entry.warmup {
        items.push(warmup_set(
            format!("{}-{position}", id_prefix::WARMUP),
            exercise,
        ));
    }

    for index in 0..entry.set_count() {
        items.push(working_set(
            format!("{}-{position}-{index}", id_prefix::SET),
            exercise,
            index + 1,
        ));
    }
}

fn expand_dropdown(
    position: usize,
    entry: &DropdownEntry,
    lookup: &HashMap<&str, &Exercise>,
    items: &mut Vec<SetItem>,
) {
    let Some(exercise) = resolve(lookup, &entry.id, &entry.exercise_id) else {
        return;
    };

    for index in 0..entry.set_count() {
        let tiers = (0..=entry.drop_tiers)
            .map(|tier| {
                DropTier::new(
                    BASELINE_WORKING_WEIGHT - f64::from(tier) * DROP_STEP,
                    DEFAULT_REPS,
                )
            })
            .collect();
        items.push(SetItem::new(
            format!("{}-{position}-{index}", id_prefix::DROPDOWN),
            exercise,
            index + 1,
            SetKind::Dropdown { tiers },
        ));
    }
}

fn expand_superset(
    position: usize,
    entry: &SupersetEntry,
    lookup: &HashMap<&str, &Exercise>,
    items: &mut Vec<SetItem>,
) {
    // (member index, member, exercise) for members present in the catalog
    let members: Vec<_> = entry
        .exercises
        .iter()
        .enumerate()
        .filter_map(|(index, member)| {
            resolve(lookup, &entry.id, &member.exercise_id).map(|ex| (index, member, ex))
        })
        .collect();

    for (index, member, exercise) in &members {
        if member.warmup {
            items.push(
                warmup_set(
                    format!("{}-{position}-{index}", id_prefix::SUPERSET_WARMUP),
                    exercise,
                )
                .in_superset(),
            );
        }
    }

    let rounds = members
        .iter()
        .map(|(_, member, _)| member.set_count())
        .max()
        .unwrap_or(0);

    for round in 0..rounds {
        for (index, member, exercise) in &members {
            if round >= member.set_count() {
                continue;
            }
            items.push(
                working_set(
                    format!("{}-{position}-{index}-{round}", id_prefix::SUPERSET),
                    exercise,
                    round + 1,
                )
                .in_superset(),
            );
        }
    }
}
