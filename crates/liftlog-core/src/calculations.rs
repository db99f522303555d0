// ABOUTME: Volume totals, set counts, and view ordering for an active workout
// ABOUTME: Dropdown tiers count as individual sets for progress and volume
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

use crate::models::WorkoutSet;
use crate::set_item::{SetItem, SetKind};
use std::cmp::Ordering;

/// Completed sets shown when the completed list is collapsed
pub const COLLAPSED_COMPLETED_ROWS: usize = 2;

/// Pending sets shown when the pending list is collapsed
pub const COLLAPSED_PENDING_ROWS: usize = 3;

/// Total lifted load (kg × reps) across completed sets and completed dropdown tiers
#[must_use]
pub fn total_volume(items: &[SetItem]) -> f64 {
    items
        .iter()
        .map(|item| match &item.kind {
            SetKind::Dropdown { tiers } => tiers
                .iter()
                .filter(|t| t.completed)
                .map(|t| t.weight * f64::from(t.reps))
                .sum::<f64>(),
            _ if item.completed => item
                .weight()
                .map_or(0.0, |w| w * f64::from(item.reps())),
            _ => 0.0,
        })
        .sum()
}

/// Completed sets, counting each completed dropdown tier
#[must_use]
pub fn completed_set_count(items: &[SetItem]) -> usize {
    items
        .iter()
        .map(|item| match &item.kind {
            SetKind::Dropdown { tiers } => tiers.iter().filter(|t| t.completed).count(),
            _ => usize::from(item.completed),
        })
        .sum()
}

/// Planned sets, counting each dropdown tier
#[must_use]
pub fn total_set_count(items: &[SetItem]) -> usize {
    items
        .iter()
        .map(|item| match &item.kind {
            SetKind::Dropdown { tiers } => tiers.len(),
            _ => 1,
        })
        .sum()
}

/// Volume of a persisted session, rounded to one decimal
#[must_use]
pub fn session_volume(sets: &[WorkoutSet]) -> f64 {
    let total: f64 = sets.iter().map(WorkoutSet::volume).sum();
    (total * 10.0).round() / 10.0
}

/// Fully completed sets, oldest completion first
#[must_use]
pub fn completed_in_order(items: &[SetItem]) -> Vec<&SetItem> {
    let mut done: Vec<&SetItem> = items.iter().filter(|i| i.is_fully_completed()).collect();
    done.sort_by(|a, b| match (a.completed_at, b.completed_at) {
        (Some(x), Some(y)) => x.cmp(&y),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    done
}

/// Sets still to do, in their build order
#[must_use]
pub fn pending_in_order(items: &[SetItem]) -> Vec<&SetItem> {
    let mut pending: Vec<&SetItem> = items.iter().filter(|i| !i.is_fully_completed()).collect();
    pending.sort_by_key(|i| i.original_index.unwrap_or(0));
    pending
}

/// Rows to show: the latest completed sets followed by the next pending ones
///
/// Either list is shown in full when its flag is set.
#[must_use]
pub fn visible_rows(items: &[SetItem], all_completed: bool, all_pending: bool) -> Vec<&SetItem> {
    let completed = completed_in_order(items);
    let pending = pending_in_order(items);
    let completed_from = if all_completed {
        0
    } else {
        completed.len().saturating_sub(COLLAPSED_COMPLETED_ROWS)
    };
    let pending_to = if all_pending {
        pending.len()
    } else {
        pending.len().min(COLLAPSED_PENDING_ROWS)
    };
    completed[completed_from..]
        .iter()
        .chain(&pending[..pending_to])
        .copied()
        .collect()
}
