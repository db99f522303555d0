// ABOUTME: Tests for workout volume, set counts, and collapsed row ordering
// ABOUTME: Dropdown tiers count individually toward progress and volume
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

#![allow(missing_docs, clippy::unwrap_used, clippy::float_cmp)]

mod common;

use common::{at, catalog, record};
use liftlog_core::calculations::{
    completed_in_order, completed_set_count, pending_in_order, session_volume, total_set_count,
    total_volume, visible_rows,
};
use liftlog_core::models::{DropdownEntry, PresetEntry, SetType, StandaloneEntry, WorkoutPreset};
use liftlog_core::{expand, SetItem, SetKind};

fn mixed_items() -> Vec<SetItem> {
    let preset = WorkoutPreset::new("p1", "Mixed")
        .with_entry(PresetEntry::Normal(StandaloneEntry::new("e1", "ex1", 2)))
        .with_entry(PresetEntry::Dropdown(DropdownEntry::new("e2", "ex2", 1, 2)))
        .with_entry(PresetEntry::Normal(StandaloneEntry::new("e3", "pullup", 1)));
    expand(&preset, &catalog())
}

#[test]
fn test_counts_treat_tiers_as_sets() {
    let items = mixed_items();

    assert_eq!(total_set_count(&items), 2 + 3 + 1);
    assert_eq!(completed_set_count(&items), 0);

    let done: Vec<SetItem> = items.iter().map(|i| i.mark_completed(at(9, 0))).collect();
    assert_eq!(completed_set_count(&done), 6);
}

#[test]
fn test_total_volume_counts_completed_work_only() {
    let mut items = mixed_items();
    items[0] = items[0].mark_completed(at(9, 0));
    items[2] = items[2].mark_completed(at(9, 5));
    items[3] = items[3].mark_completed(at(9, 9));

    // 60×10 + (60 + 57.5 + 55)×10, bodyweight adds nothing
    assert_eq!(total_volume(&items), 600.0 + 1725.0);
}

#[test]
fn test_partially_completed_dropdown_adds_its_completed_tiers() {
    let mut items = mixed_items();
    if let SetKind::Dropdown { tiers } = &mut items[2].kind {
        tiers[0].completed = true;
    }

    assert_eq!(total_volume(&items), 600.0);
    assert_eq!(completed_set_count(&items), 1);
}

#[test]
fn test_session_volume_rounds_to_one_decimal() {
    let sets = vec![
        record("r1", "ex1", Some(SetType::Normal), Some(22.33), 3, Some(at(9, 0))),
        record("r2", "pullup", Some(SetType::Bodyweight), None, 10, Some(at(9, 5))),
    ];

    assert_eq!(session_volume(&sets), 67.0);
}

#[test]
fn test_completed_rows_sorted_by_completion_time() {
    let mut items = mixed_items();
    items[1] = items[1].mark_completed(at(9, 0));
    items[0] = items[0].mark_completed(at(9, 10));

    let ids: Vec<&str> = completed_in_order(&items).iter().map(|i| i.id.as_str()).collect();

    assert_eq!(ids, vec![items[1].id.as_str(), items[0].id.as_str()]);
}

#[test]
fn test_pending_rows_follow_original_index() {
    let mut items = mixed_items();
    items.reverse();

    let order: Vec<Option<usize>> = pending_in_order(&items)
        .iter()
        .map(|i| i.original_index)
        .collect();

    assert_eq!(order, vec![Some(0), Some(1), Some(2), Some(3)]);
}

#[test]
fn test_visible_rows_collapse_both_lists() {
    let preset = WorkoutPreset::new("p1", "Volume")
        .with_entry(PresetEntry::Normal(StandaloneEntry::new("e1", "ex1", 8)));
    let mut items = expand(&preset, &catalog());
    for (minute, item) in items.iter_mut().take(3).enumerate() {
        *item = item.mark_completed(at(9, u32::try_from(minute).unwrap()));
    }

    let collapsed: Vec<u32> = visible_rows(&items, false, false)
        .iter()
        .map(|i| i.set_number)
        .collect();
    assert_eq!(collapsed, vec![2, 3, 4, 5, 6]);

    assert_eq!(visible_rows(&items, true, true).len(), 8);
    assert_eq!(visible_rows(&items, true, false).len(), 6);
}
