// ABOUTME: Tests for overlaying persisted session sets onto a fresh preset expansion
// ABOUTME: Positional matching per exercise and type, legacy records, and excess records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

#![allow(missing_docs, clippy::unwrap_used, clippy::float_cmp)]

mod common;

use common::{at, catalog, record};
use liftlog_core::models::{
    DropdownEntry, PresetEntry, SetType, StandaloneEntry, SupersetEntry, SupersetMember,
    WorkoutPreset,
};
use liftlog_core::{expand, reconcile, SetItem, SetKind};

fn three_bench_sets() -> Vec<SetItem> {
    let preset = WorkoutPreset::new("p1", "Chest")
        .with_entry(PresetEntry::Normal(StandaloneEntry::new("e1", "ex1", 3)));
    expand(&preset, &catalog())
}

#[test]
fn test_resume_marks_first_slot_completed() {
    let persisted = vec![record(
        "srv-1",
        "ex1",
        Some(SetType::Normal),
        Some(100.0),
        5,
        Some(at(9, 0)),
    )];

    let items = reconcile(&three_bench_sets(), &persisted);

    assert_eq!(items.len(), 3);
    assert!(items[0].completed);
    assert_eq!(items[0].weight(), Some(100.0));
    assert_eq!(items[0].reps(), 5);
    assert_eq!(items[0].completed_at, Some(at(9, 0)));
    assert!(items[0].already_saved);
    assert_eq!(items[0].original_workout_set_id.as_deref(), Some("srv-1"));
    assert!(!items[1].completed);
    assert!(!items[2].completed);
    assert_eq!(items[1].weight(), Some(60.0));
}

#[test]
fn test_reconciled_records_round_trip_without_reemitting() {
    let persisted = vec![
        record("srv-1", "ex1", Some(SetType::Normal), Some(100.0), 5, Some(at(9, 0))),
        record("srv-2", "ex1", Some(SetType::Normal), Some(95.0), 6, Some(at(9, 4))),
    ];

    let items = reconcile(&three_bench_sets(), &persisted);

    let delta: Vec<_> = items.iter().flat_map(|i| i.to_workout_sets(at(8, 0))).collect();
    assert!(delta.is_empty());

    let snapshot: Vec<_> = items.iter().filter_map(|i| i.persisted_set(at(8, 0))).collect();
    assert_eq!(snapshot, persisted);
}

#[test]
fn test_records_match_by_exercise_not_position() {
    let preset = WorkoutPreset::new("p1", "Upper")
        .with_entry(PresetEntry::Normal(StandaloneEntry::new("e1", "ex1", 2)))
        .with_entry(PresetEntry::Normal(StandaloneEntry::new("e2", "ex2", 2)));
    let persisted = vec![
        record("r1", "ex2", Some(SetType::Normal), Some(12.0), 15, Some(at(9, 0))),
        record("r2", "ex1", Some(SetType::Normal), Some(80.0), 8, Some(at(9, 5))),
    ];

    let items = reconcile(&expand(&preset, &catalog()), &persisted);

    let completed: Vec<(&str, u32)> = items
        .iter()
        .filter(|i| i.completed)
        .map(|i| (i.exercise_id.as_str(), i.set_number))
        .collect();
    assert_eq!(completed, vec![("ex1", 1), ("ex2", 1)]);
    assert_eq!(items[2].weight(), Some(12.0));
}

#[test]
fn test_warmup_only_accepts_warmup_records() {
    let preset = WorkoutPreset::new("p1", "Chest").with_entry(PresetEntry::Normal(
        StandaloneEntry::new("e1", "ex1", 2).with_warmup(),
    ));
    let persisted = vec![
        record("r1", "ex1", None, Some(70.0), 8, Some(at(9, 0))),
        record("r2", "ex1", Some(SetType::Warmup), Some(30.0), 12, Some(at(8, 50))),
    ];

    let items = reconcile(&expand(&preset, &catalog()), &persisted);

    assert!(matches!(items[0].kind, SetKind::Warmup { .. }));
    assert_eq!(items[0].original_workout_set_id.as_deref(), Some("r2"));
    assert_eq!(items[0].reps(), 12);
    assert_eq!(items[1].original_workout_set_id.as_deref(), Some("r1"));
    assert!(!items[2].completed);
}

#[test]
fn test_bodyweight_accepts_legacy_untyped_records() {
    let preset = WorkoutPreset::new("p1", "Back")
        .with_entry(PresetEntry::Normal(StandaloneEntry::new("e1", "pullup", 2)));
    let persisted = vec![
        record("r1", "pullup", None, None, 9, Some(at(9, 0))),
        record("r2", "pullup", Some(SetType::Bodyweight), None, 7, Some(at(9, 3))),
    ];

    let items = reconcile(&expand(&preset, &catalog()), &persisted);

    assert_eq!(items[0].reps(), 9);
    assert_eq!(items[1].reps(), 7);
    assert!(items.iter().all(|i| i.already_saved && i.completed));
}

#[test]
fn test_dropdown_accepts_legacy_normal_records() {
    let preset = WorkoutPreset::new("p1", "Shoulders")
        .with_entry(PresetEntry::Dropdown(DropdownEntry::new("e1", "ex2", 2, 2)));
    let persisted = vec![record(
        "r1",
        "ex2",
        Some(SetType::Normal),
        Some(14.0),
        12,
        Some(at(9, 0)),
    )];

    let items = reconcile(&expand(&preset, &catalog()), &persisted);

    let first = &items[0];
    assert!(first.is_fully_completed());
    assert_eq!(first.tiers()[0].weight, 14.0);
    assert_eq!(first.tiers()[1].weight, 57.5);
    assert!(first.tiers().iter().all(|t| t.reps == 12));
    assert!(!items[1].completed);
}

#[test]
fn test_record_without_timestamp_fills_slot_but_stays_pending() {
    let persisted = vec![record("r1", "ex1", Some(SetType::Normal), Some(65.0), 10, None)];

    let items = reconcile(&three_bench_sets(), &persisted);

    assert!(!items[0].completed);
    assert!(!items[0].already_saved);
    assert_eq!(items[0].weight(), Some(65.0));
    assert_eq!(items[0].original_workout_set_id.as_deref(), Some("r1"));
}

#[test]
fn test_excess_records_are_dropped() {
    let persisted: Vec<_> = (0..5)
        .map(|i| {
            record(
                &format!("r{i}"),
                "ex1",
                Some(SetType::Normal),
                Some(60.0),
                10,
                Some(at(9, i)),
            )
        })
        .collect();
    let stray = record("r9", "ex404", Some(SetType::Normal), Some(1.0), 1, Some(at(9, 9)));

    let items = reconcile(&three_bench_sets(), &[persisted, vec![stray]].concat());

    assert_eq!(items.len(), 3);
    assert!(items.iter().all(|i| i.completed));
    assert_eq!(items[2].original_workout_set_id.as_deref(), Some("r2"));
}

#[test]
fn test_superset_slots_reconcile_per_member() {
    let preset = WorkoutPreset::new("p1", "Superset").with_entry(PresetEntry::Superset(
        SupersetEntry::new(
            "s1",
            vec![SupersetMember::new("pullup", 2), SupersetMember::new("ex1", 2)],
        ),
    ));
    let persisted = vec![
        record("r1", "pullup", Some(SetType::Bodyweight), None, 8, Some(at(9, 0))),
        record("r2", "ex1", Some(SetType::Normal), Some(70.0), 8, Some(at(9, 2))),
        record("r3", "pullup", Some(SetType::Bodyweight), None, 6, Some(at(9, 4))),
    ];

    let items = reconcile(&expand(&preset, &catalog()), &persisted);

    let done: Vec<bool> = items.iter().map(|i| i.completed).collect();
    assert_eq!(done, vec![true, true, true, false]);
    assert!(items.iter().all(|i| i.is_superset));
    let indexes: Vec<Option<usize>> = items.iter().map(|i| i.original_index).collect();
    assert_eq!(indexes, vec![Some(0), Some(1), Some(2), Some(3)]);
}

#[test]
fn test_empty_persisted_list_leaves_expansion_untouched() {
    let expanded = three_bench_sets();

    assert_eq!(reconcile(&expanded, &[]), expanded);
}
