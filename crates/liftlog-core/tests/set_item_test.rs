// ABOUTME: Tests for set-item variant behavior: completion, forms, edits, display, and persistence
// ABOUTME: Includes the plain-record round trip used by the active-workout state blob
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

#![allow(missing_docs, clippy::unwrap_used, clippy::float_cmp)]

mod common;

use common::{at, bench_press, catalog, pull_up};
use liftlog_core::models::{DropdownEntry, PresetEntry, SetType, StandaloneEntry, WorkoutPreset};
use liftlog_core::{
    expand, DisplayFragment, DropTier, LastUsedData, PlainSetItem, SetForm, SetItem, SetKind,
    TierForm,
};

fn dropdown_item() -> SetItem {
    let preset = WorkoutPreset::new("p1", "Legs")
        .with_entry(PresetEntry::Dropdown(DropdownEntry::new("e1", "ex1", 1, 2)));
    expand(&preset, &catalog()).remove(0)
}

fn normal_item() -> SetItem {
    SetItem::new(
        "set-0-0",
        &bench_press(),
        1,
        SetKind::Normal {
            weight: Some(60.0),
            reps: 10,
        },
    )
}

fn warmup_item() -> SetItem {
    SetItem::new(
        "warmup-0",
        &bench_press(),
        0,
        SetKind::Warmup {
            weight: Some(30.0),
            reps: 10,
        },
    )
    .with_suggested_weight(Some(30.0))
}

fn bodyweight_item() -> SetItem {
    SetItem::new("set-1-0", &pull_up(), 1, SetKind::Bodyweight { reps: 10 })
}

#[test]
fn test_dropdown_completion_is_all_or_nothing() {
    let item = dropdown_item();
    assert!(!item.is_fully_completed());

    let done = item.mark_completed(at(9, 15));
    assert!(done.completed);
    assert!(done.is_fully_completed());
    assert!(done
        .tiers()
        .iter()
        .all(|t| t.completed && t.completed_at == Some(at(9, 15))));

    let undone = done.mark_uncompleted();
    assert!(!undone.completed);
    assert_eq!(undone.completed_at, None);
    assert!(undone
        .tiers()
        .iter()
        .all(|t| !t.completed && t.completed_at.is_none()));
}

#[test]
fn test_dropdown_with_partial_tiers_is_not_fully_completed() {
    let mut item = dropdown_item().mark_completed(at(9, 15));
    if let SetKind::Dropdown { tiers } = &mut item.kind {
        tiers[2].completed = false;
    }

    assert!(item.completed);
    assert!(!item.is_fully_completed());
    assert!(item.persisted_set(at(9, 0)).is_none());
}

#[test]
fn test_operations_return_new_values() {
    let item = normal_item();
    let done = item.mark_completed(at(9, 30));

    assert!(!item.completed);
    assert!(done.completed);
    assert_eq!(done.completed_at, Some(at(9, 30)));
}

#[test]
fn test_normal_initial_form_prefers_last_used() {
    let item = normal_item();
    let last_used = LastUsedData {
        weight: Some(80.0),
        reps: 5,
        sub_sets: None,
    };

    assert_eq!(item.initial_form(None), SetForm::weighted(60.0, 10));
    assert_eq!(item.initial_form(Some(&last_used)), SetForm::weighted(80.0, 5));
}

#[test]
fn test_warmup_initial_form_prefers_last_used() {
    let last_used = LastUsedData {
        weight: Some(80.0),
        reps: 5,
        sub_sets: None,
    };

    assert_eq!(warmup_item().initial_form(None), SetForm::weighted(30.0, 10));
    assert_eq!(
        warmup_item().initial_form(Some(&last_used)),
        SetForm::weighted(80.0, 5)
    );
}

#[test]
fn test_bodyweight_initial_form_has_reps_only() {
    let last_used = LastUsedData {
        weight: Some(10.0),
        reps: 12,
        sub_sets: None,
    };

    assert_eq!(
        bodyweight_item().initial_form(Some(&last_used)),
        SetForm::reps_only(12)
    );
}

#[test]
fn test_dropdown_initial_form_uses_matching_remembered_tiers() {
    let item = dropdown_item();
    let remembered = vec![
        TierForm { weight: 70.0, reps: 8 },
        TierForm { weight: 65.0, reps: 8 },
        TierForm { weight: 60.0, reps: 6 },
    ];
    let matching = LastUsedData {
        weight: Some(70.0),
        reps: 8,
        sub_sets: Some(remembered.clone()),
    };
    let mismatched = LastUsedData {
        weight: None,
        reps: 8,
        sub_sets: Some(remembered[..2].to_vec()),
    };

    let form = item.initial_form(Some(&matching));
    assert_eq!(form.sub_sets, Some(remembered));
    assert_eq!(form.weight, Some(70.0));

    let fallback = item.initial_form(Some(&mismatched));
    let tiers = fallback.sub_sets.unwrap();
    assert_eq!(tiers.len(), 3);
    assert_eq!(tiers[1], TierForm { weight: 57.5, reps: 10 });
    assert_eq!(fallback.weight, Some(60.0));
}

#[test]
fn test_apply_form_completes_and_clears_saved_flag() {
    let mut item = normal_item();
    item.already_saved = true;

    let done = item.apply_form_and_complete(&SetForm::weighted(90.0, 4), at(10, 0));

    assert!(done.completed);
    assert!(!done.already_saved);
    assert_eq!(done.weight(), Some(90.0));
    assert_eq!(done.reps(), 4);
    assert_eq!(done.completed_at, Some(at(10, 0)));
}

#[test]
fn test_apply_form_on_bodyweight_ignores_weight() {
    let done = bodyweight_item().apply_form_and_complete(&SetForm::weighted(20.0, 15), at(10, 0));

    assert_eq!(done.weight(), None);
    assert_eq!(done.reps(), 15);
    assert!(done.is_bodyweight);
}

#[test]
fn test_apply_form_on_dropdown_writes_every_tier() {
    let form = SetForm::tiers(vec![
        TierForm { weight: 80.0, reps: 8 },
        TierForm { weight: 70.0, reps: 6 },
        TierForm { weight: 60.0, reps: 4 },
    ]);

    let done = dropdown_item().apply_form_and_complete(&form, at(10, 5));

    let tiers: Vec<(f64, u32, bool)> = done
        .tiers()
        .iter()
        .map(|t| (t.weight, t.reps, t.completed))
        .collect();
    assert_eq!(
        tiers,
        vec![(80.0, 8, true), (70.0, 6, true), (60.0, 4, true)]
    );
    assert_eq!(done.weight(), Some(80.0));
    assert_eq!(done.reps(), 8);
}

#[test]
fn test_apply_short_form_on_dropdown_only_touches_first_tier() {
    let done = dropdown_item().apply_form_and_complete(&SetForm::weighted(75.0, 9), at(10, 5));

    assert_eq!(done.tiers()[0].weight, 75.0);
    assert_eq!(done.tiers()[0].reps, 9);
    assert_eq!(done.tiers()[1].weight, 57.5);
    assert!(done.is_fully_completed());
}

#[test]
fn test_last_used_data_per_variant() {
    let form = SetForm::weighted(50.0, 12);

    assert_eq!(bodyweight_item().last_used_data(&form).weight, None);
    assert_eq!(normal_item().last_used_data(&form).weight, Some(50.0));

    let dropdown = dropdown_item().last_used_data(&form);
    assert_eq!(dropdown.sub_sets.map(|s| s.len()), Some(3));
}

#[test]
fn test_edits_clear_saved_flag_only_on_change() {
    let mut item = normal_item().mark_completed(at(9, 0));
    item.already_saved = true;

    assert!(item.with_weight(Some(60.0)).already_saved);
    assert!(item.with_reps(10).already_saved);
    assert!(!item.with_weight(Some(62.5)).already_saved);
    assert!(!item.with_reps(8).already_saved);
}

#[test]
fn test_dropdown_tier_edit() {
    let mut item = dropdown_item().mark_completed(at(9, 0));
    item.already_saved = true;

    let edited = item.with_tier(2, 50.0, 12);
    assert_eq!(edited.tiers()[2].weight, 50.0);
    assert_eq!(edited.tiers()[2].reps, 12);
    assert!(!edited.already_saved);

    let out_of_range = item.with_tier(7, 50.0, 12);
    assert_eq!(out_of_range, item);
}

#[test]
fn test_persisted_set_uses_own_variant_type() {
    let start = at(8, 0);

    let normal = normal_item().mark_completed(at(9, 0)).persisted_set(start).unwrap();
    assert_eq!(normal.set_type, Some(SetType::Normal));
    assert_eq!(normal.id, "set-0-0");
    assert_eq!(normal.logged_at, Some(at(9, 0)));

    let bodyweight = bodyweight_item().mark_completed(at(9, 5)).persisted_set(start).unwrap();
    assert_eq!(bodyweight.set_type, Some(SetType::Bodyweight));
    assert_eq!(bodyweight.weight, None);

    let dropdown = dropdown_item().mark_completed(at(9, 10)).persisted_set(start).unwrap();
    assert_eq!(dropdown.set_type, Some(SetType::Dropdown));
    assert_eq!(dropdown.weight, Some(60.0));
    assert_eq!(dropdown.dropdown_weights.map(|t| t.len()), Some(3));
}

#[test]
fn test_persisted_set_falls_back_to_session_start() {
    let mut item = normal_item();
    item.completed = true;

    let record = item.persisted_set(at(8, 0)).unwrap();

    assert_eq!(record.logged_at, Some(at(8, 0)));
}

#[test]
fn test_persisted_set_keeps_reconciled_record_id() {
    let mut item = normal_item().mark_completed(at(9, 0));
    item.original_workout_set_id = Some("srv-42".to_owned());

    assert_eq!(item.persisted_set(at(8, 0)).unwrap().id, "srv-42");
}

#[test]
fn test_delta_emits_one_record_per_completed_item() {
    let preset = WorkoutPreset::new("p1", "Push")
        .with_entry(PresetEntry::Normal(StandaloneEntry::new("e1", "ex1", 3).with_warmup()))
        .with_entry(PresetEntry::Dropdown(DropdownEntry::new("e2", "ex2", 2, 2)))
        .with_entry(PresetEntry::Normal(StandaloneEntry::new("e3", "pullup", 2)));
    let items: Vec<SetItem> = expand(&preset, &catalog())
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            if i % 2 == 0 {
                item.mark_completed(at(9, 0))
            } else {
                item
            }
        })
        .collect();
    let completed = items.iter().filter(|i| i.is_fully_completed()).count();

    let records: Vec<_> = items.iter().flat_map(|i| i.to_workout_sets(at(8, 0))).collect();

    assert_eq!(records.len(), completed);
    assert!(completed > 0);
}

#[test]
fn test_delta_skips_already_saved() {
    let mut item = normal_item().mark_completed(at(9, 0));
    assert_eq!(item.to_workout_sets(at(8, 0)).len(), 1);

    item.already_saved = true;
    assert!(item.to_workout_sets(at(8, 0)).is_empty());
    assert!(item.persisted_set(at(8, 0)).is_some());
}

#[test]
fn test_completed_display_per_variant() {
    let normal = normal_item().mark_completed(at(9, 7));
    let rendered: Vec<String> = normal
        .completed_display()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(rendered, vec!["60 kg", "10 reps", "09:07"]);

    let warmup = warmup_item().mark_completed(at(9, 1));
    assert_eq!(
        warmup.completed_display(),
        vec![DisplayFragment::Timestamp { time: at(9, 1) }]
    );

    let dropdown = dropdown_item().mark_completed(at(9, 20));
    let rendered: Vec<String> = dropdown
        .completed_display()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(rendered, vec!["60kg x 10", "57.5kg x 10", "55kg x 10", "09:20"]);
}

#[test]
fn test_labels_and_inputs() {
    assert_eq!(warmup_item().badge_label(), "Warmup");
    assert_eq!(bodyweight_item().badge_label(), "BW");
    assert_eq!(dropdown_item().badge_label(), "Dropdown");
    assert_eq!(normal_item().badge_label(), "");

    assert!(!warmup_item().shows_weight_input());
    assert!(!warmup_item().shows_reps_input());
    assert!(!bodyweight_item().shows_weight_input());
    assert!(normal_item().shows_weight_input());
    assert!(dropdown_item().shows_weight_input());
    assert_eq!(normal_item().set_display_label(), "1");
}

#[test]
fn test_plain_round_trip_preserves_variants() {
    let items = vec![
        warmup_item(),
        normal_item().mark_completed(at(9, 0)),
        bodyweight_item(),
        dropdown_item().mark_completed(at(9, 30)),
        dropdown_item(),
    ];

    for item in items {
        let restored = SetItem::from_plain(item.to_plain());
        assert_eq!(restored, item);
    }
}

#[test]
fn test_plain_round_trip_through_json() -> anyhow::Result<()> {
    let item = dropdown_item().mark_completed(at(9, 30));

    let json = serde_json::to_string(&item.to_plain())?;
    assert!(json.contains("\"setType\":\"dropdown\""));
    assert!(json.contains("\"subSets\""));
    let restored: SetItem = serde_json::from_str::<PlainSetItem>(&json)?.into();

    assert_eq!(restored, item);
    Ok(())
}

#[test]
fn test_plain_legacy_rows_default_to_normal() -> anyhow::Result<()> {
    let json = r#"{"id":"a","exerciseId":"ex1","weight":40,"completed":false}"#;

    let item = SetItem::from_plain(serde_json::from_str(json)?);

    assert!(matches!(
        item.kind,
        SetKind::Normal {
            weight: Some(_),
            reps: 10
        }
    ));
    assert_eq!(item.weight(), Some(40.0));

    let unknown = r#"{"id":"b","exerciseId":"ex1","setType":"cluster","reps":3}"#;
    let item = SetItem::from_plain(serde_json::from_str(unknown)?);
    assert_eq!(item.set_type(), SetType::Normal);
    assert_eq!(item.reps(), 3);
    Ok(())
}

#[test]
fn test_plain_dropdown_tiers_follow_parent_completion() {
    let mut plain = dropdown_item().to_plain();
    plain.completed = true;
    plain.completed_at = Some(at(9, 45));
    plain.is_bodyweight = true;

    let item = SetItem::from_plain(plain);

    assert!(!item.is_bodyweight);
    assert!(item
        .tiers()
        .iter()
        .all(|t| t.completed && t.completed_at == Some(at(9, 45))));
    assert_eq!(
        item.tiers()[1],
        DropTier {
            weight: 57.5,
            reps: 10,
            completed: true,
            completed_at: Some(at(9, 45)),
        }
    );
}
