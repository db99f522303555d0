// ABOUTME: Output formatting helpers for the liftlog CLI
// ABOUTME: Renders set rows, sync payloads, and sessions as text or JSON on stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

use anyhow::Result;
use liftlog_core::models::{WorkoutSession, WorkoutSet};
use liftlog_core::{DisplayFragment, SetItem, SetKind};
use serde::Serialize;
use serde_json::json;

/// Output mode selected by `--json`
#[derive(Debug, Clone, Copy)]
pub struct Output {
    json: bool,
}

impl Output {
    pub const fn new(json: bool) -> Self {
        Self { json }
    }

    pub const fn is_json(self) -> bool {
        self.json
    }

    /// Print a value as pretty JSON
    pub fn json<T: Serialize + ?Sized>(self, value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }

    /// Print set rows with a progress header
    pub fn rows(self, title: &str, rows: &[&SetItem], progress: (usize, usize)) -> Result<()> {
        if self.json {
            let plain: Vec<_> = rows.iter().map(|item| item.to_plain()).collect();
            return self.json(&json!({
                "title": title,
                "completed": progress.0,
                "total": progress.1,
                "sets": plain,
            }));
        }

        println!("{title}  ({}/{} sets)", progress.0, progress.1);
        println!("{}", "-".repeat(72));
        for item in rows {
            println!("{}", row_line(item));
        }
        Ok(())
    }

    /// Print the records a write would carry
    pub fn workout_sets(self, title: &str, sets: &[WorkoutSet]) -> Result<()> {
        if self.json {
            return self.json(&json!({ "title": title, "sets": sets }));
        }
        println!("{title}: {} set(s)", sets.len());
        for set in sets {
            let set_type = set.set_type.map_or_else(|| "-".to_owned(), |t| t.to_string());
            let weight = set
                .weight
                .map_or_else(|| "bw".to_owned(), |w| format!("{w} kg"));
            println!(
                "  {:<24} {:<10} {:>9} x {:<3} {}",
                set.exercise_id,
                set_type,
                weight,
                set.reps,
                set.logged_at
                    .map_or_else(String::new, |t| t.format("%H:%M").to_string())
            );
        }
        Ok(())
    }

    /// Print a stored session summary
    pub fn session(self, session: &WorkoutSession, volume: f64) -> Result<()> {
        if self.json {
            return self.json(&json!({
                "id": session.id,
                "name": session.name,
                "startedAt": session.started_at,
                "endedAt": session.ended_at,
                "sets": session.sets.len(),
                "totalVolume": volume,
            }));
        }
        println!("Session {} ({})", session.id, session.name);
        println!("   Started: {}", session.started_at.format("%Y-%m-%d %H:%M UTC"));
        if let Some(ended) = session.ended_at {
            println!("   Ended:   {}", ended.format("%Y-%m-%d %H:%M UTC"));
        }
        println!("   Sets:    {}", session.sets.len());
        println!("   Volume:  {volume} kg");
        Ok(())
    }

    /// Print a one-line status message
    pub fn message(self, message: &str) -> Result<()> {
        if self.json {
            return self.json(&json!({ "message": message }));
        }
        println!("{message}");
        Ok(())
    }
}

fn row_line(item: &SetItem) -> String {
    let status = if item.is_fully_completed() {
        "done"
    } else if item.completed {
        "partial"
    } else {
        "pending"
    };
    let detail = if item.completed {
        item.completed_display()
            .iter()
            .map(DisplayFragment::to_string)
            .collect::<Vec<_>>()
            .join("  ")
    } else {
        planned(item)
    };
    let mut flags = String::new();
    if item.is_superset {
        flags.push_str(" [superset]");
    }
    if item.is_extra {
        flags.push_str(" [extra]");
    }
    format!(
        "{:>3}  {:<24} {:<20} {:<8} {detail}{flags}",
        item.set_display_label(),
        item.id,
        item.exercise_name,
        status
    )
}

fn planned(item: &SetItem) -> String {
    match &item.kind {
        SetKind::Warmup { weight, reps } | SetKind::Normal { weight, reps } => match weight {
            Some(w) if !item.is_bodyweight => format!("{w} kg x {reps}"),
            _ => format!("{reps} reps"),
        },
        SetKind::Bodyweight { reps } => format!("{reps} reps"),
        SetKind::Dropdown { tiers } => tiers
            .iter()
            .map(|tier| format!("{}kg x {}", tier.weight, tier.reps))
            .collect::<Vec<_>>()
            .join(" > "),
    }
}
