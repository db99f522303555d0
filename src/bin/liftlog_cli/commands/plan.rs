// ABOUTME: Read-only planning commands for the liftlog CLI
// ABOUTME: Expands presets, reconciles saved sessions, and computes session volume
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

use anyhow::Result;
use liftlog::config::LiftlogConfig;
use liftlog::stores::HttpApiClient;
use liftlog::workout::{full_snapshot, unsaved_sets};
use liftlog_core::calculations::{completed_set_count, session_volume, total_set_count};
use liftlog_core::{expand, reconcile, SetItem};
use serde_json::json;
use std::path::Path;
use tracing::info;

use crate::helpers::display::Output;
use crate::helpers::input::{load_catalog, load_preset, load_session};

/// Show the sets a preset expands to
pub async fn plan(
    config: &LiftlogConfig,
    output: Output,
    preset_path: &Path,
    catalog_path: Option<&Path>,
) -> Result<()> {
    let client = HttpApiClient::new(&config.api)?;
    let preset = load_preset(preset_path).await?;
    let catalog = load_catalog(&client, catalog_path).await?;

    let items = expand(&preset, &catalog);
    info!(preset_id = %preset.id, sets = items.len(), "Expanded preset");

    let rows: Vec<_> = items.iter().collect();
    output.rows(&preset.name, &rows, (0, total_set_count(&items)))
}

/// Overlay a saved session onto a preset
///
/// Prints the reconciled rows, then the records the next write would carry:
/// the unsaved delta for a new session, or the full snapshot for an existing one.
pub async fn resume(
    config: &LiftlogConfig,
    output: Output,
    preset_path: &Path,
    catalog_path: Option<&Path>,
    session_source: &str,
) -> Result<()> {
    let client = HttpApiClient::new(&config.api)?;
    let preset = load_preset(preset_path).await?;
    let catalog = load_catalog(&client, catalog_path).await?;
    let session = load_session(&client, session_source).await?;

    let items = reconcile(&expand(&preset, &catalog), &session.sets);
    let progress = (completed_set_count(&items), total_set_count(&items));
    info!(
        session_id = %session.id,
        completed = progress.0,
        total = progress.1,
        "Reconciled session"
    );

    let unsaved = unsaved_sets(&items, session.started_at);
    let snapshot = full_snapshot(&items, session.started_at);
    if output.is_json() {
        let rows: Vec<_> = items.iter().map(SetItem::to_plain).collect();
        return output.json(&json!({
            "sessionId": session.id,
            "completed": progress.0,
            "total": progress.1,
            "sets": rows,
            "unsaved": unsaved,
            "snapshot": snapshot,
        }));
    }

    let rows: Vec<_> = items.iter().collect();
    output.rows(&preset.name, &rows, progress)?;
    output.workout_sets("Unsaved", &unsaved)?;
    output.workout_sets("Next update", &snapshot)
}

/// Compute the volume of a saved session
pub async fn volume(config: &LiftlogConfig, output: Output, session_source: &str) -> Result<()> {
    let client = HttpApiClient::new(&config.api)?;
    let session = load_session(&client, session_source).await?;
    let total = session_volume(&session.sets);
    output.session(&session, total)
}
