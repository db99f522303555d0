// ABOUTME: Local active-workout pointer commands for the liftlog CLI
// ABOUTME: Prints or removes the stored pointer file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

use anyhow::Result;
use liftlog::config::LiftlogConfig;
use liftlog::stores::{ActiveStateStore, FileStateStore};
use liftlog_core::calculations::{completed_set_count, total_set_count};
use tracing::info;

use crate::helpers::display::Output;

/// Print the stored pointer
pub async fn show(config: &LiftlogConfig, output: Output) -> Result<()> {
    let store = FileStateStore::new(config.state_file());
    let Some(state) = store.load().await? else {
        return output.message("No active workout");
    };
    if output.is_json() {
        return output.json(&state);
    }

    let items = state.items();
    println!("Active workout: {} ({})", state.preset.name, state.preset.id);
    println!("   Started: {}", state.start_time.format("%Y-%m-%d %H:%M UTC"));
    println!(
        "   Session: {}",
        state.workout_session_id.as_deref().unwrap_or("not yet created")
    );
    println!(
        "   Progress: {}/{} sets",
        completed_set_count(&items),
        total_set_count(&items)
    );
    println!("   File: {}", store.path().display());
    Ok(())
}

/// Remove the stored pointer
pub async fn clear(config: &LiftlogConfig) -> Result<()> {
    let store = FileStateStore::new(config.state_file());
    store.clear().await?;
    info!(path = %store.path().display(), "Cleared active workout");
    println!("Active workout cleared");
    Ok(())
}
