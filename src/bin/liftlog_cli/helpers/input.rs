// ABOUTME: Input helpers for the liftlog CLI
// ABOUTME: Loads presets, catalogs, and sessions from JSON files or the backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

use anyhow::{Context, Result};
use liftlog::stores::{ExerciseCatalog, HttpApiClient, WorkoutSessionStore};
use liftlog_core::models::{Exercise, WorkoutPreset, WorkoutSession};
use liftlog_core::TierForm;
use serde::de::DeserializeOwned;
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// Read and deserialize a JSON file
pub async fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Invalid JSON in {}", path.display()))
}

/// Load a preset file
pub async fn load_preset(path: &Path) -> Result<WorkoutPreset> {
    load_json(path).await
}

/// Load the catalog from a file, or from the backend when no file is given
pub async fn load_catalog(client: &HttpApiClient, path: Option<&Path>) -> Result<Vec<Exercise>> {
    match path {
        Some(path) => load_json(path).await,
        None => {
            debug!("Fetching exercise catalog from backend");
            Ok(client.all_exercises().await?)
        }
    }
}

/// Load a session from a JSON file if `source` names one, otherwise by id
pub async fn load_session(client: &HttpApiClient, source: &str) -> Result<WorkoutSession> {
    let path = Path::new(source);
    if fs::try_exists(path).await.unwrap_or(false) {
        return load_json(path).await;
    }
    debug!(session_id = %source, "Fetching session from backend");
    Ok(client.get_session(source).await?)
}

/// Parse a `WEIGHT:REPS` tier argument
pub fn parse_tier(raw: &str) -> Result<TierForm, String> {
    let (weight, reps) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected WEIGHT:REPS, got '{raw}'"))?;
    let weight = weight
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid tier weight '{weight}': {e}"))?;
    let reps = reps
        .trim()
        .parse::<u32>()
        .map_err(|e| format!("invalid tier reps '{reps}': {e}"))?;
    Ok(TierForm { weight, reps })
}
