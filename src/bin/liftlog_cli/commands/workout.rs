// ABOUTME: Active workout commands for the liftlog CLI
// ABOUTME: Restores the workout from the local pointer, applies one action, and syncs to the backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

use anyhow::{anyhow, Result};
use chrono::Utc;
use liftlog::config::LiftlogConfig;
use liftlog::stores::{DeleteOutcome, FileStateStore, HttpApiClient};
use liftlog::workout::{ActiveWorkout, WorkoutStores};
use liftlog_core::errors::AppError;
use liftlog_core::{SetForm, TierForm};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use crate::helpers::display::Output;
use crate::helpers::input::{load_catalog, load_preset};

/// Stores and output shared by the workout commands
pub struct WorkoutContext {
    client: Arc<HttpApiClient>,
    stores: WorkoutStores,
    output: Output,
}

impl WorkoutContext {
    pub fn new(config: &LiftlogConfig, output: Output) -> Result<Self> {
        let client = Arc::new(HttpApiClient::new(&config.api)?);
        let stores = WorkoutStores {
            sessions: client.clone(),
            last_used: client.clone(),
            state: Arc::new(FileStateStore::new(config.state_file())),
        };
        Ok(Self {
            client,
            stores,
            output,
        })
    }

    /// Start a workout, or continue today's workout for the same preset
    pub async fn start(&self, preset_path: &Path, catalog_path: Option<&Path>) -> Result<()> {
        let preset = load_preset(preset_path).await?;
        let catalog = load_catalog(&self.client, catalog_path).await?;
        let workout = ActiveWorkout::open(self.stores.clone(), preset, &catalog, Utc::now()).await;
        self.print(&workout, true, true)
    }

    /// Show the active workout
    pub async fn show(&self, all_completed: bool, all_pending: bool) -> Result<()> {
        let workout = self.active().await?;
        self.print(&workout, all_completed, all_pending)
    }

    /// Complete a set, prefilling values the caller did not give
    pub async fn complete(
        &self,
        set_id: &str,
        weight: Option<f64>,
        reps: Option<u32>,
        tiers: Vec<TierForm>,
    ) -> Result<()> {
        let mut workout = self.active().await?;
        let form = workout.compose_form(set_id, weight, reps, tiers)?;

        workout.complete_set(set_id, &form, Utc::now()).await?;
        info!(set_id = %set_id, session_id = ?workout.session_id(), "Completed set");
        self.print(&workout, false, false)
    }

    /// Change a set's values, keeping those the caller did not give
    pub async fn edit(
        &self,
        set_id: &str,
        weight: Option<f64>,
        reps: Option<u32>,
        tiers: Vec<TierForm>,
    ) -> Result<()> {
        let mut workout = self.active().await?;
        let item = workout
            .item(set_id)
            .ok_or_else(|| AppError::not_found(format!("Set {set_id}")))?;
        let form = SetForm {
            weight: weight.or_else(|| item.weight()),
            reps: reps.unwrap_or_else(|| item.reps()),
            sub_sets: (!tiers.is_empty()).then_some(tiers),
        };

        workout.edit_set(set_id, &form).await?;
        self.print(&workout, false, false)
    }

    /// Return a completed set to pending
    pub async fn uncomplete(&self, set_id: &str) -> Result<()> {
        let mut workout = self.active().await?;
        workout.uncomplete_set(set_id).await?;
        self.print(&workout, false, false)
    }

    /// Remove a set
    pub async fn delete(&self, set_id: &str) -> Result<()> {
        let mut workout = self.active().await?;
        workout.delete_set(set_id).await?;
        self.print(&workout, false, false)
    }

    /// Append another set of an exercise already in the workout
    pub async fn extra(&self, exercise_id: &str) -> Result<()> {
        let mut workout = self.active().await?;
        let added = workout.add_extra_set(exercise_id).await?;
        info!(set_id = %added.id, exercise_id = %exercise_id, "Added extra set");
        self.print(&workout, false, true)
    }

    /// Add a catalog exercise to the workout
    pub async fn add_exercise(&self, exercise_id: &str, catalog_path: Option<&Path>) -> Result<()> {
        let mut workout = self.active().await?;
        let catalog = load_catalog(&self.client, catalog_path).await?;
        let exercise = catalog
            .iter()
            .find(|exercise| exercise.id == exercise_id)
            .ok_or_else(|| AppError::not_found(format!("Exercise {exercise_id}")))?;
        let added = workout.add_exercise(exercise).await;
        info!(set_id = %added.id, exercise_id = %exercise_id, "Added exercise");
        self.print(&workout, false, true)
    }

    /// Save the workout with an end time
    pub async fn finish(&self) -> Result<()> {
        let mut workout = self.active().await?;
        let session = workout.finish(Utc::now()).await?;
        self.output
            .session(&session, session.total_volume.unwrap_or_default())
    }

    /// Abandon the workout
    pub async fn cancel(&self) -> Result<()> {
        let workout = self.active().await?;
        let message = match workout.cancel().await {
            Some(DeleteOutcome::Deleted) => "Workout cancelled and session deleted",
            Some(DeleteOutcome::NotFound) => "Workout cancelled; session was already gone",
            None => "Workout cancelled",
        };
        self.output.message(message)
    }

    async fn active(&self) -> Result<ActiveWorkout> {
        ActiveWorkout::restore_current(self.stores.clone(), Utc::now())
            .await?
            .ok_or_else(|| anyhow!("No active workout; run `liftlog workout start` first"))
    }

    fn print(&self, workout: &ActiveWorkout, all_completed: bool, all_pending: bool) -> Result<()> {
        let rows = workout.visible_rows(all_completed, all_pending);
        self.output
            .rows(&workout.preset().name, &rows, workout.progress())
    }
}
