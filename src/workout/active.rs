// ABOUTME: Active-workout controller owning the set list of one in-progress session
// ABOUTME: Applies user actions locally, then mirrors them to the session, last-used, and state stores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

//! # Active Workout Controller
//!
//! Every action updates the local set list first. Remote writes follow and
//! never roll the local list back: background failures are logged and the
//! next successful full-snapshot write repairs the remote session. Only
//! `finish` reports store failures to the caller.

use super::persistence::{finish_request, plan_sync, SessionSnapshot, SyncRequest};
use super::state::ActiveWorkoutState;
use crate::stores::{ActiveStateStore, DeleteOutcome, LastUsedStore, WorkoutSessionStore};
use chrono::{DateTime, Utc};
use liftlog_core::calculations::{
    completed_set_count, total_set_count, total_volume, visible_rows,
};
use liftlog_core::errors::{AppError, AppResult, StoreResult};
use liftlog_core::models::{Exercise, WorkoutPreset, WorkoutSession, WorkoutSessionCreate};
use liftlog_core::{
    expand, extra_set_for, new_exercise_set, reconcile, LastUsedData, SetForm, SetItem, SetKind,
    TierForm,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Stores the controller writes through
#[derive(Clone)]
pub struct WorkoutStores {
    /// Remote session aggregate
    pub sessions: Arc<dyn WorkoutSessionStore>,
    /// Cross-device last-used values
    pub last_used: Arc<dyn LastUsedStore>,
    /// Local active-workout pointer
    pub state: Arc<dyn ActiveStateStore>,
}

/// The workout in progress
pub struct ActiveWorkout {
    stores: WorkoutStores,
    preset: WorkoutPreset,
    items: Vec<SetItem>,
    started_at: DateTime<Utc>,
    session_id: Option<String>,
    last_used: HashMap<String, LastUsedData>,
}

impl ActiveWorkout {
    /// Start a fresh workout from `preset`
    #[must_use]
    pub fn start(
        stores: WorkoutStores,
        preset: WorkoutPreset,
        catalog: &[Exercise],
        now: DateTime<Utc>,
    ) -> Self {
        let items = expand(&preset, catalog);
        info!(preset_id = %preset.id, sets = items.len(), "Starting workout");
        Self {
            stores,
            last_used: preset.last_used_weights.clone(),
            preset,
            items,
            started_at: now,
            session_id: None,
        }
    }

    /// Resume a partially saved session against a fresh expansion of `preset`
    #[must_use]
    pub fn resume(
        stores: WorkoutStores,
        preset: WorkoutPreset,
        catalog: &[Exercise],
        session: &WorkoutSession,
    ) -> Self {
        let items = reconcile(&expand(&preset, catalog), &session.sets);
        info!(
            preset_id = %preset.id,
            session_id = %session.id,
            completed = completed_set_count(&items),
            finished = session.is_finished(),
            "Resuming workout"
        );
        Self {
            stores,
            last_used: preset.last_used_weights.clone(),
            preset,
            items,
            started_at: session.started_at,
            session_id: Some(session.id.clone()),
        }
    }

    /// Rebuild a workout from its stored pointer
    #[must_use]
    pub fn restore(stores: WorkoutStores, state: ActiveWorkoutState) -> Self {
        let items = state.items();
        debug!(preset_id = %state.preset.id, sets = items.len(), "Restoring workout");
        Self {
            stores,
            preset: state.preset,
            items,
            started_at: state.start_time,
            session_id: state.workout_session_id,
            last_used: state.last_used,
        }
    }

    /// Restore the stored workout if it was started on the same day as `now`
    ///
    /// A pointer from an earlier day is cleared and treated as absent.
    ///
    /// # Errors
    ///
    /// Returns the store error if the pointer cannot be read
    pub async fn restore_current(
        stores: WorkoutStores,
        now: DateTime<Utc>,
    ) -> StoreResult<Option<Self>> {
        let Some(state) = stores.state.load().await? else {
            return Ok(None);
        };
        if !state.started_same_day(now) {
            info!(started_at = %state.start_time, "Discarding active workout from an earlier day");
            stores.state.clear().await?;
            return Ok(None);
        }
        Ok(Some(Self::restore(stores, state)))
    }

    /// Continue today's stored workout for `preset`, or start a new one
    ///
    /// Stored state from another day or another preset, or state that cannot
    /// be read, is discarded.
    pub async fn open(
        stores: WorkoutStores,
        preset: WorkoutPreset,
        catalog: &[Exercise],
        now: DateTime<Utc>,
    ) -> Self {
        let loaded = stores.state.load().await;
        match loaded {
            Ok(Some(state)) if state.is_resumable(&preset.id, now) => {
                return Self::restore(stores, state);
            }
            Ok(Some(state)) => {
                info!(
                    stored_preset = %state.preset.id,
                    started_at = %state.start_time,
                    "Discarding stale active workout"
                );
                if let Err(e) = stores.state.clear().await {
                    warn!(error = %e, "Failed to clear stale active workout");
                }
            }
            Ok(None) => {}
            Err(e) => warn!(error = %e, "Failed to load active workout, starting fresh"),
        }

        let workout = Self::start(stores, preset, catalog, now);
        workout.save_state().await;
        workout
    }

    /// Preset the workout was built from
    #[must_use]
    pub const fn preset(&self) -> &WorkoutPreset {
        &self.preset
    }

    /// Set list in build order
    #[must_use]
    pub fn items(&self) -> &[SetItem] {
        &self.items
    }

    /// Look up a set by id
    #[must_use]
    pub fn item(&self, item_id: &str) -> Option<&SetItem> {
        self.items.iter().find(|item| item.id == item_id)
    }

    /// Workout start
    #[must_use]
    pub const fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Remote session id, once created
    #[must_use]
    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    /// Values last used for an exercise
    #[must_use]
    pub fn last_used(&self, exercise_id: &str) -> Option<&LastUsedData> {
        self.last_used.get(exercise_id)
    }

    /// Completed and planned set counts, dropdown tiers counted individually
    #[must_use]
    pub fn progress(&self) -> (usize, usize) {
        (
            completed_set_count(&self.items),
            total_set_count(&self.items),
        )
    }

    /// Volume lifted so far (kg)
    #[must_use]
    pub fn total_volume(&self) -> f64 {
        total_volume(&self.items)
    }

    /// Rows to show, collapsed unless the flags ask for full lists
    #[must_use]
    pub fn visible_rows(&self, all_completed: bool, all_pending: bool) -> Vec<&SetItem> {
        visible_rows(&self.items, all_completed, all_pending)
    }

    /// Editor values for a set
    #[must_use]
    pub fn initial_form(&self, item_id: &str) -> Option<SetForm> {
        self.item(item_id)
            .map(|item| item.initial_form(self.last_used.get(&item.exercise_id)))
    }

    /// Editor values for a set with the caller's overrides applied
    ///
    /// Values the caller leaves out keep their prefilled defaults. Tiers
    /// replace the whole form.
    ///
    /// # Errors
    ///
    /// Returns an error if no set has `item_id`, or if tiers are given for a
    /// set that is not a dropdown
    pub fn compose_form(
        &self,
        item_id: &str,
        weight: Option<f64>,
        reps: Option<u32>,
        tiers: Vec<TierForm>,
    ) -> AppResult<SetForm> {
        let item = self
            .item(item_id)
            .ok_or_else(|| AppError::not_found(format!("Set {item_id}")))?;
        if tiers.is_empty() {
            let prefilled = item.initial_form(self.last_used.get(&item.exercise_id));
            return Ok(SetForm {
                weight: weight.or(prefilled.weight),
                reps: reps.unwrap_or(prefilled.reps),
                sub_sets: prefilled.sub_sets,
            });
        }
        if !matches!(item.kind, SetKind::Dropdown { .. }) {
            return Err(AppError::invalid_input(format!(
                "Set {item_id} is not a dropdown set and takes no tiers"
            )));
        }
        Ok(SetForm::tiers(tiers))
    }

    /// Pointer blob for the current workout
    #[must_use]
    pub fn state(&self) -> ActiveWorkoutState {
        ActiveWorkoutState::capture(
            &self.preset,
            &self.items,
            self.started_at,
            self.session_id.as_deref(),
            &self.last_used,
        )
    }

    /// Complete a set with the entered values
    ///
    /// # Errors
    ///
    /// Returns an error if no set has `item_id`
    pub async fn complete_set(
        &mut self,
        item_id: &str,
        form: &SetForm,
        now: DateTime<Utc>,
    ) -> AppResult<()> {
        let index = self.position(item_id)?;
        let completed = self.items[index].apply_form_and_complete(form, now);
        let exercise_id = completed.exercise_id.clone();
        let data = completed.last_used_data(form);
        self.items[index] = completed;

        self.last_used.insert(exercise_id.clone(), data.clone());
        if let Err(e) = self.stores.last_used.set_last_used(&exercise_id, &data).await {
            warn!(exercise_id = %exercise_id, error = %e, "Failed to store last used values");
        }

        self.save_state().await;
        self.sync().await;
        Ok(())
    }

    /// Return a completed set to pending
    ///
    /// # Errors
    ///
    /// Returns an error if no set has `item_id`
    pub async fn uncomplete_set(&mut self, item_id: &str) -> AppResult<()> {
        let index = self.position(item_id)?;
        self.items[index] = self.items[index].mark_uncompleted();
        self.save_state().await;
        self.sync().await;
        Ok(())
    }

    /// Remove a set from the workout
    ///
    /// # Errors
    ///
    /// Returns an error if no set has `item_id`
    pub async fn delete_set(&mut self, item_id: &str) -> AppResult<()> {
        let index = self.position(item_id)?;
        let removed = self.items.remove(index);
        debug!(item_id = %removed.id, exercise_id = %removed.exercise_id, "Deleted set");
        self.save_state().await;
        self.sync().await;
        Ok(())
    }

    /// Change the values of a set without changing its completion
    ///
    /// Dropdown tiers are taken from `form.sub_sets` when present. A completed
    /// set whose values changed is re-sent.
    ///
    /// # Errors
    ///
    /// Returns an error if no set has `item_id`
    pub async fn edit_set(&mut self, item_id: &str, form: &SetForm) -> AppResult<()> {
        let index = self.position(item_id)?;
        let mut edited = self.items[index]
            .with_weight(form.weight)
            .with_reps(form.reps);
        if let Some(tiers) = &form.sub_sets {
            for (tier_index, tier) in tiers.iter().enumerate() {
                edited = edited.with_tier(tier_index, tier.weight, tier.reps);
            }
        }
        let resend = edited.is_fully_completed() && !edited.already_saved;
        self.items[index] = edited;

        self.save_state().await;
        if resend {
            self.sync().await;
        }
        Ok(())
    }

    /// Append an extra set for an exercise already in the workout
    ///
    /// # Errors
    ///
    /// Returns an error if the workout has no set of `exercise_id`
    pub async fn add_extra_set(&mut self, exercise_id: &str) -> AppResult<SetItem> {
        let exercise = self
            .items
            .iter()
            .filter(|item| item.exercise_id == exercise_id)
            .find_map(|item| item.exercise.clone())
            .ok_or_else(|| AppError::not_found(format!("Exercise {exercise_id} in workout")))?;
        let extra = extra_set_for(&exercise, &self.items, self.last_used.get(exercise_id));
        self.items.push(extra.clone());
        self.save_state().await;
        Ok(extra)
    }

    /// Add an exercise that is not part of the preset
    pub async fn add_exercise(&mut self, exercise: &Exercise) -> SetItem {
        let item = new_exercise_set(exercise, &self.items);
        self.items.push(item.clone());
        self.save_state().await;
        item
    }

    /// Mirror the completed sets to the session store
    ///
    /// Creates the session on the first completed set and overwrites its set
    /// list afterwards. A session deleted remotely is recreated. Failures are
    /// logged and leave the local list untouched.
    pub async fn sync(&mut self) {
        let Some(request) = plan_sync(&self.snapshot()) else {
            return;
        };
        let sets = request.sets().len();
        match self.execute(request).await {
            Ok(session) => {
                debug!(session_id = %session.id, sets, "Synced workout session");
                self.mark_saved(&session);
                self.save_state().await;
            }
            Err(e) => warn!(
                session_id = ?self.session_id,
                sets,
                error = %e,
                "Failed to sync workout session"
            ),
        }
    }

    /// Save the full set list with an end time
    ///
    /// Clears the active-workout pointer once the session is stored and
    /// attaches the locally computed volume to the returned session.
    ///
    /// # Errors
    ///
    /// Returns the store error if the session cannot be written
    pub async fn finish(&mut self, now: DateTime<Utc>) -> AppResult<WorkoutSession> {
        let request = finish_request(&self.snapshot(), now);
        let mut session = self.execute(request).await.map_err(|e| {
            warn!(session_id = ?self.session_id, error = %e, "Failed to finish workout");
            AppError::from(e)
        })?;
        self.mark_saved(&session);
        session.total_volume = Some(self.total_volume());

        if let Err(e) = self.stores.state.clear().await {
            warn!(error = %e, "Failed to clear active workout after finishing");
        }
        info!(
            session_id = %session.id,
            sets = session.sets.len(),
            "Finished workout"
        );
        Ok(session)
    }

    /// Abandon the workout
    ///
    /// Deletes the backing session if one exists and always clears the local
    /// pointer. Returns the delete outcome, or `None` when there was no session
    /// or the delete failed.
    pub async fn cancel(self) -> Option<DeleteOutcome> {
        let outcome = match &self.session_id {
            Some(id) => match self.stores.sessions.delete_session(id).await {
                Ok(outcome) => Some(outcome),
                Err(e) => {
                    warn!(session_id = %id, error = %e, "Failed to delete cancelled session");
                    None
                }
            },
            None => None,
        };

        if let Err(e) = self.stores.state.clear().await {
            warn!(error = %e, "Failed to clear cancelled workout");
        }
        info!(preset_id = %self.preset.id, ?outcome, "Cancelled workout");
        outcome
    }

    /// Store the pointer blob; failures are logged
    pub async fn save_state(&self) {
        if let Err(e) = self.stores.state.save(&self.state()).await {
            warn!(error = %e, "Failed to save active workout");
        }
    }

    fn snapshot(&self) -> SessionSnapshot<'_> {
        SessionSnapshot {
            name: &self.preset.name,
            started_at: self.started_at,
            session_id: self.session_id.as_deref(),
            items: &self.items,
        }
    }

    fn position(&self, item_id: &str) -> AppResult<usize> {
        self.items
            .iter()
            .position(|item| item.id == item_id)
            .ok_or_else(|| AppError::not_found(format!("Set {item_id}")))
    }

    async fn execute(&self, request: SyncRequest) -> StoreResult<WorkoutSession> {
        let sessions = &self.stores.sessions;
        match request {
            SyncRequest::Create(payload) => sessions.create_session(&payload).await,
            SyncRequest::Update { id, payload } => {
                let updated = sessions.update_session(&id, &payload).await;
                match updated {
                    Err(e) if e.is_not_found() => {
                        info!(session_id = %id, "Session missing remotely, creating a new one");
                        let create = WorkoutSessionCreate {
                            name: self.preset.name.clone(),
                            started_at: self.started_at,
                            ended_at: payload.ended_at,
                            sets: payload.sets,
                        };
                        sessions.create_session(&create).await
                    }
                    result => result,
                }
            }
        }
    }

    fn mark_saved(&mut self, session: &WorkoutSession) {
        self.session_id = Some(session.id.clone());
        for item in &mut self.items {
            if item.is_fully_completed() {
                item.already_saved = true;
            }
        }
    }
}
