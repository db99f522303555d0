// ABOUTME: Active-workout pointer stored as a JSON file in the local state directory
// ABOUTME: Writes go through a temporary file; unreadable files load as absent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

use super::ActiveStateStore;
use crate::workout::ActiveWorkoutState;
use async_trait::async_trait;
use liftlog_core::errors::{StoreError, StoreResult};
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

/// JSON file holding the active-workout pointer
#[derive(Debug, Clone)]
pub struct FileStateStore {
    path: PathBuf,
}

impl FileStateStore {
    /// Store backed by the file at `path`; parent directories are created on save
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the state file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }
}

fn io_error(action: &str, path: &Path, err: &io::Error) -> StoreError {
    StoreError::Transport(format!("{action} {}: {err}", path.display()))
}

#[async_trait]
impl ActiveStateStore for FileStateStore {
    async fn save(&self, state: &ActiveWorkoutState) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| io_error("create", parent, &e))?;
        }
        let body = serde_json::to_vec_pretty(state)?;
        let temp = self.temp_path();
        fs::write(&temp, body)
            .await
            .map_err(|e| io_error("write", &temp, &e))?;
        fs::rename(&temp, &self.path)
            .await
            .map_err(|e| io_error("replace", &self.path, &e))?;
        debug!(path = %self.path.display(), rows = state.set_rows.len(), "Saved active workout");
        Ok(())
    }

    async fn load(&self) -> StoreResult<Option<ActiveWorkoutState>> {
        let body = match fs::read(&self.path).await {
            Ok(body) => body,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(io_error("read", &self.path, &e)),
        };
        match serde_json::from_slice(&body) {
            Ok(state) => Ok(Some(state)),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Ignoring unreadable active workout");
                Ok(None)
            }
        }
    }

    async fn clear(&self) -> StoreResult<()> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_error("remove", &self.path, &e)),
        }
    }
}
