// ABOUTME: Errors reported by persistence collaborators (session store, state pointer)
// ABOUTME: Distinguishes recoverable NotFound from transport and auth failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

use thiserror::Error;

/// Failure reported by a remote or local store
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The addressed record does not exist on the store side
    #[error("{resource} '{id}' not found")]
    NotFound {
        /// Kind of record (session, exercise, state)
        resource: &'static str,
        /// Identifier that was looked up
        id: String,
    },
    /// Credentials missing or rejected
    #[error("unauthorized")]
    Unauthorized,
    /// Network failure or unexpected response status
    #[error("transport error: {0}")]
    Transport(String),
    /// Payload could not be encoded or decoded
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl StoreError {
    /// Create a "not found" error
    #[must_use]
    pub fn not_found(resource: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource,
            id: id.into(),
        }
    }

    /// Whether this error means the record is absent remotely
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Result alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;
