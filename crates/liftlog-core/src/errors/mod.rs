// ABOUTME: Unified error handling for the liftlog workspace
// ABOUTME: ErrorCode taxonomy, AppError for callers, and StoreError for persistence adapters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

//! # Error Types
//!
//! - `StoreError` - failures reported by persistence collaborators
//! - `AppError` - coded error surfaced to the CLI and configuration layers

mod store;

pub use store::{StoreError, StoreResult};

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Caller supplied malformed input (preset, session, form)
    InvalidInput,
    /// Remote or local resource does not exist
    ResourceNotFound,
    /// Remote store rejected the credentials
    AuthInvalid,
    /// Remote store could not be reached or answered with an error
    ExternalServiceError,
    /// Configuration value could not be parsed
    ConfigInvalid,
    /// Stored data could not be (de)serialized
    SerializationError,
}

impl ErrorCode {
    /// Short human description of the code
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "Invalid input",
            Self::ResourceNotFound => "Resource not found",
            Self::AuthInvalid => "Authentication rejected",
            Self::ExternalServiceError => "External service error",
            Self::ConfigInvalid => "Invalid configuration",
            Self::SerializationError => "Serialization error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Application error carrying a code and a message
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{code}: {message}")]
pub struct AppError {
    /// Error classification
    pub code: ErrorCode,
    /// Human-readable detail
    pub message: String,
}

impl AppError {
    /// Create a new error with the given code
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Invalid caller input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Missing resource
    #[must_use]
    pub fn not_found(resource: impl fmt::Display) -> Self {
        Self::new(ErrorCode::ResourceNotFound, format!("{resource} not found"))
    }

    /// Invalid configuration value
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        let code = match &err {
            StoreError::NotFound { .. } => ErrorCode::ResourceNotFound,
            StoreError::Unauthorized => ErrorCode::AuthInvalid,
            StoreError::Transport(_) => ErrorCode::ExternalServiceError,
            StoreError::Serialization(_) => ErrorCode::SerializationError,
        };
        Self::new(code, err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, err.to_string())
    }
}

/// Result alias using `AppError`
pub type AppResult<T> = Result<T, AppError>;
