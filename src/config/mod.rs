// ABOUTME: Configuration module for the liftlog backend client and local state
// ABOUTME: Environment-only configuration with typed values and defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

//! Configuration module
//!
//! - **Environment**: Backend URL, credentials, timeouts, and state directory
//!   read from environment variables
//! - **Types**: Shared configuration enums

/// Configuration read from environment variables
pub mod environment;

/// Shared configuration enums
pub mod types;

pub use environment::{ApiConfig, LiftlogConfig};
pub use types::Environment;
