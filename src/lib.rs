// ABOUTME: Main library entry point for the liftlog active-workout tracker
// ABOUTME: Wires the pure domain crate to async stores, configuration, and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

#![deny(unsafe_code)]

//! # Liftlog
//!
//! Tracks an in-progress strength workout: expands a preset into planned sets,
//! resumes a partially saved session, and keeps the remote session in step with
//! the sets completed locally.
//!
//! ## Architecture
//!
//! - **`liftlog_core`**: Pure domain (set items, expansion, reconciliation, volume)
//! - **stores**: Async ports for the catalog, session, last-used, and
//!   active-state stores, with in-memory, HTTP, and file adapters
//! - **workout**: The active-workout controller and its persistence policy
//! - **config**: Environment-based configuration
//! - **logging**: `tracing` subscriber setup
//!
//! ## Example
//!
//! ```rust,no_run
//! use liftlog::config::LiftlogConfig;
//! use liftlog::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = LiftlogConfig::from_env()?;
//!     println!("Backend at {}", config.api.base_url);
//!     Ok(())
//! }
//! ```

/// Environment-based configuration
pub mod config;

/// Environment variable names, API paths, and defaults
pub mod constants;

/// Structured logging setup
pub mod logging;

/// Store ports and their adapters
pub mod stores;

/// Active-workout controller and persistence policy
pub mod workout;

pub use liftlog_core::{calculations, errors, expansion, models, reconcile, set_item};
