// ABOUTME: Environment variable names, REST API paths, and configuration defaults
// ABOUTME: Shared by the config layer, the HTTP adapter, and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

/// Environment variables read at startup
pub mod env_config {
    /// Base URL of the REST backend
    pub const API_URL: &str = "LIFTLOG_API_URL";
    /// Bearer token sent with every request
    pub const API_TOKEN: &str = "LIFTLOG_API_TOKEN";
    /// Request timeout in seconds
    pub const HTTP_TIMEOUT_SECS: &str = "LIFTLOG_HTTP_TIMEOUT_SECS";
    /// Connect timeout in seconds
    pub const HTTP_CONNECT_TIMEOUT_SECS: &str = "LIFTLOG_HTTP_CONNECT_TIMEOUT_SECS";
    /// Directory holding the active-workout state file
    pub const STATE_DIR: &str = "LIFTLOG_STATE_DIR";
    /// Deployment environment (development, production, testing)
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Log output format (json, pretty, compact)
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
}

/// Configuration defaults
pub mod defaults {
    /// Local development backend
    pub const API_URL: &str = "http://localhost:8000";
    /// Request timeout in seconds
    pub const HTTP_TIMEOUT_SECS: u64 = 30;
    /// Connect timeout in seconds
    pub const HTTP_CONNECT_TIMEOUT_SECS: u64 = 10;
    /// Directory name under the platform data dir
    pub const STATE_DIR_NAME: &str = "liftlog";
    /// Active-workout state file name
    pub const STATE_FILE_NAME: &str = "active_workout.json";
}

/// REST backend routes
pub mod api_paths {
    /// Exercise catalog
    pub const EXERCISES: &str = "/api/workouts/exercises/";
    /// Workout session collection; members live at `{SESSIONS}{id}/`
    pub const SESSIONS: &str = "/api/workouts/sessions/";
    /// Per-exercise last-used values; members live at `{EXERCISE_SETTINGS}{exercise_id}/`
    pub const EXERCISE_SETTINGS: &str = "/api/auth/exercise-settings/";
}

/// Service identity used in logs
pub mod service_names {
    /// Service name
    pub const LIFTLOG: &str = "liftlog";
}
