// ABOUTME: Environment configuration for the backend client and local state directory
// ABOUTME: Parses LIFTLOG_* variables into typed settings with defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

//! Environment-based configuration

use super::types::Environment;
use crate::constants::{defaults, env_config};
use liftlog_core::errors::{AppError, AppResult};
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

/// REST backend settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL without a trailing slash
    pub base_url: String,
    /// Bearer token, passed through verbatim
    pub token: Option<String>,
    /// Whole-request timeout
    pub timeout: Duration,
    /// Connection establishment timeout
    pub connect_timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::API_URL.to_owned(),
            token: None,
            timeout: Duration::from_secs(defaults::HTTP_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(defaults::HTTP_CONNECT_TIMEOUT_SECS),
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiftlogConfig {
    /// Deployment environment
    pub environment: Environment,
    /// REST backend settings
    pub api: ApiConfig,
    /// Directory holding the active-workout state file
    pub state_dir: PathBuf,
}

impl LiftlogConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a timeout is not a whole number of
    /// seconds or the API URL is not an http(s) URL
    pub fn from_env() -> AppResult<Self> {
        let environment = env::var(env_config::ENVIRONMENT)
            .map(|v| Environment::from_str_or_default(&v))
            .unwrap_or_default();

        let base_url = env_var_or(env_config::API_URL, defaults::API_URL);
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(AppError::config(format!(
                "{} must be an http(s) URL, got '{base_url}'",
                env_config::API_URL
            )));
        }

        let api = ApiConfig {
            base_url: base_url.trim_end_matches('/').to_owned(),
            token: env::var(env_config::API_TOKEN)
                .ok()
                .map(|t| t.trim().to_owned())
                .filter(|t| !t.is_empty()),
            timeout: parse_secs(env_config::HTTP_TIMEOUT_SECS, defaults::HTTP_TIMEOUT_SECS)?,
            connect_timeout: parse_secs(
                env_config::HTTP_CONNECT_TIMEOUT_SECS,
                defaults::HTTP_CONNECT_TIMEOUT_SECS,
            )?,
        };

        let state_dir = env::var(env_config::STATE_DIR)
            .ok()
            .filter(|d| !d.is_empty())
            .map_or_else(default_state_dir, PathBuf::from);

        let config = Self {
            environment,
            api,
            state_dir,
        };
        config.log_summary();
        Ok(config)
    }

    /// Path of the active-workout state file
    #[must_use]
    pub fn state_file(&self) -> PathBuf {
        self.state_dir.join(defaults::STATE_FILE_NAME)
    }

    fn log_summary(&self) {
        info!(
            environment = %self.environment,
            api_url = %self.api.base_url,
            authenticated = self.api.token.is_some(),
            state_dir = %self.state_dir.display(),
            "Configuration loaded"
        );
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn parse_secs(key: &str, default: u64) -> AppResult<Duration> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|e| AppError::config(format!("{key} must be a number of seconds: {e}"))),
        Err(_) => Ok(Duration::from_secs(default)),
    }
}

fn default_state_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(defaults::STATE_DIR_NAME)
}
