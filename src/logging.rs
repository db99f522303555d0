// ABOUTME: Logging configuration and structured logging setup
// ABOUTME: Selects the output format and filter directives for the tracing subscriber
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

//! Structured logging configuration
//!
//! Logs go to stderr so that command output on stdout stays machine readable.

use crate::config::Environment;
use crate::constants::{env_config, service_names};
use anyhow::Result;
use std::env;
use std::io;
use tracing::{debug, Level};
use tracing_subscriber::{
    filter::Directive, fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Deployment environment
    pub environment: Environment,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for log shipping
    Json,
    /// Full human-readable format for development
    Pretty,
    /// Compact format for terminals
    Compact,
}

impl LogFormat {
    /// Parse a `LOG_FORMAT` value, defaulting to compact
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            "pretty" => Self::Pretty,
            _ => Self::Compact,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: LogFormat::Compact,
            include_location: false,
            service_name: service_names::LIFTLOG.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: Environment::default(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let environment = env::var(env_config::ENVIRONMENT)
            .map(|v| Environment::from_str_or_default(&v))
            .unwrap_or_default();
        let format = env::var(env_config::LOG_FORMAT).map_or(
            if environment.is_production() {
                LogFormat::Json
            } else {
                LogFormat::Compact
            },
            |v| LogFormat::from_str_or_default(&v),
        );

        Self {
            level: env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
            format,
            include_location: environment.is_production()
                || env::var("LOG_INCLUDE_LOCATION").is_ok(),
            service_name: env::var("SERVICE_NAME")
                .unwrap_or_else(|_| service_names::LIFTLOG.into()),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment,
        }
    }

    /// Override the level, e.g. from a `--verbose` flag
    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        // HTTP client internals stay quiet whatever the requested level
        let env_filter = EnvFilter::new(&self.level)
            .add_directive(directive("hyper=warn", Level::WARN))
            .add_directive(directive("reqwest=warn", Level::WARN));

        let registry = tracing_subscriber::registry().with(env_filter);

        match self.format {
            LogFormat::Json => {
                let layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_target(true)
                    .with_writer(io::stderr)
                    .json();
                registry.with(layer).try_init()?;
            }
            LogFormat::Pretty => {
                let layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_target(true)
                    .with_writer(io::stderr);
                registry.with(layer).try_init()?;
            }
            LogFormat::Compact => {
                let layer = fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(io::stderr);
                registry.with(layer).try_init()?;
            }
        }

        debug!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            log.level = %self.level,
            log.format = ?self.format,
            "Logging initialized"
        );
        Ok(())
    }
}

/// Parse a filter directive, falling back to a bare level
fn directive(spec: &str, fallback: Level) -> Directive {
    spec.parse().unwrap_or_else(|_| fallback.into())
}
