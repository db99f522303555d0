// ABOUTME: Unit tests for environment configuration and logging setup
// ABOUTME: Validates defaults, URL and timeout parsing, and format selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

#![allow(clippy::unwrap_used)]
#![allow(missing_docs)]

use liftlog::config::{Environment, LiftlogConfig};
use liftlog::constants::{defaults, env_config};
use liftlog::errors::ErrorCode;
use liftlog::logging::{LogFormat, LoggingConfig};
use serial_test::serial;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

const VARS: [&str; 6] = [
    env_config::API_URL,
    env_config::API_TOKEN,
    env_config::HTTP_TIMEOUT_SECS,
    env_config::HTTP_CONNECT_TIMEOUT_SECS,
    env_config::STATE_DIR,
    env_config::ENVIRONMENT,
];

fn reset_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_environment_parsing() {
    assert_eq!(
        Environment::from_str_or_default("PROD"),
        Environment::Production
    );
    assert_eq!(
        Environment::from_str_or_default("test"),
        Environment::Testing
    );
    assert_eq!(
        Environment::from_str_or_default("invalid"),
        Environment::Development
    );
}

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::from_str_or_default("JSON"), LogFormat::Json);
    assert_eq!(LogFormat::from_str_or_default("pretty"), LogFormat::Pretty);
    assert_eq!(LogFormat::from_str_or_default("other"), LogFormat::Compact);
    assert_eq!(LoggingConfig::default().level, "warn");
    assert_eq!(LoggingConfig::default().with_level("debug").level, "debug");
}

#[test]
#[serial]
fn test_defaults_apply_without_environment() {
    reset_env();

    let config = LiftlogConfig::from_env().unwrap();

    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.api.base_url, defaults::API_URL);
    assert_eq!(config.api.token, None);
    assert_eq!(
        config.api.timeout,
        Duration::from_secs(defaults::HTTP_TIMEOUT_SECS)
    );
    assert!(config.state_file().ends_with(defaults::STATE_FILE_NAME));
}

#[test]
#[serial]
fn test_environment_overrides_are_parsed() {
    reset_env();
    env::set_var(env_config::API_URL, "https://api.example.com/");
    env::set_var(env_config::API_TOKEN, "  abc123 ");
    env::set_var(env_config::HTTP_TIMEOUT_SECS, "5");
    env::set_var(env_config::STATE_DIR, "/tmp/liftlog-test");

    let config = LiftlogConfig::from_env().unwrap();
    reset_env();

    assert_eq!(config.api.base_url, "https://api.example.com");
    assert_eq!(config.api.token.as_deref(), Some("abc123"));
    assert_eq!(config.api.timeout, Duration::from_secs(5));
    assert_eq!(
        config.state_file(),
        PathBuf::from("/tmp/liftlog-test").join(defaults::STATE_FILE_NAME)
    );
}

#[test]
#[serial]
fn test_blank_token_is_ignored() {
    reset_env();
    env::set_var(env_config::API_TOKEN, "   ");

    let config = LiftlogConfig::from_env().unwrap();
    reset_env();

    assert_eq!(config.api.token, None);
}

#[test]
#[serial]
fn test_invalid_timeout_is_rejected() {
    reset_env();
    env::set_var(env_config::HTTP_CONNECT_TIMEOUT_SECS, "ten");

    let err = LiftlogConfig::from_env().unwrap_err();
    reset_env();

    assert_eq!(err.code, ErrorCode::ConfigInvalid);
    assert!(err.message.contains(env_config::HTTP_CONNECT_TIMEOUT_SECS));
}

#[test]
#[serial]
fn test_non_http_url_is_rejected() {
    reset_env();
    env::set_var(env_config::API_URL, "ftp://example.com");

    let err = LiftlogConfig::from_env().unwrap_err();
    reset_env();

    assert_eq!(err.code, ErrorCode::ConfigInvalid);
}
