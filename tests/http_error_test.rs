// ABOUTME: Tests for mapping REST backend responses onto store errors
// ABOUTME: Covers not-found, unauthorized, detail extraction, and empty bodies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

#![allow(missing_docs)]

use liftlog::config::ApiConfig;
use liftlog::errors::{AppError, ErrorCode, StoreError};
use liftlog::stores::http::error_for_status;
use liftlog::stores::HttpApiClient;
use reqwest::StatusCode;

#[test]
fn test_not_found_maps_to_not_found() {
    let err = error_for_status(StatusCode::NOT_FOUND, "", "session", "s1");

    assert!(err.is_not_found());
    assert_eq!(err, StoreError::not_found("session", "s1"));
}

#[test]
fn test_unauthorized_maps_to_unauthorized() {
    let err = error_for_status(StatusCode::UNAUTHORIZED, r#"{"detail":"bad token"}"#, "session", "s1");

    assert_eq!(err, StoreError::Unauthorized);
    assert_eq!(AppError::from(err).code, ErrorCode::AuthInvalid);
}

#[test]
fn test_server_detail_is_surfaced() {
    let err = error_for_status(
        StatusCode::BAD_REQUEST,
        r#"{"detail":"sets must not be empty"}"#,
        "session",
        "new",
    );

    assert_eq!(
        err,
        StoreError::Transport("HTTP 400: sets must not be empty".to_owned())
    );
}

#[test]
fn test_plain_body_is_used_without_detail() {
    let err = error_for_status(StatusCode::BAD_GATEWAY, "upstream down\n", "session", "s1");

    assert_eq!(err, StoreError::Transport("HTTP 502: upstream down".to_owned()));
}

#[test]
fn test_empty_body_falls_back_to_reason() {
    let err = error_for_status(StatusCode::INTERNAL_SERVER_ERROR, "", "session", "s1");

    assert_eq!(
        err,
        StoreError::Transport("HTTP 500: Internal Server Error".to_owned())
    );
    assert_eq!(AppError::from(err).code, ErrorCode::ExternalServiceError);
}

#[test]
fn test_client_builds_from_default_config() {
    assert!(HttpApiClient::new(&ApiConfig::default()).is_ok());
}
