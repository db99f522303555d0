// ABOUTME: REST backend client implementing the catalog, session, and last-used stores
// ABOUTME: Maps HTTP status codes onto StoreError, surfacing the server's detail message
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

//! REST backend client
//!
//! Requests carry the configured bearer token verbatim. 404 maps to
//! `StoreError::NotFound`, 401 to `StoreError::Unauthorized`, and any other
//! non-success status to `StoreError::Transport` with the server's `detail`.

use super::{DeleteOutcome, ExerciseCatalog, LastUsedStore, WorkoutSessionStore};
use crate::config::ApiConfig;
use crate::constants::api_paths;
use async_trait::async_trait;
use liftlog_core::errors::{StoreError, StoreResult};
use liftlog_core::models::{Exercise, WorkoutSession, WorkoutSessionCreate, WorkoutSessionUpdate};
use liftlog_core::LastUsedData;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

const SESSION: &str = "session";
const EXERCISE: &str = "exercise";

/// Exercise listing, either bare or paginated
#[derive(Deserialize)]
#[serde(untagged)]
enum ExerciseListing {
    Plain(Vec<Exercise>),
    Paginated { results: Vec<Exercise> },
}

/// Client for the liftlog REST backend
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpApiClient {
    /// Build a client from configuration
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Transport` if the HTTP client cannot be built
    pub fn new(config: &ApiConfig) -> StoreResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| StoreError::Transport(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            token: config.token.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn session_url(&self, id: &str) -> String {
        self.url(&format!("{}{id}/", api_paths::SESSIONS))
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let builder = self.client.request(method, url);
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(
        &self,
        builder: RequestBuilder,
        resource: &'static str,
        id: &str,
    ) -> StoreResult<Response> {
        let response = builder
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;
        let status = response.status();
        debug!(status = status.as_u16(), url = %response.url(), "Backend response");
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(error_for_status(status, &body, resource, id))
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        resource: &'static str,
        id: &str,
    ) -> StoreResult<T> {
        let response = self.send(builder, resource, id).await?;
        let body = response
            .bytes()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;
        Ok(serde_json::from_slice(&body)?)
    }
}

/// Translate a non-success response into a store error
///
/// The message prefers the `detail` field of a JSON body, then the raw body,
/// then the status reason.
#[must_use]
pub fn error_for_status(
    status: StatusCode,
    body: &str,
    resource: &'static str,
    id: &str,
) -> StoreError {
    match status {
        StatusCode::NOT_FOUND => StoreError::not_found(resource, id),
        StatusCode::UNAUTHORIZED => StoreError::Unauthorized,
        _ => {
            let detail = serde_json::from_str::<Value>(body)
                .ok()
                .and_then(|v| v.get("detail").and_then(Value::as_str).map(str::to_owned))
                .or_else(|| {
                    let trimmed = body.trim();
                    (!trimmed.is_empty()).then(|| trimmed.to_owned())
                })
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("unexpected status")
                        .to_owned()
                });
            StoreError::Transport(format!("HTTP {}: {detail}", status.as_u16()))
        }
    }
}

#[async_trait]
impl ExerciseCatalog for HttpApiClient {
    async fn all_exercises(&self) -> StoreResult<Vec<Exercise>> {
        let url = self.url(api_paths::EXERCISES);
        let listing: ExerciseListing = self
            .send_json(self.request(Method::GET, &url), EXERCISE, "*")
            .await?;
        Ok(match listing {
            ExerciseListing::Plain(exercises) | ExerciseListing::Paginated { results: exercises } => {
                exercises
            }
        })
    }
}

#[async_trait]
impl WorkoutSessionStore for HttpApiClient {
    async fn get_session(&self, id: &str) -> StoreResult<WorkoutSession> {
        let url = self.session_url(id);
        self.send_json(self.request(Method::GET, &url), SESSION, id)
            .await
    }

    async fn create_session(&self, payload: &WorkoutSessionCreate) -> StoreResult<WorkoutSession> {
        let url = self.url(api_paths::SESSIONS);
        self.send_json(self.request(Method::POST, &url).json(payload), SESSION, "new")
            .await
    }

    async fn update_session(
        &self,
        id: &str,
        payload: &WorkoutSessionUpdate,
    ) -> StoreResult<WorkoutSession> {
        let url = self.session_url(id);
        self.send_json(self.request(Method::PATCH, &url).json(payload), SESSION, id)
            .await
    }

    async fn delete_session(&self, id: &str) -> StoreResult<DeleteOutcome> {
        let url = self.session_url(id);
        match self.send(self.request(Method::DELETE, &url), SESSION, id).await {
            Ok(_) => Ok(DeleteOutcome::Deleted),
            Err(e) if e.is_not_found() => Ok(DeleteOutcome::NotFound),
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl LastUsedStore for HttpApiClient {
    async fn set_last_used(&self, exercise_id: &str, data: &LastUsedData) -> StoreResult<()> {
        let url = self.url(&format!("{}{exercise_id}/", api_paths::EXERCISE_SETTINGS));
        self.send(self.request(Method::POST, &url).json(data), EXERCISE, exercise_id)
            .await?;
        Ok(())
    }
}
