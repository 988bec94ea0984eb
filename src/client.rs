//! HTTP client for the Me API.
//!
//! Wraps the REST transport with bearer authentication and a single
//! refresh-and-retry pass: when a request comes back 401 the access token is
//! refreshed once and the request replayed. A second 401 is surfaced to the
//! caller unchanged.

use crate::auth::Auth;
use crate::config::Config;
use crate::constants::USER_AGENT;
use crate::error::{ApiError, AuthError};
use crate::model::auth::{Challenge, Credential};
use reqwest::{Method, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Client for the Me REST API
///
/// Holds the shared [`Auth`] manager and a connection pool. Cloning is cheap,
/// clones share the credential.
#[derive(Clone)]
pub struct MeClient {
    config: Arc<Config>,
    auth: Arc<Auth>,
    http_client: reqwest::Client,
}

impl MeClient {
    /// Creates a new client from configuration
    ///
    /// # Arguments
    /// * `config` - Configuration containing the base URL and optional tokens
    pub fn new(config: Arc<Config>) -> Self {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(std::time::Duration::from_secs(config.rest_api.timeout))
            .build()
            .expect("Failed to create HTTP client");

        let auth = Arc::new(Auth::new(Arc::clone(&config)));

        Self {
            config,
            auth,
            http_client,
        }
    }

    /// Creates a client with an explicit token pair, skipping the
    /// verification challenge.
    pub fn with_credential(config: Arc<Config>, credential: Credential) -> Self {
        let mut client = Self::new(config);
        client.auth = Arc::new(Auth::with_credential(
            Arc::clone(&client.config),
            credential,
        ));
        client
    }

    /// The shared authentication manager.
    pub fn auth(&self) -> Arc<Auth> {
        Arc::clone(&self.auth)
    }

    /// The client configuration.
    pub fn config(&self) -> Arc<Config> {
        Arc::clone(&self.config)
    }

    /// Starts a phone-verification challenge. See [`Auth::authenticate`].
    pub async fn authenticate(&self, phone_number: &str) -> Result<Challenge, AuthError> {
        self.auth.authenticate(phone_number).await
    }

    /// Exchanges an activation code for a token pair. See [`Auth::verify`].
    pub async fn verify(&self, challenge: &Challenge, code: &str) -> Result<Credential, AuthError> {
        self.auth.verify(challenge, code).await
    }

    /// Logs out and clears the stored credential.
    pub async fn logout(&self) {
        self.auth.logout().await;
    }

    /// Sends a GET request to the given API path.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request(Method::GET, path, None::<&Value>).await
    }

    /// Sends a POST request with a JSON body.
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.request(Method::POST, path, Some(body)).await
    }

    /// Sends a PUT request with a JSON body.
    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.request(Method::PUT, path, Some(body)).await
    }

    /// Sends a PATCH request with a JSON body.
    pub async fn patch<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.request(Method::PATCH, path, Some(body)).await
    }

    /// Sends a DELETE request, with an optional JSON body.
    pub async fn delete<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError> {
        self.request(Method::DELETE, path, body).await
    }

    /// Sends an authenticated request with one refresh-and-retry pass
    ///
    /// The first 401 triggers a token refresh and a single replay. Any
    /// failure on the replay, including a second 401, is returned to the
    /// caller unchanged.
    pub async fn request<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError> {
        let credential = self.auth.credential().await?;

        let response = self
            .request_internal(method.clone(), path, body, &credential.access)
            .await?;

        if response.status() != StatusCode::UNAUTHORIZED {
            return Self::parse_response(response).await;
        }

        warn!("Request to {} returned 401, refreshing access token", path);
        let refreshed = self.auth.refresh(&credential.access).await?;

        debug!("Retrying {} {} with refreshed token", method, path);
        let response = self
            .request_internal(method, path, body, &refreshed.access)
            .await?;

        Self::parse_response(response).await
    }

    /// Builds and sends one HTTP request with the given bearer token.
    async fn request_internal<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        access_token: &str,
    ) -> Result<Response, ApiError> {
        let url = self.config.rest_url(path);
        debug!("Request: {} {}", method, url);

        let mut builder = self
            .http_client
            .request(method, &url)
            .header("Authorization", format!("Bearer {access_token}"))
            .header("Content-Type", "application/json");

        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        debug!("Response status: {}", response.status());
        Ok(response)
    }

    /// Maps a response to a typed value or an [`ApiError`]
    ///
    /// Non-success statuses become [`ApiError::Unauthorized`],
    /// [`ApiError::NotFound`] or [`ApiError::Api`] with the vendor's
    /// `detail` field when present.
    async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        let text = response.text().await?;

        if status.is_success() {
            return serde_json::from_str(&text).map_err(|e| {
                error!("Failed to parse response body: {}", e);
                ApiError::Json(e)
            });
        }

        match status {
            StatusCode::UNAUTHORIZED => {
                error!("Request unauthorized: {}", text);
                Err(ApiError::Unauthorized)
            }
            StatusCode::NOT_FOUND => {
                info!("Resource not found: {}", text);
                Err(ApiError::NotFound)
            }
            status if status.is_client_error() || status.is_server_error() => {
                let detail = serde_json::from_str::<Value>(&text)
                    .ok()
                    .and_then(|v| v.get("detail").and_then(Value::as_str).map(String::from))
                    .unwrap_or(text);
                error!("API error {}: {}", status, detail);
                Err(ApiError::Api { status, detail })
            }
            other => {
                error!("Unexpected status {}: {}", other, text);
                Err(ApiError::Unexpected(other))
            }
        }
    }
}
