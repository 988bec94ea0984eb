//! Authentication for the Me API.
//!
//! The flow is a phone-verification challenge: ask the vendor to text an
//! activation code to the number, then exchange the code for an
//! access/refresh token pair. An existing pair can be injected to skip the
//! challenge. The pair is held behind a [`tokio::sync::RwLock`] and mutated
//! in place when the access token is refreshed.

use crate::config::Config;
use crate::constants::{
    ACTIVATE_ENDPOINT, ACTIVATION_TYPE_SMS, ASK_FOR_SMS_ENDPOINT, REFRESH_TOKEN_ENDPOINT,
    USER_AGENT,
};
use crate::error::AuthError;
use crate::model::auth::{
    ActivateRequest, AskForSmsRequest, AskForSmsResponse, Challenge, Credential, RefreshRequest,
    RefreshResponse,
};
use crate::utils::phone::{validate_activation_code, validate_phone_number};
use reqwest::{Client, StatusCode};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

/// Authentication manager for the Me API
///
/// Handles the verification challenge, the activation-code exchange, token
/// refresh and logout. Shared by the client via `Arc`.
pub struct Auth {
    config: Arc<Config>,
    http: Client,
    credential: Arc<RwLock<Option<Credential>>>,
}

impl Auth {
    /// Creates a new Auth instance
    ///
    /// If the configuration carries a pre-provisioned token pair, it is
    /// installed immediately and no challenge is needed.
    ///
    /// # Arguments
    /// * `config` - Configuration containing the base URL and optional tokens
    pub fn new(config: Arc<Config>) -> Self {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to create HTTP client");

        let credential = match (
            &config.credentials.access_token,
            &config.credentials.refresh_token,
        ) {
            (Some(access), Some(refresh)) => {
                debug!("Using pre-provisioned credential from configuration");
                Some(Credential::new(access.clone(), refresh.clone()))
            }
            _ => None,
        };

        Self {
            config,
            http,
            credential: Arc::new(RwLock::new(credential)),
        }
    }

    /// Creates an Auth instance with an explicit credential, skipping the
    /// verification challenge.
    pub fn with_credential(config: Arc<Config>, credential: Credential) -> Self {
        let mut auth = Self::new(config);
        auth.credential = Arc::new(RwLock::new(Some(credential)));
        auth
    }

    /// Installs a credential, e.g. one restored from the caller's storage.
    pub async fn set_credential(&self, credential: Credential) {
        let mut guard = self.credential.write().await;
        *guard = Some(credential);
    }

    /// Returns a copy of the current credential
    ///
    /// # Returns
    /// * `Ok(Credential)` - The current token pair
    /// * `Err(AuthError::NotAuthenticated)` - If no credential is installed
    pub async fn credential(&self) -> Result<Credential, AuthError> {
        let guard = self.credential.read().await;
        guard.clone().ok_or(AuthError::NotAuthenticated)
    }

    /// Starts a phone-verification challenge
    ///
    /// Validates the phone number and asks the vendor to send an SMS
    /// activation code.
    ///
    /// # Arguments
    /// * `phone_number` - The phone number in international format
    ///
    /// # Returns
    /// * `Ok(Challenge)` - A pending challenge to pass to [`Auth::verify`]
    /// * `Err(AuthError)` - If the number is malformed or the vendor refused
    pub async fn authenticate(&self, phone_number: &str) -> Result<Challenge, AuthError> {
        let phone_number = validate_phone_number(phone_number)?;
        let url = self.config.rest_url(ASK_FOR_SMS_ENDPOINT);

        info!("Requesting SMS verification for {}", phone_number);
        debug!("Challenge request to URL: {}", url);

        let resp = self
            .http
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&AskForSmsRequest { phone_number })
            .send()
            .await?;

        let status = resp.status();
        debug!("Challenge response status: {}", status);

        if status != StatusCode::OK {
            let body = resp.text().await.unwrap_or_default();
            error!("Challenge request failed with status {}: {}", status, body);
            return Err(AuthError::ChallengeRejected(status));
        }

        let json: AskForSmsResponse = serde_json::from_str(&resp.text().await?)?;
        if !json.success {
            error!("Vendor refused to send a verification code");
            return Err(AuthError::ChallengeRejected(StatusCode::OK));
        }

        // a success without a session token cannot be verified later
        let Some(session_token) = json.session_token.filter(|t| !t.is_empty()) else {
            error!("Vendor confirmed the challenge but sent no session token");
            return Err(AuthError::ChallengeRejected(StatusCode::OK));
        };

        Ok(Challenge {
            phone_number,
            session_token,
        })
    }

    /// Exchanges an activation code for a token pair
    ///
    /// On success the pair is stored as the active credential. On failure
    /// the stored credential is left untouched.
    ///
    /// # Arguments
    /// * `challenge` - The pending challenge from [`Auth::authenticate`]
    /// * `code` - The six-digit activation code from the SMS
    ///
    /// # Returns
    /// * `Ok(Credential)` - The new token pair
    /// * `Err(AuthError)` - If the code is invalid or expired
    pub async fn verify(&self, challenge: &Challenge, code: &str) -> Result<Credential, AuthError> {
        validate_activation_code(code)?;
        let url = self.config.rest_url(ACTIVATE_ENDPOINT);

        debug!("Activation request to URL: {}", url);

        let body = ActivateRequest {
            activation_code: code,
            activation_type: ACTIVATION_TYPE_SMS,
            phone_number: challenge.phone_number,
            session_token: &challenge.session_token,
        };

        let resp = self
            .http
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        debug!("Activation response status: {}", status);

        match status {
            StatusCode::OK => {
                let credential: Credential = serde_json::from_str(&resp.text().await?)?;

                let mut guard = self.credential.write().await;
                *guard = Some(credential.clone());

                info!("Verification successful for {}", challenge.phone_number);
                Ok(credential)
            }
            StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                let body = resp.text().await.unwrap_or_default();
                warn!("Activation rejected with status {}: {}", status, body);
                Err(AuthError::InvalidActivationCode)
            }
            other => {
                let body = resp.text().await.unwrap_or_default();
                error!("Activation failed with status {}: {}", other, body);
                Err(AuthError::Unexpected(other))
            }
        }
    }

    /// Refreshes the access token using the stored refresh token
    ///
    /// Refreshes are serialized behind the credential write lock. The caller
    /// passes the access token that observed the 401: if the stored token
    /// already differs, another task won the race and the fresh credential is
    /// returned without a second exchange.
    ///
    /// # Arguments
    /// * `stale_access` - The access token that was rejected
    ///
    /// # Returns
    /// * `Ok(Credential)` - The credential with a fresh access token
    /// * `Err(AuthError)` - If no credential is stored or the vendor refused
    pub async fn refresh(&self, stale_access: &str) -> Result<Credential, AuthError> {
        let mut guard = self.credential.write().await;
        let Some(current) = guard.as_mut() else {
            return Err(AuthError::NotAuthenticated);
        };

        if current.access != stale_access {
            debug!("Access token already refreshed by another task");
            return Ok(current.clone());
        }

        let url = self.config.rest_url(REFRESH_TOKEN_ENDPOINT);
        info!("Refreshing access token");
        debug!("Refresh request to URL: {}", url);

        let resp = self
            .http
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&RefreshRequest {
                refresh: &current.refresh,
            })
            .send()
            .await?;

        let status = resp.status();
        debug!("Refresh response status: {}", status);

        if status != StatusCode::OK {
            let body = resp.text().await.unwrap_or_default();
            error!("Token refresh failed with status {}: {}", status, body);
            return Err(AuthError::RefreshFailed(status));
        }

        let json: RefreshResponse = serde_json::from_str(&resp.text().await?)?;
        current.access = json.access;
        if let Some(refresh) = json.refresh {
            current.refresh = refresh;
        }

        info!("Access token refreshed");
        Ok(current.clone())
    }

    /// Logs out and clears the stored credential.
    pub async fn logout(&self) {
        info!("Logging out");
        let mut guard = self.credential.write().await;
        *guard = None;
    }
}
