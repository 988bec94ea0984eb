//! Error types for the Me API client.
//!
//! Failures fall into two categories: [`AuthError`] covers the
//! challenge/verification/token-refresh flow, and [`ApiError`] covers
//! everything that can go wrong on an authorized request. The only failure
//! the client recovers from locally is a single expired access token (one
//! refresh-and-retry cycle); every other error propagates to the caller
//! unchanged.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors raised by the authentication flow: phone verification,
/// activation-code exchange and token refresh.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The phone number did not survive validation (digits only, 9-15 digits).
    #[error("invalid phone number: {0}")]
    InvalidPhoneNumber(String),

    /// The vendor refused to send a verification code (e.g. blocked number).
    #[error("verification challenge rejected with status {0}")]
    ChallengeRejected(StatusCode),

    /// The activation code was wrong, expired, or malformed.
    #[error("invalid or expired activation code")]
    InvalidActivationCode,

    /// The refresh endpoint rejected the refresh token.
    #[error("token refresh failed with status {0}")]
    RefreshFailed(StatusCode),

    /// No credential is available; authenticate or inject one first.
    #[error("not authenticated")]
    NotAuthenticated,

    /// The vendor answered with a status the auth flow does not expect.
    #[error("unexpected status code: {0}")]
    Unexpected(StatusCode),

    /// Transport-level failure.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The auth response body was not the JSON the vendor documents.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised by authorized API requests.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Authentication failed while servicing the request.
    #[error("auth error: {0}")]
    Auth(#[from] AuthError),

    /// The retried request was still unauthorized after one refresh cycle.
    #[error("unauthorized")]
    Unauthorized,

    /// The vendor answered 404 for the requested resource.
    #[error("not found")]
    NotFound,

    /// A vendor-reported business error, e.g. a blocked number or a passed
    /// daily limit. Carries the status and the `detail` field when present.
    #[error("api error {status}: {detail}")]
    Api {
        /// HTTP status of the response.
        status: StatusCode,
        /// The vendor `detail` message, or the raw body if it was not JSON.
        detail: String,
    },

    /// A non-2xx status with no further classification.
    #[error("unexpected status code: {0}")]
    Unexpected(StatusCode),

    /// The caller provided input the vendor would reject.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Transport-level failure.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body was not valid JSON for the expected type.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
