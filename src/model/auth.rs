//! Wire types for the verification and token-exchange endpoints.

use serde::{Deserialize, Serialize};

/// Access/refresh token pair issued after a successful verification.
///
/// The pair is owned by the client instance and mutated in place on refresh.
/// It is `Serialize`/`Deserialize` so callers can persist it between runs;
/// the library itself never writes it anywhere.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credential {
    /// Short-lived bearer token attached to every authorized request.
    pub access: String,
    /// Longer-lived token used to obtain a new access token without
    /// re-verification.
    pub refresh: String,
    /// Password token issued alongside the pair on some accounts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pwd_token: Option<String>,
}

impl Credential {
    /// Creates a credential from a pre-provisioned token pair.
    pub fn new(access: impl Into<String>, refresh: impl Into<String>) -> Self {
        Self {
            access: access.into(),
            refresh: refresh.into(),
            pwd_token: None,
        }
    }
}

/// A pending phone-verification challenge.
///
/// Returned by `Auth::authenticate`; holds everything `Auth::verify` needs to
/// finish the exchange. The vendor's `session_token` is the challenge id.
#[derive(Debug, Clone)]
pub struct Challenge {
    /// The validated phone number the code was sent to.
    pub phone_number: u64,
    /// Vendor-issued token identifying this verification session.
    pub session_token: String,
}

/// Body for `auth/verification/ask-for-sms/`.
#[derive(Debug, Serialize)]
pub(crate) struct AskForSmsRequest {
    pub phone_number: u64,
}

/// Response from `auth/verification/ask-for-sms/`.
#[derive(Debug, Deserialize)]
pub(crate) struct AskForSmsResponse {
    pub success: bool,
    #[serde(default)]
    pub session_token: Option<String>,
}

/// Body for `auth/verification/activate/`.
#[derive(Debug, Serialize)]
pub(crate) struct ActivateRequest<'a> {
    pub activation_code: &'a str,
    pub activation_type: &'a str,
    pub phone_number: u64,
    pub session_token: &'a str,
}

/// Body for `auth/token/refresh/`.
#[derive(Debug, Serialize)]
pub(crate) struct RefreshRequest<'a> {
    pub refresh: &'a str,
}

/// Response from `auth/token/refresh/`.
///
/// The vendor usually returns only a new access token; a rotated refresh
/// token appears occasionally and replaces the stored one when present.
#[derive(Debug, Deserialize)]
pub(crate) struct RefreshResponse {
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
}
