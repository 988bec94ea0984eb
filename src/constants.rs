/// Base URL of the Me mobile API.
pub const DEFAULT_BASE_URL: &str = "https://app.mobile.me.app";
/// Endpoint that asks the vendor to send an SMS verification code.
pub const ASK_FOR_SMS_ENDPOINT: &str = "auth/verification/ask-for-sms/";
/// Endpoint that exchanges an activation code for a token pair.
pub const ACTIVATE_ENDPOINT: &str = "auth/verification/activate/";
/// Endpoint that exchanges a refresh token for a new access token.
pub const REFRESH_TOKEN_ENDPOINT: &str = "auth/token/refresh/";
/// User agent string used in HTTP requests to identify this client to the Me API.
pub const USER_AGENT: &str = "me-client/0.1.0";
/// Default timeout in seconds for REST API requests.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Minimum number of digits in a valid international phone number.
pub const PHONE_MIN_DIGITS: usize = 9;
/// Maximum number of digits in a valid international phone number.
pub const PHONE_MAX_DIGITS: usize = 15;
/// Length of the SMS activation code the vendor sends.
pub const ACTIVATION_CODE_LEN: usize = 6;
/// Activation channel reported to the vendor when verifying a challenge.
pub const ACTIVATION_TYPE_SMS: &str = "sms";
