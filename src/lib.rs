//! # Me Client
//!
//! An asynchronous Rust client for the Me caller-ID API. It covers phone
//! verification, caller-ID search, profile and contact-book management,
//! comments, social links and account settings.
//!
//! ## Authentication
//!
//! The API authenticates accounts by texting an activation code to the
//! account's phone number:
//!
//! ```rust,no_run
//! use me_client::prelude::*;
//! use std::sync::Arc;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Arc::new(Config::new());
//! let client = MeClient::new(config);
//!
//! let challenge = client.authenticate("+972123456789").await?;
//! // read the six-digit code from the SMS
//! let credential = client.verify(&challenge, "123456").await?;
//! println!("access token: {}", credential.access);
//! # Ok(())
//! # }
//! ```
//!
//! A stored token pair can be injected with [`MeClient::with_credential`]
//! to skip the challenge. Access tokens are refreshed automatically: the
//! first 401 on any request triggers one refresh and one retry.
//!
//! ## Services
//!
//! Operations are grouped behind three traits so callers can depend on the
//! capability rather than the client:
//!
//! ```rust,no_run
//! use me_client::prelude::*;
//! use std::sync::Arc;
//!
//! # async fn run(client: Arc<MeClient>) -> Result<(), ApiError> {
//! let account = AccountServiceImpl::new(Arc::clone(&client));
//! if let Some(contact) = account.phone_search("+972123456789").await? {
//!     println!("{:?} (spam reports: {})", contact.name, contact.spam_count());
//! }
//! # Ok(())
//! # }
//! ```

/// High-level services over the REST client
pub mod application;
/// Authentication: challenge, verification, token refresh
pub mod auth;
/// The REST client
pub mod client;
/// Configuration loaded from the environment
pub mod config;
/// Global constants
pub mod constants;
/// Error types
pub mod error;
/// Wire and domain models
pub mod model;
/// Commonly used types and traits
pub mod prelude;
/// Validation, logging and sample-data helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version.
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
