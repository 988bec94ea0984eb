//! # Me Client Prelude
//!
//! This module provides a convenient way to import the most commonly used
//! types and traits from the library. By importing this prelude, you get
//! access to all the essential components needed for most interactions with
//! the Me caller-ID API.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use me_client::prelude::*;
//! use std::sync::Arc;
//!
//! # async fn run() {
//! let config = Arc::new(Config::new());
//! let client = MeClient::new(config);
//! let challenge = client.authenticate("+972123456789").await.unwrap();
//! # }
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the Me API client
pub use crate::config::Config;

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Authentication errors
pub use crate::error::AuthError;

/// API request errors
pub use crate::error::ApiError;

// ============================================================================
// AUTHENTICATION AND CLIENT
// ============================================================================

/// Authentication manager
pub use crate::auth::Auth;

/// The REST client
pub use crate::client::MeClient;

/// The verification challenge and the token pair
pub use crate::model::auth::{Challenge, Credential};

// ============================================================================
// CORE SERVICES (TRAITS)
// ============================================================================

/// Account service trait for search, profile and blocking operations
pub use crate::application::interfaces::AccountService;

/// Social service trait for comments, groups and watchers
pub use crate::application::interfaces::SocialService;

/// Settings service trait
pub use crate::application::interfaces::SettingsService;

// ============================================================================
// SERVICE IMPLEMENTATIONS
// ============================================================================

/// Account service implementation
pub use crate::application::services::AccountServiceImpl;

/// Social service implementation
pub use crate::application::services::SocialServiceImpl;

/// Settings service implementation
pub use crate::application::services::SettingsServiceImpl;

// ============================================================================
// MODELS
// ============================================================================

/// Caller-ID and contact-book models
pub use crate::model::contact::{
    BlockedNumber, Call, CallType, Contact, Friendship, NewContact, SyncResponse,
};

/// Profile models
pub use crate::model::profile::{MutualContact, Profile, ProfileUpdate, ProfileView};

/// Comment models
pub use crate::model::comment::{Comment, CommentDetails, CommentStatus, CommentsResponse};

/// Social link, watcher and name-group models
pub use crate::model::social::{
    Deleter, Group, HiddenNames, SharedLocationUser, SharedLocations, Social, SocialName,
    SocialNetwork, Watcher,
};

/// Settings models
pub use crate::model::settings::{Settings, SettingsUpdate};

/// The user record embedded across responses
pub use crate::model::user::User;

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Input validation helpers
pub use crate::utils::phone::{validate_activation_code, validate_phone_number};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use tracing::{debug, error, info, warn};

/// Re-export chrono for date/time handling
pub use chrono::{DateTime, NaiveDate, Utc};
