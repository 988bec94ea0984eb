/// Authentication wire types and the credential pair
pub mod auth;
/// Comments and their moderation states
pub mod comment;
/// Contact search, sync payloads and blocking
pub mod contact;
/// Profile records and the partial-update request
pub mod profile;
/// Account settings
pub mod settings;
/// Linked social networks, watchers and name groups
pub mod social;
/// The user record embedded across responses
pub mod user;
