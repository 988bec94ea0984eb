//! High-level services over the REST client.

/// Service traits
pub mod interfaces;
/// Service implementations
pub mod services;
