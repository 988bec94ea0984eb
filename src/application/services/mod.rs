//! Service implementations backed by [`MeClient`](crate::client::MeClient).

/// Account, contact-book and blocking operations
pub mod account_service;
/// Account settings
pub mod settings_service;
/// Comments, name groups, social links and watchers
pub mod social_service;

pub use account_service::AccountServiceImpl;
pub use settings_service::SettingsServiceImpl;
pub use social_service::SocialServiceImpl;
