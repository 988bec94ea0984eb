//! Service interfaces.

/// Account, contact-book and blocking operations
pub mod account;
/// Account settings
pub mod settings;
/// Comments, name groups, social links and watchers
pub mod social;

pub use account::AccountService;
pub use settings::SettingsService;
pub use social::SocialService;
