use crate::error::ApiError;
use crate::model::settings::{Settings, SettingsUpdate};
use async_trait::async_trait;

/// Interface for the settings service
#[async_trait]
pub trait SettingsService: Send + Sync {
    /// Gets the account settings
    async fn get_settings(&self) -> Result<Settings, ApiError>;

    /// Applies a partial update to the account settings
    ///
    /// The update must set at least one field.
    async fn update_settings(&self, update: &SettingsUpdate) -> Result<Settings, ApiError>;
}
