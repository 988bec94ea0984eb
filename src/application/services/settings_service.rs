use crate::application::interfaces::SettingsService;
use crate::client::MeClient;
use crate::error::ApiError;
use crate::model::settings::{Settings, SettingsUpdate};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

/// Implementation of the settings service
pub struct SettingsServiceImpl {
    client: Arc<MeClient>,
}

impl SettingsServiceImpl {
    /// Creates a new instance of the settings service
    pub fn new(client: Arc<MeClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SettingsService for SettingsServiceImpl {
    async fn get_settings(&self) -> Result<Settings, ApiError> {
        info!("Getting account settings");
        self.client.get("main/settings/").await
    }

    async fn update_settings(&self, update: &SettingsUpdate) -> Result<Settings, ApiError> {
        if update.is_empty() {
            return Err(ApiError::InvalidInput(
                "settings update sets no fields".to_string(),
            ));
        }
        info!("Updating account settings");
        self.client.patch("main/settings/", update).await
    }
}
