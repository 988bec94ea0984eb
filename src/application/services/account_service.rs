use crate::application::interfaces::AccountService;
use crate::client::MeClient;
use crate::error::ApiError;
use crate::model::contact::{
    BlockedNumber, Call, CallSyncRequest, Contact, ContactSearchResponse, ContactSyncRequest,
    NewContact, SyncResponse,
};
use crate::model::profile::{Profile, ProfileUpdate, ProfileView};
use crate::utils::phone::{is_valid_date, is_valid_email};
use crate::utils::sample::{sample_calls, sample_contacts, sample_location};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{debug, info};

/// The vendor's generic acknowledgement body.
#[derive(Debug, Deserialize)]
pub(crate) struct SuccessResponse {
    #[serde(default)]
    pub success: bool,
}

#[derive(Debug, Deserialize)]
struct SuspendResponse {
    #[serde(default)]
    contact_suspended: bool,
}

/// Implementation of the account service
pub struct AccountServiceImpl {
    client: Arc<MeClient>,
}

impl AccountServiceImpl {
    /// Creates a new instance of the account service
    pub fn new(client: Arc<MeClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AccountService for AccountServiceImpl {
    async fn phone_search(&self, phone_number: &str) -> Result<Option<Contact>, ApiError> {
        let phone_number = crate::utils::phone::validate_phone_number(phone_number)
            .map_err(|e| ApiError::InvalidInput(e.to_string()))?;
        let path = format!("main/contacts/search/?phone_number={phone_number}");
        info!("Searching caller-ID record for {}", phone_number);

        match self.client.get::<ContactSearchResponse>(&path).await {
            Ok(result) => {
                debug!("Caller-ID record found for {}", phone_number);
                Ok(Some(result.contact))
            }
            Err(ApiError::NotFound) => {
                debug!("No caller-ID record for {}", phone_number);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    async fn get_profile(&self, uuid: &str) -> Result<ProfileView, ApiError> {
        info!("Getting profile {}", uuid);
        let path = format!("main/users/profile/{uuid}");
        self.client.get(&path).await
    }

    async fn get_my_profile(&self) -> Result<ProfileView, ApiError> {
        info!("Getting own profile");
        self.client.get("main/users/profile/me/").await
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<Profile, ApiError> {
        if update.is_empty() {
            return Err(ApiError::InvalidInput(
                "profile update sets no fields".to_string(),
            ));
        }
        if let Some(date) = update.date_of_birth_value() {
            if !is_valid_date(date) {
                return Err(ApiError::InvalidInput(format!(
                    "date of birth must be YYYY-MM-DD, got {date}"
                )));
            }
        }
        if let Some(email) = update.email_value() {
            if !is_valid_email(email) {
                return Err(ApiError::InvalidInput(format!("invalid email: {email}")));
            }
        }

        info!("Updating account profile");
        self.client.patch("main/users/profile/", update).await
    }

    async fn add_contacts(&self, contacts: &[NewContact]) -> Result<SyncResponse, ApiError> {
        info!("Uploading {} contacts", contacts.len());
        let body = ContactSyncRequest {
            add: contacts,
            is_first: false,
            remove: &[],
        };
        let result: SyncResponse = self.client.post("main/contacts/sync/", &body).await?;
        debug!("Contact sync added {} records", result.added);
        Ok(result)
    }

    async fn remove_contacts(&self, contacts: &[NewContact]) -> Result<SyncResponse, ApiError> {
        info!("Removing {} contacts", contacts.len());
        let body = ContactSyncRequest {
            add: &[],
            is_first: false,
            remove: contacts,
        };
        let result: SyncResponse = self.client.post("main/contacts/sync/", &body).await?;
        debug!("Contact sync removed {} records", result.removed);
        Ok(result)
    }

    async fn add_calls(&self, calls: &[Call]) -> Result<SyncResponse, ApiError> {
        info!("Uploading {} call-log entries", calls.len());
        let body = CallSyncRequest {
            add: calls,
            remove: &[],
        };
        self.client.post("main/call-log/change-sync/", &body).await
    }

    async fn remove_calls(&self, calls: &[Call]) -> Result<SyncResponse, ApiError> {
        info!("Removing {} call-log entries", calls.len());
        let body = CallSyncRequest {
            add: &[],
            remove: calls,
        };
        self.client.post("main/call-log/change-sync/", &body).await
    }

    async fn block_profile(
        &self,
        phone_number: u64,
        block_contact: bool,
        me_full_block: bool,
    ) -> Result<bool, ApiError> {
        info!("Blocking profile {}", phone_number);
        let body = json!({
            "phone_number": phone_number,
            "block_contact": block_contact,
            "me_full_block": me_full_block,
        });
        let result: SuccessResponse = self
            .client
            .post("main/users/profile/block/", &body)
            .await?;
        Ok(result.success)
    }

    async fn unblock_profile(&self, phone_number: u64) -> Result<bool, ApiError> {
        info!("Unblocking profile {}", phone_number);
        let body = json!({
            "phone_number": phone_number,
            "block_contact": false,
            "me_full_block": false,
        });
        let result: SuccessResponse = self
            .client
            .post("main/users/profile/block/", &body)
            .await?;
        Ok(result.success)
    }

    async fn block_numbers(&self, numbers: &[u64]) -> Result<Vec<BlockedNumber>, ApiError> {
        info!("Blocking {} numbers", numbers.len());
        let body = json!({ "phone_numbers": numbers });
        self.client
            .post("main/users/profile/bulk-block/", &body)
            .await
    }

    async fn unblock_numbers(&self, numbers: &[u64]) -> Result<bool, ApiError> {
        info!("Unblocking {} numbers", numbers.len());
        let body = json!({ "phone_numbers": numbers });
        let result: SuccessResponse = self
            .client
            .post("main/users/profile/bulk-unblock/", &body)
            .await?;
        Ok(result.success)
    }

    async fn get_blocked_numbers(&self) -> Result<Vec<BlockedNumber>, ApiError> {
        info!("Getting blocked numbers");
        let result: Vec<BlockedNumber> = self
            .client
            .get("main/settings/blocked-phone-numbers/")
            .await?;
        debug!("{} numbers blocked", result.len());
        Ok(result)
    }

    async fn update_location(&self, latitude: f64, longitude: f64) -> Result<bool, ApiError> {
        debug!("Reporting location {}, {}", latitude, longitude);
        let body = json!({
            "location_latitude": latitude,
            "location_longitude": longitude,
        });
        let result: SuccessResponse = self.client.post("main/location/update/", &body).await?;
        Ok(result.success)
    }

    async fn upload_random_data(&self, count: usize) -> Result<SyncResponse, ApiError> {
        info!("Uploading {} generated contacts and calls", count);
        let contacts = sample_contacts(count);
        let result = self.add_contacts(&contacts).await?;

        let calls = sample_calls(count);
        self.add_calls(&calls).await?;

        let (latitude, longitude) = sample_location();
        self.update_location(latitude, longitude).await?;

        Ok(result)
    }

    async fn suspend_account(&self) -> Result<bool, ApiError> {
        info!("Suspending account");
        let result: SuspendResponse = self
            .client
            .put("main/settings/suspend-user/", &json!({}))
            .await?;
        Ok(result.contact_suspended)
    }

    async fn delete_account(&self) -> Result<(), ApiError> {
        info!("Deleting account");
        let _: Value = self
            .client
            .delete::<Value, Value>("main/settings/remove-user/", None)
            .await?;
        Ok(())
    }
}
