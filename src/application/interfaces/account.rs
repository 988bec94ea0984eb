use crate::error::ApiError;
use crate::model::contact::{BlockedNumber, Call, Contact, NewContact, SyncResponse};
use crate::model::profile::{Profile, ProfileUpdate, ProfileView};
use async_trait::async_trait;

/// Interface for the account service
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Looks up a phone number in the caller-ID database
    ///
    /// # Arguments
    /// * `phone_number` - The number to search, in international format
    ///
    /// # Returns
    /// * `Ok(Some(Contact))` - The identification record
    /// * `Ok(None)` - The number is not known to the vendor
    async fn phone_search(&self, phone_number: &str) -> Result<Option<Contact>, ApiError>;

    /// Gets another user's profile by uuid
    async fn get_profile(&self, uuid: &str) -> Result<ProfileView, ApiError>;

    /// Gets the authenticated account's own profile
    async fn get_my_profile(&self) -> Result<ProfileView, ApiError>;

    /// Applies a partial update to the account profile
    ///
    /// The update must set at least one field. Email and date-of-birth
    /// values are validated before the request is sent.
    async fn update_profile(&self, update: &ProfileUpdate) -> Result<Profile, ApiError>;

    /// Uploads contacts to the account's synced contact book
    async fn add_contacts(&self, contacts: &[NewContact]) -> Result<SyncResponse, ApiError>;

    /// Removes contacts from the account's synced contact book
    async fn remove_contacts(&self, contacts: &[NewContact]) -> Result<SyncResponse, ApiError>;

    /// Uploads call-log entries
    async fn add_calls(&self, calls: &[Call]) -> Result<SyncResponse, ApiError>;

    /// Removes call-log entries
    async fn remove_calls(&self, calls: &[Call]) -> Result<SyncResponse, ApiError>;

    /// Blocks a profile from contacting or watching the account
    ///
    /// # Arguments
    /// * `phone_number` - The number to block
    /// * `block_contact` - Block calls and messages
    /// * `me_full_block` - Block all vendor-side features
    async fn block_profile(
        &self,
        phone_number: u64,
        block_contact: bool,
        me_full_block: bool,
    ) -> Result<bool, ApiError>;

    /// Lifts a block placed with [`AccountService::block_profile`]
    async fn unblock_profile(&self, phone_number: u64) -> Result<bool, ApiError>;

    /// Blocks a batch of numbers from calling the account
    async fn block_numbers(&self, numbers: &[u64]) -> Result<Vec<BlockedNumber>, ApiError>;

    /// Unblocks a batch of numbers
    async fn unblock_numbers(&self, numbers: &[u64]) -> Result<bool, ApiError>;

    /// Lists the numbers currently blocked by the account
    async fn get_blocked_numbers(&self) -> Result<Vec<BlockedNumber>, ApiError>;

    /// Reports the device location to the vendor
    async fn update_location(&self, latitude: f64, longitude: f64) -> Result<bool, ApiError>;

    /// Uploads generated contacts, calls and a location fix
    ///
    /// Useful for exercising an account without exposing a real contact
    /// book.
    async fn upload_random_data(&self, count: usize) -> Result<SyncResponse, ApiError>;

    /// Suspends the account until the next login
    async fn suspend_account(&self) -> Result<bool, ApiError>;

    /// Deletes the account and all its vendor-side data. Irreversible.
    async fn delete_account(&self) -> Result<(), ApiError>;
}
