use crate::error::ApiError;
use crate::model::comment::{Comment, CommentDetails, CommentsResponse};
use crate::model::contact::Friendship;
use crate::model::social::{
    Deleter, Group, HiddenNames, SharedLocations, Social, SocialName, Watcher,
};
use crate::model::user::User;
use async_trait::async_trait;

/// Interface for the social service
#[async_trait]
pub trait SocialService: Send + Sync {
    /// Gets friendship statistics between the account and a number
    async fn friendship(&self, phone_number: u64) -> Result<Friendship, ApiError>;

    /// Reports a number as spam under the given name
    async fn report_spam(
        &self,
        phone_number: u64,
        name: &str,
        country_code: &str,
    ) -> Result<bool, ApiError>;

    /// How many contact books the account's number appears in
    async fn numbers_count(&self) -> Result<u64, ApiError>;

    /// Lists the comments on a profile
    async fn get_comments(&self, uuid: &str) -> Result<CommentsResponse, ApiError>;

    /// Gets one comment with its likes
    async fn get_comment(&self, comment_id: i64) -> Result<CommentDetails, ApiError>;

    /// Publishes a comment on a profile
    ///
    /// The comment stays in the waiting state until the profile owner
    /// approves it.
    async fn publish_comment(&self, uuid: &str, message: &str) -> Result<Comment, ApiError>;

    /// Approves a comment left on the account's profile
    async fn approve_comment(&self, comment_id: i64) -> Result<bool, ApiError>;

    /// Ignores a comment, hiding it from the account's profile
    async fn ignore_comment(&self, comment_id: i64) -> Result<bool, ApiError>;

    /// Likes a comment
    async fn like_comment(&self, comment_id: i64) -> Result<bool, ApiError>;

    /// Removes a like from a comment
    async fn unlike_comment(&self, comment_id: i64) -> Result<bool, ApiError>;

    /// Groups of people who saved the account under the same name
    ///
    /// Sorted by group size, largest first.
    async fn get_groups(&self) -> Result<Vec<Group>, ApiError>;

    /// Name groups previously deleted with [`SocialService::delete_group`]
    async fn get_deleted_groups(&self) -> Result<HiddenNames, ApiError>;

    /// Hides a name group from the account's profile
    async fn delete_group(&self, contact_ids: &[i64]) -> Result<bool, ApiError>;

    /// Restores a hidden name group
    async fn restore_group(&self, contact_ids: &[i64]) -> Result<bool, ApiError>;

    /// Asks the contacts in a group to rename the account
    async fn ask_group_rename(&self, contact_ids: &[i64], new_name: &str)
    -> Result<bool, ApiError>;

    /// Link state of the account's social networks
    async fn get_socials(&self) -> Result<Social, ApiError>;

    /// Links a social network to the account
    ///
    /// # Arguments
    /// * `name` - The network to link
    /// * `token_or_url` - An OAuth token, or a profile URL for networks
    ///   that link by URL
    async fn connect_social(&self, name: SocialName, token_or_url: &str)
    -> Result<bool, ApiError>;

    /// Unlinks a social network
    async fn disconnect_social(&self, name: SocialName) -> Result<bool, ApiError>;

    /// Hides or shows a linked network on the account's profile
    async fn switch_social_status(&self, name: SocialName, hide: bool) -> Result<bool, ApiError>;

    /// Who watched the account's profile, most frequent watcher first
    ///
    /// Requires `who_watched_enabled` in the account settings.
    async fn who_watched(&self) -> Result<Vec<Watcher>, ApiError>;

    /// Who deleted the account from their contact book
    ///
    /// Requires `who_deleted_enabled` in the account settings.
    async fn who_deleted(&self) -> Result<Vec<Deleter>, ApiError>;

    /// Shares the account's reported location with another user
    async fn share_location(&self, uuid: &str) -> Result<bool, ApiError>;

    /// Stops sharing the account's location with the given users
    async fn stop_sharing_location(&self, uuids: &[&str]) -> Result<bool, ApiError>;

    /// Stops receiving the locations the given users share with the account
    async fn stop_shared_location(&self, uuids: &[&str]) -> Result<bool, ApiError>;

    /// Users the account shares its location with
    async fn locations_shared_by_me(&self) -> Result<Vec<User>, ApiError>;

    /// Users sharing their location with the account, with distances
    async fn locations_shared_with_me(&self) -> Result<SharedLocations, ApiError>;

    /// Distance to another user in kilometers
    ///
    /// `None` unless that user shares their location with the account.
    async fn get_distance(&self, uuid: &str) -> Result<Option<f64>, ApiError>;

    /// Asks another user to enable comments on their profile
    async fn suggest_turn_on_comments(&self, uuid: &str) -> Result<bool, ApiError>;

    /// Asks another user to enable mutual contacts on their profile
    async fn suggest_turn_on_mutual(&self, uuid: &str) -> Result<bool, ApiError>;

    /// Asks another user to share their location with the account
    async fn suggest_turn_on_location(&self, uuid: &str) -> Result<bool, ApiError>;
}
