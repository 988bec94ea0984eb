use crate::application::interfaces::SocialService;
use crate::application::services::account_service::SuccessResponse;
use crate::client::MeClient;
use crate::error::ApiError;
use crate::model::comment::{Comment, CommentDetails, CommentStatus, CommentsResponse};
use crate::model::contact::Friendship;
use crate::model::profile::ProfileView;
use crate::model::social::{
    Deleter, Group, GroupsResponse, HiddenNames, SharedLocations, Social, SocialName, Watcher,
};
use crate::model::user::User;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug, Deserialize)]
struct NumbersCountResponse {
    #[serde(default)]
    count: u64,
}

/// The suggestion endpoints acknowledge with `requested` instead of `success`.
#[derive(Debug, Deserialize)]
struct RequestedResponse {
    #[serde(default)]
    requested: bool,
}

/// Implementation of the social service
pub struct SocialServiceImpl {
    client: Arc<MeClient>,
}

impl SocialServiceImpl {
    /// Creates a new instance of the social service
    pub fn new(client: Arc<MeClient>) -> Self {
        Self { client }
    }

    /// Approve and ignore share an endpoint, only the verb differs. The
    /// vendor echoes the comment with its new status.
    async fn moderate_comment(
        &self,
        comment_id: i64,
        approve: bool,
    ) -> Result<bool, ApiError> {
        let path = format!("main/comments/approve/{comment_id}/");
        let expected = if approve {
            CommentStatus::Approved
        } else {
            CommentStatus::Ignored
        };

        let result: Comment = if approve {
            self.client.post(&path, &json!({})).await?
        } else {
            self.client.delete(&path, Some(&json!({}))).await?
        };

        Ok(result.status == Some(expected))
    }
}

#[async_trait]
impl SocialService for SocialServiceImpl {
    async fn friendship(&self, phone_number: u64) -> Result<Friendship, ApiError> {
        info!("Getting friendship with {}", phone_number);
        let path = format!("main/contacts/friendship/?phone_number={phone_number}");
        self.client.get(&path).await
    }

    async fn report_spam(
        &self,
        phone_number: u64,
        name: &str,
        country_code: &str,
    ) -> Result<bool, ApiError> {
        info!("Reporting {} as spam", phone_number);
        let body = json!({
            "country_code": country_code.to_uppercase(),
            "is_spam": true,
            "is_from_v": false,
            "name": name,
            "phone_number": phone_number,
        });
        let result: SuccessResponse = self
            .client
            .post("main/names/suggestion/report/", &body)
            .await?;
        Ok(result.success)
    }

    async fn numbers_count(&self) -> Result<u64, ApiError> {
        let result: NumbersCountResponse = self.client.get("main/contacts/count/").await?;
        Ok(result.count)
    }

    async fn get_comments(&self, uuid: &str) -> Result<CommentsResponse, ApiError> {
        info!("Getting comments for {}", uuid);
        let path = format!("main/comments/list/{uuid}");
        let result: CommentsResponse = self.client.get(&path).await?;
        debug!("{} comments retrieved", result.comments.len());
        Ok(result)
    }

    async fn get_comment(&self, comment_id: i64) -> Result<CommentDetails, ApiError> {
        let path = format!("main/comments/retrieve/{comment_id}");
        self.client.get(&path).await
    }

    async fn publish_comment(&self, uuid: &str, message: &str) -> Result<Comment, ApiError> {
        if message.trim().is_empty() {
            return Err(ApiError::InvalidInput("comment message is empty".to_string()));
        }
        info!("Publishing comment on {}", uuid);
        let path = format!("main/comments/add/{uuid}/");
        self.client.post(&path, &json!({ "message": message })).await
    }

    async fn approve_comment(&self, comment_id: i64) -> Result<bool, ApiError> {
        info!("Approving comment {}", comment_id);
        self.moderate_comment(comment_id, true).await
    }

    async fn ignore_comment(&self, comment_id: i64) -> Result<bool, ApiError> {
        info!("Ignoring comment {}", comment_id);
        self.moderate_comment(comment_id, false).await
    }

    async fn like_comment(&self, comment_id: i64) -> Result<bool, ApiError> {
        debug!("Liking comment {}", comment_id);
        let path = format!("main/comments/like/{comment_id}/");
        let result: SuccessResponse = self.client.post(&path, &json!({})).await?;
        Ok(result.success)
    }

    async fn unlike_comment(&self, comment_id: i64) -> Result<bool, ApiError> {
        debug!("Unliking comment {}", comment_id);
        let path = format!("main/comments/like/{comment_id}/");
        let result: SuccessResponse = self.client.delete(&path, Some(&json!({}))).await?;
        Ok(result.success)
    }

    async fn get_groups(&self) -> Result<Vec<Group>, ApiError> {
        info!("Getting name groups");
        let result: GroupsResponse = self.client.get("main/names/groups/").await?;

        let mut groups = result.groups;
        groups.sort_by(|a, b| b.count.cmp(&a.count));

        debug!("{} name groups retrieved", groups.len());
        Ok(groups)
    }

    async fn get_deleted_groups(&self) -> Result<HiddenNames, ApiError> {
        info!("Getting deleted name groups");
        self.client.get("main/settings/hidden-names/").await
    }

    async fn delete_group(&self, contact_ids: &[i64]) -> Result<bool, ApiError> {
        info!("Deleting name group with {} contacts", contact_ids.len());
        let body = json!({ "contact_ids": contact_ids });
        let result: SuccessResponse = self.client.post("main/contacts/hide/", &body).await?;
        Ok(result.success)
    }

    async fn restore_group(&self, contact_ids: &[i64]) -> Result<bool, ApiError> {
        info!("Restoring name group with {} contacts", contact_ids.len());
        let body = json!({ "contact_ids": contact_ids });
        let result: SuccessResponse = self
            .client
            .post("main/settings/hidden-names/", &body)
            .await?;
        Ok(result.success)
    }

    async fn ask_group_rename(
        &self,
        contact_ids: &[i64],
        new_name: &str,
    ) -> Result<bool, ApiError> {
        if new_name.trim().is_empty() {
            return Err(ApiError::InvalidInput("new name is empty".to_string()));
        }
        info!("Asking {} contacts to rename to {}", contact_ids.len(), new_name);
        let body = json!({ "contact_ids": contact_ids, "name": new_name });
        let result: SuccessResponse = self.client.post("main/names/suggestion/", &body).await?;
        Ok(result.success)
    }

    async fn get_socials(&self) -> Result<Social, ApiError> {
        info!("Getting social links");
        self.client.post("main/social/update/", &json!({})).await
    }

    async fn connect_social(
        &self,
        name: SocialName,
        token_or_url: &str,
    ) -> Result<bool, ApiError> {
        info!("Linking {}", name.as_str());
        let result: SuccessResponse = if name.links_by_url() {
            let body = json!({ "social_name": name.as_str(), "profile_id": token_or_url });
            self.client.post("main/social/update-url/", &body).await?
        } else {
            let body = json!({ "social_name": name.as_str(), "code_first": token_or_url });
            self.client
                .post("main/social/save-auth-token/", &body)
                .await?
        };
        Ok(result.success)
    }

    async fn disconnect_social(&self, name: SocialName) -> Result<bool, ApiError> {
        info!("Unlinking {}", name.as_str());
        let body = json!({ "social_name": name.as_str() });
        let result: SuccessResponse = self.client.post("main/social/delete/", &body).await?;
        Ok(result.success)
    }

    async fn switch_social_status(&self, name: SocialName, hide: bool) -> Result<bool, ApiError> {
        info!("Setting {} hidden={}", name.as_str(), hide);
        let body = json!({ "social_name": name.as_str(), "is_hidden": hide });
        let result: SuccessResponse = self.client.post("main/social/hide/", &body).await?;
        Ok(result.success)
    }

    async fn who_watched(&self) -> Result<Vec<Watcher>, ApiError> {
        info!("Getting profile watchers");
        let mut watchers: Vec<Watcher> =
            self.client.get("main/users/profile/who-watched/").await?;
        watchers.sort_by(|a, b| b.count.cmp(&a.count));
        debug!("{} watchers retrieved", watchers.len());
        Ok(watchers)
    }

    async fn who_deleted(&self) -> Result<Vec<Deleter>, ApiError> {
        info!("Getting contact-book deleters");
        self.client.get("main/users/profile/who-deleted/").await
    }

    async fn share_location(&self, uuid: &str) -> Result<bool, ApiError> {
        info!("Sharing location with {}", uuid);
        let path = format!("main/users/profile/share-location/{uuid}/");
        let result: SuccessResponse = self.client.post(&path, &json!({})).await?;
        Ok(result.success)
    }

    async fn stop_sharing_location(&self, uuids: &[&str]) -> Result<bool, ApiError> {
        info!("Stopping location share for {} users", uuids.len());
        let body = json!({ "uuids": uuids });
        let result: SuccessResponse = self
            .client
            .post("main/users/profile/share-location/stop-for-me/", &body)
            .await?;
        Ok(result.success)
    }

    async fn stop_shared_location(&self, uuids: &[&str]) -> Result<bool, ApiError> {
        info!("Dropping shared locations from {} users", uuids.len());
        let body = json!({ "uuids": uuids });
        let result: SuccessResponse = self
            .client
            .post("main/users/profile/share-location/stop/", &body)
            .await?;
        Ok(result.success)
    }

    async fn locations_shared_by_me(&self) -> Result<Vec<User>, ApiError> {
        info!("Getting users the account shares its location with");
        self.client.get("main/users/profile/share-location/").await
    }

    async fn locations_shared_with_me(&self) -> Result<SharedLocations, ApiError> {
        info!("Getting locations shared with the account");
        let result: SharedLocations = self
            .client
            .get("main/users/profile/share-location/for-me/")
            .await?;
        debug!("{} users share their location", result.shared_location_users.len());
        Ok(result)
    }

    async fn get_distance(&self, uuid: &str) -> Result<Option<f64>, ApiError> {
        let path = format!("main/users/profile/{uuid}");
        let view: ProfileView = self.client.get(&path).await?;
        Ok(view.profile.distance)
    }

    async fn suggest_turn_on_comments(&self, uuid: &str) -> Result<bool, ApiError> {
        info!("Suggesting {} turns on comments", uuid);
        let body = json!({ "uuid": uuid });
        let result: RequestedResponse = self
            .client
            .post("main/users/profile/suggest-turn-on-comments/", &body)
            .await?;
        Ok(result.requested)
    }

    async fn suggest_turn_on_mutual(&self, uuid: &str) -> Result<bool, ApiError> {
        info!("Suggesting {} turns on mutual contacts", uuid);
        let body = json!({ "uuid": uuid });
        let result: RequestedResponse = self
            .client
            .post("main/users/profile/suggest-turn-on-mutual/", &body)
            .await?;
        Ok(result.requested)
    }

    async fn suggest_turn_on_location(&self, uuid: &str) -> Result<bool, ApiError> {
        info!("Suggesting {} shares their location", uuid);
        let body = json!({ "uuid": uuid });
        let result: RequestedResponse = self
            .client
            .post("main/users/profile/suggest-turn-on-location/", &body)
            .await?;
        Ok(result.requested)
    }
}
