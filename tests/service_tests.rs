use me_client::application::interfaces::{AccountService, SettingsService, SocialService};
use me_client::application::services::{
    AccountServiceImpl, SettingsServiceImpl, SocialServiceImpl,
};
use me_client::client::MeClient;
use me_client::config::Config;
use me_client::error::ApiError;
use me_client::model::auth::Credential;
use me_client::model::contact::NewContact;
use me_client::model::profile::ProfileUpdate;
use me_client::model::settings::SettingsUpdate;
use me_client::model::social::SocialName;
use mockito::{Matcher, Server};
use serde_json::json;
use std::sync::Arc;

fn test_client(server_url: &str) -> Arc<MeClient> {
    Arc::new(MeClient::with_credential(
        Arc::new(Config::with_base_url(server_url)),
        Credential::new("acc-1", "ref-1"),
    ))
}

#[tokio::test]
async fn phone_search_returns_identification_record() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/main/contacts/search/?phone_number=972123456789")
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(
            r#"{
                "contact": {
                    "name": "Dave Cooper",
                    "phone_number": 972123456789,
                    "suggested_as_spam": 3,
                    "user_type": "ORANGE",
                    "cached": true
                }
            }"#,
        )
        .create_async()
        .await;

    let account = AccountServiceImpl::new(test_client(&server.url()));
    let contact = account
        .phone_search("+972 12-345-6789")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(contact.name.as_deref(), Some("Dave Cooper"));
    assert_eq!(contact.spam_count(), 3);
    assert!(contact.cached);

    mock.assert_async().await;
}

#[tokio::test]
async fn phone_search_maps_not_found_to_none() {
    let mut server = Server::new_async().await;

    server
        .mock("GET", "/main/contacts/search/?phone_number=972123456789")
        .with_status(404)
        .with_body(r#"{"detail": "Not found."}"#)
        .create_async()
        .await;

    let account = AccountServiceImpl::new(test_client(&server.url()));
    let result = account.phone_search("972123456789").await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn phone_search_rejects_malformed_number() {
    let server = Server::new_async().await;
    let account = AccountServiceImpl::new(test_client(&server.url()));

    let err = account.phone_search("123").await.err().unwrap();
    assert!(matches!(err, ApiError::InvalidInput(_)));
}

#[tokio::test]
async fn empty_profile_update_is_rejected_locally() {
    let server = Server::new_async().await;
    let account = AccountServiceImpl::new(test_client(&server.url()));

    let err = account
        .update_profile(&ProfileUpdate::new())
        .await
        .err()
        .unwrap();
    assert!(matches!(err, ApiError::InvalidInput(_)));
}

#[tokio::test]
async fn profile_update_validates_date_and_email() {
    let server = Server::new_async().await;
    let account = AccountServiceImpl::new(test_client(&server.url()));

    let bad_date = ProfileUpdate::new().date_of_birth("15-05-1997");
    assert!(account.update_profile(&bad_date).await.is_err());

    let bad_email = ProfileUpdate::new().email("not-an-email");
    assert!(account.update_profile(&bad_email).await.is_err());
}

#[tokio::test]
async fn profile_update_sends_only_set_fields() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("PATCH", "/main/users/profile/")
        .match_body(Matcher::Json(json!({
            "first_name": "Dave",
            "slogan": "hello there",
        })))
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"uuid": "uuid-1", "first_name": "Dave", "slogan": "hello there"}"#)
        .create_async()
        .await;

    let account = AccountServiceImpl::new(test_client(&server.url()));
    let update = ProfileUpdate::new().first_name("Dave").slogan("hello there");
    let profile = account.update_profile(&update).await.unwrap();

    assert_eq!(profile.first_name.as_deref(), Some("Dave"));
    mock.assert_async().await;
}

#[tokio::test]
async fn contact_upload_reports_sync_counters() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("POST", "/main/contacts/sync/")
        .match_body(Matcher::Json(json!({
            "add": [
                {"name": "Alice", "phone_number": 972111111111u64,
                 "country_code": null, "date_of_birth": null}
            ],
            "is_first": false,
            "remove": [],
        })))
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"total": 1, "added": 1}"#)
        .create_async()
        .await;

    let account = AccountServiceImpl::new(test_client(&server.url()));
    let contacts = vec![NewContact {
        name: "Alice".to_string(),
        phone_number: 972111111111,
        country_code: None,
        date_of_birth: None,
    }];

    let result = account.add_contacts(&contacts).await.unwrap();
    assert_eq!(result.added, 1);

    mock.assert_async().await;
}

#[tokio::test]
async fn block_profile_returns_vendor_acknowledgement() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("POST", "/main/users/profile/block/")
        .match_body(Matcher::Json(json!({
            "phone_number": 972123456789u64,
            "block_contact": true,
            "me_full_block": false,
        })))
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"success": true}"#)
        .create_async()
        .await;

    let account = AccountServiceImpl::new(test_client(&server.url()));
    assert!(account.block_profile(972123456789, true, false).await.unwrap());

    mock.assert_async().await;
}

#[tokio::test]
async fn spam_report_uppercases_country_code() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("POST", "/main/names/suggestion/report/")
        .match_body(Matcher::Json(json!({
            "country_code": "IL",
            "is_spam": true,
            "is_from_v": false,
            "name": "Persistent Telemarketer",
            "phone_number": 972123456789u64,
        })))
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"success": true}"#)
        .create_async()
        .await;

    let social = SocialServiceImpl::new(test_client(&server.url()));
    assert!(
        social
            .report_spam(972123456789, "Persistent Telemarketer", "il")
            .await
            .unwrap()
    );

    mock.assert_async().await;
}

#[tokio::test]
async fn suspend_account_reports_suspension_state() {
    let mut server = Server::new_async().await;

    server
        .mock("PUT", "/main/settings/suspend-user/")
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"contact_suspended": true}"#)
        .create_async()
        .await;

    let account = AccountServiceImpl::new(test_client(&server.url()));
    assert!(account.suspend_account().await.unwrap());
}

#[tokio::test]
async fn name_groups_come_back_largest_first() {
    let mut server = Server::new_async().await;

    server
        .mock("GET", "/main/names/groups/")
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(
            r#"{
                "groups": [
                    {"name": "Davey", "count": 2, "contact_ids": [1, 2]},
                    {"name": "David", "count": 7, "contact_ids": [3]},
                    {"name": "Dave", "count": 5, "contact_ids": [4]}
                ]
            }"#,
        )
        .create_async()
        .await;

    let social = SocialServiceImpl::new(test_client(&server.url()));
    let groups = social.get_groups().await.unwrap();

    let counts: Vec<u32> = groups.iter().map(|g| g.count).collect();
    assert_eq!(counts, vec![7, 5, 2]);
    assert_eq!(groups[0].name.as_deref(), Some("David"));
}

#[tokio::test]
async fn watchers_come_back_most_frequent_first() {
    let mut server = Server::new_async().await;

    server
        .mock("GET", "/main/users/profile/who-watched/")
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(
            r#"[
                {"user": {"uuid": "u1"}, "count": 1},
                {"user": {"uuid": "u2"}, "count": 9},
                {"user": {"uuid": "u3"}, "count": 4}
            ]"#,
        )
        .create_async()
        .await;

    let social = SocialServiceImpl::new(test_client(&server.url()));
    let watchers = social.who_watched().await.unwrap();

    let counts: Vec<u32> = watchers.iter().map(|w| w.count).collect();
    assert_eq!(counts, vec![9, 4, 1]);
}

#[tokio::test]
async fn approve_comment_checks_resulting_status() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("POST", "/main/comments/approve/17/")
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"id": 17, "message": "nice guy", "status": "approved"}"#)
        .create_async()
        .await;

    let social = SocialServiceImpl::new(test_client(&server.url()));
    assert!(social.approve_comment(17).await.unwrap());

    mock.assert_async().await;
}

#[tokio::test]
async fn ignore_comment_uses_delete_verb() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("DELETE", "/main/comments/approve/17/")
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"id": 17, "message": "nice guy", "status": "ignored"}"#)
        .create_async()
        .await;

    let social = SocialServiceImpl::new(test_client(&server.url()));
    assert!(social.ignore_comment(17).await.unwrap());

    mock.assert_async().await;
}

#[tokio::test]
async fn publish_comment_rejects_empty_message() {
    let server = Server::new_async().await;
    let social = SocialServiceImpl::new(test_client(&server.url()));

    let err = social.publish_comment("uuid-1", "   ").await.err().unwrap();
    assert!(matches!(err, ApiError::InvalidInput(_)));
}

#[tokio::test]
async fn url_linked_networks_use_the_url_endpoint() {
    let mut server = Server::new_async().await;

    let url_mock = server
        .mock("POST", "/main/social/update-url/")
        .match_body(Matcher::Json(json!({
            "social_name": "pinterest",
            "profile_id": "https://pin.it/example",
        })))
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"success": true}"#)
        .create_async()
        .await;

    let token_mock = server
        .mock("POST", "/main/social/save-auth-token/")
        .match_body(Matcher::Json(json!({
            "social_name": "instagram",
            "code_first": "oauth-code",
        })))
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"success": true}"#)
        .create_async()
        .await;

    let social = SocialServiceImpl::new(test_client(&server.url()));
    assert!(
        social
            .connect_social(SocialName::Pinterest, "https://pin.it/example")
            .await
            .unwrap()
    );
    assert!(
        social
            .connect_social(SocialName::Instagram, "oauth-code")
            .await
            .unwrap()
    );

    url_mock.assert_async().await;
    token_mock.assert_async().await;
}

#[tokio::test]
async fn friendship_statistics_round_trip() {
    let mut server = Server::new_async().await;

    server
        .mock("GET", "/main/contacts/friendship/?phone_number=972123456789")
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(
            r#"{
                "calls_duration": 1200,
                "he_called": 3,
                "i_called": 5,
                "he_named": "Dave",
                "mutual_friends_count": 2
            }"#,
        )
        .create_async()
        .await;

    let social = SocialServiceImpl::new(test_client(&server.url()));
    let friendship = social.friendship(972123456789).await.unwrap();

    assert_eq!(friendship.calls_duration, Some(1200));
    assert_eq!(friendship.i_called, 5);
    assert_eq!(friendship.he_named.as_deref(), Some("Dave"));
}

#[tokio::test]
async fn numbers_count_unwraps_the_counter() {
    let mut server = Server::new_async().await;

    server
        .mock("GET", "/main/contacts/count/")
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"count": 183}"#)
        .create_async()
        .await;

    let social = SocialServiceImpl::new(test_client(&server.url()));
    assert_eq!(social.numbers_count().await.unwrap(), 183);
}

#[tokio::test]
async fn restore_group_posts_to_hidden_names() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("POST", "/main/settings/hidden-names/")
        .match_body(Matcher::Json(json!({ "contact_ids": [11, 12] })))
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"success": true}"#)
        .create_async()
        .await;

    let social = SocialServiceImpl::new(test_client(&server.url()));
    assert!(social.restore_group(&[11, 12]).await.unwrap());

    mock.assert_async().await;
}

#[tokio::test]
async fn share_location_targets_the_user() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("POST", "/main/users/profile/share-location/uuid-1/")
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"success": true}"#)
        .create_async()
        .await;

    let social = SocialServiceImpl::new(test_client(&server.url()));
    assert!(social.share_location("uuid-1").await.unwrap());

    mock.assert_async().await;
}

#[tokio::test]
async fn stopping_location_shares_sends_the_uuid_list() {
    let mut server = Server::new_async().await;

    let stop_for_me = server
        .mock("POST", "/main/users/profile/share-location/stop-for-me/")
        .match_body(Matcher::Json(json!({ "uuids": ["u1", "u2"] })))
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"success": true}"#)
        .create_async()
        .await;

    let stop = server
        .mock("POST", "/main/users/profile/share-location/stop/")
        .match_body(Matcher::Json(json!({ "uuids": ["u3"] })))
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"success": true}"#)
        .create_async()
        .await;

    let social = SocialServiceImpl::new(test_client(&server.url()));
    assert!(social.stop_sharing_location(&["u1", "u2"]).await.unwrap());
    assert!(social.stop_shared_location(&["u3"]).await.unwrap());

    stop_for_me.assert_async().await;
    stop.assert_async().await;
}

#[tokio::test]
async fn locations_shared_with_me_carry_distances() {
    let mut server = Server::new_async().await;

    server
        .mock("GET", "/main/users/profile/share-location/for-me/")
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(
            r#"{
                "shared_location_user_uuids": ["u1", "u2"],
                "shared_location_users": [
                    {"author": {"uuid": "u1", "first_name": "Alice"},
                     "distance": 1.25, "i_shared": true},
                    {"author": {"uuid": "u2"}, "i_shared": false}
                ]
            }"#,
        )
        .create_async()
        .await;

    let social = SocialServiceImpl::new(test_client(&server.url()));
    let shared = social.locations_shared_with_me().await.unwrap();

    assert_eq!(shared.shared_location_user_uuids, vec!["u1", "u2"]);
    assert_eq!(shared.shared_location_users[0].distance, Some(1.25));
    assert!(shared.shared_location_users[0].i_shared);
    assert_eq!(shared.shared_location_users[1].distance, None);
}

#[tokio::test]
async fn suggestion_unwraps_the_requested_flag() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("POST", "/main/users/profile/suggest-turn-on-comments/")
        .match_body(Matcher::Json(json!({ "uuid": "uuid-1" })))
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"requested": true}"#)
        .create_async()
        .await;

    let social = SocialServiceImpl::new(test_client(&server.url()));
    assert!(social.suggest_turn_on_comments("uuid-1").await.unwrap());

    mock.assert_async().await;
}

#[tokio::test]
async fn empty_settings_update_is_rejected_locally() {
    let server = Server::new_async().await;
    let settings = SettingsServiceImpl::new(test_client(&server.url()));

    let err = settings
        .update_settings(&SettingsUpdate::new())
        .await
        .err()
        .unwrap();
    assert!(matches!(err, ApiError::InvalidInput(_)));
}

#[tokio::test]
async fn settings_update_round_trips() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("PATCH", "/main/settings/")
        .match_body(Matcher::Json(json!({ "who_watched_enabled": true })))
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"who_watched_enabled": true, "spammers_count": 12}"#)
        .create_async()
        .await;

    let settings = SettingsServiceImpl::new(test_client(&server.url()));
    let update = SettingsUpdate::new().who_watched_enabled(true);
    let result = settings.update_settings(&update).await.unwrap();

    assert!(result.who_watched_enabled);
    assert_eq!(result.spammers_count, 12);

    mock.assert_async().await;
}
