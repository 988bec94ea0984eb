use assert_json_diff::assert_json_eq;
use me_client::model::auth::Credential;
use me_client::model::comment::{CommentStatus, CommentsResponse};
use me_client::model::contact::{Call, CallType, ContactSearchResponse};
use me_client::model::profile::ProfileView;
use me_client::model::settings::Settings;
use me_client::model::social::SocialName;
use serde_json::json;

#[test]
fn contact_search_response_deserializes() {
    let body = r#"{
        "contact": {
            "name": "Chandler Bing",
            "picture": null,
            "user": {
                "uuid": "uuid-1",
                "first_name": "Chandler",
                "last_name": "Bing",
                "is_verified": true,
                "phone_number": 972123456789
            },
            "suggested_as_spam": 0,
            "user_type": "BLUE",
            "phone_number": 972123456789,
            "cached": false,
            "is_my_contact": true
        }
    }"#;

    let parsed: ContactSearchResponse = serde_json::from_str(body).unwrap();
    let contact = parsed.contact;

    assert_eq!(contact.name.as_deref(), Some("Chandler Bing"));
    assert_eq!(contact.spam_count(), 0);
    assert!(contact.is_my_contact);

    let user = contact.user.unwrap();
    assert_eq!(user.uuid, "uuid-1");
    assert_eq!(user.name(), "Chandler Bing");
    assert!(user.is_verified);
}

#[test]
fn profile_view_deserializes_with_context() {
    let body = r#"{
        "profile": {
            "uuid": "uuid-1",
            "first_name": "Monica",
            "last_name": "Geller",
            "date_of_birth": "1969-04-22",
            "is_verified": true
        },
        "comments_blocked": false,
        "is_he_blocked_me": false,
        "mutual_contacts_available": true,
        "mutual_contacts": [
            {"name": "Ross", "phone_number": 972111111111}
        ],
        "social": {
            "instagram": {"is_active": true, "profile_id": "monica.geller"}
        }
    }"#;

    let view: ProfileView = serde_json::from_str(body).unwrap();
    assert_eq!(view.profile.name(), "Monica Geller");
    assert!(view.profile.age() > 50);
    assert_eq!(view.mutual_contacts.len(), 1);

    let social = view.social.unwrap();
    assert!(social.network(SocialName::Instagram).is_active);
    assert!(!social.network(SocialName::Spotify).is_active);
}

#[test]
fn comments_response_carries_moderation_states() {
    let body = r#"{
        "comments": [
            {"id": 1, "message": "great guy", "status": "approved", "like_count": 2},
            {"id": 2, "message": "hmm", "status": "waiting"}
        ],
        "count": 2
    }"#;

    let parsed: CommentsResponse = serde_json::from_str(body).unwrap();
    assert_eq!(parsed.count, 2);
    assert!(parsed.comments[0].is_approved());
    assert_eq!(parsed.comments[1].status, Some(CommentStatus::Waiting));
    assert!(parsed.user_comment.is_none());
}

#[test]
fn settings_tolerate_partial_payloads() {
    let settings: Settings = serde_json::from_str("{}").unwrap();
    assert!(!settings.who_watched_enabled);
    assert_eq!(settings.spammers_count, 0);
    assert!(settings.language.is_none());
}

#[test]
fn credential_persists_without_empty_pwd_token() {
    let credential = Credential::new("acc-1", "ref-1");
    let value = serde_json::to_value(&credential).unwrap();
    assert_json_eq!(value, json!({ "access": "acc-1", "refresh": "ref-1" }));

    let restored: Credential = serde_json::from_value(json!({
        "access": "acc-1",
        "refresh": "ref-1",
        "pwd_token": "pwd-1"
    }))
    .unwrap();
    assert_eq!(restored.pwd_token.as_deref(), Some("pwd-1"));
}

#[test]
fn call_log_entry_uses_vendor_field_names() {
    let call = Call {
        name: "Joey".to_string(),
        phone_number: 972111111111,
        call_type: CallType::Missed,
        called_at: "2023-01-01T12:00:00Z".to_string(),
        duration: 0,
        tag: None,
    };

    let value = serde_json::to_value(&call).unwrap();
    assert_eq!(value["type"], "missed");
    assert_eq!(value["phone_number"], 972111111111u64);
}

#[test]
fn social_names_match_the_wire() {
    assert_eq!(SocialName::Facebook.as_str(), "facebook");
    assert_eq!(SocialName::Tiktok.as_str(), "tiktok");
    assert!(SocialName::Pinterest.links_by_url());
    assert!(SocialName::Linkedin.links_by_url());
    assert!(!SocialName::Twitter.links_by_url());
}
