//! Linked social networks, watchers, deleters and name groups.

use crate::model::user::User;
use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// The social networks the vendor knows how to link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialName {
    /// Facebook
    Facebook,
    /// Instagram
    Instagram,
    /// Linkedin
    Linkedin,
    /// Pinterest
    Pinterest,
    /// Spotify
    Spotify,
    /// Tiktok
    Tiktok,
    /// Twitter
    Twitter,
}

impl SocialName {
    /// The wire name the vendor expects in request bodies.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            SocialName::Facebook => "facebook",
            SocialName::Instagram => "instagram",
            SocialName::Linkedin => "linkedin",
            SocialName::Pinterest => "pinterest",
            SocialName::Spotify => "spotify",
            SocialName::Tiktok => "tiktok",
            SocialName::Twitter => "twitter",
        }
    }

    /// Whether this network links via a profile URL instead of an OAuth code.
    #[must_use]
    pub fn links_by_url(&self) -> bool {
        matches!(self, SocialName::Pinterest | SocialName::Linkedin)
    }
}

/// A post pulled from a linked network.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct SocialPost {
    /// Display name of the poster
    #[serde(default)]
    pub author: Option<String>,
    /// Network-side account id of the poster
    #[serde(default)]
    pub owner: Option<String>,
    /// Post image URL
    #[serde(default)]
    pub photo: Option<String>,
    /// When the post was published
    #[serde(default)]
    pub posted_at: Option<DateTime<Utc>>,
    /// Network-side id used to open the post
    #[serde(default)]
    pub redirect_id: Option<String>,
    /// Primary text
    #[serde(default)]
    pub text_first: Option<String>,
    /// Secondary text
    #[serde(default)]
    pub text_second: Option<String>,
}

/// One linked network on a profile.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, Default)]
pub struct SocialNetwork {
    /// Whether the network is linked
    #[serde(default)]
    pub is_active: bool,
    /// Whether the link is hidden from other users
    #[serde(default)]
    pub is_hidden: bool,
    /// Network-side profile id or URL
    #[serde(default)]
    pub profile_id: Option<String>,
    /// Recent posts, when the network exposes them
    #[serde(default)]
    pub posts: Vec<SocialPost>,
}

/// The full social block as returned on profiles and by
/// `/main/social/update/`.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, Default)]
pub struct Social {
    /// Facebook link state
    #[serde(default)]
    pub facebook: SocialNetwork,
    /// Instagram link state
    #[serde(default)]
    pub instagram: SocialNetwork,
    /// Linkedin link state
    #[serde(default)]
    pub linkedin: SocialNetwork,
    /// Pinterest link state
    #[serde(default)]
    pub pinterest: SocialNetwork,
    /// Spotify link state
    #[serde(default)]
    pub spotify: SocialNetwork,
    /// Tiktok link state
    #[serde(default)]
    pub tiktok: SocialNetwork,
    /// Twitter link state
    #[serde(default)]
    pub twitter: SocialNetwork,
}

impl Social {
    /// Link state for a given network.
    #[must_use]
    pub fn network(&self, name: SocialName) -> &SocialNetwork {
        match name {
            SocialName::Facebook => &self.facebook,
            SocialName::Instagram => &self.instagram,
            SocialName::Linkedin => &self.linkedin,
            SocialName::Pinterest => &self.pinterest,
            SocialName::Spotify => &self.spotify,
            SocialName::Tiktok => &self.tiktok,
            SocialName::Twitter => &self.twitter,
        }
    }
}

/// Someone who watched the caller's profile.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct Watcher {
    /// When they last viewed
    #[serde(default)]
    pub last_view: Option<DateTime<Utc>>,
    /// Who viewed
    pub user: User,
    /// How many times
    #[serde(default)]
    pub count: u32,
    /// Whether the view came from a search
    #[serde(default)]
    pub is_search: Option<bool>,
}

/// One user a location is shared with, as returned by
/// `/main/users/profile/share-location/for-me/`.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct SharedLocationUser {
    /// The user on the other side of the share
    pub author: User,
    /// Distance to them in kilometers
    #[serde(default)]
    pub distance: Option<f64>,
    /// Whether the caller shares their own location back
    #[serde(default)]
    pub i_shared: bool,
}

/// Locations other users share with the caller.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, Default)]
pub struct SharedLocations {
    /// Uuids of the sharing users
    #[serde(default)]
    pub shared_location_user_uuids: Vec<String>,
    /// The sharing users with distances
    #[serde(default)]
    pub shared_location_users: Vec<SharedLocationUser>,
}

/// Someone who deleted the caller from their contact book.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct Deleter {
    /// When they deleted
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Who deleted
    pub user: User,
}

/// One contact inside a name group.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct GroupContact {
    /// Contact record id
    #[serde(default)]
    pub id: Option<i64>,
    /// When the record was created
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// When the record was last modified
    #[serde(default)]
    pub modified_at: Option<DateTime<Utc>>,
    /// The user who saved the caller under this name
    #[serde(default)]
    pub user: Option<User>,
    /// Whether the user is in the caller's contact book
    #[serde(default)]
    pub in_contact_list: bool,
}

/// A group of people who saved the caller under the same name.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, Default)]
pub struct Group {
    /// The shared name
    #[serde(default)]
    pub name: Option<String>,
    /// How many contacts use it
    #[serde(default)]
    pub count: u32,
    /// Most recent contact activity in the group
    #[serde(default)]
    pub last_contact_at: Option<DateTime<Utc>>,
    /// The contacts in the group
    #[serde(default)]
    pub contacts: Vec<GroupContact>,
    /// Contact record ids, used for delete/rename requests
    #[serde(default)]
    pub contact_ids: Vec<i64>,
}

/// Response of `/main/names/groups/`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct GroupsResponse {
    #[serde(default)]
    pub groups: Vec<Group>,
}

/// A deleted (hidden) group name.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct HiddenName {
    /// Contact record id
    #[serde(default)]
    pub contact_id: Option<i64>,
    /// When the name was created
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// When the name was hidden
    #[serde(default)]
    pub hidden_at: Option<DateTime<Utc>>,
    /// The hidden name
    #[serde(default)]
    pub name: Option<String>,
    /// The user who saved the caller under this name
    #[serde(default)]
    pub user: Option<User>,
}

/// Response of `/main/settings/hidden-names/`.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, Default)]
pub struct HiddenNames {
    /// The hidden names
    #[serde(default)]
    pub names: Vec<HiddenName>,
    /// Total count
    #[serde(default)]
    pub count: u32,
    /// Contact record ids for restore requests
    #[serde(default)]
    pub contact_ids: Vec<i64>,
}
