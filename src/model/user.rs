use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// A registered Me user as embedded in search results, comments, watcher
/// lists and so on. Fields mirror the vendor payload one-to-one; anything
/// the vendor omits for privacy reasons is `Option`.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, Default)]
pub struct User {
    /// The user's unique ID
    pub uuid: String,
    /// First name
    #[serde(default)]
    pub first_name: Option<String>,
    /// Last name
    #[serde(default)]
    pub last_name: Option<String>,
    /// Email address
    #[serde(default)]
    pub email: Option<String>,
    /// Profile picture URL
    #[serde(default)]
    pub profile_picture: Option<String>,
    /// Gender: `M`, `F` or absent
    #[serde(default)]
    pub gender: Option<String>,
    /// Whether the user is verified (has linked enough social accounts)
    #[serde(default)]
    pub is_verified: bool,
    /// Phone number in international format
    #[serde(default)]
    pub phone_number: Option<u64>,
    /// The user's bio line
    #[serde(default)]
    pub slogan: Option<String>,
    /// Whether the user has a premium subscription
    #[serde(default)]
    pub is_premium: bool,
    /// Whether the subscription is verified
    #[serde(default)]
    pub verify_subscription: bool,
    /// Numeric account id, present only in some payloads
    #[serde(default)]
    pub id: Option<i64>,
    /// Comment count, present only in search payloads
    #[serde(default)]
    pub comment_count: Option<i64>,
    /// Whether the user enabled shared locations
    #[serde(default)]
    pub location_enabled: Option<bool>,
    /// Distance from the requesting account in kilometers, if shared
    #[serde(default)]
    pub distance: Option<f64>,
}

impl User {
    /// The user's full name: `first_name` + `last_name`.
    #[must_use]
    pub fn name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) if !last.is_empty() => format!("{first} {last}"),
            (Some(first), _) => first.clone(),
            (None, Some(last)) => last.clone(),
            (None, None) => String::new(),
        }
    }
}
