//! Profile records and the partial-update request.

use crate::model::comment::Comment;
use crate::model::social::Social;
use crate::model::user::User;
use chrono::NaiveDate;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// A user profile as the vendor stores it.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, Default)]
pub struct Profile {
    /// The user's unique ID
    #[serde(default)]
    pub uuid: Option<String>,
    /// First name
    #[serde(default)]
    pub first_name: Option<String>,
    /// Last name
    #[serde(default)]
    pub last_name: Option<String>,
    /// Email address
    #[serde(default)]
    pub email: Option<String>,
    /// Gender: `M`, `F` or absent
    #[serde(default)]
    pub gender: Option<String>,
    /// Date of birth
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    /// Profile picture URL
    #[serde(default)]
    pub profile_picture: Option<String>,
    /// Bio line
    #[serde(default)]
    pub slogan: Option<String>,
    /// Phone number in international format
    #[serde(default)]
    pub phone_number: Option<u64>,
    /// Dialing prefix of the phone number
    #[serde(default)]
    pub phone_prefix: Option<String>,
    /// Two-letter country code
    #[serde(default)]
    pub country_code: Option<String>,
    /// Cell carrier name
    #[serde(default)]
    pub carrier: Option<String>,
    /// Device platform: `android` or `ios`
    #[serde(default)]
    pub device_type: Option<String>,
    /// Login provider: `email` or `apple`
    #[serde(default)]
    pub login_type: Option<String>,
    /// Facebook profile id
    #[serde(default)]
    pub facebook_url: Option<String>,
    /// Google profile id
    #[serde(default)]
    pub google_url: Option<String>,
    /// Location name as free text
    #[serde(default)]
    pub location_name: Option<String>,
    /// Latitude of the last location fix
    #[serde(default)]
    pub location_latitude: Option<f64>,
    /// Longitude of the last location fix
    #[serde(default)]
    pub location_longitude: Option<f64>,
    /// Whether shared locations are enabled
    #[serde(default)]
    pub location_enabled: Option<bool>,
    /// Distance from the requesting account, if shared
    #[serde(default)]
    pub distance: Option<f64>,
    /// Whether comments are enabled on this profile
    #[serde(default)]
    pub comments_enabled: Option<bool>,
    /// Whether the user can see who deleted them
    #[serde(default)]
    pub who_deleted_enabled: Option<bool>,
    /// Whether the user can see who watched their profile
    #[serde(default)]
    pub who_watched_enabled: Option<bool>,
    /// Whether the user is premium
    #[serde(default)]
    pub is_premium: bool,
    /// Whether the user is verified
    #[serde(default)]
    pub is_verified: bool,
    /// Whether the user consented to the GDPR
    #[serde(default)]
    pub gdpr_consent: Option<bool>,
    /// Whether the requesting account is in this user's contacts
    #[serde(default)]
    pub me_in_contacts: Option<bool>,
    /// Identification confidence bucket
    #[serde(default)]
    pub user_type: Option<String>,
    /// Whether the subscription is verified
    #[serde(default)]
    pub verify_subscription: Option<bool>,
}

impl Profile {
    /// Full name, `first_name` + `last_name`.
    #[must_use]
    pub fn name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) if !last.is_empty() => format!("{first} {last}"),
            (Some(first), _) => first.clone(),
            (None, Some(last)) => last.clone(),
            (None, None) => String::new(),
        }
    }

    /// Age in whole years derived from `date_of_birth`, `0` when unknown
    /// or in the future.
    #[must_use]
    pub fn age(&self) -> u32 {
        let Some(dob) = self.date_of_birth else {
            return 0;
        };
        let today = chrono::Utc::now().date_naive();
        if dob > today {
            return 0;
        }
        ((today - dob).num_days() / 365) as u32
    }
}

/// A mutual contact between the caller and a viewed profile.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct MutualContact {
    /// Name as saved on the caller's side
    #[serde(default)]
    pub name: Option<String>,
    /// Phone number in international format
    #[serde(default)]
    pub phone_number: Option<u64>,
    /// The registered user, if any
    #[serde(default)]
    pub referenced_user: Option<User>,
    /// Date of birth in `YYYY-MM-DD` format
    #[serde(default)]
    pub date_of_birth: Option<String>,
}

/// Everything `/main/users/profile/{uuid}` returns: the profile itself plus
/// the social graph context around it.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, Default)]
pub struct ProfileView {
    /// The viewed profile
    pub profile: Profile,
    /// Whether the viewed user blocked comments
    #[serde(default)]
    pub comments_blocked: bool,
    /// Whether the viewed user blocked the caller
    #[serde(default)]
    pub is_he_blocked_me: bool,
    /// Whether the record is permanent
    #[serde(default)]
    pub is_permanent: bool,
    /// Whether the viewed user shares their location with the caller
    #[serde(default)]
    pub is_shared_location: bool,
    /// The most recent comment on the profile
    #[serde(default)]
    pub last_comment: Option<Comment>,
    /// Whether mutual contacts are visible
    #[serde(default)]
    pub mutual_contacts_available: bool,
    /// Mutual contacts, when visible
    #[serde(default)]
    pub mutual_contacts: Vec<MutualContact>,
    /// Whether the caller shares their location with the viewed user
    #[serde(default)]
    pub share_location: bool,
    /// Linked social networks
    #[serde(default)]
    pub social: Option<Social>,
}

/// Partial update for `/main/users/profile/`. Unset fields are left alone.
///
/// Built with the setter methods so client-side validation runs before the
/// request; the vendor silently drops invalid fields otherwise.
#[derive(Debug, Clone, Serialize, Default)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    slogan: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    date_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    device_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    login_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    facebook_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    profile_picture: Option<String>,
}

impl ProfileUpdate {
    /// Creates an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the first name.
    #[must_use]
    pub fn first_name(mut self, value: impl Into<String>) -> Self {
        self.first_name = Some(value.into());
        self
    }

    /// Sets the last name.
    #[must_use]
    pub fn last_name(mut self, value: impl Into<String>) -> Self {
        self.last_name = Some(value.into());
        self
    }

    /// Sets the email address.
    #[must_use]
    pub fn email(mut self, value: impl Into<String>) -> Self {
        self.email = Some(value.into());
        self
    }

    /// Sets the gender: `M`, `F`.
    #[must_use]
    pub fn gender(mut self, value: impl Into<String>) -> Self {
        self.gender = Some(value.into());
        self
    }

    /// Sets the bio line.
    #[must_use]
    pub fn slogan(mut self, value: impl Into<String>) -> Self {
        self.slogan = Some(value.into());
        self
    }

    /// Sets the date of birth, `YYYY-MM-DD`.
    #[must_use]
    pub fn date_of_birth(mut self, value: impl Into<String>) -> Self {
        self.date_of_birth = Some(value.into());
        self
    }

    /// Sets the two-letter country code; anything longer is truncated.
    #[must_use]
    pub fn country_code(mut self, value: impl Into<String>) -> Self {
        let mut code: String = value.into().to_uppercase();
        code.truncate(2);
        self.country_code = Some(code);
        self
    }

    /// Sets the device type: `android` or `ios`.
    #[must_use]
    pub fn device_type(mut self, value: impl Into<String>) -> Self {
        self.device_type = Some(value.into());
        self
    }

    /// Sets the login provider: `email` or `apple`.
    #[must_use]
    pub fn login_type(mut self, value: impl Into<String>) -> Self {
        self.login_type = Some(value.into());
        self
    }

    /// Sets the Facebook profile id.
    #[must_use]
    pub fn facebook_url(mut self, value: impl Into<String>) -> Self {
        self.facebook_url = Some(value.into());
        self
    }

    /// Sets the profile picture URL.
    #[must_use]
    pub fn profile_picture(mut self, value: impl Into<String>) -> Self {
        self.profile_picture = Some(value.into());
        self
    }

    /// Whether any field has been set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        serde_json::to_value(self)
            .map(|v| v.as_object().map(|o| o.is_empty()).unwrap_or(true))
            .unwrap_or(true)
    }

    /// Date-of-birth accessor used by validation.
    #[must_use]
    pub fn date_of_birth_value(&self) -> Option<&str> {
        self.date_of_birth.as_deref()
    }

    /// Email accessor used by validation.
    #[must_use]
    pub fn email_value(&self) -> Option<&str> {
        self.email.as_deref()
    }
}
