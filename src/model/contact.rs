//! Contact search results, contact/call-log sync payloads and blocking.

use crate::model::user::User;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Result of a phone-number lookup.
///
/// `user` is present only when the number belongs to a registered Me user;
/// for everyone else the vendor returns the crowd-sourced name alone.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct Contact {
    /// Crowd-sourced name for this number
    #[serde(default)]
    pub name: Option<String>,
    /// Contact picture URL
    #[serde(default)]
    pub picture: Option<String>,
    /// The registered user behind this number, if any
    #[serde(default)]
    pub user: Option<User>,
    /// How many accounts suggested this number as spam
    #[serde(default)]
    pub suggested_as_spam: i64,
    /// Identification confidence bucket: `BLUE`, `GREEN`, `YELLOW`,
    /// `ORANGE` or `RED` (spam)
    #[serde(default)]
    pub user_type: Option<String>,
    /// Phone number in international format
    pub phone_number: u64,
    /// Whether the result was served from the vendor cache
    #[serde(default)]
    pub cached: bool,
    /// Whether the name is permanent
    #[serde(default)]
    pub is_permanent: bool,
    /// Whether a name change is pending moderation
    #[serde(default)]
    pub is_pending_name_change: bool,
    /// Whether the number is in the caller's own contact book
    #[serde(default)]
    pub is_my_contact: bool,
    /// Whether the contact shares their location with the caller
    #[serde(default)]
    pub is_shared_location: bool,
}

impl Contact {
    /// Spam report count for this number. Anything above zero means the
    /// crowd flagged it.
    #[must_use]
    pub fn spam_count(&self) -> i64 {
        self.suggested_as_spam
    }
}

/// Envelope the search endpoint wraps a [`Contact`] in.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactSearchResponse {
    /// The matched contact
    pub contact: Contact,
}

/// A contact entry to upload via `/main/contacts/sync/`.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct NewContact {
    /// Contact name as it appears in the device contact book
    pub name: String,
    /// Phone number in international format
    pub phone_number: u64,
    /// Two-letter country code
    #[serde(default)]
    pub country_code: Option<String>,
    /// Date of birth in `YYYY-MM-DD` format
    #[serde(default)]
    pub date_of_birth: Option<String>,
}

/// Call direction for call-log uploads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallType {
    /// An answered inbound call
    Incoming,
    /// An outbound call
    Outgoing,
    /// An unanswered inbound call
    Missed,
}

/// A call-log entry to upload via `/main/call-log/change-sync/`.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct Call {
    /// Name shown for the call
    pub name: String,
    /// Phone number in international format
    pub phone_number: u64,
    /// Call direction
    #[serde(rename = "type")]
    pub call_type: CallType,
    /// Timestamp of the call, `YYYY-MM-DDTHH:MM:SSZ`
    pub called_at: String,
    /// Call duration in seconds
    pub duration: u32,
    /// Optional user tag
    #[serde(default)]
    pub tag: Option<String>,
}

/// Body for the contact sync endpoint: additions and removals in one call.
#[derive(Debug, Serialize)]
pub(crate) struct ContactSyncRequest<'a> {
    pub add: &'a [NewContact],
    pub is_first: bool,
    pub remove: &'a [NewContact],
}

/// Body for the call-log sync endpoint.
#[derive(Debug, Serialize)]
pub(crate) struct CallSyncRequest<'a> {
    pub add: &'a [Call],
    pub remove: &'a [Call],
}

/// Upload outcome counters returned by both sync endpoints.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, Default)]
pub struct SyncResponse {
    /// Total entries in the request
    #[serde(default)]
    pub total: u32,
    /// Entries newly added
    #[serde(default)]
    pub added: u32,
    /// Entries that updated an existing record
    #[serde(default)]
    pub updated: u32,
    /// Entries removed
    #[serde(default)]
    pub removed: u32,
    /// Entries the vendor rejected
    #[serde(default)]
    pub failed: u32,
    /// Entries identical to what the vendor already had
    #[serde(default)]
    pub same: u32,
}

/// A blocked number as listed by `/main/settings/blocked-phone-numbers/`.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct BlockedNumber {
    /// Whether calls from this number are blocked
    pub block_contact: bool,
    /// Whether the number is blocked from social features too
    pub me_full_block: bool,
    /// Phone number in international format
    pub phone_number: u64,
}

/// Friendship statistics between the caller and another number.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, Default)]
pub struct Friendship {
    /// Total duration of calls between the two, in seconds
    #[serde(default)]
    pub calls_duration: Option<u32>,
    /// How many times the other side called
    #[serde(default)]
    pub he_called: u32,
    /// How many times the caller called
    #[serde(default)]
    pub i_called: u32,
    /// How the other side named the caller
    #[serde(default)]
    pub he_named: Option<String>,
    /// How the caller named the other side
    #[serde(default)]
    pub i_named: Option<String>,
    /// How many times the other side watched the caller's profile
    #[serde(default)]
    pub he_watched: u32,
    /// How many times the caller watched the other side's profile
    #[serde(default)]
    pub i_watched: u32,
    /// The other side's comment on the caller's profile
    #[serde(default)]
    pub his_comment: Option<String>,
    /// The caller's comment on the other side's profile
    #[serde(default)]
    pub my_comment: Option<String>,
    /// Number of mutual friends
    #[serde(default)]
    pub mutual_friends_count: u32,
    /// Whether the other side is premium
    #[serde(default)]
    pub is_premium: bool,
}
