//! Account settings: the full record and the partial update.

use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// The account settings record from `/main/settings/`.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Show common contacts between users
    #[serde(default)]
    pub mutual_contacts_available: bool,
    /// Record who watched the profile
    #[serde(default)]
    pub who_watched_enabled: bool,
    /// Record who deleted the account from their contacts
    #[serde(default)]
    pub who_deleted_enabled: bool,
    /// Allow others to comment on the profile
    #[serde(default)]
    pub comments_enabled: bool,
    /// Allow shared locations
    #[serde(default)]
    pub location_enabled: bool,
    /// Notification language code
    #[serde(default)]
    pub language: Option<String>,
    /// Whether the account is currently suspended
    #[serde(default)]
    pub contact_suspended: bool,
    /// Last vendor-side backup timestamp
    #[serde(default)]
    pub last_backup_at: Option<String>,
    /// Last vendor-side restore timestamp
    #[serde(default)]
    pub last_restore_at: Option<String>,
    /// Spammer count shown in the app
    #[serde(default)]
    pub spammers_count: u64,
    /// Master notification switch
    #[serde(default)]
    pub notifications_enabled: bool,
    /// Notify on new watchers
    #[serde(default)]
    pub who_watched_notification_enabled: bool,
    /// Notify on deleters
    #[serde(default)]
    pub who_deleted_notification_enabled: bool,
    /// Notify on new comments
    #[serde(default)]
    pub comments_notification_enabled: bool,
    /// Notify on contact birthdays
    #[serde(default)]
    pub birthday_notification_enabled: bool,
    /// Notify on distance events
    #[serde(default)]
    pub distance_notification_enabled: bool,
    /// Notify on name changes
    #[serde(default)]
    pub names_notification_enabled: bool,
    /// System notifications
    #[serde(default)]
    pub system_notification_enabled: bool,
}

/// Partial update for `/main/settings/`. At least one field must be set.
#[derive(Debug, Clone, Serialize, Default)]
pub struct SettingsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    mutual_contacts_available: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    who_watched_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    who_deleted_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    comments_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    location_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    notifications_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    who_watched_notification_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    who_deleted_notification_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    comments_notification_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    birthday_notification_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    distance_notification_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    names_notification_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_notification_enabled: Option<bool>,
}

impl SettingsUpdate {
    /// Creates an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Show common contacts between users.
    #[must_use]
    pub fn mutual_contacts_available(mut self, value: bool) -> Self {
        self.mutual_contacts_available = Some(value);
        self
    }

    /// Record who watched the profile. Must be enabled to use the
    /// who-watched query.
    #[must_use]
    pub fn who_watched_enabled(mut self, value: bool) -> Self {
        self.who_watched_enabled = Some(value);
        self
    }

    /// Record who deleted the account from their contacts. Must be enabled
    /// to use the who-deleted query.
    #[must_use]
    pub fn who_deleted_enabled(mut self, value: bool) -> Self {
        self.who_deleted_enabled = Some(value);
        self
    }

    /// Allow others to comment on the profile.
    #[must_use]
    pub fn comments_enabled(mut self, value: bool) -> Self {
        self.comments_enabled = Some(value);
        self
    }

    /// Allow shared locations.
    #[must_use]
    pub fn location_enabled(mut self, value: bool) -> Self {
        self.location_enabled = Some(value);
        self
    }

    /// Notification language code, e.g. `en`, `iw`.
    #[must_use]
    pub fn language(mut self, value: impl Into<String>) -> Self {
        self.language = Some(value.into());
        self
    }

    /// Master notification switch.
    #[must_use]
    pub fn notifications_enabled(mut self, value: bool) -> Self {
        self.notifications_enabled = Some(value);
        self
    }

    /// Notify on new watchers.
    #[must_use]
    pub fn who_watched_notification_enabled(mut self, value: bool) -> Self {
        self.who_watched_notification_enabled = Some(value);
        self
    }

    /// Notify on deleters.
    #[must_use]
    pub fn who_deleted_notification_enabled(mut self, value: bool) -> Self {
        self.who_deleted_notification_enabled = Some(value);
        self
    }

    /// Notify on new comments.
    #[must_use]
    pub fn comments_notification_enabled(mut self, value: bool) -> Self {
        self.comments_notification_enabled = Some(value);
        self
    }

    /// Notify on contact birthdays.
    #[must_use]
    pub fn birthday_notification_enabled(mut self, value: bool) -> Self {
        self.birthday_notification_enabled = Some(value);
        self
    }

    /// Notify on distance events.
    #[must_use]
    pub fn distance_notification_enabled(mut self, value: bool) -> Self {
        self.distance_notification_enabled = Some(value);
        self
    }

    /// Notify on name changes.
    #[must_use]
    pub fn names_notification_enabled(mut self, value: bool) -> Self {
        self.names_notification_enabled = Some(value);
        self
    }

    /// System notifications.
    #[must_use]
    pub fn system_notification_enabled(mut self, value: bool) -> Self {
        self.system_notification_enabled = Some(value);
        self
    }

    /// Whether any field has been set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        serde_json::to_value(self)
            .map(|v| v.as_object().map(|o| o.is_empty()).unwrap_or(true))
            .unwrap_or(true)
    }
}
