//! Profile comments and their moderation states.

use crate::model::user::User;
use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Moderation state of a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentStatus {
    /// Visible on the profile
    Approved,
    /// Hidden by the profile owner
    Ignored,
    /// Awaiting the profile owner's approval
    Waiting,
}

/// A comment left on a user profile.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct Comment {
    /// Comment id
    #[serde(default)]
    pub id: Option<i64>,
    /// The comment text
    #[serde(default)]
    pub message: Option<String>,
    /// Moderation state
    #[serde(default)]
    pub status: Option<CommentStatus>,
    /// Who wrote it
    #[serde(default)]
    pub author: Option<User>,
    /// Number of likes
    #[serde(default)]
    pub like_count: u32,
    /// Whether the requesting account liked it
    #[serde(default)]
    pub is_liked: bool,
    /// Whether comments are blocked on the target profile
    #[serde(default)]
    pub comments_blocked: bool,
    /// Creation time
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Comment {
    /// Whether the comment is visible on the profile.
    #[must_use]
    pub fn is_approved(&self) -> bool {
        self.status == Some(CommentStatus::Approved)
    }
}

/// Response of `/main/comments/list/{uuid}`.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, Default)]
pub struct CommentsResponse {
    /// The comments on the profile
    #[serde(default)]
    pub comments: Vec<Comment>,
    /// Total count
    #[serde(default)]
    pub count: u32,
    /// The requesting account's own comment, if any
    #[serde(default)]
    pub user_comment: Option<Comment>,
}

/// A like on a comment, with who and when.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct CommentLike {
    /// Like id
    #[serde(default)]
    pub id: Option<i64>,
    /// Who liked
    #[serde(default)]
    pub author: Option<User>,
    /// When
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Response of `/main/comments/retrieve/{id}`.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, Default)]
pub struct CommentDetails {
    /// The comment text
    #[serde(default)]
    pub message: Option<String>,
    /// Number of likes
    #[serde(default)]
    pub like_count: u32,
    /// Who liked, with timestamps
    #[serde(default)]
    pub comment_likes: Vec<CommentLike>,
}
