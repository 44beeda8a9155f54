//! Response types for bookmarks service.

use super::BookmarkOptions;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Payload of bookmarks.add
#[derive(Debug, Clone, Deserialize)]
pub struct AddBookmarkResponse {
    /// Created bookmark
    pub bookmark: Bookmark,
}

/// Payload of bookmarks.edit
#[derive(Debug, Clone, Deserialize)]
pub struct EditBookmarkResponse {
    /// Updated bookmark
    pub bookmark: Bookmark,
}

/// Payload of bookmarks.list
#[derive(Debug, Clone, Deserialize)]
pub struct ListBookmarksResponse {
    /// List of bookmarks
    #[serde(default)]
    pub bookmarks: Vec<Bookmark>,
}

/// Payload of bookmarks.remove
#[derive(Debug, Clone, Deserialize)]
pub struct RemoveBookmarkResponse {}

/// Bookmark representation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    /// Bookmark ID
    pub id: String,
    /// Date created (Unix timestamp)
    #[serde(default)]
    pub date_created: i64,
    /// Date updated (Unix timestamp)
    #[serde(default)]
    pub date_updated: i64,
    /// Opaque sort key among sibling bookmarks
    #[serde(default)]
    pub rank: String,
    /// Last updated by user ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_by_user_id: Option<String>,
    /// Last updated by team ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_by_team_id: Option<String>,
    /// Shortcut ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortcut_id: Option<String>,
    /// App ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
    /// Icon URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    /// Fields as submitted, echoed by Slack
    #[serde(flatten)]
    pub options: BookmarkOptions,
}

impl Bookmark {
    /// Check if this is a link bookmark
    pub fn is_link(&self) -> bool {
        self.options.bookmark_type == super::BOOKMARK_TYPE_LINK
    }

    /// Get the effective URL
    pub fn url(&self) -> Option<&str> {
        self.options.link.as_deref()
    }

    /// Creation time
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.date_created, 0)
    }

    /// Last update time
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.date_updated, 0)
    }
}
