//! Request types for bookmarks service.

use crate::errors::ValidationError;
use crate::types::ChannelId;
use serde::{Deserialize, Serialize};

/// Bookmark type pointing at a URL
pub const BOOKMARK_TYPE_LINK: &str = "link";
/// Bookmark type pointing at a message
pub const BOOKMARK_TYPE_MESSAGE: &str = "message";
/// Bookmark type pointing at a file
pub const BOOKMARK_TYPE_FILE: &str = "file";

/// Fields of a bookmark as submitted to `bookmarks.add`.
///
/// Slack echoes these back inside every [`Bookmark`](super::Bookmark).
/// Optional fields left as `None` or set to an empty string are not sent.
/// The type is kept as an open string: only `link`, `message` and `file` are
/// checked locally, anything else is passed through for Slack to judge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkOptions {
    /// Channel to add bookmark to
    #[serde(default)]
    pub channel_id: ChannelId,
    /// Title of the bookmark
    #[serde(default)]
    pub title: String,
    /// Type of bookmark
    #[serde(rename = "type", default)]
    pub bookmark_type: String,
    /// Emoji to use as the icon
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    /// Message or file the bookmark refers to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<String>,
    /// Link URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// ID of the parent bookmark folder.
    ///
    /// Sent as `parent_id`; Slack echoes it back as `parent`.
    #[serde(rename = "parent", default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

impl BookmarkOptions {
    /// Create a bookmark of any type
    pub fn new(
        channel: impl Into<ChannelId>,
        title: impl Into<String>,
        bookmark_type: impl Into<String>,
    ) -> Self {
        Self {
            channel_id: channel.into(),
            title: title.into(),
            bookmark_type: bookmark_type.into(),
            ..Default::default()
        }
    }

    /// Create a new link bookmark
    pub fn new_link(
        channel: impl Into<ChannelId>,
        title: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self::new(channel, title, BOOKMARK_TYPE_LINK).link(link)
    }

    /// Create a bookmark to a message
    pub fn new_message(
        channel: impl Into<ChannelId>,
        title: impl Into<String>,
        entity_id: impl Into<String>,
    ) -> Self {
        Self::new(channel, title, BOOKMARK_TYPE_MESSAGE).entity_id(entity_id)
    }

    /// Create a bookmark to a file
    pub fn new_file(
        channel: impl Into<ChannelId>,
        title: impl Into<String>,
        entity_id: impl Into<String>,
    ) -> Self {
        Self::new(channel, title, BOOKMARK_TYPE_FILE).entity_id(entity_id)
    }

    /// Set the emoji icon
    pub fn emoji(mut self, emoji: impl Into<String>) -> Self {
        self.emoji = Some(emoji.into());
        self
    }

    /// Set the referenced message or file
    pub fn entity_id(mut self, entity_id: impl Into<String>) -> Self {
        self.entity_id = Some(entity_id.into());
        self
    }

    /// Set the link URL
    pub fn link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    /// Set the parent folder
    pub fn parent_id(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    /// Check the fields each bookmark type requires
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.bookmark_type.as_str() {
            BOOKMARK_TYPE_MESSAGE | BOOKMARK_TYPE_FILE if !is_set(&self.entity_id) => {
                Err(ValidationError::MissingEntityId {
                    bookmark_type: self.bookmark_type.clone(),
                })
            }
            BOOKMARK_TYPE_LINK if !is_set(&self.link) => Err(ValidationError::MissingLink),
            _ => Ok(()),
        }
    }

    /// Form fields for `bookmarks.add`
    pub fn to_form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("channel_id", self.channel_id.to_string()),
            ("title", self.title.clone()),
            ("type", self.bookmark_type.clone()),
        ];
        push_non_empty(&mut fields, "emoji", &self.emoji);
        push_non_empty(&mut fields, "entity_id", &self.entity_id);
        push_non_empty(&mut fields, "link", &self.link);
        push_non_empty(&mut fields, "parent_id", &self.parent_id);
        fields
    }
}

/// Request to edit a bookmark
///
/// Unlike [`BookmarkOptions`], a field set to an empty string is sent as-is,
/// which clears it on the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditBookmarkRequest {
    /// Bookmark ID to edit
    pub bookmark_id: String,
    /// Channel containing the bookmark
    pub channel_id: ChannelId,
    /// New title
    pub title: Option<String>,
    /// New emoji
    pub emoji: Option<String>,
    /// New link
    pub link: Option<String>,
}

impl EditBookmarkRequest {
    /// Create a new edit request
    pub fn new(bookmark_id: impl Into<String>, channel: impl Into<ChannelId>) -> Self {
        Self {
            bookmark_id: bookmark_id.into(),
            channel_id: channel.into(),
            title: None,
            emoji: None,
            link: None,
        }
    }

    /// Set new title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set new emoji
    pub fn emoji(mut self, emoji: impl Into<String>) -> Self {
        self.emoji = Some(emoji.into());
        self
    }

    /// Set new link
    pub fn link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    /// Check that a bookmark is addressed
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("bookmark_id", &self.bookmark_id)
    }

    /// Form fields for `bookmarks.edit`
    pub fn to_form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("bookmark_id", self.bookmark_id.clone()),
            ("channel_id", self.channel_id.to_string()),
        ];
        for (name, value) in [
            ("title", &self.title),
            ("emoji", &self.emoji),
            ("link", &self.link),
        ] {
            if let Some(value) = value {
                fields.push((name, value.clone()));
            }
        }
        fields
    }
}

/// Request to list bookmarks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListBookmarksRequest {
    /// Channel to list bookmarks from
    pub channel_id: ChannelId,
}

impl ListBookmarksRequest {
    /// Create a new list request
    pub fn new(channel: impl Into<ChannelId>) -> Self {
        Self {
            channel_id: channel.into(),
        }
    }

    /// Form fields for `bookmarks.list`
    pub fn to_form_fields(&self) -> Vec<(&'static str, String)> {
        vec![("channel_id", self.channel_id.to_string())]
    }
}

/// Request to remove a bookmark
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveBookmarkRequest {
    /// Bookmark ID to remove
    pub bookmark_id: String,
    /// Channel containing the bookmark
    pub channel_id: ChannelId,
    /// Quip section the bookmark lives in
    pub quip_section_id: Option<String>,
}

impl RemoveBookmarkRequest {
    /// Create a new remove request
    pub fn new(bookmark_id: impl Into<String>, channel: impl Into<ChannelId>) -> Self {
        Self {
            bookmark_id: bookmark_id.into(),
            channel_id: channel.into(),
            quip_section_id: None,
        }
    }

    /// Set the Quip section
    pub fn quip_section_id(mut self, section: impl Into<String>) -> Self {
        self.quip_section_id = Some(section.into());
        self
    }

    /// Check that a bookmark is addressed
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("bookmark_id", &self.bookmark_id)
    }

    /// Form fields for `bookmarks.remove`
    pub fn to_form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("bookmark_id", self.bookmark_id.clone()),
            ("channel_id", self.channel_id.to_string()),
        ];
        push_non_empty(&mut fields, "quip_section_id", &self.quip_section_id);
        fields
    }
}

fn is_set(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

fn push_non_empty(fields: &mut Vec<(&'static str, String)>, name: &'static str, value: &Option<String>) {
    if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
        fields.push((name, value.to_string()));
    }
}

fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        Err(ValidationError::MissingField { field })
    } else {
        Ok(())
    }
}
