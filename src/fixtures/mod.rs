//! Test fixtures for Slack API responses.
//!
//! Provides realistic bookmark payloads for unit tests.

use crate::services::bookmarks::{Bookmark, BookmarkOptions};
use serde_json::{json, Value};

/// Create a fixture link bookmark as Slack returns it
pub fn link_bookmark() -> Bookmark {
    Bookmark {
        id: "Bk01ABCDEF".to_string(),
        date_created: 1700000000,
        date_updated: 1700000000,
        rank: "U".to_string(),
        last_updated_by_user_id: Some("U1234567890".to_string()),
        last_updated_by_team_id: Some("T1234567890".to_string()),
        shortcut_id: None,
        app_id: None,
        icon_url: Some("https://example.com/favicon.ico".to_string()),
        options: BookmarkOptions::new_link("C1234567890", "Runbook", "https://example.com/runbook")
            .emoji(":book:"),
    }
}

/// Create a fixture message bookmark
pub fn message_bookmark() -> Bookmark {
    Bookmark {
        id: "Bk02GHIJKL".to_string(),
        date_created: 1700000500,
        date_updated: 1700000900,
        rank: "V".to_string(),
        last_updated_by_user_id: Some("U1234567890".to_string()),
        last_updated_by_team_id: Some("T1234567890".to_string()),
        shortcut_id: None,
        app_id: None,
        icon_url: None,
        options: BookmarkOptions::new_message("C1234567890", "Decision log", "1700000400.000200"),
    }
}

/// Successful envelope wrapping one bookmark
pub fn bookmark_response(bookmark: &Bookmark) -> Value {
    json!({
        "ok": true,
        "bookmark": bookmark,
    })
}

/// Successful `bookmarks.list` envelope
pub fn list_response(bookmarks: &[Bookmark]) -> Value {
    json!({
        "ok": true,
        "bookmarks": bookmarks,
    })
}

/// Failed envelope with the given error code
pub fn error_response(error: &str) -> Value {
    json!({
        "ok": false,
        "error": error,
    })
}
