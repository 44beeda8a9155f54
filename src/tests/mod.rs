//! Tests for the Slack bookmarks client.
