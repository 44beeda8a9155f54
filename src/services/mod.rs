//! Slack Web API services.

pub mod bookmarks;

pub use bookmarks::{BookmarksService, BookmarksServiceTrait};
