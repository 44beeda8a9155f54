//! Bookmarks service for Slack API.
//!
//! Adds, edits, lists and removes the bookmarks pinned to a channel header.

mod requests;
mod responses;
mod service;

pub use requests::*;
pub use responses::*;
pub use service::*;
