//! Slack Bookmarks Client
//!
//! Typed client for the Slack `bookmarks.*` Web API methods:
//! - Client-side validation of type-dependent required fields
//! - Form-encoded requests through a pluggable [`transport::HttpTransport`]
//! - Explicit cancellation and deadlines via [`context::RequestContext`]
//! - Envelope (`ok`/`error`) decoding into a single [`SlackError`] taxonomy
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use slack_bookmarks::services::bookmarks::{BookmarkOptions, BookmarksServiceTrait};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create client from environment
//!     let client = slack_bookmarks::create_client_from_env()?;
//!
//!     // Pin a link to a channel
//!     let bookmark = client
//!         .bookmarks()
//!         .add(BookmarkOptions::new_link("C0123456789", "Runbook", "https://example.com/runbook"))
//!         .await?;
//!
//!     println!("Bookmark created: {}", bookmark.id);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

// Core modules
pub mod auth;
pub mod client;
pub mod config;
pub mod context;
pub mod errors;
pub mod transport;
pub mod types;

// Services
pub mod services;

// Testing utilities
pub mod fixtures;
pub mod mocks;

// Tests
#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use client::SlackClient;
pub use config::{SlackConfig, SlackConfigBuilder};
pub use context::RequestContext;
pub use errors::{SlackError, SlackResult};

/// Default base URL for Slack API
pub const DEFAULT_BASE_URL: &str = "https://slack.com/api";

/// Default timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Create a Slack client with the given configuration
pub fn create_client(config: SlackConfig) -> SlackResult<SlackClient> {
    SlackClient::new(config)
}

/// Create a Slack client from environment variables
///
/// Reads:
/// - `SLACK_BOT_TOKEN` - Bot token (xoxb-*)
/// - `SLACK_USER_TOKEN` - User token (xoxp-*)
/// - `SLACK_BASE_URL` - API base URL override
/// - `SLACK_TIMEOUT` - Request timeout in seconds
pub fn create_client_from_env() -> SlackResult<SlackClient> {
    let config = SlackConfig::from_env()?;
    create_client(config)
}
