//! Slack client implementation.
//!
//! Owns the configuration, the auth manager and one shared transport, and
//! hands them to each service. Nothing is global: several clients with
//! different tokens can live side by side.

use crate::auth::AuthManager;
use crate::config::SlackConfig;
use crate::errors::SlackResult;
use crate::services::BookmarksService;
use crate::transport::{HttpTransport, ReqwestTransport};
use std::sync::Arc;

/// Main Slack client
#[derive(Clone)]
pub struct SlackClient {
    config: Arc<SlackConfig>,
    auth: AuthManager,
    transport: Arc<dyn HttpTransport>,
    bookmarks_service: BookmarksService,
}

impl SlackClient {
    /// Create a new Slack client with the given configuration
    pub fn new(config: SlackConfig) -> SlackResult<Self> {
        let transport = Arc::new(ReqwestTransport::new(config.timeout)?);
        Self::with_transport(config, transport)
    }

    /// Create a new Slack client with a custom transport
    pub fn with_transport(
        config: SlackConfig,
        transport: Arc<dyn HttpTransport>,
    ) -> SlackResult<Self> {
        config.validate()?;

        let config = Arc::new(config);
        let auth = AuthManager::new(config.clone());
        let base_url = config.build_url("");

        let bookmarks_service = BookmarksService::new(transport.clone(), auth.clone(), base_url);

        Ok(Self {
            config,
            auth,
            transport,
            bookmarks_service,
        })
    }

    /// Get the configuration
    pub fn config(&self) -> &SlackConfig {
        &self.config
    }

    /// Get the authentication manager
    pub fn auth_manager(&self) -> &AuthManager {
        &self.auth
    }

    /// Get the transport
    pub fn transport(&self) -> &Arc<dyn HttpTransport> {
        &self.transport
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        self.config.base_url.as_str()
    }

    /// Build a full URL for an API method
    pub fn build_url(&self, method: &str) -> String {
        self.config.build_url(method)
    }

    /// Get the bookmarks service
    pub fn bookmarks(&self) -> &BookmarksService {
        &self.bookmarks_service
    }
}

impl std::fmt::Debug for SlackClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlackClient")
            .field("config", &self.config)
            .field("auth", &self.auth)
            .finish()
    }
}
