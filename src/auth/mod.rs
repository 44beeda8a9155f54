//! Authentication management for the Slack client.
//!
//! Turns the configured token into request headers.

use crate::config::{SlackConfig, SlackToken, TokenType};
use crate::errors::{AuthenticationError, SlackError, SlackResult};
use http::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use std::sync::Arc;

/// Authentication manager for Slack API requests
#[derive(Clone)]
pub struct AuthManager {
    config: Arc<SlackConfig>,
}

impl AuthManager {
    /// Create a new authentication manager
    pub fn new(config: Arc<SlackConfig>) -> Self {
        Self { config }
    }

    /// Get headers for API request with bot token
    pub fn get_bot_headers(&self) -> SlackResult<HeaderMap> {
        let token = self
            .config
            .bot_token()
            .ok_or(SlackError::Authentication(AuthenticationError::MissingToken))?;
        self.build_headers(token)
    }

    /// Get headers for API request with user token
    pub fn get_user_headers(&self) -> SlackResult<HeaderMap> {
        let token = self
            .config
            .user_token()
            .ok_or(SlackError::Authentication(AuthenticationError::MissingToken))?;
        self.build_headers(token)
    }

    /// Get headers using the primary token (bot preferred, then user)
    pub fn get_primary_headers(&self) -> SlackResult<HeaderMap> {
        let token = self
            .config
            .primary_token()
            .ok_or(SlackError::Authentication(AuthenticationError::MissingToken))?;
        self.build_headers(token)
    }

    fn build_headers(&self, token: &SlackToken) -> SlackResult<HeaderMap> {
        let mut headers = self.config.default_headers.clone();

        let mut auth_value = HeaderValue::from_str(&format!("Bearer {}", token.expose()))
            .map_err(|_| SlackError::Authentication(AuthenticationError::InvalidHeader))?;
        auth_value.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth_value);

        Ok(headers)
    }

    /// Get the type of the token used for primary requests
    pub fn primary_token_type(&self) -> Option<TokenType> {
        self.config.primary_token().map(|t| t.token_type())
    }
}

impl std::fmt::Debug for AuthManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthManager")
            .field("has_bot_token", &self.config.bot_token().is_some())
            .field("has_user_token", &self.config.user_token().is_some())
            .finish()
    }
}
