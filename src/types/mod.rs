//! Common types for the Slack API.
//!
//! Defines identifiers and the response envelope shared by every method.

use crate::errors::{SlackError, SlackResult, TransportError};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::warn;

/// Slack channel ID
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelId(pub String);

impl ChannelId {
    /// Create a new channel ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if this is a public channel ID (starts with C)
    pub fn is_public_channel(&self) -> bool {
        self.0.starts_with('C')
    }

    /// Check if this is a private channel ID (starts with G)
    pub fn is_private_channel(&self) -> bool {
        self.0.starts_with('G')
    }

    /// Check if this is a DM channel ID (starts with D)
    pub fn is_dm(&self) -> bool {
        self.0.starts_with('D')
    }
}

impl From<String> for ChannelId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ChannelId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for ChannelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The `ok`/`error` envelope every Slack Web API response carries
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SlackResponse {
    /// Success indicator
    pub ok: bool,
    /// Error code when `ok` is false
    #[serde(default)]
    pub error: Option<String>,
    /// Non-fatal warning
    #[serde(default)]
    pub warning: Option<String>,
}

impl SlackResponse {
    /// Decode a raw method response and unwrap its payload.
    ///
    /// The envelope is checked before the payload is decoded, so an
    /// `ok: false` body that lacks the payload still reports the API error.
    pub fn decode<T: DeserializeOwned>(body: &[u8]) -> SlackResult<T> {
        let value: serde_json::Value =
            serde_json::from_slice(body).map_err(TransportError::from)?;
        SlackResponse::deserialize(&value)
            .map_err(TransportError::from)?
            .into_result()?;
        let payload = T::deserialize(value).map_err(TransportError::from)?;
        Ok(payload)
    }

    /// Turn a failed envelope into [`SlackError::Api`]
    pub fn into_result(self) -> SlackResult<()> {
        if let Some(warning) = &self.warning {
            warn!(warning = %warning, "Slack returned a warning");
        }
        if self.ok {
            Ok(())
        } else {
            let error = self.error.unwrap_or_else(|| "unknown_error".to_string());
            warn!(error = %error, "Slack API call failed");
            Err(SlackError::api(error))
        }
    }
}
