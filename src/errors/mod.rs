//! Error types for the Slack bookmarks client.
//!
//! Every failed call surfaces exactly one of three outcomes: a local
//! validation failure (nothing was sent), a transport failure (the request
//! never produced a decodable envelope), or an API error (Slack answered
//! with `ok: false`).

use std::time::Duration;
use thiserror::Error;

/// Result type for Slack operations
pub type SlackResult<T> = Result<T, SlackError>;

/// Root error type for the Slack bookmarks client
#[derive(Error, Debug)]
pub enum SlackError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Authentication error (no usable token)
    #[error("Authentication error: {0}")]
    Authentication(#[from] AuthenticationError),

    /// Client-side precondition violated; no request was sent
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Network, HTTP or decoding failure below the API envelope
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// Slack responded with `ok: false`
    #[error("{error}")]
    Api {
        /// Slack error code, verbatim from the envelope
        error: String,
    },
}

impl SlackError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "SLACK_CONFIG",
            Self::Authentication(_) => "SLACK_AUTH",
            Self::Validation(_) => "SLACK_VALIDATION",
            Self::Transport(_) => "SLACK_TRANSPORT",
            Self::Api { .. } => "SLACK_API",
        }
    }

    /// Create an API error from the envelope's `error` field
    pub fn api(error: impl Into<String>) -> Self {
        Self::Api {
            error: error.into(),
        }
    }

    /// The Slack error string when this is an API error
    pub fn api_error(&self) -> Option<&str> {
        match self {
            Self::Api { error } => Some(error),
            _ => None,
        }
    }

    /// Check if this error was raised before any request was sent
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error came from the transport
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Check if Slack rejected the call
    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api { .. })
    }

    /// Check if the call was cancelled by its context
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Transport(TransportError::Cancelled))
    }

    /// Get retry-after duration if applicable
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            Self::Transport(TransportError::RateLimited { retry_after, .. }) => Some(*retry_after),
            _ => None,
        }
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigurationError {
    /// Missing token
    #[error("Bot or user token is missing")]
    MissingToken,

    /// Invalid token format
    #[error("Invalid token format: {0}")]
    InvalidToken(String),

    /// Invalid configuration
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration {
        /// Error message
        message: String,
    },
}

/// Authentication errors
#[derive(Error, Debug)]
pub enum AuthenticationError {
    /// No token configured for the request
    #[error("No token available for request")]
    MissingToken,

    /// Token cannot be placed in a header
    #[error("Token contains characters not allowed in a header")]
    InvalidHeader,
}

/// Client-side validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A `message` or `file` bookmark without an entity id
    #[error("bookmark of type {bookmark_type} requires an entity_id")]
    MissingEntityId {
        /// The bookmark type that requires it
        bookmark_type: String,
    },

    /// A `link` bookmark without a link
    #[error("bookmark of type link requires a link")]
    MissingLink,

    /// A required request field was empty
    #[error("{field} is required")]
    MissingField {
        /// Wire name of the field
        field: &'static str,
    },
}

/// Transport errors
#[derive(Error, Debug)]
pub enum TransportError {
    /// Connection failed
    #[error("Connection failed: {message}")]
    ConnectionFailed {
        /// Error message
        message: String,
    },

    /// Request timed out or the context deadline elapsed
    #[error("Request timed out")]
    Timeout,

    /// The request context was cancelled
    #[error("Request cancelled")]
    Cancelled,

    /// Rate limited by Slack (HTTP 429)
    #[error("Rate limited, retry after {retry_after:?}")]
    RateLimited {
        /// Duration to wait before retrying
        retry_after: Duration,
        /// Rate limit tier
        tier: Option<String>,
    },

    /// Non-success HTTP status
    #[error("Unexpected HTTP status {status}")]
    Status {
        /// HTTP status code
        status: u16,
    },

    /// Response body is not a valid envelope
    #[error("Deserialization error: {message}")]
    Decode {
        /// Error message
        message: String,
    },

    /// Other HTTP error
    #[error("HTTP error: {0}")]
    Http(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_connect() {
            TransportError::ConnectionFailed {
                message: err.to_string(),
            }
        } else {
            TransportError::Http(err.to_string())
        }
    }
}

impl From<serde_json::Error> for TransportError {
    fn from(err: serde_json::Error) -> Self {
        TransportError::Decode {
            message: err.to_string(),
        }
    }
}
