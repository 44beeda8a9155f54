//! Mock implementations for testing.
//!
//! Provides a recording mock transport for London-School TDD.

use crate::context::RequestContext;
use crate::errors::{SlackError, SlackResult, TransportError};
use crate::transport::{FormRequest, HttpTransport};
use async_trait::async_trait;
use bytes::Bytes;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

/// Transport-level failure a mock can simulate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockFailure {
    /// Connection refused
    ConnectionRefused,
    /// Request timed out
    Timeout,
    /// HTTP 429 with the given Retry-After seconds
    RateLimited(u64),
    /// Non-success HTTP status
    Status(u16),
}

impl MockFailure {
    fn into_error(self) -> TransportError {
        match self {
            Self::ConnectionRefused => TransportError::ConnectionFailed {
                message: "connection refused".to_string(),
            },
            Self::Timeout => TransportError::Timeout,
            Self::RateLimited(secs) => TransportError::RateLimited {
                retry_after: Duration::from_secs(secs),
                tier: None,
            },
            Self::Status(status) => TransportError::Status { status },
        }
    }
}

/// Mock response configuration
#[derive(Debug, Clone)]
pub struct MockResponse {
    /// Response body
    pub body: String,
    /// Delay before response
    pub delay: Option<Duration>,
    /// Failure to return instead of the body
    pub failure: Option<MockFailure>,
}

impl MockResponse {
    /// Create a successful JSON response
    pub fn json(value: serde_json::Value) -> Self {
        Self::ok(value.to_string())
    }

    /// Create a successful response with raw body
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            delay: None,
            failure: None,
        }
    }

    /// Create a Slack API error response (`ok: false`)
    pub fn slack_error(error_code: &str) -> Self {
        Self::json(serde_json::json!({ "ok": false, "error": error_code }))
    }

    /// Create a transport failure
    pub fn failure(failure: MockFailure) -> Self {
        Self {
            body: String::new(),
            delay: None,
            failure: Some(failure),
        }
    }

    /// Add delay to response
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

/// Recorded request for verification
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Request URL
    pub url: String,
    /// Request method
    pub method: String,
    /// Form fields
    pub fields: Vec<(String, String)>,
    /// Request headers
    pub headers: Vec<(String, String)>,
}

impl RecordedRequest {
    /// Look up a form field by name
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Look up a header by name (case-insensitive)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Mock HTTP transport for testing
pub struct MockHttpTransport {
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    default_response: Option<MockResponse>,
}

impl MockHttpTransport {
    /// Create a new mock transport
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            default_response: None,
        }
    }

    /// Add a response to the queue
    pub fn add_response(self, response: MockResponse) -> Self {
        self.responses.lock().push_back(response);
        self
    }

    /// Add a JSON response
    pub fn add_json_response(self, value: serde_json::Value) -> Self {
        self.add_response(MockResponse::json(value))
    }

    /// Set default response when queue is empty
    pub fn with_default_response(mut self, response: MockResponse) -> Self {
        self.default_response = Some(response);
        self
    }

    /// Get recorded requests
    pub fn recorded_requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }

    /// Get the last recorded request
    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.requests.lock().last().cloned()
    }

    /// Number of requests that reached the transport
    pub fn call_count(&self) -> usize {
        self.requests.lock().len()
    }

    /// Get remaining response count
    pub fn remaining_responses(&self) -> usize {
        self.responses.lock().len()
    }

    fn record_request(&self, request: &FormRequest) {
        let headers = request
            .headers
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
            .collect();

        self.requests.lock().push(RecordedRequest {
            url: request.url.clone(),
            method: request.method.to_string(),
            fields: request.fields.clone(),
            headers,
        });
    }

    fn next_response(&self) -> Option<MockResponse> {
        let mut queue = self.responses.lock();
        queue.pop_front().or_else(|| self.default_response.clone())
    }
}

impl Default for MockHttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for MockHttpTransport {
    async fn send_form(&self, request: FormRequest, ctx: &RequestContext) -> SlackResult<Bytes> {
        ctx.check()?;
        self.record_request(&request);

        let response = self
            .next_response()
            .ok_or_else(|| TransportError::Http("No mock response configured".to_string()))?;

        ctx.run(async move {
            if let Some(delay) = response.delay {
                tokio::time::sleep(delay).await;
            }
            match response.failure {
                Some(failure) => Err(SlackError::from(failure.into_error())),
                None => Ok(Bytes::from(response.body)),
            }
        })
        .await
    }
}

impl std::fmt::Debug for MockHttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockHttpTransport")
            .field("pending_responses", &self.responses.lock().len())
            .field("recorded_requests", &self.requests.lock().len())
            .finish()
    }
}
