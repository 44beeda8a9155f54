//! HTTP transport layer for the Slack client.
//!
//! The transport performs one authenticated form POST and hands back the raw
//! response body. Interpreting the `ok`/`error` envelope is left to the
//! calling operation.

use crate::context::RequestContext;
use crate::errors::{SlackResult, TransportError};
use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, Method, StatusCode};
use reqwest::{Client, ClientBuilder, Response};
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// HTTP transport trait for making API requests
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send a form-encoded request and return the response body.
    ///
    /// Must fail with [`TransportError::Cancelled`] or [`TransportError::Timeout`]
    /// once `ctx` is cancelled or past its deadline.
    async fn send_form(&self, request: FormRequest, ctx: &RequestContext) -> SlackResult<Bytes>;
}

/// Form-encoded request
#[derive(Debug, Clone)]
pub struct FormRequest {
    /// HTTP method
    pub method: Method,
    /// Full request URL
    pub url: String,
    /// Request headers
    pub headers: HeaderMap,
    /// Form fields, in insertion order
    pub fields: Vec<(String, String)>,
}

impl FormRequest {
    /// Create a new form POST request
    pub fn post(url: impl Into<String>, headers: HeaderMap) -> Self {
        Self {
            method: Method::POST,
            url: url.into(),
            headers,
            fields: Vec::new(),
        }
    }

    /// Add a form field
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// Add several form fields
    pub fn fields<I, K, V>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.fields
            .extend(fields.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Look up a field value by name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Default HTTP transport implementation using reqwest
pub struct ReqwestTransport {
    client: Client,
    default_timeout: Duration,
}

impl ReqwestTransport {
    /// Create a new transport with the given timeout
    pub fn new(timeout: Duration) -> SlackResult<Self> {
        let client = ClientBuilder::new()
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .build()
            .map_err(|e| TransportError::Http(e.to_string()))?;

        Ok(Self {
            client,
            default_timeout: timeout,
        })
    }

    /// Create a new transport with a pre-built client
    pub fn with_client(client: Client, default_timeout: Duration) -> Self {
        Self {
            client,
            default_timeout,
        }
    }

    async fn read_body(response: Response) -> SlackResult<Bytes> {
        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(60);

            warn!(retry_after, "Rate limited by Slack");
            return Err(TransportError::RateLimited {
                retry_after: Duration::from_secs(retry_after),
                tier: response
                    .headers()
                    .get("X-Slack-Rate-Limit-Tier")
                    .and_then(|v| v.to_str().ok())
                    .map(String::from),
            }
            .into());
        }

        if !status.is_success() {
            warn!(status = %status, "Request failed with non-success status");
            return Err(TransportError::Status {
                status: status.as_u16(),
            }
            .into());
        }

        let body = response.bytes().await.map_err(TransportError::from)?;
        debug!(status = %status, bytes = body.len(), "Received response");
        Ok(body)
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    #[instrument(skip(self, request, ctx), fields(url = %request.url))]
    async fn send_form(&self, request: FormRequest, ctx: &RequestContext) -> SlackResult<Bytes> {
        let timeout = match ctx.remaining() {
            Some(left) => self.default_timeout.min(left),
            None => self.default_timeout,
        };

        let builder = self
            .client
            .request(request.method, &request.url)
            .headers(request.headers)
            .form(&request.fields)
            .timeout(timeout);

        ctx.run(async move {
            let response = builder.send().await.map_err(TransportError::from)?;
            Self::read_body(response).await
        })
        .await
    }
}

impl std::fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestTransport")
            .field("default_timeout", &self.default_timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_request_builder() {
        let headers = HeaderMap::new();
        let request = FormRequest::post("https://slack.com/api/bookmarks.add", headers)
            .field("channel_id", "C123")
            .field("title", "Docs");

        assert_eq!(request.method, Method::POST);
        assert_eq!(request.fields.len(), 2);
        assert_eq!(
            request.fields[0],
            ("channel_id".to_string(), "C123".to_string())
        );
        assert_eq!(request.get("title"), Some("Docs"));
        assert_eq!(request.get("emoji"), None);
    }

    #[test]
    fn test_form_request_fields_extend() {
        let request = FormRequest::post("https://slack.com/api/bookmarks.list", HeaderMap::new())
            .fields(vec![("channel_id", "C1"), ("cursor", "")]);

        assert_eq!(request.get("channel_id"), Some("C1"));
        assert_eq!(request.get("cursor"), Some(""));
        assert_eq!(request.fields.len(), 2);
    }

    #[tokio::test]
    async fn test_cancelled_context_sends_nothing() {
        let transport = ReqwestTransport::new(Duration::from_secs(1)).unwrap();
        let token = tokio_util::sync::CancellationToken::new();
        token.cancel();

        // Port 9 on localhost is never contacted because the context is already done.
        let request = FormRequest::post("http://127.0.0.1:9/bookmarks.add", HeaderMap::new());
        let result = transport
            .send_form(request, &RequestContext::with_cancellation(token))
            .await;

        assert!(result.unwrap_err().is_cancelled());
    }
}
