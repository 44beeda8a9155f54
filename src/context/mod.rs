//! Request context: explicit cancellation and deadlines.
//!
//! Every operation has a `*_with_context` variant that threads a
//! [`RequestContext`] into the transport. The plain variants use
//! [`RequestContext::background`], which is never cancelled and has no
//! deadline beyond the transport's own timeout.

use crate::errors::{SlackResult, TransportError};
use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Cancellation scope for a single API call
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    token: CancellationToken,
    deadline: Option<Instant>,
}

impl RequestContext {
    /// A context that is never cancelled and has no deadline
    pub fn background() -> Self {
        Self::default()
    }

    /// A context cancelled when `token` is cancelled
    pub fn with_cancellation(token: CancellationToken) -> Self {
        Self {
            token,
            deadline: None,
        }
    }

    /// Set a deadline `timeout` from now; an earlier existing deadline wins
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Set an absolute deadline; an earlier existing deadline wins
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(match self.deadline {
            Some(existing) => existing.min(deadline),
            None => deadline,
        });
        self
    }

    /// The cancellation token backing this context
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    /// The deadline, if any
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Time left until the deadline, zero if it already passed
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|d| d.saturating_duration_since(Instant::now()))
    }

    /// Check if the context was cancelled
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Fail fast if the context is already done
    pub fn check(&self) -> SlackResult<()> {
        if self.is_cancelled() {
            return Err(TransportError::Cancelled.into());
        }
        if matches!(self.remaining(), Some(left) if left.is_zero()) {
            return Err(TransportError::Timeout.into());
        }
        Ok(())
    }

    /// Run `fut` until it completes, the context is cancelled, or the deadline passes.
    ///
    /// Whatever `fut` had in flight is dropped on cancellation.
    pub async fn run<F, T>(&self, fut: F) -> SlackResult<T>
    where
        F: Future<Output = SlackResult<T>>,
    {
        self.check()?;

        let deadline = self.deadline;
        let expired = async move {
            match deadline {
                Some(at) => tokio::time::sleep_until(at).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            biased;
            _ = self.token.cancelled() => Err(TransportError::Cancelled.into()),
            _ = expired => Err(TransportError::Timeout.into()),
            result = fut => result,
        }
    }
}
